use html::{component, html};

#[component]
pub fn StatContainer() {
	html! {
		<div class="stat-container">{children}</div>
	}
}

#[component]
pub fn StatItem(label: String, value: String) {
	html! {
		<div class="stat-item">
			<div class="stat-number">{value}</div>
			<div class="stat-label">{label}</div>
		</div>
	}
}
