use html::{classes, component, html};

/// A pagination button. Numbered buttons carry `data-page`, the others carry `data-action`.
#[component]
pub fn PageButton(
	action: Option<String>,
	active: bool,
	aria_label: String,
	label: String,
	page: Option<usize>,
) {
	let class_name = classes!("page-btn", if active { Some("active") } else { None });
	html! {
		<button
			class={class_name}
			data-action={action}
			data-page={page.map(|page| page.to_string())}
			aria-label={aria_label}
		>
			{label}
		</button>
	}
}

#[component]
pub fn ScrollToTopButton(id: String) {
	html! {
		<button
			class="scroll-to-top"
			id={id}
			aria-label="Scroll to top"
			style="display: none;"
		>
			"\u{2191}"
		</button>
	}
}

#[test]
fn test_page_button() {
	let html = html! {
		<PageButton
			action={None}
			active={true}
			aria_label="Page 2"
			label="2"
			page={Some(2)}
		/>
	}
	.render_to_string();
	insta::assert_snapshot!(html, @r###"<button class="page-btn active" data-page="2" aria-label="Page 2">2</button>"###);
}
