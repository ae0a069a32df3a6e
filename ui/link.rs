use html::{component, html};

/// A link that opens in a new tab.
#[component]
pub fn ExternalLink(class_name: String, href: String) {
	html! {
		<a href={href} target="_blank" class={class_name}>
			{children}
		</a>
	}
}
