use html::{component, html};

#[component]
pub fn Loading(message: String) {
	html! {
		<div class="loading">{message}</div>
	}
}

/// An inline error that replaces the content of a mount point.
#[component]
pub fn ErrorMessage(message: String) {
	html! {
		<div class="error">{format!("Error: {}", message)}</div>
	}
}

#[test]
fn test_error_message() {
	let html = html! {
		<ErrorMessage message="API Error: <nope>" />
	}
	.render_to_string();
	assert_eq!(
		html,
		r#"<div class="error">Error: API Error: &lt;nope&gt;</div>"#
	);
}
