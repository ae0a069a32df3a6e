use html::{classes, component, html};

#[component]
pub fn Sidebar() {
	html! {
		<aside class="sidebar">
			<nav>{children}</nav>
		</aside>
	}
}

#[component]
pub fn SideNavItem(href: String, selected: bool) {
	let selected = if selected { Some("button_active") } else { None };
	let class_name = classes!("button", selected);
	html! {
		<a class={class_name} href={href}>
			{children}
		</a>
	}
}

/// The collapsed navigation shown on narrow screens.
#[component]
pub fn AccordionMenu(hamburger_id: String, accordion_id: String) {
	html! {
		<>
			<button class="hamburger" id={hamburger_id} aria-label="Toggle menu">
				<span></span>
				<span></span>
				<span></span>
			</button>
			<div class="accordion" id={accordion_id}>
				{children}
			</div>
		</>
	}
}

#[test]
fn test_side_nav_item() {
	let html = html! {
		<SideNavItem href="#aboutme" selected={true}>"About Me"</SideNavItem>
	}
	.render_to_string();
	assert_eq!(
		html,
		r##"<a class="button button_active" href="#aboutme">About Me</a>"##
	);
}
