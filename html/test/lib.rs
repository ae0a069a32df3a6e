#![deny(unused_braces)]

use html::{component, html};

#[component]
fn Greeting(name: String) {
	html! {
		<div class="greeting">{format!("Hello {}", name)}{children}</div>
	}
}

#[test]
fn test_component() {
	let html = html! {
		<Greeting name="World">
			<span>"!"</span>
		</Greeting>
	}
	.render_to_string();
	assert_eq!(html, r#"<div class="greeting">Hello World<span>!</span></div>"#);
}

#[test]
fn test_hyphenated_attributes() {
	let page = 3.to_string();
	let html = html! {
		<button class="page-btn" data-page={page} aria-label="Page 3">"3"</button>
	}
	.render_to_string();
	assert_eq!(
		html,
		r#"<button class="page-btn" data-page="3" aria-label="Page 3">3</button>"#
	);
}

#[test]
fn test_optional_children() {
	let link: Option<String> = None;
	let html = html! {
		<div>
			{link.map(|link| html! { <a href={link}>"link"</a> })}
			<br />
		</div>
	}
	.render_to_string();
	assert_eq!(html, "<div><br /></div>");
}

#[test]
fn test_fragment() {
	let items = vec!["a", "b"];
	let html = html! {
		<>
			{items.into_iter().map(|item| html! { <li>{item}</li> }).collect::<Vec<_>>()}
		</>
	}
	.render_to_string();
	assert_eq!(html, "<li>a</li><li>b</li>");
}

#[test]
fn test_block_expressions() {
	let name = "World".to_owned();
	let count = 2;
	let html = html! {
		<div data-count={count.to_string()}>
			<Greeting name={name.clone()}>
				{
					let suffix = "!".repeat(count);
					suffix
				}
			</Greeting>
			{(count + 1).to_string()}
		</div>
	}
	.render_to_string();
	assert_eq!(
		html,
		r#"<div data-count="2"><div class="greeting">Hello World!!</div>3</div>"#
	);
}
