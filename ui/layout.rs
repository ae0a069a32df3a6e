use html::{component, html, raw};

#[component]
pub fn Document(client_js_url: Option<String>, stylesheet_url: Option<String>, title: String) {
	html! {
		<>
			{raw!("<!doctype html>")}
			<html lang="en">
				<head>
					<meta charset="utf-8" />
					<meta name="viewport" content="width=device-width, initial-scale=1" />
					<title>{title}</title>
					{stylesheet_url.map(|href| html! {
						<link rel="stylesheet" href={href} />
					})}
				</head>
				<body>
					{children}
					{client_js_url.map(|src| html! {
						<script type="module">{raw!(module_loader(&src))}</script>
					})}
				</body>
			</html>
		</>
	}
}

/// A module script that imports the wasm-bindgen output at `src` and runs its default export, which instantiates the wasm module and calls its start function.
fn module_loader(src: &str) -> String {
	format!("import init from {:?}; init();", src).replace("</", "<\\/")
}

/// The element the client reads its props from.
#[component]
pub fn PageRoot(id: String, props: String) {
	html! {
		<div id={id} data-props={props}>
			{children}
		</div>
	}
}

#[component]
pub fn MainContent() {
	html! {
		<main class="main-content">{children}</main>
	}
}

/// An empty section that the navigation client fills with a fragment.
#[component]
pub fn Section(id: String) {
	html! {
		<section class="section" id={id}>{children}</section>
	}
}

#[test]
fn test_document() {
	let html = html! {
		<Document client_js_url={Some("/folio_client.js".to_owned())} stylesheet_url={None} title="Folio">
			<Section id="aboutme"></Section>
		</Document>
	}
	.render_to_string();
	assert!(html.starts_with("<!doctype html><html lang=\"en\"><head>"));
	assert!(html.contains("<title>Folio</title>"));
	assert!(html.contains(r#"<section class="section" id="aboutme"></section>"#));
	assert!(html.ends_with(
		r#"<script type="module">import init from "/folio_client.js"; init();</script></body></html>"#
	));
}
