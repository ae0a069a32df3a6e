//! This crate is the browser side of the page. It reads the `ClientProps` the page was rendered with, then boots the submission feed, the section navigation and the scroll-to-top button. Each of them is independent: one failing to boot is logged and does not stop the others.

use folio_common::{ClientProps, PAGE_ROOT_ID};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::console;

mod dom;
mod feed;
mod nav;
mod scroll_to_top;

#[wasm_bindgen(start)]
pub fn start() {
	console_error_panic_hook::set_once();
	let props = read_client_props();
	feed::boot_submission_feed(props.feed);
	if let Err(error) = nav::boot_section_nav(props.nav.clone()) {
		console::error_2(&"failed to boot the section navigation".into(), &error);
	}
	if let Err(error) = scroll_to_top::boot_scroll_to_top(
		&props.nav.scroll_to_top_id,
		props.nav.scroll_to_top_threshold,
	) {
		console::error_2(&"failed to boot the scroll to top button".into(), &error);
	}
}

/// Pages rendered without props, or with props this client cannot read, get the defaults.
fn read_client_props() -> ClientProps {
	let props = dom::document()
		.ok()
		.and_then(|document| document.get_element_by_id(PAGE_ROOT_ID))
		.and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
		.and_then(|element| element.dataset().get("props"));
	let props = match props {
		Some(props) => props,
		None => return ClientProps::default(),
	};
	match serde_json::from_str(&props) {
		Ok(props) => props,
		Err(error) => {
			console::error_1(&format!("failed to parse the client props: {}", error).into());
			ClientProps::default()
		}
	}
}
