use crate::dom;
use folio_nav::ScrollToTop;
use wasm_bindgen::{prelude::*, JsCast};

pub fn boot_scroll_to_top(button_id: &str, threshold: f64) -> Result<(), JsValue> {
	let window = dom::window()?;
	let button = dom::document()?
		.get_element_by_id(button_id)
		.ok_or_else(|| JsValue::from_str(&format!("Button with id #{} not found.", button_id)))?
		.dyn_into::<web_sys::HtmlElement>()?;
	let scroll_to_top = ScrollToTop::new(threshold);
	let scroll_button = button.clone();
	let scroll_window = window.clone();
	let scroll_fn = Closure::wrap(Box::new(move |_: web_sys::Event| {
		let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
		let display = scroll_to_top.display(scroll_y);
		scroll_button
			.style()
			.set_property("display", display)
			.ok();
	}) as Box<dyn FnMut(web_sys::Event)>);
	window.add_event_listener_with_callback("scroll", scroll_fn.as_ref().unchecked_ref())?;
	scroll_fn.forget();
	let click_fn = Closure::wrap(Box::new(move |_: web_sys::Event| {
		dom::scroll_window_to_top();
	}) as Box<dyn FnMut(web_sys::Event)>);
	button.add_event_listener_with_callback("click", click_fn.as_ref().unchecked_ref())?;
	click_fn.forget();
	Ok(())
}
