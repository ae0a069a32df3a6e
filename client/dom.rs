use derive_more::Display;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

#[derive(Debug, Display)]
pub enum FetchError {
	#[display(fmt = "HTTP error! status: {}", _0)]
	Status(u16),
	#[display(fmt = "{}", _0)]
	Network(String),
}

impl From<FetchError> for folio_feed::FeedError {
	fn from(error: FetchError) -> folio_feed::FeedError {
		match error {
			FetchError::Status(status) => folio_feed::FeedError::Http { status },
			FetchError::Network(message) => folio_feed::FeedError::network(message),
		}
	}
}

pub fn window() -> Result<web_sys::Window, JsValue> {
	web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub fn document() -> Result<web_sys::Document, JsValue> {
	window()?
		.document()
		.ok_or_else(|| JsValue::from_str("no document"))
}

/// Collect the elements matching `selector`, skipping nodes that are not elements.
pub fn query_all<T: JsCast>(parent: &web_sys::Element, selector: &str) -> Result<Vec<T>, JsValue> {
	Ok(cast_nodes(&parent.query_selector_all(selector)?))
}

pub fn document_query_all<T: JsCast>(selector: &str) -> Result<Vec<T>, JsValue> {
	Ok(cast_nodes(&document()?.query_selector_all(selector)?))
}

fn cast_nodes<T: JsCast>(nodes: &web_sys::NodeList) -> Vec<T> {
	(0..nodes.length())
		.filter_map(|index| nodes.get(index))
		.filter_map(|node| node.dyn_into::<T>().ok())
		.collect()
}

/// GET `url` and read the body as text. A status outside 200-299 is an error and the body is not read.
pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
	let window = window().map_err(|error| FetchError::Network(js_error_message(&error)))?;
	let response = JsFuture::from(window.fetch_with_str(url))
		.await
		.map_err(|error| FetchError::Network(js_error_message(&error)))?;
	let response: web_sys::Response = response
		.dyn_into()
		.map_err(|error| FetchError::Network(js_error_message(&error)))?;
	if !response.ok() {
		return Err(FetchError::Status(response.status()));
	}
	let text = response
		.text()
		.map_err(|error| FetchError::Network(js_error_message(&error)))?;
	let text = JsFuture::from(text)
		.await
		.map_err(|error| FetchError::Network(js_error_message(&error)))?;
	Ok(text.as_string().unwrap_or_default())
}

pub fn js_error_message(error: &JsValue) -> String {
	if let Some(error) = error.dyn_ref::<js_sys::Error>() {
		return String::from(error.message());
	}
	error.as_string().unwrap_or_else(|| format!("{:?}", error))
}

pub fn scroll_window_to_top() {
	if let Ok(window) = window() {
		let options = web_sys::ScrollToOptions::new();
		options.set_top(0.0);
		options.set_behavior(web_sys::ScrollBehavior::Smooth);
		window.scroll_to_with_scroll_to_options(&options);
	}
}
