use crate::dom;
use chrono::FixedOffset;
use folio_feed::{
	offset_from_minutes_west, render_error, render_loading, FeedConfig, FeedError, PageControl,
	SubmissionFeed,
};
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::console;

type Listener = Closure<dyn FnMut(web_sys::Event)>;

/// The mounted feed. Every render replaces the container's content and binds fresh listeners to the new buttons.
struct FeedView {
	feed: SubmissionFeed,
	container: web_sys::Element,
	listeners: Vec<Listener>,
	/// The listeners of the previous render. One of them may be running when a render happens, so they are dropped one render later.
	retired_listeners: Vec<Listener>,
}

pub fn boot_submission_feed(config: FeedConfig) {
	let container = dom::document()
		.ok()
		.and_then(|document| document.get_element_by_id(&config.container_id));
	let container = match container {
		Some(container) => container,
		None => {
			console::error_1(
				&format!("Container with id #{} not found.", config.container_id).into(),
			);
			return;
		}
	};
	container.set_inner_html(&render_loading().render_to_string());
	let view = Rc::new(RefCell::new(FeedView {
		feed: SubmissionFeed::new(config),
		container,
		listeners: Vec::new(),
		retired_listeners: Vec::new(),
	}));
	wasm_bindgen_futures::spawn_local(async move {
		let result = match load(&view).await {
			Ok(()) => render_page(&view).map_err(|error| FeedError::Malformed {
				message: dom::js_error_message(&error),
			}),
			Err(error) => Err(error),
		};
		if let Err(error) = result {
			console::error_1(&format!("Failed to fetch submissions: {}", error).into());
			let view = view.borrow();
			view.container
				.set_inner_html(&render_error(&error).render_to_string());
		}
	});
}

async fn load(view: &Rc<RefCell<FeedView>>) -> Result<(), FeedError> {
	let url = view.borrow().feed.config().api_url()?;
	let body = dom::fetch_text(url.as_str()).await?;
	view.borrow_mut().feed.load_json(&body, browser_offset())
}

fn browser_offset() -> FixedOffset {
	let minutes_west = js_sys::Date::new_0().get_timezone_offset();
	offset_from_minutes_west(minutes_west.round() as i32)
}

fn render_page(view: &Rc<RefCell<FeedView>>) -> Result<(), JsValue> {
	let mut view_ref = view.borrow_mut();
	let FeedView {
		feed,
		container,
		listeners,
		retired_listeners,
	} = &mut *view_ref;
	container.set_inner_html(&feed.render().render_to_string());
	let buttons = dom::query_all::<web_sys::HtmlElement>(container, ".page-btn")?;
	let mut new_listeners = Vec::with_capacity(buttons.len());
	for button in buttons {
		let listener = page_button_listener(view.clone());
		button.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
		new_listeners.push(listener);
	}
	*retired_listeners = std::mem::replace(listeners, new_listeners);
	Ok(())
}

fn page_button_listener(view: Rc<RefCell<FeedView>>) -> Listener {
	Closure::wrap(Box::new(move |event: web_sys::Event| {
		event.prevent_default();
		let control = event
			.current_target()
			.and_then(|target| target.dyn_into::<web_sys::HtmlElement>().ok())
			.and_then(|button| {
				let dataset = button.dataset();
				PageControl::from_data(
					dataset.get("page").as_deref(),
					dataset.get("action").as_deref(),
				)
			});
		if let Some(control) = control {
			view.borrow_mut().feed.apply(control);
		}
		if let Err(error) = render_page(&view) {
			console::error_2(&"failed to render submissions".into(), &error);
		}
		dom::scroll_window_to_top();
	}) as Box<dyn FnMut(web_sys::Event)>)
}
