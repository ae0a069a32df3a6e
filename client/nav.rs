use crate::dom;
use folio_nav::{NavConfig, SectionBounds, SectionConfig, SectionNavigator};
use html::html;
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::console;

struct Nav {
	config: NavConfig,
	navigator: RefCell<SectionNavigator>,
}

pub fn boot_section_nav(config: NavConfig) -> Result<(), JsValue> {
	let nav = Rc::new(Nav {
		navigator: RefCell::new(SectionNavigator::from_config(&config)),
		config,
	});
	bind_scroll(&nav)?;
	bind_hover(&nav)?;
	bind_sidebar(&nav)?;
	bind_hamburger(&nav.config)?;
	// The initial section is loaded before anything else, then the others are loaded without waiting on each other.
	wasm_bindgen_futures::spawn_local(async move {
		if let Some(initial) = nav.config.initial() {
			load_section(initial).await;
		}
		update_active_buttons(&nav);
		for section in nav.config.background_sections() {
			let section = section.clone();
			wasm_bindgen_futures::spawn_local(async move {
				load_section(&section).await;
			});
		}
	});
	Ok(())
}

async fn load_section(section: &SectionConfig) {
	let element = dom::document()
		.ok()
		.and_then(|document| document.get_element_by_id(&section.id));
	let content = dom::fetch_text(&section.file).await;
	let element = match element {
		Some(element) => element,
		None => {
			console::error_1(&format!("Section with id #{} not found.", section.id).into());
			return;
		}
	};
	match content {
		Ok(content) => element.set_inner_html(&content),
		Err(error) => {
			console::error_1(&format!("Error loading {}: {}", section.file, error).into());
			let message = html! {
				<p>{format!("Error loading content for {}", section.id)}</p>
			};
			element.set_inner_html(&message.render_to_string());
		}
	}
}

fn update_active_buttons(nav: &Nav) {
	let buttons =
		match dom::document_query_all::<web_sys::Element>(&nav.config.sidebar_button_selector) {
			Ok(buttons) => buttons,
			Err(error) => {
				console::error_2(&"failed to query the sidebar buttons".into(), &error);
				return;
			}
		};
	let navigator = nav.navigator.borrow();
	for button in buttons {
		let active = button
			.get_attribute("href")
			.map(|href| navigator.is_link_active(&href))
			.unwrap_or(false);
		if let Err(error) = button
			.class_list()
			.toggle_with_force("button_active", active)
		{
			console::error_2(&"failed to update a sidebar button".into(), &error);
		}
	}
}

fn bind_scroll(nav: &Rc<Nav>) -> Result<(), JsValue> {
	let window = dom::window()?;
	let nav = nav.clone();
	let callback_fn = Closure::wrap(Box::new(move |_: web_sys::Event| {
		let sections =
			dom::document_query_all::<web_sys::Element>(&nav.config.section_selector)
				.unwrap_or_default();
		let bounds = sections
			.iter()
			.map(|section| {
				let rect = section.get_bounding_client_rect();
				(
					section.id(),
					SectionBounds {
						top: rect.top(),
						bottom: rect.bottom(),
					},
				)
			})
			.collect::<Vec<_>>();
		nav.navigator
			.borrow_mut()
			.scroll(bounds.iter().map(|(id, bounds)| (id.as_str(), *bounds)));
		update_active_buttons(&nav);
	}) as Box<dyn FnMut(web_sys::Event)>);
	window.add_event_listener_with_callback("scroll", callback_fn.as_ref().unchecked_ref())?;
	callback_fn.forget();
	Ok(())
}

fn bind_hover(nav: &Rc<Nav>) -> Result<(), JsValue> {
	let main_content = match dom::document()?.query_selector(&nav.config.main_content_selector)? {
		Some(main_content) => main_content,
		None => return Ok(()),
	};
	let hover_nav = nav.clone();
	let hover_fn = Closure::wrap(Box::new(move |event: web_sys::Event| {
		let section = event
			.target()
			.and_then(|target| target.dyn_into::<web_sys::Element>().ok())
			.and_then(|target| {
				target
					.closest(&hover_nav.config.section_selector)
					.ok()
					.flatten()
			});
		if let Some(section) = section {
			hover_nav.navigator.borrow_mut().hover(&section.id());
			update_active_buttons(&hover_nav);
		}
	}) as Box<dyn FnMut(web_sys::Event)>);
	main_content.add_event_listener_with_callback("mouseover", hover_fn.as_ref().unchecked_ref())?;
	hover_fn.forget();
	let leave_nav = nav.clone();
	let leave_fn = Closure::wrap(Box::new(move |_: web_sys::Event| {
		leave_nav.navigator.borrow_mut().leave();
		update_active_buttons(&leave_nav);
	}) as Box<dyn FnMut(web_sys::Event)>);
	main_content.add_event_listener_with_callback("mouseleave", leave_fn.as_ref().unchecked_ref())?;
	leave_fn.forget();
	Ok(())
}

fn bind_sidebar(nav: &Rc<Nav>) -> Result<(), JsValue> {
	let buttons = dom::document_query_all::<web_sys::Element>(&nav.config.sidebar_button_selector)?;
	for button in buttons {
		let nav = nav.clone();
		let callback_fn = Closure::wrap(Box::new(move |event: web_sys::Event| {
			event.prevent_default();
			let section_id = event
				.current_target()
				.and_then(|target| target.dyn_into::<web_sys::Element>().ok())
				.and_then(|button| button.get_attribute("href"))
				.and_then(|href| href.strip_prefix('#').map(|id| id.to_owned()));
			if let Some(section_id) = section_id {
				scroll_to_section(&nav, &section_id);
			}
		}) as Box<dyn FnMut(web_sys::Event)>);
		button.add_event_listener_with_callback("click", callback_fn.as_ref().unchecked_ref())?;
		callback_fn.forget();
	}
	Ok(())
}

fn scroll_to_section(nav: &Nav, section_id: &str) {
	let section = dom::document()
		.ok()
		.and_then(|document| document.get_element_by_id(section_id));
	let section = match section {
		Some(section) => section,
		None => return,
	};
	let options = web_sys::ScrollIntoViewOptions::new();
	options.set_behavior(web_sys::ScrollBehavior::Smooth);
	options.set_block(web_sys::ScrollLogicalPosition::Start);
	section.scroll_into_view_with_scroll_into_view_options(&options);
	nav.navigator.borrow_mut().click(section_id);
	update_active_buttons(nav);
}

fn bind_hamburger(config: &NavConfig) -> Result<(), JsValue> {
	let document = dom::document()?;
	let hamburger = document.get_element_by_id(&config.hamburger_id);
	let accordion = document.get_element_by_id(&config.accordion_id);
	let (hamburger, accordion) = match (hamburger, accordion) {
		(Some(hamburger), Some(accordion)) => (hamburger, accordion),
		_ => return Ok(()),
	};
	let callback_fn = Closure::wrap(Box::new(move |_: web_sys::Event| {
		if let Err(error) = accordion.class_list().toggle("active") {
			console::error_2(&"failed to toggle the menu".into(), &error);
		}
	}) as Box<dyn FnMut(web_sys::Event)>);
	hamburger.add_event_listener_with_callback("click", callback_fn.as_ref().unchecked_ref())?;
	callback_fn.forget();
	Ok(())
}
