use std::ops::{Range, RangeInclusive};

/// At most this many numbered page buttons are shown.
pub const MAX_PAGE_BUTTONS: usize = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
	current_page: usize,
	page_size: usize,
	total_items: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageAction {
	First,
	Prev,
	Next,
	Last,
}

/// What a click on a pagination button asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageControl {
	Page(usize),
	Action(PageAction),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageButtonProps {
	pub control: PageControl,
	pub label: String,
	pub aria_label: String,
	pub active: bool,
}

impl Pagination {
	/// `current_page` is clamped into `[1, total_pages]`.
	pub fn new(current_page: usize, page_size: usize, total_items: usize) -> Pagination {
		let page_size = page_size.max(1);
		let total_pages = total_pages(total_items, page_size);
		Pagination {
			current_page: current_page.max(1).min(total_pages),
			page_size,
			total_items,
		}
	}

	pub fn current_page(&self) -> usize {
		self.current_page
	}

	pub fn page_size(&self) -> usize {
		self.page_size
	}

	pub fn total_items(&self) -> usize {
		self.total_items
	}

	/// There is always at least one page, even when there are no items.
	pub fn total_pages(&self) -> usize {
		total_pages(self.total_items, self.page_size)
	}

	/// The indices of the items on the current page.
	pub fn window(&self) -> Range<usize> {
		let start = ((self.current_page - 1) * self.page_size).min(self.total_items);
		let end = start.saturating_add(self.page_size).min(self.total_items);
		start..end
	}

	pub fn has_previous(&self) -> bool {
		self.current_page > 1
	}

	pub fn has_next(&self) -> bool {
		self.current_page < self.total_pages()
	}

	/// The numbered buttons: up to `MAX_PAGE_BUTTONS` pages centered on the current page, shifted to stay within `[1, total_pages]`.
	pub fn page_numbers(&self) -> RangeInclusive<usize> {
		let total_pages = self.total_pages();
		let mut start = self
			.current_page
			.saturating_sub(MAX_PAGE_BUTTONS / 2)
			.max(1);
		let end = (start + MAX_PAGE_BUTTONS - 1).min(total_pages);
		if end - start < MAX_PAGE_BUTTONS - 1 {
			start = end.saturating_sub(MAX_PAGE_BUTTONS - 1).max(1);
		}
		start..=end
	}

	pub fn controls(&self) -> Vec<PageButtonProps> {
		let mut controls = Vec::new();
		if self.has_previous() {
			controls.push(PageButtonProps::action(PageAction::First));
			controls.push(PageButtonProps::action(PageAction::Prev));
		}
		for page in self.page_numbers() {
			controls.push(PageButtonProps {
				control: PageControl::Page(page),
				label: page.to_string(),
				aria_label: format!("Page {}", page),
				active: page == self.current_page,
			});
		}
		if self.has_next() {
			controls.push(PageButtonProps::action(PageAction::Next));
			controls.push(PageButtonProps::action(PageAction::Last));
		}
		controls
	}

	/// The page to show after `control` is clicked. A numbered page is taken literally and clamped on the next render.
	pub fn apply(&self, control: PageControl) -> usize {
		match control {
			PageControl::Page(page) => page,
			PageControl::Action(PageAction::First) => 1,
			PageControl::Action(PageAction::Prev) => self.current_page.saturating_sub(1).max(1),
			PageControl::Action(PageAction::Next) => (self.current_page + 1).min(self.total_pages()),
			PageControl::Action(PageAction::Last) => self.total_pages(),
		}
	}
}

fn total_pages(total_items: usize, page_size: usize) -> usize {
	(total_items / page_size + usize::from(total_items % page_size != 0)).max(1)
}

impl PageAction {
	pub fn as_str(&self) -> &'static str {
		match self {
			PageAction::First => "first",
			PageAction::Prev => "prev",
			PageAction::Next => "next",
			PageAction::Last => "last",
		}
	}

	pub fn parse(value: &str) -> Option<PageAction> {
		match value {
			"first" => Some(PageAction::First),
			"prev" => Some(PageAction::Prev),
			"next" => Some(PageAction::Next),
			"last" => Some(PageAction::Last),
			_ => None,
		}
	}

	fn label(&self) -> &'static str {
		match self {
			PageAction::First => "First",
			PageAction::Prev => "\u{ab}",
			PageAction::Next => "\u{bb}",
			PageAction::Last => "Last",
		}
	}

	fn aria_label(&self) -> &'static str {
		match self {
			PageAction::First => "First page",
			PageAction::Prev => "Previous page",
			PageAction::Next => "Next page",
			PageAction::Last => "Last page",
		}
	}
}

impl PageControl {
	/// Read a control back from a button's `data-page` and `data-action` attributes. `data-page` wins when both are present.
	pub fn from_data(page: Option<&str>, action: Option<&str>) -> Option<PageControl> {
		if let Some(page) = page.and_then(|page| page.trim().parse().ok()) {
			return Some(PageControl::Page(page));
		}
		action.and_then(PageAction::parse).map(PageControl::Action)
	}
}

impl PageButtonProps {
	fn action(action: PageAction) -> PageButtonProps {
		PageButtonProps {
			control: PageControl::Action(action),
			label: action.label().to_owned(),
			aria_label: action.aria_label().to_owned(),
			active: false,
		}
	}
}

#[cfg(test)]
fn labels(pagination: &Pagination) -> Vec<String> {
	pagination
		.controls()
		.into_iter()
		.map(|control| control.label)
		.collect()
}

#[test]
fn test_total_pages() {
	assert_eq!(Pagination::new(1, 14, 31).total_pages(), 3);
	assert_eq!(Pagination::new(1, 14, 28).total_pages(), 2);
	assert_eq!(Pagination::new(1, 14, 0).total_pages(), 1);
	let pagination = Pagination::new(3, usize::MAX, 2);
	assert_eq!(pagination.total_pages(), 1);
	assert_eq!(pagination.current_page(), 1);
	assert_eq!(pagination.window(), 0..2);
	assert_eq!(Pagination::new(1, usize::MAX, usize::MAX).total_pages(), 1);
	assert_eq!(Pagination::new(1, 0, 5).total_pages(), 5);
}

#[test]
fn test_clamp() {
	let pagination = Pagination::new(5, 14, 31);
	assert_eq!(pagination.current_page(), 3);
	assert_eq!(pagination.window(), 28..31);
	let pagination = Pagination::new(0, 14, 31);
	assert_eq!(pagination.current_page(), 1);
	assert_eq!(pagination.window(), 0..14);
	assert_eq!(Pagination::new(1, 14, 0).window(), 0..0);
}

#[test]
fn test_control_visibility() {
	assert_eq!(labels(&Pagination::new(1, 14, 31)), vec!["1", "2", "3", "\u{bb}", "Last"]);
	assert_eq!(labels(&Pagination::new(3, 14, 31)), vec!["First", "\u{ab}", "1", "2", "3"]);
	assert_eq!(
		labels(&Pagination::new(2, 14, 31)),
		vec!["First", "\u{ab}", "1", "2", "3", "\u{bb}", "Last"]
	);
	assert_eq!(labels(&Pagination::new(1, 14, 3)), vec!["1"]);
}

#[test]
fn test_page_numbers() {
	assert_eq!(Pagination::new(1, 1, 20).page_numbers(), 1..=7);
	assert_eq!(Pagination::new(4, 1, 20).page_numbers(), 1..=7);
	assert_eq!(Pagination::new(10, 1, 20).page_numbers(), 7..=13);
	assert_eq!(Pagination::new(19, 1, 20).page_numbers(), 14..=20);
	assert_eq!(Pagination::new(20, 1, 20).page_numbers(), 14..=20);
	assert_eq!(Pagination::new(2, 1, 3).page_numbers(), 1..=3);
	let active = Pagination::new(10, 1, 20)
		.controls()
		.into_iter()
		.filter(|control| control.active)
		.map(|control| control.control)
		.collect::<Vec<_>>();
	assert_eq!(active, vec![PageControl::Page(10)]);
}

#[test]
fn test_apply() {
	let pagination = Pagination::new(2, 14, 31);
	assert_eq!(pagination.apply(PageControl::Page(9)), 9);
	assert_eq!(pagination.apply(PageControl::Action(PageAction::First)), 1);
	assert_eq!(pagination.apply(PageControl::Action(PageAction::Prev)), 1);
	assert_eq!(pagination.apply(PageControl::Action(PageAction::Next)), 3);
	assert_eq!(pagination.apply(PageControl::Action(PageAction::Last)), 3);
	let pagination = Pagination::new(3, 14, 31);
	assert_eq!(pagination.apply(PageControl::Action(PageAction::Next)), 3);
	let pagination = Pagination::new(1, 14, 31);
	assert_eq!(pagination.apply(PageControl::Action(PageAction::Prev)), 1);
}

#[test]
fn test_from_data() {
	assert_eq!(PageControl::from_data(Some("4"), None), Some(PageControl::Page(4)));
	assert_eq!(
		PageControl::from_data(None, Some("last")),
		Some(PageControl::Action(PageAction::Last))
	);
	assert_eq!(
		PageControl::from_data(Some("abc"), Some("prev")),
		Some(PageControl::Action(PageAction::Prev))
	);
	assert_eq!(PageControl::from_data(None, Some("middle")), None);
	assert_eq!(PageControl::from_data(None, None), None);
}
