/// The vertical extent of a section relative to the top of the viewport, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
	pub top: f64,
	pub bottom: f64,
}

impl SectionBounds {
	pub fn straddles(&self, offset: f64) -> bool {
		self.top <= offset && self.bottom > offset
	}
}

/**
Tracks the active section and the highlighted sidebar link.

The active section changes on clicks and scrolls. Hovering a section highlights it without making it active, and leaving the content area puts the highlight back on the active section.
*/
#[derive(Clone, Debug)]
pub struct SectionNavigator {
	section_ids: Vec<String>,
	active: String,
	hovered: Option<String>,
	probe_offset: f64,
}

impl SectionNavigator {
	pub fn new(section_ids: Vec<String>, initial_section: String, probe_offset: f64) -> SectionNavigator {
		SectionNavigator {
			section_ids,
			active: initial_section,
			hovered: None,
			probe_offset,
		}
	}

	pub fn from_config(config: &crate::NavConfig) -> SectionNavigator {
		SectionNavigator::new(
			config
				.sections
				.iter()
				.map(|section| section.id.clone())
				.collect(),
			config.initial_section.clone(),
			config.probe_offset,
		)
	}

	pub fn active(&self) -> &str {
		&self.active
	}

	pub fn highlighted(&self) -> &str {
		self.hovered.as_deref().unwrap_or(&self.active)
	}

	/// Whether a sidebar link with this `href` should be highlighted.
	pub fn is_link_active(&self, href: &str) -> bool {
		href.strip_prefix('#') == Some(self.highlighted())
	}

	/// A click wins over whatever the scroll position says. Any section the page links to can be clicked, including ones that are not loaded from a fragment.
	pub fn click(&mut self, section_id: &str) {
		tracing::debug!(section = section_id, "clicked section");
		self.active = section_id.to_owned();
		self.hovered = None;
	}

	/// Make the section under the probe active. When no section, or more than one, is under the probe, the active section is kept.
	pub fn scroll<'a, I>(&mut self, bounds: I)
	where
		I: IntoIterator<Item = (&'a str, SectionBounds)>,
	{
		let probe_offset = self.probe_offset;
		let under_probe = bounds
			.into_iter()
			.filter(|(id, section_bounds)| {
				self.is_tracked(id) && section_bounds.straddles(probe_offset)
			})
			.map(|(id, _)| id)
			.collect::<Vec<_>>();
		if let [id] = under_probe.as_slice() {
			if self.active != *id {
				tracing::debug!(section = *id, "scrolled into section");
				self.active = (*id).to_owned();
			}
		}
		self.hovered = None;
	}

	pub fn hover(&mut self, section_id: &str) {
		if self.is_tracked(section_id) {
			self.hovered = Some(section_id.to_owned());
		}
	}

	pub fn leave(&mut self) {
		self.hovered = None;
	}

	fn is_tracked(&self, section_id: &str) -> bool {
		self.section_ids.iter().any(|id| id == section_id)
	}
}

#[cfg(test)]
fn navigator() -> SectionNavigator {
	SectionNavigator::from_config(&crate::NavConfig::default())
}

#[cfg(test)]
fn bounds(top: f64, bottom: f64) -> SectionBounds {
	SectionBounds { top, bottom }
}

#[test]
fn test_initial() {
	let navigator = navigator();
	assert_eq!(navigator.active(), "aboutme");
	assert!(navigator.is_link_active("#aboutme"));
	assert!(!navigator.is_link_active("#education"));
	assert!(!navigator.is_link_active("aboutme"));
}

#[test]
fn test_click() {
	let mut navigator = navigator();
	navigator.hover("skills");
	navigator.click("projects");
	assert_eq!(navigator.active(), "projects");
	assert_eq!(navigator.highlighted(), "projects");
	navigator.click("contact");
	assert_eq!(navigator.active(), "contact");
	assert!(navigator.is_link_active("#contact"));
	// Untracked sections are still ignored by scroll inference.
	navigator.scroll(vec![("footer", bounds(0.0, 500.0))]);
	assert_eq!(navigator.active(), "contact");
}

#[test]
fn test_scroll() {
	let mut navigator = navigator();
	navigator.scroll(vec![
		("aboutme", bounds(-900.0, -100.0)),
		("education", bounds(-100.0, 400.0)),
		("projects", bounds(400.0, 1200.0)),
	]);
	assert_eq!(navigator.active(), "education");
	// Nothing under the probe keeps the active section.
	navigator.scroll(vec![("projects", bounds(150.0, 900.0))]);
	assert_eq!(navigator.active(), "education");
	// Neither does an ambiguous probe.
	navigator.scroll(vec![
		("skills", bounds(0.0, 200.0)),
		("research", bounds(50.0, 300.0)),
	]);
	assert_eq!(navigator.active(), "education");
	// The probe line itself belongs to the section starting at it.
	navigator.scroll(vec![
		("skills", bounds(-300.0, 100.0)),
		("research", bounds(100.0, 800.0)),
	]);
	assert_eq!(navigator.active(), "research");
}

#[test]
fn test_hover_and_leave() {
	let mut navigator = navigator();
	navigator.hover("experience");
	assert_eq!(navigator.active(), "aboutme");
	assert_eq!(navigator.highlighted(), "experience");
	assert!(navigator.is_link_active("#experience"));
	navigator.leave();
	assert_eq!(navigator.highlighted(), "aboutme");
	navigator.hover("experience");
	navigator.scroll(vec![("skills", bounds(0.0, 500.0))]);
	assert_eq!(navigator.highlighted(), "skills");
	navigator.hover("footer");
	assert_eq!(navigator.highlighted(), "skills");
}
