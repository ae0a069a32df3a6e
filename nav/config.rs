use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavConfig {
	/// The section that is loaded first and active before any scroll or click.
	pub initial_section: String,
	pub sections: Vec<SectionConfig>,
	pub sidebar_button_selector: String,
	pub main_content_selector: String,
	pub section_selector: String,
	pub hamburger_id: String,
	pub accordion_id: String,
	/// A section is under the viewport probe when its bounding box straddles this many pixels from the top.
	pub probe_offset: f64,
	pub scroll_to_top_id: String,
	pub scroll_to_top_threshold: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionConfig {
	pub id: String,
	/// The html fragment loaded into the section, relative to the page.
	pub file: String,
	/// The text of the sidebar link.
	#[serde(default)]
	pub title: Option<String>,
}

impl SectionConfig {
	pub fn new(id: &str, title: &str) -> SectionConfig {
		SectionConfig {
			id: id.to_owned(),
			file: format!("{}.html", id),
			title: Some(title.to_owned()),
		}
	}

	pub fn href(&self) -> String {
		format!("#{}", self.id)
	}

	pub fn title(&self) -> &str {
		self.title.as_deref().unwrap_or(&self.id)
	}
}

impl Default for NavConfig {
	fn default() -> NavConfig {
		NavConfig {
			initial_section: "aboutme".to_owned(),
			sections: vec![
				SectionConfig::new("aboutme", "About Me"),
				SectionConfig::new("education", "Education"),
				SectionConfig::new("projects", "Projects"),
				SectionConfig::new("skills", "Skills"),
				SectionConfig::new("research", "Research"),
				SectionConfig::new("experience", "Experience"),
			],
			sidebar_button_selector: ".sidebar nav .button".to_owned(),
			main_content_selector: ".main-content".to_owned(),
			section_selector: ".section".to_owned(),
			hamburger_id: "hamburger-menu".to_owned(),
			accordion_id: "accordion-menu".to_owned(),
			probe_offset: 100.0,
			scroll_to_top_id: "scrollToTopBtn".to_owned(),
			scroll_to_top_threshold: 300.0,
		}
	}
}

impl NavConfig {
	pub fn initial(&self) -> Option<&SectionConfig> {
		self.sections
			.iter()
			.find(|section| section.id == self.initial_section)
	}

	/// Every section but the initial one, in configured order.
	pub fn background_sections(&self) -> impl Iterator<Item = &SectionConfig> {
		let initial_section = self.initial_section.as_str();
		self.sections
			.iter()
			.filter(move |section| section.id != initial_section)
	}
}

#[test]
fn test_default_sections() {
	let config = NavConfig::default();
	assert_eq!(config.initial().map(|section| section.file.as_str()), Some("aboutme.html"));
	let background = config
		.background_sections()
		.map(|section| section.id.as_str())
		.collect::<Vec<_>>();
	assert_eq!(
		background,
		vec!["education", "projects", "skills", "research", "experience"]
	);
}

#[test]
fn test_json_sections() {
	let config: NavConfig = serde_json::from_str(
		r#"{ "initialSection": "intro", "sections": [{ "id": "intro", "file": "intro.html" }] }"#,
	)
	.unwrap();
	assert_eq!(config.sections[0].title(), "intro");
	assert_eq!(config.sections[0].href(), "#intro");
	assert_eq!(config.probe_offset, 100.0);
	assert_eq!(config.background_sections().count(), 0);
}
