use crate::config::SiteConfig;
use folio_common::PAGE_ROOT_ID;
use folio_deps::{anyhow::Result, serde_json};
use folio_nav::SectionConfig;
use folio_ui as ui;
use html::{html, Node};

/// Render `index.html`. Sections start out empty and are filled by the client, so the page works with any fragments directory.
pub fn render_index(config: &SiteConfig) -> Result<String> {
	let props = serde_json::to_string(&config.props)?;
	let feed = &config.props.feed;
	let nav = &config.props.nav;
	let sidebar_items = nav
		.sections
		.iter()
		.map(|section| nav_item(section, section.id == nav.initial_section))
		.collect::<Vec<_>>();
	let accordion_items = nav
		.sections
		.iter()
		.map(|section| nav_item(section, false))
		.collect::<Vec<_>>();
	let sections = nav
		.sections
		.iter()
		.map(|section| {
			html! {
				<ui::Section id={section.id.clone()}></ui::Section>
			}
		})
		.collect::<Vec<_>>();
	let page = html! {
		<ui::Document
			client_js_url={config.client_js_url.clone()}
			stylesheet_url={config.stylesheet_url.clone()}
			title={config.title.clone()}
		>
			<ui::PageRoot id={PAGE_ROOT_ID.to_owned()} props={props}>
				<ui::Sidebar>{sidebar_items}</ui::Sidebar>
				<ui::AccordionMenu
					accordion_id={nav.accordion_id.clone()}
					hamburger_id={nav.hamburger_id.clone()}
				>
					{accordion_items}
				</ui::AccordionMenu>
				<ui::MainContent>
					{sections}
					<section class="submissions" id="submissions">
						<h2>"Codeforces Submissions"</h2>
						<div id={feed.container_id.clone()}></div>
					</section>
				</ui::MainContent>
				<ui::ScrollToTopButton id={nav.scroll_to_top_id.clone()} />
			</ui::PageRoot>
		</ui::Document>
	};
	Ok(page.render_to_string())
}

fn nav_item(section: &SectionConfig, selected: bool) -> Node {
	html! {
		<ui::SideNavItem href={section.href()} selected={selected}>
			{section.title().to_owned()}
		</ui::SideNavItem>
	}
}

#[test]
fn test_render_index() {
	let html = render_index(&SiteConfig::default()).unwrap();
	assert!(html.starts_with("<!doctype html>"));
	assert!(html.contains("<title>Portfolio</title>"));
	assert!(html.contains(r##"<aside class="sidebar"><nav><a class="button button_active" href="#aboutme">About Me</a><a class="button" href="#education">Education</a>"##));
	assert_eq!(html.matches(r#"class="section""#).count(), 6);
	assert!(html.contains(r#"<section class="section" id="experience"></section>"#));
	assert!(html.contains(r#"<div id="submissions-container"></div>"#));
	assert!(html.contains(r#"id="hamburger-menu""#));
	assert!(html.contains(r#"id="scrollToTopBtn""#));
}

#[test]
fn test_props_are_escaped() {
	let mut config = SiteConfig::default();
	config.title = "<Folio>".to_owned();
	config.props.feed.handle = "a\"b".to_owned();
	let html = render_index(&config).unwrap();
	assert!(html.contains("<title>&lt;Folio&gt;</title>"));
	assert!(html.contains(r#"id="folio-page" data-props="{&quot;feed&quot;:{&quot;handle&quot;:&quot;a\&quot;b&quot;"#));
}
