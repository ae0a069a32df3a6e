use folio_common::ClientProps;
use folio_deps::{
	anyhow::{Context, Result},
	serde_json,
};
use std::path::Path;

/// Everything the page shell needs. The `feed` and `nav` keys are the `ClientProps` handed to the browser.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
	pub title: String,
	pub stylesheet_url: Option<String>,
	/// The module written by `wasm-bindgen --target web` for the client crate.
	pub client_js_url: Option<String>,
	#[serde(flatten)]
	pub props: ClientProps,
}

impl Default for SiteConfig {
	fn default() -> SiteConfig {
		SiteConfig {
			title: "Portfolio".to_owned(),
			stylesheet_url: Some("./styles.css".to_owned()),
			client_js_url: Some("./pkg/folio_client.js".to_owned()),
			props: ClientProps::default(),
		}
	}
}

impl SiteConfig {
	/// Read the config at `path`, or use the defaults when there is none.
	pub fn load(path: Option<&Path>) -> Result<SiteConfig> {
		let path = match path {
			Some(path) => path,
			None => return Ok(SiteConfig::default()),
		};
		let text = std::fs::read_to_string(path)
			.with_context(|| format!("failed to read the config at {}", path.display()))?;
		let config = serde_json::from_str(&text)
			.with_context(|| format!("failed to parse the config at {}", path.display()))?;
		tracing::debug!(path = %path.display(), "loaded config");
		Ok(config)
	}
}

#[test]
fn test_partial_config() {
	let config: SiteConfig = serde_json::from_str(
		r#"{
			"title": "Mishkat",
			"clientJsUrl": null,
			"feed": { "handle": "tourist", "pageSize": 10 },
			"nav": { "initialSection": "projects" }
		}"#,
	)
	.unwrap();
	assert_eq!(config.title, "Mishkat");
	assert_eq!(config.stylesheet_url.as_deref(), Some("./styles.css"));
	assert_eq!(config.client_js_url, None);
	assert_eq!(config.props.feed.handle, "tourist");
	assert_eq!(config.props.feed.page_size, 10);
	assert_eq!(config.props.feed.max_submissions, 3000);
	assert_eq!(config.props.nav.initial_section, "projects");
}

#[test]
fn test_load() {
	assert_eq!(SiteConfig::load(None).unwrap(), SiteConfig::default());
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("folio.json");
	std::fs::write(&path, "{ not json").unwrap();
	let error = SiteConfig::load(Some(&path)).unwrap_err();
	assert!(error.to_string().starts_with("failed to parse the config"));
	assert!(SiteConfig::load(Some(&dir.path().join("missing.json"))).is_err());
}
