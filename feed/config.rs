use crate::FeedError;
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeedConfig {
	/// The Codeforces handle whose submissions are shown.
	pub handle: String,
	/// Only submissions with this verdict are kept. `None` keeps every verdict.
	pub verdict_filter: Option<String>,
	pub max_submissions: usize,
	/// The id of the element the feed is mounted in.
	pub container_id: String,
	/// Solution files are linked as `{solution_base_url}{problem_code}.{py|cpp}`.
	pub solution_base_url: String,
	pub page_size: usize,
	pub api_base_url: String,
}

impl Default for FeedConfig {
	fn default() -> FeedConfig {
		FeedConfig {
			handle: "xordan.-".to_owned(),
			verdict_filter: Some("OK".to_owned()),
			max_submissions: 3000,
			container_id: "submissions-container".to_owned(),
			solution_base_url: "https://github.com/mi-shraban/cf_solves/blob/main/".to_owned(),
			page_size: 14,
			api_base_url: "https://codeforces.com/api/user.status".to_owned(),
		}
	}
}

impl FeedConfig {
	/// The `user.status` request for this handle: every submission from the first, up to `max_submissions`.
	pub fn api_url(&self) -> Result<Url, FeedError> {
		Url::parse_with_params(
			&self.api_base_url,
			&[
				("handle", self.handle.as_str()),
				("from", "1"),
				("count", &self.max_submissions.to_string()),
			],
		)
		.map_err(|error| FeedError::Config {
			message: format!("{}: {}", self.api_base_url, error),
		})
	}

	pub fn verdict_filter(&self) -> Option<&str> {
		self.verdict_filter
			.as_deref()
			.filter(|verdict| !verdict.is_empty())
	}
}

#[test]
fn test_api_url() {
	let config = FeedConfig::default();
	assert_eq!(
		config.api_url().unwrap().as_str(),
		"https://codeforces.com/api/user.status?handle=xordan.-&from=1&count=3000"
	);
	let config = FeedConfig {
		api_base_url: "not a url".to_owned(),
		..Default::default()
	};
	assert!(matches!(config.api_url(), Err(FeedError::Config { .. })));
}

#[test]
fn test_partial_json() {
	let config: FeedConfig =
		serde_json::from_str(r#"{ "handle": "tourist", "pageSize": 20, "verdictFilter": null }"#)
			.unwrap();
	assert_eq!(config.handle, "tourist");
	assert_eq!(config.page_size, 20);
	assert_eq!(config.verdict_filter(), None);
	assert_eq!(config.max_submissions, 3000);
	assert_eq!(config.container_id, "submissions-container");
}
