use folio_feed::FeedConfig;
use folio_nav::NavConfig;

/// The id of the element whose `data-props` attribute carries the `ClientProps`.
pub const PAGE_ROOT_ID: &str = "folio-page";

/// The configuration handed from the static page to the browser client.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ClientProps {
	pub feed: FeedConfig,
	pub nav: NavConfig,
}

#[test]
fn test_round_trip_defaults() {
	let props: ClientProps = serde_json::from_str("{}").unwrap();
	assert_eq!(props, ClientProps::default());
	let props: ClientProps =
		serde_json::from_str(r#"{ "feed": { "handle": "tourist" } }"#).unwrap();
	assert_eq!(props.feed.handle, "tourist");
	assert_eq!(props.nav.initial_section, "aboutme");
}
