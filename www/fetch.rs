use folio_deps::reqwest;
use folio_feed::{FeedConfig, FeedError};

/// Fetch the raw `user.status` body for the configured handle.
pub async fn fetch_submissions(
	client: &reqwest::Client,
	config: &FeedConfig,
) -> Result<String, FeedError> {
	let url = config.api_url()?;
	tracing::info!(%url, "fetching submissions");
	let response = client
		.get(url)
		.send()
		.await
		.map_err(|error| FeedError::network(error.to_string()))?;
	let status = response.status();
	if !status.is_success() {
		return Err(FeedError::Http {
			status: status.as_u16(),
		});
	}
	response
		.text()
		.await
		.map_err(|error| FeedError::network(error.to_string()))
}
