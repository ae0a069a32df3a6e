use derive_more::{Display, Error};

#[derive(Clone, Debug, Display, Error, PartialEq)]
pub enum FeedError {
	#[display(fmt = "HTTP error! status: {}", status)]
	Http { status: u16 },
	#[display(fmt = "API Error: {}", comment)]
	Api { comment: String },
	#[display(fmt = "{}", message)]
	Malformed { message: String },
	#[display(fmt = "{}", message)]
	Network { message: String },
	#[display(fmt = "invalid configuration: {}", message)]
	Config { message: String },
}

impl FeedError {
	pub fn api(comment: Option<String>) -> FeedError {
		let comment = comment
			.filter(|comment| !comment.is_empty())
			.unwrap_or_else(|| "Unknown error".to_owned());
		FeedError::Api { comment }
	}

	pub fn malformed(message: impl Into<String>) -> FeedError {
		FeedError::Malformed {
			message: message.into(),
		}
	}

	pub fn network(message: impl Into<String>) -> FeedError {
		FeedError::Network {
			message: message.into(),
		}
	}
}

#[test]
fn test_display() {
	assert_eq!(
		FeedError::Http { status: 503 }.to_string(),
		"HTTP error! status: 503"
	);
	assert_eq!(
		FeedError::api(Some("handle: User with handle nobody not found".to_owned())).to_string(),
		"API Error: handle: User with handle nobody not found"
	);
	assert_eq!(FeedError::api(None).to_string(), "API Error: Unknown error");
}
