use crate::FeedError;
use serde::{Deserialize, Serialize};

/// The body of a `user.status` response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiResponse {
	pub status: String,
	pub result: Option<Vec<RawSubmission>>,
	pub comment: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSubmission {
	pub id: u64,
	pub verdict: Option<String>,
	pub programming_language: Option<String>,
	pub problem: Option<RawProblem>,
	pub creation_time_seconds: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProblem {
	pub contest_id: Option<u64>,
	pub index: Option<String>,
	pub name: Option<String>,
}

impl ApiResponse {
	pub fn from_json(body: &str) -> Result<ApiResponse, FeedError> {
		serde_json::from_str(body).map_err(|error| FeedError::malformed(error.to_string()))
	}

	/// Unwrap the submissions of a successful response. A failed status and an `OK` without a result are both errors.
	pub fn into_submissions(self) -> Result<Vec<RawSubmission>, FeedError> {
		if self.status != "OK" {
			tracing::warn!(status = %self.status, comment = ?self.comment, "rejected response");
			return Err(FeedError::api(self.comment));
		}
		self.result
			.ok_or_else(|| FeedError::malformed("response has status OK but no result"))
	}
}

#[test]
fn test_parse_ok() {
	let body = r#"{
		"status": "OK",
		"result": [{
			"id": 245000001,
			"contestId": 1900,
			"creationTimeSeconds": 1700000000,
			"relativeTimeSeconds": 2147483647,
			"problem": { "contestId": 1900, "index": "A", "name": "Cover in Water", "type": "PROGRAMMING", "rating": 800 },
			"author": { "contestId": 1900, "members": [{ "handle": "xordan.-" }] },
			"programmingLanguage": "Python 3",
			"verdict": "OK"
		}]
	}"#;
	let submissions = ApiResponse::from_json(body)
		.unwrap()
		.into_submissions()
		.unwrap();
	assert_eq!(
		submissions,
		vec![RawSubmission {
			id: 245000001,
			verdict: Some("OK".to_owned()),
			programming_language: Some("Python 3".to_owned()),
			problem: Some(RawProblem {
				contest_id: Some(1900),
				index: Some("A".to_owned()),
				name: Some("Cover in Water".to_owned()),
			}),
			creation_time_seconds: Some(1700000000),
		}]
	);
}

#[test]
fn test_parse_failed() {
	let body = r#"{ "status": "FAILED", "comment": "user not found" }"#;
	let error = ApiResponse::from_json(body)
		.unwrap()
		.into_submissions()
		.unwrap_err();
	assert_eq!(
		error,
		FeedError::Api {
			comment: "user not found".to_owned()
		}
	);
}

#[test]
fn test_parse_bad_shape() {
	let error = ApiResponse::from_json(r#"{ "status": "OK" }"#)
		.unwrap()
		.into_submissions()
		.unwrap_err();
	assert!(matches!(error, FeedError::Malformed { .. }));
	let error = ApiResponse::from_json("<html>rate limited</html>").unwrap_err();
	assert!(matches!(error, FeedError::Malformed { .. }));
	let error = ApiResponse::from_json(r#"{ "result": [] }"#).unwrap_err();
	assert!(matches!(error, FeedError::Malformed { .. }));
}
