use crate::{format_timestamp, RawSubmission};
use chrono::FixedOffset;
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq)]
pub struct ProcessedSubmission {
	pub submission_id: u64,
	pub problem_name: String,
	/// The contest id followed by the problem index, for example `1234A`.
	pub problem_code: String,
	pub verdict: String,
	pub language: String,
	pub time: String,
}

/// The number of kept submissions per normalized language, in the order each language was first seen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LanguageTally {
	entries: Vec<(String, usize)>,
}

impl LanguageTally {
	pub fn increment(&mut self, language: &str) {
		match self.entries.iter_mut().find(|(name, _)| name == language) {
			Some((_, count)) => *count += 1,
			None => self.entries.push((language.to_owned(), 1)),
		}
	}

	pub fn get(&self, language: &str) -> usize {
		self.entries
			.iter()
			.find(|(name, _)| name == language)
			.map(|(_, count)| *count)
			.unwrap_or(0)
	}

	/// The number of distinct languages.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn total(&self) -> usize {
		self.entries.iter().map(|(_, count)| count).sum()
	}

	/// The `n` most used languages. Ties keep the order the languages were first seen in.
	pub fn top(&self, n: usize) -> Vec<&str> {
		let mut entries = self.entries.iter().collect::<Vec<_>>();
		entries.sort_by(|(_, a), (_, b)| b.cmp(a));
		entries
			.into_iter()
			.take(n)
			.map(|(name, _)| name.as_str())
			.collect()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
		self.entries
			.iter()
			.map(|(name, count)| (name.as_str(), *count))
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProcessedFeed {
	pub submissions: Vec<ProcessedSubmission>,
	pub language_tally: LanguageTally,
}

pub fn normalize_language(language: Option<&str>) -> String {
	let language = match language.filter(|language| !language.is_empty()) {
		Some(language) => language,
		None => return "Unknown".to_owned(),
	};
	let lowercase = language.to_lowercase();
	if lowercase.contains("py") {
		"Python".to_owned()
	} else if lowercase.contains("c++") {
		"C++".to_owned()
	} else if lowercase.contains("javascript") {
		"JavaScript".to_owned()
	} else {
		language.to_owned()
	}
}

/**
Filter, deduplicate and normalize a list of raw submissions.

Submissions whose verdict differs from `verdict_filter` are dropped. Of the remaining submissions, only the first one for each problem name is kept, so the output follows the order of the input. The API lists submissions newest first, which makes the kept submission the most recent accepted one, but nothing here relies on that.
*/
pub fn process_submissions(
	submissions: &[RawSubmission],
	verdict_filter: Option<&str>,
	offset: FixedOffset,
) -> ProcessedFeed {
	let mut seen_problems = HashSet::new();
	let mut processed = ProcessedFeed::default();
	for submission in submissions {
		let verdict = non_empty(submission.verdict.as_deref()).unwrap_or("UNKNOWN");
		if let Some(verdict_filter) = verdict_filter {
			if verdict != verdict_filter {
				continue;
			}
		}
		let problem = submission.problem.clone().unwrap_or_default();
		let problem_name = non_empty(problem.name.as_deref())
			.unwrap_or("Unknown Problem")
			.to_owned();
		if !seen_problems.insert(problem_name.clone()) {
			continue;
		}
		let language = normalize_language(submission.programming_language.as_deref());
		processed.language_tally.increment(&language);
		let contest_id = problem
			.contest_id
			.filter(|contest_id| *contest_id != 0)
			.map(|contest_id| contest_id.to_string())
			.unwrap_or_else(|| "N/A".to_owned());
		let problem_index = non_empty(problem.index.as_deref()).unwrap_or("?");
		processed.submissions.push(ProcessedSubmission {
			submission_id: submission.id,
			problem_name,
			problem_code: format!("{}{}", contest_id, problem_index),
			verdict: verdict.to_owned(),
			language,
			time: format_timestamp(submission.creation_time_seconds, offset),
		});
	}
	tracing::debug!(
		received = submissions.len(),
		kept = processed.submissions.len(),
		languages = processed.language_tally.len(),
		"processed submissions"
	);
	processed
}

fn non_empty(value: Option<&str>) -> Option<&str> {
	value.filter(|value| !value.is_empty())
}

#[cfg(test)]
fn submission(id: u64, verdict: &str, language: &str, contest_id: u64, index: &str, name: &str) -> RawSubmission {
	RawSubmission {
		id,
		verdict: Some(verdict.to_owned()),
		programming_language: Some(language.to_owned()),
		problem: Some(crate::RawProblem {
			contest_id: Some(contest_id),
			index: Some(index.to_owned()),
			name: Some(name.to_owned()),
		}),
		creation_time_seconds: Some(1700000000),
	}
}

#[cfg(test)]
fn utc() -> FixedOffset {
	use chrono::{Offset, Utc};
	Utc.fix()
}

#[test]
fn test_normalize_language() {
	assert_eq!(normalize_language(Some("Python 3")), "Python");
	assert_eq!(normalize_language(Some("PyPy 3-64")), "Python");
	assert_eq!(normalize_language(Some("GNU G++17 7.3.0")), "GNU G++17 7.3.0");
	assert_eq!(normalize_language(Some("GNU C++20 (64)")), "C++");
	assert_eq!(normalize_language(Some("C++17 (GCC 7-32)")), "C++");
	assert_eq!(normalize_language(Some("JavaScript V8 4.8.0")), "JavaScript");
	assert_eq!(normalize_language(Some("Node.js javascript")), "JavaScript");
	assert_eq!(normalize_language(Some("Go 1.22.2")), "Go 1.22.2");
	assert_eq!(normalize_language(Some("")), "Unknown");
	assert_eq!(normalize_language(None), "Unknown");
}

#[test]
fn test_other_languages_pass_through() {
	let labels = [
		"Go 1.22.2",
		"Rust 2021",
		"Kotlin 1.9",
		"GNU C11",
		"Java 21",
		"Haskell",
		"C# 10",
	];
	for label in labels.iter() {
		assert_eq!(normalize_language(Some(*label)), *label);
	}
}

#[test]
fn test_first_accepted_wins() {
	let submissions = vec![
		submission(100, "OK", "Python 3", 1, "A", "Two Sum"),
		submission(200, "OK", "GNU C++17", 1, "A", "Two Sum"),
	];
	let processed = process_submissions(&submissions, Some("OK"), utc());
	assert_eq!(processed.submissions.len(), 1);
	assert_eq!(processed.submissions[0].submission_id, 100);
	assert_eq!(processed.submissions[0].language, "Python");
	assert_eq!(processed.language_tally.total(), 1);
	assert_eq!(processed.language_tally.get("C++"), 0);
}

#[test]
fn test_verdict_filter() {
	let submissions = vec![
		submission(1, "WRONG_ANSWER", "Python 3", 4, "A", "Watermelon"),
		submission(2, "OK", "Python 3", 4, "A", "Watermelon"),
		submission(3, "TIME_LIMIT_EXCEEDED", "Go", 71, "A", "Way Too Long Words"),
	];
	let processed = process_submissions(&submissions, Some("OK"), utc());
	let ids = processed
		.submissions
		.iter()
		.map(|submission| submission.submission_id)
		.collect::<Vec<_>>();
	assert_eq!(ids, vec![2]);
	// Without a filter the rejected attempt is the first one seen for its problem.
	let processed = process_submissions(&submissions, None, utc());
	let ids = processed
		.submissions
		.iter()
		.map(|submission| submission.submission_id)
		.collect::<Vec<_>>();
	assert_eq!(ids, vec![1, 3]);
	assert_eq!(processed.submissions[0].verdict, "WRONG_ANSWER");
}

#[test]
fn test_dedupe_bound() {
	let submissions = vec![
		submission(1, "OK", "Python 3", 4, "A", "Watermelon"),
		submission(2, "OK", "GNU C++20 (64)", 71, "A", "Way Too Long Words"),
		submission(3, "OK", "Python 3", 4, "A", "Watermelon"),
		submission(4, "WRONG_ANSWER", "Go", 1, "A", "Theatre Square"),
		submission(5, "OK", "Go", 158, "A", "Next Round"),
		submission(6, "OK", "Python 3", 71, "A", "Way Too Long Words"),
	];
	let accepted_names = submissions
		.iter()
		.filter(|submission| submission.verdict.as_deref() == Some("OK"))
		.filter_map(|submission| submission.problem.as_ref()?.name.clone())
		.collect::<HashSet<_>>();
	let processed = process_submissions(&submissions, Some("OK"), utc());
	assert!(processed.submissions.len() <= accepted_names.len());
	let ids = processed
		.submissions
		.iter()
		.map(|submission| submission.submission_id)
		.collect::<Vec<_>>();
	assert_eq!(ids, vec![1, 2, 5]);
	assert_eq!(
		processed.language_tally.iter().collect::<Vec<_>>(),
		vec![("Python", 1), ("C++", 1), ("Go", 1)]
	);
}

#[test]
fn test_missing_fields() {
	let submissions = vec![RawSubmission {
		id: 7,
		verdict: Some("OK".to_owned()),
		programming_language: None,
		problem: None,
		creation_time_seconds: None,
	}];
	let processed = process_submissions(&submissions, Some("OK"), utc());
	assert_eq!(
		processed.submissions,
		vec![ProcessedSubmission {
			submission_id: 7,
			problem_name: "Unknown Problem".to_owned(),
			problem_code: "N/A?".to_owned(),
			verdict: "OK".to_owned(),
			language: "Unknown".to_owned(),
			time: "Invalid Date".to_owned(),
		}]
	);
	let submissions = vec![RawSubmission {
		verdict: None,
		..submissions[0].clone()
	}];
	assert!(process_submissions(&submissions, Some("OK"), utc())
		.submissions
		.is_empty());
}

#[test]
fn test_tally_top() {
	let mut tally = LanguageTally::default();
	for language in &["Go", "Python", "C++", "Python", "C++", "Rust"] {
		tally.increment(language);
	}
	assert_eq!(tally.top(2), vec!["Python", "C++"]);
	assert_eq!(tally.top(10), vec!["Python", "C++", "Go", "Rust"]);
	assert_eq!(tally.len(), 4);
	assert_eq!(tally.total(), 6);
	assert!(LanguageTally::default().top(2).is_empty());
}
