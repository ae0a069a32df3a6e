use crate::{
	problem_url, process_submissions, solution_url, ApiResponse, FeedConfig, FeedError,
	LanguageTally, PageButtonProps, PageControl, Pagination, ProcessedSubmission, RawSubmission,
};
use chrono::FixedOffset;
use folio_ui as ui;
use html::{component, html, Node};

/// The feed's in-memory snapshot. It is filled once per load and re-rendered on every page change.
pub struct SubmissionFeed {
	config: FeedConfig,
	submissions: Vec<ProcessedSubmission>,
	language_tally: LanguageTally,
	current_page: usize,
}

impl SubmissionFeed {
	pub fn new(config: FeedConfig) -> SubmissionFeed {
		SubmissionFeed {
			config,
			submissions: Vec::new(),
			language_tally: LanguageTally::default(),
			current_page: 1,
		}
	}

	pub fn config(&self) -> &FeedConfig {
		&self.config
	}

	pub fn submissions(&self) -> &[ProcessedSubmission] {
		&self.submissions
	}

	pub fn language_tally(&self) -> &LanguageTally {
		&self.language_tally
	}

	pub fn current_page(&self) -> usize {
		self.current_page
	}

	/// Replace the snapshot with `submissions` and go back to the first page.
	pub fn load(&mut self, submissions: &[RawSubmission], offset: FixedOffset) {
		let processed = process_submissions(submissions, self.config.verdict_filter(), offset);
		self.submissions = processed.submissions;
		self.language_tally = processed.language_tally;
		self.current_page = 1;
	}

	/// Load a `user.status` response body. On error the previous snapshot is kept.
	pub fn load_json(&mut self, body: &str, offset: FixedOffset) -> Result<(), FeedError> {
		let submissions = ApiResponse::from_json(body)?.into_submissions()?;
		self.load(&submissions, offset);
		Ok(())
	}

	pub fn pagination(&self) -> Pagination {
		Pagination::new(
			self.current_page,
			self.config.page_size,
			self.submissions.len(),
		)
	}

	pub fn apply(&mut self, control: PageControl) {
		self.current_page = self.pagination().apply(control);
	}

	/// Render the stats, the current page of submissions and the pagination strip. The current page is clamped first.
	pub fn render(&mut self) -> Node {
		let pagination = self.pagination();
		self.current_page = pagination.current_page();
		let top_languages = self.language_tally.top(2).join(", ");
		let top_languages = if top_languages.is_empty() {
			"N/A".to_owned()
		} else {
			top_languages
		};
		let items = self.submissions[pagination.window()]
			.iter()
			.map(|submission| {
				html! {
					<SubmissionItem
						solution_base_url={self.config.solution_base_url.clone()}
						submission={submission.clone()}
					/>
				}
			})
			.collect::<Vec<_>>();
		html! {
			<>
				<FeedStats
					languages_used={self.language_tally.len()}
					solved_count={self.submissions.len()}
					top_languages={top_languages}
				/>
				{items}
				<PaginationStrip controls={pagination.controls()} />
			</>
		}
	}
}

pub fn render_loading() -> Node {
	html! {
		<ui::Loading message="Fetching submissions..." />
	}
}

pub fn render_error(error: &FeedError) -> Node {
	html! {
		<ui::ErrorMessage message={error.to_string()} />
	}
}

#[component]
fn FeedStats(languages_used: usize, solved_count: usize, top_languages: String) {
	html! {
		<ui::StatContainer>
			<ui::StatItem label="Problems Solved" value={solved_count.to_string()} />
			<ui::StatItem label="Most Used Languages" value={top_languages} />
			<ui::StatItem label="Languages Used" value={languages_used.to_string()} />
		</ui::StatContainer>
	}
}

#[component]
fn SubmissionItem(solution_base_url: String, submission: ProcessedSubmission) {
	let problem_url = problem_url(&submission.problem_code);
	let solution_url = solution_url(
		&solution_base_url,
		&submission.language,
		&submission.problem_code,
	);
	html! {
		<div class="submission-item">
			<div class="problem-title">
				"Problem: "
				<ui::ExternalLink class_name="problem-title2" href={problem_url}>
					{format!("[{}]", submission.problem_name)}
				</ui::ExternalLink>
			</div>
			<div class="submission-details">
				"Language used: "
				<b>{submission.language}</b>
			</div>
			<div class="submission-details">
				"Submitted on: "
				<b>{submission.time}</b>
			</div>
			{solution_url.map(|solution_url| html! {
				<div class="soln_link">
					<ui::ExternalLink class_name="solution-link" href={solution_url}>
						"View my Solution"
					</ui::ExternalLink>
				</div>
			})}
		</div>
	}
}

#[component]
fn PaginationStrip(controls: Vec<PageButtonProps>) {
	let buttons = controls
		.into_iter()
		.map(|control| {
			let (page, action) = match control.control {
				PageControl::Page(page) => (Some(page), None),
				PageControl::Action(action) => (None, Some(action.as_str().to_owned())),
			};
			html! {
				<ui::PageButton
					action={action}
					active={control.active}
					aria_label={control.aria_label}
					label={control.label}
					page={page}
				/>
			}
		})
		.collect::<Vec<_>>();
	html! {
		<div class="pagination">{buttons}</div>
	}
}

#[cfg(test)]
fn offset() -> FixedOffset {
	use chrono::{Offset, Utc};
	Utc.fix()
}

#[cfg(test)]
fn submissions_json(count: usize) -> String {
	let submissions = (0..count)
		.map(|i| {
			let language = if i % 3 == 0 { "GNU C++17" } else { "Python 3" };
			format!(
				r#"{{ "id": {}, "verdict": "OK", "programmingLanguage": "{}", "creationTimeSeconds": 1700000000, "problem": {{ "contestId": {}, "index": "A", "name": "Problem {}" }} }}"#,
				1000 + i,
				language,
				100 + i,
				i
			)
		})
		.collect::<Vec<_>>()
		.join(",");
	format!(r#"{{ "status": "OK", "result": [{}] }}"#, submissions)
}

#[test]
fn test_render_clamps_page() {
	let mut feed = SubmissionFeed::new(FeedConfig::default());
	feed.load_json(&submissions_json(31), offset()).unwrap();
	assert_eq!(feed.pagination().total_pages(), 3);
	feed.apply(PageControl::Page(5));
	assert_eq!(feed.current_page(), 5);
	let html = feed.render().render_to_string();
	assert_eq!(feed.current_page(), 3);
	assert_eq!(html.matches(r#"class="submission-item""#).count(), 3);
	assert!(html.contains("[Problem 30]"));
	assert!(html.contains(r#"data-action="first""#));
	assert!(!html.contains(r#"data-action="next""#));
}

#[test]
fn test_render_first_page() {
	let mut feed = SubmissionFeed::new(FeedConfig::default());
	feed.load_json(&submissions_json(31), offset()).unwrap();
	let html = feed.render().render_to_string();
	assert_eq!(html.matches(r#"class="submission-item""#).count(), 14);
	assert!(html.contains(r#"<div class="stat-number">31</div>"#));
	assert!(html.contains(r#"<div class="stat-number">Python, C++</div>"#));
	assert!(html.contains(r#"<div class="stat-number">2</div>"#));
	assert!(!html.contains(r#"data-action="prev""#));
	assert!(html.contains(r#"<button class="page-btn active" data-page="1" aria-label="Page 1">1</button>"#));
	assert!(html.contains(r#"data-action="last""#));
	feed.apply(PageControl::Action(crate::PageAction::Next));
	assert_eq!(feed.current_page(), 2);
}

#[test]
fn test_load_resets_page() {
	let mut feed = SubmissionFeed::new(FeedConfig::default());
	feed.load_json(&submissions_json(31), offset()).unwrap();
	feed.apply(PageControl::Page(3));
	feed.load_json(&submissions_json(2), offset()).unwrap();
	assert_eq!(feed.current_page(), 1);
	assert_eq!(feed.submissions().len(), 2);
}

#[test]
fn test_duplicate_two_sum() {
	let body = r#"{
		"status": "OK",
		"result": [
			{ "id": 100, "verdict": "OK", "programmingLanguage": "Python 3", "creationTimeSeconds": 1700000000, "problem": { "contestId": 1, "index": "A", "name": "Two Sum" } },
			{ "id": 200, "verdict": "OK", "programmingLanguage": "Python 3", "creationTimeSeconds": 1690000000, "problem": { "contestId": 1, "index": "A", "name": "Two Sum" } }
		]
	}"#;
	let mut feed = SubmissionFeed::new(FeedConfig::default());
	feed.load_json(body, offset()).unwrap();
	assert_eq!(feed.submissions().len(), 1);
	assert_eq!(feed.submissions()[0].submission_id, 100);
	assert_eq!(feed.language_tally().total(), 1);
}

#[test]
fn test_failed_payload() {
	let mut feed = SubmissionFeed::new(FeedConfig::default());
	let error = feed
		.load_json(r#"{ "status": "FAILED", "comment": "user not found" }"#, offset())
		.unwrap_err();
	let html = render_error(&error).render_to_string();
	assert!(html.contains("user not found"));
	assert!(!html.contains("pagination"));
	insta::assert_snapshot!(html, @r###"<div class="error">Error: API Error: user not found</div>"###);
}

#[test]
fn test_submission_item() {
	let submission = ProcessedSubmission {
		submission_id: 1,
		problem_name: "Watermelon".to_owned(),
		problem_code: "4A".to_owned(),
		verdict: "OK".to_owned(),
		language: "Python".to_owned(),
		time: "11/14/2023, 10:13:20 PM".to_owned(),
	};
	let html = html! {
		<SubmissionItem
			solution_base_url="https://example.com/"
			submission={submission.clone()}
		/>
	}
	.render_to_string();
	insta::assert_snapshot!(html, @r###"<div class="submission-item"><div class="problem-title">Problem: <a href="https://codeforces.com/contest/4/problem/A" target="_blank" class="problem-title2">[Watermelon]</a></div><div class="submission-details">Language used: <b>Python</b></div><div class="submission-details">Submitted on: <b>11/14/2023, 10:13:20 PM</b></div><div class="soln_link"><a href="https://example.com/4A.py" target="_blank" class="solution-link">View my Solution</a></div></div>"###);
	let submission = ProcessedSubmission {
		language: "Go".to_owned(),
		..submission
	};
	let html = html! {
		<SubmissionItem solution_base_url="https://example.com/" submission={submission} />
	}
	.render_to_string();
	assert!(!html.contains("soln_link"));
}

#[test]
fn test_empty_feed() {
	let mut feed = SubmissionFeed::new(FeedConfig::default());
	feed.load_json(r#"{ "status": "OK", "result": [] }"#, offset())
		.unwrap();
	let html = feed.render().render_to_string();
	assert!(html.contains(r#"<div class="stat-number">N/A</div>"#));
	assert!(html.contains(r#"<div class="pagination"><button class="page-btn active" data-page="1" aria-label="Page 1">1</button></div>"#));
}
