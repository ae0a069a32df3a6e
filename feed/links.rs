/// Split a problem code into its contest id and problem index. The index is taken to be the last character, so `1234A` gives `("1234", "A")`.
pub fn split_problem_code(problem_code: &str) -> (&str, &str) {
	match problem_code.char_indices().last() {
		Some((index, _)) => problem_code.split_at(index),
		None => ("", ""),
	}
}

pub fn problem_url(problem_code: &str) -> String {
	let (contest_id, problem_index) = split_problem_code(problem_code);
	format!(
		"https://codeforces.com/contest/{}/problem/{}",
		contest_id, problem_index
	)
}

/// Solutions are only published for Python and C++.
pub fn solution_file_name(language: &str, problem_code: &str) -> Option<String> {
	match language {
		"Python" => Some(format!("{}.py", problem_code)),
		"C++" => Some(format!("{}.cpp", problem_code)),
		_ => None,
	}
}

pub fn solution_url(solution_base_url: &str, language: &str, problem_code: &str) -> Option<String> {
	solution_file_name(language, problem_code)
		.map(|file_name| format!("{}{}", solution_base_url, file_name))
}

#[test]
fn test_problem_url() {
	assert_eq!(split_problem_code("1234A"), ("1234", "A"));
	assert_eq!(split_problem_code(""), ("", ""));
	assert_eq!(
		problem_url("1900B"),
		"https://codeforces.com/contest/1900/problem/B"
	);
	assert_eq!(
		problem_url("N/A?"),
		"https://codeforces.com/contest/N/A/problem/?"
	);
}

#[test]
fn test_solution_links() {
	assert_eq!(
		solution_file_name("Python", "1234A").as_deref(),
		Some("1234A.py")
	);
	assert_eq!(
		solution_file_name("C++", "1234A").as_deref(),
		Some("1234A.cpp")
	);
	assert_eq!(solution_file_name("Go", "1234A"), None);
	assert_eq!(solution_file_name("JavaScript", "1234A"), None);
	assert_eq!(
		solution_url("https://example.com/solves/", "C++", "71A").as_deref(),
		Some("https://example.com/solves/71A.cpp")
	);
}
