//! Search-term highlighting.
//!
//! Search annotates text; it never removes tasks from the list.

use crate::model::task::Task;
use regex::{Regex, RegexBuilder};

/// One run of text, flagged when it matched the search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: false,
        }
    }

    fn hit(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: true,
        }
    }
}

/// Splits `text` into matched and unmatched runs of `query`.
///
/// Matching is literal and case-insensitive. Joining the returned segment
/// texts reproduces `text` exactly.
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
    let Some(pattern) = compile(query) else {
        return vec![Segment::plain(text)];
    };

    let mut segments = Vec::new();
    let mut cursor = 0;
    for found in pattern.find_iter(text) {
        if found.start() > cursor {
            segments.push(Segment::plain(&text[cursor..found.start()]));
        }
        segments.push(Segment::hit(found.as_str()));
        cursor = found.end();
    }
    if cursor < text.len() || segments.is_empty() {
        segments.push(Segment::plain(&text[cursor..]));
    }
    segments
}

/// Whether `query` occurs in the task's name or context.
///
/// An empty query matches nothing.
pub fn task_matches(task: &Task, query: &str) -> bool {
    compile(query)
        .map(|pattern| pattern.is_match(&task.name) || pattern.is_match(&task.context))
        .unwrap_or(false)
}

fn compile(query: &str) -> Option<Regex> {
    if query.is_empty() {
        return None;
    }
    RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::{highlight, task_matches, Segment};
    use crate::model::task::Task;

    fn joined(segments: &[Segment]) -> String {
        segments.iter().map(|segment| segment.text.as_str()).collect()
    }

    #[test]
    fn marks_every_case_insensitive_occurrence() {
        let segments = highlight("Fix bug, then FIX docs", "fix");
        let matched: Vec<_> = segments
            .iter()
            .filter(|segment| segment.matched)
            .map(|segment| segment.text.as_str())
            .collect();
        assert_eq!(matched, vec!["Fix", "FIX"]);
        assert_eq!(joined(&segments), "Fix bug, then FIX docs");
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let segments = highlight("cost (usd) is 3.50", "(usd)");
        assert_eq!(
            segments,
            vec![
                Segment::plain("cost "),
                Segment::hit("(usd)"),
                Segment::plain(" is 3.50"),
            ]
        );
        assert!(highlight("a.c", ".").iter().filter(|s| s.matched).count() == 1);
    }

    #[test]
    fn empty_query_or_text_yields_one_plain_segment() {
        assert_eq!(highlight("hello", ""), vec![Segment::plain("hello")]);
        assert_eq!(highlight("", "x"), vec![Segment::plain("")]);
    }

    #[test]
    fn task_matches_name_or_context() {
        let task = Task::with_id("t1", "Release notes", "ship v2 changelog", 0);
        assert!(task_matches(&task, "NOTES"));
        assert!(task_matches(&task, "changelog"));
        assert!(!task_matches(&task, "deploy"));
        assert!(!task_matches(&task, ""));
    }
}
