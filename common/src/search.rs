//! Client-side search over the roster snapshot.
//!
//! Two matching modes exist:
//!
//! - **Substring** (default): case-insensitive, an applicant is kept when the
//!   query occurs in its name, university or email. Missing fields are skipped.
//! - **Regex**: the query is compiled as a case-insensitive regular expression
//!   with look-around support and, by default, tested against the university
//!   only. That narrower scope exists for the "non-Duke" shortcut, which relies
//!   on a negative lookahead; [`RegexScope`] makes the choice explicit.
//!
//! A malformed pattern never surfaces as an error to the caller: the outcome
//! is empty and carries the reason so the search bar can flag itself.
//!
//! Filtering is order-preserving and side-effect free.

use fancy_regex::Regex;
use log::debug;

use crate::error::DashboardError;
use crate::model::applicant::Applicant;

/// Pattern behind the "Filter Non-Duke" shortcut: universities that do not
/// contain the word "Duke".
///
/// Word edges are spelled out with ASCII classes instead of `\b`, which is
/// Unicode-aware here. Browsers treat only `[A-Za-z0-9_]` as word characters,
/// so "Dukeé" still contains the word "Duke".
pub const NON_DUKE_PATTERN: &str = r"^(?!.*(?<![A-Za-z0-9_])Duke(?![A-Za-z0-9_])).*";

/// Search input plus the mode flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryDescriptor {
    pub text: String,
    pub use_regex: bool,
}

impl QueryDescriptor {
    pub fn new(text: impl Into<String>, use_regex: bool) -> Self {
        Self {
            text: text.into(),
            use_regex,
        }
    }

    pub fn substring(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }

    pub fn regex(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }

    /// The "Filter Non-Duke" shortcut, with regex mode forced on.
    pub fn non_duke() -> Self {
        Self::regex(NON_DUKE_PATTERN)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Which applicant fields a regex query is tested against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RegexScope {
    /// University only.
    #[default]
    University,
    /// Name, university and email, like substring mode.
    SameAsSubstring,
}

/// A query compiled once and applied to every applicant of a roster.
#[derive(Debug)]
pub enum Matcher {
    All,
    Substring(String),
    Pattern(Regex, RegexScope),
}

impl Matcher {
    pub fn compile(query: &QueryDescriptor, scope: RegexScope) -> Result<Self, DashboardError> {
        if query.is_empty() {
            return Ok(Matcher::All);
        }
        if !query.use_regex {
            return Ok(Matcher::Substring(query.text.to_lowercase()));
        }
        Regex::new(&format!("(?i){}", query.text))
            .map(|re| Matcher::Pattern(re, scope))
            .map_err(|e| DashboardError::InvalidPattern(e.to_string()))
    }

    pub fn matches(&self, applicant: &Applicant) -> bool {
        match self {
            Matcher::All => true,
            Matcher::Substring(needle) => substring_fields(applicant)
                .any(|field| field.to_lowercase().contains(needle.as_str())),
            Matcher::Pattern(re, RegexScope::University) => applicant
                .university
                .as_deref()
                .is_some_and(|field| pattern_matches(re, field)),
            Matcher::Pattern(re, RegexScope::SameAsSubstring) => {
                substring_fields(applicant).any(|field| pattern_matches(re, field))
            }
        }
    }
}

fn substring_fields(applicant: &Applicant) -> impl Iterator<Item = &str> {
    [&applicant.name, &applicant.university, &applicant.email]
        .into_iter()
        .filter_map(|field| field.as_deref())
        .filter(|field| !field.is_empty())
}

// A backtracking limit hit while matching counts as no match.
fn pattern_matches(re: &Regex, field: &str) -> bool {
    re.is_match(field).unwrap_or(false)
}

/// Result of one filter evaluation: positions into the roster, in roster order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    pub positions: Vec<usize>,
    pub invalid_pattern: Option<DashboardError>,
}

impl FilterOutcome {
    pub fn is_valid(&self) -> bool {
        self.invalid_pattern.is_none()
    }
}

/// Computes which roster entries survive `query`.
pub fn filter_positions(
    roster: &[Applicant],
    query: &QueryDescriptor,
    scope: RegexScope,
) -> FilterOutcome {
    match Matcher::compile(query, scope) {
        Ok(matcher) => {
            let positions: Vec<usize> = roster
                .iter()
                .enumerate()
                .filter(|(_, applicant)| matcher.matches(applicant))
                .map(|(i, _)| i)
                .collect();
            debug!(
                "query {:?} (regex: {}) kept {} of {} applicants",
                query.text,
                query.use_regex,
                positions.len(),
                roster.len()
            );
            FilterOutcome {
                positions,
                invalid_pattern: None,
            }
        }
        Err(err) => {
            debug!("query {:?} rejected: {}", query.text, err);
            FilterOutcome {
                positions: Vec::new(),
                invalid_pattern: Some(err),
            }
        }
    }
}

/// Filters `roster` with the default regex scope, keeping roster order.
pub fn filter<'a>(roster: &'a [Applicant], query: &QueryDescriptor) -> Vec<&'a Applicant> {
    filter_positions(roster, query, RegexScope::default())
        .positions
        .into_iter()
        .map(|i| &roster[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::applicant::Status;

    fn applicant(id: &str, name: &str, university: &str, email: &str) -> Applicant {
        let mut a = Applicant::new(id, Status::Pending);
        a.name = Some(name.to_string()).filter(|s| !s.is_empty());
        a.university = Some(university.to_string()).filter(|s| !s.is_empty());
        a.email = Some(email.to_string()).filter(|s| !s.is_empty());
        a
    }

    fn roster() -> Vec<Applicant> {
        vec![
            applicant("a", "Alice Smith", "Duke University", "alice@duke.edu"),
            applicant("b", "Bob Jones", "MIT", "bob@mit.edu"),
            applicant("c", "Carol Duke", "Stanford", "carol@example.com"),
            applicant("d", "Dan", "", "dan@dukeenergy.com"),
            applicant("e", "", "UNC Chapel Hill", ""),
        ]
    }

    fn ids(applicants: &[&Applicant]) -> Vec<String> {
        applicants.iter().map(|a| a.id.clone()).collect()
    }

    #[test]
    fn empty_query_is_identity() {
        let r = roster();
        for use_regex in [false, true] {
            let out = filter(&r, &QueryDescriptor::new("", use_regex));
            assert_eq!(ids(&out), vec!["a", "b", "c", "d", "e"]);
        }
    }

    #[test]
    fn substring_checks_name_university_and_email_case_insensitively() {
        let r = roster();
        let out = filter(&r, &QueryDescriptor::substring("DUKE"));
        assert_eq!(ids(&out), vec!["a", "c", "d"]);

        let out = filter(&r, &QueryDescriptor::substring("chapel"));
        assert_eq!(ids(&out), vec!["e"]);
    }

    #[test]
    fn substring_law_holds_for_every_applicant() {
        let r = roster();
        for q in ["a", "mit", "@", "smith", "zzz", "duke.edu"] {
            let kept = ids(&filter(&r, &QueryDescriptor::substring(q)));
            for a in &r {
                let expected = [&a.name, &a.university, &a.email]
                    .into_iter()
                    .flatten()
                    .filter(|f| !f.is_empty())
                    .any(|f| f.to_lowercase().contains(&q.to_lowercase()));
                assert_eq!(kept.contains(&a.id), expected, "query {q:?}, applicant {}", a.id);
            }
        }
    }

    #[test]
    fn regex_only_checks_university() {
        let r = roster();
        let out = filter(&r, &QueryDescriptor::regex("duke"));
        assert_eq!(ids(&out), vec!["a"]);
    }

    #[test]
    fn regex_scope_can_widen_to_substring_fields() {
        let r = roster();
        let outcome = filter_positions(&r, &QueryDescriptor::regex("duke"), RegexScope::SameAsSubstring);
        assert_eq!(outcome.positions, vec![0, 2, 3]);
    }

    #[test]
    fn invalid_pattern_yields_empty_result_and_flag() {
        let r = roster();
        let outcome = filter_positions(&r, &QueryDescriptor::regex("(unclosed"), RegexScope::University);
        assert!(outcome.positions.is_empty());
        assert!(matches!(outcome.invalid_pattern, Some(DashboardError::InvalidPattern(_))));
        assert!(!outcome.is_valid());
    }

    #[test]
    fn invalid_pattern_is_plain_text_in_substring_mode() {
        let mut r = roster();
        r[1].name = Some("Bob (unclosed".to_string());
        let outcome = filter_positions(&r, &QueryDescriptor::substring("(unclosed"), RegexScope::University);
        assert_eq!(outcome.positions, vec![1]);
        assert!(outcome.is_valid());
    }

    #[test]
    fn non_duke_shortcut_excludes_the_word_duke() {
        let mut r = roster();
        r.push(applicant("f", "Fay", "Dukes Academy", ""));
        let out = filter(&r, &QueryDescriptor::non_duke());
        // "d" has no university and is skipped; "Dukes" is not the word "Duke".
        assert_eq!(ids(&out), vec!["b", "c", "e", "f"]);
    }

    #[test]
    fn non_duke_word_edges_are_ascii_only() {
        let r = vec![
            applicant("a", "Ann", "Dukeé Institute", ""),
            applicant("b", "Bo", "Université de Duke", ""),
            applicant("c", "Cy", "éDuke", ""),
            applicant("d", "Di", "Duke_Online", ""),
            applicant("e", "Ed", "DUKE", ""),
        ];
        let out = filter(&r, &QueryDescriptor::non_duke());
        // Only an underscore or ASCII alphanumeric glued to "Duke" hides it.
        assert_eq!(ids(&out), vec!["d"]);
    }

    #[test]
    fn scenario_duke_and_mit() {
        let mut a = Applicant::new("A", Status::Pending);
        a.university = Some("Duke".to_string());
        let mut b = Applicant::new("B", Status::Pending);
        b.university = Some("MIT".to_string());
        let r = vec![a, b];

        assert_eq!(ids(&filter(&r, &QueryDescriptor::default())), vec!["A", "B"]);
        assert_eq!(ids(&filter(&r, &QueryDescriptor::non_duke())), vec!["B"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let r = roster();
        for q in [
            QueryDescriptor::substring("du"),
            QueryDescriptor::regex("^(MIT|Stanford)$"),
            QueryDescriptor::non_duke(),
        ] {
            let once: Vec<Applicant> = filter(&r, &q).into_iter().cloned().collect();
            let twice: Vec<Applicant> = filter(&once, &q).into_iter().cloned().collect();
            assert_eq!(once, twice);
        }
    }
}
