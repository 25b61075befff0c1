use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// TermType
// ---------------------------------------------------------------------------

/// Which subject-term vocabulary a term belongs to. The Library of Congress
/// replaced its original list, and bills indexed under the old one keep it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermType {
    Old = 1,
    New = 2,
}

impl TermType {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            TermType::Old => "Old",
            TermType::New => "New",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TermType::Old => "old",
            TermType::New => "new",
        }
    }
}

impl fmt::Display for TermType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// BillTerm
// ---------------------------------------------------------------------------

/// A subject term (issue area) a bill is indexed under. Terms are unique by
/// (name, term type). Top terms are the broad categories with no parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillTerm {
    pub term_type: TermType,
    pub name: String,
    #[serde(default)]
    pub top_term: bool,
}

impl BillTerm {
    /// Site path for the subject page, e.g.
    /// "/congress/bills/subjects/foreign_trade_and_international_finance".
    pub fn url_path(&self) -> String {
        format!("/congress/bills/subjects/{}", slugify_subject(&self.name))
    }
}

/// Slug for a subject name. Punctuation is dropped, separator runs become a
/// single underscore. Underscores rather than hyphens, matching the site's
/// historical subject URLs.
fn slugify_subject(name: &str) -> String {
    static STRIP: OnceLock<Regex> = OnceLock::new();
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    let strip = STRIP.get_or_init(|| Regex::new(r"[^\w\s-]").unwrap());
    let separators = SEPARATORS.get_or_init(|| Regex::new(r"[-\s]+").unwrap());
    let cleaned = strip.replace_all(name, "").to_lowercase();
    separators.replace_all(cleaned.trim(), "_").to_string()
}

/// Orders terms for display: top terms first, then alphabetically by name.
pub fn sort_terms(terms: &[BillTerm]) -> Vec<&BillTerm> {
    let mut sorted: Vec<&BillTerm> = terms.iter().collect();
    sorted.sort_by(|a, b| (!a.top_term, &a.name).cmp(&(!b.top_term, &b.name)));
    sorted
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
