use crate::parsing::cached_regex;
use regex::Regex;
use std::sync::OnceLock;

/// Inspection details found in the document preamble. Missing fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderFields {
    pub location: String,
    pub date: String,
    pub inspector: String,
}

static CLIENT_SITE_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
static CONDUCTED_ON_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
static INSPECTOR_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

/// Extract location, date and inspector from the raw document text.
///
/// Best effort: a label that is absent leaves its field empty.
pub fn parse_header(text: &str) -> HeaderFields {
    HeaderFields {
        location: capture(
            &CLIENT_SITE_REGEX,
            r"(?i)Client\s*/\s*Site:?[^\S\n]*\n\s*(\S[^\n]*)",
            text,
        ),
        date: capture(
            &CONDUCTED_ON_REGEX,
            r"(?i)Conducted\s+on:?\s*([0-9]{1,2}\s+\w+\s+[0-9]{4})",
            text,
        ),
        inspector: capture(
            &INSPECTOR_REGEX,
            r"(?i)Fire\s+Door\s+Inspector:?[^\S\n]*\n\s*(\S[^\n]*)",
            text,
        ),
    }
}

/// First capture group of `pattern` in `text`, trimmed; empty when absent.
fn capture(cell: &'static OnceLock<Option<Regex>>, pattern: &str, text: &str) -> String {
    cached_regex(cell, pattern)
        .and_then(|re| re.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}
