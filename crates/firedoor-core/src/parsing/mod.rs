pub mod header;
pub mod identity;
pub mod remedial;

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Heading that opens every door record in the inspection template.
pub const DOOR_DELIMITER: &str = "Door identification number";

/// One door's slice of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorSection<'a> {
    /// 1-based position among door sections.
    pub index: usize,
    pub text: &'a str,
}

static DOOR_DELIMITER_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

/// Lazily compile a pattern into a process-wide cell.
///
/// A pattern that fails to compile yields `None` and the caller treats it as "no match".
pub(crate) fn cached_regex(
    cell: &'static OnceLock<Option<Regex>>,
    pattern: &str,
) -> Option<&'static Regex> {
    cell.get_or_init(|| Regex::new(pattern).ok()).as_ref()
}

/// Normalize CRLF line endings so line-oriented patterns see plain `\n`.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Split the document into door sections on every (case-insensitive)
/// occurrence of [`DOOR_DELIMITER`].
///
/// Text before the first delimiter is front matter and is dropped, so the
/// result has exactly one section per delimiter occurrence.
pub fn split_door_sections(text: &str) -> Vec<DoorSection<'_>> {
    let pattern = format!("(?i){}", regex::escape(DOOR_DELIMITER));
    let Some(re) = cached_regex(&DOOR_DELIMITER_REGEX, &pattern) else {
        return Vec::new();
    };

    re.split(text)
        .skip(1)
        .enumerate()
        .map(|(i, text)| DoorSection { index: i + 1, text })
        .collect()
}
