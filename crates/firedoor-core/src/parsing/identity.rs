use crate::model::DoorIdentity;
use crate::parsing::cached_regex;
use regex::Regex;
use std::sync::OnceLock;

/// One step of the door identity cascade.
pub struct IdentityRule {
    pub name: &'static str,
    pub resolve: fn(&str) -> Option<DoorIdentity>,
}

/// Identity rules in priority order; the first rule that resolves wins.
pub const IDENTITY_RULES: &[IdentityRule] = &[
    IdentityRule {
        name: "two_line_location",
        resolve: two_line_location,
    },
    IdentityRule {
        name: "bedroom_location",
        resolve: bedroom_location,
    },
    IdentityRule {
        name: "single_line_location",
        resolve: single_line_location,
    },
    IdentityRule {
        name: "leading_number",
        resolve: leading_number,
    },
];

static TWO_LINE_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
static BEDROOM_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
static SINGLE_LINE_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
static TRAILING_ID_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
static LEADING_NUMBER_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

/// Resolve the door ID and location for a door section.
///
/// `index` is the section's 1-based position, used for the `Door-{index}`
/// placeholder when no rule finds an ID. Never returns an empty ID.
pub fn resolve_identity(section: &str, index: usize) -> DoorIdentity {
    let resolved = IDENTITY_RULES.iter().find_map(|rule| {
        let identity = (rule.resolve)(section)?;
        tracing::trace!(rule = rule.name, door_id = %identity.door_id, "identity rule matched");
        Some(identity)
    });

    let mut identity = resolved.unwrap_or_else(|| DoorIdentity {
        door_id: format!("Door-{index}"),
        location: String::new(),
    });
    if identity.location.is_empty() {
        identity.location = identity.door_id.clone();
    }
    identity
}

/// "Location of door" followed by two lines: the second line is the door ID.
fn two_line_location(section: &str) -> Option<DoorIdentity> {
    let re = cached_regex(
        &TWO_LINE_REGEX,
        r"(?i)Location of door[^\n]*\n[^\S\n]*(\S[^\n]*)\n[^\S\n]*(\S[^\n]*)",
    )?;
    let caps = re.captures(section)?;
    let first = caps.get(1)?.as_str().trim();
    let door_id = caps.get(2)?.as_str().trim();
    Some(DoorIdentity {
        door_id: door_id.to_string(),
        location: format!("{first} {door_id}"),
    })
}

/// "Location of door" then, somewhere below, a "Bedroom" line followed by the door ID.
fn bedroom_location(section: &str) -> Option<DoorIdentity> {
    let re = cached_regex(
        &BEDROOM_REGEX,
        r"(?is)Location of door.*?\n[^\S\n]*Bedroom[^\S\n]*\n[^\S\n]*(\S[^\n]*)",
    )?;
    let caps = re.captures(section)?;
    let door_id = caps.get(1)?.as_str().trim();
    Some(DoorIdentity {
        door_id: door_id.to_string(),
        location: format!("Bedroom {door_id}"),
    })
}

/// "Location of door" followed by a single line; the ID is its trailing token.
fn single_line_location(section: &str) -> Option<DoorIdentity> {
    let re = cached_regex(
        &SINGLE_LINE_REGEX,
        r"(?i)Location of door[^\n]*\n[^\S\n]*(\S[^\n]*)",
    )?;
    let caps = re.captures(section)?;
    let location = caps.get(1)?.as_str().trim();
    Some(DoorIdentity {
        door_id: trailing_door_id(location).unwrap_or(location).to_string(),
        location: location.to_string(),
    })
}

/// A number at the very start of the section. Leaves the location empty.
fn leading_number(section: &str) -> Option<DoorIdentity> {
    let re = cached_regex(&LEADING_NUMBER_REGEX, r"\A\s*([0-9]+)")?;
    let caps = re.captures(section)?;
    Some(DoorIdentity {
        door_id: caps.get(1)?.as_str().to_string(),
        location: String::new(),
    })
}

/// Trailing `12`, `12B` style token at the end of a location line.
fn trailing_door_id(line: &str) -> Option<&str> {
    let re = cached_regex(&TRAILING_ID_REGEX, r"([0-9]+[A-Z]?)$")?;
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
