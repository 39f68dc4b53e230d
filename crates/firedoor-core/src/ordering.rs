use crate::model::ExtractedTask;
use crate::parsing::cached_regex;
use regex::Regex;
use std::cmp::Ordering;
use std::sync::OnceLock;

static DOOR_NUMBER_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

/// Sort tasks by priority rank, then by natural door-ID order.
///
/// The sort is stable, so tasks for the same door keep catalog order.
pub fn sort_tasks(tasks: &mut [ExtractedTask]) {
    tasks.sort_by(|a, b| {
        a.priority
            .rank()
            .cmp(&b.priority.rank())
            .then_with(|| natural_cmp(&a.door_id, &b.door_id))
    });
}

/// Natural ordering of door IDs: "2A" < "2B" < "10A".
///
/// Both IDs must start with digits (optionally followed by one uppercase
/// letter) to be compared numerically; otherwise the raw strings are compared.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    match (door_number(a), door_number(b)) {
        (Some((a_num, a_letter)), Some((b_num, b_letter))) => {
            cmp_digits(a_num, b_num).then_with(|| a_letter.cmp(b_letter))
        }
        _ => a.cmp(b),
    }
}

/// Leading digit run and optional uppercase letter.
fn door_number(id: &str) -> Option<(&str, &str)> {
    let re = cached_regex(&DOOR_NUMBER_REGEX, r"^([0-9]+)([A-Z]?)")?;
    let caps = re.captures(id)?;
    Some((caps.get(1)?.as_str(), caps.get(2).map_or("", |m| m.as_str())))
}

/// Compare two ASCII digit runs by numeric value without parsing.
fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Priority, TaskStatus};

    fn task(door_id: &str, priority: Priority, title: &str) -> ExtractedTask {
        ExtractedTask {
            door_id: door_id.into(),
            location: door_id.into(),
            title: format!("{door_id} - {title}"),
            description: String::new(),
            category: "Hardware Issues".into(),
            priority,
            status: TaskStatus::Pending,
        }
    }

    #[test]
    fn test_natural_cmp_numbers() {
        assert_eq!(natural_cmp("2", "10"), Ordering::Less);
        assert_eq!(natural_cmp("10A", "9B"), Ordering::Greater);
        assert_eq!(natural_cmp("007", "7"), Ordering::Equal);
    }

    #[test]
    fn test_natural_cmp_letters() {
        assert_eq!(natural_cmp("2A", "2B"), Ordering::Less);
        assert_eq!(natural_cmp("2", "2A"), Ordering::Less);
        assert_eq!(natural_cmp("2B", "10A"), Ordering::Less);
    }

    #[test]
    fn test_natural_cmp_long_digit_runs() {
        assert_eq!(
            natural_cmp("99999999999999999999999", "100000000000000000000000"),
            Ordering::Less
        );
    }

    #[test]
    fn test_natural_cmp_falls_back_to_lexicographic() {
        assert_eq!(natural_cmp("Door-10", "Door-2"), Ordering::Less);
        assert_eq!(natural_cmp("Plant room", "Door-1"), Ordering::Greater);
        // Mixed: one numeric, one not, compares raw strings.
        assert_eq!(natural_cmp("10", "Door-1"), Ordering::Less);
        assert_eq!(natural_cmp("(5)", "1"), Ordering::Less);
    }

    #[test]
    fn test_non_ascii_digits_compare_as_text() {
        // Arabic-Indic three is not a door number.
        assert_eq!(door_number("\u{0663}"), None);
        assert_eq!(natural_cmp("\u{0663}", "100"), Ordering::Greater);
        assert_eq!(natural_cmp("100", "Z"), Ordering::Less);
        assert_eq!(natural_cmp("Z", "\u{0663}"), Ordering::Less);
    }

    #[test]
    fn test_sort_mixed_ids_is_consistent() {
        let ids = ["\u{0663}", "Z", "100", "2B", "Door-1", "(5)", "2A", "\u{0663}1A", "10"];
        let mut tasks: Vec<ExtractedTask> = ids
            .iter()
            .map(|id| task(id, Priority::High, "Replace handle"))
            .collect();
        sort_tasks(&mut tasks);
        for pair in tasks.windows(2) {
            assert_ne!(
                natural_cmp(&pair[0].door_id, &pair[1].door_id),
                Ordering::Greater
            );
        }
        let sorted: Vec<&str> = tasks.iter().map(|t| t.door_id.as_str()).collect();
        assert_eq!(
            sorted,
            vec!["(5)", "2A", "2B", "10", "100", "Door-1", "Z", "\u{0663}", "\u{0663}1A"]
        );
    }

    #[test]
    fn test_sort_priority_then_door() {
        let mut tasks = vec![
            task("10A", Priority::High, "Replace hinges"),
            task("2B", Priority::Medium, "Adjust door gaps"),
            task("2A", Priority::Critical, "Replace glazing"),
            task("2A", Priority::High, "Replace handle"),
            task("1", Priority::Low, "Fit fire door signage"),
        ];
        sort_tasks(&mut tasks);
        let titles: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "2A - Replace glazing",
                "2A - Replace handle",
                "10A - Replace hinges",
                "2B - Adjust door gaps",
                "1 - Fit fire door signage",
            ]
        );
    }

    #[test]
    fn test_sort_is_stable_for_same_door_and_priority() {
        let mut tasks = vec![
            task("3", Priority::High, "Replace handle"),
            task("3", Priority::High, "Replace hinges"),
            task("3", Priority::High, "Replace door closer"),
        ];
        sort_tasks(&mut tasks);
        let titles: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "3 - Replace handle",
                "3 - Replace hinges",
                "3 - Replace door closer"
            ]
        );
    }
}
