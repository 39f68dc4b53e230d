use firedoor_core::model::{ExtractionResult, Priority};

pub fn print(result: &ExtractionResult) {
    print!("{}", format_result(result));
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}

/// Human-readable rendering: inspection summary, then tasks grouped by priority.
pub fn format_result(result: &ExtractionResult) -> String {
    let mut out = String::new();
    let inspection = &result.inspection;

    out.push_str("=== Inspection ===\n\n");
    out.push_str(&format!("  Location:   {}\n", or_dash(&inspection.location)));
    out.push_str(&format!("  Date:       {}\n", or_dash(&inspection.date)));
    out.push_str(&format!("  Inspector:  {}\n", or_dash(&inspection.inspector)));
    out.push_str(&format!(
        "  Doors:      {} with remedial actions\n\n",
        inspection.non_compliant_doors
    ));

    if result.tasks.is_empty() {
        out.push_str("No remedial actions found.\n");
        return out;
    }

    let max_door = result
        .tasks
        .iter()
        .map(|t| t.door_id.chars().count())
        .max()
        .unwrap_or(4);

    for priority in Priority::ALL {
        let tasks: Vec<_> = result
            .tasks
            .iter()
            .filter(|t| t.priority == priority)
            .collect();
        if tasks.is_empty() {
            continue;
        }

        out.push_str(&format!("=== {} ({}) ===\n\n", priority, tasks.len()));
        for t in tasks {
            out.push_str(&format!(
                "  {:<width$}  {}  [{}]\n",
                t.door_id,
                t.title,
                t.category,
                width = max_door
            ));
            if t.location != t.door_id {
                out.push_str(&format!("  {:<width$}  at {}\n", "", t.location, width = max_door));
            }
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use firedoor_core::model::{ExtractedTask, InspectionSummary, TaskStatus};

    fn task(door_id: &str, priority: Priority) -> ExtractedTask {
        ExtractedTask {
            door_id: door_id.into(),
            location: format!("Bedroom {door_id}"),
            title: format!("{door_id} - Replace handle"),
            description: String::new(),
            category: "Hardware Issues".into(),
            priority,
            status: TaskStatus::Pending,
        }
    }

    #[test]
    fn test_empty_result() {
        let out = format_result(&ExtractionResult::default());
        assert!(out.contains("Location:   -"));
        assert!(out.contains("No remedial actions found."));
    }

    #[test]
    fn test_groups_by_priority() {
        let result = ExtractionResult {
            inspection: InspectionSummary {
                location: "Riverside Court".into(),
                total_doors: 2,
                non_compliant_doors: 2,
                ..Default::default()
            },
            tasks: vec![task("1A", Priority::Critical), task("2B", Priority::Low)],
        };
        let out = format_result(&result);
        assert!(out.contains("=== critical (1) ==="));
        assert!(out.contains("=== low (1) ==="));
        assert!(!out.contains("=== high"));
        assert!(out.find("1A - Replace handle") < out.find("2B - Replace handle"));
        assert!(out.contains("at Bedroom 1A"));
    }

    #[test]
    fn test_door_column_width_counts_chars() {
        let result = ExtractionResult {
            inspection: InspectionSummary::default(),
            tasks: vec![task("Ström", Priority::High), task("12", Priority::High)],
        };
        let out = format_result(&result);
        // "Ström" is 5 chars (6 bytes): title column starts at 2 + 5 + 2.
        assert!(out.contains("  Ström  Ström - Replace handle"));
        assert!(out.contains("  12     12 - Replace handle"));
    }
}
