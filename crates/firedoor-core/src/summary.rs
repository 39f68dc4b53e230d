use crate::model::{ExtractedTask, InspectionSummary};
use crate::parsing::header::HeaderFields;
use std::collections::HashSet;

/// Build the inspection summary from header fields and the extracted tasks.
///
/// Only doors that produced at least one task are visible here, so
/// `total_doors` equals `non_compliant_doors` and `compliant_doors` stays 0.
pub fn summarize(header: HeaderFields, tasks: &[ExtractedTask]) -> InspectionSummary {
    let unique_doors: HashSet<&str> = tasks.iter().map(|t| t.door_id.as_str()).collect();

    InspectionSummary {
        location: header.location,
        date: header.date,
        inspector: header.inspector,
        total_doors: unique_doors.len(),
        compliant_doors: 0,
        non_compliant_doors: unique_doors.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Priority, TaskStatus};

    fn task(door_id: &str) -> ExtractedTask {
        ExtractedTask {
            door_id: door_id.into(),
            location: door_id.into(),
            title: format!("{door_id} - Replace handle"),
            description: String::new(),
            category: "Hardware Issues".into(),
            priority: Priority::High,
            status: TaskStatus::Pending,
        }
    }

    #[test]
    fn test_counts_distinct_doors() {
        let tasks = vec![task("1A"), task("1A"), task("2"), task("Door-3")];
        let s = summarize(HeaderFields::default(), &tasks);
        assert_eq!(s.total_doors, 3);
        assert_eq!(s.non_compliant_doors, 3);
        assert_eq!(s.compliant_doors, 0);
    }

    #[test]
    fn test_no_tasks_zero_doors() {
        let header = HeaderFields {
            location: "Acme".into(),
            date: "1 May 2024".into(),
            inspector: "J. Smith".into(),
        };
        let s = summarize(header, &[]);
        assert_eq!(s.location, "Acme");
        assert_eq!(s.total_doors, 0);
        assert_eq!(s.non_compliant_doors, 0);
    }
}
