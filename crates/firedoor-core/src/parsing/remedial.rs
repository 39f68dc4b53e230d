pub const REMEDIAL_HEADING: &str = "Remedial Action";
pub const COMPLIANCE_HEADING: &str = "Compliance Rating";

/// The part of a door section between the "Remedial Action" heading and the
/// next "Compliance Rating" heading (or the end of the section).
///
/// `None` when the section has no remedial heading at all.
pub fn remedial_window(section: &str) -> Option<&str> {
    let start = section.find(REMEDIAL_HEADING)?;
    let rest = &section[start..];
    let end = rest.find(COMPLIANCE_HEADING).unwrap_or(rest.len());
    Some(&rest[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_ends_at_compliance_rating() {
        let section = "Door type\nFD30\nRemedial Action\nHandle - To be replaced\nYes\nCompliance Rating\nFail\n";
        assert_eq!(
            remedial_window(section),
            Some("Remedial Action\nHandle - To be replaced\nYes\n")
        );
    }

    #[test]
    fn test_window_runs_to_section_end() {
        let section = "Remedial Action\nHinges - To be replaced\nYes";
        assert_eq!(remedial_window(section), Some(section));
    }

    #[test]
    fn test_compliance_rating_before_heading_is_ignored() {
        let section = "Compliance Rating\nPass\nRemedial Action\nNone\n";
        assert_eq!(remedial_window(section), Some("Remedial Action\nNone\n"));
    }

    #[test]
    fn test_no_heading_no_window() {
        assert_eq!(remedial_window("Handle - To be replaced\nYes"), None);
        assert_eq!(remedial_window(""), None);
    }
}
