//! Display strings shared by every rendering of the combination universe.

/// Card label for a combination with no recorded case.
pub const NOT_OCCURRED_LABEL: &str = "Not yet occurred";

/// Detail-view message for a combination with no recorded case.
pub const NO_CASES_MESSAGE: [&str; 2] = [
    "This combination has not yet occurred in any signed opinion.",
    "When it does, the case details will appear here!",
];

/// Friendly name for a size group (e.g., `"Trios (3 Justices)"`).
#[must_use]
pub fn size_name(size: usize) -> String {
    let name = match size {
        2 => "Pairs (2 Justices)",
        3 => "Trios (3 Justices)",
        4 => "Quads (4 Justices)",
        5 => "Five Justices",
        6 => "Six Justices",
        7 => "Seven Justices",
        8 => "Eight Justices",
        9 => "All Nine Justices (Unanimous)",
        _ => return format!("{size} Justices"),
    };
    name.to_string()
}

/// Short singular label used as the restricted detail title.
#[must_use]
pub fn short_size_label(size: usize) -> String {
    match size {
        2 => "Pair".to_string(),
        3 => "Trio".to_string(),
        4 => "Quad".to_string(),
        _ => format!("{size} Justices"),
    }
}

/// Size group header: `"<name> (<occurred> of <total> occurred)"`.
#[must_use]
pub fn group_header(size: usize, occurred: usize, total: usize) -> String {
    format!("{} ({} of {} occurred)", size_name(size), occurred, total)
}

/// `"1 case"` or `"<n> cases"`.
#[must_use]
pub fn case_count_label(count: usize) -> String {
    if count == 1 {
        "1 case".to_string()
    } else {
        format!("{count} cases")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_format() {
        assert_eq!(group_header(2, 5, 36), "Pairs (2 Justices) (5 of 36 occurred)");
        assert_eq!(
            group_header(9, 1, 1),
            "All Nine Justices (Unanimous) (1 of 1 occurred)"
        );
    }

    #[test]
    fn unknown_sizes_fall_back() {
        assert_eq!(size_name(11), "11 Justices");
        assert_eq!(short_size_label(5), "5 Justices");
    }

    #[test]
    fn case_counts_pluralize() {
        assert_eq!(case_count_label(1), "1 case");
        assert_eq!(case_count_label(2), "2 cases");
    }
}
