//! Recorded co-signings, keyed by canonical combination key.
//!
//! Illustrative entries only; they are not drawn from the U.S. Reports.
//! Keys are ascending, comma-joined justice ids. Records under a key are
//! listed most recent first, and the first record's type is the one shown
//! on the combination's card.

use crate::model::{CaseRecord, OpinionType};

use OpinionType::{Concurrence, Dissent, Majority};

const fn case(
    case_name: &'static str,
    date: &'static str,
    opinion: OpinionType,
    citation: &'static str,
) -> CaseRecord {
    CaseRecord {
        case_name,
        date,
        citation,
        opinion: Some(opinion),
    }
}

/// The occurrence table in authoring order.
pub static CASES: &[(&str, &[CaseRecord])] = &[
    (
        "0,1,2,3,4,5,6,7,8",
        &[
            case(
                "Smith v. United States",
                "2024-06-15",
                Majority,
                "601 U.S. 123",
            ),
        ],
    ),
    (
        "0,1,2,4,5,6,7,8",
        &[
            case(
                "Johnson v. State of California",
                "2024-05-20",
                Majority,
                "600 U.S. 456",
            ),
        ],
    ),
    (
        "0,1,2,5,6,7,8",
        &[
            case(
                "Williams v. Department of Education",
                "2024-04-12",
                Majority,
                "599 U.S. 789",
            ),
        ],
    ),
    (
        "0,1,2,5,6,7",
        &[
            case(
                "Brown v. Environmental Protection Agency",
                "2024-03-08",
                Majority,
                "598 U.S. 234",
            ),
            case(
                "Garcia v. Immigration and Customs Enforcement",
                "2024-01-22",
                Majority,
                "597 U.S. 567",
            ),
        ],
    ),
    (
        "0,3,4,6,8",
        &[
            case(
                "Davis v. State of Texas",
                "2023-12-10",
                Majority,
                "596 U.S. 890",
            ),
        ],
    ),
    (
        "0,1,2,5,6",
        &[
            case(
                "Miller v. Federal Trade Commission",
                "2024-02-28",
                Majority,
                "598 U.S. 111",
            ),
        ],
    ),
    (
        "1,2,5,6,7",
        &[
            case(
                "Anderson v. City of New York",
                "2024-01-15",
                Majority,
                "597 U.S. 222",
            ),
        ],
    ),
    (
        "3,4,6,8",
        &[
            case(
                "Martinez v. State Board of Education",
                "2023-11-30",
                Concurrence,
                "595 U.S. 333",
            ),
        ],
    ),
    (
        "0,5,6,7",
        &[
            case(
                "Taylor v. Securities and Exchange Commission",
                "2024-03-22",
                Dissent,
                "598 U.S. 444",
            ),
        ],
    ),
    (
        "1,2,5",
        &[
            case(
                "Rodriguez v. Department of Health",
                "2024-05-05",
                Dissent,
                "600 U.S. 555",
            ),
        ],
    ),
    (
        "3,4,8",
        &[
            case(
                "Wilson v. State of Florida",
                "2024-04-18",
                Dissent,
                "599 U.S. 666",
            ),
            case(
                "Thompson v. United States Postal Service",
                "2024-02-14",
                Concurrence,
                "597 U.S. 777",
            ),
        ],
    ),
    (
        "0,6",
        &[
            case(
                "Harris v. State of Georgia",
                "2023-10-20",
                Concurrence,
                "594 U.S. 888",
            ),
        ],
    ),
    (
        "3,4",
        &[
            case(
                "Clark v. Department of Labor",
                "2024-06-01",
                Dissent,
                "601 U.S. 999",
            ),
        ],
    ),
    (
        "1,2",
        &[
            case(
                "Lewis v. Federal Communications Commission",
                "2024-05-28",
                Dissent,
                "600 U.S. 1111",
            ),
        ],
    ),
    (
        "5,7",
        &[
            case(
                "Walker v. Department of Defense",
                "2024-04-25",
                Concurrence,
                "599 U.S. 1222",
            ),
        ],
    ),
    (
        "0,1,2,3,4,5,6,7",
        &[
            case(
                "Green v. State of Michigan",
                "2024-03-15",
                Majority,
                "598 U.S. 1333",
            ),
        ],
    ),
    (
        "2,5,6,7",
        &[
            case(
                "Adams v. Department of Agriculture",
                "2024-02-08",
                Concurrence,
                "597 U.S. 1444",
            ),
        ],
    ),
    (
        "0,3,4",
        &[
            case(
                "Nelson v. State of Washington",
                "2024-01-30",
                Dissent,
                "597 U.S. 1555",
            ),
        ],
    ),
    (
        "4,6,8",
        &[
            case(
                "Carter v. Federal Reserve Board",
                "2023-12-22",
                Concurrence,
                "596 U.S. 1666",
            ),
        ],
    ),
    (
        "1,5,6",
        &[
            case(
                "Mitchell v. Environmental Protection Agency",
                "2024-06-08",
                Concurrence,
                "601 U.S. 1777",
            ),
        ],
    ),
];
