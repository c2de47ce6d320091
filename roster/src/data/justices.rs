//! The sitting bench, as of January 2025.

use crate::model::Justice;

/// Roster size N.
pub const ROSTER_SIZE: usize = 9;

/// All justices in seniority order; `JUSTICES[i].id == i`.
pub static JUSTICES: [Justice; ROSTER_SIZE] = [
    Justice {
        id: 0,
        name: "John Roberts",
        short_name: "Roberts",
        title: Some("Chief Justice"),
    },
    Justice {
        id: 1,
        name: "Clarence Thomas",
        short_name: "Thomas",
        title: None,
    },
    Justice {
        id: 2,
        name: "Samuel Alito",
        short_name: "Alito",
        title: None,
    },
    Justice {
        id: 3,
        name: "Sonia Sotomayor",
        short_name: "Sotomayor",
        title: None,
    },
    Justice {
        id: 4,
        name: "Elena Kagan",
        short_name: "Kagan",
        title: None,
    },
    Justice {
        id: 5,
        name: "Neil Gorsuch",
        short_name: "Gorsuch",
        title: None,
    },
    Justice {
        id: 6,
        name: "Brett Kavanaugh",
        short_name: "Kavanaugh",
        title: None,
    },
    Justice {
        id: 7,
        name: "Amy Coney Barrett",
        short_name: "Barrett",
        title: None,
    },
    Justice {
        id: 8,
        name: "Ketanji Brown Jackson",
        short_name: "Jackson",
        title: None,
    },
];
