//! Data model types for the website generator.

use serde::Serialize;

/// A breadcrumb navigation item.
#[derive(Debug, Serialize)]
pub struct BreadcrumbItem {
    /// Display label.
    pub label: String,
    /// URL (empty for the current page).
    pub url: String,
}

/// A navigation item (possibly with children).
#[derive(Debug, Serialize)]
pub struct NavItem {
    /// Display label.
    pub label: String,
    /// URL (empty string if this is a group heading).
    pub url: String,
    /// Child items.
    pub children: Vec<NavItem>,
}

/// Figures for the statistics panel.
#[derive(Debug, Serialize)]
pub struct StatisticsView {
    /// Total generated combinations.
    pub total: usize,
    /// Combinations with a recorded case.
    pub occurred: usize,
    /// `"4.0%"`; shown by the full variant only.
    pub completion_rate: Option<String>,
}

/// One combination card.
#[derive(Debug, Serialize)]
pub struct CardView {
    /// Canonical key.
    pub key: String,
    /// Member ids, ascending.
    pub ids: Vec<usize>,
    /// Member short names joined with `", "`.
    pub members: String,
    /// Link to the detail page.
    pub url: String,
    /// Whether a case is recorded.
    pub occurred: bool,
    /// Opinion type class for occurred cards whose first record is not a
    /// majority opinion.
    pub badge: Option<&'static str>,
    /// `"2 cases"` or `"Not yet occurred"`.
    pub info: String,
}

/// One size group as rendered.
#[derive(Debug, Serialize)]
pub struct GroupView {
    /// Combination size.
    pub size: usize,
    /// Header text over the whole group.
    pub header: String,
    /// Displayed cards, in generation order.
    pub cards: Vec<CardView>,
}

/// An entry in `data/combinations.json`.
#[derive(Debug, Serialize)]
pub struct DataEntry {
    /// Canonical key.
    pub key: String,
    /// Member ids, ascending.
    pub ids: Vec<usize>,
    /// Combination size.
    pub size: usize,
    /// Whether a case is recorded.
    pub occurred: bool,
    /// Link to the detail page.
    pub url: String,
}
