//! Builds the site model from a `coalition_roster::Session`.

use anyhow::Result;
use coalition_roster::labels::{case_count_label, size_name, NOT_OCCURRED_LABEL};
use coalition_roster::{Combination, OpinionType, Session, Variant};

use crate::config::SiteConfig;
use crate::model::{BreadcrumbItem, CardView, DataEntry, GroupView, StatisticsView};

/// Site-absolute path of a combination's detail page.
pub fn combination_path(combination: &Combination) -> String {
    format!("/combinations/{}/", combination.slug())
}

/// Site-absolute path of a size page.
pub fn size_path(size: usize) -> String {
    format!("/sizes/{}/", size)
}

/// Builds the statistics panel figures.
///
/// # Errors
///
/// Returns an error if the universe is empty and a completion rate is
/// requested.
pub fn statistics_view(session: &Session) -> Result<StatisticsView> {
    let stats = session.statistics();
    let completion_rate = match session.variant() {
        Variant::Full => Some(stats.completion_rate_label()?),
        Variant::Restricted => None,
    };
    Ok(StatisticsView {
        total: stats.total_combinations,
        occurred: stats.occurred_count,
        completion_rate,
    })
}

/// Converts a combination to its card.
pub fn card_view(combination: &Combination, session: &Session, config: &SiteConfig) -> CardView {
    let store = session.store();
    let roster = session.roster();
    let cases = store.records(combination);
    let occurred = !cases.is_empty();

    let members = combination
        .ids()
        .iter()
        .filter_map(|&id| roster.get(id))
        .map(|j| j.short_name)
        .collect::<Vec<_>>()
        .join(", ");

    let badge = store
        .primary_type(combination)
        .filter(|t| *t != OpinionType::Majority)
        .map(OpinionType::as_str);

    let info = if occurred {
        case_count_label(cases.len())
    } else {
        NOT_OCCURRED_LABEL.to_string()
    };

    CardView {
        key: combination.key(),
        ids: combination.ids().to_vec(),
        members,
        url: config.url(&combination_path(combination)),
        occurred,
        badge,
        info,
    }
}

/// Builds the size groups visible in the session's current filter state.
pub fn group_views(session: &Session, config: &SiteConfig) -> Vec<GroupView> {
    session
        .visible_groups()
        .into_iter()
        .map(|group| GroupView {
            size: group.summary.size,
            header: group.summary.header(),
            cards: group
                .combinations
                .iter()
                .map(|c| card_view(c, session, config))
                .collect(),
        })
        .collect()
}

/// Builds the client-side combination index.
pub fn data_entries(session: &Session, config: &SiteConfig) -> Vec<DataEntry> {
    let store = session.store();
    session
        .combinations()
        .iter()
        .map(|c| DataEntry {
            key: c.key(),
            ids: c.ids().to_vec(),
            size: c.len(),
            occurred: store.contains(c),
            url: config.url(&combination_path(c)),
        })
        .collect()
}

/// Builds standard breadcrumbs for the homepage.
pub fn home_breadcrumbs(config: &SiteConfig) -> Vec<BreadcrumbItem> {
    vec![BreadcrumbItem {
        label: "All Combinations".to_string(),
        url: config.url("/"),
    }]
}

/// Builds breadcrumbs for a size page.
pub fn size_breadcrumbs(size: usize, config: &SiteConfig) -> Vec<BreadcrumbItem> {
    vec![
        BreadcrumbItem {
            label: "All Combinations".to_string(),
            url: config.url("/"),
        },
        BreadcrumbItem {
            label: size_name(size),
            url: String::new(),
        },
    ]
}

/// Builds breadcrumbs for a combination detail page.
pub fn combination_breadcrumbs(combination: &Combination, config: &SiteConfig) -> Vec<BreadcrumbItem> {
    vec![
        BreadcrumbItem {
            label: "All Combinations".to_string(),
            url: config.url("/"),
        },
        BreadcrumbItem {
            label: size_name(combination.len()),
            url: config.url(&size_path(combination.len())),
        },
        BreadcrumbItem {
            label: combination.key(),
            url: String::new(),
        },
    ]
}

/// Builds breadcrumbs for a standalone page such as About.
pub fn page_breadcrumbs(label: &str, config: &SiteConfig) -> Vec<BreadcrumbItem> {
    vec![
        BreadcrumbItem {
            label: "All Combinations".to_string(),
            url: config.url("/"),
        },
        BreadcrumbItem {
            label: label.to_string(),
            url: String::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dissent_card_carries_badge() {
        let session = Session::new(Variant::Full).unwrap();
        let config = SiteConfig::default();
        let combo = Combination::new(&[3, 4, 8], 9).unwrap();
        let card = card_view(&combo, &session, &config);
        assert_eq!(card.members, "Sotomayor, Kagan, Jackson");
        assert_eq!(card.badge, Some("dissent"));
        assert_eq!(card.info, "2 cases");
        assert_eq!(card.url, "/combinations/3-4-8/");
    }

    #[test]
    fn majority_and_missing_cards_have_no_badge() {
        let session = Session::new(Variant::Full).unwrap();
        let config = SiteConfig::default();
        let all: Vec<usize> = (0..9).collect();
        let unanimous = Combination::new(&all, 9).unwrap();
        let card = card_view(&unanimous, &session, &config);
        assert!(card.occurred);
        assert_eq!(card.badge, None);
        assert_eq!(card.info, "1 case");

        let miss = Combination::new(&[1, 3, 5], 9).unwrap();
        let card = card_view(&miss, &session, &config);
        assert!(!card.occurred);
        assert_eq!(card.info, "Not yet occurred");
    }

    #[test]
    fn restricted_statistics_omit_rate() {
        let session = Session::new(Variant::Restricted).unwrap();
        let view = statistics_view(&session).unwrap();
        assert_eq!(view.total, 246);
        assert_eq!(view.occurred, 12);
        assert!(view.completion_rate.is_none());
    }
}
