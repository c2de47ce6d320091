//! JSON serializer for one variant of the combination universe.

use serde_json::{json, Map, Value};

use crate::session::Session;

/// Serializes the roster, the occurrence table and every generated
/// combination of `session`'s variant to a JSON `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json(session: &Session) -> Value {
    let store = session.store();
    let statistics = session.statistics();

    let mut occurrences = Map::new();
    for (key, records) in store.entries() {
        occurrences.insert(key.to_owned(), json!(records));
    }

    let combinations: Vec<Value> = session
        .combinations()
        .iter()
        .map(|c| {
            json!({
                "key": c.key(),
                "ids": c.ids(),
                "size": c.len(),
                "occurred": store.contains(c),
            })
        })
        .collect();

    json!({
        "variant": session.variant(),
        "sizes": session.variant().size_range().collect::<Vec<_>>(),
        "justices": session.roster(),
        "occurrences": Value::Object(occurrences),
        "statistics": statistics,
        "combinations": combinations,
    })
}
