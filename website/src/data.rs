//! Generates the JSON combination index and the browser.js client.

use anyhow::{Context, Result};
use coalition_roster::Session;

use crate::config::SiteConfig;
use crate::extractor::data_entries;

/// Generates `data/combinations.json` as a serialized string.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn generate_combination_index(session: &Session, config: &SiteConfig) -> Result<String> {
    let entries = data_entries(session, config);
    serde_json::to_string(&entries).context("Failed to serialize combination index")
}

/// Returns the client-side required-members filter.
///
/// Each `.member-selector` narrows the cards of its own size group to
/// those containing every pressed justice, and refuses presses past its
/// `data-cap`. The selection lives only in the page and resets on
/// navigation, which is how a size filter change clears it.
pub fn browser_js() -> &'static str {
    r#"// Justice combinations — required-member filter
(function () {
  'use strict';

  document.querySelectorAll('.member-selector').forEach(function (selector) {
    const group = selector.closest('.size-group');
    if (!group) return;
    const cap = parseInt(selector.dataset.cap, 10);
    const buttons = Array.prototype.slice.call(selector.querySelectorAll('.member-btn'));
    const cards = Array.prototype.slice.call(group.querySelectorAll('.combination-card'));
    const required = new Set();

    function apply() {
      cards.forEach(function (card) {
        const members = card.dataset.members.split(',');
        let show = true;
        required.forEach(function (id) {
          if (members.indexOf(id) === -1) show = false;
        });
        card.hidden = !show;
      });
      buttons.forEach(function (button) {
        const pressed = required.has(button.dataset.id);
        button.setAttribute('aria-pressed', pressed ? 'true' : 'false');
        button.disabled = !pressed && required.size >= cap;
      });
    }

    buttons.forEach(function (button) {
      button.addEventListener('click', function () {
        const id = button.dataset.id;
        if (required.has(id)) {
          required.delete(id);
        } else if (required.size < cap) {
          required.add(id);
        }
        apply();
      });
    });

    const clear = selector.querySelector('.member-clear');
    if (clear) {
      clear.addEventListener('click', function () {
        required.clear();
        apply();
      });
    }
  });
}());
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use coalition_roster::Variant;

    #[test]
    fn index_lists_every_combination() {
        let session = Session::new(Variant::Restricted).unwrap();
        let json = generate_combination_index(&session, &SiteConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 246);
        assert_eq!(entries[0]["key"], "0,1");
        assert_eq!(entries[0]["url"], "/combinations/0-1/");
    }
}
