//! Box score aggregation.
//!
//! Reduces a classified timeline to per-stat counts by walking the
//! label-to-stat scoring table. Aggregation never mutates an existing box
//! score; the timeline is the source of truth and the score is recomputed
//! from it whenever it changes.

use std::collections::BTreeMap;
use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::ScoringTable;
use crate::events::ClassifiedEvent;

/// Per-stat counts for one session. Keys come from the scoring table; every
/// value is a non-negative integer. Serialized as the session's `stats`
/// object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoxScore(BTreeMap<String, u64>);

impl BoxScore {
    /// A box score with every stat of the table present and zero. Building
    /// from the table keeps the stat set closed: only configured stats ever
    /// appear, never inferred numeric fields.
    #[must_use]
    pub fn zeroed(table: &ScoringTable) -> Self {
        Self(
            table
                .rules
                .iter()
                .map(|rule| (rule.stat.clone(), 0))
                .collect(),
        )
    }

    /// Count for one stat, zero when absent.
    #[must_use]
    pub fn get(&self, stat: &str) -> u64 {
        self.0.get(stat).copied().unwrap_or(0)
    }

    fn add(&mut self, stat: &str, value: u64) {
        *self.0.entry(stat.to_string()).or_insert(0) += value;
    }

    /// Iterates stats in stable (alphabetical) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(stat, count)| (stat.as_str(), *count))
    }
}

impl fmt::Display for BoxScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (stat, count) in &self.0 {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{stat}={count}")?;
            first = false;
        }
        Ok(())
    }
}

/// Aggregates a classified timeline into a box score.
///
/// Every counted (non-`IGNORED`) event contributes to exactly one stat, with
/// the value the scoring table assigns it; shots contribute two or three
/// points depending on their shot type.
#[must_use]
pub fn aggregate(events: &[ClassifiedEvent], table: &ScoringTable) -> BoxScore {
    let mut score = BoxScore::zeroed(table);

    for event in events.iter().filter(|e| e.is_counted()) {
        let Some(rule) = table.rule_for(event.classified_as) else {
            // A counted label missing from the table contributes nothing.
            continue;
        };
        let value = table
            .value_for(event.classified_as, event.event.shot_type)
            .unwrap_or(rule.value);
        score.add(&rule.stat, value);
        debug!(
            "Counted {} at {:.2}s: {} +{value} (total {})",
            event.classified_as,
            event.event.timestamp,
            rule.stat,
            score.get(&rule.stat)
        );
    }

    score
}
