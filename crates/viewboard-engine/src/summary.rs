//! Summary computer
//!
//! Whole-dataset scalar statistics over the unfiltered batch: total,
//! average, extrema, and the top continent and sport by summed viewership.
//! Every result is renderable: an empty batch yields zeros and absent
//! leaders rather than a division error.

use std::collections::HashMap;
use tracing::{debug, instrument};
use viewboard_common::ViewRecord;

/// The leading label of a dimension with its summed viewership
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DimensionLeader {
    pub label: String,
    pub total: u64,
}

/// Scalar statistics for the summary panel, one per display widget
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SummaryStats {
    pub total: u64,
    pub average: f64,
    pub maximum: u64,
    pub minimum: u64,
    pub top_continent: Option<DimensionLeader>,
    pub top_sport: Option<DimensionLeader>,
}

/// Compute summary statistics over the entire batch
///
/// Leaders are picked by a single left-to-right max scan in first-encountered
/// order, so ties resolve to the group seen first in the batch.
#[instrument(skip(records))]
pub fn compute_summary(records: &[ViewRecord]) -> SummaryStats {
    let total: u64 = records.iter().map(|record| record.viewership).sum();
    let average = if records.is_empty() {
        0.0
    } else {
        total as f64 / records.len() as f64
    };
    let maximum = records
        .iter()
        .map(|record| record.viewership)
        .max()
        .unwrap_or(0);
    let minimum = records
        .iter()
        .map(|record| record.viewership)
        .min()
        .unwrap_or(0);

    let top_continent = leader_by(records, |record| &record.continent);
    let top_sport = leader_by(records, |record| &record.sport);

    debug!(total, maximum, minimum, "Summary computed");

    SummaryStats {
        total,
        average,
        maximum,
        minimum,
        top_continent,
        top_sport,
    }
}

/// Sum viewership per group in first-seen order, then scan for the maximum
fn leader_by<'r, F>(records: &'r [ViewRecord], key: F) -> Option<DimensionLeader>
where
    F: Fn(&'r ViewRecord) -> &'r str,
{
    let mut totals: HashMap<&str, u64> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for record in records {
        let label = key(record);
        match totals.get_mut(label) {
            Some(total) => *total += record.viewership,
            None => {
                totals.insert(label, record.viewership);
                first_seen.push(label);
            }
        }
    }

    let mut leader: Option<DimensionLeader> = None;
    for label in first_seen {
        let total = totals[label];
        let beats = leader.as_ref().map_or(true, |best| total > best.total);
        if beats {
            leader = Some(DimensionLeader {
                label: label.to_string(),
                total,
            });
        }
    }
    leader
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(continent: &str, sport: &str, viewership: u64) -> ViewRecord {
        ViewRecord {
            country: "USA".to_string(),
            continent: continent.to_string(),
            sport: sport.to_string(),
            age: "18-25".to_string(),
            gender: "Male".to_string(),
            referrer: "Social".to_string(),
            device: "Mobile".to_string(),
            peak_hour: "18:00".to_string(),
            viewership,
        }
    }

    #[test]
    fn test_summary_worked_example() {
        let records = vec![
            record("North America", "Swimming", 100),
            record("South America", "Swimming", 50),
        ];

        let summary = compute_summary(&records);
        assert_eq!(summary.total, 150);
        assert_eq!(summary.average, 75.0);
        assert_eq!(summary.maximum, 100);
        assert_eq!(summary.minimum, 50);
        assert_eq!(
            summary.top_continent,
            Some(DimensionLeader {
                label: "North America".to_string(),
                total: 100,
            })
        );
        assert_eq!(
            summary.top_sport,
            Some(DimensionLeader {
                label: "Swimming".to_string(),
                total: 150,
            })
        );
    }

    #[test]
    fn test_tie_break_first_encountered() {
        let records = vec![
            record("Asia", "Judo", 50),
            record("Europe", "Tennis", 50),
        ];

        let summary = compute_summary(&records);
        // Equal totals: the continent seen first wins the scan
        assert_eq!(summary.top_continent.unwrap().label, "Asia");
        assert_eq!(summary.top_sport.unwrap().label, "Judo");
    }

    #[test]
    fn test_leader_accumulates_across_records() {
        let records = vec![
            record("Asia", "Judo", 30),
            record("Europe", "Tennis", 40),
            record("Asia", "Swimming", 20),
        ];

        let summary = compute_summary(&records);
        // Asia totals 50 across two records, beating Europe's 40
        let top = summary.top_continent.unwrap();
        assert_eq!(top.label, "Asia");
        assert_eq!(top.total, 50);
    }

    #[test]
    fn test_empty_batch_is_renderable() {
        let summary = compute_summary(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.average, 0.0);
        assert_eq!(summary.maximum, 0);
        assert_eq!(summary.minimum, 0);
        assert!(summary.top_continent.is_none());
        assert!(summary.top_sport.is_none());
    }
}
