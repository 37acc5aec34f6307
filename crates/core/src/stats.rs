//! Aggregate statistics over the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::item::Item;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemStats {
    pub total_items: usize,
    pub total_value: f64,
    /// Arithmetic mean of `value`; 0 for an empty store.
    pub average_value: f64,
    pub timestamp: DateTime<Utc>,
}

impl ItemStats {
    pub fn compute(items: &[Item], generated_at: DateTime<Utc>) -> Self {
        let total_items = items.len();
        let total_value: f64 = items.iter().map(|i| i.value).sum();
        let average_value = if total_items == 0 {
            0.0
        } else {
            total_value / total_items as f64
        };

        Self {
            total_items,
            total_value,
            average_value,
            timestamp: generated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::ItemId;

    fn item(id: u64, value: f64) -> Item {
        Item {
            id: ItemId::new(id),
            name: format!("Item {id}"),
            description: "d".to_string(),
            value,
        }
    }

    #[test]
    fn empty_store_has_zero_average() {
        let stats = ItemStats::compute(&[], Utc::now());
        assert_eq!(stats.total_items, 0);
        assert_eq!(stats.total_value, 0.0);
        assert_eq!(stats.average_value, 0.0);
    }

    #[test]
    fn sums_and_averages_values() {
        let stats = ItemStats::compute(&[item(1, 0.0), item(2, 250.0)], Utc::now());
        assert_eq!(stats.total_items, 2);
        assert_eq!(stats.total_value, 250.0);
        assert_eq!(stats.average_value, 125.0);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let stats = ItemStats::compute(&[item(1, 10.0)], Utc::now());
        let json = serde_json::to_value(&stats).unwrap();
        assert!(json.get("totalItems").is_some());
        assert!(json.get("totalValue").is_some());
        assert!(json.get("averageValue").is_some());
        assert!(json["timestamp"].is_string());
    }
}
