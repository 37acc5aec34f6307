//! The `Item` record plus the inputs that create and modify it.

use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};
use crate::id::ItemId;

/// A single stored record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub value: f64,
}

impl Item {
    /// Case-insensitive substring match over `name` and `description`.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.description.to_lowercase().contains(needle)
    }

    /// Merge the fields present in `patch` over this item.
    ///
    /// Validation happens before any field is written, so a rejected patch
    /// leaves the item unchanged.
    pub fn apply(&mut self, patch: ItemPatch) -> StoreResult<()> {
        if let Some(name) = patch.name.as_deref() {
            require_text("name", name)?;
        }
        if let Some(description) = patch.description.as_deref() {
            require_text("description", description)?;
        }

        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(value) = patch.value {
            self.value = value;
        }
        Ok(())
    }
}

/// Input for creating an item. `name` and `description` are required.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub value: Option<f64>,
}

impl NewItem {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            value: None,
        }
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    /// Check required fields and build the stored record under `id`.
    pub(crate) fn into_item(self, id: ItemId) -> StoreResult<Item> {
        match (self.name, self.description) {
            (Some(name), Some(description)) if !is_blank(&name) && !is_blank(&description) => {
                Ok(Item {
                    id,
                    name,
                    description,
                    value: self.value.unwrap_or(0.0),
                })
            }
            _ => Err(StoreError::validation("Name and description are required")),
        }
    }
}

/// Partial update. `None` means "field absent"; `Some` always replaces,
/// including `Some(0.0)` for `value`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub value: Option<f64>,
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn require_text(field: &str, value: &str) -> StoreResult<()> {
    if is_blank(value) {
        return Err(StoreError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Item {
        Item {
            id: ItemId::new(1),
            name: "Widget".to_string(),
            description: "A useful thing".to_string(),
            value: 100.0,
        }
    }

    #[test]
    fn new_item_defaults_value_to_zero() {
        let item = NewItem::new("A", "first").into_item(ItemId::new(9)).unwrap();
        assert_eq!(item.id, ItemId::new(9));
        assert_eq!(item.value, 0.0);
    }

    #[test]
    fn new_item_requires_name_and_description() {
        let missing_name = NewItem {
            description: Some("d".to_string()),
            ..NewItem::default()
        };
        let blank_description = NewItem::new("n", "   ");

        for input in [missing_name, blank_description, NewItem::default()] {
            match input.into_item(ItemId::FIRST) {
                Err(StoreError::Validation(_)) => {}
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn empty_patch_leaves_item_unchanged() {
        let mut item = sample();
        item.apply(ItemPatch::default()).unwrap();
        assert_eq!(item, sample());
    }

    #[test]
    fn patch_replaces_only_present_fields() {
        let mut item = sample();
        item.apply(ItemPatch {
            description: Some("Updated".to_string()),
            ..ItemPatch::default()
        })
        .unwrap();

        assert_eq!(item.name, "Widget");
        assert_eq!(item.description, "Updated");
        assert_eq!(item.value, 100.0);
    }

    #[test]
    fn patch_with_zero_value_replaces_value() {
        let mut item = sample();
        item.apply(ItemPatch {
            value: Some(0.0),
            ..ItemPatch::default()
        })
        .unwrap();
        assert_eq!(item.value, 0.0);
    }

    #[test]
    fn patch_with_blank_name_is_rejected_without_side_effects() {
        let mut item = sample();
        let err = item
            .apply(ItemPatch {
                name: Some(String::new()),
                value: Some(5.0),
                ..ItemPatch::default()
            })
            .unwrap_err();

        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(item, sample());
    }

    #[test]
    fn search_match_is_case_insensitive_over_both_fields() {
        let item = sample();
        assert!(item.matches_lowercase("widg"));
        assert!(item.matches_lowercase("useful"));
        assert!(!item.matches_lowercase("gadget"));
    }
}
