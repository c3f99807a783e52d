use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Complete mapping of item name to quantity, as last returned by the
/// inventory service.
///
/// Quantities are kept as JSON numbers so they render exactly as the
/// service sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventorySnapshot {
    items: BTreeMap<String, Number>,
}

impl InventorySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Number> {
        self.items.get(name)
    }

    /// Entries in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Number> {
        self.items.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for InventorySnapshot
where
    K: Into<String>,
    V: Into<Number>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            items: iter
                .into_iter()
                .map(|(name, amount)| (name.into(), amount.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a InventorySnapshot {
    type Item = (&'a String, &'a Number);
    type IntoIter = btree_map::Iter<'a, String, Number>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_snapshot_is_empty() {
        let snapshot = InventorySnapshot::new();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.len(), 0);
    }

    #[test]
    fn decodes_stocks_body() {
        let snapshot: InventorySnapshot =
            serde_json::from_str(r#"{"bananas": 5, "apples": 3}"#).unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get("apples"), Some(&Number::from(3)));
        let names: Vec<&str> = snapshot.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["apples", "bananas"]);
    }

    #[test]
    fn keeps_fractional_quantities() {
        let snapshot: InventorySnapshot = serde_json::from_str(r#"{"flour": 2.5}"#).unwrap();
        assert_eq!(snapshot.get("flour").map(ToString::to_string).as_deref(), Some("2.5"));
    }

    #[test]
    fn rejects_non_object_body() {
        assert!(serde_json::from_str::<InventorySnapshot>(r#"[1, 2]"#).is_err());
        assert!(serde_json::from_str::<InventorySnapshot>(r#"{"apples": "three"}"#).is_err());
    }

    #[test]
    fn collects_from_pairs() {
        let snapshot: InventorySnapshot = [("x", 0)].into_iter().collect();
        assert_eq!(snapshot.get("x"), Some(&Number::from(0)));
    }
}
