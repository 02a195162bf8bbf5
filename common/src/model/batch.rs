use serde::{Deserialize, Serialize};

/// A non-empty list of recipient names with a cursor.
///
/// The cursor always points at an existing name: construction rejects empty
/// lists and navigation clamps at both ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBatch")]
pub struct BatchList {
    names: Vec<String>,
    index: usize,
}

impl BatchList {
    /// Starts a batch at the first name. Returns `None` for an empty list.
    pub fn new(names: Vec<String>) -> Option<Self> {
        if names.is_empty() {
            None
        } else {
            Some(Self { names, index: 0 })
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn current(&self) -> &str {
        &self.names[self.index]
    }

    pub fn can_advance(&self) -> bool {
        self.index + 1 < self.names.len()
    }

    pub fn can_retreat(&self) -> bool {
        self.index > 0
    }

    /// Moves to the next name. Returns `false` when already at the last one.
    pub fn advance(&mut self) -> bool {
        if self.can_advance() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Moves to the previous name. Returns `false` when already at the first one.
    pub fn retreat(&mut self) -> bool {
        if self.can_retreat() {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// "Certificate 2 of 5"
    pub fn position_label(&self) -> String {
        format!("Certificate {} of {}", self.index + 1, self.names.len())
    }
}

#[derive(Deserialize)]
struct RawBatch {
    names: Vec<String>,
    index: usize,
}

impl TryFrom<RawBatch> for BatchList {
    type Error = String;

    fn try_from(raw: RawBatch) -> Result<Self, Self::Error> {
        if raw.index >= raw.names.len() {
            return Err(format!(
                "batch index {} out of range for {} names",
                raw.index,
                raw.names.len()
            ));
        }
        Ok(Self {
            names: raw.names,
            index: raw.index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(names: &[&str]) -> BatchList {
        BatchList::new(names.iter().map(|n| n.to_string()).collect()).unwrap()
    }

    #[test]
    fn empty_lists_do_not_form_a_batch() {
        assert!(BatchList::new(Vec::new()).is_none());
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut list = batch(&["Alice", "Bob", "Carol"]);
        assert_eq!(list.index(), 0);
        assert!(!list.retreat());
        assert_eq!(list.current(), "Alice");

        assert!(list.advance());
        assert!(list.advance());
        assert_eq!(list.current(), "Carol");
        assert!(!list.advance());
        assert_eq!(list.index(), 2);

        assert!(list.retreat());
        assert_eq!(list.current(), "Bob");
        assert_eq!(list.position_label(), "Certificate 2 of 3");
    }

    #[test]
    fn index_stays_in_range_for_any_walk() {
        let mut list = batch(&["a", "b", "c", "d"]);
        // Deterministic pseudo-random walk over advance/retreat.
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            if seed % 2 == 0 {
                list.advance();
            } else {
                list.retreat();
            }
            assert!(list.index() < list.len());
            assert_eq!(list.current(), list.names()[list.index()]);
        }
    }

    #[test]
    fn single_name_batch_cannot_move() {
        let mut list = batch(&["Solo"]);
        assert!(!list.can_advance());
        assert!(!list.can_retreat());
        assert!(!list.advance());
        assert!(!list.retreat());
        assert_eq!(list.position_label(), "Certificate 1 of 1");
    }

    #[test]
    fn deserializing_keeps_the_cursor_in_range() {
        let list: BatchList = serde_json::from_str(r#"{"names":["Alice","Bob"],"index":1}"#).unwrap();
        assert_eq!(list.current(), "Bob");

        assert!(serde_json::from_str::<BatchList>(r#"{"names":[],"index":0}"#).is_err());
        assert!(serde_json::from_str::<BatchList>(r#"{"names":["Alice"],"index":1}"#).is_err());
    }
}
