pub mod buff;
pub mod catalog;
pub mod hero;
pub mod npc_hero;
pub mod skill;

use std::collections::HashMap;

use crate::codec::row::RowDecode;

/// A decoded table row with the stable identity used for lookups. `TABLE`
/// is the sheet name as exported, which also names the backing data file.
pub trait TableRow: RowDecode {
    const TABLE: &'static str;

    fn id(&self) -> i32;
}

/// Rows of one table keyed by id.
#[derive(Debug, Clone)]
pub struct TableIndex<R> {
    rows: HashMap<i32, R>,
}

impl<R> Default for TableIndex<R> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }
}

impl<R> TableIndex<R> {
    pub fn get(&self, id: i32) -> Option<&R> {
        self.rows.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, &R)> {
        self.rows.iter().map(|(id, row)| (*id, row))
    }

    pub fn rows(&self) -> impl Iterator<Item = &R> {
        self.rows.values()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<R: TableRow> TableIndex<R> {
    /// Inserts a row, rejecting a second row with the same id.
    pub(crate) fn insert(&mut self, row: R) -> Result<(), i32> {
        let id = row.id();
        if self.rows.contains_key(&id) {
            return Err(id);
        }
        self.rows.insert(id, row);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::row::{DecodeError, RowReader};

    #[derive(Debug, Clone, PartialEq)]
    struct Marker {
        id: i32,
    }

    impl RowDecode for Marker {
        fn decode(reader: &mut RowReader<'_>) -> Result<Self, DecodeError> {
            let id = reader.read_i32()?;
            Ok(Self { id })
        }
    }

    impl TableRow for Marker {
        const TABLE: &'static str = "Marker";

        fn id(&self) -> i32 {
            self.id
        }
    }

    #[test]
    fn insert_and_get_by_id() {
        let mut index = TableIndex::default();
        index.insert(Marker { id: 3 }).expect("first insert");
        assert_eq!(index.len(), 1);
        assert_eq!(index.get(3), Some(&Marker { id: 3 }));
        assert_eq!(index.get(4), None);
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut index = TableIndex::default();
        index.insert(Marker { id: 3 }).expect("first insert");
        assert_eq!(index.insert(Marker { id: 3 }), Err(3));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn empty_index_reports_empty() {
        let index: TableIndex<Marker> = TableIndex::default();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert_eq!(index.iter().count(), 0);
    }
}
