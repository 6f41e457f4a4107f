use serde::Serialize;

use crate::codec::row::{DecodeError, RowDecode, RowReader};
use crate::tables::TableRow;

// Upstream has not settled the Buff sheet beyond the key column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Buff {
    pub id: i32,
}

impl RowDecode for Buff {
    fn decode(reader: &mut RowReader<'_>) -> Result<Self, DecodeError> {
        let id = reader.read_i32()?;
        Ok(Self { id })
    }
}

impl TableRow for Buff {
    const TABLE: &'static str = "Buff";

    fn id(&self) -> i32 {
        self.id
    }
}
