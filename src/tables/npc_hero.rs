use serde::Serialize;

use crate::codec::row::{DecodeError, RowDecode, RowReader};
use crate::tables::TableRow;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NpcHero {
    pub id: i32,
    pub name: String,
    pub quality: i32,
    pub skills: Vec<i32>,
    pub display: bool,
}

impl RowDecode for NpcHero {
    fn decode(reader: &mut RowReader<'_>) -> Result<Self, DecodeError> {
        let id = reader.read_i32()?;
        let name = reader.read_string()?;
        let quality = reader.read_i32()?;
        let skills = reader.read_seq(|r| r.read_i32())?;
        let display = reader.read_bool()?;
        Ok(Self {
            id,
            name,
            quality,
            skills,
            display,
        })
    }
}

impl TableRow for NpcHero {
    const TABLE: &'static str = "NPCHero";

    fn id(&self) -> i32 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_full_row() {
        let mut reader = RowReader::new("30,Guard,2,3,1,2,3,true");
        let npc: NpcHero = reader.read_record().expect("npc row");
        assert_eq!(npc.id, 30);
        assert_eq!(npc.name, "Guard");
        assert_eq!(npc.quality, 2);
        assert_eq!(npc.skills, vec![1, 2, 3]);
        assert!(npc.display);
        assert_eq!(reader.read_raw(), Err(DecodeError::UnexpectedEnd));
    }

    #[test]
    fn display_flag_is_validated() {
        let mut reader = RowReader::new("30,Guard,2,0,maybe");
        assert_eq!(
            reader.read_record::<NpcHero>(),
            Err(DecodeError::InvalidBool {
                raw: "maybe".to_string(),
            })
        );
    }
}
