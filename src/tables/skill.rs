use std::collections::HashMap;

use serde::Serialize;

use crate::codec::row::{DecodeError, RowDecode, RowReader};
use crate::tables::TableRow;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Skill {
    pub id: i32,
    pub name: String,
    pub cd: i32,
    /// Buff id to application chance, in percent.
    pub buff_probability: HashMap<i32, i32>,
}

impl RowDecode for Skill {
    fn decode(reader: &mut RowReader<'_>) -> Result<Self, DecodeError> {
        let id = reader.read_i32()?;
        let name = reader.read_string()?;
        let cd = reader.read_i32()?;
        let buff_probability = reader.read_map(|r| r.read_i32(), |r| r.read_i32())?;
        Ok(Self {
            id,
            name,
            cd,
            buff_probability,
        })
    }
}

impl TableRow for Skill {
    const TABLE: &'static str = "Skill";

    fn id(&self) -> i32 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_full_row() {
        let mut reader = RowReader::new("10,Cleave,3,2,100,30,200,65");
        let skill: Skill = reader.read_record().expect("skill row");
        assert_eq!(skill.id, 10);
        assert_eq!(skill.name, "Cleave");
        assert_eq!(skill.cd, 3);
        assert_eq!(skill.buff_probability.len(), 2);
        assert_eq!(skill.buff_probability.get(&100), Some(&30));
        assert_eq!(skill.buff_probability.get(&200), Some(&65));
        assert_eq!(reader.read_raw(), Err(DecodeError::UnexpectedEnd));
    }

    #[test]
    fn empty_map_decodes_to_no_entries() {
        let mut reader = RowReader::new("11,Slam,1,0");
        let skill: Skill = reader.read_record().expect("skill row");
        assert!(skill.buff_probability.is_empty());
    }
}
