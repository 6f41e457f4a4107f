use std::collections::HashMap;

use serde::Serialize;

use crate::codec::row::{DecodeError, FieldEnum, RowDecode, RowReader};
use crate::tables::TableRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeroState {
    Locked,
    Available,
}

impl FieldEnum for HeroState {
    const NAME: &'static str = "HeroState";

    fn from_value(value: i32) -> Option<Self> {
        match value {
            1 => Some(HeroState::Locked),
            2 => Some(HeroState::Available),
            _ => None,
        }
    }

    fn value(self) -> i32 {
        match self {
            HeroState::Locked => 1,
            HeroState::Available => 2,
        }
    }
}

/// Equipped weapon, inlined into the hero row without any framing of its
/// own. Its fields are read in place, straight after the hero's map field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Weapon {
    pub name: String,
    pub score: i32,
}

impl RowDecode for Weapon {
    fn decode(reader: &mut RowReader<'_>) -> Result<Self, DecodeError> {
        let name = reader.read_string()?;
        let score = reader.read_i32()?;
        Ok(Self { name, score })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hero {
    pub id: i32,
    pub name: String,
    pub quality: i32,
    pub skills: Vec<i32>,
    pub attribute: HashMap<String, i32>,
    pub weapon: Weapon,
    pub state: HeroState,
}

impl RowDecode for Hero {
    fn decode(reader: &mut RowReader<'_>) -> Result<Self, DecodeError> {
        let id = reader.read_i32()?;
        let name = reader.read_string()?;
        let quality = reader.read_i32()?;
        let skills = reader.read_seq(|r| r.read_i32())?;
        let attribute = reader.read_map(|r| r.read_string(), |r| r.read_i32())?;
        let weapon = reader.read_record()?;
        let state = reader.read_enum()?;
        Ok(Self {
            id,
            name,
            quality,
            skills,
            attribute,
            weapon,
            state,
        })
    }
}

impl TableRow for Hero {
    const TABLE: &'static str = "Hero";

    fn id(&self) -> i32 {
        self.id
    }
}
