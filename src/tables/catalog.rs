use std::path::PathBuf;

use serde::Serialize;

use crate::codec::row::{DecodeError, RowReader};
use crate::tables::buff::Buff;
use crate::tables::hero::Hero;
use crate::tables::npc_hero::NpcHero;
use crate::tables::skill::Skill;
use crate::tables::{TableIndex, TableRow};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    Supplier {
        table: &'static str,
        message: String,
    },
    Row {
        table: &'static str,
        line: usize,
        source: DecodeError,
    },
    DuplicateId {
        table: &'static str,
        id: i32,
        line: usize,
    },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Supplier { table, message } => write!(f, "{}: {}", table, message),
            LoadError::Row {
                table,
                line,
                source,
            } => write!(f, "{} line {}: {}", table, line, source),
            LoadError::DuplicateId { table, id, line } => {
                write!(f, "{} line {}: duplicate id {}", table, line, id)
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// Row counts per table, for summaries and audit output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub buffs: usize,
    pub heroes: usize,
    pub npc_heroes: usize,
    pub skills: usize,
}

/// Every exported table, fully decoded and keyed by id. Construction is all
/// or nothing: the first table that fails to load aborts the whole catalog.
#[derive(Debug, Default, Clone)]
pub struct TableCatalog {
    buffs: TableIndex<Buff>,
    heroes: TableIndex<Hero>,
    npc_heroes: TableIndex<NpcHero>,
    skills: TableIndex<Skill>,
}

impl TableCatalog {
    /// Loads all tables through the supplier, which maps a table name to
    /// that table's exported text. Tables are requested in name order.
    pub fn load<S>(mut supplier: S) -> Result<Self, LoadError>
    where
        S: FnMut(&str) -> Result<String, String>,
    {
        let buffs = load_table(&mut supplier)?;
        let heroes = load_table(&mut supplier)?;
        let npc_heroes = load_table(&mut supplier)?;
        let skills = load_table(&mut supplier)?;
        Ok(Self {
            buffs,
            heroes,
            npc_heroes,
            skills,
        })
    }

    /// Loads all tables from `<dir>/<Table>.txt` files.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Result<Self, LoadError> {
        Self::load(file_supplier(dir))
    }

    pub fn buffs(&self) -> &TableIndex<Buff> {
        &self.buffs
    }

    pub fn heroes(&self) -> &TableIndex<Hero> {
        &self.heroes
    }

    pub fn npc_heroes(&self) -> &TableIndex<NpcHero> {
        &self.npc_heroes
    }

    pub fn skills(&self) -> &TableIndex<Skill> {
        &self.skills
    }

    pub fn buff(&self, id: i32) -> Option<&Buff> {
        self.buffs.get(id)
    }

    pub fn hero(&self, id: i32) -> Option<&Hero> {
        self.heroes.get(id)
    }

    pub fn npc_hero(&self, id: i32) -> Option<&NpcHero> {
        self.npc_heroes.get(id)
    }

    pub fn skill(&self, id: i32) -> Option<&Skill> {
        self.skills.get(id)
    }

    pub fn total_rows(&self) -> usize {
        self.buffs.len() + self.heroes.len() + self.npc_heroes.len() + self.skills.len()
    }

    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            buffs: self.buffs.len(),
            heroes: self.heroes.len(),
            npc_heroes: self.npc_heroes.len(),
            skills: self.skills.len(),
        }
    }
}

/// Builds a supplier that reads `<dir>/<Table>.txt`.
pub fn file_supplier(dir: impl Into<PathBuf>) -> impl FnMut(&str) -> Result<String, String> {
    let dir = dir.into();
    move |table: &str| {
        let path = dir.join(format!("{}.txt", table));
        std::fs::read_to_string(&path)
            .map_err(|err| format!("failed to read {}: {}", path.display(), err))
    }
}

fn load_table<R, S>(supplier: &mut S) -> Result<TableIndex<R>, LoadError>
where
    R: TableRow,
    S: FnMut(&str) -> Result<String, String>,
{
    let text = supplier(R::TABLE).map_err(|message| LoadError::Supplier {
        table: R::TABLE,
        message,
    })?;
    let mut index = TableIndex::default();
    for (line, row) in split_rows(&text) {
        let mut reader = RowReader::new(row);
        let record = R::decode(&mut reader).map_err(|source| LoadError::Row {
            table: R::TABLE,
            line,
            source,
        })?;
        index.insert(record).map_err(|id| LoadError::DuplicateId {
            table: R::TABLE,
            id,
            line,
        })?;
    }
    Ok(index)
}

// Line numbers count non-empty rows only, so they are stable across line
// ending styles.
fn split_rows(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split(['\n', '\r'])
        .filter(|row| !row.is_empty())
        .enumerate()
        .map(|(idx, row)| (idx + 1, row))
}
