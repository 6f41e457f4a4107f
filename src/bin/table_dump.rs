use std::collections::BTreeMap;

use serde::Serialize;

use gametables::{TableCatalog, TableIndex, TableRow};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("usage: table_dump <data-dir> [table]");
        std::process::exit(1);
    }

    let catalog = match TableCatalog::from_dir(&args[1]) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("table_dump: {}", err);
            std::process::exit(1);
        }
    };

    let output = match args.get(2).map(String::as_str) {
        None => dump_summary(&catalog),
        Some("Buff") => dump_rows(catalog.buffs()),
        Some("Hero") => dump_rows(catalog.heroes()),
        Some("NPCHero") => dump_rows(catalog.npc_heroes()),
        Some("Skill") => dump_rows(catalog.skills()),
        Some(other) => {
            eprintln!("table_dump: unknown table '{}'", other);
            std::process::exit(1);
        }
    };

    match output {
        Ok(text) => print!("{}", text),
        Err(err) => {
            eprintln!("table_dump: {}", err);
            std::process::exit(1);
        }
    }
}

fn dump_summary(catalog: &TableCatalog) -> Result<String, String> {
    serde_yaml::to_string(&catalog.summary()).map_err(|err| format!("serialize failed: {}", err))
}

// Rows are re-keyed into a BTreeMap so the dump is ordered by id.
fn dump_rows<R: TableRow + Serialize>(index: &TableIndex<R>) -> Result<String, String> {
    let rows: BTreeMap<i32, &R> = index.iter().collect();
    serde_yaml::to_string(&rows).map_err(|err| format!("serialize failed: {}", err))
}
