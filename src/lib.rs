mod assets;
pub mod codec;
mod config;
pub mod tables;
pub mod telemetry;

pub use codec::row::{DecodeError, FieldEnum, RowDecode, RowReader, RowWriter};
pub use tables::catalog::{file_supplier, CatalogSummary, LoadError, TableCatalog};
pub use tables::{TableIndex, TableRow};

pub fn run(args: &[String]) -> Result<(), String> {
    let config = config::AppConfig::from_args(args)?;
    telemetry::logging::init(&config.root)?;
    let assets = assets::scan(&config.data_dir)?;

    let catalog = TableCatalog::from_dir(&config.data_dir).map_err(|err| {
        let message = format!("table load failed: {}", err);
        telemetry::logging::log_error(&message);
        message
    })?;
    let summary = catalog.summary();

    telemetry::logging::log_tables(&format!(
        "loaded buffs={}, heroes={}, npc_heroes={}, skills={}",
        summary.buffs, summary.heroes, summary.npc_heroes, summary.skills
    ));
    telemetry::logging::log_load(catalog.total_rows() as u64);

    println!("gametables: table load");
    println!("- data dir: {}", config.data_dir.display());
    println!("- table files: {}", assets.table_files);
    println!("- buffs: {}", summary.buffs);
    println!("- heroes: {}", summary.heroes);
    println!("- npc heroes: {}", summary.npc_heroes);
    println!("- skills: {}", summary.skills);
    println!("- total rows: {}", catalog.total_rows());

    Ok(())
}
