use std::fs;
use std::path::Path;

#[derive(Debug, Default)]
pub struct AssetSummary {
    pub table_files: usize,
    pub other_files: usize,
}

pub fn scan(data_dir: &Path) -> Result<AssetSummary, String> {
    let entries = fs::read_dir(data_dir)
        .map_err(|err| format!("failed to read {}: {}", data_dir.display(), err))?;

    let mut summary = AssetSummary::default();
    for entry in entries.flatten() {
        if entry.path().extension().map_or(false, |ext| ext == "txt") {
            summary.table_files += 1;
        } else {
            summary.other_files += 1;
        }
    }

    Ok(summary)
}
