use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct AppConfig {
    pub root: PathBuf,
    pub data_dir: PathBuf,
}

impl AppConfig {
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        if args.len() < 2 {
            return Err("usage: gametables <root> [data-dir]".to_string());
        }

        let root = Path::new(&args[1]).to_path_buf();
        let data_dir = if args.len() > 2 {
            PathBuf::from(&args[2])
        } else {
            std::env::var("GAMETABLES_DATA_DIR")
                .ok()
                .and_then(|value| {
                    let trimmed = value.trim();
                    if trimmed.is_empty() {
                        None
                    } else {
                        Some(PathBuf::from(trimmed))
                    }
                })
                .unwrap_or_else(|| root.join("data"))
        };
        Ok(Self { root, data_dir })
    }
}
