use std::path::PathBuf;

/// Resolved file locations for one invocation.
///
/// Both paths are explicit rather than process-wide constants so tests can
/// point each run at its own temporary database and log.
pub struct Config {
    pub db_path: PathBuf,
    pub log_path: PathBuf,
}

impl Config {
    /// Resolve paths from CLI overrides, falling back to the platform data
    /// directory (~/.local/share/rankbook or equivalent).
    pub fn resolve(
        db: Option<PathBuf>,
        log: Option<PathBuf>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let (db_path, log_path) = match (db, log) {
            (Some(db), Some(log)) => (db, log),
            (db, log) => {
                let data_dir = data_dir()?;
                (
                    db.unwrap_or_else(|| data_dir.join("ranking.db")),
                    log.unwrap_or_else(|| data_dir.join("erros.log")),
                )
            }
        };

        Ok(Config { db_path, log_path })
    }
}

/// Platform data directory, created on demand.
fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let data_dir = directories::ProjectDirs::from("", "", "rankbook")
        .ok_or("Could not determine data directory")?
        .data_dir()
        .to_path_buf();

    std::fs::create_dir_all(&data_dir)?;
    Ok(data_dir)
}
