//! Configuration loading and data folder resolution

use std::path::PathBuf;

use tracing::info;

/// Database file name inside the data folder
pub const DATABASE_FILE: &str = "artism.db";

/// Data folder resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable `ARTISM_DATA_DIR`
/// 3. TOML config file (`data_dir` key)
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_data_dir(cli_arg: Option<PathBuf>) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        info!("Data folder from command line: {}", path.display());
        return path;
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var("ARTISM_DATA_DIR") {
        info!("Data folder from ARTISM_DATA_DIR: {}", path);
        return PathBuf::from(path);
    }

    // Priority 3: TOML config file
    if let Some(path) = data_dir_from_config_file() {
        info!("Data folder from config file: {}", path.display());
        return path;
    }

    // Priority 4: OS-dependent compiled default
    let path = default_data_dir();
    info!("Data folder default: {}", path.display());
    path
}

/// Read `data_dir` from the platform config file, if present
fn data_dir_from_config_file() -> Option<PathBuf> {
    let config_path = dirs::config_dir()?.join("artism").join("config.toml");
    let content = std::fs::read_to_string(&config_path).ok()?;
    let config: toml::Value = toml::from_str(&content).ok()?;
    config
        .get("data_dir")
        .and_then(|v| v.as_str())
        .map(PathBuf::from)
}

/// OS-dependent default data folder
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("artism"))
        .unwrap_or_else(|| PathBuf::from("./artism_data"))
}

/// Ensure the data folder exists and return the database path inside it
pub fn prepare_data_dir(data_dir: &PathBuf) -> crate::Result<PathBuf> {
    std::fs::create_dir_all(data_dir)?;
    Ok(data_dir.join(DATABASE_FILE))
}
