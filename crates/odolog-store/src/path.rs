use std::path::PathBuf;

/// File name used when neither `--db` nor `ODOLOG_DB` is set.
pub const DEFAULT_DB_FILE: &str = "car_maintenance_data.json";

/// Resolve the data file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. ODOLOG_DB environment variable (with tilde expansion)
/// 3. `car_maintenance_data.json` in the working directory
pub fn resolve_db_path(explicit_path: Option<&str>) -> PathBuf {
    if let Some(path) = explicit_path {
        return expand_tilde(path);
    }

    if let Ok(env_path) = std::env::var("ODOLOG_DB") {
        return expand_tilde(&env_path);
    }

    PathBuf::from(DEFAULT_DB_FILE)
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}
