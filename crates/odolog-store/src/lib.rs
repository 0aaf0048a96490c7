mod db;
mod error;
mod path;

pub use db::Store;
pub use error::{Error, Result};
pub use path::{DEFAULT_DB_FILE, expand_tilde, resolve_db_path};
