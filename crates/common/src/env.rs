//! Environment/runtime helpers

use tracing::debug;

/// Load `.env` from the working directory (or a parent) if one exists.
/// Returns whether a file was loaded; a missing file is not an error.
pub fn load_dotenv() -> bool {
    match dotenvy::dotenv() {
        Ok(path) => {
            debug!(path = %path.display(), "loaded_dotenv");
            true
        }
        Err(_) => false,
    }
}
