use std::path::PathBuf;

use anyhow::{Context, Result};

/// Directory name under the platform data directory
const APP_DIR_NAME: &str = "delivery-ledger";

/// File holding every upload session
pub const STORE_FILENAME: &str = "sessions.json";

/// Get the platform data directory for the ledger
///
/// - Linux: `$XDG_DATA_HOME/delivery-ledger` or `~/.local/share/delivery-ledger`
/// - macOS: `~/Library/Application Support/delivery-ledger`
/// - Windows: `%APPDATA%\delivery-ledger`
pub fn get_data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Failed to get platform data directory")?;
    Ok(base.join(APP_DIR_NAME))
}

/// Default location of the persisted store when no `--store` override is given
pub fn default_store_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join(STORE_FILENAME))
}

#[cfg(all(test, target_os = "linux"))]
mod tests {
    use std::env;

    use super::*;

    #[test]
    fn test_default_store_path_follows_xdg_data_home() {
        // Save original value
        let original = env::var("XDG_DATA_HOME").ok();

        // SAFETY: Setting environment variables in tests is safe as long as:
        // 1. No other test in this crate reads XDG_DATA_HOME
        // 2. We restore the original value afterwards
        unsafe {
            env::set_var("XDG_DATA_HOME", "/tmp/ledger-xdg");
        }

        let result = default_store_path();
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), PathBuf::from("/tmp/ledger-xdg/delivery-ledger/sessions.json"));

        // Restore original value
        unsafe {
            match original {
                Some(value) => env::set_var("XDG_DATA_HOME", value),
                None => env::remove_var("XDG_DATA_HOME"),
            }
        }
    }
}
