//! Fixed filesystem locations.

use std::path::{Path, PathBuf};

/// Folder under the user's desktop that receives the generated documents.
pub const OUTPUT_DIR_NAME: &str = "email-output";

pub fn desktop_dir(home: &Path) -> PathBuf {
    home.join("Desktop")
}

pub fn output_dir(home: &Path) -> PathBuf {
    desktop_dir(home).join(OUTPUT_DIR_NAME)
}
