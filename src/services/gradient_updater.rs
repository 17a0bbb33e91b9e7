// ThemeGradientUpdater Service
// Handles gradient header derivation and theme file rewriting

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{GradientHeader, ThemeRecord};

const THEME_FILE_EXTENSION: &str = "json";

const DARK_OVERLAY: &str = "rgba(0, 0, 0, 0.5)";
const DARK_TEXT_COLOR: &str = "#FFFFFF";
const LIGHT_OVERLAY: &str = "rgba(255, 255, 255, 0.5)";
const LIGHT_TEXT_COLOR: &str = "#1A1A1A";

/// Errors that can occur while updating theme files
#[derive(Error, Debug)]
pub enum UpdateError {
    #[error("Filesystem error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid theme JSON in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize theme {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Derive the header gradient for a theme.
///
/// Dark themes run the gradient from the primary accent to the secondary
/// accent under a dark overlay with white text; light themes invert the
/// color order and use a light overlay with near-black text. Accent values
/// are opaque strings and are never parsed or blended.
pub fn derive_gradient(is_dark: bool, accent_ah: &str, accent_ei: &str) -> GradientHeader {
    if is_dark {
        GradientHeader {
            start: accent_ah.to_string(),
            end: accent_ei.to_string(),
            overlay: DARK_OVERLAY.to_string(),
            text_color: DARK_TEXT_COLOR.to_string(),
        }
    } else {
        GradientHeader {
            start: accent_ei.to_string(),
            end: accent_ah.to_string(),
            overlay: LIGHT_OVERLAY.to_string(),
            text_color: LIGHT_TEXT_COLOR.to_string(),
        }
    }
}

/// Rewrites every theme in a directory with a derived gradientHeader
pub struct ThemeGradientUpdater {
    themes_dir: PathBuf,
}

impl ThemeGradientUpdater {
    /// Create a new updater for the given themes directory
    pub fn new(themes_dir: PathBuf) -> Self {
        Self { themes_dir }
    }

    /// Update every `.json` file directly inside the themes directory.
    ///
    /// Files are processed sequentially in the filesystem's listing order.
    /// There is no per-file error isolation: the first failure aborts the
    /// batch, leaving earlier files rewritten and later files untouched.
    pub fn update_all(&self) -> Result<(), UpdateError> {
        log::info!("Scanning themes directory {:?}", self.themes_dir);

        let entries = fs::read_dir(&self.themes_dir)?;
        for entry in entries.flatten() {
            let path = entry.path();
            if !is_theme_file(&path) {
                continue;
            }

            self.update_one(&path)?;

            let fname = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
            println!("Updated {fname}");
        }

        println!("All themes updated!");
        Ok(())
    }

    /// Read a single theme file, merge in the derived gradient header and
    /// write the whole record back in place with 2-space indentation.
    ///
    /// The overwrite is not atomic; a crash mid-write can truncate the file.
    pub fn update_one(&self, path: &Path) -> Result<(), UpdateError> {
        let content = fs::read_to_string(path)?;
        let mut theme: ThemeRecord =
            serde_json::from_str(&content).map_err(|e| UpdateError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;

        let header = derive_gradient(theme.is_dark(), theme.accent_ah(), theme.accent_ei());
        theme.set_gradient_header(header);

        let serialized =
            serde_json::to_string_pretty(&theme).map_err(|e| UpdateError::Serialize {
                path: path.to_path_buf(),
                source: e,
            })?;
        fs::write(path, serialized)?;

        Ok(())
    }
}

fn is_theme_file(path: &Path) -> bool {
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => ext == THEME_FILE_EXTENSION,
        None => false,
    }
}
