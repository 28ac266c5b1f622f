pub mod canvas;
pub mod config;
pub mod error;
pub mod export;
pub mod icon;
pub mod logger;

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::{ICNS_FILE, ICNS_SIZES, ICO_FILE, ICO_SIZES, PNG_FILE};
pub use crate::error::{IconError, Result};

/// Files written by [`generate_icons`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcons {
    pub png: PathBuf,
    pub ico: PathBuf,
    pub icns: PathBuf,
}

impl GeneratedIcons {
    /// Paths in write order: PNG, ICO, ICNS.
    pub fn paths(&self) -> [&Path; 3] {
        [self.png.as_path(), self.ico.as_path(), self.icns.as_path()]
    }
}

/// Render the icon once and export it as PNG, ICO and ICNS into `out_dir`,
/// creating the directory if needed. Stops at the first failure; files
/// already written stay in place.
pub fn generate_icons(out_dir: &Path) -> Result<GeneratedIcons> {
    fs::create_dir_all(out_dir).map_err(|e| IconError::io(out_dir, e))?;
    debug!("output directory {}", out_dir.display());

    let image = icon::render_icon()?.to_rgba_image();
    let files = GeneratedIcons {
        png: out_dir.join(PNG_FILE),
        ico: out_dir.join(ICO_FILE),
        icns: out_dir.join(ICNS_FILE),
    };

    export::write_png(&image, &files.png)?;
    export::write_ico(&image, &ICO_SIZES, &files.ico)?;
    export::write_icns(&image, &ICNS_SIZES, &files.icns)?;
    Ok(files)
}
