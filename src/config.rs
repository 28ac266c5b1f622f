use std::path::PathBuf;

/// Side length of the master canvas in pixels.
pub const CANVAS_SIZE: u32 = 1024;

pub const OUTPUT_DIR_NAME: &str = "build";
pub const PNG_FILE: &str = "icon.png";
pub const ICO_FILE: &str = "icon.ico";
pub const ICNS_FILE: &str = "icon.icns";

/// Frames embedded in the Windows icon (ICO caps out at 256).
pub const ICO_SIZES: [u32; 7] = [16, 24, 32, 48, 64, 128, 256];

/// Elements embedded in the Apple icon family.
pub const ICNS_SIZES: [u32; 7] = [16, 32, 64, 128, 256, 512, 1024];

/// Project root, i.e. the directory holding Cargo.toml. Fixed at compile time.
pub fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Default destination for generated icons: `<project root>/build`.
pub fn output_dir() -> PathBuf {
    project_root().join(OUTPUT_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_dir_sits_under_project_root() {
        let dir = output_dir();
        assert!(dir.ends_with("build"));
        assert_eq!(dir.parent(), Some(project_root().as_path()));
    }

    #[test]
    fn size_lists_are_sorted_and_bounded() {
        assert!(ICO_SIZES.windows(2).all(|w| w[0] < w[1]));
        assert!(ICNS_SIZES.windows(2).all(|w| w[0] < w[1]));
        assert!(ICO_SIZES.iter().all(|&s| s <= 256));
        assert!(ICNS_SIZES.iter().all(|&s| s <= CANVAS_SIZE));
    }
}
