//! Asset path constants so the target location lives in one place.

use camino::{Utf8Path, Utf8PathBuf};

/// Directory the web frontend serves logo assets from.
pub const IMAGE_DIR: &str = "/Users/takuto/Documents/homie/homie_web/web/assets/images";

/// File name the frontend markup references.
pub const LOGO_FILE: &str = "homie-logo.png";

/// Full path the logo image is expected to occupy.
pub fn logo_path() -> Utf8PathBuf {
    Utf8Path::new(IMAGE_DIR).join(LOGO_FILE)
}
