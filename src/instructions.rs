use std::fmt::Write as _;

use crate::paths;

/// Render the manual placement instructions shown after the directory check.
///
/// The tool never writes the image itself; the PNG is copied into place by
/// hand.
pub fn format_instructions() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Please save the orange logo PNG image to:");
    let _ = writeln!(out, "{}", paths::logo_path());
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "The logo should be the orange circular logo with two circles and teardrop shape that was shown earlier."
    );
    out
}
