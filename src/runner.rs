use anyhow::Result;
use camino::Utf8Path;
use tracing::debug;

use crate::cli::Cli;
use crate::{fsops, instructions, paths};

/// Single execution path: ensure the asset directory, then print the
/// placement instructions.
pub fn run(cli: Cli) -> Result<()> {
    let _ = cli;
    let dir = Utf8Path::new(paths::IMAGE_DIR);
    fsops::ensure_dir(dir)?;
    debug!("asset directory ready at {dir}");
    print!("{}", instructions::format_instructions());
    Ok(())
}
