use clap::Parser;

/// Top-level CLI definition. The tool takes no flags: the target directory
/// is a fixed constant and there is a single execution path.
#[derive(Parser, Debug)]
#[command(
    name = "save-logo",
    version,
    about = "Prepare the web asset directory for the homie logo image"
)]
pub struct Cli {}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}
