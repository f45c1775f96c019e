mod cli;
mod fsops;
mod instructions;
mod logging;
mod paths;
mod runner;

fn main() -> anyhow::Result<()> {
    logging::init();
    let app = cli::parse();
    runner::run(app)
}
