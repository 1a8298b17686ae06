use anyhow::Result;
use clap::Parser;
use ppmfilter_cli::{run, Cli, Options};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = Options::from(Cli::parse());
    run(&options)
}
