use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use mars_weather::cli::Cli;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    mars_weather::run(&cli)
}
