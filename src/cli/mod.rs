use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{self, ConfigError, load_config};

mod check;
mod reseed;
mod seed;

#[derive(Parser, Debug)]
#[command(name = "refseed", version, about = "Reference-data seeding CLI")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Seed(seed::SeedArgs),
    Reseed(reseed::ReseedArgs),
    Check(check::CheckArgs),
}

impl Cli {
    pub fn dispatch(self) -> anyhow::Result<()> {
        match self.command {
            Command::Seed(args) => seed::handle(args),
            Command::Reseed(args) => reseed::handle(args),
            Command::Check(args) => check::handle(args),
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct CommonArgs {
    /// Root directory holding one export directory per dataset
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Directory the JSON fixture store lives in
    #[arg(long)]
    fixtures: Option<PathBuf>,

    /// Config file path (default: ./refseed.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
}

pub(crate) struct Resolved {
    pub data_dir: PathBuf,
    pub fixture_dir: PathBuf,
    pub sentinel: Option<String>,
}

impl CommonArgs {
    // CLI flags beat the config file, which beats built-in defaults.
    pub(crate) fn resolve(&self) -> Result<Resolved, ConfigError> {
        let file = load_config(self.config.as_deref())?;
        Ok(Resolved {
            data_dir: self
                .data_dir
                .clone()
                .or(file.data_dir)
                .unwrap_or_else(|| PathBuf::from(config::DEFAULT_DATA_DIR)),
            fixture_dir: self
                .fixtures
                .clone()
                .or(file.fixture_dir)
                .unwrap_or_else(|| PathBuf::from(config::DEFAULT_FIXTURE_DIR)),
            sentinel: file.sentinel,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/mod.rs"]
mod tests;
