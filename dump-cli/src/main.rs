//! Schema dump CLI

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use schemadump::{DumpConfig, dump_all_scopes};
use schemadump_schema::SchemaSnapshot;
use std::path::PathBuf;

mod log_sink;

#[derive(Parser, Debug)]
#[command(name = "schema-dump")]
#[command(about = "Writes one json document per type scope of a schema snapshot", version)]
struct Cli {
    /// Schema snapshot captured from the host process
    #[arg(short, long, env = "SCHEMA_DUMP_INPUT")]
    input: PathBuf,

    /// Directory receiving the documents, created if missing
    #[arg(short, long, env = "SCHEMA_DUMP_OUT_DIR", default_value = "schema")]
    output: PathBuf,

    /// JSON configuration file; SCHEMA_DUMP_CONFIG is used when absent
    #[arg(long, env = "SCHEMA_DUMP_CONFIG_FILE")]
    config: Option<PathBuf>,

    #[arg(long, env = "SCHEMA_DUMP_LOG_LEVEL", default_value = "info")]
    log_level: log::LevelFilter,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    log_sink::install_log_sink(cli.log_level);

    let config = match &cli.config {
        Some(path) => DumpConfig::from_file(path)?,
        None => DumpConfig::from_env()?,
    };
    let snapshot = SchemaSnapshot::load(&cli.input)?;
    let summary = dump_all_scopes(&snapshot, &cli.output, &config)
        .with_context(|| format!("dumping schema to {}", cli.output.display()))?;
    info!(
        "dumped {} scopes to {}",
        summary.written.len(),
        cli.output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_args() {
        let cli = Cli::try_parse_from([
            "schema-dump",
            "--input",
            "snapshot.json",
            "--output",
            "out",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.input, PathBuf::from("snapshot.json"));
        assert_eq!(cli.output, PathBuf::from("out"));
        assert_eq!(cli.log_level, log::LevelFilter::Debug);
        assert!(cli.config.is_none());
    }
}
