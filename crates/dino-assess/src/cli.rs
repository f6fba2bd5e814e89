use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "dino-assess",
    version,
    about = "Derive health, status and age metrics for dinosaur records and count them per category"
)]
pub struct Cli {
    #[arg(
        long,
        env = "DINO_ASSESS_INPUT",
        value_name = "PATH",
        help = "JSON array of records (or null); `-` reads stdin. Defaults to the sample herd"
    )]
    pub input: Option<PathBuf>,
    #[arg(long, help = "Pretty-print the JSON report")]
    pub pretty: bool,
    #[arg(long, help = "Append Prometheus text metrics after the report")]
    pub metrics: bool,
    #[arg(
        long,
        default_value = "warn",
        value_name = "LEVEL",
        help = "Log filter used when RUST_LOG is unset"
    )]
    pub log_level: String,
    #[arg(long, value_enum, default_value_t = LogFormat::Fmt)]
    pub log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Fmt,
    Json,
}
