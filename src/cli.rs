use clap::Parser;
use std::path::PathBuf;

/// FIFA World Cup winners & runner-ups dashboard
#[derive(Parser)]
#[command(name = "rustworldcup")]
#[command(version)]
pub struct Cli {
    /// Directory holding worldcup.csv and aliases.json
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,
}
