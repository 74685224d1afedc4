// src/cli.rs

use clap::Parser;

/// Decompress every `.gz` file under a directory tree.
///
/// Each `<name>.gz` is written next to its source as `<name>`. Existing non-empty
/// outputs are skipped, so the tool can be re-run safely on the same tree.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan for .gz files.
    #[arg(default_value = ".")]
    pub root: String,

    /// Only scan the top level of the directory, not its subdirectories.
    #[arg(short = 'n', long, action = clap::ArgAction::SetTrue)]
    pub no_recursive: bool,
}
