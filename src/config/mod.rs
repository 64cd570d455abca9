pub mod cases;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_range, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "triplet-sum")]
#[command(about = "Find all unique triplets in a list of integers that sum to zero")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, global = true, help = "Emit logs as JSON lines on stderr")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the fixed demo input and its triplets
    Demo,

    /// Find zero-sum triplets in the given integers
    Find {
        /// Integers, space or comma separated; a comma list starting with a
        /// negative value must follow `--`
        #[arg(allow_negative_numbers = true, value_delimiter = ',', num_args = 0..)]
        nums: Vec<i64>,

        /// Use the O(n³) reference search instead of the two-pointer scan
        #[arg(long)]
        brute_force: bool,

        /// Also run the other strategy and report whether they agree
        #[arg(long)]
        compare: bool,
    },

    /// Run the self-test suite
    SelfTest {
        /// TOML file with [suite] and [[cases]] tables; built-in cases otherwise
        #[arg(long)]
        cases: Option<String>,

        /// Longest input also checked with the brute-force oracle
        #[arg(long)]
        brute_force_max_len: Option<usize>,

        /// Exit with status 2 if any case fails
        #[arg(long)]
        strict: bool,
    },
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(Command::SelfTest {
            brute_force_max_len: Some(max_len),
            ..
        }) = &self.command
        {
            validate_range(
                "--brute-force-max-len",
                *max_len,
                0,
                cases::MAX_BRUTE_FORCE_LEN,
            )?;
        }
        Ok(())
    }
}
