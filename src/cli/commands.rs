// src/cli/commands.rs
use clap::{Args as ClapArgs, Subcommand};
use crate::models::{OutputFormat, PasswordGenerationOptions};

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Run the web interface and API
    Serve {
        /// Address to bind to
        #[arg(long, env = "WEB_ADDRESS")]
        address: Option<String>,

        /// Port to listen on
        #[arg(long, short, env = "WEB_PORT")]
        port: Option<u16>,
    },

    /// Generate passwords and print them
    Generate(GenerateArgs),

    /// Check a password against known breaches
    Check {
        /// Password to check
        #[arg(required = true)]
        password: String,
    },
}

#[derive(ClapArgs, Debug)]
pub struct GenerateArgs {
    /// Number of digits
    #[arg(long, default_value_t = 0)]
    pub numbers: usize,

    /// Number of lowercase letters
    #[arg(long, default_value_t = 0)]
    pub lowercase: usize,

    /// Number of uppercase letters
    #[arg(long, default_value_t = 0)]
    pub uppercase: usize,

    /// Number of punctuation characters
    #[arg(long, default_value_t = 0)]
    pub special: usize,

    /// Exact final length, padded from the enabled classes (0 = no limit)
    #[arg(long, short = 'l', default_value_t = 0)]
    pub total_length: usize,

    /// How many passwords to generate
    #[arg(long, short = 'n', default_value_t = 1)]
    pub amount: usize,

    #[arg(long, default_value = "")]
    pub prefix: String,

    #[arg(long, default_value = "")]
    pub suffix: String,

    /// Phrase to turn into leet-speak
    #[arg(long, default_value = "")]
    pub custom: String,

    /// Regex the random part must match
    #[arg(long, default_value = "")]
    pub regex: String,

    /// Characters that must never appear
    #[arg(long, short = 'x', default_value = "")]
    pub exclude: String,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format (txt or json)
    #[arg(long, short, default_value = "txt")]
    pub format: OutputFormat,
}

impl GenerateArgs {
    pub fn to_options(&self) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            numbers: self.numbers,
            lowercase: self.lowercase,
            uppercase: self.uppercase,
            special_chars: self.special,
            total_length: self.total_length,
            prefix: self.prefix.trim().to_string(),
            suffix: self.suffix.trim().to_string(),
            custom: self.custom.trim().to_string(),
            regex: self.regex.trim().to_string(),
            exclude_chars: self.exclude.trim().to_string(),
            amount: self.amount,
            seed: self.seed,
        }
    }
}
