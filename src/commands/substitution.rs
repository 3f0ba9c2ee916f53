//! Monoalphabetic substitution command.

use anyhow::{Context, Result};
use clap::Args;

use cipherlab::substitution::{self, SubstitutionKey};

use super::CommandExecutor;

/// Substitute letters through a 26-letter permutation.
///
/// The key's i-th letter replaces the i-th alphabet letter. Keys must be a
/// full permutation; use `cipherlab keygen` to generate one.
#[derive(Args, Debug)]
pub struct SubstitutionCommand {
    /// Substitution key: a permutation of the 26 letters
    #[arg(short, long)]
    pub key: String,

    /// Decrypt instead of encrypt
    #[arg(short, long)]
    pub decrypt: bool,

    /// Text to transform (read from stdin when omitted)
    #[arg(short, long)]
    pub text: Option<String>,
}

impl CommandExecutor for SubstitutionCommand {
    fn execute(&self) -> Result<()> {
        let key = SubstitutionKey::parse(&self.key).context("Invalid substitution key")?;
        let text = super::read_text(self.text.as_deref())?;

        let result = if self.decrypt {
            substitution::decrypt(&text, &key)
        } else {
            substitution::encrypt(&text, &key)
        };

        println!("{result}");
        Ok(())
    }
}
