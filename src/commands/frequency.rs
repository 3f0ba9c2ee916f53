//! Frequency analysis command.

use anyhow::Result;
use clap::Args;

use cipherlab::frequency_decrypt;

use super::CommandExecutor;

/// Guess a substitution key from letter frequencies.
///
/// Ranks ciphertext letters by count and pairs them with the English
/// frequency order ETAOIN... The more English-like and the longer the
/// underlying plaintext, the better the guess.
#[derive(Args, Debug)]
pub struct FrequencyCommand {
    /// Ciphertext to analyze (read from stdin when omitted)
    #[arg(short, long)]
    pub text: Option<String>,
}

impl CommandExecutor for FrequencyCommand {
    fn execute(&self) -> Result<()> {
        let text = super::read_text(self.text.as_deref())?;
        println!("{}", frequency_decrypt(&text));
        Ok(())
    }
}
