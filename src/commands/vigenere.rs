//! Vigenère cipher command.

use anyhow::{Context, Result};
use clap::Args;

use cipherlab::vigenere;

use super::CommandExecutor;

/// Shift with a repeating key stream (Vigenère cipher).
///
/// Each key letter contributes a shift and the key repeats over the text.
/// Spaces pass through without consuming a key position.
#[derive(Args, Debug)]
pub struct VigenereCommand {
    /// Cipher key (letters, case-insensitive)
    #[arg(short, long)]
    pub key: String,

    /// Decrypt instead of encrypt
    #[arg(short, long)]
    pub decrypt: bool,

    /// Text to transform (read from stdin when omitted)
    #[arg(short, long)]
    pub text: Option<String>,
}

impl CommandExecutor for VigenereCommand {
    fn execute(&self) -> Result<()> {
        let text = super::read_text(self.text.as_deref())?;

        let result = if self.decrypt {
            vigenere::decrypt(&text, &self.key)
        } else {
            vigenere::encrypt(&text, &self.key)
        }
        .context("Vigenère transform failed")?;

        println!("{result}");
        Ok(())
    }
}
