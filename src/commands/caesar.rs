//! Caesar cipher command.

use anyhow::{Context, Result};
use clap::Args;

use cipherlab::caesar;

use super::CommandExecutor;

/// Shift every character by a fixed amount (Caesar cipher).
///
/// Letters shift within their case, digits within 0-9, other printable
/// ASCII within its range. Shifts above 26 are rejected.
#[derive(Args, Debug)]
pub struct CaesarCommand {
    /// Shift amount (1-26)
    #[arg(short, long)]
    pub shift: i32,

    /// Decrypt instead of encrypt
    #[arg(short, long)]
    pub decrypt: bool,

    /// Text to transform (read from stdin when omitted)
    #[arg(short, long)]
    pub text: Option<String>,
}

impl CommandExecutor for CaesarCommand {
    fn execute(&self) -> Result<()> {
        let text = super::read_text(self.text.as_deref())?;

        let result = if self.decrypt {
            caesar::decrypt(&text, self.shift)
        } else {
            caesar::encrypt(&text, self.shift).context("Caesar encryption failed")?
        };

        println!("{result}");
        Ok(())
    }
}
