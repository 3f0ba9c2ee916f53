//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor`
//! trait. The command layer owns all console I/O; the engine stays pure.

mod caesar;
mod crack;
mod frequency;
mod keygen;
mod playfair;
mod substitution;
mod vigenere;

pub use caesar::CaesarCommand;
pub use crack::CrackCommand;
pub use frequency::FrequencyCommand;
pub use keygen::KeygenCommand;
pub use playfair::PlayfairCommand;
pub use substitution::SubstitutionCommand;
pub use vigenere::VigenereCommand;

use std::io::Read;

use anyhow::{Context, Result};

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements this
/// trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self) -> Result<()>;
}

/// Returns the given text, or reads it from stdin when absent.
pub(crate) fn read_text(text: Option<&str>) -> Result<String> {
    match text {
        Some(t) => Ok(t.to_string()),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read text from stdin")?;
            // A trailing newline is an artifact of the pipe, not the text
            Ok(buffer.trim_end_matches('\n').to_string())
        }
    }
}
