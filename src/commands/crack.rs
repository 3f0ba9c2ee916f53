//! Brute-force attack commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use cipherlab::attacks::{CaesarBruteForce, SubstitutionBruteForce, VigenereBruteForce};

use super::CommandExecutor;

/// Brute-force a ciphertext without its key.
///
/// Prints one candidate decryption per line; eyeball the output for the
/// line that reads as language. Searches are bounded: Vigenère and
/// substitution stop at their candidate limits.
#[derive(Subcommand, Debug)]
pub enum CrackCommand {
    /// Try all 25 Caesar shifts
    Caesar(CrackCaesarCommand),

    /// Try Vigenère keys of a fixed length, in lexicographic order
    Vigenere(CrackVigenereCommand),

    /// Try substitution keys, in lexicographic permutation order
    Substitution(CrackSubstitutionCommand),
}

#[derive(Args, Debug)]
pub struct CrackCaesarCommand {
    /// Ciphertext to attack (read from stdin when omitted)
    #[arg(short, long)]
    pub text: Option<String>,

    /// Print candidates as JSON lines
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CrackVigenereCommand {
    /// Assumed key length in letters
    #[arg(short, long)]
    pub key_length: usize,

    /// Maximum number of keys to try
    #[arg(short, long, default_value = "1000")]
    pub limit: u64,

    /// Ciphertext to attack (read from stdin when omitted)
    #[arg(short, long)]
    pub text: Option<String>,

    /// Print candidates as JSON lines
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CrackSubstitutionCommand {
    /// Maximum number of keys to try
    #[arg(short, long, default_value = "100")]
    pub attempts: u64,

    /// Ciphertext to attack (read from stdin when omitted)
    #[arg(short, long)]
    pub text: Option<String>,

    /// Print candidates as JSON lines
    #[arg(long)]
    pub json: bool,
}

impl CommandExecutor for CrackCommand {
    fn execute(&self) -> Result<()> {
        match self {
            CrackCommand::Caesar(cmd) => {
                let text = super::read_text(cmd.text.as_deref())?;
                for candidate in CaesarBruteForce::new(&text) {
                    if cmd.json {
                        println!("{}", serde_json::to_string(&candidate)?);
                    } else {
                        println!("shift {:2}: {}", candidate.shift, candidate.text);
                    }
                }
            }
            CrackCommand::Vigenere(cmd) => {
                let text = super::read_text(cmd.text.as_deref())?;
                let search = VigenereBruteForce::new(&text, cmd.key_length, cmd.limit)
                    .context("Cannot start Vigenère search")?;
                for candidate in search {
                    if cmd.json {
                        println!("{}", serde_json::to_string(&candidate)?);
                    } else {
                        println!("key {}: {}", candidate.key, candidate.text);
                    }
                }
            }
            CrackCommand::Substitution(cmd) => {
                let text = super::read_text(cmd.text.as_deref())?;
                let search = SubstitutionBruteForce::new(&text, cmd.attempts)
                    .context("Cannot start substitution search")?;
                for candidate in search {
                    if cmd.json {
                        println!("{}", serde_json::to_string(&candidate)?);
                    } else {
                        println!("key {}: {}", candidate.key, candidate.text);
                    }
                }
            }
        }
        Ok(())
    }
}
