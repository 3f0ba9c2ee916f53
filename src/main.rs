//! Cipherlab - classical ciphers and the attacks that break them.
//!
//! A CLI wrapper around the cipherlab engine. The binary only parses
//! arguments, reads text, and prints results; every transform lives in the
//! library.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{
    CaesarCommand, CommandExecutor, CrackCommand, FrequencyCommand, KeygenCommand,
    PlayfairCommand, SubstitutionCommand, VigenereCommand,
};

/// Cipherlab - classical ciphers and the attacks that break them.
///
/// Educational toolkit: Caesar, Vigenère, monoalphabetic substitution,
/// Playfair, frequency analysis, and brute-force search. None of these
/// ciphers is secure; do not protect real secrets with them.
#[derive(Parser)]
#[command(name = "cipherlab")]
#[command(version)]
#[command(about = "Classical ciphers and the attacks that break them")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shift every character by a fixed amount (Caesar cipher)
    Caesar(CaesarCommand),

    /// Shift with a repeating key stream (Vigenère cipher)
    Vigenere(VigenereCommand),

    /// Substitute letters through a 26-letter permutation
    Substitution(SubstitutionCommand),

    /// Guess a substitution key from letter frequencies
    Frequency(FrequencyCommand),

    /// Encrypt digraphs through a keyword matrix (Playfair cipher)
    Playfair(PlayfairCommand),

    /// Brute-force a ciphertext without its key
    #[command(subcommand)]
    Crack(CrackCommand),

    /// Generate a random substitution key
    Keygen(KeygenCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Caesar(cmd) => cmd.execute(),
        Commands::Vigenere(cmd) => cmd.execute(),
        Commands::Substitution(cmd) => cmd.execute(),
        Commands::Frequency(cmd) => cmd.execute(),
        Commands::Playfair(cmd) => cmd.execute(),
        Commands::Crack(cmd) => cmd.execute(),
        Commands::Keygen(cmd) => cmd.execute(),
    }
}
