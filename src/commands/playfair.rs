//! Playfair cipher command.

use anyhow::Result;
use clap::Args;

use cipherlab::playfair::{self, Matrix};

use super::CommandExecutor;

/// Encrypt digraphs through a keyword matrix (Playfair cipher).
///
/// Text is reduced to A-Z (J becomes I, everything else is stripped) and
/// processed two letters at a time against the 5×5 keyword matrix.
#[derive(Args, Debug)]
pub struct PlayfairCommand {
    /// Keyword used to build the 5×5 matrix
    #[arg(short, long)]
    pub keyword: String,

    /// Decrypt instead of encrypt
    #[arg(short, long)]
    pub decrypt: bool,

    /// Text to transform (read from stdin when omitted)
    #[arg(short, long)]
    pub text: Option<String>,

    /// Print the keyword matrix before the result
    #[arg(long)]
    pub show_matrix: bool,
}

impl CommandExecutor for PlayfairCommand {
    fn execute(&self) -> Result<()> {
        let text = super::read_text(self.text.as_deref())?;

        if self.show_matrix {
            let matrix = Matrix::build(&self.keyword);
            for row in 0..5 {
                let line: Vec<String> = matrix
                    .row(row)
                    .iter()
                    .map(|&b| (b as char).to_string())
                    .collect();
                println!("{}", line.join(" "));
            }
            println!();
        }

        let result = if self.decrypt {
            playfair::decrypt(&text, &self.keyword)
        } else {
            playfair::encrypt(&text, &self.keyword)
        };

        println!("{result}");
        Ok(())
    }
}
