// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Base file name for the deck; `.db` and `.apkg` derive from it
    /// (overrides the configured name)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub file: Option<String>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (add, list, export, or init)
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Add a vocabulary note to the store
    Add {
        /// German word or phrase
        #[arg(value_name = "WORD")]
        word: String,

        /// English translation
        #[arg(value_name = "TRANSLATION")]
        translation: String,

        /// Example sentence in German
        #[arg(value_name = "GERMAN_SENTENCE")]
        german_sentence: String,

        /// English translation of the example sentence
        #[arg(value_name = "ENGLISH_SENTENCE")]
        english_sentence: String,

        /// Other grammatical forms (plural, past tenses)
        #[arg(short, long, value_name = "FORMS")]
        other_forms: Option<String>,
    },

    /// List notes in the store
    List {
        /// Output notes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export the stored notes as an Anki package (.apkg)
    Export,

    /// Write a default config file
    Init,
}
