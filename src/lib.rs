// src/lib.rs
pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod llm;
pub mod ports;
pub mod util;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::application::{DeckManager, NoteStore};
use crate::cli::args::{Args, Command};
use crate::domain::{DeckModel, Note};
use crate::infrastructure::{ApkgWriter, Config, SqliteNoteStore};
use crate::ports::TextPresenter;

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting wortschatz with arguments");

    match args.command {
        Command::Init => {
            let path = match args.config {
                Some(path) => path,
                None => {
                    let path =
                        default_config_path().context("Could not determine config directory")?;
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    path
                }
            };
            Config::create_default(&path)?;
            info!(path = %path.display(), "Wrote default config");
        }

        Command::Add {
            word,
            translation,
            german_sentence,
            english_sentence,
            other_forms,
        } => {
            let config = load_config(args.config.as_deref())?;
            let base = args.file.unwrap_or(config.deck.file);
            let db_path = Path::new(&base).with_extension("db");

            let mut store = SqliteNoteStore::new(&db_path)?;
            let note = Note::new(word, translation, german_sentence, english_sentence, other_forms);
            store.add(&note)?;
            info!(word = %note.german_word, path = %db_path.display(), "Added note to store");
        }

        Command::List { json } => {
            let config = load_config(args.config.as_deref())?;
            let base = args.file.unwrap_or_else(|| config.deck.file.clone());

            let mut manager = build_manager(&config, &base)?;
            manager.load()?;
            if json {
                println!("{}", serde_json::to_string_pretty(manager.notes())?);
            } else {
                print!("{}", TextPresenter::new().render(manager.notes()));
            }
        }

        Command::Export => {
            let config = load_config(args.config.as_deref())?;
            let base = args.file.unwrap_or_else(|| config.deck.file.clone());

            let mut manager = build_manager(&config, &base)?;
            manager.load()?;
            manager.export()?;
        }
    }

    Ok(())
}

fn build_manager(config: &Config, base: &str) -> Result<DeckManager<SqliteNoteStore, ApkgWriter>> {
    let db_path = Path::new(base).with_extension("db");
    let apkg_path = Path::new(base).with_extension("apkg");
    debug!(db = %db_path.display(), apkg = %apkg_path.display(), "Derived deck paths");

    let store = SqliteNoteStore::new(&db_path)?;
    let model = DeckModel::german_vocabulary(config.deck.model_id);
    let writer = ApkgWriter::new(config.deck.id, config.deck.name.clone(), model);
    Ok(DeckManager::new(store, writer, apkg_path))
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            debug!(?path, "Using provided config path");
            Config::load(path)
        }
        None => match default_config_path() {
            Some(path) if path.exists() => {
                debug!(?path, "Loading config from default location");
                Config::load(path)
            }
            _ => Ok(Config::default()),
        },
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wortschatz").join("config.toml"))
}
