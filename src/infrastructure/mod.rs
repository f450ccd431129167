// src/infrastructure/mod.rs
pub mod config;
pub mod package;
pub mod store;

pub use config::Config;
pub use package::ApkgWriter;
pub use store::SqliteNoteStore;
