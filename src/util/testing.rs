// src/util/testing.rs

use std::cell::RefCell;
use std::env;
use std::path::Path;
use std::rc::Rc;

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{DeckPackager, NoteStore};
use crate::domain::{DomainError, Note};

/// In-memory stand-in for the SQLite store, shared by use-case tests.
///
/// The row vector is handed out as an `Rc` so a test can keep inspecting it
/// after the store has moved into a `DeckManager`. `failing_after` makes the
/// n+1-th `add` fail, which is how the partial-save semantics are exercised.
pub struct MockNoteStore {
    rows: Rc<RefCell<Vec<Note>>>,
    fail_after: Option<usize>,
}

impl MockNoteStore {
    pub fn new() -> Self {
        Self {
            rows: Rc::new(RefCell::new(Vec::new())),
            fail_after: None,
        }
    }

    pub fn with_rows(rows: Vec<Note>) -> Self {
        Self {
            rows: Rc::new(RefCell::new(rows)),
            fail_after: None,
        }
    }

    /// Accept `n` adds, then fail every one after that.
    pub fn failing_after(n: usize) -> Self {
        Self {
            rows: Rc::new(RefCell::new(Vec::new())),
            fail_after: Some(n),
        }
    }

    /// Handle onto the durable rows, valid after the store is moved away.
    pub fn rows(&self) -> Rc<RefCell<Vec<Note>>> {
        Rc::clone(&self.rows)
    }
}

impl Default for MockNoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore for MockNoteStore {
    fn add(&mut self, note: &Note) -> Result<(), DomainError> {
        if let Some(limit) = self.fail_after {
            if self.rows.borrow().len() >= limit {
                return Err(DomainError::Storage(
                    rusqlite::Error::ExecuteReturnedResults,
                ));
            }
        }
        self.rows.borrow_mut().push(note.clone());
        Ok(())
    }

    fn load_all(&mut self) -> Result<Vec<Note>, DomainError> {
        Ok(self.rows.borrow().clone())
    }
}

/// Records every package write instead of touching the filesystem.
pub struct MockPackager {
    writes: Rc<RefCell<Vec<Vec<Note>>>>,
}

impl MockPackager {
    pub fn new() -> Self {
        Self {
            writes: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Handle onto the recorded writes (one note vector per write call).
    pub fn writes(&self) -> Rc<RefCell<Vec<Vec<Note>>>> {
        Rc::clone(&self.writes)
    }
}

impl Default for MockPackager {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckPackager for MockPackager {
    fn write(&mut self, notes: &[Note], _path: &Path) -> Result<(), DomainError> {
        self.writes.borrow_mut().push(notes.to_vec());
        Ok(())
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Quiet the SQLite layer in test output
    let noisy_modules = ["rusqlite"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[ctor::ctor]
    fn init() {
        init_test_setup().expect("Failed to initialize test setup");
    }

    #[test]
    fn given_mock_store_when_adding_then_rows_visible_through_handle() {
        let mut store = MockNoteStore::new();
        let rows = store.rows();

        store
            .add(&Note::new("lernen", "to learn", "Ich lerne.", "I learn.", None))
            .unwrap();

        assert_eq!(rows.borrow().len(), 1);
        assert_eq!(rows.borrow()[0].german_word, "lernen");
    }

    #[test]
    fn given_failing_store_when_limit_reached_then_add_errors() {
        let mut store = MockNoteStore::failing_after(1);
        let note = Note::new("eins", "one", "Eins.", "One.", None);

        assert!(store.add(&note).is_ok());
        assert!(store.add(&note).is_err());
        assert_eq!(store.rows().borrow().len(), 1);
    }

    #[test]
    fn given_mock_packager_when_writing_then_notes_recorded() {
        let mut packager = MockPackager::new();
        let writes = packager.writes();
        let note = Note::new("zwei", "two", "Zwei.", "Two.", None);

        packager.write(&[note], Path::new("unused.apkg")).unwrap();

        assert_eq!(writes.borrow().len(), 1);
        assert_eq!(writes.borrow()[0][0].german_word, "zwei");
    }
}
