//! Dataset loading.
//!
//! Loading happens once, before any view state exists. Every failure here is
//! fatal for the caller; nothing is partially loaded.

mod loader;

pub use loader::{
    CYLINDERS_COLUMN, HORSEPOWER_COLUMN, LoadOptions, MPG_COLUMN, load_path, load_reader,
};
