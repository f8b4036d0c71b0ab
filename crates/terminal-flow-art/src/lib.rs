//! ASCII art files for terminal-flow.
//!
//! Art lives as `*.txt` files in a single directory. [`list_available`]
//! finds them, [`load`] decodes one into an [`ArtGrid`], and
//! [`ArtLibrary`] walks the list, skipping files that cannot be read.
//!
//! [`ArtGrid`]: terminal_flow_core::ArtGrid

mod error;
mod library;
mod loader;

pub use error::ArtError;
pub use library::{ArtLibrary, Direction};
pub use loader::{ART_EXTENSION, decode, list_available, load};
