use std::io;
use std::path::PathBuf;

/// Errors raised while finding or loading art files.
#[derive(Debug, thiserror::Error)]
pub enum ArtError {
    /// The art directory does not exist or is not a directory.
    #[error("text directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The art directory holds no `*.txt` files.
    #[error("no .txt files found in {}", .0.display())]
    NoArtFiles(PathBuf),

    /// A single file could not be read or decoded.
    #[error("cannot read {}: {reason}", path.display())]
    UnreadableFile { path: PathBuf, reason: String },

    /// Every file in the directory is unreadable.
    #[error("none of the {count} art files in {} could be read", dir.display())]
    NoReadableFiles { dir: PathBuf, count: usize },

    /// Listing the directory failed.
    #[error("cannot list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
