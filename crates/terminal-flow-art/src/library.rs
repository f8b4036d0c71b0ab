//! Navigation over the art files of one directory.

use std::path::{Path, PathBuf};

use terminal_flow_core::ArtGrid;

use crate::{ART_EXTENSION, ArtError, list_available, load};

/// Direction of travel through the file list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// The art files of a directory and which one is showing.
///
/// Files are re-read on every visit so edits show up while running.
#[derive(Debug, Clone)]
pub struct ArtLibrary {
    dir: PathBuf,
    files: Vec<PathBuf>,
    index: usize,
}

impl ArtLibrary {
    /// List `dir`; fails if it holds no art files.
    pub fn open(dir: &Path) -> Result<Self, ArtError> {
        let files = list_available(dir)?;
        if files.is_empty() {
            return Err(ArtError::NoArtFiles(dir.to_path_buf()));
        }
        Ok(Self {
            dir: dir.to_path_buf(),
            files,
            index: 0,
        })
    }

    /// Number of files, readable or not.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Path of the file currently showing.
    pub fn current_path(&self) -> &Path {
        &self.files[self.index]
    }

    /// Index of the file called `name`, with `.txt` appended if missing.
    pub fn find(&self, name: &str) -> Option<usize> {
        let suffix = format!(".{ART_EXTENSION}");
        let file_name = if name.ends_with(&suffix) {
            name.to_string()
        } else {
            format!("{name}{suffix}")
        };
        self.files
            .iter()
            .position(|path| path.file_name().is_some_and(|n| n == file_name.as_str()))
    }

    /// Load the file at `start`, moving forward past unreadable files.
    pub fn open_at(&mut self, start: usize) -> Result<ArtGrid, ArtError> {
        let start = start % self.files.len();
        self.scan(start, Direction::Next)
    }

    /// Load the neighbouring file in `direction`, skipping unreadable ones.
    ///
    /// The current file is tried last, so a library whose only readable
    /// file is the one showing reloads it. If nothing can be read the
    /// position is left unchanged.
    pub fn step(&mut self, direction: Direction) -> Result<ArtGrid, ArtError> {
        let start = self.neighbour(self.index, direction);
        self.scan(start, direction)
    }

    fn scan(&mut self, start: usize, direction: Direction) -> Result<ArtGrid, ArtError> {
        let mut index = start;
        for _ in 0..self.files.len() {
            let path = &self.files[index];
            match load(path) {
                Ok(grid) => {
                    self.index = index;
                    return Ok(grid);
                }
                Err(err) => tracing::warn!(%err, "skipping art file"),
            }
            index = self.neighbour(index, direction);
        }
        Err(ArtError::NoReadableFiles {
            dir: self.dir.clone(),
            count: self.files.len(),
        })
    }

    fn neighbour(&self, index: usize, direction: Direction) -> usize {
        let len = self.files.len();
        match direction {
            Direction::Next => (index + 1) % len,
            Direction::Previous => (index + len - 1) % len,
        }
    }
}
