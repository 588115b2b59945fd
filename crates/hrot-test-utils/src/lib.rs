//! Test utilities for HROT development.
//!
//! Text-drawn grids ([`grid_from_rows`], [`grid_rows`]), standard
//! patterns in [`fixtures`], and [`TempOutputDir`] for tests that write
//! snapshots.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use hrot_grid::Grid;

pub use fixtures::{blinker, glider, life_rule};

/// Build a grid from text rows: `.` is dead, `O` is alive, and a digit
/// is that state. All rows must have the same length.
///
/// Panics on an empty picture, ragged rows, or an unknown character.
pub fn grid_from_rows(rows: &[&str]) -> Grid {
    assert!(!rows.is_empty(), "grid picture has no rows");
    let width = rows[0].chars().count();
    let mut cells = Vec::with_capacity(width * rows.len());
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.chars().count(), width, "row {y} has a different width");
        for c in row.chars() {
            cells.push(match c {
                '.' => 0,
                'O' => 1,
                d if d.is_ascii_digit() => d as u8 - b'0',
                other => panic!("unknown cell character {other:?} in row {y}"),
            });
        }
    }
    Grid::from_cells(width as u32, rows.len() as u32, cells).expect("valid grid picture")
}

/// Inverse of [`grid_from_rows`]: render each row as text.
pub fn grid_rows(grid: &Grid) -> Vec<String> {
    (0..grid.height())
        .map(|y| {
            grid.row(y)
                .unwrap_or_default()
                .iter()
                .map(|&s| match s {
                    0 => '.',
                    1 => 'O',
                    s if s < 10 => (b'0' + s) as char,
                    _ => '#',
                })
                .collect()
        })
        .collect()
}

static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

/// A fresh directory under the OS temp dir, removed on drop.
///
/// The name combines a caller label, the process id, and a counter so
/// parallel tests never share a folder.
#[derive(Debug)]
pub struct TempOutputDir {
    path: PathBuf,
}

impl TempOutputDir {
    pub fn new(label: &str) -> Self {
        let n = NEXT_DIR.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "hrot_test_{label}_{}_{n}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&path);
        Self { path }
    }

    /// The directory path. It is not created until something writes
    /// into it.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Paths of the files currently in the directory, sorted.
    pub fn files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = match fs::read_dir(&self.path) {
            Ok(entries) => entries.filter_map(|e| e.ok().map(|e| e.path())).collect(),
            Err(_) => Vec::new(),
        };
        files.sort();
        files
    }
}

impl Drop for TempOutputDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}
