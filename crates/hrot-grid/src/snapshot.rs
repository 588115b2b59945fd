//! Raw binary grid snapshots.
//!
//! One file per generation, `gen_NNNNNN.bin`, laid out as two native-endian
//! `i32`s (width, height) followed by one byte per cell in row-major order.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::GridError;
use crate::grid::Grid;

/// Size of the `width`/`height` header in bytes.
pub const HEADER_LEN: usize = 8;

/// Path of the snapshot for `generation` under `folder`.
///
/// ```
/// use std::path::Path;
/// let p = hrot_grid::snapshot_path(Path::new("output"), 42);
/// assert_eq!(p, Path::new("output/gen_000042.bin"));
/// ```
pub fn snapshot_path(folder: &Path, generation: u64) -> PathBuf {
    folder.join(format!("gen_{generation:06}.bin"))
}

impl Grid {
    /// Encode this grid in snapshot format to `w`.
    pub fn write_snapshot<W: Write + ?Sized>(&self, w: &mut W) -> Result<(), GridError> {
        // Dimensions are capped at i32::MAX by construction.
        w.write_all(&(self.width() as i32).to_ne_bytes())?;
        w.write_all(&(self.height() as i32).to_ne_bytes())?;
        w.write_all(self.cells())?;
        Ok(())
    }

    /// Write this grid to `<folder>/gen_NNNNNN.bin`, creating `folder`
    /// if needed. Returns the path written.
    pub fn save(&self, folder: &Path, generation: u64) -> Result<PathBuf, GridError> {
        fs::create_dir_all(folder)?;
        let path = snapshot_path(folder, generation);
        let mut w = BufWriter::new(File::create(&path)?);
        self.write_snapshot(&mut w)?;
        w.flush()?;
        Ok(path)
    }

    /// Read a grid from a snapshot file.
    pub fn load(path: &Path) -> Result<Grid, GridError> {
        let mut r = BufReader::new(File::open(path)?);
        read_snapshot(&mut r)
    }
}

/// Decode one snapshot from `r`.
///
/// # Errors
///
/// `GridError::MalformedSnapshot` for a non-positive dimension, a
/// truncated header or cell buffer; `GridError::Io` for other read
/// failures.
pub fn read_snapshot<R: Read + ?Sized>(r: &mut R) -> Result<Grid, GridError> {
    let width = read_dim(r, "width")?;
    let height = read_dim(r, "height")?;
    let len = (width as usize)
        .checked_mul(height as usize)
        .ok_or(GridError::CellCountOverflow { width, height })?;
    let mut cells = Vec::new();
    r.take(len as u64).read_to_end(&mut cells)?;
    if cells.len() != len {
        return Err(GridError::MalformedSnapshot {
            detail: format!(
                "cell data truncated: expected {len} bytes, found {}",
                cells.len()
            ),
        });
    }
    Grid::from_cells(width, height, cells)
}

fn read_dim<R: Read + ?Sized>(r: &mut R, name: &str) -> Result<u32, GridError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf).map_err(|e| match e.kind() {
        std::io::ErrorKind::UnexpectedEof => GridError::MalformedSnapshot {
            detail: format!("header truncated while reading {name}"),
        },
        _ => GridError::Io(e),
    })?;
    let v = i32::from_ne_bytes(buf);
    u32::try_from(v)
        .ok()
        .filter(|&v| v > 0)
        .ok_or_else(|| GridError::MalformedSnapshot {
            detail: format!("{name} must be positive, got {v}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (1u32..40, 1u32..40).prop_flat_map(|(w, h)| {
            proptest::collection::vec(any::<u8>(), (w * h) as usize)
                .prop_map(move |cells| Grid::from_cells(w, h, cells).unwrap())
        })
    }

    #[test]
    fn dead_two_by_two_layout() {
        let g = Grid::new(2, 2).unwrap();
        let mut buf = Vec::new();
        g.write_snapshot(&mut buf).unwrap();
        assert_eq!(buf.len(), HEADER_LEN + 4);
        assert_eq!(&buf[0..4], &2i32.to_ne_bytes());
        assert_eq!(&buf[4..8], &2i32.to_ne_bytes());
        assert_eq!(&buf[8..], &[0, 0, 0, 0]);
    }

    #[test]
    fn cells_follow_header_row_major() {
        let g = Grid::from_cells(3, 1, vec![0, 1, 4]).unwrap();
        let mut buf = Vec::new();
        g.write_snapshot(&mut buf).unwrap();
        assert_eq!(&buf[0..4], &3i32.to_ne_bytes());
        assert_eq!(&buf[4..8], &1i32.to_ne_bytes());
        assert_eq!(&buf[HEADER_LEN..], &[0, 1, 4]);
        let back = read_snapshot(&mut buf.as_slice()).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn truncated_header_is_malformed() {
        let bytes = 2i32.to_ne_bytes();
        assert!(matches!(
            read_snapshot(&mut &bytes[..]),
            Err(GridError::MalformedSnapshot { .. })
        ));
    }

    #[test]
    fn truncated_cells_are_malformed() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&2i32.to_ne_bytes());
        bytes.extend_from_slice(&2i32.to_ne_bytes());
        bytes.extend_from_slice(&[1, 1, 1]);
        let err = read_snapshot(&mut bytes.as_slice()).unwrap_err();
        assert!(err.to_string().contains("expected 4 bytes, found 3"));
    }

    #[test]
    fn non_positive_dimensions_are_malformed() {
        for (w, h) in [(0i32, 2i32), (2, -1)] {
            let mut bytes = Vec::new();
            bytes.extend_from_slice(&w.to_ne_bytes());
            bytes.extend_from_slice(&h.to_ne_bytes());
            assert!(matches!(
                read_snapshot(&mut bytes.as_slice()),
                Err(GridError::MalformedSnapshot { .. })
            ));
        }
    }

    #[test]
    fn save_creates_folder_and_zero_padded_name() {
        let dir = std::env::temp_dir().join(format!("hrot_grid_save_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        let nested = dir.join("nested");
        let g = Grid::from_cells(2, 2, vec![1, 0, 0, 2]).unwrap();
        let path = g.save(&nested, 7).unwrap();
        assert_eq!(path, nested.join("gen_000007.bin"));
        assert_eq!(fs::metadata(&path).unwrap().len(), 12);
        assert_eq!(Grid::load(&path).unwrap(), g);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn save_into_a_file_path_fails() {
        let file = std::env::temp_dir().join(format!("hrot_grid_blocker_{}", std::process::id()));
        fs::write(&file, b"x").unwrap();
        let g = Grid::new(1, 1).unwrap();
        assert!(matches!(g.save(&file, 0), Err(GridError::Io(_))));
        let _ = fs::remove_file(&file);
    }

    proptest! {
        #[test]
        fn layout_is_header_then_cells(g in arb_grid()) {
            let mut buf = Vec::new();
            g.write_snapshot(&mut buf).unwrap();
            prop_assert_eq!(buf.len(), HEADER_LEN + g.cell_count());
            prop_assert_eq!(&buf[0..4], &(g.width() as i32).to_ne_bytes());
            prop_assert_eq!(&buf[4..8], &(g.height() as i32).to_ne_bytes());
            prop_assert_eq!(&buf[HEADER_LEN..], g.cells());
            let back = read_snapshot(&mut buf.as_slice()).unwrap();
            prop_assert_eq!(back, g);
        }
    }
}
