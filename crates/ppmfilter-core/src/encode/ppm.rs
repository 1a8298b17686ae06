//! Plain (`P3`) PPM encoding.
//!
//! Output layout: the `P3` tag, `<width> <height>`, the max value `255`, then
//! one line per row holding that row's `width * 3` channel values. Every
//! value is followed by a single space and every row ends with `\n`.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::decode::PPM_TAG;
use crate::grid::{Grid, Rgb};

/// Max channel value written to the header.
pub const MAX_CHANNEL_VALUE: u8 = 255;

/// Errors that can occur while writing an encoded image.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The destination could not be created or written.
    #[error("Cannot write {}: {source}", path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Encode a grid as plain PPM text.
///
/// # Example
///
/// ```ignore
/// use ppmfilter_core::{encode::encode_ppm, Grid, Rgb};
///
/// let grid = Grid::filled(2, 1, Rgb::new(1, 2, 3)).unwrap();
/// assert_eq!(encode_ppm(&grid), "P3\n2 1\n255\n1 2 3 1 2 3 \n");
/// ```
pub fn encode_ppm(grid: &Grid) -> String {
    // Up to four bytes per channel ("255 ") plus a newline per row.
    let mut out = header(grid);
    out.reserve(grid.pixel_count() * 12 + grid.height() as usize);
    for row in grid.rows() {
        push_row(&mut out, row);
    }
    out
}

/// Stream a grid as plain PPM text into `writer`.
///
/// Rows are rendered one at a time through a buffered writer, which is
/// flushed before returning.
pub fn write_ppm<W: Write>(grid: &Grid, writer: W) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    writer.write_all(header(grid).as_bytes())?;

    let mut line = String::with_capacity(grid.width() as usize * 12 + 1);
    for row in grid.rows() {
        line.clear();
        push_row(&mut line, row);
        writer.write_all(line.as_bytes())?;
    }
    writer.flush()
}

/// Encode a grid and write it to `path`, creating or truncating the file.
///
/// # Errors
///
/// Returns [`EncodeError::Access`] if the file cannot be created or written.
pub fn write_ppm_file(path: &Path, grid: &Grid) -> Result<(), EncodeError> {
    let to_access_error = |source| EncodeError::Access {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_access_error)?;
    write_ppm(grid, file).map_err(to_access_error)?;

    debug!(
        "ppm: wrote {}x{} image to {}",
        grid.width(),
        grid.height(),
        path.display()
    );
    Ok(())
}

fn header(grid: &Grid) -> String {
    format!(
        "{PPM_TAG}\n{} {}\n{MAX_CHANNEL_VALUE}\n",
        grid.width(),
        grid.height()
    )
}

fn push_row(out: &mut String, row: &[Rgb]) {
    for px in row {
        for channel in px.channels() {
            out.push_str(&channel.to_string());
            out.push(' ');
        }
    }
    out.push('\n');
}


// ============================================================================
// Property-Based Tests
// ============================================================================
