//! Savegame color payload.
//!
//! Per-building tint colors travel inside the savegame as an opaque blob
//! stored under [`DATA_ID`].
//!
//! # Layout
//!
//! All integers little-endian.
//!
//! ```text
//! u32          record count N
//! N records:
//!   u16        building id
//!   u8 x 4     r g b a
//! ```
//!
//! Records are written in ascending id order. A missing or empty blob
//! decodes to an empty table.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use repaint_core::{BuildingId, Rgba8};
use std::collections::BTreeMap;
use std::io::{Cursor, ErrorKind, Read, Write};
use tracing::{trace, warn};

use crate::{DataError, DataResult};

/// Key the payload is stored under in the savegame.
pub const DATA_ID: &str = "PAINTER_COLOR_DATA";

/// Bytes per record: id + RGBA.
pub const RECORD_SIZE: usize = 2 + 4;

const HEADER_SIZE: usize = 4;

/// Per-building tint table.
pub type ColorTable = BTreeMap<BuildingId, Rgba8>;

/// Writes `colors` to `writer`.
pub fn write_to<W: Write>(writer: &mut W, colors: &ColorTable) -> DataResult<()> {
    let count = u32::try_from(colors.len()).map_err(|_| {
        DataError::Io(std::io::Error::new(
            ErrorKind::InvalidInput,
            "too many color records",
        ))
    })?;

    writer.write_u32::<LittleEndian>(count)?;
    for (&id, color) in colors {
        writer.write_u16::<LittleEndian>(id)?;
        writer.write_all(&color.to_bytes())?;
    }
    Ok(())
}

/// Encodes `colors` into a new blob.
pub fn encode(colors: &ColorTable) -> DataResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(HEADER_SIZE + colors.len() * RECORD_SIZE);
    write_to(&mut buf, colors)?;
    trace!(records = colors.len(), bytes = buf.len(), "encoded color payload");
    Ok(buf)
}

/// Decodes a blob. `None` and empty blobs yield an empty table.
///
/// When an id appears more than once the last record wins.
///
/// # Errors
///
/// - [`DataError::Truncated`] if the blob ends mid-record or declares more
///   records than it holds
/// - [`DataError::TrailingBytes`] if data follows the last record
pub fn decode(data: Option<&[u8]>) -> DataResult<ColorTable> {
    let mut colors = ColorTable::new();
    let data = match data {
        Some(d) if !d.is_empty() => d,
        _ => return Ok(colors),
    };

    let mut cursor = Cursor::new(data);
    let expected = cursor
        .read_u32::<LittleEndian>()
        .map_err(|_| DataError::Truncated { expected: 0, read: 0 })?;

    let mut read = 0u32;
    while read < expected {
        match read_record(&mut cursor) {
            Ok((id, color)) => {
                if colors.insert(id, color).is_some() {
                    warn!(building = id, "duplicate color record, keeping the later one");
                }
                read += 1;
            }
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                return Err(DataError::Truncated { expected, read });
            }
            Err(e) => return Err(e.into()),
        }
    }

    let trailing = data.len() - cursor.position() as usize;
    if trailing > 0 {
        return Err(DataError::TrailingBytes(trailing));
    }

    trace!(records = colors.len(), "decoded color payload");
    Ok(colors)
}

fn read_record<R: Read>(reader: &mut R) -> std::io::Result<(BuildingId, Rgba8)> {
    let id = reader.read_u16::<LittleEndian>()?;
    let mut rgba = [0u8; 4];
    reader.read_exact(&mut rgba)?;
    Ok((id, Rgba8::from_bytes(rgba)))
}
