//! Helpers for rendering values as PostgreSQL literals.

use crate::Result;
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use std::io;

/// WGS 84, the reference system of the input coordinates.
pub const SRID: u32 = 4326;

/// Doubles every single quote so the text can sit inside a `'...'` literal.
pub fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}

pub fn quote_literal(value: &str) -> String {
    format!("'{}'", escape_literal(value))
}

/// Single-line JSON with a space after every `,` and `:`.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

pub fn to_spaced_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut serializer)?;
    // serde_json only ever writes UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Serializes `value` and renders it as a `'...'::jsonb` literal.
///
/// The JSON text is produced from the raw values first and escaped afterwards,
/// so the stored document contains single quotes exactly once.
pub fn jsonb_literal<T: Serialize>(value: &T) -> Result<String> {
    let json = to_spaced_json(value)?;
    Ok(format!("{}::jsonb", quote_literal(&json)))
}

/// PostGIS point in (longitude, latitude) order.
pub fn make_point(latitude: f64, longitude: f64) -> String {
    format!(
        "ST_SetSRID(ST_MakePoint({}, {}), {})",
        format_coordinate(longitude),
        format_coordinate(latitude),
        SRID
    )
}

// Shortest round-trip form, always with a decimal point for whole numbers.
fn format_coordinate(value: f64) -> String {
    format!("{value:?}")
}
