//! Plain-text scenario files.
//!
//! One body per line, whitespace separated, in this order:
//!
//! ```text
//! # kind   color   mass      radius  x        y  vx  vy
//! star     yellow  1.989e30  30      0        0  0   0
//! planet   blue    5.972e24  5       1.496e11 0  0   29780
//! ```
//!
//! Blank lines and lines starting with `#` are ignored. Numbers are written
//! back with shortest round-trip formatting, so save then load is exact.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::info;

use crate::simulation::error::{LoadError, LoadErrorKind};
use crate::simulation::states::{Body, BodyKind, NVec2, UnknownKind};

const FIELDS: [&str; 8] = ["kind", "color", "mass", "radius", "x", "y", "vx", "vy"];

/// Parse a single non-comment line. `line_no` is only used for errors.
pub fn parse_body(line: &str, line_no: usize) -> Result<Body, LoadError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() > FIELDS.len() {
        return Err(LoadError::at(line_no, LoadErrorKind::TooManyFields(tokens.len())));
    }
    if let Some(missing) = FIELDS.get(tokens.len()) {
        return Err(LoadError::at(line_no, LoadErrorKind::MissingField(*missing)));
    }

    let kind: BodyKind = tokens[0]
        .parse()
        .map_err(|UnknownKind(kind)| {
            LoadError::at(line_no, LoadErrorKind::UnknownKind(kind))
        })?;
    let color = tokens[1].to_string();

    let mut values = [0.0f64; 6];
    for (k, value) in values.iter_mut().enumerate() {
        let field = FIELDS[k + 2];
        let token = tokens[k + 2];
        *value = token.parse().map_err(|_| {
            LoadError::at(
                line_no,
                LoadErrorKind::BadNumber { field, value: token.to_string() },
            )
        })?;
        if !value.is_finite() {
            return Err(LoadError::at(line_no, LoadErrorKind::NonFinite(field)));
        }
    }
    let [m, radius, x, y, vx, vy] = values;

    let body = Body::new(kind, color, m, radius, NVec2::new(x, y), NVec2::new(vx, vy));
    body.validate(line_no)?;
    Ok(body)
}

/// Parse a whole scenario held in memory
pub fn parse_scenario(text: &str) -> Result<Vec<Body>, LoadError> {
    read_scenario(text.as_bytes())
}

/// Parse a scenario from any buffered reader
pub fn read_scenario(reader: impl BufRead) -> Result<Vec<Body>, LoadError> {
    let mut bodies = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        bodies.push(parse_body(trimmed, i + 1)?);
    }
    if bodies.is_empty() {
        return Err(LoadError::empty());
    }
    Ok(bodies)
}

/// Load a scenario file from disk
pub fn load_scenario(path: impl AsRef<Path>) -> Result<Vec<Body>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let bodies = read_scenario(BufReader::new(file))?;
    info!("loaded {} bodies from {}", bodies.len(), path.display());
    Ok(bodies)
}

/// Format one body as a scenario line (no trailing newline)
pub fn format_body(body: &Body) -> String {
    format!(
        "{} {} {:e} {:e} {:e} {:e} {:e} {:e}",
        body.kind, body.color, body.m, body.radius, body.x.x, body.x.y, body.v.x, body.v.y
    )
}

/// Write bodies in load order. Forces are not persisted.
pub fn write_scenario(mut writer: impl Write, bodies: &[Body]) -> io::Result<()> {
    writeln!(writer, "# kind color mass radius x y vx vy")?;
    for body in bodies {
        writeln!(writer, "{}", format_body(body))?;
    }
    writer.flush()
}

/// Save bodies to a file on disk, replacing it
pub fn save_scenario(path: impl AsRef<Path>, bodies: &[Body]) -> io::Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_scenario(BufWriter::new(file), bodies)?;
    info!("saved {} bodies to {}", bodies.len(), path.display());
    Ok(())
}
