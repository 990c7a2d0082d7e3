//! Error types for scenario loading and stepping

use std::fmt;
use std::io;

/// What went wrong on a scenario line
#[derive(Debug)]
pub enum LoadErrorKind {
    MissingField(&'static str),
    TooManyFields(usize),
    UnknownKind(String),
    BadNumber { field: &'static str, value: String },
    NonFinite(&'static str),
    BadColor(String),
    NonPositiveMass(f64),
    NonPositiveRadius(f64),
    Empty,
    Io(io::Error),
}

/// A scenario could not be loaded. `line` is 1-based, 0 when the error
/// is not tied to a line.
#[derive(Debug)]
pub struct LoadError {
    pub line: usize,
    pub kind: LoadErrorKind,
}

impl LoadError {
    pub fn at(line: usize, kind: LoadErrorKind) -> Self {
        Self { line, kind }
    }

    pub fn empty() -> Self {
        Self { line: 0, kind: LoadErrorKind::Empty }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        Self { line: 0, kind: LoadErrorKind::Io(err) }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line > 0 {
            write!(f, "line {}: ", self.line)?;
        }
        match &self.kind {
            LoadErrorKind::MissingField(field) => write!(f, "missing field `{field}`"),
            LoadErrorKind::TooManyFields(n) => write!(f, "expected 8 fields, found {n}"),
            LoadErrorKind::UnknownKind(kind) => {
                write!(f, "unknown body kind `{kind}`, expected `star` or `planet`")
            }
            LoadErrorKind::BadNumber { field, value } => {
                write!(f, "field `{field}`: `{value}` is not a number")
            }
            LoadErrorKind::NonFinite(field) => write!(f, "field `{field}` is not finite"),
            LoadErrorKind::BadColor(color) => {
                write!(f, "color `{color}` must be a single non-empty token")
            }
            LoadErrorKind::NonPositiveMass(m) => write!(f, "mass must be positive, got {m}"),
            LoadErrorKind::NonPositiveRadius(r) => write!(f, "radius must be positive, got {r}"),
            LoadErrorKind::Empty => write!(f, "scenario contains no bodies"),
            LoadErrorKind::Io(err) => write!(f, "i/o error: {err}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            LoadErrorKind::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// A step was rejected or faulted. The collection is left as it was
/// before the step.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    InvalidTimeStep(f64),
    NonFiniteForce { body: usize },
    NonFiniteState { body: usize },
    NoScenario,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidTimeStep(dt) => {
                write!(f, "time step must be finite and non-zero, got {dt}")
            }
            SimError::NonFiniteForce { body } => {
                write!(f, "force on body {body} is not finite")
            }
            SimError::NonFiniteState { body } => {
                write!(f, "position or velocity of body {body} is not finite")
            }
            SimError::NoScenario => write!(f, "no scenario loaded"),
        }
    }
}

impl std::error::Error for SimError {}
