use std::fmt;
use std::marker::Sized;

/// Reason why a raw line could not be turned into an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The line is not a decimal signed integer.
    NotAnInteger,
    /// The line contains a space, so it is not a single token.
    ContainsSpace
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::NotAnInteger => write!(f, "not an integer"),
            ParseError::ContainsSpace => write!(f, "contains a space")
        }
    }
}

/// Converts the value into a single line of the output file.
///
/// The merged result is written as text with one element per line, so the
/// element type must implement this trait. The conversion must be
/// revertible, so that `T::from_line(&value.into_line()) == Ok(value)` holds.
pub trait IntoLine {
    /// Performs the conversion from `Self` to the line. The resulting line
    /// must not contain `'\r'` and `'\n'` characters.
    fn into_line(self) -> String;
}

/// Converts a raw input line into the element.
///
/// This is the first stage of loading: it only checks that the line is a
/// well-formed element and knows nothing about the ordering of the file.
pub trait FromLine where Self: Sized {
    /// Performs the conversion from `line` to `Self`.
    fn from_line(line: &str) -> Result<Self, ParseError>;
}

/// An element that can be loaded, compared and merged.
///
/// Elements are never compared directly. Both the loader and the merger
/// compare the keys returned by `key()`, which is the numeric value for
/// integers and the length in characters for strings. Two strings of the
/// same length are therefore equal for ordering purposes, whatever their
/// contents.
pub trait Element: FromLine + IntoLine + Clone + fmt::Display {
    type Key: Ord + Copy;

    /// Returns the ordering key of the element.
    fn key(&self) -> Self::Key;
}

impl FromLine for i64 {
    fn from_line(line: &str) -> Result<Self, ParseError> {
        line.parse().map_err(|_| ParseError::NotAnInteger)
    }
}

impl IntoLine for i64 {
    fn into_line(self) -> String {
        self.to_string()
    }
}

impl Element for i64 {
    type Key = i64;

    fn key(&self) -> i64 {
        *self
    }
}

impl FromLine for String {
    fn from_line(line: &str) -> Result<Self, ParseError> {
        if line.contains(' ') {
            return Err(ParseError::ContainsSpace);
        }
        Ok(line.to_owned())
    }
}

impl IntoLine for String {
    fn into_line(self) -> String {
        self
    }
}

impl Element for String {
    type Key = usize;

    fn key(&self) -> usize {
        self.chars().count()
    }
}
