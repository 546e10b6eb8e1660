use std::fmt;
use std::path::{Path, PathBuf};

/// What kind of problem a diagnostic reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The input path does not name a regular file. The file is skipped.
    FileNotFound,
    /// The line could not be parsed as an element. The line is skipped.
    InvalidElement,
    /// The element breaks the sort order of its file. The line is skipped.
    OutOfOrder
}

/// A recoverable problem found while loading the input files.
///
/// Diagnostics never stop the run; the offending file or line is excluded
/// and the problem is reported on the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// The input file the problem was found in.
    pub source: PathBuf,
    /// The offending value, if the problem is about a single line.
    pub value: Option<String>
}

impl Diagnostic {
    pub fn file_not_found(source: &Path) -> Diagnostic {
        Diagnostic { kind: DiagnosticKind::FileNotFound, source: source.to_owned(), value: None }
    }

    pub fn invalid_element(source: &Path, value: impl Into<String>) -> Diagnostic {
        Diagnostic {
            kind: DiagnosticKind::InvalidElement,
            source: source.to_owned(),
            value: Some(value.into())
        }
    }

    pub fn out_of_order(source: &Path, value: impl Into<String>) -> Diagnostic {
        Diagnostic {
            kind: DiagnosticKind::OutOfOrder,
            source: source.to_owned(),
            value: Some(value.into())
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value.as_deref().unwrap_or_default();
        match self.kind {
            DiagnosticKind::FileNotFound => {
                write!(f, "File not found! Path: {}!", self.source.display())
            }
            DiagnosticKind::InvalidElement => {
                write!(f, "Invalid element: {} in file: {}!", value, self.source.display())
            }
            DiagnosticKind::OutOfOrder => {
                write!(f, "Unsorted element: {} in file: {}!", value, self.source.display())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_value_and_source() {
        let diag = Diagnostic::invalid_element(Path::new("in/a.txt"), "abc");
        assert_eq!(diag.to_string(), "Invalid element: abc in file: in/a.txt!");
        let diag = Diagnostic::out_of_order(Path::new("b.txt"), "2");
        assert_eq!(diag.to_string(), "Unsorted element: 2 in file: b.txt!");
    }

    #[test]
    fn renders_missing_file() {
        let diag = Diagnostic::file_not_found(Path::new("nope.txt"));
        assert_eq!(diag.kind, DiagnosticKind::FileNotFound);
        assert_eq!(diag.to_string(), "File not found! Path: nope.txt!");
    }
}
