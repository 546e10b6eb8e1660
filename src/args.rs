use std::fmt;
use std::path::{Path, PathBuf};

use super::order::{ElementKind, Order};

const ASCENDING: &str = "-a";
const DESCENDING: &str = "-d";
const STRING: &str = "-s";
const INTEGER: &str = "-i";

/// A fully checked command line: what to merge and where to put it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub order: Order,
    pub kind: ElementKind,
    /// Existing regular file that receives the result.
    pub output: PathBuf,
    /// Input paths as given, with separators normalized. Not checked yet.
    pub inputs: Vec<PathBuf>
}

/// Malformed command line. The run stops before touching any file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    EmptyArguments,
    NoDataType,
    InvalidArguments,
    NoFilesProvided,
    NoInputFiles,
    OutputFileNotFound(PathBuf)
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageError::EmptyArguments => write!(f, "The argument list is empty!"),
            UsageError::NoDataType => write!(f, "The input data type is not specified!"),
            UsageError::InvalidArguments => write!(f, "Invalid arguments!"),
            UsageError::NoFilesProvided => {
                write!(f, "The output and input files are not specified!")
            }
            UsageError::NoInputFiles => write!(f, "No input files are specified!"),
            UsageError::OutputFileNotFound(path) => {
                write!(f, "Output file not found! Path: {}", path.display())
            }
        }
    }
}

impl std::error::Error for UsageError {}

/// Replaces backslashes with forward slashes.
pub fn normalize_path(arg: &str) -> PathBuf {
    PathBuf::from(arg.replace('\\', "/"))
}

fn parse_kind(arg: &str) -> Option<ElementKind> {
    match arg {
        INTEGER => Some(ElementKind::Integer),
        STRING => Some(ElementKind::String),
        _ => None
    }
}

/// Parses `[-a|-d] [-s|-i] <output> <input>...`.
///
/// `is_file` tells whether a path names an existing regular file; it is
/// only asked about the output path. When the order flag is given but the
/// data type flag is not, the file slots are still checked first, so a
/// missing output file is reported before the missing data type.
pub fn parse_args<S, F>(args: &[S], is_file: F) -> Result<Invocation, UsageError>
where
    S: AsRef<str>,
    F: Fn(&Path) -> bool
{
    let mut rest = args.iter().map(|arg| arg.as_ref()).peekable();
    let first = rest.next().ok_or(UsageError::EmptyArguments)?;

    let (order, kind) = match first {
        ASCENDING | DESCENDING => {
            let order = if first == DESCENDING { Order::Descending } else { Order::Ascending };
            let next = *rest.peek().ok_or(UsageError::NoDataType)?;
            let kind = parse_kind(next);
            if kind.is_some() {
                rest.next();
            } else if next.starts_with('-') {
                return Err(UsageError::InvalidArguments);
            }
            (order, kind)
        }
        _ => match parse_kind(first) {
            Some(kind) => (Order::default(), Some(kind)),
            None => return Err(UsageError::InvalidArguments)
        }
    };

    let output = normalize_path(rest.next().ok_or(UsageError::NoFilesProvided)?);
    let inputs: Vec<PathBuf> = rest.map(normalize_path).collect();
    if inputs.is_empty() {
        return Err(UsageError::NoInputFiles);
    }
    if !is_file(&output) {
        return Err(UsageError::OutputFileNotFound(output));
    }
    let kind = kind.ok_or(UsageError::NoDataType)?;
    Ok(Invocation { order, kind, output, inputs })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Invocation, UsageError> {
        parse_args(args, |path| path != Path::new("missing.txt"))
    }

    #[test]
    fn full_command_line() {
        let inv = parse(&["-d", "-s", "out.txt", "in1.txt", "in2.txt"]).unwrap();
        assert_eq!(inv.order, Order::Descending);
        assert_eq!(inv.kind, ElementKind::String);
        assert_eq!(inv.output, PathBuf::from("out.txt"));
        assert_eq!(inv.inputs, vec![PathBuf::from("in1.txt"), PathBuf::from("in2.txt")]);
    }

    #[test]
    fn order_defaults_to_ascending() {
        let inv = parse(&["-i", "out.txt", "in.txt"]).unwrap();
        assert_eq!(inv.order, Order::Ascending);
        assert_eq!(inv.kind, ElementKind::Integer);
    }

    #[test]
    fn backslashes_are_normalized() {
        let inv = parse(&["-i", "dir\\out.txt", "C:\\data\\in.txt"]).unwrap();
        assert_eq!(inv.output, PathBuf::from("dir/out.txt"));
        assert_eq!(inv.inputs, vec![PathBuf::from("C:/data/in.txt")]);
    }

    #[test]
    fn malformed_shapes() {
        let empty: [&str; 0] = [];
        assert_eq!(parse(&empty), Err(UsageError::EmptyArguments));
        assert_eq!(parse(&["-a"]), Err(UsageError::NoDataType));
        assert_eq!(parse(&["-x", "out.txt", "in.txt"]), Err(UsageError::InvalidArguments));
        assert_eq!(parse(&["out.txt", "in.txt"]), Err(UsageError::InvalidArguments));
        assert_eq!(parse(&["-a", "-d", "out.txt", "in.txt"]), Err(UsageError::InvalidArguments));
        assert_eq!(parse(&["-a", "-i"]), Err(UsageError::NoFilesProvided));
        assert_eq!(parse(&["-s"]), Err(UsageError::NoFilesProvided));
        assert_eq!(parse(&["-i", "out.txt"]), Err(UsageError::NoInputFiles));
        assert_eq!(
            parse(&["-i", "missing.txt", "in.txt"]),
            Err(UsageError::OutputFileNotFound(PathBuf::from("missing.txt")))
        );
    }

    #[test]
    fn missing_output_reported_before_missing_data_type() {
        assert_eq!(
            parse(&["-d", "missing.txt", "in1.txt"]),
            Err(UsageError::OutputFileNotFound(PathBuf::from("missing.txt")))
        );
        assert_eq!(parse(&["-d", "out.txt", "in1.txt"]), Err(UsageError::NoDataType));
        assert_eq!(parse(&["-d", "out.txt"]), Err(UsageError::NoInputFiles));
    }
}
