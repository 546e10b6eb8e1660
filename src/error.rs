use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure of a merge run that is not a problem with a single input line.
#[derive(Debug)]
pub enum MergeError {
    /// An input file exists but could not be read.
    Read { path: PathBuf, source: io::Error },
    /// The merged result could not be written to the output file.
    Write { path: PathBuf, source: io::Error },
    /// The thread loading an input file stopped without a result.
    Worker { path: PathBuf },
    /// A message could not be printed to the console.
    Console(io::Error)
}

impl From<io::Error> for MergeError {
    fn from(err: io::Error) -> MergeError {
        MergeError::Console(err)
    }
}

impl fmt::Display for MergeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeError::Read { path, source } => {
                write!(f, "I/O error while reading {}: {}", path.display(), source)
            }
            MergeError::Write { path, source } => {
                write!(f, "I/O error while writing {}: {}", path.display(), source)
            }
            MergeError::Worker { path } => {
                write!(f, "loading {} stopped without a result", path.display())
            }
            MergeError::Console(err) => write!(f, "I/O error while printing: {}", err)
        }
    }
}

impl Error for MergeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MergeError::Read { source, .. } | MergeError::Write { source, .. } => Some(source),
            MergeError::Worker { .. } => None,
            MergeError::Console(err) => Some(err)
        }
    }
}
