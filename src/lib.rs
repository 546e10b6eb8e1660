mod args;
mod diagnostic;
mod error;
mod lines;
mod load;
mod merge;
mod order;
mod run;

pub use args::{Invocation, UsageError, normalize_path, parse_args};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use error::MergeError;
pub use lines::{Element, FromLine, IntoLine, ParseError};
pub use load::{Loaded, OrderViolation, check_order, load_all, load_file, parse_line, split_lines, validate};
pub use merge::{WorkingSet, merge};
pub use order::{ElementKind, Order};
pub use run::{Config, Summary, run};
