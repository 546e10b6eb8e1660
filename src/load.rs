use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use threadpool::ThreadPool;
use tracing::debug;

use super::diagnostic::Diagnostic;
use super::error::MergeError;
use super::lines::{Element, ParseError};
use super::order::Order;

/// The element was parsed, but it cannot follow the previously accepted one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderViolation<E> {
    pub candidate: E
}

/// Contents of one input file after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded<E> {
    pub source: PathBuf,
    /// Accepted elements, sorted in the requested order.
    pub elements: Vec<E>,
    /// Everything that was dropped on the way, in file order.
    pub diagnostics: Vec<Diagnostic>
}

/// Parses a single raw line into an element.
pub fn parse_line<E: Element>(line: &str) -> Result<E, ParseError> {
    E::from_line(line)
}

/// Checks `candidate` against the last accepted element of its file.
///
/// The first element of a file (`previous` is `None`) is always accepted.
pub fn check_order<E: Element>(
    candidate: E,
    previous: Option<&E>,
    order: Order
) -> Result<E, OrderViolation<E>> {
    match previous {
        Some(prev) if order.violates(prev, &candidate) => Err(OrderViolation { candidate }),
        _ => Ok(candidate)
    }
}

/// Validates the raw lines of `source`, keeping only well-formed elements
/// that respect `order`.
///
/// A rejected line is dropped for good: it does not become the new
/// reference for the lines after it.
pub fn validate<E, I, S>(lines: I, source: &Path, order: Order) -> Loaded<E>
where
    E: Element,
    I: IntoIterator<Item = S>,
    S: AsRef<str>
{
    let mut elements: Vec<E> = Vec::new();
    let mut diagnostics = Vec::new();
    for line in lines {
        let line = line.as_ref();
        let candidate = match parse_line::<E>(line) {
            Ok(value) => value,
            Err(_) => {
                diagnostics.push(Diagnostic::invalid_element(source, line));
                continue;
            }
        };
        match check_order(candidate, elements.last(), order) {
            Ok(value) => elements.push(value),
            Err(violation) => {
                diagnostics.push(Diagnostic::out_of_order(source, violation.candidate.to_string()))
            }
        }
    }
    Loaded { source: source.to_owned(), elements, diagnostics }
}

/// Reads and validates one input file.
///
/// A missing file is not an error: it yields no elements and a single
/// diagnostic. Any other I/O failure aborts the whole run.
pub fn load_file<E: Element>(path: &Path, order: Order) -> Result<Loaded<E>, MergeError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(Loaded {
                source: path.to_owned(),
                elements: Vec::new(),
                diagnostics: vec![Diagnostic::file_not_found(path)]
            });
        }
        Err(err) => return Err(MergeError::Read { path: path.to_owned(), source: err })
    };
    let text = String::from_utf8_lossy(&bytes);
    let loaded = validate(split_lines(&text), path, order);
    debug!(
        path = %path.display(),
        accepted = loaded.elements.len(),
        rejected = loaded.diagnostics.len(),
        "loaded input file"
    );
    Ok(loaded)
}

/// Loads all the input files, using up to `jobs` worker threads.
///
/// The files are independent, so they are validated in parallel, but the
/// results are always in the order of `paths`. A sequential load stops at
/// the first file that fails; the results after it are not produced.
pub fn load_all<E>(paths: &[PathBuf], order: Order, jobs: usize) -> Vec<Result<Loaded<E>, MergeError>>
where
    E: Element + Send + 'static
{
    if jobs <= 1 || paths.len() <= 1 {
        let mut results = Vec::with_capacity(paths.len());
        for path in paths {
            let result = load_file(path, order);
            let failed = result.is_err();
            results.push(result);
            if failed {
                break;
            }
        }
        return results;
    }

    let pool = ThreadPool::new(jobs.min(paths.len()));
    let (tx, rx) = mpsc::channel();
    for (index, path) in paths.iter().enumerate() {
        let tx = tx.clone();
        let path = path.clone();
        pool.execute(move || {
            // The receiver outlives every job.
            let _ = tx.send((index, load_file::<E>(&path, order)));
        });
    }
    drop(tx);

    let mut slots: Vec<Option<Result<Loaded<E>, MergeError>>> = (0..paths.len()).map(|_| None).collect();
    for (index, result) in rx {
        slots[index] = Some(result);
    }
    slots
        .into_iter()
        .zip(paths)
        .map(|(slot, path)| match slot {
            Some(result) => result,
            None => Err(MergeError::Worker { path: path.clone() })
        })
        .collect()
}

/// Splits `text` into lines the way a line reader does: a line ends at
/// `\n`, `\r` or `\r\n`, and a final terminator does not start a new line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(|c: char| c == '\n' || c == '\r') {
            Some(end) => {
                lines.push(&rest[..end]);
                let skip = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + skip..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }
    lines
}
