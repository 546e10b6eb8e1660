use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::args::{parse_args, Invocation};
use super::diagnostic::Diagnostic;
use super::error::MergeError;
use super::lines::Element;
use super::load::{load_all, Loaded};
use super::merge::{merge, WorkingSet};
use super::order::ElementKind;

const MSG_SUCCESS: &str = "Operation completed successfully!";

/// Configuration of the merge run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of threads used to load and validate the input files.
    /// The merge itself always runs on the calling thread.
    pub jobs: usize
}

impl Default for Config {
    fn default() -> Config {
        Config { jobs: num_cpus::get() }
    }
}

/// Result of a merge run that got past argument checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Input files that contributed at least one element.
    pub sources: usize,
    /// Number of lines written to the output file.
    pub written: usize,
    /// Number of files and lines that were skipped.
    pub skipped: usize
}

/// Performs the whole run for the command line `args`: checks the
/// arguments, loads the inputs, merges them and writes the output file.
///
/// Every message meant for the user is written to `console`. Malformed
/// arguments and a failed write are reported there and yield `Ok(None)`;
/// only a failure to read an existing input file is returned as an error.
pub fn run<S, W>(args: &[S], config: &Config, console: &mut W) -> Result<Option<Summary>, MergeError>
where
    S: AsRef<str>,
    W: Write
{
    let invocation = match parse_args(args, Path::is_file) {
        Ok(invocation) => invocation,
        Err(err) => {
            writeln!(console, "{}", err)?;
            return Ok(None);
        }
    };
    info!(order = %invocation.order, kind = %invocation.kind, inputs = invocation.inputs.len(), "merging");

    let (lines, sources, skipped) = match invocation.kind {
        ElementKind::Integer => merge_inputs::<i64, W>(&invocation, config, console)?,
        ElementKind::String => merge_inputs::<String, W>(&invocation, config, console)?
    };

    if !finish(&invocation.output, &lines, console)? {
        return Ok(None);
    }
    Ok(Some(Summary { sources, written: lines.len(), skipped }))
}

/// Loads the inputs of `invocation` as elements of type `E` and merges
/// them. Returns the merged lines, the number of contributing files and
/// the number of diagnostics printed.
fn merge_inputs<E, W>(
    invocation: &Invocation,
    config: &Config,
    console: &mut W
) -> Result<(Vec<String>, usize, usize), MergeError>
where
    E: Element + Send + 'static,
    W: Write
{
    let mut skipped = 0;
    let mut files: Vec<PathBuf> = Vec::with_capacity(invocation.inputs.len());
    for path in &invocation.inputs {
        if path.is_file() {
            files.push(path.clone());
        } else {
            writeln!(console, "{}", Diagnostic::file_not_found(path))?;
            skipped += 1;
        }
    }

    let results = load_all::<E>(&files, invocation.order, config.jobs);
    let working_set = collect_loaded(results, console, &mut skipped)?;
    let sources = working_set.len();
    let lines = merge(working_set, invocation.order);
    info!(sources, elements = lines.len(), skipped, "merged");
    Ok((lines, sources, skipped))
}

/// Prints the diagnostics of every loaded file in argument order and builds
/// the working set. Stops at the first file that failed, after printing
/// everything that came before it.
fn collect_loaded<E, W>(
    results: Vec<Result<Loaded<E>, MergeError>>,
    console: &mut W,
    skipped: &mut usize
) -> Result<WorkingSet<E>, MergeError>
where
    E: Element,
    W: Write
{
    let mut working_set = WorkingSet::new();
    for result in results {
        let loaded = result?;
        for diagnostic in &loaded.diagnostics {
            writeln!(console, "{}", diagnostic)?;
        }
        *skipped += loaded.diagnostics.len();
        working_set.insert(loaded.source, loaded.elements);
    }
    Ok(working_set)
}

/// Writes the result and reports the outcome. A failed write is printed
/// instead of the success message and yields `false`.
fn finish<W: Write>(output: &Path, lines: &[String], console: &mut W) -> Result<bool, MergeError> {
    match write_output(output, lines) {
        Ok(()) => {
            writeln!(console, "{}", MSG_SUCCESS)?;
            Ok(true)
        }
        Err(err) => {
            warn!(path = %output.display(), error = %err, "failed to write output");
            writeln!(console, "{}", MergeError::Write { path: output.to_owned(), source: err })?;
            Ok(false)
        }
    }
}

/// Overwrites `path` with one line per element.
fn write_output(path: &Path, lines: &[String]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}
