//! `include-flatten` — recursive `#include` flattening.
//!
//! Reads a source file and inlines every `#include "X"` / `#include <X>`
//! directive in place, depth-first, producing a single flattened output
//! file. Quoted includes resolve against the including file's directory
//! first, then an ordered list of search directories; angle includes resolve
//! against the search directories only. Everything that is not a directive
//! passes through verbatim, one `\n` per line.
//!
//! There is deliberately no macro expansion, no conditional compilation, no
//! comment handling, and no caching: a file is re-read and re-inlined every
//! time it is referenced.

mod directive;
mod error;
mod expand;
mod resolve;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub use directive::{parse_line, IncludeDirective};
pub use error::FlattenError;

use expand::Expander;

/// Knobs for one flattening run.
#[derive(Debug, Clone, Default)]
pub struct PreprocessConfig {
    /// Maximum include nesting depth; `None` (the default) leaves recursion
    /// unbounded, so a file that includes itself recurses until the stack
    /// runs out — same as the classic preprocessor behavior.
    pub max_depth: Option<usize>,
}

/// Flatten `input` into `output`, resolving includes via `search_dirs`.
///
/// The boolean surface: returns `false` on any failure. An unresolved
/// include additionally prints one diagnostic line to stderr naming the
/// filename, the immediate containing file, and the 1-based line number;
/// failures to open the input or output stay silent. On failure the output
/// file may hold a partial prefix of the expansion — treat it as
/// untrustworthy, not as absent.
pub fn preprocess(input: &Path, output: &Path, search_dirs: &[PathBuf]) -> bool {
    match try_preprocess(input, output, search_dirs) {
        Ok(()) => true,
        Err(FlattenError::Io { .. }) => false,
        Err(e) => {
            eprintln!("{e}");
            false
        }
    }
}

/// Like [`preprocess`], but returns the error value and never prints.
pub fn try_preprocess(
    input: &Path,
    output: &Path,
    search_dirs: &[PathBuf],
) -> Result<(), FlattenError> {
    try_preprocess_with(input, output, search_dirs, &PreprocessConfig::default())
}

/// Full-control entry point.
pub fn try_preprocess_with(
    input: &Path,
    output: &Path,
    search_dirs: &[PathBuf],
    config: &PreprocessConfig,
) -> Result<(), FlattenError> {
    let in_file = File::open(input).map_err(|e| FlattenError::io(input, e))?;
    let out_file = File::create(output).map_err(|e| FlattenError::io(output, e))?;

    let context_dir = input.parent().unwrap_or(Path::new("")).to_path_buf();
    let mut expander = Expander::new(BufWriter::new(out_file), search_dirs, config);
    let result = expander.expand_file(in_file, &context_dir, input, 0);

    // Flush even after a failure: partial output stays on disk by contract.
    let mut sink = expander.into_sink();
    let flushed = sink.flush().map_err(|e| FlattenError::io(output, e));
    result.and(flushed)
}
