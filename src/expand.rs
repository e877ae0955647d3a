use std::io::{BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use crate::directive;
use crate::error::FlattenError;
use crate::resolve;
use crate::PreprocessConfig;

/// The recursive engine. Holds everything whose lifetime spans the whole
/// operation: the shared output sink, the immutable search path, and the
/// configuration. Per-file state (reader, context directory, line counter)
/// lives in each recursion frame.
pub(crate) struct Expander<'a, W: Write> {
    out: W,
    search_dirs: &'a [PathBuf],
    config: &'a PreprocessConfig,
}

impl<'a, W: Write> Expander<'a, W> {
    pub(crate) fn new(
        out: W,
        search_dirs: &'a [PathBuf],
        config: &'a PreprocessConfig,
    ) -> Self {
        Self {
            out,
            search_dirs,
            config,
        }
    }

    /// Expand one file into the sink, depth-first.
    ///
    /// Plain lines are written immediately, each followed by a single `\n`
    /// regardless of the source terminator. A directive line is resolved and
    /// its target fully expanded before the next line of this file is read;
    /// `context_dir` is this frame's base for local resolution and is not
    /// touched by the descent. Any error unwinds the whole recursion.
    pub(crate) fn expand_file(
        &mut self,
        input: impl Read,
        context_dir: &Path,
        file_path: &Path,
        depth: usize,
    ) -> Result<(), FlattenError> {
        let reader = BufReader::new(input);

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| FlattenError::io(file_path, e))?;
            let line_number = index + 1;

            let Some(directive) = directive::parse_line(&line) else {
                writeln!(self.out, "{line}").map_err(|e| FlattenError::io(file_path, e))?;
                continue;
            };

            let Some((resolved, file)) =
                resolve::resolve(&directive, context_dir, self.search_dirs)
            else {
                return Err(FlattenError::UnresolvedInclude {
                    filename: directive.filename().to_string(),
                    file: file_path.display().to_string(),
                    line: line_number,
                });
            };

            if let Some(limit) = self.config.max_depth {
                if depth >= limit {
                    return Err(FlattenError::DepthLimitExceeded {
                        file: file_path.display().to_string(),
                        line: line_number,
                        limit,
                    });
                }
            }

            // New context for the descent only; this frame keeps its own.
            let child_dir = resolved.parent().unwrap_or(Path::new("")).to_path_buf();
            self.expand_file(file, &child_dir, &resolved, depth + 1)?;
        }

        Ok(())
    }

    pub(crate) fn into_sink(self) -> W {
        self.out
    }
}
