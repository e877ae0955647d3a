/// Errors produced while flattening an include tree.
#[derive(Debug, thiserror::Error)]
pub enum FlattenError {
    /// The root input, the output destination, or a mid-stream read failed.
    #[error("{path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// An include directive named a file that no resolution step could open.
    ///
    /// `file` is the immediate containing file, not the root; `line` is
    /// 1-based. The `Display` form is the exact diagnostic line emitted by
    /// [`preprocess`](crate::preprocess).
    #[error("unknown include file {filename} at file {file} at line {line}")]
    UnresolvedInclude {
        filename: String,
        file: String,
        line: usize,
    },

    /// Include nesting exceeded a caller-configured depth limit.
    ///
    /// Never produced under the default (unbounded) configuration.
    #[error("include depth limit {limit} exceeded at file {file} at line {line}")]
    DepthLimitExceeded {
        file: String,
        line: usize,
        limit: usize,
    },
}

impl FlattenError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        FlattenError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
