//! Error types for configuring and emitting generated bindings

use thiserror::Error;

/// Error type for the generator.
///
/// Rendering itself is total; only configuration and the final write can fail.
#[derive(Error, Debug)]
pub enum Error {
  #[error("invalid archive path `{path}`: {source}")]
  InvalidArchivePath {
    path: String,
    #[source]
    source: syn::Error,
  },
  #[error("arity bound must be at least 1 (got {0})")]
  EmptyArityRange(usize),
  #[error("failed to write generated document")]
  Io(#[from] std::io::Error),
}
