//! Error types for descriptor loading and code generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an interface description.
#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("failed to read descriptor at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed descriptor: {0}")]
    Syntax(#[from] crate::xml::SyntaxError),

    #[error("descriptor root element is <{0}>, expected <library>")]
    UnexpectedRoot(String),

    #[error("missing required attribute '{attr}' on <{element}>")]
    MissingAttr {
        element: &'static str,
        attr: &'static str,
    },
}

/// Errors that can occur while writing a generated file.
///
/// Generation renders the whole document before touching the filesystem;
/// every variant carries the offending output path.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
