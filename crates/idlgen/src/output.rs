//! Document buffer and output-file plumbing shared by the generators.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::GenError;
use crate::model::Library;
use crate::{TOOL_NAME, TOOL_VERSION};

/// Line-oriented text buffer a generator renders its document into.
#[derive(Debug, Default)]
pub struct Doc {
    buf: String,
}

impl Doc {
    pub fn new() -> Self {
        Doc::default()
    }

    /// Append text without a line break.
    pub fn put(&mut self, text: impl AsRef<str>) {
        self.buf.push_str(text.as_ref());
    }

    /// Append a full line.
    pub fn putln(&mut self, line: impl AsRef<str>) {
        self.put(line);
        self.buf.push('\n');
    }

    /// Append an empty line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// Include-guard label shared by the structure header and the assembler
/// include; the two files are never included from the same translation unit.
pub fn interface_guard(lib_name: &str) -> String {
    format!("{}_INTERFACE_DEF_H", lib_name.to_uppercase())
}

/// Machine-generated banner used by both structural generators.
pub fn put_banner(doc: &mut Doc, lib: &Library) {
    doc.putln("/*");
    doc.putln(format!(
        "** This file was machine generated by {TOOL_NAME} {TOOL_VERSION}."
    ));
    doc.putln("** Do not edit.");

    if let Some(copyright) = &lib.copyright {
        doc.putln("**");
        doc.putln(format!("** {copyright}"));
        doc.putln("**");
    }

    doc.putln("*/");
}

/// Write a fully rendered document to `<dir>/<filename>`.
///
/// Directory creation is idempotent and its result deliberately unchecked: a
/// real failure resurfaces at file open, which reports the offending path.
/// The file is truncated on open and closed only after the whole document is
/// written; an aborted run never leaves stale-but-plausible output behind.
pub fn write_document(dir: &Path, filename: &str, contents: &str) -> Result<PathBuf, GenError> {
    let _ = fs::create_dir_all(dir);

    let path = dir.join(filename);
    let mut file = File::create(&path).map_err(|source| io_error(&path, source))?;
    file.write_all(contents.as_bytes())
        .map_err(|source| io_error(&path, source))?;
    file.flush().map_err(|source| io_error(&path, source))?;

    Ok(path)
}

fn io_error(path: &Path, source: std::io::Error) -> GenError {
    GenError::Io {
        path: path.to_path_buf(),
        source,
    }
}
