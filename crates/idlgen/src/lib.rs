//! Interface description compiler for Amiga-style library interfaces
//!
//! An interface description declares a library as an ordered list of
//! interfaces, each an ordered list of methods with typed arguments. From one
//! description this crate generates three textual artifacts that must agree
//! on the same binary method-table layout:
//!
//! - the C structure header (`include/interfaces/<lib>.h`): one struct per
//!   interface, one function-pointer member per method-table slot,
//! - the assembler structure include (`include/interfaces/<lib>.i`): the
//!   equivalent STRUCTURE/FPTR layout directives,
//! - the inline macro header (`include/inline4/<lib>.h`): call-style macros
//!   that dispatch through each interface's global pointer.
//!
//! The structural outputs share one slot-layout computation (see [`layout`]),
//! so a method lands at the same ordinal position in the C struct and the
//! assembler structure even when it is only visible as an opaque placeholder.
//! The macro header filters methods but never occupies slots.
//!
//! ## Example
//! ```ignore
//! use std::path::Path;
//! use idlgen::{GenOptions, Library, structure};
//!
//! let library = Library::load(Path::new("exec.xml"))?;
//! let opts = GenOptions { suppress_private: true };
//! let path = structure::write_structure(&library, &opts, Path::new("out"))?;
//! ```

pub mod argtype;
pub mod assembly;
pub mod error;
pub mod inline;
pub mod layout;
pub mod model;
pub mod output;
pub mod structure;
pub mod xml;

pub use error::{DescriptorError, GenError};
pub use model::{Argument, Interface, Library, Lifecycle, Method, MethodStatus, Vararg};

/// Name stamped into the banner comment of every generated file.
pub const TOOL_NAME: &str = "idlgen";

/// Version stamped into the banner comment of every generated file.
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Options shared by every generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenOptions {
    /// Replace private methods with opaque placeholder slots in the
    /// structural outputs and drop their call macros entirely.
    pub suppress_private: bool,
}
