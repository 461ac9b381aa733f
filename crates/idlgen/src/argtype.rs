//! Argument-type rendering for the structure generator.
//!
//! Most argument types are emitted verbatim in front of the argument name. A
//! type string may instead embed a `(*)` marker, flagging a function-pointer
//! argument whose declarator has to be rebuilt around the argument name. The
//! matcher works over the grammar `prefix '(*)' suffix`: the prefix is the
//! return type, the suffix (the inner parameter list) is dropped on output.

/// Marker that flags a function-pointer argument type.
const FNPTR_MARKER: &str = "(*)";

/// A classified argument type string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType<'a> {
    /// Ordinary type, emitted verbatim.
    Plain(&'a str),
    /// Function-pointer type; `prefix` is the return-type text before the
    /// marker, with trailing whitespace trimmed.
    FnPtr { prefix: &'a str },
}

/// Classify an argument type string by the first `(*)` marker, if any.
pub fn classify(ty: &str) -> ArgType<'_> {
    match ty.find(FNPTR_MARKER) {
        Some(idx) => ArgType::FnPtr {
            prefix: ty[..idx].trim_end(),
        },
        None => ArgType::Plain(ty),
    }
}

/// Render an argument declaration for the structure header.
///
/// A structurally incomplete function-pointer type (marker at the very start)
/// still renders; the declarator just has no return type. Marker detection is
/// a heuristic, never an error.
pub fn render_arg(name: &str, ty: &str) -> String {
    match classify(ty) {
        ArgType::Plain(ty) => format!("{ty} {name}"),
        ArgType::FnPtr { prefix: "" } => format!("(*{name})()"),
        ArgType::FnPtr { prefix } => format!("{prefix} (*{name})()"),
    }
}
