//! Inline call-macro generator.
//!
//! Emits `include/inline4/<lib>.h`: one call-style macro per visible method,
//! redirecting bare function-call syntax through the interface's global
//! pointer. Slot numbering plays no role here; only presence or absence of
//! a callable macro matters, filtered by [`crate::layout::macro_visible`].

use std::path::{Path, PathBuf};

use crate::GenOptions;
use crate::error::GenError;
use crate::layout::macro_visible;
use crate::model::{Interface, Library, Method};
use crate::output::{Doc, write_document};
use crate::{TOOL_NAME, TOOL_VERSION};

/// Preprocessor dialect for variadic macro expansion. Both forms must expand
/// to the same call on a compiler implementing only one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dialect {
    /// `...` parameters substituted with `__VA_ARGS__`.
    C99,
    /// Named catch-all parameter substituted with `##` token pasting.
    Gcc2,
}

/// Render the inline macro header document.
pub fn render_inline(lib: &Library, opts: &GenOptions) -> String {
    let guard = format!("INLINE4_{}_H", lib.name.to_uppercase());
    let mut doc = Doc::new();

    doc.putln(format!("#ifndef {guard}"));
    doc.putln(format!("#define {guard}"));
    doc.blank();
    put_banner(&mut doc, lib);
    doc.blank();
    put_includes(&mut doc, lib);
    doc.blank();

    for iface in &lib.interfaces {
        doc.putln(format!("/* Inline macros for Interface \"{}\" */", iface.name));

        for method in &iface.methods {
            if macro_visible(method, opts.suppress_private) {
                put_method_macros(&mut doc, iface, method);
            }
        }

        doc.blank();
    }

    doc.putln(format!("#endif /* {guard} */"));

    doc.finish()
}

/// Render the inline macro header and write it to
/// `<outdir>/include/inline4/<libname>.h`.
pub fn write_inline(lib: &Library, opts: &GenOptions, outdir: &Path) -> Result<PathBuf, GenError> {
    let contents = render_inline(lib, opts);
    let dir = outdir.join("include").join("inline4");
    write_document(&dir, &format!("{}.h", lib.name), &contents)
}

fn put_banner(doc: &mut Doc, lib: &Library) {
    doc.putln("/*");
    doc.putln(format!(
        "** This file was machine generated by {TOOL_NAME} {TOOL_VERSION}."
    ));
    doc.putln("** Do not edit.");

    if let Some(copyright) = &lib.copyright {
        doc.putln("**");
        doc.putln(format!("** {copyright}"));
    }

    doc.putln("**");
    doc.putln("** It provides compatibility to AmigaOS 3.x style library");
    doc.putln("** calls by substituting functions.");
    doc.putln("*/");
}

fn put_includes(doc: &mut Doc, lib: &Library) {
    doc.putln("#include <exec/types.h>");
    doc.putln("#include <exec/exec.h>");
    doc.putln("#include <exec/interfaces.h>");
    doc.blank();

    for include in &lib.includes {
        doc.putln(format!("#include <{include}>"));
    }
    doc.putln("#include <interfaces/exec.h>");
}

/// Emit the macro definition(s) for one visible method.
///
/// A variadic method needs one definition per preprocessor dialect, each
/// under its own feature guard; a plain method gets a single unguarded
/// definition.
fn put_method_macros(doc: &mut Doc, iface: &Interface, method: &Method) {
    if method.vararg.is_none() {
        put_macro(doc, iface, method, Dialect::C99);
        return;
    }

    doc.putln(
        "#if (defined(__STDC_VERSION__) && __STDC_VERSION__ >= 199901L) || (__GNUC__ >= 3)",
    );
    put_macro(doc, iface, method, Dialect::C99);
    doc.putln("#elif (__GNUC__ == 2 && __GNUC_MINOR__ >= 95)");
    put_macro(doc, iface, method, Dialect::Gcc2);
    doc.putln("#endif");
}

/// Render one `#define` in the given dialect.
fn put_macro(doc: &mut Doc, iface: &Interface, method: &Method, dialect: Dialect) {
    doc.put(format!("#define {}(", method.name));
    put_params(doc, method, dialect);
    doc.put(") ");
    doc.put(format!("{}->{}(", iface.global_name, method.name));
    put_args(doc, method, dialect);
    doc.putln(")");
}

fn put_params(doc: &mut Doc, method: &Method, dialect: Dialect) {
    let mut count = 0;
    for arg in &method.args {
        if count > 0 {
            doc.put(", ");
        }
        doc.put(&arg.name);
        count += 1;
    }

    if method.vararg.is_some() {
        if count > 0 {
            doc.put(", ");
        }
        // The legacy dialect names the catch-all only when named parameters
        // precede it.
        if dialect == Dialect::Gcc2 && count > 0 {
            doc.put("vargs");
        }
        doc.put("...");
    }
}

fn put_args(doc: &mut Doc, method: &Method, dialect: Dialect) {
    let mut count = 0;
    for arg in &method.args {
        if count > 0 {
            doc.put(", ");
        }
        // Parenthesized to survive operator precedence on substitution.
        doc.put(format!("({})", arg.name));
        count += 1;
    }

    if method.vararg.is_some() {
        if count > 0 {
            doc.put(", ");
        }
        match dialect {
            Dialect::C99 => doc.put("__VA_ARGS__"),
            Dialect::Gcc2 => doc.put("## vargs"),
        }
    }
}
