//! Structure header generator.
//!
//! Emits `include/interfaces/<lib>.h`: one C structure declaration per
//! interface, with the common interface data embedded first and one member
//! per method-table slot. Members come straight from [`crate::layout`], so
//! the declaration stays ABI-identical to the assembler include.

use std::path::{Path, PathBuf};

use crate::GenOptions;
use crate::argtype::render_arg;
use crate::error::GenError;
use crate::layout::{Slot, slot_layout};
use crate::model::{Interface, Library, Lifecycle, Method};
use crate::output::{Doc, interface_guard, put_banner, write_document};

/// Render the structure header document.
pub fn render_structure(lib: &Library, opts: &GenOptions) -> String {
    let guard = interface_guard(&lib.name);
    let mut doc = Doc::new();

    doc.putln(format!("#ifndef {guard}"));
    doc.putln(format!("#define {guard}"));
    doc.blank();
    put_banner(&mut doc, lib);
    doc.blank();
    put_includes(&mut doc, lib);
    doc.blank();
    put_wrapper_top(&mut doc);
    doc.blank();

    for iface in &lib.interfaces {
        put_interface(&mut doc, iface, opts);
        doc.blank();
    }

    put_wrapper_bottom(&mut doc);
    doc.blank();
    doc.putln(format!("#endif /* {guard} */"));

    doc.finish()
}

/// Render the structure header and write it to
/// `<outdir>/include/interfaces/<libname>.h`.
pub fn write_structure(
    lib: &Library,
    opts: &GenOptions,
    outdir: &Path,
) -> Result<PathBuf, GenError> {
    let contents = render_structure(lib, opts);
    let dir = outdir.join("include").join("interfaces");
    write_document(&dir, &format!("{}.h", lib.name), &contents)
}

fn put_includes(doc: &mut Doc, lib: &Library) {
    doc.putln("#include <exec/types.h>");
    doc.putln("#include <exec/exec.h>");
    doc.putln("#include <exec/interfaces.h>");
    doc.blank();

    for include in &lib.includes {
        doc.putln(format!("#include <{include}>"));
    }
}

/// Extern-linkage wrapper, optionally nested in a namespace selected at
/// compile time by the consumer.
fn put_wrapper_top(doc: &mut Doc) {
    doc.putln("#ifdef __cplusplus");
    doc.putln("#ifdef __USE_AMIGAOS_NAMESPACE__");
    doc.putln("namespace AmigaOS {");
    doc.putln("#endif");
    doc.putln("extern \"C\" {");
    doc.putln("#endif");
}

fn put_wrapper_bottom(doc: &mut Doc) {
    doc.putln("#ifdef __cplusplus");
    doc.putln("}");
    doc.putln("#ifdef __USE_AMIGAOS_NAMESPACE__");
    doc.putln("}");
    doc.putln("#endif");
    doc.putln("#endif");
}

fn put_interface(doc: &mut Doc, iface: &Interface, opts: &GenOptions) {
    doc.putln(format!("struct {}", iface.struct_name));
    doc.putln("{");
    doc.putln("\tstruct InterfaceData Data;");
    doc.blank();

    for slot in slot_layout(iface, opts.suppress_private) {
        match slot {
            Slot::Method(method) => put_method(doc, iface, method),
            Slot::Private(num) => doc.putln(format!("\tAPTR Private{num};")),
            Slot::Unimplemented(method) => {
                doc.putln(format!("\tAPTR {}_UNIMPLEMENTED;", method.name));
            }
        }
    }

    doc.putln("};");
}

fn put_method(doc: &mut Doc, iface: &Interface, method: &Method) {
    let result = match method.lifecycle {
        Lifecycle::Deprecated => format!("DEPRECATED {}", method.result),
        Lifecycle::Normal => method.result.clone(),
    };

    doc.put(format!("\t{result} APICALL (*{})", method.name));
    doc.put(format!("(struct {} *Self", iface.struct_name));

    for arg in &method.args {
        doc.put(format!(", {}", render_arg(&arg.name, &arg.ty)));
    }
    if method.vararg.is_some() {
        doc.put(", ...");
    }

    doc.putln(");");
}
