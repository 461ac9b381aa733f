//! Assembler structure-include generator.
//!
//! Emits `include/interfaces/<lib>.i`: the STRUCTURE/FPTR layout directives
//! equivalent to the structure header. Both outputs take their member lists
//! from the same [`crate::layout::slot_layout`] call, so slot N here is
//! always slot N in the C declaration.

use std::path::{Path, PathBuf};

use crate::GenOptions;
use crate::error::GenError;
use crate::layout::{Slot, slot_layout};
use crate::model::{Interface, Library};
use crate::output::{Doc, interface_guard, put_banner, write_document};

/// Render the assembler include document.
pub fn render_assembly(lib: &Library, opts: &GenOptions) -> String {
    let guard = interface_guard(&lib.name);
    let mut doc = Doc::new();

    doc.putln(format!("#ifndef {guard}"));
    doc.putln(format!("#define {guard}"));
    // This format keeps the banner flush against the guard.
    put_banner(&mut doc, lib);
    doc.blank();
    doc.putln("#include <exec/types.i>");
    doc.putln("#include <exec/exec.i>");
    doc.putln("#include <exec/interfaces.i>");
    doc.blank();

    for iface in &lib.interfaces {
        put_interface(&mut doc, iface, opts);
    }

    doc.putln(format!("#endif /* {guard} */"));

    doc.finish()
}

/// Render the assembler include and write it to
/// `<outdir>/include/interfaces/<libname>.i`.
pub fn write_assembly(
    lib: &Library,
    opts: &GenOptions,
    outdir: &Path,
) -> Result<PathBuf, GenError> {
    let contents = render_assembly(lib, opts);
    let dir = outdir.join("include").join("interfaces");
    write_document(&dir, &format!("{}.i", lib.name), &contents)
}

fn put_interface(doc: &mut Doc, iface: &Interface, opts: &GenOptions) {
    doc.putln(format!(
        "STRUCTURE {}, InterfaceData_SIZE",
        iface.struct_name
    ));

    for slot in slot_layout(iface, opts.suppress_private) {
        match slot {
            Slot::Method(method) => {
                doc.putln(format!("\t    FPTR {}_{}", iface.asm_prefix, method.name));
            }
            Slot::Private(num) => {
                doc.putln(format!("\t    FPTR {}_Private{num}", iface.asm_prefix));
            }
            Slot::Unimplemented(method) => {
                doc.putln(format!(
                    "\t    FPTR {}_{}_UNIMPLEMENTED",
                    iface.struct_name, method.name
                ));
            }
        }
    }

    doc.putln(format!("\tLABEL {}_SIZE", iface.struct_name));
    doc.blank();
}
