//! Structure header generator tests: document framing, member rendering and
//! the suppression flag's effect on private methods.

use idlgen::{
    Argument, GenOptions, Interface, Library, Lifecycle, Method, MethodStatus, TOOL_VERSION,
    Vararg, structure::render_structure,
};

fn method(name: &str, result: &str) -> Method {
    Method {
        name: name.to_string(),
        result: result.to_string(),
        status: MethodStatus::Normal,
        lifecycle: Lifecycle::Normal,
        args: Vec::new(),
        vararg: None,
    }
}

fn arg(name: &str, ty: &str) -> Argument {
    Argument {
        name: name.to_string(),
        ty: ty.to_string(),
    }
}

fn demo_library() -> Library {
    let mut scale = method("Scale", "LONG");
    scale.lifecycle = Lifecycle::Deprecated;
    scale.args.push(arg("factor", "LONG"));

    let mut hook = method("Hook", "VOID");
    hook.args.push(arg("callback", "LONG (*)(VOID)"));

    let mut printf = method("Printf", "LONG");
    printf.args.push(arg("format", "CONST_STRPTR"));
    printf.vararg = Some(Vararg {
        name: "args".to_string(),
        ty: "APTR".to_string(),
    });

    Library {
        name: "demo".to_string(),
        copyright: None,
        includes: vec!["libraries/demo.h".to_string()],
        interfaces: vec![Interface {
            name: "main".to_string(),
            struct_name: "DemoIFace".to_string(),
            global_name: "IDemo".to_string(),
            asm_prefix: "dm".to_string(),
            methods: vec![method("Obtain", "ULONG"), scale, hook, printf],
        }],
    }
}

#[test]
fn renders_the_complete_document() {
    let expected = "\
#ifndef DEMO_INTERFACE_DEF_H
#define DEMO_INTERFACE_DEF_H

/*
** This file was machine generated by idlgen @VERSION@.
** Do not edit.
*/

#include <exec/types.h>
#include <exec/exec.h>
#include <exec/interfaces.h>

#include <libraries/demo.h>

#ifdef __cplusplus
#ifdef __USE_AMIGAOS_NAMESPACE__
namespace AmigaOS {
#endif
extern \"C\" {
#endif

struct DemoIFace
{
\tstruct InterfaceData Data;

\tULONG APICALL (*Obtain)(struct DemoIFace *Self);
\tDEPRECATED LONG APICALL (*Scale)(struct DemoIFace *Self, LONG factor);
\tVOID APICALL (*Hook)(struct DemoIFace *Self, LONG (*callback)());
\tLONG APICALL (*Printf)(struct DemoIFace *Self, CONST_STRPTR format, ...);
};

#ifdef __cplusplus
}
#ifdef __USE_AMIGAOS_NAMESPACE__
}
#endif
#endif

#endif /* DEMO_INTERFACE_DEF_H */
"
    .replace("@VERSION@", TOOL_VERSION);

    let opts = GenOptions {
        suppress_private: false,
    };
    assert_eq!(render_structure(&demo_library(), &opts), expected);
}

#[test]
fn copyright_is_framed_in_the_banner() {
    let mut lib = demo_library();
    lib.copyright = Some("Copyright (c) 2024 Demo Project".to_string());

    let header = render_structure(&lib, &GenOptions::default());
    assert!(header.contains(
        "** Do not edit.\n**\n** Copyright (c) 2024 Demo Project\n**\n*/\n"
    ));
}

#[test]
fn function_pointer_argument_is_rebuilt_around_the_name() {
    let mut lib = demo_library();
    lib.interfaces[0].methods = vec![{
        let mut m = method("SetHandler", "VOID");
        m.args.push(arg("fn", "LONG (*)(VOID)"));
        m
    }];

    let header = render_structure(&lib, &GenOptions::default());
    assert!(
        header.contains("(*SetHandler)(struct DemoIFace *Self, LONG (*fn)());"),
        "{header}"
    );
}

#[test]
fn suppression_turns_private_methods_into_placeholders() {
    let mut lib = demo_library();
    lib.interfaces[0].methods = vec![
        method("Visible", "VOID"),
        {
            let mut m = method("Secret", "VOID");
            m.status = MethodStatus::Private;
            m
        },
    ];

    let suppressed = render_structure(
        &lib,
        &GenOptions {
            suppress_private: true,
        },
    );
    assert!(suppressed.contains("\tAPTR Private1;"));
    assert!(!suppressed.contains("Secret"));

    let unsuppressed = render_structure(
        &lib,
        &GenOptions {
            suppress_private: false,
        },
    );
    assert!(unsuppressed.contains("\tVOID APICALL (*Secret)(struct DemoIFace *Self);"));
    assert!(!unsuppressed.contains("Private1"));
}

#[test]
fn unimplemented_methods_are_placeholders_under_either_flag() {
    let mut lib = demo_library();
    lib.interfaces[0].methods = vec![{
        let mut m = method("Legacy", "VOID");
        m.status = MethodStatus::Unimplemented;
        m
    }];

    for suppress_private in [false, true] {
        let header = render_structure(&lib, &GenOptions { suppress_private });
        assert!(header.contains("\tAPTR Legacy_UNIMPLEMENTED;"));
        assert!(!header.contains("(*Legacy)"));
    }
}

#[test]
fn each_interface_gets_its_own_struct() {
    let mut lib = demo_library();
    let mut second = lib.interfaces[0].clone();
    second.name = "extra".to_string();
    second.struct_name = "ExtraIFace".to_string();
    lib.interfaces.push(second);

    let header = render_structure(&lib, &GenOptions::default());
    assert!(header.contains("struct DemoIFace\n{"));
    assert!(header.contains("struct ExtraIFace\n{"));
}
