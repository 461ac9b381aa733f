//! Cross-format slot consistency between the structure header and the
//! assembler include: slot N in one output must always be slot N in the
//! other, placeholders included, under either suppression setting.

use idlgen::{
    GenOptions, Interface, Library, Lifecycle, Method, MethodStatus,
    assembly::render_assembly, structure::render_structure,
};

fn method(name: &str, status: MethodStatus) -> Method {
    Method {
        name: name.to_string(),
        result: "VOID".to_string(),
        status,
        lifecycle: Lifecycle::Normal,
        args: Vec::new(),
        vararg: None,
    }
}

fn library(interfaces: Vec<Interface>) -> Library {
    Library {
        name: "demo".to_string(),
        copyright: None,
        includes: Vec::new(),
        interfaces,
    }
}

fn iface(name: &str, methods: Vec<Method>) -> Interface {
    Interface {
        name: name.to_string(),
        struct_name: "DemoIFace".to_string(),
        global_name: "IDemo".to_string(),
        asm_prefix: "dm".to_string(),
        methods,
    }
}

/// A structural member classified independently of the output format.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Member {
    Method(String),
    Private(u32),
    Unimplemented(String),
}

/// Extract the member sequence from the structure header.
fn header_members(header: &str) -> Vec<Member> {
    header
        .lines()
        .filter(|line| line.starts_with('\t'))
        .filter(|line| *line != "\tstruct InterfaceData Data;")
        .map(|line| {
            let line = line.trim_start_matches('\t');
            if let Some(rest) = line.strip_prefix("APTR Private") {
                Member::Private(rest.trim_end_matches(';').parse().unwrap())
            } else if let Some(rest) = line.strip_prefix("APTR ") {
                let name = rest.trim_end_matches(';').trim_end_matches("_UNIMPLEMENTED");
                Member::Unimplemented(name.to_string())
            } else {
                let start = line.find("(*").unwrap() + 2;
                let end = start + line[start..].find(')').unwrap();
                Member::Method(line[start..end].to_string())
            }
        })
        .collect()
}

/// Extract the member sequence from the assembler include.
fn asm_members(listing: &str, prefix: &str, struct_name: &str) -> Vec<Member> {
    listing
        .lines()
        .filter(|line| line.trim_start().starts_with("FPTR "))
        .map(|line| {
            let symbol = line.trim_start().strip_prefix("FPTR ").unwrap();
            if let Some(rest) = symbol.strip_prefix(&format!("{prefix}_Private")) {
                Member::Private(rest.parse().unwrap())
            } else if let Some(rest) = symbol.strip_suffix("_UNIMPLEMENTED") {
                let name = rest.strip_prefix(&format!("{struct_name}_")).unwrap();
                Member::Unimplemented(name.to_string())
            } else {
                Member::Method(
                    symbol
                        .strip_prefix(&format!("{prefix}_"))
                        .unwrap()
                        .to_string(),
                )
            }
        })
        .collect()
}

fn mixed_library() -> Library {
    library(vec![iface(
        "main",
        vec![
            method("Open", MethodStatus::Normal),
            method("Hidden", MethodStatus::Private),
            method("Legacy", MethodStatus::Unimplemented),
            method("Covert", MethodStatus::Private),
            method("Close", MethodStatus::Normal),
        ],
    )])
}

#[test]
fn formats_agree_with_suppression_on() {
    let lib = mixed_library();
    let opts = GenOptions {
        suppress_private: true,
    };

    let from_header = header_members(&render_structure(&lib, &opts));
    let from_asm = asm_members(&render_assembly(&lib, &opts), "dm", "DemoIFace");

    assert_eq!(from_header, from_asm, "slot sequences must be identical");
    assert_eq!(
        from_header,
        vec![
            Member::Method("Open".to_string()),
            Member::Private(1),
            Member::Unimplemented("Legacy".to_string()),
            Member::Private(2),
            Member::Method("Close".to_string()),
        ]
    );
}

#[test]
fn formats_agree_with_suppression_off() {
    let lib = mixed_library();
    let opts = GenOptions {
        suppress_private: false,
    };

    let from_header = header_members(&render_structure(&lib, &opts));
    let from_asm = asm_members(&render_assembly(&lib, &opts), "dm", "DemoIFace");

    assert_eq!(from_header, from_asm, "slot sequences must be identical");
    assert_eq!(
        from_header,
        vec![
            Member::Method("Open".to_string()),
            Member::Method("Hidden".to_string()),
            Member::Unimplemented("Legacy".to_string()),
            Member::Method("Covert".to_string()),
            Member::Method("Close".to_string()),
        ],
        "only unimplemented methods stay opaque without the flag"
    );
}

#[test]
fn every_method_occupies_exactly_one_slot() {
    let lib = mixed_library();
    for suppress_private in [false, true] {
        let opts = GenOptions { suppress_private };
        assert_eq!(
            header_members(&render_structure(&lib, &opts)).len(),
            lib.interfaces[0].methods.len(),
            "suppression must never change the slot count"
        );
    }
}

#[test]
fn placeholder_ordinal_counts_prior_private_methods() {
    let lib = library(vec![iface(
        "main",
        vec![
            method("A", MethodStatus::Private),
            method("B", MethodStatus::Normal),
            method("C", MethodStatus::Unimplemented),
            method("D", MethodStatus::Private),
            method("E", MethodStatus::Private),
        ],
    )]);
    let opts = GenOptions {
        suppress_private: true,
    };

    let members = header_members(&render_structure(&lib, &opts));
    assert_eq!(members[0], Member::Private(1));
    assert_eq!(members[3], Member::Private(2));
    assert_eq!(members[4], Member::Private(3));
}

#[test]
fn private_counter_restarts_per_interface() {
    let first = iface(
        "main",
        vec![
            method("A", MethodStatus::Private),
            method("B", MethodStatus::Private),
        ],
    );
    let mut second = iface("extra", vec![method("C", MethodStatus::Private)]);
    second.struct_name = "ExtraIFace".to_string();
    second.asm_prefix = "ex".to_string();

    let lib = library(vec![first, second]);
    let opts = GenOptions {
        suppress_private: true,
    };

    let listing = render_assembly(&lib, &opts);
    assert!(listing.contains("FPTR dm_Private1"));
    assert!(listing.contains("FPTR dm_Private2"));
    assert!(
        listing.contains("FPTR ex_Private1"),
        "second interface must start its own counter:\n{listing}"
    );
}
