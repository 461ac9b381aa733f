//! Descriptor model: the read-only view of an interface description.
//!
//! The model is immutable once loaded. Ordering is significant everywhere:
//! the position of a method within its interface determines its method-table
//! slot in every generated output.

use std::fs;
use std::path::Path;

use crate::error::DescriptorError;
use crate::xml::{self, Element};

/// Method visibility/implementation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MethodStatus {
    #[default]
    Normal,
    Private,
    Unimplemented,
}

impl MethodStatus {
    /// Anything other than the two recognized markers reads as Normal.
    fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("private") => MethodStatus::Private,
            Some("unimplemented") => MethodStatus::Unimplemented,
            _ => MethodStatus::Normal,
        }
    }
}

/// Method lifecycle marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Normal,
    Deprecated,
}

impl Lifecycle {
    fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("deprecated") => Lifecycle::Deprecated,
            _ => Lifecycle::Normal,
        }
    }
}

/// A typed method argument. The type string may embed a `(*)` marker for
/// function-pointer arguments; see [`crate::argtype`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: String,
    pub ty: String,
}

/// Trailing variadic marker. Only its presence affects generated code; the
/// name and type are carried through from the descriptor unused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vararg {
    pub name: String,
    pub ty: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    pub result: String,
    pub status: MethodStatus,
    pub lifecycle: Lifecycle,
    pub args: Vec<Argument>,
    pub vararg: Option<Vararg>,
}

/// One interface of the library: a named, ordered method table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    pub name: String,
    /// C structure type name, e.g. `DemoIFace`.
    pub struct_name: String,
    /// Name of the global interface pointer the call macros dispatch through.
    pub global_name: String,
    /// Symbol prefix for the assembler structure members.
    pub asm_prefix: String,
    pub methods: Vec<Method>,
}

/// The library root of a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Library {
    /// Identifier used for file names and include guards.
    pub name: String,
    pub copyright: Option<String>,
    /// Extra `#include` names emitted after the fixed include block.
    pub includes: Vec<String>,
    pub interfaces: Vec<Interface>,
}

impl Library {
    /// Load and validate a descriptor file.
    ///
    /// Any failure here is fatal before any generator runs, so a bad
    /// descriptor never produces an output file.
    pub fn load(path: &Path) -> Result<Self, DescriptorError> {
        let text = fs::read_to_string(path).map_err(|source| DescriptorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let root = xml::parse_document(&text)?;
        Self::from_element(&root)
    }

    /// Map a parsed element tree into the model.
    pub fn from_element(root: &Element) -> Result<Self, DescriptorError> {
        if root.name != "library" {
            return Err(DescriptorError::UnexpectedRoot(root.name.clone()));
        }

        Ok(Library {
            name: require_attr(root, "library", "name")?,
            copyright: root
                .child("copyright")
                .map(|element| element.text.trim().to_string()),
            includes: root
                .children_named("include")
                .map(|element| element.text.trim().to_string())
                .collect(),
            interfaces: root
                .children_named("interface")
                .map(Interface::from_element)
                .collect::<Result<_, _>>()?,
        })
    }
}

impl Interface {
    fn from_element(element: &Element) -> Result<Self, DescriptorError> {
        Ok(Interface {
            name: require_attr(element, "interface", "name")?,
            struct_name: require_attr(element, "interface", "struct")?,
            global_name: require_attr(element, "interface", "global")?,
            asm_prefix: require_attr(element, "interface", "asmprefix")?,
            // Children other than <method> carry no slot, in any output.
            methods: element
                .children_named("method")
                .map(Method::from_element)
                .collect::<Result<_, _>>()?,
        })
    }
}

impl Method {
    fn from_element(element: &Element) -> Result<Self, DescriptorError> {
        Ok(Method {
            name: require_attr(element, "method", "name")?,
            result: require_attr(element, "method", "result")?,
            status: MethodStatus::from_attr(element.attr("status")),
            lifecycle: Lifecycle::from_attr(element.attr("lifecycle")),
            args: element
                .children_named("arg")
                .map(|arg| -> Result<Argument, DescriptorError> {
                    Ok(Argument {
                        name: require_attr(arg, "arg", "name")?,
                        ty: require_attr(arg, "arg", "type")?,
                    })
                })
                .collect::<Result<_, _>>()?,
            vararg: element
                .child("vararg")
                .map(|vararg| -> Result<Vararg, DescriptorError> {
                    Ok(Vararg {
                        name: require_attr(vararg, "vararg", "name")?,
                        ty: require_attr(vararg, "vararg", "type")?,
                    })
                })
                .transpose()?,
        })
    }
}

fn require_attr(
    element: &Element,
    element_name: &'static str,
    attr: &'static str,
) -> Result<String, DescriptorError> {
    element
        .attr(attr)
        .map(str::to_string)
        .ok_or(DescriptorError::MissingAttr {
            element: element_name,
            attr,
        })
}
