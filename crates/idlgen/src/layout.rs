//! Shared slot-layout rules for the structural generators.
//!
//! The structure header and the assembler include describe the same binary
//! method table, so a method must land at the same ordinal position in both,
//! including methods that are only visible as opaque placeholders. Both
//! generators derive their member lists from [`slot_layout`] instead of
//! counting on their own, which makes the cross-format invariant structural
//! rather than a matter of keeping two loops in sync.
//!
//! The inline macro generator has no slots at all; its per-method filter is
//! [`macro_visible`].

use crate::model::{Interface, Method, MethodStatus};

/// Lifecycle methods common to every interface that never get call macros.
pub const RESERVED_METHODS: [&str; 4] = ["Obtain", "Release", "Expunge", "Clone"];

/// One slot of an interface's method table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slot<'a> {
    /// A real method, emitted as a function-pointer member.
    Method(&'a Method),
    /// A suppressed private method, reduced to an opaque placeholder; carries
    /// the 1-based placeholder ordinal.
    Private(u32),
    /// An unimplemented method; keeps its name but occupies an opaque slot.
    Unimplemented(&'a Method),
}

/// Compute the slot layout of an interface under the given suppression flag.
///
/// Every method occupies exactly one slot, whatever its status. The private
/// placeholder counter advances only for suppressed private methods;
/// unimplemented methods never touch it. With suppression off, private
/// methods are ordinary members.
pub fn slot_layout(iface: &Interface, suppress_private: bool) -> Vec<Slot<'_>> {
    let mut slots = Vec::with_capacity(iface.methods.len());
    let mut private_num = 1;

    for method in &iface.methods {
        match method.status {
            MethodStatus::Private if suppress_private => {
                slots.push(Slot::Private(private_num));
                private_num += 1;
            }
            MethodStatus::Unimplemented => slots.push(Slot::Unimplemented(method)),
            _ => slots.push(Slot::Method(method)),
        }
    }

    slots
}

/// Whether the inline macro generator emits a call macro for this method.
///
/// Unimplemented methods and suppressed private methods are never callable,
/// and the reserved lifecycle methods are excluded by name. None of this
/// affects slot layout.
pub fn macro_visible(method: &Method, suppress_private: bool) -> bool {
    match method.status {
        MethodStatus::Unimplemented => false,
        MethodStatus::Private if suppress_private => false,
        _ => !RESERVED_METHODS.contains(&method.name.as_str()),
    }
}
