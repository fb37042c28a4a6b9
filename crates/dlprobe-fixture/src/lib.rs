//! Native dynamic-library fixture for symbol-resolution harnesses.
//!
//! Everything this crate computes is a one-line increment or a string
//! length; the point is the export table. Each function is exported
//! either under a VC-style decorated name (the `?...@@...Z` spelling a
//! C++ compiler would emit for its declaration) or under plain C
//! linkage, so a loader can verify that it resolves both conventions,
//! distinguishes const from non-const method overloads, and calls
//! everything with the right convention.
//!
//! Built as `cdylib` + `staticlib` for external harnesses and as `rlib`
//! so in-tree tests can call the same functions directly.

pub mod nested;
pub mod object;
pub mod registry;
pub mod strlen;
pub mod symbols;

pub use nested::NestedProbeObject;
pub use object::ProbeObject;
pub use registry::{InstanceRegistry, ObjectKind, registry};

/// Free function `f_int_int`: add 1.
#[unsafe(export_name = "?f_int_int@@YAHH@Z")]
pub extern "C" fn add_one(i: i32) -> i32 {
    i.wrapping_add(1)
}
