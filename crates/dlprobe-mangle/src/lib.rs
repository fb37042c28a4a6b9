//! Visual C++ decorated-name construction.
//!
//! A dynamic loader that wants to bind a C++ entry point cannot ask for it
//! by source name: the compiler encodes the function's scope, member kind,
//! calling qualifiers, and signature into the exported symbol. This crate
//! builds those decorated names (the x64 scheme) so a harness can compute
//! the exact symbol string for a declaration and resolve it at load time.
//!
//! The scheme, in outline:
//!
//! ```text
//! ?name@Inner@Outer@@ <access> <return> <params> Z
//! ```
//!
//! - scope segments appear innermost-first, each prefixed with `@`;
//! - access is `Y` for a free function, `S` for a static member function,
//!   `QE` plus `A`/`B` for a non-const/const instance method;
//! - return and parameter types use single-letter codes (`H` = int,
//!   `PEBD` = `const char*`, ...), with `X` standing for an empty
//!   parameter list.

mod ctype;
mod errors;
mod mangler;
mod name;

pub use ctype::{CType, Charset};
pub use errors::{MangleError, MangleResult};
pub use mangler::{FuncKind, FuncSig, MsvcMangler};
pub use name::ScopedName;
