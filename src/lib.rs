//! Harness for probing dynamic-library symbol resolution.
//!
//! The companion `dlprobe-fixture` crate builds a native library whose
//! exports are deliberately trivial — increments, string lengths,
//! id-reporting methods — under both C linkage and VC-style decorated
//! names. This crate is the consuming side: it knows the expected
//! surface ([`surface`]), computes decorated names with
//! `dlprobe-mangle`, resolves every symbol out of a built artifact, and
//! calls each export to verify the contract ([`harness::verify`]).

pub mod errors;
pub mod harness;
pub mod surface;

pub use errors::HarnessError;
pub use harness::{CheckReport, CheckResult, verify};
