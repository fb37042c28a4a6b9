//! Loads a fixture library and verifies its export contract.
//!
//! Verification is two passes over the surface: a resolution pass that
//! looks up every expected symbol, then semantic passes that call the
//! exports and check the observable behavior (increment deltas, string
//! lengths in both linkage conventions, const-overload separation,
//! lifecycle bookkeeping). Failures are collected into a
//! [`CheckReport`] instead of aborting at the first mismatch.

use libloading::{Library, Symbol};
use std::ffi::{CStr, c_char, c_void};
use std::path::Path;
use tracing::debug;

use dlprobe_mangle::MsvcMangler;

use crate::errors::HarnessError;
use crate::surface;

type AddFn = unsafe extern "C" fn(i32) -> i32;
type NarrowLenFn = unsafe extern "C" fn(*const c_char) -> i32;
type WideLenFn = unsafe extern "C" fn(*const u16) -> i32;
type NewObjFn = unsafe extern "C" fn() -> *mut c_void;
type FreeObjFn = unsafe extern "C" fn(*mut c_void);
type ObjIdFn = unsafe extern "C" fn(*const c_void) -> i32;
type MarkerFn = unsafe extern "C" fn(*mut c_void, i32) -> i32;
type StatsFn = unsafe extern "C" fn(*mut u64, *mut u64, *mut u64);

/// Outcome of a single check.
#[derive(Clone, Debug)]
pub struct CheckResult {
    /// The symbol or property the check is about.
    pub subject: String,
    pub passed: bool,
    pub detail: String,
}

/// Collected results of a verification run.
#[derive(Debug, Default)]
pub struct CheckReport {
    checks: Vec<CheckResult>,
}

impl CheckReport {
    pub fn checks(&self) -> &[CheckResult] {
        &self.checks
    }

    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| !c.passed)
    }

    fn push(&mut self, subject: impl Into<String>, passed: bool, detail: impl Into<String>) {
        self.checks.push(CheckResult {
            subject: subject.into(),
            passed,
            detail: detail.into(),
        });
    }
}

/// Open `library_path` and verify every expected export.
///
/// Returns `Err` only when the library itself cannot be opened (or a
/// surface signature cannot be mangled); per-symbol problems land in
/// the report.
pub fn verify(library_path: &Path) -> Result<CheckReport, HarnessError> {
    let mangler = MsvcMangler::x64();
    let lib = unsafe { Library::new(library_path) }.map_err(|source| HarnessError::Open {
        path: library_path.to_path_buf(),
        source,
    })?;

    let mut report = CheckReport::default();

    check_resolution(&lib, &mangler, &mut report)?;
    check_increments(&lib, &mangler, &mut report)?;
    check_string_lengths(&lib, &mangler, &mut report)?;
    check_objects(&lib, &mangler, &mut report)?;

    Ok(report)
}

/// Look up a symbol by its exact exported name.
fn resolve<'lib, T>(lib: &'lib Library, symbol: &str) -> Result<Symbol<'lib, T>, HarnessError> {
    let mut name = Vec::with_capacity(symbol.len() + 1);
    name.extend_from_slice(symbol.as_bytes());
    name.push(0);
    let resolved = unsafe { lib.get(&name) }.map_err(|source| HarnessError::Resolve {
        symbol: symbol.to_owned(),
        source,
    })?;
    debug!(symbol, "resolved");
    Ok(resolved)
}

fn check_resolution(
    lib: &Library,
    mangler: &MsvcMangler,
    report: &mut CheckReport,
) -> Result<(), HarnessError> {
    for entry in surface::entries() {
        let symbol = entry.symbol(mangler)?;
        let found = resolve::<*mut c_void>(lib, &symbol).is_ok();
        report.push(symbol, found, format!("export of {}", entry.label));
    }
    Ok(())
}

fn check_increments(
    lib: &Library,
    mangler: &MsvcMangler,
    report: &mut CheckReport,
) -> Result<(), HarnessError> {
    let increments = [
        (mangler.mangle(&surface::add_one_sig())?, 1),
        (mangler.mangle(&surface::object_add_two_sig())?, 2),
        (mangler.mangle(&surface::nested_add_three_sig())?, 3),
        (mangler.mangle(&surface::nested_object_add_four_sig())?, 4),
    ];

    for (symbol, delta) in increments {
        let Ok(f) = resolve::<AddFn>(lib, &symbol) else {
            report.push(symbol, false, format!("adds {delta} (unresolved)"));
            continue;
        };
        let passed = [0, 41, -5]
            .into_iter()
            .all(|i| unsafe { f(i) } == i + delta);
        report.push(symbol, passed, format!("adds {delta}"));
    }
    Ok(())
}

fn check_string_lengths(
    lib: &Library,
    mangler: &MsvcMangler,
    report: &mut CheckReport,
) -> Result<(), HarnessError> {
    let sample: &CStr = c"dynamic symbols";
    let empty: &CStr = c"";

    let narrow = [
        mangler.mangle(&surface::narrow_len_sig())?,
        surface::NARROW_LEN_C.to_owned(),
    ];
    for symbol in narrow {
        let Ok(f) = resolve::<NarrowLenFn>(lib, &symbol) else {
            report.push(symbol, false, "narrow length (unresolved)");
            continue;
        };
        let passed =
            unsafe { f(sample.as_ptr()) } == 15 && unsafe { f(empty.as_ptr()) } == 0;
        report.push(symbol, passed, "narrow length, incl. empty string");
    }

    let mut wide_sample: Vec<u16> = "wide probe".encode_utf16().collect();
    wide_sample.push(0);
    let wide_empty: [u16; 1] = [0];

    let wide = [
        mangler.mangle(&surface::wide_len_sig())?,
        surface::WIDE_LEN_C.to_owned(),
    ];
    for symbol in wide {
        let Ok(f) = resolve::<WideLenFn>(lib, &symbol) else {
            report.push(symbol, false, "wide length (unresolved)");
            continue;
        };
        let passed = unsafe { f(wide_sample.as_ptr()) } == 10
            && unsafe { f(wide_empty.as_ptr()) } == 0;
        report.push(symbol, passed, "wide length, incl. empty string");
    }
    Ok(())
}

fn check_objects(
    lib: &Library,
    mangler: &MsvcMangler,
    report: &mut CheckReport,
) -> Result<(), HarnessError> {
    let marker_symbol = mangler.mangle(&surface::object_marker_sig(false))?;
    let marker_const_symbol = mangler.mangle(&surface::object_marker_sig(true))?;
    let ns_marker_symbol = mangler.mangle(&surface::nested_object_marker_sig())?;

    let resolved = (
        resolve::<NewObjFn>(lib, surface::OBJ_NEW),
        resolve::<FreeObjFn>(lib, surface::OBJ_FREE),
        resolve::<ObjIdFn>(lib, surface::OBJ_ID),
        resolve::<MarkerFn>(lib, &marker_symbol),
        resolve::<MarkerFn>(lib, &marker_const_symbol),
        resolve::<NewObjFn>(lib, surface::NS_OBJ_NEW),
        resolve::<FreeObjFn>(lib, surface::NS_OBJ_FREE),
        resolve::<ObjIdFn>(lib, surface::NS_OBJ_ID),
        resolve::<MarkerFn>(lib, &ns_marker_symbol),
        resolve::<StatsFn>(lib, surface::REGISTRY_STATS),
    );
    let (
        Ok(obj_new),
        Ok(obj_free),
        Ok(obj_id),
        Ok(marker),
        Ok(marker_const),
        Ok(ns_new),
        Ok(ns_free),
        Ok(ns_id),
        Ok(ns_marker),
        Ok(stats),
    ) = resolved
    else {
        report.push("object exports", false, "not all object symbols resolved");
        return Ok(());
    };

    let mut before = (0u64, 0u64, 0u64);
    unsafe { stats(&mut before.0, &mut before.1, &mut before.2) };

    unsafe {
        let obj = obj_new();
        report.push(surface::OBJ_NEW, !obj.is_null(), "returns an instance");

        let id = obj_id(obj);
        report.push(surface::OBJ_ID, id > 0, "issues a positive id");

        let plain = marker(obj, 0);
        let constant = marker_const(obj, 0);
        report.push(marker_symbol.as_str(), plain == id + 100, "id + 100");
        report.push(marker_const_symbol.as_str(), constant == id + 101, "id + 101");
        report.push(
            "const overload separation",
            constant - plain == 1,
            "const and non-const overloads differ by exactly 1",
        );
        obj_free(obj);

        let ns_obj = ns_new();
        let ns = ns_id(ns_obj);
        report.push(surface::NS_OBJ_ID, ns > id, "ids are unique across types");
        report.push(
            ns_marker_symbol.as_str(),
            ns_marker(ns_obj, 0) == ns + 200,
            "id + 200",
        );
        ns_free(ns_obj);
    }

    let mut after = (0u64, 0u64, 0u64);
    unsafe { stats(&mut after.0, &mut after.1, &mut after.2) };
    report.push(
        surface::REGISTRY_STATS,
        after.0 - before.0 == 2 && after.1 - before.1 == 2 && after.2 >= 1,
        "counts 2 created, 2 destroyed, peak >= 1",
    );

    Ok(())
}
