//! The expected export surface of the fixture library.
//!
//! One entry per exported symbol. C-linkage entries carry their symbol
//! verbatim; decorated entries carry the declaration's signature, and
//! the symbol is computed from it — resolving those proves the computed
//! names match what the fixture actually exports.

use dlprobe_mangle::{CType, FuncKind, FuncSig, MangleError, MsvcMangler, ScopedName};
use serde::Serialize;

/// C-linkage exports, by symbol.
pub const NARROW_LEN_C: &str = "f_strlen_C";
pub const WIDE_LEN_C: &str = "f_wcslen_C";
pub const OBJ_NEW: &str = "dlfix_obj_new";
pub const OBJ_FREE: &str = "dlfix_obj_free";
pub const OBJ_ID: &str = "dlfix_obj_id";
pub const NS_OBJ_NEW: &str = "dlfix_ns_obj_new";
pub const NS_OBJ_FREE: &str = "dlfix_ns_obj_free";
pub const NS_OBJ_ID: &str = "dlfix_ns_obj_id";
pub const REGISTRY_STATS: &str = "dlfix_registry_stats";

/// How an entry is exported.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "snake_case", tag = "linkage")]
pub enum Linkage {
    /// Plain C linkage: the symbol is the name itself.
    C { symbol: &'static str },
    /// C++ linkage: the symbol is the decorated form of the signature.
    Decorated { sig: FuncSig },
}

/// A single expected export.
#[derive(Clone, Debug, Serialize)]
pub struct ExportEntry {
    pub label: &'static str,
    #[serde(flatten)]
    pub linkage: Linkage,
}

impl ExportEntry {
    /// The exact symbol to resolve for this entry.
    pub fn symbol(&self, mangler: &MsvcMangler) -> Result<String, MangleError> {
        match &self.linkage {
            Linkage::C { symbol } => Ok((*symbol).to_owned()),
            Linkage::Decorated { sig } => mangler.mangle(sig),
        }
    }
}

fn int_int(scope: &[&str], name: &str, kind: FuncKind) -> FuncSig {
    FuncSig {
        name: ScopedName::new(scope.iter().copied(), name),
        kind,
        params: vec![CType::Int],
        ret: CType::Int,
        charset: Default::default(),
    }
}

/// `f_int_int`: add 1.
pub fn add_one_sig() -> FuncSig {
    int_int(&[], "f_int_int", FuncKind::Free)
}

/// `C::f_int_int`: add 2.
pub fn object_add_two_sig() -> FuncSig {
    int_int(&["C"], "f_int_int", FuncKind::Static)
}

/// `my::ns::f_int_int`: add 3.
pub fn nested_add_three_sig() -> FuncSig {
    int_int(&["my", "ns"], "f_int_int", FuncKind::Free)
}

/// `my::ns::C::f_int_int`: add 4.
pub fn nested_object_add_four_sig() -> FuncSig {
    int_int(&["my", "ns", "C"], "f_int_int", FuncKind::Static)
}

/// `f_strlen`: narrow string length.
pub fn narrow_len_sig() -> FuncSig {
    FuncSig::free(
        ScopedName::simple("f_strlen"),
        vec![CType::const_ptr(CType::Char)],
        CType::Int,
    )
}

/// `f_wcslen`: wide string length.
pub fn wide_len_sig() -> FuncSig {
    FuncSig::free(
        ScopedName::simple("f_wcslen"),
        vec![CType::const_ptr(CType::WChar)],
        CType::Int,
    )
}

/// `C::g_int_int`, const or non-const overload.
pub fn object_marker_sig(is_const: bool) -> FuncSig {
    int_int(&["C"], "g_int_int", FuncKind::Instance { is_const })
}

/// `my::ns::C::g_int_int`.
pub fn nested_object_marker_sig() -> FuncSig {
    int_int(
        &["my", "ns", "C"],
        "g_int_int",
        FuncKind::Instance { is_const: false },
    )
}

/// Every export the fixture is expected to provide.
pub fn entries() -> Vec<ExportEntry> {
    let decorated = |label, sig| ExportEntry {
        label,
        linkage: Linkage::Decorated { sig },
    };
    let c_linkage = |label, symbol| ExportEntry {
        label,
        linkage: Linkage::C { symbol },
    };

    vec![
        decorated("f_int_int", add_one_sig()),
        decorated("C::f_int_int", object_add_two_sig()),
        decorated("my::ns::f_int_int", nested_add_three_sig()),
        decorated("my::ns::C::f_int_int", nested_object_add_four_sig()),
        decorated("f_strlen", narrow_len_sig()),
        c_linkage("f_strlen_C", NARROW_LEN_C),
        decorated("f_wcslen", wide_len_sig()),
        c_linkage("f_wcslen_C", WIDE_LEN_C),
        decorated("C::g_int_int", object_marker_sig(false)),
        decorated("C::g_int_int const", object_marker_sig(true)),
        decorated("my::ns::C::g_int_int", nested_object_marker_sig()),
        c_linkage("dlfix_obj_new", OBJ_NEW),
        c_linkage("dlfix_obj_free", OBJ_FREE),
        c_linkage("dlfix_obj_id", OBJ_ID),
        c_linkage("dlfix_ns_obj_new", NS_OBJ_NEW),
        c_linkage("dlfix_ns_obj_free", NS_OBJ_FREE),
        c_linkage("dlfix_ns_obj_id", NS_OBJ_ID),
        c_linkage("dlfix_registry_stats", REGISTRY_STATS),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn surface_symbols_are_unique() {
        let mangler = MsvcMangler::x64();
        let mut seen = HashSet::new();
        for entry in entries() {
            let symbol = entry.symbol(&mangler).unwrap();
            assert!(seen.insert(symbol.clone()), "duplicate symbol {symbol}");
        }
        assert_eq!(seen.len(), 18);
    }

    #[test]
    fn decorated_entries_mangle_to_their_known_spellings() {
        let mangler = MsvcMangler::x64();
        let expected = [
            ("f_int_int", "?f_int_int@@YAHH@Z"),
            ("C::f_int_int", "?f_int_int@C@@SAHH@Z"),
            ("my::ns::f_int_int", "?f_int_int@ns@my@@YAHH@Z"),
            ("my::ns::C::f_int_int", "?f_int_int@C@ns@my@@SAHH@Z"),
            ("f_strlen", "?f_strlen@@YAHPEBD@Z"),
            ("f_wcslen", "?f_wcslen@@YAHPEB_W@Z"),
            ("C::g_int_int", "?g_int_int@C@@QEAAHH@Z"),
            ("C::g_int_int const", "?g_int_int@C@@QEBAHH@Z"),
            ("my::ns::C::g_int_int", "?g_int_int@C@ns@my@@QEAAHH@Z"),
        ];
        for (label, symbol) in expected {
            let entry = entries()
                .into_iter()
                .find(|e| e.label == label)
                .unwrap_or_else(|| panic!("no entry labelled {label}"));
            assert_eq!(entry.symbol(&mangler).unwrap(), symbol);
        }
    }

    #[test]
    fn c_linkage_symbols_pass_through() {
        let mangler = MsvcMangler::x64();
        let entry = ExportEntry {
            label: "f_strlen_C",
            linkage: Linkage::C {
                symbol: NARROW_LEN_C,
            },
        };
        assert_eq!(entry.symbol(&mangler).unwrap(), "f_strlen_C");
    }
}
