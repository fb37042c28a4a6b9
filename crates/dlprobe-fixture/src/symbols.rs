//! The exported symbol names, as constants.
//!
//! The `export_name` attributes elsewhere in this crate must be string
//! literals, so these constants cannot feed them; they exist for
//! consumers — harnesses and tests resolve against this list and
//! cross-check it against computed decorated names.

/// `f_int_int`, decorated.
pub const ADD_ONE: &str = "?f_int_int@@YAHH@Z";
/// `C::f_int_int` (static member), decorated.
pub const OBJECT_ADD_TWO: &str = "?f_int_int@C@@SAHH@Z";
/// `my::ns::f_int_int`, decorated.
pub const NESTED_ADD_THREE: &str = "?f_int_int@ns@my@@YAHH@Z";
/// `my::ns::C::f_int_int` (static member), decorated.
pub const NESTED_OBJECT_ADD_FOUR: &str = "?f_int_int@C@ns@my@@SAHH@Z";

/// `f_strlen`, decorated.
pub const NARROW_LEN: &str = "?f_strlen@@YAHPEBD@Z";
/// `f_strlen_C`, C linkage.
pub const NARROW_LEN_C: &str = "f_strlen_C";
/// `f_wcslen`, decorated.
pub const WIDE_LEN: &str = "?f_wcslen@@YAHPEB_W@Z";
/// `f_wcslen_C`, C linkage.
pub const WIDE_LEN_C: &str = "f_wcslen_C";

/// `C::g_int_int` (non-const), decorated.
pub const OBJECT_MARKER: &str = "?g_int_int@C@@QEAAHH@Z";
/// `C::g_int_int` (const), decorated.
pub const OBJECT_MARKER_CONST: &str = "?g_int_int@C@@QEBAHH@Z";
/// `my::ns::C::g_int_int`, decorated.
pub const NESTED_OBJECT_MARKER: &str = "?g_int_int@C@ns@my@@QEAAHH@Z";

/// Lifecycle and registry exports, C linkage.
pub const OBJ_NEW: &str = "dlfix_obj_new";
pub const OBJ_FREE: &str = "dlfix_obj_free";
pub const OBJ_ID: &str = "dlfix_obj_id";
pub const NS_OBJ_NEW: &str = "dlfix_ns_obj_new";
pub const NS_OBJ_FREE: &str = "dlfix_ns_obj_free";
pub const NS_OBJ_ID: &str = "dlfix_ns_obj_id";
pub const REGISTRY_STATS: &str = "dlfix_registry_stats";

/// Every exported name, for table-driven resolution checks.
pub const ALL: &[&str] = &[
    ADD_ONE,
    OBJECT_ADD_TWO,
    NESTED_ADD_THREE,
    NESTED_OBJECT_ADD_FOUR,
    NARROW_LEN,
    NARROW_LEN_C,
    WIDE_LEN,
    WIDE_LEN_C,
    OBJECT_MARKER,
    OBJECT_MARKER_CONST,
    NESTED_OBJECT_MARKER,
    OBJ_NEW,
    OBJ_FREE,
    OBJ_ID,
    NS_OBJ_NEW,
    NS_OBJ_FREE,
    NS_OBJ_ID,
    REGISTRY_STATS,
];
