//! The top-level probe object and its exported members.
//!
//! Plays the role of a class `C` exported from a C++ DLL: one static
//! member function and a const/non-const pair of instance methods whose
//! decorated names differ only in the const qualifier code. The methods
//! return a value derived from the object's registry id, so a harness
//! can tell instances apart and prove it resolved the right overload.

use crate::registry::{ObjectKind, registry};

/// Heap object whose exported methods report id-derived values.
#[repr(C)]
pub struct ProbeObject {
    id: u32,
}

impl ProbeObject {
    pub fn id(&self) -> u32 {
        self.id
    }
}

/// Static member `C::f_int_int`: add 2.
#[unsafe(export_name = "?f_int_int@C@@SAHH@Z")]
pub extern "C" fn object_add_two(i: i32) -> i32 {
    i.wrapping_add(2)
}

/// Construct a probe object. The caller owns the pointer and releases
/// it with [`dlfix_obj_free`].
#[unsafe(no_mangle)]
pub extern "C" fn dlfix_obj_new() -> *mut ProbeObject {
    let id = registry().register(ObjectKind::Plain);
    Box::into_raw(Box::new(ProbeObject { id }))
}

/// Destroy a probe object. Null is a no-op.
///
/// # Safety
///
/// `obj` must be null or a pointer returned by [`dlfix_obj_new`] that
/// has not been freed yet; it must not be used after this call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dlfix_obj_free(obj: *mut ProbeObject) {
    if obj.is_null() {
        return;
    }
    let obj = unsafe { Box::from_raw(obj) };
    registry().unregister(obj.id);
}

/// Registry id of an object; 0 for null.
///
/// # Safety
///
/// `obj` must be null or a valid probe object pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dlfix_obj_id(obj: *const ProbeObject) -> i32 {
    if obj.is_null() {
        return 0;
    }
    unsafe { (*obj).id as i32 }
}

/// Instance method `C::g_int_int` (non-const `this`): id + 100.
///
/// The integer argument is part of the exported signature but unused,
/// as is the convention for this surface.
///
/// # Safety
///
/// `this` must be null or a valid probe object pointer.
#[unsafe(export_name = "?g_int_int@C@@QEAAHH@Z")]
pub unsafe extern "C" fn object_marker(this: *mut ProbeObject, _arg: i32) -> i32 {
    let id = if this.is_null() { 0 } else { unsafe { (*this).id } };
    (id as i32).wrapping_add(100)
}

/// Instance method `C::g_int_int` (const `this`): id + 101.
///
/// # Safety
///
/// `this` must be null or a valid probe object pointer.
#[unsafe(export_name = "?g_int_int@C@@QEBAHH@Z")]
pub unsafe extern "C" fn object_marker_const(this: *const ProbeObject, _arg: i32) -> i32 {
    let id = if this.is_null() { 0 } else { unsafe { (*this).id } };
    (id as i32).wrapping_add(101)
}
