//! The namespaced half of the export surface.
//!
//! Same shape as the top-level items, but every decorated name carries
//! the enclosing scope `my::ns` — the scheme lists it innermost-first,
//! so `my::ns::f_int_int` exports as `?f_int_int@ns@my@@YAHH@Z`. A
//! loader that mishandles scope ordering resolves nothing here.

use crate::registry::{ObjectKind, registry};

/// Free function `my::ns::f_int_int`: add 3.
#[unsafe(export_name = "?f_int_int@ns@my@@YAHH@Z")]
pub extern "C" fn nested_add_three(i: i32) -> i32 {
    i.wrapping_add(3)
}

/// Heap object standing in for the nested class `my::ns::C`.
#[repr(C)]
pub struct NestedProbeObject {
    id: u32,
}

impl NestedProbeObject {
    pub fn id(&self) -> u32 {
        self.id
    }
}

/// Static member `my::ns::C::f_int_int`: add 4.
#[unsafe(export_name = "?f_int_int@C@ns@my@@SAHH@Z")]
pub extern "C" fn nested_object_add_four(i: i32) -> i32 {
    i.wrapping_add(4)
}

/// Construct a nested probe object; release with [`dlfix_ns_obj_free`].
#[unsafe(no_mangle)]
pub extern "C" fn dlfix_ns_obj_new() -> *mut NestedProbeObject {
    let id = registry().register(ObjectKind::Nested);
    Box::into_raw(Box::new(NestedProbeObject { id }))
}

/// Destroy a nested probe object. Null is a no-op.
///
/// # Safety
///
/// `obj` must be null or a pointer returned by [`dlfix_ns_obj_new`]
/// that has not been freed yet; it must not be used after this call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dlfix_ns_obj_free(obj: *mut NestedProbeObject) {
    if obj.is_null() {
        return;
    }
    let obj = unsafe { Box::from_raw(obj) };
    registry().unregister(obj.id);
}

/// Registry id of a nested object; 0 for null.
///
/// # Safety
///
/// `obj` must be null or a valid nested probe object pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dlfix_ns_obj_id(obj: *const NestedProbeObject) -> i32 {
    if obj.is_null() {
        return 0;
    }
    unsafe { (*obj).id as i32 }
}

/// Instance method `my::ns::C::g_int_int`: id + 200.
///
/// # Safety
///
/// `this` must be null or a valid nested probe object pointer.
#[unsafe(export_name = "?g_int_int@C@ns@my@@QEAAHH@Z")]
pub unsafe extern "C" fn nested_object_marker(this: *mut NestedProbeObject, _arg: i32) -> i32 {
    let id = if this.is_null() { 0 } else { unsafe { (*this).id } };
    (id as i32).wrapping_add(200)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn nested_increments() {
        assert_eq!(nested_add_three(39), 42);
        assert_eq!(nested_object_add_four(38), 42);
    }

    #[test]
    #[serial]
    fn nested_marker_is_offset_by_200() {
        unsafe {
            let obj = dlfix_ns_obj_new();
            let id = dlfix_ns_obj_id(obj);
            assert!(id > 0);
            assert_eq!(nested_object_marker(obj, 0), id + 200);
            dlfix_ns_obj_free(obj);
        }
    }

    #[test]
    #[serial]
    fn nested_objects_share_the_registry_id_space() {
        unsafe {
            let plain = crate::object::dlfix_obj_new();
            let nested = dlfix_ns_obj_new();
            assert_ne!(
                crate::object::dlfix_obj_id(plain),
                dlfix_ns_obj_id(nested)
            );
            assert_eq!(
                registry().kind_of(dlfix_ns_obj_id(nested) as u32),
                Some(ObjectKind::Nested)
            );
            crate::object::dlfix_obj_free(plain);
            dlfix_ns_obj_free(nested);
        }
    }

    #[test]
    fn null_nested_object_is_tolerated() {
        unsafe {
            dlfix_ns_obj_free(std::ptr::null_mut());
            assert_eq!(dlfix_ns_obj_id(std::ptr::null()), 0);
            assert_eq!(nested_object_marker(std::ptr::null_mut(), 0), 200);
        }
    }
}
