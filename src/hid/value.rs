use core_foundation::base::{TCFType, kCFAllocatorDefault};
use core_foundation_sys::base::{CFIndex, CFRelease, CFRetain};
use io_kit_sys::hid::base::IOHIDValueRef;
use io_kit_sys::hid::value::{IOHIDValueCreateWithIntegerValue, IOHIDValueGetIntegerValue};

use crate::hid::element::IOHIDElement;

/// An owned reference to an element value, released on drop.
#[derive(Debug)]
pub struct IOHIDValue(IOHIDValueRef);

impl Drop for IOHIDValue {
    fn drop(&mut self) {
        unsafe { CFRelease(self.0 as _) }
    }
}

impl IOHIDValue {
    pub fn with_integer(element: &IOHIDElement, integer: i64) -> Option<Self> {
        let value = unsafe {
            IOHIDValueCreateWithIntegerValue(kCFAllocatorDefault, element.as_concrete_TypeRef(), 0, integer as CFIndex)
        };
        if value.is_null() {
            return None;
        }

        Some(IOHIDValue(value))
    }

    /// Take a reference to a value the caller does not own.
    ///
    /// # Safety
    ///
    /// `value` must be a valid, non-null `IOHIDValueRef`.
    pub unsafe fn wrap_under_get_rule(value: IOHIDValueRef) -> Self {
        CFRetain(value as _);
        IOHIDValue(value)
    }

    pub fn integer_value(&self) -> i64 {
        unsafe { IOHIDValueGetIntegerValue(self.0) as i64 }
    }

    pub fn as_concrete_ref(&self) -> IOHIDValueRef {
        self.0
    }
}
