use std::ptr;

use crate::hid::element::IOHIDElement;
use crate::hid::matching::element_matching_dictionary;
use crate::hid::value::IOHIDValue;
use crate::model::ElementFilter;

use core_foundation::array::{CFArrayGetCount, CFArrayGetValueAtIndex};
use core_foundation::base::{TCFType, CFRelease, kCFAllocatorDefault};
use core_foundation::string::{CFString, CFStringCreateWithCString, kCFStringEncodingUTF8};
use io_kit_sys::hid::base::{IOHIDDeviceRef, IOHIDValueRef, IOHIDElementRef};
use io_kit_sys::hid::device::*;
use io_kit_sys::hid::keys::{kIOHIDOptionsTypeNone, kIOHIDProductKey};
use io_kit_sys::ret::{IOReturn, kIOReturnSuccess, kIOReturnError};

#[repr(C)]
#[derive(Debug)]
pub struct IOHIDDevice(IOHIDDeviceRef);

impl_TCFType!(IOHIDDevice, IOHIDDeviceRef, IOHIDDeviceGetTypeID);

impl Drop for IOHIDDevice {
    fn drop(&mut self) {
        unsafe { CFRelease(self.as_CFTypeRef()) }
    }
}

impl IOHIDDevice {
    /// Elements matching `filter` in the order the device reports them. A
    /// device without matching elements gives an empty vector.
    pub fn copy_matching_elements(&self, filter: &ElementFilter) -> Vec<IOHIDElement> {
        let dict = element_matching_dictionary(filter);
        let elements = unsafe { IOHIDDeviceCopyMatchingElements(self.0, dict.as_concrete_TypeRef(), kIOHIDOptionsTypeNone) };

        if elements.is_null() {
            return vec![];
        }

        let count = unsafe { CFArrayGetCount(elements) };
        let entries = (0..count).map(|i| unsafe { CFArrayGetValueAtIndex(elements, i) });

        // Retained, the copied array is released below.
        let vec = leading_entries(entries)
            .map(|value| unsafe { IOHIDElement::wrap_under_get_rule(value as IOHIDElementRef) })
            .collect();

        unsafe { CFRelease(elements as _) };

        vec
    }

    pub fn get_name(&self) -> Option<String> {
        let product_key = unsafe { CFStringCreateWithCString(kCFAllocatorDefault, kIOHIDProductKey, kCFStringEncodingUTF8) };
        let property = unsafe { IOHIDDeviceGetProperty(self.0, product_key) };

        unsafe { CFRelease(product_key as _) };

        if property.is_null() {
            return None;
        }

        let name = unsafe { CFString::wrap_under_get_rule(property as _) };
        Some(name.to_string())
    }

    pub fn get_value(&self, element: &IOHIDElement) -> Result<IOHIDValue, IOReturn> {
        let mut value: IOHIDValueRef = ptr::null_mut();
        let ret = unsafe { IOHIDDeviceGetValue(self.0, element.as_concrete_TypeRef(), &mut value) };

        match ret {
            kIOReturnSuccess if value.is_null() => Err(kIOReturnError),
            // The device keeps ownership of the value it hands out.
            kIOReturnSuccess => Ok(unsafe { IOHIDValue::wrap_under_get_rule(value) }),
            _ => Err(ret),
        }
    }

    pub fn set_value(&self, element: &IOHIDElement, value: &IOHIDValue) -> Result<(), IOReturn> {
        let ret = unsafe { IOHIDDeviceSetValue(self.0, element.as_concrete_TypeRef(), value.as_concrete_ref()) };

        match ret {
            kIOReturnSuccess => Ok(()),
            _ => Err(ret),
        }
    }
}

/// Entries before the first null one. Elements are addressed by position, so
/// a gap ends the collection rather than shifting later elements down.
fn leading_entries<T>(entries: impl Iterator<Item = *const T>) -> impl Iterator<Item = *const T> {
    entries.take_while(|entry| !entry.is_null())
}
