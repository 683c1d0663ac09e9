use core_foundation::base::{TCFType, CFRelease};
use io_kit_sys::hid::base::IOHIDElementRef;
use io_kit_sys::hid::element::*;

#[repr(C)]
#[derive(Debug)]
pub struct IOHIDElement(IOHIDElementRef);

impl_TCFType!(IOHIDElement, IOHIDElementRef, IOHIDElementGetTypeID);

impl Drop for IOHIDElement {
    fn drop(&mut self) {
        unsafe { CFRelease(self.as_CFTypeRef()) }
    }
}

impl IOHIDElement {
    pub fn usage_page(&self) -> u32 {
        unsafe { IOHIDElementGetUsagePage(self.0) }
    }

    pub fn usage(&self) -> u32 {
        unsafe { IOHIDElementGetUsage(self.0) }
    }
}
