use std::ffi::CStr;
use std::os::raw::c_char;

use core_foundation::dictionary::CFDictionary;
use core_foundation::number::CFNumber;
use core_foundation::string::CFString;
use io_kit_sys::hid::keys::{
    kIOHIDDeviceUsageKey, kIOHIDDeviceUsagePageKey, kIOHIDElementUsageKey, kIOHIDElementUsagePageKey,
    kIOHIDProductIDKey, kIOHIDVendorIDKey,
};

use crate::model::{DeviceFilter, ElementFilter};

fn pair(key: *const c_char, value: u32) -> (CFString, CFNumber) {
    let key = unsafe { CStr::from_ptr(key) };
    (CFString::from(&*key.to_string_lossy()), CFNumber::from(value as i32))
}

pub fn device_matching_dictionary(filter: &DeviceFilter) -> CFDictionary<CFString, CFNumber> {
    CFDictionary::from_CFType_pairs(&[
        pair(kIOHIDVendorIDKey, filter.vendor_id),
        pair(kIOHIDProductIDKey, filter.product_id),
        pair(kIOHIDDeviceUsagePageKey, filter.usage_page),
        pair(kIOHIDDeviceUsageKey, filter.usage),
    ])
}

pub fn element_matching_dictionary(filter: &ElementFilter) -> CFDictionary<CFString, CFNumber> {
    let mut pairs = vec![pair(kIOHIDElementUsagePageKey, filter.usage_page)];
    if let Some(usage) = filter.usage {
        pairs.push(pair(kIOHIDElementUsageKey, usage));
    }

    CFDictionary::from_CFType_pairs(&pairs)
}
