#![allow(non_upper_case_globals)]

pub mod manager;
pub mod device;
pub mod element;
pub mod matching;
pub mod value;

use std::io;

use tracing::trace;

pub use device::IOHIDDevice;
pub use element::IOHIDElement;
pub use manager::IOHIDManager;
pub use value::IOHIDValue;

use crate::host::{HidHost, IOReturn};
use crate::model::{DeviceFilter, ElementFilter};

/// [`HidHost`] backed by the IOKit HID manager.
#[derive(Debug)]
pub struct IoKitHost {
    manager: IOHIDManager,
}

impl IoKitHost {
    pub fn new() -> Result<Self, io::Error> {
        Ok(IoKitHost { manager: IOHIDManager::new()? })
    }
}

impl HidHost for IoKitHost {
    type Device = IOHIDDevice;
    type Element = IOHIDElement;
    type Value = IOHIDValue;

    fn open(&mut self) -> Result<(), IOReturn> {
        self.manager.open()
    }

    fn set_device_matching(&mut self, filter: &DeviceFilter) {
        self.manager.set_device_matching(filter)
    }

    fn copy_devices(&mut self) -> Vec<IOHIDDevice> {
        self.manager.copy_devices()
    }

    fn device_name(&self, device: &IOHIDDevice) -> Option<String> {
        device.get_name()
    }

    fn copy_matching_elements(&self, device: &IOHIDDevice, filter: &ElementFilter) -> Vec<IOHIDElement> {
        let elements = device.copy_matching_elements(filter);
        for (index, element) in elements.iter().enumerate() {
            trace!(index, page = element.usage_page(), usage = element.usage(), "LED element");
        }
        elements
    }

    fn get_value(&self, device: &IOHIDDevice, element: &IOHIDElement) -> Result<IOHIDValue, IOReturn> {
        let value = device.get_value(element)?;
        trace!(current = value.integer_value(), "read LED element");
        Ok(value)
    }

    fn create_value(&self, element: &IOHIDElement, integer: i64) -> Option<IOHIDValue> {
        IOHIDValue::with_integer(element, integer)
    }

    fn set_value(&mut self, device: &IOHIDDevice, element: &IOHIDElement, value: &IOHIDValue) -> Result<(), IOReturn> {
        device.set_value(element, value)
    }
}
