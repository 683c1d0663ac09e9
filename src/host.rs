use crate::model::{DeviceFilter, ElementFilter};

/// Status code reported by the host HID facility, zero on success.
pub type IOReturn = i32;

/// The host's HID management facility.
///
/// A host value is one session: it is opened with [`HidHost::open`] and
/// closed when dropped. Devices, elements and values are owned handles that
/// release their host resources when dropped.
pub trait HidHost {
    type Device;
    type Element;
    type Value;

    fn open(&mut self) -> Result<(), IOReturn>;

    fn set_device_matching(&mut self, filter: &DeviceFilter);

    /// Devices currently attached that satisfy the last matching filter.
    fn copy_devices(&mut self) -> Vec<Self::Device>;

    fn device_name(&self, device: &Self::Device) -> Option<String>;

    /// Elements of `device` matching `filter`, in host enumeration order.
    fn copy_matching_elements(&self, device: &Self::Device, filter: &ElementFilter) -> Vec<Self::Element>;

    fn get_value(&self, device: &Self::Device, element: &Self::Element) -> Result<Self::Value, IOReturn>;

    /// A fresh value for `element`, or `None` when the host cannot allocate one.
    fn create_value(&self, element: &Self::Element, integer: i64) -> Option<Self::Value>;

    fn set_value(&mut self, device: &Self::Device, element: &Self::Element, value: &Self::Value) -> Result<(), IOReturn>;
}
