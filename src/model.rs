/// HID usage page for generic desktop controls.
pub const PAGE_GENERIC_DESKTOP: u32 = 0x01;
/// HID usage page for LED indicators.
pub const PAGE_LEDS: u32 = 0x08;
/// Generic desktop usage for keyboards.
pub const USAGE_KEYBOARD: u32 = 0x06;

/// A keyboard model whose backlight can be switched, and the position of the
/// backlight element among the LED elements the device reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceModel {
    pub name: &'static str,
    pub vendor_id: u32,
    pub product_id: u32,
    pub backlight_element: usize,
}

pub const DEVASTATOR: DeviceModel = DeviceModel {
    name: "CM Storm Devastator",
    vendor_id: 0x258a,
    product_id: 0x0001,
    backlight_element: 2,
};

/// Every supported keyboard.
pub const MODELS: &[DeviceModel] = &[DEVASTATOR];

impl DeviceModel {
    pub fn device_filter(&self) -> DeviceFilter {
        DeviceFilter {
            vendor_id: self.vendor_id,
            product_id: self.product_id,
            usage_page: PAGE_GENERIC_DESKTOP,
            usage: USAGE_KEYBOARD,
        }
    }
}

/// Properties a device must report to be matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceFilter {
    pub vendor_id: u32,
    pub product_id: u32,
    pub usage_page: u32,
    pub usage: u32,
}

/// Properties an element must report to be matched. A missing usage matches
/// every usage on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementFilter {
    pub usage_page: u32,
    pub usage: Option<u32>,
}

impl ElementFilter {
    pub fn leds() -> Self {
        ElementFilter { usage_page: PAGE_LEDS, usage: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BacklightMode {
    On,
    Off,
}

impl BacklightMode {
    /// The integer written to the backlight element. The hardware reads 0 as
    /// lit and 1 as dark.
    pub fn value(self) -> i64 {
        match self {
            BacklightMode::On => 0,
            BacklightMode::Off => 1,
        }
    }
}
