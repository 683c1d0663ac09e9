#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use cmstorm_backlight::host::{HidHost, IOReturn};
use cmstorm_backlight::model::{DeviceFilter, ElementFilter, DEVASTATOR, PAGE_GENERIC_DESKTOP, USAGE_KEYBOARD};

pub const MOCK_ERROR: IOReturn = 0xe000_02bc_u32 as i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Session,
    Device,
    Element,
    Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Write {
    pub device: usize,
    pub element: usize,
    pub value: i64,
    /// Built with `create_value` rather than read back from the device.
    pub fresh: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Acquire(Resource),
    Release(Resource),
    Open,
    Match(DeviceFilter),
    Read { device: usize, element: usize },
    Write(Write),
}

#[derive(Debug, Default)]
pub struct Ledger {
    pub events: Vec<Event>,
}

impl Ledger {
    pub fn acquired(&self, resource: Resource) -> usize {
        self.events.iter().filter(|e| **e == Event::Acquire(resource)).count()
    }

    pub fn released(&self, resource: Resource) -> usize {
        self.events.iter().filter(|e| **e == Event::Release(resource)).count()
    }

    pub fn is_balanced(&self) -> bool {
        [Resource::Session, Resource::Device, Resource::Element, Resource::Value]
            .iter()
            .all(|r| self.acquired(*r) == self.released(*r))
    }

    pub fn writes(&self) -> Vec<Write> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Write(w) => Some(*w),
                _ => None,
            })
            .collect()
    }

    pub fn reads(&self) -> usize {
        self.events.iter().filter(|e| matches!(e, Event::Read { .. })).count()
    }
}

/// A keyboard plugged into the mock host.
#[derive(Debug, Clone)]
pub struct MockKeyboard {
    pub name: Option<String>,
    pub vendor_id: u32,
    pub product_id: u32,
    pub usage: u32,
    pub leds: Vec<i64>,
    pub fail_get: Vec<usize>,
    pub fail_set: Vec<usize>,
    pub fail_create: bool,
}

impl MockKeyboard {
    pub fn devastator(leds: Vec<i64>) -> Self {
        MockKeyboard {
            name: Some("CM Storm Devastator".to_string()),
            vendor_id: DEVASTATOR.vendor_id,
            product_id: DEVASTATOR.product_id,
            usage: USAGE_KEYBOARD,
            leds,
            fail_get: vec![],
            fail_set: vec![],
            fail_create: false,
        }
    }

    pub fn other(leds: Vec<i64>) -> Self {
        MockKeyboard {
            name: Some("Apple Internal Keyboard".to_string()),
            vendor_id: 0x05ac,
            product_id: 0x0273,
            ..MockKeyboard::devastator(leds)
        }
    }

    fn matches(&self, filter: &DeviceFilter) -> bool {
        self.vendor_id == filter.vendor_id
            && self.product_id == filter.product_id
            && filter.usage_page == PAGE_GENERIC_DESKTOP
            && self.usage == filter.usage
    }
}

#[derive(Debug)]
struct Handle {
    resource: Resource,
    ledger: Rc<RefCell<Ledger>>,
}

impl Handle {
    fn acquire(resource: Resource, ledger: &Rc<RefCell<Ledger>>) -> Self {
        ledger.borrow_mut().events.push(Event::Acquire(resource));
        Handle { resource, ledger: Rc::clone(ledger) }
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        self.ledger.borrow_mut().events.push(Event::Release(self.resource));
    }
}

#[derive(Debug)]
pub struct MockDevice {
    id: usize,
    _handle: Handle,
}

#[derive(Debug)]
pub struct MockElement {
    device: usize,
    index: usize,
    _handle: Handle,
}

#[derive(Debug)]
pub struct MockValue {
    integer: i64,
    fresh: bool,
    _handle: Handle,
}

#[derive(Debug)]
pub struct MockHost {
    pub keyboards: Vec<MockKeyboard>,
    pub open_status: IOReturn,
    filter: Option<DeviceFilter>,
    ledger: Rc<RefCell<Ledger>>,
    _session: Handle,
}

impl MockHost {
    pub fn new(keyboards: Vec<MockKeyboard>) -> (Self, Rc<RefCell<Ledger>>) {
        let ledger = Rc::new(RefCell::new(Ledger::default()));
        let host = MockHost {
            keyboards,
            open_status: 0,
            filter: None,
            ledger: Rc::clone(&ledger),
            _session: Handle::acquire(Resource::Session, &ledger),
        };
        (host, ledger)
    }

    fn record(&self, event: Event) {
        self.ledger.borrow_mut().events.push(event);
    }
}

impl HidHost for MockHost {
    type Device = MockDevice;
    type Element = MockElement;
    type Value = MockValue;

    fn open(&mut self) -> Result<(), IOReturn> {
        self.record(Event::Open);
        match self.open_status {
            0 => Ok(()),
            ret => Err(ret),
        }
    }

    fn set_device_matching(&mut self, filter: &DeviceFilter) {
        self.record(Event::Match(*filter));
        self.filter = Some(*filter);
    }

    fn copy_devices(&mut self) -> Vec<MockDevice> {
        let filter = match self.filter {
            Some(filter) => filter,
            None => return vec![],
        };

        self.keyboards
            .iter()
            .enumerate()
            .filter(|(_, keyboard)| keyboard.matches(&filter))
            .map(|(id, _)| MockDevice { id, _handle: Handle::acquire(Resource::Device, &self.ledger) })
            .collect()
    }

    fn device_name(&self, device: &MockDevice) -> Option<String> {
        self.keyboards[device.id].name.clone()
    }

    fn copy_matching_elements(&self, device: &MockDevice, filter: &ElementFilter) -> Vec<MockElement> {
        assert_eq!(*filter, ElementFilter::leds());
        (0..self.keyboards[device.id].leds.len())
            .map(|index| MockElement { device: device.id, index, _handle: Handle::acquire(Resource::Element, &self.ledger) })
            .collect()
    }

    fn get_value(&self, device: &MockDevice, element: &MockElement) -> Result<MockValue, IOReturn> {
        self.record(Event::Read { device: device.id, element: element.index });
        let keyboard = &self.keyboards[device.id];
        if keyboard.fail_get.contains(&element.index) {
            return Err(MOCK_ERROR);
        }

        Ok(MockValue {
            integer: keyboard.leds[element.index],
            fresh: false,
            _handle: Handle::acquire(Resource::Value, &self.ledger),
        })
    }

    fn create_value(&self, element: &MockElement, integer: i64) -> Option<MockValue> {
        if self.keyboards[element.device].fail_create {
            return None;
        }

        Some(MockValue { integer, fresh: true, _handle: Handle::acquire(Resource::Value, &self.ledger) })
    }

    fn set_value(&mut self, device: &MockDevice, element: &MockElement, value: &MockValue) -> Result<(), IOReturn> {
        let keyboard = &mut self.keyboards[device.id];
        if keyboard.fail_set.contains(&element.index) {
            return Err(MOCK_ERROR);
        }

        keyboard.leds[element.index] = value.integer;
        self.record(Event::Write(Write {
            device: device.id,
            element: element.index,
            value: value.integer,
            fresh: value.fresh,
        }));
        Ok(())
    }
}
