use tracing::{debug, info, warn};

use crate::host::HidHost;
use crate::model::{BacklightMode, DeviceModel, ElementFilter};

/// What a switch run touched. Failures are host calls that returned a
/// non-success status; they never stop the run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub devices: usize,
    pub elements: usize,
    pub toggled: usize,
    pub failures: usize,
}

/// Switch the backlight of every attached keyboard listed in `models`.
///
/// Consumes `host` so the session is closed when the run ends, whatever
/// happened to the individual devices.
pub fn run<H: HidHost>(mut host: H, models: &[DeviceModel], mode: BacklightMode) -> Report {
    let mut report = Report::default();

    if let Err(ret) = host.open() {
        warn!(ret, "failed to open HID manager, continuing");
        report.failures += 1;
    }

    let leds = ElementFilter::leds();

    for model in models {
        host.set_device_matching(&model.device_filter());

        let devices = host.copy_devices();
        debug!(model = model.name, count = devices.len(), "matched devices");

        for device in &devices {
            report.devices += 1;
            if let Some(name) = host.device_name(device) {
                debug!(%name, "switching backlight");
            }

            switch_device(&mut host, device, &leds, model.backlight_element, mode, &mut report);
        }
    }

    info!(?mode, ?report, "backlight switch finished");
    report
}

fn switch_device<H: HidHost>(
    host: &mut H,
    device: &H::Device,
    leds: &ElementFilter,
    backlight_element: usize,
    mode: BacklightMode,
    report: &mut Report,
) {
    let elements = host.copy_matching_elements(device, leds);

    for (index, element) in elements.iter().enumerate() {
        report.elements += 1;

        let value = if index == backlight_element {
            match host.create_value(element, mode.value()) {
                Some(value) => {
                    report.toggled += 1;
                    value
                }
                None => {
                    warn!(index, "failed to create backlight value");
                    report.failures += 1;
                    continue;
                }
            }
        } else {
            match host.get_value(device, element) {
                Ok(current) => current,
                Err(ret) => {
                    warn!(index, ret, "failed to read LED element");
                    report.failures += 1;
                    continue;
                }
            }
        };

        if let Err(ret) = host.set_value(device, element, &value) {
            warn!(index, ret, "failed to write LED element");
            report.failures += 1;
        }
    }
}
