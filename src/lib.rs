#[cfg(target_os = "macos")]
#[macro_use(impl_TCFType)]
extern crate core_foundation;

pub mod cli;
pub mod host;
pub mod model;
pub mod switch;

#[cfg(target_os = "macos")]
pub mod hid;

use anyhow::Result;

pub use host::{HidHost, IOReturn};
pub use model::{BacklightMode, DeviceModel, MODELS};
pub use switch::Report;

/// Switch the backlight of every attached supported keyboard through the
/// IOKit HID manager.
#[cfg(target_os = "macos")]
pub fn switch_keyboard_backlight(mode: BacklightMode) -> Result<Report> {
    use anyhow::Context;

    let host = hid::IoKitHost::new().context("failed to create IOKit HID manager")?;
    Ok(switch::run(host, MODELS, mode))
}

#[cfg(not(target_os = "macos"))]
pub fn switch_keyboard_backlight(_mode: BacklightMode) -> Result<Report> {
    anyhow::bail!("the IOKit HID manager is only available on macOS")
}
