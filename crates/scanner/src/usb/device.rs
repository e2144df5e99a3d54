//! USB device discovery
//!
//! Lists connected devices with rusb and turns each into a
//! [`DeviceInfo`] whose path encodes the bus number and device address.
//! String descriptors are deliberately not read here; they come from sysfs.

use rusb::{Context, UsbContext};
use tracing::{debug, warn};
use usb_metadata::{BusDevice, DeviceInfo, PathRadix};

/// Enumerate all currently connected USB devices
///
/// Devices whose descriptor can't be read are skipped with a warning.
pub fn enumerate_devices(radix: PathRadix) -> common::Result<Vec<DeviceInfo>> {
    let context = Context::new()?;
    let devices = context.devices()?;

    let mut infos = Vec::with_capacity(devices.len());
    for device in devices.iter() {
        let location = BusDevice::new(device.bus_number().into(), device.address().into());

        let descriptor = match device.device_descriptor() {
            Ok(d) => d,
            Err(e) => {
                warn!("Failed to read device descriptor for {}: {}", location, e);
                continue;
            }
        };

        infos.push(DeviceInfo::with_ids(
            location.to_path(radix),
            descriptor.vendor_id(),
            descriptor.product_id(),
        ));
    }

    debug!("Enumerated {} devices", infos.len());
    Ok(infos)
}

/// Render a device the way the listing prints it
pub fn describe_device(info: &DeviceInfo, radix: PathRadix) -> String {
    let location = BusDevice::parse(&info.path, radix)
        .map(|bd| bd.to_string())
        .unwrap_or_else(|_| format!("Path {}", info.path));

    let mut out = format!(
        "{} ID {:04x}:{:04x}\n      {} - {}",
        location,
        info.vendor_id,
        info.product_id,
        or_unknown(&info.manufacturer, "Unknown Manufacturer"),
        or_unknown(&info.product, "Unknown Product"),
    );
    if !info.serial.is_empty() {
        out.push_str(&format!("\n      Serial: {}", info.serial));
    }
    out
}

fn or_unknown<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}
