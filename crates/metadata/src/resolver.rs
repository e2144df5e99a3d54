//! Cache-miss resolution
//!
//! Parses a path identifier, walks the device directories in listing order
//! and returns the string attributes of the first directory whose
//! `busnum`/`devnum` pair matches. Every failure degrades to an empty
//! [`UsbInfo`]; nothing is retried.

use crate::enumerator::{DeviceDirectoryEnumerator, SysfsEnumerator};
use crate::error::{ResolveError, Result};
use crate::path::{BusDevice, PathRadix};
use crate::types::UsbInfo;
use tracing::{debug, trace, warn};

/// Numeric attribute holding the bus number
pub const BUSNUM_ATTR: &str = "busnum";
/// Numeric attribute holding the device address
pub const DEVNUM_ATTR: &str = "devnum";
pub const MANUFACTURER_ATTR: &str = "manufacturer";
pub const PRODUCT_ATTR: &str = "product";
pub const SERIAL_ATTR: &str = "serial";

/// Scan-and-match resolver over a [`DeviceDirectoryEnumerator`]
#[derive(Debug, Clone)]
pub struct Resolver<E = SysfsEnumerator> {
    enumerator: E,
    radix: PathRadix,
}

impl Default for Resolver<SysfsEnumerator> {
    fn default() -> Self {
        Self::new(SysfsEnumerator::default())
    }
}

impl<E: DeviceDirectoryEnumerator> Resolver<E> {
    /// Create a resolver reading decimal path identifiers
    pub fn new(enumerator: E) -> Self {
        Self {
            enumerator,
            radix: PathRadix::default(),
        }
    }

    /// Set the radix used to parse path identifiers
    pub fn with_radix(mut self, radix: PathRadix) -> Self {
        self.radix = radix;
        self
    }

    pub fn radix(&self) -> PathRadix {
        self.radix
    }

    pub fn enumerator(&self) -> &E {
        &self.enumerator
    }

    /// Resolve a path identifier, logging and swallowing any failure
    ///
    /// Returns an all-empty entry on parse failure, listing failure, or when
    /// no device matches.
    pub fn resolve(&self, path: &str) -> UsbInfo {
        match self.try_resolve(path) {
            Ok(Some(info)) => info,
            Ok(None) => {
                debug!("No USB device in {} matches path {}", self.enumerator.describe(), path);
                UsbInfo::default()
            }
            Err(e) => {
                warn!("{}", e);
                UsbInfo::default()
            }
        }
    }

    /// Resolve a path identifier
    ///
    /// `Ok(None)` means the scan completed without a match.
    pub fn try_resolve(&self, path: &str) -> Result<Option<UsbInfo>> {
        let target = BusDevice::parse(path, self.radix)?;

        let devices = self
            .enumerator
            .list_devices()
            .map_err(|source| ResolveError::DirectoryRead {
                root: self.enumerator.describe(),
                source,
            })?;

        for device_id in &devices {
            if self.bus_device(device_id) == Some(target) {
                debug!("Path {} matched {} ({})", path, device_id, target);
                return Ok(Some(self.read_info(device_id)));
            }
        }

        Ok(None)
    }

    /// Read the `busnum`/`devnum` pair of one device directory
    ///
    /// `None` if either file is missing or not a decimal number; such
    /// directories (interfaces, hubs mid-teardown) are skipped.
    fn bus_device(&self, device_id: &str) -> Option<BusDevice> {
        let bus = self.read_number(device_id, BUSNUM_ATTR)?;
        let device = self.read_number(device_id, DEVNUM_ATTR)?;
        Some(BusDevice::new(bus, device))
    }

    fn read_number(&self, device_id: &str, name: &str) -> Option<u32> {
        let raw = self.enumerator.read_attribute(device_id, name).ok()?;
        match raw.trim().parse() {
            Ok(n) => Some(n),
            Err(e) => {
                trace!("Skipping {}: bad {} {:?}: {}", device_id, name, raw, e);
                None
            }
        }
    }

    fn read_info(&self, device_id: &str) -> UsbInfo {
        UsbInfo {
            manufacturer: self.read_string(device_id, MANUFACTURER_ATTR),
            product: self.read_string(device_id, PRODUCT_ATTR),
            serial: self.read_string(device_id, SERIAL_ATTR),
        }
    }

    fn read_string(&self, device_id: &str, name: &str) -> String {
        self.enumerator
            .read_attribute(device_id, name)
            .map(|raw| raw.trim().to_string())
            .unwrap_or_default()
    }
}
