//! Device descriptor and cached metadata types

/// Device descriptor owned by the caller
///
/// Produced by whatever enumerates devices (HID API, libusb, ...). The cache
/// only reads [`path`](Self::path) and overwrites the three string fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceInfo {
    /// Bus/device token, `"<bus>:<device>[:...]"`
    pub path: String,
    /// USB Vendor ID
    pub vendor_id: u16,
    /// USB Product ID
    pub product_id: u16,
    /// Manufacturer string (empty if unknown)
    pub manufacturer: String,
    /// Product string (empty if unknown)
    pub product: String,
    /// Serial number string (empty if unknown)
    pub serial: String,
}

impl DeviceInfo {
    /// Create a descriptor with only the path filled in
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Create a descriptor with path and vendor/product IDs
    pub fn with_ids(path: impl Into<String>, vendor_id: u16, product_id: u16) -> Self {
        Self {
            path: path.into(),
            vendor_id,
            product_id,
            ..Self::default()
        }
    }

    /// Overwrite the string fields with a resolved entry
    pub fn apply(&mut self, info: &UsbInfo) {
        self.manufacturer.clone_from(&info.manufacturer);
        self.product.clone_from(&info.product);
        self.serial.clone_from(&info.serial);
    }
}

/// Metadata resolved for one path identifier
///
/// An all-empty value doubles as the "unresolved" marker: it is what the
/// cache holds while a scan is in flight and what stays there if the scan
/// fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UsbInfo {
    pub manufacturer: String,
    pub product: String,
    pub serial: String,
}

impl UsbInfo {
    pub fn new(
        manufacturer: impl Into<String>,
        product: impl Into<String>,
        serial: impl Into<String>,
    ) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            product: product.into(),
            serial: serial.into(),
        }
    }

    /// True if no field was resolved
    pub fn is_empty(&self) -> bool {
        self.manufacturer.is_empty() && self.product.is_empty() && self.serial.is_empty()
    }
}
