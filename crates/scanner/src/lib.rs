//! usb-metadata scanner
//!
//! Enumerates connected USB devices with libusb and fills their
//! manufacturer/product/serial strings from sysfs through a shared
//! [`usb_metadata::DeviceMetadataCache`].

pub mod config;
pub mod usb;
