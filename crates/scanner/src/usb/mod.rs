//! USB subsystem
//!
//! Device discovery through libusb and the worker pool that fills each
//! discovered device's strings from the sysfs metadata cache.

pub mod device;
pub mod worker;

pub use device::{describe_device, enumerate_devices};
pub use worker::fill_devices;
