//! USB device metadata from sysfs
//!
//! Resolves the manufacturer, product and serial strings of a connected USB
//! device by reading the kernel's sysfs view of the bus
//! (`/sys/bus/usb/devices`) instead of asking the device for its string
//! descriptors. Some kernel/HID stack combinations return empty strings from
//! the device API, while sysfs keeps exposing them.
//!
//! The crate is organized into:
//! - [`types`]: the caller-owned [`DeviceInfo`] and the cached [`UsbInfo`]
//! - [`path`]: parsing of `"<bus>:<device>"` path identifiers
//! - [`enumerator`]: the filesystem seam ([`DeviceDirectoryEnumerator`])
//! - [`resolver`]: the scan-and-match procedure run on a cache miss
//! - [`cache`]: the concurrent, monotonic [`DeviceMetadataCache`]
//!
//! # Example
//!
//! ```no_run
//! use usb_metadata::{DeviceInfo, DeviceMetadataCache};
//!
//! let cache = DeviceMetadataCache::sysfs();
//! let mut info = DeviceInfo::new("3:7");
//! cache.fill_device_info(&mut info);
//! println!("{} {}", info.manufacturer, info.product);
//! ```

pub mod cache;
pub mod enumerator;
pub mod error;
pub mod path;
pub mod resolver;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod types;

pub use cache::DeviceMetadataCache;
pub use enumerator::{DEFAULT_SYSFS_ROOT, DeviceDirectoryEnumerator, SysfsEnumerator};
pub use error::{ResolveError, Result};
pub use path::{BusDevice, PathRadix};
pub use resolver::Resolver;
pub use types::{DeviceInfo, UsbInfo};
