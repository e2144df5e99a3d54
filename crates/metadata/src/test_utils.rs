//! Test utilities for usb-metadata
//!
//! Helpers to build fake sysfs trees and to count how often the filesystem
//! is touched.
//!
//! # Example
//!
//! ```
//! use usb_metadata::test_utils::{CountingEnumerator, create_fake_device};
//! use usb_metadata::{DeviceMetadataCache, Resolver, SysfsEnumerator};
//!
//! # fn main() -> std::io::Result<()> {
//! let root = std::env::temp_dir().join(format!("usb-metadata-doctest-{}", std::process::id()));
//! create_fake_device(&root, "3-1", "3", "7", &[("manufacturer", "Acme")])?;
//!
//! let enumerator = CountingEnumerator::new(SysfsEnumerator::new(&root));
//! let cache = DeviceMetadataCache::new(Resolver::new(&enumerator));
//! assert_eq!(cache.get("3:7").manufacturer, "Acme");
//! assert_eq!(cache.get("3:7").manufacturer, "Acme");
//! assert_eq!(enumerator.list_calls(), 1);
//! # std::fs::remove_dir_all(&root)
//! # }
//! ```

use crate::enumerator::DeviceDirectoryEnumerator;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Create a device directory under `root` the way sysfs lays it out
///
/// `busnum` and `devnum` are written verbatim (plus a newline) so malformed
/// values can be tested. `attributes` are `(file name, contents)` pairs,
/// also newline-terminated.
pub fn create_fake_device(
    root: &Path,
    name: &str,
    busnum: &str,
    devnum: &str,
    attributes: &[(&str, &str)],
) -> io::Result<PathBuf> {
    let dir = root.join(name);
    fs::create_dir_all(&dir)?;
    fs::write(dir.join("busnum"), format!("{}\n", busnum))?;
    fs::write(dir.join("devnum"), format!("{}\n", devnum))?;
    for (attr, value) in attributes {
        write_attribute(root, name, attr, value)?;
    }
    Ok(dir)
}

/// Write (or overwrite) a single attribute file of a fake device
pub fn write_attribute(root: &Path, name: &str, attr: &str, value: &str) -> io::Result<()> {
    fs::write(root.join(name).join(attr), format!("{}\n", value))
}

/// Enumerator wrapper counting every filesystem access
#[derive(Debug, Default)]
pub struct CountingEnumerator<E> {
    inner: E,
    list_calls: AtomicUsize,
    read_calls: AtomicUsize,
}

impl<E: DeviceDirectoryEnumerator> CountingEnumerator<E> {
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            list_calls: AtomicUsize::new(0),
            read_calls: AtomicUsize::new(0),
        }
    }

    /// Number of `list_devices` calls so far
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Number of `read_attribute` calls so far
    pub fn read_calls(&self) -> usize {
        self.read_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.list_calls() + self.read_calls()
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<E: DeviceDirectoryEnumerator> DeviceDirectoryEnumerator for CountingEnumerator<E> {
    fn list_devices(&self) -> io::Result<Vec<String>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.list_devices()
    }

    fn read_attribute(&self, device_id: &str, name: &str) -> io::Result<String> {
        self.read_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.read_attribute(device_id, name)
    }

    fn describe(&self) -> String {
        self.inner.describe()
    }
}
