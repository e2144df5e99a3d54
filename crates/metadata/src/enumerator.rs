//! Device directory enumeration
//!
//! The resolver never touches the filesystem directly. It goes through
//! [`DeviceDirectoryEnumerator`], which models a flat directory of devices,
//! each carrying named text attributes. [`SysfsEnumerator`] is the Linux
//! implementation over `/sys/bus/usb/devices`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Standard location of the USB device hierarchy in sysfs
pub const DEFAULT_SYSFS_ROOT: &str = "/sys/bus/usb/devices";

/// Source of per-device attribute directories
pub trait DeviceDirectoryEnumerator: Send + Sync {
    /// List the identifiers of all known device directories
    fn list_devices(&self) -> io::Result<Vec<String>>;

    /// Read the raw (untrimmed) contents of one attribute of one device
    ///
    /// Invalid UTF-8 is replaced rather than rejected; firmware strings are
    /// not always well-formed.
    fn read_attribute(&self, device_id: &str, name: &str) -> io::Result<String>;

    /// Human-readable location, used in diagnostics
    fn describe(&self) -> String {
        String::from("<device directory>")
    }
}

impl<E: DeviceDirectoryEnumerator + ?Sized> DeviceDirectoryEnumerator for &E {
    fn list_devices(&self) -> io::Result<Vec<String>> {
        (**self).list_devices()
    }

    fn read_attribute(&self, device_id: &str, name: &str) -> io::Result<String> {
        (**self).read_attribute(device_id, name)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<E: DeviceDirectoryEnumerator + ?Sized> DeviceDirectoryEnumerator for Arc<E> {
    fn list_devices(&self) -> io::Result<Vec<String>> {
        (**self).list_devices()
    }

    fn read_attribute(&self, device_id: &str, name: &str) -> io::Result<String> {
        (**self).read_attribute(device_id, name)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Enumerator backed by a sysfs-style directory tree
///
/// Each entry below `root` (usually a symlink into `/sys/devices`) is one
/// device or interface. Interfaces have no `busnum`/`devnum` and are skipped
/// by the resolver.
#[derive(Debug, Clone)]
pub struct SysfsEnumerator {
    root: PathBuf,
}

impl SysfsEnumerator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for SysfsEnumerator {
    fn default() -> Self {
        Self::new(DEFAULT_SYSFS_ROOT)
    }
}

impl DeviceDirectoryEnumerator for SysfsEnumerator {
    fn list_devices(&self) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            // Non-UTF-8 names can't be sysfs device names
            if let Ok(name) = entry?.file_name().into_string() {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    fn read_attribute(&self, device_id: &str, name: &str) -> io::Result<String> {
        let bytes = fs::read(self.root.join(device_id).join(name))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
