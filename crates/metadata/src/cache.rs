//! Concurrent metadata cache
//!
//! Maps path identifiers to resolved [`UsbInfo`]. The cache is monotonic:
//! entries are never evicted or refreshed, and a failed resolution leaves an
//! all-empty entry behind so the same identifier is never scanned again.
//!
//! Lock discipline for a lookup is check (read lock), reserve (write lock),
//! scan (no lock), publish (write lock). A hit never scans. Two callers that
//! miss on the same identifier at the same moment may both scan; the second
//! publish simply overwrites the first with the same data. A caller arriving
//! between reserve and publish sees the empty placeholder.

use crate::enumerator::{DeviceDirectoryEnumerator, SysfsEnumerator};
use crate::resolver::Resolver;
use crate::types::{DeviceInfo, UsbInfo};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// Process-lifetime cache of USB metadata keyed by path identifier
///
/// Construct one at startup and share it (`&` or `Arc`) with every thread
/// that enumerates devices.
#[derive(Debug)]
pub struct DeviceMetadataCache<E = SysfsEnumerator> {
    entries: RwLock<HashMap<String, UsbInfo>>,
    resolver: Resolver<E>,
}

impl DeviceMetadataCache<SysfsEnumerator> {
    /// Cache backed by `/sys/bus/usb/devices`
    pub fn sysfs() -> Self {
        Self::new(Resolver::default())
    }
}

impl Default for DeviceMetadataCache<SysfsEnumerator> {
    fn default() -> Self {
        Self::sysfs()
    }
}

impl<E: DeviceDirectoryEnumerator> DeviceMetadataCache<E> {
    pub fn new(resolver: Resolver<E>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            resolver,
        }
    }

    pub fn resolver(&self) -> &Resolver<E> {
        &self.resolver
    }

    /// Fill the manufacturer/product/serial fields of `info` in place
    ///
    /// Fields are overwritten even when nothing could be resolved.
    pub fn fill_device_info(&self, info: &mut DeviceInfo) {
        let resolved = self.get(&info.path);
        info.apply(&resolved);
    }

    /// Return the cached entry for `path`, resolving it on first use
    pub fn get(&self, path: &str) -> UsbInfo {
        if let Some(cached) = self.lookup(path) {
            return cached;
        }

        debug!("Reading bus/dev from path: {}", path);
        self.reserve(path);
        let resolved = self.resolver.resolve(path);
        self.publish(path, resolved.clone());
        resolved
    }

    /// Cached entry for `path`, without resolving
    ///
    /// `Some` with an empty entry means a resolution failed or is in flight.
    pub fn lookup(&self, path: &str) -> Option<UsbInfo> {
        self.read().get(path).cloned()
    }

    /// Insert (or overwrite) an empty placeholder for `path`
    pub fn reserve(&self, path: &str) {
        self.write().insert(path.to_string(), UsbInfo::default());
    }

    /// Store the final entry for `path`
    pub fn publish(&self, path: &str, info: UsbInfo) {
        self.write().insert(path.to_string(), info);
    }

    /// Number of cached identifiers, placeholders included
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panic while holding the lock can only interrupt a single insert, which
    // leaves the map consistent, so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, UsbInfo>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, UsbInfo>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}
