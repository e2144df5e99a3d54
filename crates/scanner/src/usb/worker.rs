//! Metadata worker pool
//!
//! Splits the device list across a fixed number of scoped threads, each of
//! which fills its share through the shared cache. This mirrors the
//! one-lookup-per-device concurrency the cache is built for.

use std::thread;
use tracing::debug;
use usb_metadata::{DeviceDirectoryEnumerator, DeviceInfo, DeviceMetadataCache};

/// Fill manufacturer/product/serial for every device using `workers` threads
pub fn fill_devices<E: DeviceDirectoryEnumerator>(
    cache: &DeviceMetadataCache<E>,
    devices: &mut [DeviceInfo],
    workers: usize,
) {
    if devices.is_empty() {
        return;
    }

    let workers = workers.clamp(1, devices.len());
    let chunk_size = devices.len().div_ceil(workers);
    debug!(
        "Filling metadata for {} devices on {} workers",
        devices.len(),
        workers
    );

    thread::scope(|s| {
        for chunk in devices.chunks_mut(chunk_size) {
            s.spawn(move || {
                for info in chunk {
                    cache.fill_device_info(info);
                }
            });
        }
    });
}
