//! usb-metadata-scan
//!
//! Lists connected USB devices with manufacturer, product and serial strings
//! read from sysfs instead of the devices' string descriptors.

use anyhow::{Context, Result};
use clap::Parser;
use common::setup_logging;
use scanner::config::ScannerConfig;
use scanner::usb::{describe_device, enumerate_devices, fill_devices};
use std::path::PathBuf;
use tracing::info;
use usb_metadata::{DeviceInfo, DeviceMetadataCache, PathRadix, Resolver, SysfsEnumerator};

#[derive(Parser, Debug)]
#[command(name = "usb-metadata-scan")]
#[command(
    author,
    version,
    about = "Resolve USB manufacturer/product/serial strings from sysfs"
)]
#[command(long_about = "
Reads USB string metadata from /sys/bus/usb/devices instead of asking the
device, for systems where the HID/libusb string descriptors come back empty.

EXAMPLES:
    # List all connected devices
    usb-metadata-scan

    # Resolve explicit bus:device identifiers
    usb-metadata-scan --path 3:7 --path 1:2

    # Resolve hidapi-style hex paths
    usb-metadata-scan --hex --path 0003:0007:00

    # Use a different sysfs tree
    usb-metadata-scan --sysfs-root /tmp/fake-sysfs

CONFIGURATION:
    The scanner looks for configuration files in the following order:
    1. Path specified with --config
    2. ~/.config/usb-metadata/config.toml
    3. /etc/usb-metadata/config.toml
    4. Built-in defaults
")]
struct Args {
    /// Path to configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Save default configuration to default location and exit
    #[arg(long)]
    save_config: bool,

    /// Resolve this bus:device identifier instead of enumerating (repeatable)
    #[arg(short, long, value_name = "ID")]
    path: Vec<String>,

    /// Path identifiers use hexadecimal numbers (hidapi libusb backend)
    #[arg(long)]
    hex: bool,

    /// Directory with one entry per USB device
    #[arg(long, value_name = "DIR")]
    sysfs_root: Option<PathBuf>,

    /// Number of worker threads
    #[arg(short, long, value_name = "N")]
    workers: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.save_config {
        let config = ScannerConfig::default();
        let path = ScannerConfig::default_path();
        config.save(&path).context("Failed to save configuration")?;
        println!("Configuration saved to: {}", path.display());
        return Ok(());
    }

    let config = if let Some(ref path) = args.config {
        ScannerConfig::load(Some(path.clone())).context("Failed to load configuration")?
    } else {
        ScannerConfig::load_or_default()
    };

    // CLI values win over config values
    let log_level = args
        .log_level
        .as_deref()
        .unwrap_or(&config.scanner.log_level);
    setup_logging(log_level).context("Failed to setup logging")?;

    let radix = if args.hex {
        PathRadix::Hex
    } else {
        config.sysfs.radix()
    };
    let root = args
        .sysfs_root
        .clone()
        .unwrap_or_else(|| config.sysfs.expanded_root());
    let workers = args.workers.unwrap_or(config.scanner.workers).max(1);

    info!("usb-metadata-scan v{}", env!("CARGO_PKG_VERSION"));
    info!("Reading USB metadata from {}", root.display());

    let cache =
        DeviceMetadataCache::new(Resolver::new(SysfsEnumerator::new(root)).with_radix(radix));

    let mut devices = if args.path.is_empty() {
        enumerate_devices(radix).context("Failed to enumerate USB devices")?
    } else {
        args.path.iter().map(DeviceInfo::new).collect()
    };

    fill_devices(&cache, &mut devices, workers);
    print_devices(&devices, radix);

    Ok(())
}

fn print_devices(devices: &[DeviceInfo], radix: PathRadix) {
    if devices.is_empty() {
        println!("No USB devices found.");
        return;
    }

    println!("Found {} USB device(s):\n", devices.len());
    for device in devices {
        println!("  {}", describe_device(device, radix));
        println!();
    }
}
