//! Path identifier parsing
//!
//! A path identifier is a colon-separated token whose first two segments are
//! the bus number and the device address, e.g. `"3:7"`. Anything after the
//! second segment (hidapi appends the interface number) is ignored.

use crate::error::{ResolveError, Result};
use std::fmt;

/// Numeric base of the bus/device segments in a path identifier
///
/// hidapi's libusb backend writes paths as `"%04x:%04x:%02x"`, so callers fed
/// by it need [`PathRadix::Hex`]. Sysfs `busnum`/`devnum` files are always
/// decimal regardless of this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathRadix {
    #[default]
    Decimal,
    Hex,
}

impl PathRadix {
    /// Map a numeric base (10 or 16) to a radix
    pub fn from_base(base: u32) -> Option<Self> {
        match base {
            10 => Some(Self::Decimal),
            16 => Some(Self::Hex),
            _ => None,
        }
    }

    pub fn base(self) -> u32 {
        match self {
            Self::Decimal => 10,
            Self::Hex => 16,
        }
    }
}

/// Bus number and device address pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BusDevice {
    pub bus: u32,
    pub device: u32,
}

impl BusDevice {
    pub fn new(bus: u32, device: u32) -> Self {
        Self { bus, device }
    }

    /// Parse the first two segments of a path identifier
    pub fn parse(path: &str, radix: PathRadix) -> Result<Self> {
        let mut segments = path.split(':');
        let (Some(bus), Some(device)) = (segments.next(), segments.next()) else {
            return Err(ResolveError::Parse {
                path: path.to_string(),
                reason: "expected <bus>:<device>".to_string(),
            });
        };

        Ok(Self {
            bus: parse_segment(path, bus, "bus", radix)?,
            device: parse_segment(path, device, "device", radix)?,
        })
    }

    /// Format as a path identifier in the given radix
    pub fn to_path(self, radix: PathRadix) -> String {
        match radix {
            PathRadix::Decimal => format!("{}:{}", self.bus, self.device),
            PathRadix::Hex => format!("{:04x}:{:04x}", self.bus, self.device),
        }
    }
}

impl fmt::Display for BusDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bus {:03} Device {:03}", self.bus, self.device)
    }
}

fn parse_segment(path: &str, segment: &str, name: &str, radix: PathRadix) -> Result<u32> {
    u32::from_str_radix(segment, radix.base()).map_err(|e| ResolveError::Parse {
        path: path.to_string(),
        reason: format!("invalid {} number '{}': {}", name, segment, e),
    })
}
