//! Resolution error types
//!
//! None of these reach the caller of [`DeviceMetadataCache`](crate::DeviceMetadataCache):
//! they are logged and turned into an all-empty entry.

use thiserror::Error;

/// Reasons a resolution attempt produced no metadata
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Path identifier does not decompose into two integers
    #[error("Could not parse bus/dev from path '{path}': {reason}")]
    Parse { path: String, reason: String },

    /// The device directory hierarchy could not be listed
    #[error("Failed to read USB device directory {root}: {source}")]
    DirectoryRead {
        root: String,
        #[source]
        source: std::io::Error,
    },
}

/// Type alias for resolver results
pub type Result<T> = std::result::Result<T, ResolveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ResolveError::Parse {
            path: "abc".to_string(),
            reason: "expected <bus>:<device>".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Could not parse bus/dev"));
        assert!(msg.contains("abc"));

        let err = ResolveError::DirectoryRead {
            root: "/sys/bus/usb/devices".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(format!("{}", err).contains("/sys/bus/usb/devices"));
    }
}
