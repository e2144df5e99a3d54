//! Common error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("USB error: {0}")]
    Usb(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<rusb::Error> for Error {
    fn from(e: rusb::Error) -> Self {
        Error::Usb(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usb_error_conversion() {
        let err: Error = rusb::Error::Access.into();
        assert!(matches!(err, Error::Usb(_)));
        assert!(err.to_string().starts_with("USB error:"));
    }
}
