//! Driver lifecycle error types.

use core::fmt;

/// Errors that can occur while probing, attaching, or removing a driver.
///
/// Per-operation faults on the echo device itself are reported separately
/// as [`EchoError`](crate::echo::EchoError).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverError {
    /// No device matched, or the device did not respond.
    DeviceNotFound,
    /// Opening or configuring the transport failed during probe.
    InitFailed,
    /// The transport does not support the requested setting.
    Unsupported,
    /// An I/O error occurred on the transport.
    IoError,
    /// The driver is not in a valid state for this operation.
    InvalidState,
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeviceNotFound => f.write_str("device not found"),
            Self::InitFailed => f.write_str("driver initialization failed"),
            Self::Unsupported => f.write_str("operation not supported"),
            Self::IoError => f.write_str("I/O error"),
            Self::InvalidState => f.write_str("invalid driver state"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_all_variants() {
        assert_eq!(format!("{}", DriverError::DeviceNotFound), "device not found");
        assert_eq!(
            format!("{}", DriverError::InitFailed),
            "driver initialization failed"
        );
        assert_eq!(format!("{}", DriverError::Unsupported), "operation not supported");
        assert_eq!(format!("{}", DriverError::IoError), "I/O error");
        assert_eq!(format!("{}", DriverError::InvalidState), "invalid driver state");
    }

    #[test]
    fn error_equality() {
        assert_eq!(DriverError::InitFailed, DriverError::InitFailed);
        assert_ne!(DriverError::InitFailed, DriverError::IoError);
    }
}
