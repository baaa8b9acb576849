//! Base driver trait and metadata types.

/// The type of hardware a driver manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverType {
    /// Serial-attached device (serdev).
    Serial,
    /// Platform / system device.
    Platform,
}

/// Static metadata describing a driver.
#[derive(Debug, Clone, Copy)]
pub struct DriverInfo {
    /// Short name of the driver (e.g. "serdev-echo").
    pub name: &'static str,
    /// The type of hardware this driver manages.
    pub driver_type: DriverType,
    /// Human-readable description.
    pub description: &'static str,
}

/// Base trait that all drivers implement to provide identity and metadata.
pub trait Driver {
    /// Returns static information about this driver.
    fn info(&self) -> DriverInfo;
}
