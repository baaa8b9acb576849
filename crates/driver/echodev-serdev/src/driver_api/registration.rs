//! Driver registration and device matching.
//!
//! Drivers describe themselves with a [`SerdevDriverEntry`]: a name, the
//! compatible string of the hardware they handle, and an attach function.
//! The embedder keeps a table of entries and calls [`match_compatible`] when
//! the transport discovers a device, mirroring firmware-table driver
//! matching.

use super::error::DriverError;

/// A registered serial-attached driver.
pub struct SerdevDriverEntry {
    /// Driver name (for logging).
    pub name: &'static str,
    /// Compatible string for matching (e.g. "brightlight,echodev").
    pub compatible: &'static str,
    /// Called when a matching device is found.
    pub attach: fn() -> Result<(), DriverError>,
}

/// Finds the first entry whose compatible string matches `compatible`.
#[must_use]
pub fn match_compatible<'a>(
    entries: &'a [SerdevDriverEntry],
    compatible: &str,
) -> Option<&'a SerdevDriverEntry> {
    entries.iter().find(|entry| entry.compatible == compatible)
}
