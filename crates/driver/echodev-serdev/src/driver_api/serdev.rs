//! Serial transport (serdev) boundary traits.
//!
//! [`SerdevPort`] is the contract the transport layer offers a driver:
//! open/close the line and configure its parameters. [`SerdevClient`] is the
//! contract a driver offers back: a receive callback invoked once per inbound
//! chunk. [`SerdevDriver`] ties the two together with a probe/remove
//! lifecycle.
//!
//! All methods are synchronous: nothing on this boundary waits for hardware.
//! Receive callbacks run in the transport's context, concurrently with any
//! device-file activity, so client implementations must be `Sync` and use
//! internal locking.

use super::driver::Driver;
use super::error::DriverError;

/// Parity setting for a serial line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    /// No parity bit.
    None,
    /// Even parity.
    Even,
    /// Odd parity.
    Odd,
}

/// Interface the serial transport provides to an attached driver.
///
/// Methods take `&self` because port I/O is inherently shared-state;
/// implementations use internal synchronization where needed.
pub trait SerdevPort {
    /// Opens the serial line for this driver.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError`] if the line cannot be opened.
    fn open(&self) -> Result<(), DriverError>;

    /// Closes the serial line.
    fn close(&self);

    /// Requests a baud rate and returns the rate actually set.
    ///
    /// Transports may round to the nearest supported rate.
    fn set_baud_rate(&self, baud: u32) -> u32;

    /// Enables or disables hardware flow control.
    fn set_flow_control(&self, enabled: bool);

    /// Sets the parity mode of the line.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::Unsupported`] if the transport cannot provide
    /// the requested mode.
    fn set_parity(&self, parity: Parity) -> Result<(), DriverError>;
}

/// Receive-side interface a driver registers with the transport.
pub trait SerdevClient: Sync {
    /// Called once per inbound chunk with the chunk's bytes.
    ///
    /// Returns the number of bytes consumed. The transport redelivers any
    /// unconsumed suffix, so a client that discards data should still report
    /// the full chunk length.
    fn receive_buf(&self, chunk: &[u8]) -> usize;
}

/// Probe/remove lifecycle for serial-attached drivers.
///
/// The `Sized` bound enables returning `Self` from `probe()` without boxing.
/// Resources are consumed (moved) to enforce exclusive ownership at the type
/// level.
pub trait SerdevDriver: Driver + Sized {
    /// The resource bundle this driver needs to probe (typically the port
    /// plus any shared state to inject).
    type Resources;

    /// Probes the device: opens and configures the line, and returns an
    /// initialized driver.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError`] if the line cannot be opened or configured.
    fn probe(resources: Self::Resources) -> Result<Self, DriverError>;

    /// Detaches the driver, closing the line.
    fn remove(self);
}
