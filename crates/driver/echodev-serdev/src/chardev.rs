//! Character-device surface for the echo device.
//!
//! [`DevEcho`] is the `/dev` node the device-file layer binds: open starts
//! the read session, read delivers the freshest store contents, release ends
//! the session. Operations are synchronous because nothing in the echo core
//! ever waits on hardware.

use bitflags::bitflags;

use crate::echo::{EchoDevice, EchoError};

bitflags! {
    /// Flags for opening a device file.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct OpenFlags: u32 {
        /// Open for reading.
        const READ  = 0b01;
        /// Open for writing.
        const WRITE = 0b10;
    }
}

/// Synchronous character-device file operations.
pub trait CharDevice {
    /// Called when the device file is opened.
    ///
    /// # Errors
    ///
    /// Returns [`EchoError`] if the device cannot start a session.
    fn open(&self, flags: OpenFlags) -> Result<(), EchoError>;

    /// Reads device data into `buf`, returning the number of bytes written.
    ///
    /// `Ok(0)` means "no data for this attempt", not end of stream.
    ///
    /// # Errors
    ///
    /// Returns [`EchoError`] if the read cannot be served.
    fn read(&self, buf: &mut [u8]) -> Result<usize, EchoError>;

    /// Called when the last handle to the device file is closed.
    fn release(&self);
}

/// The echo device's `/dev` node.
pub struct DevEcho {
    /// The backing device state.
    device: &'static EchoDevice,
}

impl DevEcho {
    /// Creates a node backed by the given device.
    #[must_use]
    pub const fn new(device: &'static EchoDevice) -> Self {
        Self { device }
    }
}

impl CharDevice for DevEcho {
    fn open(&self, flags: OpenFlags) -> Result<(), EchoError> {
        // The device has no write path; a WRITE open still succeeds and the
        // missing write operation is reported at call time, like the
        // reference file_operations table.
        echodev_core::kdebug!("echodev: open (flags {:?})", flags);
        self.device.open()
    }

    fn read(&self, buf: &mut [u8]) -> Result<usize, EchoError> {
        echodev_core::kdebug!("echodev: read, up to {} bytes", buf.len());
        self.device.read(buf)
    }

    fn release(&self) {
        echodev_core::kdebug!("echodev: release");
        self.device.close();
    }
}
