//! The serdev echo driver: probe/remove lifecycle and the receive callback.
//!
//! Probe opens the serial line and configures it (9600 baud, no flow
//! control, no parity); the receive callback funnels each chunk's last byte
//! into the shared [`EchoDevice`]. Remove closes the line.

use crate::driver_api::{
    Driver, DriverError, DriverInfo, DriverType, Parity, SerdevClient, SerdevDriver, SerdevPort,
};
use crate::echo::EchoDevice;

/// Compatible string this driver matches on.
pub const COMPATIBLE: &str = "brightlight,echodev";

/// Line speed the driver configures at probe time.
pub const BAUD_RATE: u32 = 9600;

/// The echo driver bound to a serial port.
pub struct SerdevEcho<P: SerdevPort> {
    port: P,
    device: &'static EchoDevice,
}

impl<P: SerdevPort> SerdevEcho<P> {
    /// Returns the shared device state this driver feeds.
    #[must_use]
    pub fn device(&self) -> &'static EchoDevice {
        self.device
    }
}

impl<P: SerdevPort> Driver for SerdevEcho<P> {
    fn info(&self) -> DriverInfo {
        DriverInfo {
            name: "serdev-echo",
            driver_type: DriverType::Serial,
            description: "buffers the last byte of each received serial chunk",
        }
    }
}

impl<P: SerdevPort> SerdevDriver for SerdevEcho<P> {
    type Resources = (P, &'static EchoDevice);

    fn probe((port, device): Self::Resources) -> Result<Self, DriverError> {
        port.open().map_err(|err| {
            echodev_core::kerr!("serdev-echo: error opening serial port: {err}");
            DriverError::InitFailed
        })?;

        let actual = port.set_baud_rate(BAUD_RATE);
        port.set_flow_control(false);
        port.set_parity(Parity::None)?;

        echodev_core::kinfo!("serdev-echo: probed, line at {actual} baud");
        Ok(Self { port, device })
    }

    fn remove(self) {
        echodev_core::kinfo!("serdev-echo: removed");
        self.port.close();
    }
}

impl<P: SerdevPort + Sync> SerdevClient for SerdevEcho<P> {
    fn receive_buf(&self, chunk: &[u8]) -> usize {
        match self.device.ingest(chunk) {
            Ok(consumed) => {
                echodev_core::kdebug!("serdev-echo: received {consumed} bytes");
                consumed
            }
            Err(err) => {
                echodev_core::kwarn!("serdev-echo: dropped receive event: {err}");
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use echodev_core::sync::SpinLock;

    /// Records the configuration calls a probe makes.
    struct MockPort {
        open_fails: bool,
        opened: SpinLock<bool>,
        /// Shared so tests can observe close after the port moves into the driver.
        closed: std::sync::Arc<SpinLock<bool>>,
        baud: SpinLock<Option<u32>>,
        flow_control: SpinLock<Option<bool>>,
        parity: SpinLock<Option<Parity>>,
    }

    impl Default for MockPort {
        fn default() -> Self {
            Self {
                open_fails: false,
                opened: SpinLock::new(false),
                closed: std::sync::Arc::new(SpinLock::new(false)),
                baud: SpinLock::new(None),
                flow_control: SpinLock::new(None),
                parity: SpinLock::new(None),
            }
        }
    }

    impl SerdevPort for MockPort {
        fn open(&self) -> Result<(), DriverError> {
            if self.open_fails {
                return Err(DriverError::IoError);
            }
            *self.opened.lock() = true;
            Ok(())
        }

        fn close(&self) {
            *self.closed.lock() = true;
        }

        fn set_baud_rate(&self, baud: u32) -> u32 {
            *self.baud.lock() = Some(baud);
            baud
        }

        fn set_flow_control(&self, enabled: bool) {
            *self.flow_control.lock() = Some(enabled);
        }

        fn set_parity(&self, parity: Parity) -> Result<(), DriverError> {
            *self.parity.lock() = Some(parity);
            Ok(())
        }
    }

    fn leaked_device() -> &'static EchoDevice {
        Box::leak(Box::new(EchoDevice::new()))
    }

    #[test]
    fn probe_configures_the_line() {
        let driver = SerdevEcho::probe((MockPort::default(), leaked_device())).unwrap();
        assert!(*driver.port.opened.lock());
        assert_eq!(*driver.port.baud.lock(), Some(BAUD_RATE));
        assert_eq!(*driver.port.flow_control.lock(), Some(false));
        assert_eq!(*driver.port.parity.lock(), Some(Parity::None));
    }

    #[test]
    fn probe_maps_open_failure_to_init_failed() {
        let port = MockPort {
            open_fails: true,
            ..MockPort::default()
        };
        let result = SerdevEcho::probe((port, leaked_device()));
        assert!(matches!(result, Err(DriverError::InitFailed)));
    }

    #[test]
    fn receive_consumes_full_chunk() {
        let driver = SerdevEcho::probe((MockPort::default(), leaked_device())).unwrap();
        assert_eq!(driver.receive_buf(b"AB C"), 4);
        let (content, size) = driver.device().snapshot();
        assert_eq!(size, 1);
        assert_eq!(content[0], b' ');
    }

    #[test]
    fn empty_receive_consumes_nothing() {
        let driver = SerdevEcho::probe((MockPort::default(), leaked_device())).unwrap();
        assert_eq!(driver.receive_buf(b""), 0);
        let (_, size) = driver.device().snapshot();
        assert_eq!(size, 0);
    }

    #[test]
    fn remove_closes_the_port() {
        let port = MockPort::default();
        let closed = std::sync::Arc::clone(&port.closed);
        let driver = SerdevEcho::probe((port, leaked_device())).unwrap();
        assert!(!*closed.lock());
        driver.remove();
        assert!(*closed.lock());
    }

    #[test]
    fn driver_metadata() {
        let driver = SerdevEcho::probe((MockPort::default(), leaked_device())).unwrap();
        let info = driver.info();
        assert_eq!(info.name, "serdev-echo");
        assert_eq!(info.driver_type, DriverType::Serial);
    }
}
