//! End-to-end flow: transport probe, chunk ingestion, and device-file reads.

use echodev_serdev::driver_api::{
    DriverError, Parity, SerdevClient as _, SerdevDriver as _, SerdevDriverEntry, SerdevPort,
    match_compatible,
};
use echodev_serdev::{
    CharDevice as _, DevEcho, EchoDevice, OpenFlags, SerdevEcho,
};

/// A port that accepts any configuration and goes nowhere.
struct LoopbackPort;

impl SerdevPort for LoopbackPort {
    fn open(&self) -> Result<(), DriverError> {
        Ok(())
    }

    fn close(&self) {}

    fn set_baud_rate(&self, baud: u32) -> u32 {
        baud
    }

    fn set_flow_control(&self, _enabled: bool) {}

    fn set_parity(&self, _parity: Parity) -> Result<(), DriverError> {
        Ok(())
    }
}

fn leaked_device() -> &'static EchoDevice {
    Box::leak(Box::new(EchoDevice::new()))
}

#[test]
fn receive_then_read_scenario() {
    let device = leaked_device();
    let driver = SerdevEcho::probe((LoopbackPort, device)).unwrap();

    // Three chunks whose last bytes are 'a', 'b', 'c'.
    assert_eq!(driver.receive_buf(b"xa"), 2);
    assert_eq!(driver.receive_buf(b"yyb"), 3);
    assert_eq!(driver.receive_buf(b"c"), 1);

    let (content, size) = device.snapshot();
    assert_eq!(size, 3);
    assert_eq!(&content[..3], b"abc");

    // Open a session and read the accumulated contents.
    let node = DevEcho::new(device);
    node.open(OpenFlags::READ).unwrap();

    let mut buf = [0u8; 32];
    assert_eq!(node.read(&mut buf), Ok(3));
    assert_eq!(&buf[..3], b"abc");

    // Nothing new arrived: the next read is empty.
    assert_eq!(node.read(&mut buf), Ok(0));

    // One more chunk; the read delivers the whole prefix again.
    assert_eq!(driver.receive_buf(b"__d"), 3);
    assert_eq!(node.read(&mut buf), Ok(4));
    assert_eq!(&buf[..4], b"abcd");

    node.release();
    driver.remove();
}

#[test]
fn invalid_chunk_leaves_store_unchanged() {
    let device = leaked_device();
    let driver = SerdevEcho::probe((LoopbackPort, device)).unwrap();

    driver.receive_buf(b"q");
    let before = device.snapshot();

    // A zero-length receive event is dropped without mutation.
    assert_eq!(driver.receive_buf(b""), 0);
    let after = device.snapshot();
    assert_eq!(before.1, after.1);
    assert_eq!(before.0[..before.1], after.0[..after.1]);
}

#[test]
fn driver_table_matches_the_echo_device() {
    fn attach() -> Result<(), DriverError> {
        Ok(())
    }

    let table = [SerdevDriverEntry {
        name: "serdev-echo",
        compatible: echodev_serdev::COMPATIBLE,
        attach,
    }];

    let entry = match_compatible(&table, "brightlight,echodev").unwrap();
    assert_eq!(entry.name, "serdev-echo");
    assert!(match_compatible(&table, "brightlight,unknown").is_none());
}
