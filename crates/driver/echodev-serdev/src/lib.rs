//! Serial-line echo device driver.
//!
//! Listens for byte chunks on a serial transport, records the **last** byte
//! of each chunk into a fixed-capacity store, and exposes the accumulated
//! contents to a single reader through a character-device interface with
//! deliver-once-per-change semantics.
//!
//! The crate is `no_std` outside of tests and never allocates. Wiring it up
//! takes three pieces:
//!
//! ```ignore
//! static DEVICE: EchoDevice = EchoDevice::new();
//!
//! // Transport side: probe against a port the embedder implements.
//! let driver = SerdevEcho::probe((port, &DEVICE))?;
//! // ... transport delivers chunks via driver.receive_buf(chunk) ...
//!
//! // Device-file side: bind the /dev node.
//! static NODE: DevEcho = DevEcho::new(&DEVICE);
//! ```

#![cfg_attr(not(test), no_std)]

pub mod chardev;
pub mod driver;
pub mod driver_api;
pub mod echo;

pub use chardev::{CharDevice, DevEcho, OpenFlags};
pub use driver::{BAUD_RATE, COMPATIBLE, SerdevEcho};
pub use echo::{ECHO_BUF_CAPACITY, EchoDevice, EchoError};
