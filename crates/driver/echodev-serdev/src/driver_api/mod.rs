//! Driver-model API traits and types.
//!
//! - **Metadata** -- base [`Driver`] trait and [`DriverInfo`].
//! - **Transport boundary** -- [`SerdevPort`] (what the transport offers),
//!   [`SerdevClient`] (the receive callback a driver registers), and
//!   [`SerdevDriver`] (probe/remove lifecycle).
//! - **Registration** -- [`SerdevDriverEntry`] and compatible-string
//!   matching.

pub mod driver;
pub mod error;
pub mod registration;
pub mod serdev;

// Re-export all public types at the module root for ergonomic imports.
pub use driver::{Driver, DriverInfo, DriverType};
pub use error::DriverError;
pub use registration::{SerdevDriverEntry, match_compatible};
pub use serdev::{Parity, SerdevClient, SerdevDriver, SerdevPort};
