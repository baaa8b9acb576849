//! Echo device core: shared byte store, receive ingestion, and the read
//! session with its delivery watermark.
//!
//! One [`EchoDevice`] is constructed at startup and injected into both the
//! transport receive path (the sole writer) and the device-file layer (the
//! sole reader). The reference implementation kept this state in unguarded
//! globals; here every access goes through a [`SpinLock`] so a reader can
//! never observe a torn store.
//!
//! Lock order: `session` before `ring`. [`EchoDevice::ingest`] takes only
//! `ring`, so the producer can never deadlock against a reader.

pub mod ring;

use core::fmt;

use echodev_core::sync::SpinLock;

pub use ring::{ECHO_BUF_CAPACITY, EchoRing};

/// Errors reported by echo device operations.
///
/// All of these are local to the failing operation and non-fatal; the caller
/// decides whether to retry or surface them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EchoError {
    /// A receive event carried zero bytes; nothing was ingested.
    InvalidChunk,
    /// The read destination could not accept the delivery; the watermark is
    /// unchanged, so a retry attempts the same delivery again.
    CopyFault,
    /// A second session attempted to open while one is active.
    SessionBusy,
    /// A read was attempted with no session open.
    SessionClosed,
}

impl fmt::Display for EchoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChunk => f.write_str("zero-length receive chunk"),
            Self::CopyFault => f.write_str("destination rejected the copy"),
            Self::SessionBusy => f.write_str("a read session is already open"),
            Self::SessionClosed => f.write_str("no read session is open"),
        }
    }
}

/// Read-session state: closed, or open with a delivery watermark.
enum SessionState {
    Closed,
    Open {
        /// The store `size` already handed to this session's reader.
        delivered: usize,
    },
}

/// The echo device's shared state.
///
/// Construct once (it is const-constructible, so a `static` works) and hand
/// shared references to the transport client and the device-file layer.
pub struct EchoDevice {
    /// The byte store. Written by the receive path, snapshotted by readers.
    ring: SpinLock<EchoRing>,
    /// The single read session and its watermark.
    session: SpinLock<SessionState>,
}

impl Default for EchoDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl EchoDevice {
    /// Creates an empty device with no session open.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ring: SpinLock::new(EchoRing::new()),
            session: SpinLock::new(SessionState::Closed),
        }
    }

    /// Ingests one inbound chunk: records its **last** byte and discards the
    /// rest.
    ///
    /// Returns the number of bytes the transport should consider consumed,
    /// always the full chunk length: the discarded prefix is never
    /// redelivered.
    ///
    /// # Errors
    ///
    /// Returns [`EchoError::InvalidChunk`] for an empty chunk; the store is
    /// not touched.
    pub fn ingest(&self, chunk: &[u8]) -> Result<usize, EchoError> {
        let Some(&last) = chunk.last() else {
            return Err(EchoError::InvalidChunk);
        };
        self.ring.lock().write_byte(last);
        Ok(chunk.len())
    }

    /// Takes a consistent snapshot of the store: its contents and size at a
    /// single instant.
    #[must_use]
    pub fn snapshot(&self) -> ([u8; ECHO_BUF_CAPACITY], usize) {
        let ring = self.ring.lock();
        let size = ring.len();
        let mut out = [0u8; ECHO_BUF_CAPACITY];
        out[..size].copy_from_slice(ring.contents());
        (out, size)
    }

    /// Opens the read session, resetting the delivery watermark to zero so
    /// the next read sees the entire current store as new.
    ///
    /// # Errors
    ///
    /// Returns [`EchoError::SessionBusy`] if a session is already open; no
    /// state changes.
    pub fn open(&self) -> Result<(), EchoError> {
        let mut session = self.session.lock();
        if let SessionState::Open { .. } = *session {
            return Err(EchoError::SessionBusy);
        }
        *session = SessionState::Open { delivered: 0 };
        Ok(())
    }

    /// Reads the freshest accumulated content into `dest`.
    ///
    /// Delivers all bytes from slot 0 up to the current size (not just the
    /// newly arrived ones), and only when the size has changed since the
    /// last delivery. `Ok(0)` signals "no new data" for this attempt, not
    /// end of stream.
    ///
    /// # Errors
    ///
    /// - [`EchoError::SessionClosed`] if no session is open.
    /// - [`EchoError::CopyFault`] if `dest` cannot hold the delivery; the
    ///   watermark stays put so a retry re-attempts the same delivery.
    pub fn read(&self, dest: &mut [u8]) -> Result<usize, EchoError> {
        let mut session = self.session.lock();
        let delivered = match *session {
            SessionState::Open { ref mut delivered } => delivered,
            SessionState::Closed => return Err(EchoError::SessionClosed),
        };

        let ring = self.ring.lock();
        let size = ring.len();
        if size == *delivered {
            return Ok(0);
        }
        if dest.len() < size {
            return Err(EchoError::CopyFault);
        }

        dest[..size].copy_from_slice(ring.contents());
        *delivered = size;
        Ok(size)
    }

    /// Closes the read session, discarding its watermark.
    ///
    /// Idempotent; never touches the store.
    pub fn close(&self) {
        *self.session.lock() = SessionState::Closed;
    }
}
