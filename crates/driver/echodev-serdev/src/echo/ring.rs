//! Fixed-capacity byte store with the echo device's write policy.
//!
//! This is deliberately not a FIFO ring buffer. The store fills slots
//! `[0, capacity)` in order; once `size` reaches capacity it saturates:
//! `size` stays pinned, every later write lands in slot 0, and slots
//! `[1, capacity)` keep the bytes they held at the moment of saturation.
//! The policy reproduces the reference device byte-for-byte so existing
//! consumers observe identical contents.

/// Capacity of the echo store in bytes.
pub const ECHO_BUF_CAPACITY: usize = 255;

/// The echo device's byte store.
///
/// Invariants:
/// - while `size < ECHO_BUF_CAPACITY`, `head == size` and bytes occupy
///   `buf[0..size]` contiguously in arrival order;
/// - once `size == ECHO_BUF_CAPACITY`, `size` never changes again and
///   `head` only ever takes the values 0 and 1.
pub struct EchoRing {
    buf: [u8; ECHO_BUF_CAPACITY],
    /// Index of the next write slot.
    head: usize,
    /// Count of logically valid bytes in `buf[0..size]`.
    size: usize,
}

impl Default for EchoRing {
    fn default() -> Self {
        Self::new()
    }
}

impl EchoRing {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: [0; ECHO_BUF_CAPACITY],
            head: 0,
            size: 0,
        }
    }

    /// Writes one byte under the reference policy.
    ///
    /// While filling, `head` and `size` advance together and byte `i` lands
    /// in slot `i`. After saturation, `head` is forced back to 0 before
    /// every write, so only slot 0 changes and `size` stays pinned.
    pub fn write_byte(&mut self, byte: u8) {
        if self.size >= ECHO_BUF_CAPACITY {
            self.head = 0;
        }
        self.buf[self.head] = byte;
        // True only while not yet saturated.
        if self.size == self.head {
            self.size += 1;
        }
        self.head += 1;
    }

    /// Returns the valid contents, `buf[0..size]`.
    #[must_use]
    pub fn contents(&self) -> &[u8] {
        &self.buf[..self.size]
    }

    /// Returns the number of logically valid bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if nothing has been written yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` once `size` has reached capacity.
    #[must_use]
    pub const fn is_saturated(&self) -> bool {
        self.size >= ECHO_BUF_CAPACITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_in_order() {
        let mut ring = EchoRing::new();
        assert!(ring.is_empty());
        for i in 0..10u8 {
            ring.write_byte(b'a' + i);
        }
        assert_eq!(ring.len(), 10);
        assert_eq!(ring.contents(), b"abcdefghij");
    }

    #[test]
    fn size_pins_at_capacity() {
        let mut ring = EchoRing::new();
        for i in 0..ECHO_BUF_CAPACITY {
            ring.write_byte(i as u8);
        }
        assert!(ring.is_saturated());
        assert_eq!(ring.len(), ECHO_BUF_CAPACITY);

        for _ in 0..500 {
            ring.write_byte(0xFF);
            assert_eq!(ring.len(), ECHO_BUF_CAPACITY);
        }
    }

    #[test]
    fn saturation_overwrites_slot_zero_only() {
        let mut ring = EchoRing::new();
        for i in 0..ECHO_BUF_CAPACITY {
            ring.write_byte(i as u8);
        }
        let frozen: Vec<u8> = ring.contents()[1..].to_vec();

        ring.write_byte(b'X');
        assert_eq!(ring.contents()[0], b'X');
        assert_eq!(&ring.contents()[1..], frozen.as_slice());

        ring.write_byte(b'Y');
        assert_eq!(ring.contents()[0], b'Y');
        assert_eq!(&ring.contents()[1..], frozen.as_slice());
    }

    #[test]
    fn empty_store_has_no_contents() {
        let ring = EchoRing::new();
        assert_eq!(ring.contents(), b"");
        assert_eq!(ring.len(), 0);
        assert!(!ring.is_saturated());
    }
}
