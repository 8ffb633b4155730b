//! The scratch buffer backing string decoding.
//!
//! Escape sequences make decoded string content differ from the source
//! text, so it cannot be borrowed; the decoder assembles it here instead.
//! The buffer is a byte stack with explicit marks: a decoder records the
//! current top, pushes fragments while it scans, and either detaches
//! everything above its mark as one owned `String` (success) or rolls back
//! to the mark (failure). Storage is never shrunk; it is released when the
//! owning parse session ends.

use alloc::string::String;

/// Bytes reserved by the first push.
const INITIAL_CAPACITY: usize = 256;

/// Append-only byte stack with explicit marks.
///
/// Backed by a `String`: every fragment pushed is complete UTF-8 and every
/// mark is taken between fragments, so marks always fall on character
/// boundaries and detached content needs no revalidation.
#[derive(Debug)]
pub(crate) struct ScratchBuffer {
    buf: String,
}

impl ScratchBuffer {
    pub fn new() -> Self {
        Self { buf: String::new() }
    }

    /// Current logical top, in bytes.
    pub fn mark(&self) -> usize {
        self.buf.len()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Grows backing storage to fit `additional` more bytes: 256 bytes up
    /// front, then half again as much as we have until the request fits.
    /// Existing content is preserved across the move.
    fn reserve(&mut self, additional: usize) {
        let needed = self.buf.len() + additional;
        let mut capacity = self.buf.capacity();
        if needed <= capacity {
            return;
        }
        if capacity == 0 {
            capacity = INITIAL_CAPACITY;
        }
        while needed > capacity {
            capacity += capacity / 2;
        }
        self.buf.reserve_exact(capacity - self.buf.len());
    }

    pub fn push_str(&mut self, fragment: &str) {
        self.reserve(fragment.len());
        self.buf.push_str(fragment);
    }

    pub fn push_char(&mut self, ch: char) {
        self.reserve(ch.len_utf8());
        self.buf.push(ch);
    }

    /// Pops everything above `mark`, transferring ownership to the caller.
    ///
    /// # Panics
    ///
    /// Panics if `mark` is beyond the current top. A stale mark is a bug in
    /// the decoder, not a property of the input.
    pub fn detach_from(&mut self, mark: usize) -> String {
        assert!(mark <= self.buf.len(), "stale scratch mark");
        self.buf.split_off(mark)
    }

    /// Discards everything above `mark`.
    ///
    /// # Panics
    ///
    /// Panics if `mark` is beyond the current top.
    pub fn rollback_to(&mut self, mark: usize) {
        assert!(mark <= self.buf.len(), "stale scratch mark");
        self.buf.truncate(mark);
    }
}

#[cfg(test)]
impl ScratchBuffer {
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::ScratchBuffer;

    #[test]
    fn starts_unallocated() {
        let buf = ScratchBuffer::new();
        assert_eq!(buf.capacity(), 0);
        assert_eq!(buf.len(), 0);
    }

    #[test]
    fn first_push_reserves_initial_capacity() {
        let mut buf = ScratchBuffer::new();
        buf.push_char('a');
        assert_eq!(buf.len(), 1);
        assert!(buf.capacity() >= 256);
    }

    #[test]
    fn growth_is_geometric() {
        let mut buf = ScratchBuffer::new();
        // 300 bytes exceed the initial 256, forcing one 1.5x step to 384.
        buf.push_str(&"x".repeat(300));
        assert!(buf.capacity() >= 384);
    }

    #[test]
    fn growth_preserves_content() {
        let mut buf = ScratchBuffer::new();
        let mut expected = String::new();
        for i in 0..2000u32 {
            let ch = char::from(b'a' + (i % 26) as u8);
            buf.push_char(ch);
            expected.push(ch);
        }
        assert_eq!(buf.detach_from(0), expected);
    }

    #[test]
    fn detach_returns_only_above_the_mark() {
        let mut buf = ScratchBuffer::new();
        buf.push_str("outer");
        let mark = buf.mark();
        buf.push_str("inner");
        assert_eq!(buf.detach_from(mark), "inner");
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.detach_from(0), "outer");
    }

    #[test]
    fn rollback_discards_above_the_mark() {
        let mut buf = ScratchBuffer::new();
        buf.push_str("keep");
        let mark = buf.mark();
        buf.push_str("discard");
        buf.rollback_to(mark);
        assert_eq!(buf.len(), 4);
        assert_eq!(buf.detach_from(0), "keep");
    }

    #[test]
    fn rollback_to_current_top_is_a_no_op() {
        let mut buf = ScratchBuffer::new();
        buf.push_str("abc");
        buf.rollback_to(buf.mark());
        assert_eq!(buf.len(), 3);
    }

    #[test]
    #[should_panic(expected = "stale scratch mark")]
    fn detach_past_top_panics() {
        let mut buf = ScratchBuffer::new();
        let _ = buf.detach_from(1);
    }
}
