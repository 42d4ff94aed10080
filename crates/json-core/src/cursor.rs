//! Caller-supplied character source for the parser.
//!
//! The parser never touches input storage directly; it reads through the
//! [`Cursor`] trait, so callers with non-contiguous input (a socket buffer,
//! a rope) can feed it without copying into a slice first. [`SliceCursor`]
//! covers the common in-memory case.

/// A forward-only byte source with single-byte pushback.
pub trait Cursor {
    /// Look at the next byte without consuming it.
    fn peek(&mut self) -> Option<u8>;

    /// Consume and return the next byte.
    fn take(&mut self) -> Option<u8>;

    /// Step back over the byte most recently returned by [`Cursor::take`].
    /// Only ever called directly after a successful `take`.
    fn unget(&mut self);

    /// True once the input is exhausted.
    fn at_end(&mut self) -> bool {
        self.peek().is_none()
    }
}

/// [`Cursor`] over an in-memory byte slice.
#[derive(Debug)]
pub struct SliceCursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> SliceCursor<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        SliceCursor { input, pos: 0 }
    }
}

impl Cursor for SliceCursor<'_> {
    fn peek(&mut self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn take(&mut self) -> Option<u8> {
        let byte = self.input.get(self.pos).copied();
        if byte.is_some() {
            self.pos += 1;
        }
        byte
    }

    fn unget(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }
}
