//! The character sink capability.

/// Single-character output: a UART transmit routine, a display driver, ...
///
/// The engine calls [`Sink::put`] once per emitted character, in order,
/// synchronously. There is no failure channel. Every `FnMut(u8)` is a sink:
///
/// ```
/// use smallprintf_core::{Arg, format};
///
/// let mut sent = 0usize;
/// let n = format(&mut |_byte: u8| sent += 1, b"%u", &[Arg::<u16>::Unsigned(1234)]);
/// assert_eq!((n, sent), (4, 4));
/// ```
pub trait Sink {
    fn put(&mut self, byte: u8);
}

impl<F: FnMut(u8) + ?Sized> Sink for F {
    #[inline]
    fn put(&mut self, byte: u8) {
        self(byte)
    }
}

/// Owned fixed-size output buffer.
///
/// Keeps the first `N` bytes it is offered and silently drops the rest,
/// while still counting them, so the caller can detect truncation by
/// comparing [`offered`](Self::offered) with `N`.
#[derive(Debug, Clone)]
pub struct StackSink<const N: usize> {
    buf: [u8; N],
    len: usize,
    offered: usize,
}

impl<const N: usize> StackSink<N> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: [0u8; N],
            len: 0,
            offered: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes offered since the last clear, stored or not.
    #[inline]
    #[must_use]
    pub fn offered(&self) -> usize {
        self.offered
    }

    #[inline]
    #[must_use]
    pub fn truncated(&self) -> bool {
        self.offered > N
    }

    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
        self.offered = 0;
    }
}

impl<const N: usize> Default for StackSink<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Sink for StackSink<N> {
    #[inline]
    fn put(&mut self, byte: u8) {
        if self.len < N {
            self.buf[self.len] = byte;
            self.len += 1;
        }
        self.offered += 1;
    }
}
