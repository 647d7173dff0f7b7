/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple forward reader over an in-memory byte slice
//!
//! Used by the PPM header and body parsers.

/// An encapsulation of a byte stream reader
///
/// This provides an interface similar to [std::io::Cursor] but
/// with the exception of returning zero instead of erroring
/// when reading past the end, callers check [`eof`](Self::eof)
/// or [`has`](Self::has) before reading.
pub struct ZByteReader<'a>
{
    stream:   &'a [u8],
    position: usize
}

impl<'a> ZByteReader<'a>
{
    /// Create a new reader positioned at the start of `buf`
    pub const fn new(buf: &'a [u8]) -> ZByteReader<'a>
    {
        ZByteReader {
            stream:   buf,
            position: 0
        }
    }
    /// Skip `num` bytes ahead, saturating at the end of the stream
    pub fn skip(&mut self, num: usize)
    {
        self.position = self.position.saturating_add(num).min(self.stream.len());
    }
    /// Return whether the underlying buffer
    /// has `num` bytes available for reading
    ///
    /// ```
    /// use steg_core::bytestream::ZByteReader;
    /// let data = [0_u8; 120];
    /// let reader = ZByteReader::new(&data);
    /// assert!(reader.has(3));
    /// assert!(!reader.has(124));
    /// ```
    #[inline]
    pub const fn has(&self, num: usize) -> bool
    {
        self.position.saturating_add(num) <= self.stream.len()
    }
    /// Whether every byte in the stream has been consumed
    #[inline]
    pub const fn eof(&self) -> bool
    {
        self.position >= self.stream.len()
    }
    /// Current read position in the stream
    #[inline]
    pub const fn get_position(&self) -> usize
    {
        self.position
    }
    /// Retrieve a byte from the underlying stream
    /// returning 0 if there are no more bytes available
    #[inline(always)]
    pub fn get_u8(&mut self) -> u8
    {
        match self.stream.get(self.position)
        {
            Some(byte) =>
            {
                self.position += 1;
                *byte
            }
            None => 0
        }
    }
    /// Look at the next byte without consuming it
    #[inline(always)]
    pub fn peek_u8(&self) -> Option<u8>
    {
        self.stream.get(self.position).copied()
    }
    /// Return every byte that has been consumed so far
    pub fn consumed(&self) -> &'a [u8]
    {
        &self.stream[..self.position]
    }
    /// Return the bytes not yet consumed and move to the end of the stream
    pub fn remaining_bytes(&mut self) -> &'a [u8]
    {
        let rest = &self.stream[self.position..];
        self.position = self.stream.len();
        rest
    }
}

#[cfg(test)]
mod tests
{
    use crate::bytestream::ZByteReader;

    #[test]
    fn reads_past_end_return_zero()
    {
        let mut reader = ZByteReader::new(b"P6");

        assert_eq!(reader.get_u8(), b'P');
        assert_eq!(reader.get_u8(), b'6');
        assert!(reader.eof());
        assert_eq!(reader.get_u8(), 0);
        assert_eq!(reader.get_position(), 2);
    }

    #[test]
    fn consumed_and_remaining_split_at_position()
    {
        let mut reader = ZByteReader::new(b"P3\n2 1\n");
        reader.skip(3);
        assert_eq!(reader.consumed(), b"P3\n");
        assert_eq!(reader.peek_u8(), Some(b'2'));

        reader.skip(100);
        assert!(reader.eof());
        assert!(!reader.has(1));
    }

    #[test]
    fn remaining_bytes_moves_to_the_end()
    {
        let mut reader = ZByteReader::new(b"P6\n\x01\x02");
        reader.skip(3);

        assert_eq!(reader.remaining_bytes(), b"\x01\x02");
        assert!(reader.eof());
        assert_eq!(reader.consumed().len(), 5);
    }
}
