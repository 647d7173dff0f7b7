/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixel storage shared by the parser, the serializer and the codec
//!
//! Pixels are stored row-major as RGB triples, eight bits per channel.
//! [`Rgb`] is a `#[repr(C)]` struct of three bytes so a slice of pixels
//! can be viewed as interleaved channels `R,G,B,R,G,B..` without copying.

use core::ops::{Index, IndexMut};

use bytemuck::{Pod, Zeroable};

/// Number of color channels in a pixel
pub const CHANNELS: usize = 3;

/// A single RGB pixel
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb
{
    pub r: u8,
    pub g: u8,
    pub b: u8
}

impl Rgb
{
    pub const fn new(r: u8, g: u8, b: u8) -> Rgb
    {
        Rgb { r, g, b }
    }
}

/// An ordered sequence of pixels owned by exactly one image
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PixelBuffer
{
    pixels: Vec<Rgb>
}

impl PixelBuffer
{
    pub fn new() -> PixelBuffer
    {
        PixelBuffer { pixels: Vec::new() }
    }
    pub fn with_capacity(capacity: usize) -> PixelBuffer
    {
        PixelBuffer {
            pixels: Vec::with_capacity(capacity)
        }
    }
    /// Create a buffer of `len` pixels all set to `pixel`
    pub fn filled(pixel: Rgb, len: usize) -> PixelBuffer
    {
        PixelBuffer {
            pixels: vec![pixel; len]
        }
    }
    /// Build a buffer from interleaved `R,G,B` channels
    ///
    /// Returns `None` if the channel count is not a multiple of three
    ///
    /// ```
    /// use steg_core::pixels::{PixelBuffer, Rgb};
    /// let buffer = PixelBuffer::from_channels(&[1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(buffer[1], Rgb::new(4, 5, 6));
    /// assert!(PixelBuffer::from_channels(&[1, 2]).is_none());
    /// ```
    pub fn from_channels(channels: &[u8]) -> Option<PixelBuffer>
    {
        if channels.len() % CHANNELS != 0
        {
            return None;
        }
        Some(
            channels
                .chunks_exact(CHANNELS)
                .map(|c| Rgb::new(c[0], c[1], c[2]))
                .collect()
        )
    }
    pub fn len(&self) -> usize
    {
        self.pixels.len()
    }
    pub fn is_empty(&self) -> bool
    {
        self.pixels.is_empty()
    }
    pub fn push(&mut self, pixel: Rgb)
    {
        self.pixels.push(pixel);
    }
    pub fn iter(&self) -> core::slice::Iter<'_, Rgb>
    {
        self.pixels.iter()
    }
    pub fn as_slice(&self) -> &[Rgb]
    {
        &self.pixels
    }
    /// View the pixels as interleaved channels, three per pixel
    pub fn channels(&self) -> &[u8]
    {
        bytemuck::cast_slice(&self.pixels)
    }
    /// Mutable view of the pixels as interleaved channels
    pub fn channels_mut(&mut self) -> &mut [u8]
    {
        bytemuck::cast_slice_mut(&mut self.pixels)
    }
}

impl From<Vec<Rgb>> for PixelBuffer
{
    fn from(pixels: Vec<Rgb>) -> Self
    {
        PixelBuffer { pixels }
    }
}

impl FromIterator<Rgb> for PixelBuffer
{
    fn from_iter<T: IntoIterator<Item = Rgb>>(iter: T) -> Self
    {
        PixelBuffer {
            pixels: iter.into_iter().collect()
        }
    }
}

impl<'a> IntoIterator for &'a PixelBuffer
{
    type Item = &'a Rgb;
    type IntoIter = core::slice::Iter<'a, Rgb>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.pixels.iter()
    }
}

impl Index<usize> for PixelBuffer
{
    type Output = Rgb;

    fn index(&self, index: usize) -> &Self::Output
    {
        &self.pixels[index]
    }
}

impl IndexMut<usize> for PixelBuffer
{
    fn index_mut(&mut self, index: usize) -> &mut Self::Output
    {
        &mut self.pixels[index]
    }
}

#[cfg(test)]
mod tests
{
    use crate::pixels::{PixelBuffer, Rgb};

    #[test]
    fn channels_are_interleaved_rgb()
    {
        let buffer: PixelBuffer = vec![Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)].into();
        assert_eq!(buffer.channels(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn channel_writes_land_in_the_right_pixel()
    {
        let mut buffer = PixelBuffer::filled(Rgb::default(), 2);
        // green channel of the second pixel
        buffer.channels_mut()[4] = 200;

        assert_eq!(buffer[1], Rgb::new(0, 200, 0));
        assert_eq!(buffer[0], Rgb::default());
    }

    #[test]
    fn indexed_writes_change_one_pixel()
    {
        let mut buffer = PixelBuffer::filled(Rgb::default(), 3);
        buffer[2].b = 7;

        assert_eq!(buffer.channels(), &[0, 0, 0, 0, 0, 0, 0, 0, 7]);
    }

    #[test]
    fn from_channels_rejects_partial_pixels()
    {
        assert!(PixelBuffer::from_channels(&[0; 7]).is_none());
        assert_eq!(PixelBuffer::from_channels(&[0; 9]).unwrap().len(), 3);
        assert!(PixelBuffer::from_channels(&[]).unwrap().is_empty());
    }
}
