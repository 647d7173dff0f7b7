/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Parity based steganography for RGB pixel buffers
//!
//! A message is hidden one bit per color channel by forcing the
//! channel's parity to match the bit, so no channel moves by more than one.
//!
//! The layout of an encoded buffer is
//!
//! | pixels          | content                                               |
//! |-----------------|-------------------------------------------------------|
//! | `0..=10`        | 32 bit header, message length in bits then depth      |
//! | `depth..`       | message, eight bits per ASCII character               |
//!
//! # Example
//! ```
//! use steg_codec::{ParityDecoder, ParityEncoder};
//! use steg_core::pixels::{PixelBuffer, Rgb};
//!
//! let mut pixels = PixelBuffer::filled(Rgb::new(200, 100, 50), 64);
//! ParityEncoder::new("secret", 20).encode(&mut pixels).unwrap();
//!
//! let decoder = ParityDecoder::new(&pixels);
//! assert_eq!(decoder.read_header().unwrap().depth(), 20);
//! assert_eq!(decoder.decode().unwrap(), "secret");
//! ```
pub use decoder::*;
pub use encoder::*;
pub use errors::*;
pub use header::*;
pub use steg_core;

pub mod bits;
pub mod capacity;
mod decoder;
mod encoder;
mod errors;
mod header;
pub mod parity;
