/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoding and encoding Portable Pixmap images
//!
//! Supports the two RGB flavours of the format
//! - `P3`: pixels written as decimal text, one channel per line
//! - `P6`: pixels written as raw bytes
//!
//! The header is kept verbatim so that an untouched image
//! serializes back to the exact bytes it was read from.
//!
//! # Example
//! ```
//! use steg_ppm::{PpmDecoder, PpmEncoder};
//!
//! let file = b"P6\n2 1\n255\n\x00\x00\x00\xff\xff\xff";
//! let image = PpmDecoder::new(file).decode().unwrap();
//!
//! assert_eq!(image.dimensions(), (2, 1));
//!
//! let bytes = PpmEncoder::new(image.raw_header())
//!     .unwrap()
//!     .encode_to_vec(image.pixels())
//!     .unwrap();
//! assert_eq!(&bytes, file);
//! ```
pub use decoder::*;
pub use encoder::*;
pub use errors::*;
pub use image::*;
pub use kind::*;
pub use steg_core;

mod decoder;
mod encoder;
mod errors;
mod image;
mod kind;
