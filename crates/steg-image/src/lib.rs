/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Hide text in PPM images
//!
//! This crate ties the PPM parser and serializer to the parity
//! codec behind a single [`PpmDocument`] type.
//!
//! # Example
//! ```
//! use steg_image::load_document;
//!
//! let mut file = b"P6\n5 4\n255\n".to_vec();
//! file.extend_from_slice(&[128; 60]);
//!
//! let mut document = load_document(&file).unwrap();
//! document.encode_message("Hi", 11).unwrap();
//!
//! let mut saved: Vec<u8> = Vec::new();
//! document.save(&mut saved).unwrap();
//!
//! assert_eq!(load_document(&saved).unwrap().decode_message().unwrap(), "Hi");
//! ```
pub use document::{check_extension, PpmDocument};
pub use errors::StegErrors;
pub use steg_codec;
pub use steg_core;
pub use steg_ppm;

mod document;
mod errors;

/// Parse the bytes of a PPM file into a document
pub fn load_document(bytes: &[u8]) -> Result<PpmDocument, StegErrors>
{
    PpmDocument::from_bytes(bytes)
}
