/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all libraries
//!
//! This crate provides a set of core routines shared
//! by the parser, serializer and steganographic codec under the `steg` umbrella
//!
//! It currently contains
//!
//! - A byte reader used by the PPM header and body parsers
//! - The pixel buffer every other crate reads and mutates
//! - Decoder options
//! - A logging shim that forwards to the `log` crate when enabled
//!
//! # Features
//!  - `log`: Forward the logging macros to the [`log`](https://docs.rs/log) crate,
//!     otherwise they expand to nothing.
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
//!
#![macro_use]

pub mod bytestream;
pub mod log;
pub mod options;
pub mod pixels;
