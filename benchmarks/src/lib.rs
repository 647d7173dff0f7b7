/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::{Path, PathBuf};

/// Get the parent directory from which this
/// crate is compiled from
pub fn sample_path() -> PathBuf {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"));
    // get parent path
    path.parent().unwrap().to_owned()
}

/// A synthetic `width` x `height` image with a GIMP style header
///
/// Channels follow a fixed pattern so runs are comparable
pub fn synthetic_ppm(width: usize, height: usize, ascii: bool) -> Vec<u8> {
    let magic = if ascii { "P3" } else { "P6" };
    let mut file =
        format!("{magic}\n# CREATOR: GIMP PNM Filter Version 1.1\n{width} {height}\n255\n").into_bytes();

    for channel in (0..width * height * 3).map(|i| (i * 31 % 256) as u8) {
        if ascii {
            file.extend_from_slice(format!("{channel}\n").as_bytes());
        } else {
            file.push(channel);
        }
    }
    file
}
