/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use steg_core::options::DecoderOptions;

pub mod global_options;

/// Map the global command line flags onto decoder options
///
/// Dimensions are unlimited unless `--max-width` or `--max-height` is given
pub fn get_decoder_options(options: &ArgMatches) -> DecoderOptions
{
    let max_width = options.get_one::<usize>("max-width").copied().unwrap_or(usize::MAX);
    let max_height = options.get_one::<usize>("max-height").copied().unwrap_or(usize::MAX);
    let strict_mode = options.get_flag("strict");
    let legacy_header = options.get_flag("legacy-header");

    DecoderOptions::new_cmd()
        .set_max_height(max_height)
        .set_max_width(max_width)
        .set_strict_mode(strict_mode)
        .set_legacy_header(legacy_header)
}
