/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};
use steg_core::options::DecoderOptions;

use crate::cmd_parsers::get_decoder_options;

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions
{
    pub decoder_options: DecoderOptions,
    pub override_files:  bool
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions
{
    let decoder_options = get_decoder_options(options);
    let override_files = options.get_flag("all-yes");

    if override_files
    {
        info!("Setting all commands to yes");
    }
    info!("Decoder options: {:?}", decoder_options);

    CmdOptions {
        decoder_options,
        override_files
    }
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches)
{
    let log_level = if options.get_flag("debug")
    {
        Level::Debug
    }
    else if options.get_flag("trace")
    {
        Level::Trace
    }
    else if options.get_flag("warn")
    {
        Level::Warn
    }
    else if options.get_flag("info")
    {
        Level::Info
    }
    else
    {
        Level::Warn
    };

    if let Err(err) = simple_logger::init_with_level(log_level)
    {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
