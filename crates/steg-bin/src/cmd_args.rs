/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgGroup, Command};

#[rustfmt::skip]
fn encode_options() -> Command {
    Command::new("encode")
        .about("Hide a message in a PPM image")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("PPM image to hide the message in")
            .value_parser(value_parser!(PathBuf))
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Where to write the image carrying the message, must end in .ppm")
            .value_parser(value_parser!(PathBuf))
            .required(true))
        .arg(Arg::new("message")
            .short('m')
            .long("message")
            .help("Message to hide, ASCII only"))
        .arg(Arg::new("message-file")
            .long("message-file")
            .help("Read the message to hide from a file")
            .long_help("Read the message to hide from a file.\nThe file contents are used verbatim, including any trailing newline.")
            .value_parser(value_parser!(PathBuf)))
        .group(ArgGroup::new("message-source")
            .args(["message", "message-file"])
            .required(true))
        .arg(Arg::new("depth")
            .short('d')
            .long("depth")
            .help("Pixel index where the message starts")
            .long_help("Pixel index where the message starts.\nThe first 11 pixels hold the header so depth must be at least 11.")
            .default_value("11")
            .value_parser(value_parser!(usize)))
}

#[rustfmt::skip]
fn decode_options() -> Command {
    Command::new("decode")
        .about("Recover a message hidden in a PPM image and print it")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("PPM image carrying a message")
            .value_parser(value_parser!(PathBuf))
            .required(true))
}

#[rustfmt::skip]
fn probe_options() -> Command {
    Command::new("probe")
        .about("Print image metadata and message capacity as JSON")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("PPM images to inspect")
            .value_parser(value_parser!(PathBuf))
            .action(ArgAction::Append)
            .required(true))
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("steg")
        .about("Hide text in PPM images using parity coding")
        .subcommand(encode_options())
        .subcommand(decode_options())
        .subcommand(probe_options())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("all-yes")
            .long("yes")
            .short('y')
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("ADVANCED")
            .help("Overwrite existing output files without asking"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .global(true)
            .help_heading("ADVANCED")
            .help("Maximum width of images allowed, unlimited if not given")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("max-height")
            .long("max-height")
            .global(true)
            .help_heading("ADVANCED")
            .help("Maximum height of images allowed, unlimited if not given")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("ADVANCED")
            .help("Reject images that are readable but not fully conformant"))
        .arg(Arg::new("legacy-header")
            .long("legacy-header")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("ADVANCED")
            .help("Treat everything up to the fourth newline as the PPM header")
            .long_help("Treat everything up to the fourth newline as the PPM header.\nDimensions are read from the third line and the max value is not parsed.\nUse this for files written by tools that always emit a comment line after the magic bytes."))
}
