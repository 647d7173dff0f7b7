/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::ArgMatches;
use log::warn;
use steg_image::StegErrors;

use crate::cmd_parsers::global_options::CmdOptions;
use crate::file_io::StegFile;
use crate::serde::Metadata;

/// Probe input files, extract metadata, and print to standard output.
///
/// Files that cannot be read are skipped with a warning.
pub fn probe_input_files(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), StegErrors>
{
    let files = args
        .get_many::<PathBuf>("in")
        .ok_or_else(|| StegErrors::GenericString(String::from("No input files given")))?;

    for in_file in files
    {
        let file = StegFile::new(in_file, cmd_opts.decoder_options);

        let size = match file.size()
        {
            Ok(size) => size,
            Err(err) =>
            {
                warn!("Skipping {:?}: {:?}", in_file, err);
                continue;
            }
        };
        match file.into_document()
        {
            Ok(document) =>
            {
                let metadata = Metadata::new(in_file, size, &document);

                match serde_json::to_string_pretty(&metadata)
                {
                    Ok(json) => println!("{json}"),
                    Err(err) => warn!("Could not serialize metadata for {:?}: {}", in_file, err)
                }
            }
            Err(err) =>
            {
                warn!("Skipping {:?}: {:?}", in_file, err);
            }
        }
    }
    Ok(())
}
