/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::debug;
use steg_core::options::DecoderOptions;
use steg_image::{PpmDocument, StegErrors};

/// A PPM file on disk waiting to be loaded
pub struct StegFile
{
    file_path: PathBuf,
    options:   DecoderOptions
}

impl StegFile
{
    pub fn new(file_path: &Path, options: DecoderOptions) -> StegFile
    {
        StegFile {
            file_path: file_path.to_path_buf(),
            options
        }
    }
    /// Size of the file in bytes
    pub fn size(&self) -> Result<u64, StegErrors>
    {
        Ok(std::fs::metadata(&self.file_path)?.len())
    }

    pub fn into_document(self) -> Result<PpmDocument, StegErrors>
    {
        debug!("Loading {:?}", self.file_path);

        PpmDocument::open(&self.file_path, self.options)
    }
}

/// Get the message to hide from `--message` or `--message-file`
pub fn read_message(args: &ArgMatches) -> Result<String, StegErrors>
{
    if let Some(message) = args.get_one::<String>("message")
    {
        return Ok(message.clone());
    }
    if let Some(path) = args.get_one::<PathBuf>("message-file")
    {
        debug!("Reading message from {:?}", path);

        return Ok(std::fs::read_to_string(path)?);
    }
    Err(StegErrors::GenericString(String::from(
        "No message given, use --message or --message-file"
    )))
}
