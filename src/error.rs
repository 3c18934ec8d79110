// This file is part of Passforge.
//
// Copyright (c) 2025  René Coignard <contact@renecoignard.com>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::path::PathBuf;
use thiserror::Error;

/// Raised while building a policy. Generation itself never produces one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Word source cannot be empty")]
    EmptyWordSource,
    #[error("Passphrase must contain at least one word")]
    NoWords,
    #[error("Word at index {index} is empty")]
    EmptyWord { index: usize },
    #[error("Word source contains \"{word}\" more than once")]
    DuplicateWord { word: String },
    #[error("{name} cannot be negative (got {value})")]
    Negative { name: &'static str, value: i64 },
    #[error("{name} too long ({value}, maximum is {max})")]
    TooLong {
        name: &'static str,
        value: usize,
        max: usize,
    },
    #[error("Too many words ({value}, maximum is {max})")]
    TooManyWords { value: usize, max: usize },
}

#[derive(Error, Debug)]
pub enum EntropyError {
    #[error("Operating system entropy source unavailable: {0}")]
    Unavailable(getrandom::Error),
}

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Wordlist file not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to read wordlist file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Wordlist is empty")]
    Empty,
    #[error("Malformed wordlist entry at line {line}")]
    Malformed { line: usize },
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}
