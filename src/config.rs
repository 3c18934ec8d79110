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

use crate::error::ConfigurationError;

pub const MAX_LENGTH: usize = 4096;
pub const MAX_WORDS: usize = 256;

pub const DEFAULT_CHARSET_LENGTH: usize = 16;
pub const DEFAULT_WORD_COUNT: usize = 6;
pub const DEFAULT_SEPARATOR: &str = "-";
pub const DEFAULT_PIN_LENGTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharsetConfig {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for CharsetConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_CHARSET_LENGTH,
            include_uppercase: false,
            include_numbers: true,
            include_symbols: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassphraseConfig {
    pub words_no: usize,
    pub separator: String,
    pub capitalize: bool,
}

impl Default for PassphraseConfig {
    fn default() -> Self {
        Self {
            words_no: DEFAULT_WORD_COUNT,
            separator: DEFAULT_SEPARATOR.to_string(),
            capitalize: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinConfig {
    pub length: usize,
}

impl Default for PinConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_PIN_LENGTH,
        }
    }
}

/// Converts a count typed by a user into a `usize`, rejecting negatives
/// instead of clamping them.
pub fn count_from_signed(name: &'static str, value: i64) -> Result<usize, ConfigurationError> {
    usize::try_from(value).map_err(|_| ConfigurationError::Negative { name, value })
}

pub(crate) fn check_length(name: &'static str, length: usize) -> Result<(), ConfigurationError> {
    if length > MAX_LENGTH {
        return Err(ConfigurationError::TooLong {
            name,
            value: length,
            max: MAX_LENGTH,
        });
    }
    Ok(())
}
