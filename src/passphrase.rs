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

use crate::config::{MAX_WORDS, PassphraseConfig};
use crate::entropy::{KEY_LEN, Keystream};
use crate::error::ConfigurationError;
use crate::policy::{self, PasswordPolicy};
use std::collections::HashSet;
use zeroize::Zeroizing;

/// Word-based passphrases drawn from a caller-owned word source.
///
/// The word source is borrowed for the policy's lifetime and never copied,
/// reordered or extended.
#[derive(Debug, Clone)]
pub struct PassphrasePolicy<'w, W = String> {
    words: &'w [W],
    words_no: usize,
    separator: String,
    capitalize: bool,
}

impl<'w, W: AsRef<str>> PassphrasePolicy<'w, W> {
    pub fn new(config: PassphraseConfig, words: &'w [W]) -> Result<Self, ConfigurationError> {
        validate_word_source(words)?;

        if config.words_no == 0 {
            return Err(ConfigurationError::NoWords);
        }
        if config.words_no > MAX_WORDS {
            return Err(ConfigurationError::TooManyWords {
                value: config.words_no,
                max: MAX_WORDS,
            });
        }

        Ok(Self {
            words,
            words_no: config.words_no,
            separator: config.separator,
            capitalize: config.capitalize,
        })
    }

    pub fn words_no(&self) -> usize {
        self.words_no
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn word_source_len(&self) -> usize {
        self.words.len()
    }
}

/// Checks that `words` is usable as a word source: non-empty, no empty
/// entries, no repeats.
pub fn validate_word_source<W: AsRef<str>>(words: &[W]) -> Result<(), ConfigurationError> {
    if words.is_empty() {
        return Err(ConfigurationError::EmptyWordSource);
    }

    let mut seen = HashSet::with_capacity(words.len());
    for (index, word) in words.iter().enumerate() {
        let word = word.as_ref();
        if word.is_empty() {
            return Err(ConfigurationError::EmptyWord { index });
        }
        if !seen.insert(word) {
            return Err(ConfigurationError::DuplicateWord {
                word: word.to_string(),
            });
        }
    }

    Ok(())
}

impl<W: AsRef<str>> PasswordPolicy for PassphrasePolicy<'_, W> {
    fn generate_from_key(&self, key: &[u8; KEY_LEN]) -> Zeroizing<String> {
        let mut stream = Keystream::new(key);
        let mut passphrase = Zeroizing::new(String::new());

        for i in 0..self.words_no {
            if i > 0 {
                passphrase.push_str(&self.separator);
            }
            passphrase.push_str(stream.choose(self.words).as_ref());
        }

        if self.capitalize {
            return Zeroizing::new(passphrase.to_uppercase());
        }

        passphrase
    }

    fn entropy_bits(&self) -> f64 {
        policy::entropy_bits(self.words_no, self.words.len())
    }
}
