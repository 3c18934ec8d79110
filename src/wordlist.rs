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

//! Word sources for passphrases.
//!
//! Lists use the dice-index layout (`<index><whitespace><word>`, one entry per
//! line) or plain one-word lines. Blank lines and `#` comments are skipped.

use crate::error::WordlistError;
use crate::passphrase::validate_word_source;
use std::path::Path;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

const WORDLIST_DATA: &str = include_str!("../assets/wordlist.txt");

const DEFAULT_WORDLIST_SIZE: usize = 216;

#[cfg(test)]
const EXPECTED_SHA256: &str = "45b000fe46b258ee0f517f31211eb0cbcc7ec14434fd34cf2f1454b729c07c89";

static WORDLIST: OnceLock<Vec<&'static str>> = OnceLock::new();

/// The bundled list: 216 words indexed by three six-sided dice.
pub fn default_wordlist() -> &'static [&'static str] {
    WORDLIST.get_or_init(|| {
        let words: Vec<&'static str> = WORDLIST_DATA
            .lines()
            .filter_map(|line| line.split_whitespace().nth(1))
            .collect();

        assert_eq!(
            words.len(),
            DEFAULT_WORDLIST_SIZE,
            "Bundled wordlist must contain exactly {} words",
            DEFAULT_WORDLIST_SIZE
        );
        words
    })
}

pub const fn default_wordlist_size() -> usize {
    DEFAULT_WORDLIST_SIZE
}

pub fn parse_wordlist(data: &str) -> Result<Vec<String>, WordlistError> {
    let mut words = Vec::new();

    for (i, line) in data.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let word = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(index), Some(word), None) if is_dice_index(index) => word,
            (Some(word), None, None) if !is_dice_index(word) => word,
            _ => return Err(WordlistError::Malformed { line: i + 1 }),
        };

        words.push(word.nfc().collect::<String>().to_lowercase());
    }

    if words.is_empty() {
        return Err(WordlistError::Empty);
    }

    validate_word_source(&words)?;
    Ok(words)
}

fn is_dice_index(token: &str) -> bool {
    token.bytes().all(|b| b.is_ascii_digit())
}

pub fn load_wordlist<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordlistError> {
    let path = path.as_ref();

    if !path.exists() {
        tracing::error!(path = %path.display(), "wordlist not found");
        return Err(WordlistError::NotFound(path.to_path_buf()));
    }

    let data = std::fs::read_to_string(path)?;
    let words = parse_wordlist(&data)?;

    tracing::debug!(path = %path.display(), words = words.len(), "wordlist loaded");
    Ok(words)
}
