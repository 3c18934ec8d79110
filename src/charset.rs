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

use crate::config::{self, CharsetConfig};
use crate::entropy::{KEY_LEN, Keystream};
use crate::error::ConfigurationError;
use crate::policy::{self, PasswordPolicy};
use zeroize::Zeroizing;

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Random strings over an alphabet assembled from character-class toggles.
#[derive(Debug, Clone)]
pub struct CharsetPolicy {
    length: usize,
    alphabet: Box<[u8]>,
}

impl CharsetPolicy {
    pub fn new(config: CharsetConfig) -> Result<Self, ConfigurationError> {
        config::check_length("Password length", config.length)?;

        Ok(Self {
            length: config.length,
            alphabet: build_alphabet(&config).into_boxed_slice(),
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }
}

// Classes are disjoint, so appending never introduces duplicates.
fn build_alphabet(config: &CharsetConfig) -> Vec<u8> {
    let mut alphabet = LOWERCASE.to_vec();

    if config.include_uppercase {
        alphabet.extend_from_slice(UPPERCASE);
    }
    if config.include_numbers {
        alphabet.extend_from_slice(DIGITS);
    }
    if config.include_symbols {
        alphabet.extend_from_slice(SYMBOLS);
    }

    alphabet
}

impl PasswordPolicy for CharsetPolicy {
    fn generate_from_key(&self, key: &[u8; KEY_LEN]) -> Zeroizing<String> {
        let mut stream = Keystream::new(key);
        let mut password = Zeroizing::new(String::with_capacity(self.length));

        for _ in 0..self.length {
            password.push(*stream.choose(&self.alphabet) as char);
        }

        password
    }

    fn entropy_bits(&self) -> f64 {
        policy::entropy_bits(self.length, self.alphabet.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn policy(length: usize, upper: bool, numbers: bool, symbols: bool) -> CharsetPolicy {
        CharsetPolicy::new(CharsetConfig {
            length,
            include_uppercase: upper,
            include_numbers: numbers,
            include_symbols: symbols,
        })
        .unwrap()
    }

    #[test]
    fn test_class_sizes() {
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(SYMBOLS.len(), 32);
        assert!(SYMBOLS.iter().all(|c| c.is_ascii_punctuation()));
    }

    #[test]
    fn test_alphabet_size_for_every_toggle_combination() {
        for bits in 0u8..8 {
            let (upper, numbers, symbols) = (bits & 1 != 0, bits & 2 != 0, bits & 4 != 0);
            let p = policy(16, upper, numbers, symbols);
            let alphabet = p.alphabet();

            let expected = 26 + 26 * upper as usize + 10 * numbers as usize + 32 * symbols as usize;
            assert_eq!(alphabet.len(), expected);

            let unique: HashSet<_> = alphabet.iter().collect();
            assert_eq!(unique.len(), alphabet.len(), "Alphabet contains duplicates");

            for &c in alphabet {
                let allowed = c.is_ascii_lowercase()
                    || (upper && c.is_ascii_uppercase())
                    || (numbers && c.is_ascii_digit())
                    || (symbols && c.is_ascii_punctuation());
                assert!(allowed, "Unexpected character \"{}\"", c as char);
            }
        }
    }

    #[test]
    fn test_alphabet_order() {
        let p = policy(1, true, true, true);
        let alphabet = p.alphabet();
        assert_eq!(&alphabet[..26], LOWERCASE);
        assert_eq!(&alphabet[26..52], UPPERCASE);
        assert_eq!(&alphabet[52..62], DIGITS);
        assert_eq!(&alphabet[62..], SYMBOLS);
    }

    #[test]
    fn test_lowercase_only_when_all_toggles_off() {
        let p = policy(32, false, false, false);
        assert_eq!(p.alphabet(), LOWERCASE);

        let password = p.generate_from_key(&[1u8; KEY_LEN]);
        assert!(password.bytes().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_default_shape() {
        let p = CharsetPolicy::new(CharsetConfig::default()).unwrap();
        assert_eq!(p.length(), 16);
        assert_eq!(p.alphabet().len(), 36);
        assert_eq!(p.generate().unwrap().len(), 16);
    }

    #[test]
    fn test_lowercase_and_digits() {
        let p = policy(8, false, true, false);
        let password = p.generate().unwrap();

        assert_eq!(password.len(), 8);
        assert!(
            password
                .bytes()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn test_zero_length() {
        let p = policy(0, true, true, true);
        assert_eq!(*p.generate().unwrap(), "");
        assert_eq!(p.entropy_bits(), 0.0);
    }

    #[test]
    fn test_too_long() {
        let result = CharsetPolicy::new(CharsetConfig {
            length: config::MAX_LENGTH + 1,
            ..CharsetConfig::default()
        });
        assert!(matches!(result, Err(ConfigurationError::TooLong { .. })));
    }

    #[test]
    fn test_deterministic_from_key() {
        let p = policy(20, true, true, true);
        let key = [42u8; KEY_LEN];
        assert_eq!(*p.generate_from_key(&key), *p.generate_from_key(&key));
    }

    #[test]
    fn test_calls_are_independent() {
        let p = policy(32, true, true, true);
        let a = p.generate().unwrap();
        let b = p.generate().unwrap();
        assert_ne!(*a, *b);
    }

    #[test]
    fn test_entropy_bits() {
        let p = policy(16, true, true, true);
        assert!((p.entropy_bits() - 16.0 * 94f64.log2()).abs() < 1e-9);
    }

    #[test]
    fn test_uniform_over_alphabet() {
        let p = policy(config::MAX_LENGTH, false, true, false);
        let mut counts = [0usize; 256];
        let mut total = 0;

        for i in 0..25u8 {
            let password = p.generate_from_key(&[i; KEY_LEN]);
            for c in password.bytes() {
                counts[c as usize] += 1;
                total += 1;
            }
        }

        let expected = total / p.alphabet().len();
        for &c in p.alphabet() {
            let count = counts[c as usize];
            assert!(
                count.abs_diff(expected) < expected / 10,
                "\"{}\" drawn {} times, expected about {}",
                c as char,
                count,
                expected
            );
        }
    }

    #[test]
    fn test_threads_share_one_policy() {
        let p = policy(24, true, true, false);
        let outputs: Vec<String> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| p.generate().unwrap().to_string()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(outputs.iter().all(|o| o.len() == 24));
        let unique: HashSet<_> = outputs.iter().collect();
        assert_eq!(unique.len(), outputs.len());
    }

    proptest! {
        #[test]
        fn prop_length_and_charset(
            length in 0usize..512,
            upper: bool,
            numbers: bool,
            symbols: bool,
            key: [u8; 32],
        ) {
            let p = policy(length, upper, numbers, symbols);
            let password = p.generate_from_key(&key);

            prop_assert_eq!(password.len(), length);
            prop_assert!(password.bytes().all(|c| p.alphabet().contains(&c)));
        }
    }
}
