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

use crate::charset::DIGITS;
use crate::config::{self, PinConfig};
use crate::entropy::{KEY_LEN, Keystream};
use crate::error::ConfigurationError;
use crate::policy::{self, PasswordPolicy};
use zeroize::Zeroizing;

/// Numeric PINs.
#[derive(Debug, Clone, Copy)]
pub struct PinPolicy {
    length: usize,
}

impl PinPolicy {
    pub fn new(config: PinConfig) -> Result<Self, ConfigurationError> {
        config::check_length("PIN length", config.length)?;
        Ok(Self {
            length: config.length,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl PasswordPolicy for PinPolicy {
    fn generate_from_key(&self, key: &[u8; KEY_LEN]) -> Zeroizing<String> {
        let mut stream = Keystream::new(key);
        let mut pin = Zeroizing::new(String::with_capacity(self.length));

        for _ in 0..self.length {
            pin.push(*stream.choose(DIGITS) as char);
        }

        pin
    }

    fn entropy_bits(&self) -> f64 {
        policy::entropy_bits(self.length, DIGITS.len())
    }
}
