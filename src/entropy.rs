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

//! Randomness for every policy: a 256-bit key from the OS CSPRNG expanded
//! by a ChaCha20 keystream, with unbiased rejection sampling on top.

use crate::error::EntropyError;
use chacha20::ChaCha20;
use chacha20::cipher::{KeyIvInit, StreamCipher};
use zeroize::Zeroizing;

pub const KEY_LEN: usize = 32;

const BUFFER_LEN: usize = 512;

/// Draws a fresh key from the operating system.
pub fn fresh_key() -> Result<Zeroizing<[u8; KEY_LEN]>, EntropyError> {
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    getrandom::fill(&mut key[..]).map_err(EntropyError::Unavailable)?;
    Ok(key)
}

/// Uniform index source over a ChaCha20 keystream.
///
/// One instance per generation; it is never shared between calls.
pub struct Keystream {
    cipher: ChaCha20,
    buffer: Zeroizing<[u8; BUFFER_LEN]>,
    pos: usize,
}

impl Keystream {
    pub fn new(key: &[u8; KEY_LEN]) -> Self {
        Self {
            cipher: ChaCha20::new(key.into(), &[0u8; 12].into()),
            buffer: Zeroizing::new([0u8; BUFFER_LEN]),
            pos: BUFFER_LEN,
        }
    }

    fn refill(&mut self) {
        self.buffer.fill(0);
        self.cipher.apply_keystream(&mut self.buffer[..]);
        self.pos = 0;
    }

    fn next_byte(&mut self) -> u8 {
        if self.pos >= BUFFER_LEN {
            self.refill();
        }

        let byte = self.buffer[self.pos];
        self.pos += 1;
        byte
    }

    fn next_u32(&mut self) -> u32 {
        let bytes = [
            self.next_byte(),
            self.next_byte(),
            self.next_byte(),
            self.next_byte(),
        ];
        u32::from_le_bytes(bytes)
    }

    /// Returns an index in `0..n`, every value equally likely.
    ///
    /// Pools of up to 256 items consume single bytes; larger pools consume
    /// 32-bit words. Draws above the largest multiple of `n` are rejected.
    /// `n` must be non-zero and fit in a `u32`.
    pub fn pick(&mut self, n: usize) -> usize {
        debug_assert!(n > 0 && n as u64 <= u32::MAX as u64);

        if n <= 256 {
            let rejection_threshold = 256 - (256 % n);
            loop {
                let byte = self.next_byte() as usize;
                if byte < rejection_threshold {
                    return byte % n;
                }
            }
        }

        let space = 1u64 << 32;
        let rejection_threshold = space - (space % n as u64);
        loop {
            let word = self.next_u32() as u64;
            if word < rejection_threshold {
                return (word % n as u64) as usize;
            }
        }
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.pick(items.len())]
    }
}
