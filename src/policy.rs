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

use crate::entropy::{self, KEY_LEN};
use crate::error::EntropyError;
use zeroize::Zeroizing;

/// A configured, stateless way of producing secrets.
///
/// Implementors fix the output shape (length or word count) at construction;
/// only the content varies between calls. Policies hold no mutable state, so
/// one instance can be shared across threads.
pub trait PasswordPolicy {
    /// Samples a secret from the keystream expanded from `key`.
    ///
    /// The same key always yields the same secret.
    fn generate_from_key(&self, key: &[u8; KEY_LEN]) -> Zeroizing<String>;

    /// Estimated strength of one secret, in bits.
    fn entropy_bits(&self) -> f64;

    /// Samples a secret keyed by fresh operating system entropy.
    ///
    /// Sampling itself cannot fail once the policy is built; the `Result`
    /// only carries `EntropyError::Unavailable` from the OS CSPRNG. Use
    /// [`PasswordPolicy::generate_from_key`] for the infallible form.
    fn generate(&self) -> Result<Zeroizing<String>, EntropyError> {
        let key = entropy::fresh_key()?;
        Ok(self.generate_from_key(&key))
    }
}

pub(crate) fn entropy_bits(draws: usize, pool: usize) -> f64 {
    if draws == 0 || pool <= 1 {
        return 0.0;
    }
    draws as f64 * (pool as f64).log2()
}
