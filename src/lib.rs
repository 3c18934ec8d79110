pub mod charset;
pub mod config;
pub mod entropy;
pub mod error;
pub mod passphrase;
pub mod pin;
pub mod policy;
pub mod wordlist;

pub use charset::CharsetPolicy;
pub use config::{CharsetConfig, PassphraseConfig, PinConfig, count_from_signed};
pub use error::{ConfigurationError, EntropyError, WordlistError};
pub use passphrase::PassphrasePolicy;
pub use pin::PinPolicy;
pub use policy::PasswordPolicy;
pub use wordlist::{default_wordlist, load_wordlist, parse_wordlist};
