use passforge::{
    CharsetConfig, CharsetPolicy, ConfigurationError, PassphraseConfig, PassphrasePolicy,
    PasswordPolicy, PinConfig, PinPolicy, default_wordlist,
};

const KEY: [u8; 32] = [42u8; 32];

fn charset(length: usize, upper: bool, numbers: bool, symbols: bool) -> CharsetPolicy {
    CharsetPolicy::new(CharsetConfig {
        length,
        include_uppercase: upper,
        include_numbers: numbers,
        include_symbols: symbols,
    })
    .unwrap()
}

fn passphrase_config(words_no: usize, separator: &str, capitalize: bool) -> PassphraseConfig {
    PassphraseConfig {
        words_no,
        separator: separator.to_string(),
        capitalize,
    }
}

#[test]
fn test_lowercase_and_digits_password() {
    let password = charset(8, false, true, false).generate().unwrap();

    assert_eq!(password.len(), 8);
    assert!(
        password
            .bytes()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    );
}

#[test]
fn test_capitalized_passphrase() {
    let words = ["apple", "zebra", "car"];
    let policy = PassphrasePolicy::new(passphrase_config(4, "-", true), &words).unwrap();
    let passphrase = policy.generate().unwrap();

    let tokens: Vec<&str> = passphrase.split('-').collect();
    assert_eq!(tokens.len(), 4);
    assert!(tokens.iter().all(|t| !t.is_empty()));
    assert!(
        tokens
            .iter()
            .all(|t| ["APPLE", "ZEBRA", "CAR"].contains(t))
    );
}

#[test]
fn test_six_digit_pin() {
    let pin = PinPolicy::new(PinConfig { length: 6 })
        .unwrap()
        .generate()
        .unwrap();

    assert_eq!(pin.len(), 6);
    assert!(pin.bytes().all(|c| c.is_ascii_digit()));
}

#[test]
fn test_empty_password() {
    assert_eq!(*charset(0, false, true, false).generate().unwrap(), "");
}

#[test]
fn test_single_word_passphrase() {
    let words = ["only"];
    let policy = PassphrasePolicy::new(passphrase_config(1, "-", false), &words).unwrap();
    assert_eq!(*policy.generate().unwrap(), "only");
}

#[test]
fn test_empty_word_source() {
    let words: Vec<String> = Vec::new();
    let result = PassphrasePolicy::new(PassphraseConfig::default(), &words);
    assert_eq!(result.unwrap_err(), ConfigurationError::EmptyWordSource);
}

#[test]
fn test_policies_behind_one_trait() {
    let words = default_wordlist();
    let policies: Vec<Box<dyn PasswordPolicy + Send + Sync>> = vec![
        Box::new(CharsetPolicy::new(CharsetConfig::default()).unwrap()),
        Box::new(PassphrasePolicy::new(PassphraseConfig::default(), words).unwrap()),
        Box::new(PinPolicy::new(PinConfig::default()).unwrap()),
    ];

    let outputs: Vec<String> = policies
        .iter()
        .map(|p| p.generate().unwrap().to_string())
        .collect();

    assert_eq!(outputs[0].len(), 16);
    assert_eq!(outputs[1].split('-').count(), 6);
    assert_eq!(outputs[2].len(), 6);
}

#[test]
fn test_regression_password() {
    let password = charset(20, true, true, true).generate_from_key(&KEY);
    assert_eq!(*password, "6zF)Lcw'[25QdlCa6_BE");
}

#[test]
fn test_regression_default_password() {
    let password = CharsetPolicy::new(CharsetConfig::default())
        .unwrap()
        .generate_from_key(&KEY);
    assert_eq!(*password, "iz58nxcw6msh2d7o");
}

#[test]
fn test_regression_passphrase() {
    let policy =
        PassphrasePolicy::new(PassphraseConfig::default(), default_wordlist()).unwrap();
    assert_eq!(
        *policy.generate_from_key(&KEY),
        "lobster-barn-berry-cougar-ivory-adobe"
    );

    let capitalized =
        PassphrasePolicy::new(passphrase_config(6, "-", true), default_wordlist()).unwrap();
    assert_eq!(
        *capitalized.generate_from_key(&KEY),
        "LOBSTER-BARN-BERRY-COUGAR-IVORY-ADOBE"
    );
}

#[test]
fn test_regression_pin() {
    let pin = PinPolicy::new(PinConfig::default())
        .unwrap()
        .generate_from_key(&KEY);
    assert_eq!(*pin, "251091");
}
