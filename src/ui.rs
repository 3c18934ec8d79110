use crate::{Mode, Request};
use anyhow::Result;
use clap::ValueEnum;
use console::{Style, Term};
use passforge::{CharsetConfig, PassphraseConfig, PinConfig, config, count_from_signed};
use std::io::{self, Write};
use zeroize::Zeroizing;

pub const MIN_SAFE_ENTROPY: f64 = 72.0;
pub const PARANOID_ENTROPY: f64 = 128.0;

pub const MIN_SAFE_PASSWORD_LENGTH: usize = 16;
pub const MIN_SAFE_WORD_COUNT: usize = 6;
pub const MIN_SAFE_PIN_LENGTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Password,
    Passphrase,
    Pin,
}

pub struct OutputConfig {
    pub kind: OutputKind,
    /// Characters for passwords and PINs, words for passphrases.
    pub size: usize,
    pub pool_size: usize,
    pub wordlist: Option<String>,
}

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Weak,
    Strong,
    Paranoid,
}

impl Rating {
    pub fn from_entropy(bits: f64) -> Self {
        if bits >= PARANOID_ENTROPY {
            Rating::Paranoid
        } else if bits >= MIN_SAFE_ENTROPY {
            Rating::Strong
        } else {
            Rating::Weak
        }
    }

    fn label(self) -> &'static str {
        match self {
            Rating::Weak => "Weak",
            Rating::Strong => "Strong",
            Rating::Paranoid => "Paranoid",
        }
    }
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stdout)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

pub fn get_status_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("✓", "!")
    } else {
        ("+", "!")
    }
}

fn tree_glyphs(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("├─", "└─")
    } else {
        ("|-", "`-")
    }
}

fn plural(n: usize, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 { one } else { many }
}

fn status_style(secure: bool, options: &DisplayOptions) -> Style {
    match (options.color_support, secure) {
        (false, _) => Style::new(),
        (true, true) => Style::new().green(),
        (true, false) => Style::new().yellow(),
    }
}

pub fn warn(message: &str, options: &DisplayOptions) {
    let style = status_style(false, options);
    let term = Term::stderr();
    term.write_line(&style.apply_to(format!("WARNING: {}", message)).to_string())
        .ok();
}

pub fn parse_mode(answer: &str) -> Option<Mode> {
    Mode::from_str(answer.trim(), true).ok()
}

pub fn parse_bool_answer(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

pub fn parse_count_answer(name: &'static str, answer: &str) -> Result<usize, String> {
    let value: i64 = answer
        .trim()
        .parse()
        .map_err(|_| format!("{} must be a whole number", name))?;
    count_from_signed(name, value).map_err(|e| e.to_string())
}

fn prompt(label: &str, default: &str) -> Result<String> {
    print!("{} ({}): ", label, default);
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        anyhow::bail!("Input closed");
    }

    Ok(resolve_answer(&input, default))
}

/// Strips the line ending only; inner and surrounding spaces are kept so a
/// separator such as `" "` survives. An empty line selects `default`.
pub fn resolve_answer(line: &str, default: &str) -> String {
    let answer = line.trim_end_matches(['\n', '\r']);
    if answer.is_empty() {
        return default.to_string();
    }
    answer.to_string()
}

fn prompt_with<T>(
    label: &str,
    default: &str,
    parse: impl Fn(&str) -> Result<T, String>,
) -> Result<T> {
    let options = DisplayOptions {
        unicode_support: false,
        color_support: detect_color_support(),
        quiet: false,
    };

    loop {
        let answer = prompt(label, default)?;
        match parse(&answer) {
            Ok(value) => return Ok(value),
            Err(message) => warn(&message, &options),
        }
    }
}

fn prompt_bool(label: &str, default: bool) -> Result<bool> {
    prompt_with(label, if default { "y" } else { "n" }, |answer| {
        parse_bool_answer(answer).ok_or_else(|| "Answer y or n".to_string())
    })
}

fn prompt_count(label: &str, name: &'static str, default: usize) -> Result<usize> {
    prompt_with(label, &default.to_string(), |answer| {
        parse_count_answer(name, answer)
    })
}

pub fn prompt_request() -> Result<Request> {
    let mode = prompt_with("Mode [charset/passphrase/pin]", "charset", |answer| {
        parse_mode(answer).ok_or_else(|| format!("Unknown mode \"{}\"", answer))
    })?;

    let request = match mode {
        Mode::Charset => {
            let defaults = CharsetConfig::default();
            Request::Charset(CharsetConfig {
                length: prompt_count("Length", "Password length", defaults.length)?,
                include_uppercase: prompt_bool("Uppercase", defaults.include_uppercase)?,
                include_numbers: prompt_bool("Numbers", defaults.include_numbers)?,
                include_symbols: prompt_bool("Symbols", defaults.include_symbols)?,
            })
        }
        Mode::Passphrase => {
            let defaults = PassphraseConfig::default();
            Request::Passphrase(PassphraseConfig {
                words_no: prompt_count("Words", "Word count", defaults.words_no)?,
                separator: prompt("Separator", &defaults.separator)?,
                capitalize: prompt_bool("Capitalize", defaults.capitalize)?,
            })
        }
        Mode::Pin => Request::Pin(PinConfig {
            length: prompt_count("Length", "PIN length", config::DEFAULT_PIN_LENGTH)?,
        }),
    };

    println!();
    Ok(request)
}

pub fn display_output(
    outputs: &[Zeroizing<String>],
    entropy: f64,
    config: &OutputConfig,
    options: &DisplayOptions,
) {
    if options.quiet {
        for output in outputs {
            println!("{}", &**output);
        }
        return;
    }

    for (i, output) in outputs.iter().enumerate() {
        println!("Out[{}]:\n{}\n", i, &**output);
    }

    display_settings(config, options);
    display_stats(entropy, config, options);
}

fn display_settings(config: &OutputConfig, options: &DisplayOptions) {
    let (branch, last) = tree_glyphs(options.unicode_support);

    println!("Settings:");

    let mode = match config.kind {
        OutputKind::Password => "Charset",
        OutputKind::Passphrase => "Passphrase",
        OutputKind::Pin => "PIN",
    };
    println!("  {} Mode       {}", branch, mode);

    match config.kind {
        OutputKind::Passphrase => {
            let source = config.wordlist.as_deref().unwrap_or("Bundled");
            println!(
                "  {} Wordlist   {} ({} {})",
                branch,
                source,
                config.pool_size,
                plural(config.pool_size, "word", "words")
            );
        }
        OutputKind::Password | OutputKind::Pin => {
            println!("  {} Alphabet   {} chars", branch, config.pool_size);
        }
    }

    println!("  {} Keystream  ChaCha20 (256-bit, OS-seeded)", branch);
    println!("  {} Sampling   Unbiased rejection", last);
    println!();
}

fn display_stats(entropy: f64, config: &OutputConfig, options: &DisplayOptions) {
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);
    let (branch, last) = tree_glyphs(options.unicode_support);

    let rating = Rating::from_entropy(entropy);
    let entropy_secure = rating != Rating::Weak;
    let entropy_style = status_style(entropy_secure, options);
    let entropy_icon = if entropy_secure { check_ok } else { check_warn };

    let (min_size, unit_one, unit_many) = match config.kind {
        OutputKind::Password => (MIN_SAFE_PASSWORD_LENGTH, "char", "chars"),
        OutputKind::Passphrase => (MIN_SAFE_WORD_COUNT, "word", "words"),
        OutputKind::Pin => (MIN_SAFE_PIN_LENGTH, "digit", "digits"),
    };
    let size_secure = config.size >= min_size;
    let size_style = status_style(size_secure, options);
    let size_icon = if size_secure { check_ok } else { check_warn };

    println!("Stats:");

    println!(
        "  {} Entropy    {} {} bits ({})",
        branch,
        entropy_style.apply_to(format!("[{}]", entropy_icon)),
        entropy_style.apply_to(format!("{:.1}", entropy)),
        entropy_style.apply_to(rating.label())
    );

    println!(
        "  {} Length     {} {} {}",
        last,
        size_style.apply_to(format!("[{}]", size_icon)),
        size_style.apply_to(config.size),
        plural(config.size, unit_one, unit_many)
    );

    println!(
        "\n{} Security: {}",
        entropy_style.apply_to(format!("[{}]", entropy_icon)),
        entropy_style.apply_to(rating.label())
    );
}
