mod ui;

use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::{Parser, ValueEnum};
use passforge::{
    CharsetConfig, CharsetPolicy, ConfigurationError, PassphraseConfig, PassphrasePolicy,
    PasswordPolicy, PinConfig, PinPolicy, config, count_from_signed, default_wordlist,
    load_wordlist,
};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "passforge",
    version,
    author,
    about = "Random passwords, word-based passphrases and PINs"
)]
struct Cli {
    /// Prompts for every setting when omitted
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// Characters in a password or digits in a PIN [default: 16 / 6]
    #[arg(short, long, allow_negative_numbers = true)]
    length: Option<i64>,

    #[arg(short, long)]
    uppercase: bool,

    #[arg(long)]
    no_numbers: bool,

    #[arg(short, long)]
    symbols: bool,

    /// Words in a passphrase
    #[arg(short, long, allow_negative_numbers = true, default_value_t = config::DEFAULT_WORD_COUNT as i64)]
    words: i64,

    #[arg(long, default_value = config::DEFAULT_SEPARATOR)]
    separator: String,

    #[arg(short, long)]
    capitalize: bool,

    /// Dice-index or one-word-per-line list; the bundled list is used otherwise
    #[arg(long, env = "PASSFORGE_WORDLIST")]
    wordlist: Option<PathBuf>,

    /// Secrets to print, at least one
    #[arg(
        short = 'n',
        long,
        default_value_t = 1,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    count: usize,

    #[arg(short, long)]
    quiet: bool,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
enum Mode {
    Charset,
    Passphrase,
    Pin,
}

#[derive(Debug, PartialEq, Eq)]
enum Request {
    Charset(CharsetConfig),
    Passphrase(PassphraseConfig),
    Pin(PinConfig),
}

impl Cli {
    fn request(&self, mode: Mode) -> Result<Request, ConfigurationError> {
        Ok(match mode {
            Mode::Charset => Request::Charset(CharsetConfig {
                length: self.length_or("Password length", config::DEFAULT_CHARSET_LENGTH)?,
                include_uppercase: self.uppercase,
                include_numbers: !self.no_numbers,
                include_symbols: self.symbols,
            }),
            Mode::Passphrase => Request::Passphrase(PassphraseConfig {
                words_no: count_from_signed("Word count", self.words)?,
                separator: self.separator.clone(),
                capitalize: self.capitalize,
            }),
            Mode::Pin => Request::Pin(PinConfig {
                length: self.length_or("PIN length", config::DEFAULT_PIN_LENGTH)?,
            }),
        })
    }

    fn length_or(&self, name: &'static str, default: usize) -> Result<usize, ConfigurationError> {
        self.length
            .map_or(Ok(default), |length| count_from_signed(name, length))
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "passforge=debug"
    } else {
        "passforge=warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn emit<P: PasswordPolicy>(
    policy: &P,
    output_config: &ui::OutputConfig,
    count: usize,
    options: &ui::DisplayOptions,
) -> Result<()> {
    tracing::debug!(
        kind = ?output_config.kind,
        size = output_config.size,
        pool = output_config.pool_size,
        count,
        "policy ready"
    );

    let mut outputs = Vec::with_capacity(count);
    for _ in 0..count {
        outputs.push(policy.generate().context("Failed to generate secret")?);
    }

    ui::display_output(&outputs, policy.entropy_bits(), output_config, options);
    Ok(())
}

fn run(cli: &Cli, request: Request, options: &ui::DisplayOptions) -> Result<()> {
    match request {
        Request::Charset(charset_config) => {
            let policy = CharsetPolicy::new(charset_config)?;
            let output_config = ui::OutputConfig {
                kind: ui::OutputKind::Password,
                size: policy.length(),
                pool_size: policy.alphabet().len(),
                wordlist: None,
            };
            emit(&policy, &output_config, cli.count, options)
        }
        Request::Passphrase(passphrase_config) => match &cli.wordlist {
            Some(path) => {
                let words = load_wordlist(path)
                    .with_context(|| format!("Failed to load wordlist {}", path.display()))?;
                let policy = PassphrasePolicy::new(passphrase_config, &words)?;
                let output_config = ui::OutputConfig {
                    kind: ui::OutputKind::Passphrase,
                    size: policy.words_no(),
                    pool_size: policy.word_source_len(),
                    wordlist: Some(path.display().to_string()),
                };
                emit(&policy, &output_config, cli.count, options)
            }
            None => {
                let policy = PassphrasePolicy::new(passphrase_config, default_wordlist())?;
                let output_config = ui::OutputConfig {
                    kind: ui::OutputKind::Passphrase,
                    size: policy.words_no(),
                    pool_size: policy.word_source_len(),
                    wordlist: None,
                };
                emit(&policy, &output_config, cli.count, options)
            }
        },
        Request::Pin(pin_config) => {
            let policy = PinPolicy::new(pin_config)?;
            let output_config = ui::OutputConfig {
                kind: ui::OutputKind::Pin,
                size: policy.length(),
                pool_size: 10,
                wordlist: None,
            };
            emit(&policy, &output_config, cli.count, options)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = ui::DisplayOptions {
        unicode_support: ui::detect_unicode_support(),
        color_support: ui::detect_color_support(),
        quiet: cli.quiet,
    };

    if let Some(mode) = cli.mode {
        let request = cli.request(mode)?;
        return run(&cli, request, &options);
    }

    loop {
        let request = ui::prompt_request()?;
        match run(&cli, request, &options) {
            Err(e) if e.downcast_ref::<ConfigurationError>().is_some() => {
                ui::warn(&e.to_string(), &options);
            }
            other => return other,
        }
    }
}
