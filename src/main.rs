use anyhow::{Context, Result};
use clap::Parser;

use urlify::{padded_buffer, urlify, urlify_in_place, urlify_unpadded};

const SAMPLE_TEXT: &str = "Mr John Smith               ";
const SAMPLE_LENGTH: usize = 13;

/// Replace every space in a text with %20
#[derive(Parser, Debug)]
#[command(name = "urlify", version, about, long_about = None)]
struct Cli {
    /// Text to encode; the built-in sample is used when omitted
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Logical length in chars; the rest of TEXT is treated as padding
    #[arg(short, long, requires = "text")]
    length: Option<usize>,

    /// Append exactly the padding TEXT needs and encode it in place
    #[arg(long, requires = "text", conflicts_with = "length")]
    pad: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let encoded = encode(&cli)?;
    println!("{}", encoded);
    Ok(())
}

fn encode(cli: &Cli) -> Result<String> {
    let Some(text) = cli.text.as_deref() else {
        return urlify(SAMPLE_TEXT, SAMPLE_LENGTH).context("failed to encode sample text");
    };

    if cli.pad {
        let length = text.chars().count();
        let mut buffer = padded_buffer(text);
        let encoded = urlify_in_place(&mut buffer, length).context("failed to encode text")?;
        return Ok(encoded.iter().collect());
    }

    match cli.length {
        Some(length) => urlify(text, length)
            .with_context(|| format!("failed to encode {length} chars of {text:?}")),
        None => urlify_unpadded(text, text.chars().count()).context("failed to encode text"),
    }
}
