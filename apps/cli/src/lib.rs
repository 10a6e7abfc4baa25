pub mod config;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod services;

use std::io::{BufRead, Write};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::error::AppError;
use crate::pipeline::{split_words, Pipeline};
use crate::services::gemini::GeminiClient;
use crate::services::stroke_order::StrokeOrderClient;

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    let api_key = config.api_key()?.to_string();

    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.request_timeout() {
        builder = builder.timeout(timeout);
    }
    let client = builder.build().map_err(AppError::from)?;

    let words = read_words(
        std::env::args().skip(1),
        std::io::stdin().lock(),
        std::io::stdout(),
    )?;
    if words.is_empty() {
        tracing::info!("No words given, nothing to write");
        return Ok(());
    }

    let gemini = GeminiClient::new(
        client.clone(),
        &config.gemini_base_url,
        config.gemini_model.clone(),
        api_key,
        config.language.clone(),
    );
    let strokes = StrokeOrderClient::new(client, &config.stroke_order_base_url);

    let pipeline = Pipeline::new(&gemini, &strokes, config.card_options())
        .verify_characters(config.verify_characters);
    let report = pipeline.run(&words).await;

    if !report.failures.is_empty() {
        tracing::warn!(
            "{} of {} words failed: {}",
            report.failures.len(),
            words.len(),
            report
                .failures
                .iter()
                .map(|f| f.word.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        );
    }

    match export::write_flashcards(&report.document, &config.output_file())? {
        Some(path) => tracing::info!(
            "Saved {} flashcards to {}",
            report.document.len(),
            path.display()
        ),
        None => tracing::info!("No flashcards generated, nothing to write"),
    }

    Ok(())
}

/// Words from the command-line arguments, or `None` when no argument was given.
pub fn words_from_args<I>(args: I) -> Option<Vec<String>>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter().peekable();
    args.peek()?;
    Some(args.flat_map(|arg| split_words(&arg)).collect())
}

/// Words from `args`, or from one line of `input` after prompting on `output`.
pub fn read_words<I, R, W>(args: I, mut input: R, mut output: W) -> Result<Vec<String>, AppError>
where
    I: IntoIterator<Item = String>,
    R: BufRead,
    W: Write,
{
    if let Some(words) = words_from_args(args) {
        return Ok(words);
    }

    write!(output, "Enter words (separated by spaces): ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(split_words(&line))
}
