// Rewrite test tool - run utterances through the transcript pipeline
use anyhow::Result;
use std::io::BufRead;

use dictation_rewrite::{AppConfig, Locale, TranscriptPipeline};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("failed to load config, using defaults: {e:#}");
            AppConfig::default()
        }
    };

    // --locale fr|en overrides the configured table
    let args: Vec<String> = std::env::args().collect();
    if let Some(pos) = args.iter().position(|a| a == "--locale") {
        match args.get(pos + 1).map(String::as_str) {
            Some("fr") => config.locale = Locale::French,
            Some("en") => config.locale = Locale::English,
            other => anyhow::bail!("unsupported locale: {:?}", other),
        }
    }

    let pipeline = TranscriptPipeline::from_config(&config);

    println!("=== dictation-rewrite ({}) ===", config.locale.display_name());
    println!("one utterance per line, Ctrl-D to quit\n");

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let result = pipeline.process(&line);
        println!("{}", result.text);
    }

    Ok(())
}
