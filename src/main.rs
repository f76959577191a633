use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use skin_type_rs::logger;
use skin_type_rs::skin_analysis::{AnalyzerConfig, SkinTypeClassifier, analyze_upload};

use tracing::{error, info};

fn config_from_env() -> AnalyzerConfig {
    let mut builder = AnalyzerConfig::builder();
    if let Ok(dir) = std::env::var("SKIN_MODEL_DIR") {
        builder = builder.model_dir(dir);
    }
    if let Ok(path) = std::env::var("SKIN_TEXT_INFO") {
        builder = builder.text_info_path(path);
    }
    if let Some(threads) = std::env::var("SKIN_INTRA_THREADS")
        .ok()
        .and_then(|t| t.parse().ok())
    {
        builder = builder.intra_threads(threads);
    }
    builder.build()
}

fn run() -> anyhow::Result<bool> {
    let images: Vec<String> = std::env::args().skip(1).collect();
    if images.is_empty() {
        anyhow::bail!("usage: skin-type <image.jpg|image.png>...");
    }

    let config = config_from_env();
    info!("Starting skin-type...");
    info!("Model directory: {}", config.model_dir.display());

    let classifier = SkinTypeClassifier::new(&config).context("failed to load analysis models")?;

    let mut all_ok = true;
    for image in &images {
        let file_name = Path::new(image)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(image.as_str());

        let outcome = std::fs::read(image)
            .map_err(Into::into)
            .and_then(|data| analyze_upload(&classifier, file_name, &data));

        match outcome {
            Ok(result) => println!("{}", serde_json::to_string(&result)?),
            Err(e) => {
                error!("{}: {}", image, e);
                all_ok = false;
            }
        }
    }

    Ok(all_ok)
}

fn main() -> ExitCode {
    logger::init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
