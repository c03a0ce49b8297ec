//! Extract command - run the pipeline over one prescription text.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use console::style;
use tracing::{debug, info};

use rxtract_core::models::config::RxtractConfig;
use rxtract_core::models::record::ExtractionResult;
use rxtract_core::ner::{LexiconRecognizer, NerFieldExtractor};
use rxtract_core::prescription::{PrescriptionParser, RuleBasedParser};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// OCR prescription text to extract from
    #[arg(required = true)]
    text: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Emit the bare record list instead of the wrapper object
    #[arg(long)]
    bare: bool,

    /// Use the entity-recognition model exported to this directory
    #[arg(short, long)]
    model_dir: Option<PathBuf>,

    /// Use the entity-recognition model from the configured model_dir
    #[arg(long, conflicts_with = "model_dir")]
    use_model: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    // Load configuration
    let config = if let Some(path) = config_path {
        RxtractConfig::from_file(Path::new(path))?
    } else {
        RxtractConfig::default()
    };

    // Collapse embedded newlines and trim before handing text to the core.
    let text = args.text.replace(['\n', '\r'], " ").trim().to_string();
    debug!("sanitized input: {} characters", text.len());

    let model_dir = args
        .model_dir
        .clone()
        .or_else(|| args.use_model.then(|| config.model.model_dir.clone()));

    let result = if let Some(model_dir) = &model_dir {
        // Model strategy requested: any load failure is fatal before
        // extraction starts. An empty result later is not an error.
        let recognizer = LexiconRecognizer::from_files(
            model_dir,
            &config.model.manifest,
            &config.model.lexicon,
        )
        .with_context(|| format!("cannot use model at {}", model_dir.display()))?;

        info!("using model '{}'", recognizer.manifest().name);
        let parser = RuleBasedParser::from_config(&config)
            .with_field_source(NerFieldExtractor::new(recognizer));
        parser.parse(&text)
    } else {
        RuleBasedParser::from_config(&config).parse(&text)
    };

    info!("extracted {} medicine(s)", result.medicines.len());

    // Format output
    let output = format_result(&result, args.format, args.bare)?;

    // Write output
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)
            .with_context(|| format!("cannot write {}", output_path.display()))?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_result(
    result: &ExtractionResult,
    format: OutputFormat,
    bare: bool,
) -> anyhow::Result<String> {
    let output = match format {
        OutputFormat::Json => {
            if bare {
                serde_json::to_string_pretty(&result.medicines)?
            } else {
                serde_json::to_string_pretty(result)?
            }
        }
        OutputFormat::Text => {
            let mut lines = Vec::new();
            if result.medicines.is_empty() {
                lines.push(format!("{} No medicines found", style("ℹ").blue()));
            }
            for (i, record) in result.medicines.iter().enumerate() {
                lines.push(format!(
                    "{}. {}  dosage: {}  duration: {}",
                    i + 1,
                    style(&record.name).bold(),
                    if record.dosage.is_empty() { "-" } else { record.dosage.as_str() },
                    if record.duration.is_empty() { "-" } else { record.duration.as_str() },
                ));
            }
            lines.join("\n")
        }
    };

    Ok(output)
}
