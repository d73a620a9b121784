use crate::{
    cli::args::{NormalizeArgs, ValidateArgs},
    core::{
        config::AppConfig, ConfigLoader, DocumentExtractor, FileLoader, Pattern, PatternPipeline,
        PatternValidator, ProcessOutcome, SeededIdSource,
    },
    utils::{
        discover_inputs,
        serialization::{FileSerializer, FileUtils, JsonSerializer, OutputFormat, YamlSerializer},
    },
    Result,
};
use anyhow::anyhow;
use std::collections::HashSet;
use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Normalize every discovered input and emit the extracted patterns.
///
/// Per-file failures are logged by the pipeline and counted; the command only
/// fails when nothing could be discovered or output cannot be written.
pub fn normalize(config_path: Option<&Path>, args: NormalizeArgs) -> Result<()> {
    let config = resolve_config(config_path, &args)?;

    let inputs = discover_inputs(&args.paths, config.discovery.recursive)?;
    if inputs.is_empty() {
        return Err(anyhow!(
            "no supported input files found in {}",
            display_paths(&args.paths)
        ));
    }

    let extractor = DocumentExtractor::new(config.extractor.framework.clone())
        .with_role_linking(config.extractor.link_by_role);
    let pipeline = match args.seed {
        Some(seed) => PatternPipeline::new(extractor).with_id_source(SeededIdSource::new(seed)),
        None => PatternPipeline::new(extractor),
    };

    let mut patterns = Vec::new();
    let mut failed = 0usize;
    for input in &inputs {
        match pipeline.process_file(input) {
            ProcessOutcome::Extracted(pattern) => patterns.push(pattern),
            ProcessOutcome::Failed(_) => failed += 1,
        }
    }

    match &config.output.directory {
        Some(directory) => {
            let written = write_patterns(
                directory,
                &patterns,
                config.output.format,
                config.output.pretty,
            )?;
            tracing::info!(
                directory = %directory.display(),
                files = written.len(),
                "wrote normalized patterns"
            );
        }
        None => print_patterns(&patterns, config.output.format, config.output.pretty)?,
    }

    tracing::info!(
        framework = %config.extractor.framework,
        inputs = inputs.len(),
        extracted = patterns.len(),
        failed,
        "normalization finished"
    );
    Ok(())
}

/// Validate serialized patterns; every file is checked before reporting.
pub fn validate(args: ValidateArgs) -> Result<()> {
    let mut invalid = 0usize;
    for file in &args.files {
        let outcome = FileLoader::load_document(file)
            .and_then(|document| PatternValidator::validate_document(&document));
        match outcome {
            Ok(_) => println!("valid: {}", file.display()),
            Err(err) => {
                invalid += 1;
                println!("invalid: {}: {}", file.display(), err.message);
                tracing::warn!(file = %file.display(), category = %err.category, "{}", err.message);
            }
        }
    }

    if invalid > 0 {
        return Err(anyhow!(
            "{} of {} pattern files failed validation",
            invalid,
            args.files.len()
        ));
    }
    Ok(())
}

/// Layer CLI flags over the file and environment configuration.
fn resolve_config(config_path: Option<&Path>, args: &NormalizeArgs) -> Result<AppConfig> {
    let mut config = match config_path {
        Some(path) => ConfigLoader::load_from_path(path)?,
        None => ConfigLoader::load_from_workspace(&env::current_dir()?)?,
    };

    if let Some(framework) = &args.framework {
        config.extractor.framework = framework.clone();
    }
    if args.link_by_role {
        config.extractor.link_by_role = true;
    }
    if let Some(directory) = &args.output {
        config.output.directory = Some(directory.clone());
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if args.compact {
        config.output.pretty = false;
    }
    if args.no_recursive {
        config.discovery.recursive = false;
    }

    ConfigLoader::validate_config(&config)?;
    Ok(config)
}

/// Write one file per pattern named after its readable name. A name already
/// used in this run gets the pattern id appended.
fn write_patterns(
    directory: &Path,
    patterns: &[Pattern],
    format: OutputFormat,
    pretty: bool,
) -> Result<Vec<PathBuf>> {
    let mut used = HashSet::new();
    let mut written = Vec::with_capacity(patterns.len());

    for pattern in patterns {
        let stem = if used.insert(pattern.readable_name.clone()) {
            pattern.readable_name.clone()
        } else {
            format!("{}_{}", pattern.readable_name, pattern.id)
        };
        let path = directory.join(format!("{}.{}", stem, format.extension()));

        match format {
            OutputFormat::Json => {
                FileUtils.save_to_file(&path, pattern, &JsonSerializer { pretty })?
            }
            OutputFormat::Yaml => FileUtils.save_to_file(&path, pattern, &YamlSerializer)?,
        }
        tracing::debug!(pattern_id = %pattern.id, path = %path.display(), "wrote pattern");
        written.push(path);
    }
    Ok(written)
}

fn print_patterns(patterns: &[Pattern], format: OutputFormat, pretty: bool) -> Result<()> {
    let bytes = format.encode(&patterns, pretty)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&bytes)?;
    stdout.flush()?;
    Ok(())
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
