use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glob::glob;

use glyphsmith_core::convert;
use glyphsmith_core::formats::bmp::layout::{MONO_64X64_HEADER, MONO_HEADER_BYTES};
use glyphsmith_core::raster::RasterConfig;
use glyphsmith_core::{ArtifactSummary, Manifest, make_stub_manifest};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GLYPHSMITH_BUILD_COMMIT"),
    " ",
    env!("GLYPHSMITH_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "glyphsmith")]
#[command(version)]
#[command(long_version = LONG_VERSION)]
#[command(
    about = "Converter between firmware glyph byte arrays and monochrome bitmap files.",
    long_about = None,
    after_help = "Examples:\n  glyphsmith bitmap export 'gen/*.c' -o bmp\n  glyphsmith bitmap embed 'bmp/*.bmp' -o gen\n  glyphsmith glyphs compose --spec doc/spec.txt --stdout"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Conversions between embedded byte arrays and bitmap files.
    Bitmap {
        #[command(subcommand)]
        command: BitmapCommands,
    },
    /// Operations driven by the glyph spec file.
    Glyphs {
        #[command(subcommand)]
        command: GlyphsCommands,
    },
}

#[derive(Subcommand, Debug)]
enum BitmapCommands {
    /// Export every byte-array declaration in the input as a .bmp file.
    #[command(
        after_help = "Examples:\n  glyphsmith bitmap export gen/left_arrow.c -o bmp\n  glyphsmith bitmap export 'gen/*.c' -o bmp --manifest manifest.json"
    )]
    Export {
        /// Path or glob of firmware source files (.c)
        input: PathBuf,

        /// Output directory for .bmp files
        #[arg(short = 'o', long)]
        out_dir: PathBuf,

        /// Write a JSON manifest of the written artifacts
        #[arg(long, conflicts_with = "stdout")]
        manifest: Option<PathBuf>,

        /// Write the JSON manifest to stdout
        #[arg(long)]
        stdout: bool,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },

    /// Rebuild embedded literal declarations from .bmp files.
    Embed {
        /// Path or glob of bitmap files (.bmp)
        input: PathBuf,

        /// Output directory for .c files
        #[arg(short = 'o', long)]
        out_dir: PathBuf,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
}

#[derive(Subcommand, Debug)]
enum GlyphsCommands {
    /// Provision a placeholder bitmap for every spec entry lacking one.
    Template {
        /// Path to the glyph spec file
        #[arg(long)]
        spec: PathBuf,

        /// Placeholder bitmap to copy
        #[arg(long)]
        template: PathBuf,

        /// Output directory for provisioned bitmaps
        #[arg(short = 'o', long)]
        out_dir: PathBuf,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },

    /// Emit the four-key compose mapping for every spec entry.
    Compose {
        /// Path to the glyph spec file
        #[arg(long)]
        spec: PathBuf,

        /// Output file path
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        output: Option<PathBuf>,

        /// Write the compose document to stdout
        #[arg(long, conflicts_with = "output")]
        stdout: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Bitmap { command } => match command {
            BitmapCommands::Export {
                input,
                out_dir,
                manifest,
                stdout,
                pretty,
                compact,
                quiet,
            } => cmd_bitmap_export(input, out_dir, manifest, stdout, pretty, compact, quiet),
            BitmapCommands::Embed {
                input,
                out_dir,
                quiet,
            } => cmd_bitmap_embed(input, out_dir, quiet),
        },
        Commands::Glyphs { command } => match command {
            GlyphsCommands::Template {
                spec,
                template,
                out_dir,
                quiet,
            } => cmd_glyphs_template(spec, template, out_dir, quiet),
            GlyphsCommands::Compose {
                spec,
                output,
                stdout,
                quiet,
            } => cmd_glyphs_compose(spec, output, stdout, quiet),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

fn cmd_bitmap_export(
    input: PathBuf,
    out_dir: PathBuf,
    manifest_path: Option<PathBuf>,
    stdout: bool,
    pretty: bool,
    compact: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let inputs = resolve_inputs(&input, "c")?;

    let mut merged = make_stub_manifest(&input.to_string_lossy(), 0);
    let mut failures: Vec<String> = Vec::new();

    for path in &inputs {
        match convert::export_bitmaps(
            path,
            &out_dir,
            RasterConfig::MONO_64X64,
            &MONO_64X64_HEADER,
        ) {
            Ok(outcome) => {
                merged.input.bytes += outcome.manifest.input.bytes;
                if outcome.manifest.generated_at > merged.generated_at {
                    merged.generated_at = outcome.manifest.generated_at.clone();
                }
                for failure in &outcome.failures {
                    failures.push(format!("{}: {}", failure.name, failure.error));
                }
                for artifact in &outcome.manifest.artifacts {
                    if !quiet {
                        eprintln!("OK: {} -> {}", artifact.name, artifact.path);
                    }
                }
                merged.artifacts.extend(outcome.manifest.artifacts);
            }
            Err(err) => failures.push(format!("{}: {}", path.display(), err)),
        }
    }
    merged.artifacts.sort_by(|a, b| a.name.cmp(&b.name));

    if stdout {
        print!("{}", serialize_manifest(&merged, pretty, compact)?);
    } else if let Some(manifest_path) = manifest_path {
        write_manifest(&merged, &manifest_path, pretty, compact, quiet)?;
    }

    finish_batch(failures, merged.artifacts.len())
}

fn cmd_bitmap_embed(input: PathBuf, out_dir: PathBuf, quiet: bool) -> Result<(), CliError> {
    let inputs = resolve_inputs(&input, "bmp")?;

    let mut written: Vec<ArtifactSummary> = Vec::new();
    let mut failures: Vec<String> = Vec::new();

    for path in &inputs {
        match convert::embed_bitmap(path, &out_dir, RasterConfig::MONO_64X64, MONO_HEADER_BYTES) {
            Ok(artifact) => {
                if !quiet {
                    eprintln!("OK: {} -> {}", artifact.name, artifact.path);
                }
                written.push(artifact);
            }
            Err(err) => failures.push(format!("{}: {}", path.display(), err)),
        }
    }

    finish_batch(failures, written.len())
}

fn cmd_glyphs_template(
    spec: PathBuf,
    template: PathBuf,
    out_dir: PathBuf,
    quiet: bool,
) -> Result<(), CliError> {
    validate_input_file(&spec, "txt")?;
    if !template.exists() {
        return Err(CliError::new(
            format!("template file not found: {}", template.display()),
            Some("point --template at the placeholder .bmp".to_string()),
        ));
    }

    let manifest = convert::provision_templates(&spec, &template, &out_dir).map_err(|err| {
        CliError::new(
            format!("template provisioning failed: {}", err),
            Some("check the spec entries and the output directory".to_string()),
        )
    })?;

    if !quiet {
        for artifact in &manifest.artifacts {
            eprintln!("OK: {} -> {}", artifact.name, artifact.path);
        }
        eprintln!("OK: {} placeholder(s) provisioned", manifest.artifacts.len());
    }
    Ok(())
}

fn cmd_glyphs_compose(
    spec: PathBuf,
    output: Option<PathBuf>,
    stdout: bool,
    quiet: bool,
) -> Result<(), CliError> {
    validate_input_file(&spec, "txt")?;

    let compose = convert::compose_from_spec(&spec).map_err(|err| {
        CliError::new(
            format!("compose generation failed: {}", err),
            Some("fix the offending spec entry and re-run".to_string()),
        )
    })?;

    if stdout {
        print!("{}", compose);
        return Ok(());
    }

    let output = output.ok_or_else(|| {
        CliError::new(
            "missing output path",
            Some("use -o/--output or --stdout".to_string()),
        )
    })?;
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(&output, compose)
        .with_context(|| format!("Failed to write compose file: {}", output.display()))?;
    if !quiet {
        eprintln!("OK: compose written -> {}", output.display());
    }
    Ok(())
}

fn finish_batch(failures: Vec<String>, written: usize) -> Result<(), CliError> {
    if failures.is_empty() {
        return Ok(());
    }
    for failure in &failures {
        eprintln!("error: {}", failure);
    }
    Err(CliError::new(
        format!(
            "{} artifact(s) failed, {} written",
            failures.len(),
            written
        ),
        Some("fix the source data and re-run".to_string()),
    ))
}

fn serialize_manifest(
    manifest: &Manifest,
    pretty: bool,
    compact: bool,
) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(manifest)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(manifest)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn write_manifest(
    manifest: &Manifest,
    path: &PathBuf,
    pretty: bool,
    compact: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let json = serialize_manifest(manifest, pretty, compact)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(path, json).with_context(|| format!("Failed to write manifest: {}", path.display()))?;
    if !quiet {
        eprintln!("OK: manifest written -> {}", path.display());
    }
    Ok(())
}

fn validate_input_file(input: &PathBuf, extension: &str) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some(format!("use a .{} file", extension)),
        ));
    }
    let ext = input
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if ext != extension {
        return Err(CliError::new(
            format!("unsupported input format '{}'", input.display()),
            Some(format!("expected a .{} file", extension)),
        ));
    }
    Ok(())
}

fn resolve_inputs(input: &PathBuf, extension: &str) -> Result<Vec<PathBuf>, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        validate_input_file(input, extension)?;
        return Ok(vec![input.clone()]);
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some(format!(
                "check the path or quote the pattern; expected .{} files",
                extension
            )),
        ));
    }
    matches.sort();
    Ok(matches)
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
