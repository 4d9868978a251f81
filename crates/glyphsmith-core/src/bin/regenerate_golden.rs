use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use glyphsmith_core::DEFAULT_GENERATED_AT;
use glyphsmith_core::convert::{compose_from_spec, export_bitmaps};
use glyphsmith_core::formats::bmp::layout::MONO_64X64_HEADER;
use glyphsmith_core::raster::RasterConfig;

fn main() -> ExitCode {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), String> {
    let root = PathBuf::from("tests").join("golden");
    let entries =
        fs::read_dir(&root).map_err(|err| format!("failed to read {}: {}", root.display(), err))?;

    for entry in entries {
        let entry = entry.map_err(|err| format!("failed to read entry: {}", err))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let input = path.join("input.c");
        if input.exists() {
            regenerate_bitmaps(&input, &path)?;
        }
        let spec = path.join("spec.txt");
        if spec.exists() {
            regenerate_compose(&spec, &path)?;
        }
    }

    Ok(())
}

fn regenerate_bitmaps(input: &Path, dir: &Path) -> Result<(), String> {
    let mut outcome = export_bitmaps(input, dir, RasterConfig::MONO_64X64, &MONO_64X64_HEADER)
        .map_err(|err| format!("export failed for {}: {}", input.display(), err))?;
    if let Some(failure) = outcome.failures.first() {
        return Err(format!(
            "export failed for '{}' in {}: {}",
            failure.name,
            input.display(),
            failure.error
        ));
    }

    outcome.manifest.generated_at = DEFAULT_GENERATED_AT.to_string();
    let json = serde_json::to_string_pretty(&outcome.manifest)
        .map_err(|err| format!("JSON serialization failed: {}", err))?;
    let output = dir.join("expected_manifest.json");
    fs::write(&output, json)
        .map_err(|err| format!("failed to write {}: {}", output.display(), err))?;
    Ok(())
}

fn regenerate_compose(spec: &Path, dir: &Path) -> Result<(), String> {
    let compose = compose_from_spec(spec)
        .map_err(|err| format!("compose failed for {}: {}", spec.display(), err))?;
    let output = dir.join("expected_compose.txt");
    fs::write(&output, compose)
        .map_err(|err| format!("failed to write {}: {}", output.display(), err))?;
    Ok(())
}
