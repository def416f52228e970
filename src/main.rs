//! dllgen: generate a Unity `DllImport` class from annotated C headers.
//!
//! `dllgen mylib -f include/mylib.h --cpp-class Native --output-folder Assets/Plugins`

use anyhow::{bail, ensure, Context, Result};
use clap::Parser;
use dllgen::emit::{self, EmitOptions};
use dllgen::model::BindingModel;
use dllgen::parser;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing_subscriber::EnvFilter;

static RE_IDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

#[derive(Parser)]
#[command(
    name = "dllgen",
    about = "Generate Unity DllImport bindings from exported C header declarations"
)]
struct Cli {
    /// Native library name, without `lib` prefix or file extension
    lib_name: String,

    /// Header file to scan (repeatable, glob patterns supported).
    /// Declarations are emitted in the order the headers are given.
    #[arg(short = 'f', long = "hfile", required = true)]
    hfiles: Vec<String>,

    /// Name of the generated C# class
    #[arg(long = "cpp-class", alias = "cpp_class", default_value = "CppNative")]
    class_name: String,

    /// Folder the generated file is written to
    #[arg(long = "output-folder", alias = "output_folder", default_value = ".")]
    output_folder: PathBuf,

    /// Output format: csharp (default) or json
    #[arg(long, default_value = "csharp")]
    format: String,

    /// Macro that marks a declaration as exported
    #[arg(long, default_value = dllgen::DEFAULT_MARKER)]
    marker: String,

    /// Log parser decisions
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("dllgen=debug")
    } else {
        EnvFilter::new("dllgen=info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    ensure!(
        RE_IDENT.is_match(&cli.class_name),
        "invalid class name `{}`: must be a C# identifier",
        cli.class_name
    );
    ensure!(
        RE_IDENT.is_match(&cli.marker),
        "invalid marker `{}`: must be a C identifier",
        cli.marker
    );

    let emitter = emit::create_emitter(&cli.format)?;
    let headers = expand_headers(&cli.hfiles)?;

    // Parse everything before touching the output folder so a bad header
    // never leaves a partial binding behind.
    let mut model = BindingModel::default();
    for path in &headers {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let parsed = parser::parse_header(&text, &cli.marker)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        tracing::info!("{}: {} exported functions", path.display(), parsed.len());
        model.extend(parsed);
    }

    let options = EmitOptions {
        class_name: cli.class_name.clone(),
        lib_name: cli.lib_name.clone(),
    };
    let output = emitter.emit(&model, &options)?;

    fs::create_dir_all(&cli.output_folder).with_context(|| {
        format!(
            "failed to create output folder: {}",
            cli.output_folder.display()
        )
    })?;
    let out_path = output_path(&cli.output_folder, &cli.class_name, emitter.file_extension());
    fs::write(&out_path, &output)
        .with_context(|| format!("failed to write {}", out_path.display()))?;
    tracing::info!("wrote {}", out_path.display());

    Ok(())
}

/// `<folder>/<class>.<ext>`
fn output_path(folder: &Path, class_name: &str, ext: &str) -> PathBuf {
    folder.join(format!("{}.{}", class_name, ext))
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Expand `-f` arguments into header paths.
///
/// Argument order is kept; matches of a single glob are sorted. Plain paths
/// are passed through so a missing file fails with a read error.
fn expand_headers(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() || !is_glob(pattern) {
            files.push(path.to_path_buf());
            continue;
        }
        let mut matches: Vec<PathBuf> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        matches.sort();
        if matches.is_empty() {
            tracing::warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    if files.is_empty() {
        bail!("no header files to scan");
    }
    Ok(files)
}
