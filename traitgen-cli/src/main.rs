//! traitgen CLI - republish concrete PHP classes as traits of abstract methods.
//!
//! Features:
//! - Static analysis of `*.php` sources (no PHP runtime required)
//! - JSON descriptor dumps as an alternative reflection source
//! - Rayon-powered parallel compilation of several types
//! - `traitgen.toml` defaults merged with command-line flags

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use traitgen_core::{
    init_structured_logging, load_config, load_config_file, log_error, log_warn, print_json,
    print_summary, Compiler, InMemoryIntrospector, PhpSourceIntrospector, Traitgen,
    TraitgenConfig, TypeIntrospector,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate an abstract-method PHP trait from a concrete class")]
pub struct Cli {
    /// Fully qualified names of the source types
    #[arg(required = true)]
    types: Vec<String>,

    /// Namespace of the generated traits
    #[arg(short, long)]
    namespace: Option<String>,

    /// Files or directories scanned for PHP sources
    #[arg(short, long, num_args = 1..)]
    source: Vec<PathBuf>,

    /// Read type descriptors from a JSON dump instead of PHP sources
    #[arg(long, value_name = "FILE", conflicts_with = "source")]
    metadata: Option<PathBuf>,

    /// Method names never transcribed (the constructor is always excluded)
    #[arg(short, long, num_args = 1..)]
    blacklist: Vec<String>,

    /// Write the generated trait to a file instead of stdout
    #[arg(short, long, conflicts_with = "output_dir")]
    output: Option<String>,

    /// Write one `<TraitName>.php` file per type into a directory
    #[arg(long)]
    output_dir: Option<String>,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,

    /// Explicit configuration file (defaults to ./traitgen.toml when present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

/// Effective settings after merging flags over configuration.
#[derive(Debug, Default, PartialEq)]
struct Settings {
    namespace: String,
    blacklist: Vec<String>,
    sources: Vec<PathBuf>,
    exclude_dirs: Vec<String>,
    output_dir: Option<String>,
    json: bool,
}

impl Settings {
    fn merge(cli: &Cli, config: &TraitgenConfig) -> Self {
        let output = config.output.as_ref();
        if let Some(format) = output.and_then(|o| o.format.as_deref()) {
            if !format.eq_ignore_ascii_case("json") && !format.eq_ignore_ascii_case("php") {
                log_warn(&format!("Unknown output format in config: {}", format));
            }
        }

        let sources = if !cli.source.is_empty() {
            cli.source.clone()
        } else {
            config
                .sources
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| vec![PathBuf::from(".")])
        };

        let config_dir = output
            .and_then(|o| o.directory.as_ref())
            .map(|d| d.to_string_lossy().into_owned());

        Self {
            namespace: cli
                .namespace
                .clone()
                .or_else(|| config.namespace.clone())
                .unwrap_or_default(),
            blacklist: cli
                .blacklist
                .iter()
                .chain(config.blacklist.iter().flatten())
                .cloned()
                .collect(),
            sources,
            exclude_dirs: config.exclude_dirs.clone().unwrap_or_default(),
            output_dir: cli.output_dir.clone().or(if cli.output.is_none() { config_dir } else { None }),
            json: cli.json || config.wants_json(),
        }
    }
}

/// Security: Validates output file paths to prevent path traversal attacks.
///
/// Rejects:
/// - Absolute paths (must be relative to current directory)
/// - Paths containing `..` (parent directory traversal)
/// - Paths with null bytes (injection attacks)
fn validate_output_path(path: &str) -> Result<PathBuf> {
    if path.contains('\0') {
        return Err(anyhow!("Output path contains null bytes"));
    }

    let p = PathBuf::from(path);

    if p.is_absolute() {
        return Err(anyhow!("Output path must be relative, not absolute: {}", path));
    }

    if p.components().any(|c| matches!(c, std::path::Component::ParentDir)) {
        return Err(anyhow!("Path traversal (..) not allowed in output paths: {}", path));
    }

    Ok(p)
}

fn resolve_config(explicit: Option<&Path>) -> Result<TraitgenConfig> {
    match explicit {
        Some(path) => load_config_file(path),
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            Ok(load_config(&cwd)?.unwrap_or_default())
        }
    }
}

fn build_introspector(
    metadata: Option<&Path>,
    settings: &Settings,
) -> Result<Box<dyn TypeIntrospector + Sync>> {
    if let Some(path) = metadata {
        let introspector = InMemoryIntrospector::from_json_file(path)?;
        return Ok(Box::new(introspector));
    }

    let excludes: Vec<&str> = settings.exclude_dirs.iter().map(String::as_str).collect();
    let introspector = PhpSourceIntrospector::from_paths_with_excludes(settings.sources.as_slice(), &excludes)?;
    if introspector.is_empty() {
        log_warn("No PHP type declarations found in the scanned sources");
    }
    Ok(Box::new(introspector))
}

/// Compiles every requested type in parallel, preserving request order.
fn compile_all(
    types: &[String],
    introspector: &(dyn TypeIntrospector + Sync),
    settings: &Settings,
) -> (Vec<Compiler>, usize) {
    let results: Vec<_> = types
        .par_iter()
        .map(|name| {
            let result = Traitgen::new(name.as_str())
                .namespace(settings.namespace.as_str())
                .blacklist(settings.blacklist.iter().cloned())
                .compile(introspector);
            (name, result)
        })
        .collect();

    let mut compilers = Vec::with_capacity(results.len());
    let mut failures = 0;
    for (name, result) in results {
        match result {
            Ok(compiler) => compilers.push(compiler),
            Err(e) => {
                log_error(&format!("{}: {}", name, e));
                eprintln!("[ERROR] {}", e);
                failures += 1;
            }
        }
    }
    (compilers, failures)
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

fn emit(cli: &Cli, settings: &Settings, compilers: &[Compiler]) -> Result<()> {
    if settings.json {
        print_json(compilers);
        return Ok(());
    }

    if let Some(ref file) = cli.output {
        if compilers.len() > 1 {
            bail!("--output accepts a single type; use --output-dir for several");
        }
        let safe_path = validate_output_path(file)?;
        for compiler in compilers {
            write_output(&safe_path, &compiler.export_as_abstract_methods())?;
        }
    } else if let Some(ref dir) = settings.output_dir {
        let safe_dir = validate_output_path(dir)?;
        for compiler in compilers {
            let path = safe_dir.join(format!("{}.php", compiler.unit().name()));
            write_output(&path, &compiler.export_as_abstract_methods())?;
        }
    } else {
        for compiler in compilers {
            print!("{}", compiler.export_as_abstract_methods());
        }
        return Ok(());
    }

    let units: Vec<_> = compilers.iter().map(Compiler::unit).collect();
    print_summary(&units);
    Ok(())
}

fn main() -> Result<()> {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("[PANIC] traitgen internal error: {}", info);
        eprintln!("[PANIC] The process will exit with code 101.");
    }));

    // JSON to stderr, respects RUST_LOG
    init_structured_logging();

    let cli = Cli::parse();
    let config = resolve_config(cli.config.as_deref())?;
    let settings = Settings::merge(&cli, &config);

    let introspector = build_introspector(cli.metadata.as_deref(), &settings)?;
    let (compilers, failures) = compile_all(&cli.types, introspector.as_ref(), &settings);

    emit(&cli, &settings, &compilers)?;

    if failures > 0 {
        bail!("{} of {} type(s) failed to compile", failures, cli.types.len());
    }
    Ok(())
}
