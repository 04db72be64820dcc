//! Developer CLI for Notigen: feed a descriptor manifest in, get one
//! generated source file per containing type out.

use clap::{Parser, Subcommand};
use notigen_build::Expansion;
use notigen_schema::manifest::Manifest;
use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};
use thiserror::Error as ThisError;

///
/// Error
///

#[derive(Debug, ThisError)]
enum Error {
    #[error("cannot read manifest {path}: {source}")]
    ReadManifest {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("manifest {path} is not valid JSON: {source}")]
    ParseManifest {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("cannot write {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}

///
/// Cli
///

#[derive(Debug, Parser)]
#[command(
    name = "notigen",
    about = "Descriptor-driven source generator for observable C# properties",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run a generation pass and write one file per containing type.
    Generate {
        /// Descriptor manifest (JSON).
        manifest: PathBuf,

        /// Directory the generated files are written to.
        #[arg(long, default_value = "generated")]
        out_dir: PathBuf,
    },

    /// Run a generation pass and report diagnostics without writing files.
    Check {
        /// Descriptor manifest (JSON).
        manifest: PathBuf,
    },
}

fn main() -> ExitCode {
    match run(&Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, Error> {
    match &cli.command {
        Command::Generate { manifest, out_dir } => generate(manifest, out_dir),
        Command::Check { manifest } => check(manifest),
    }
}

fn generate(path: &Path, out_dir: &Path) -> Result<ExitCode, Error> {
    let manifest = load_manifest(path)?;
    let expansion = notigen_build::generate(&manifest);

    fs::create_dir_all(out_dir).map_err(|source| Error::WriteOutput {
        path: out_dir.to_path_buf(),
        source,
    })?;

    for file in expansion.files() {
        let target = out_dir.join(&file.name);
        fs::write(&target, &file.source).map_err(|source| Error::WriteOutput {
            path: target.clone(),
            source,
        })?;

        println!("wrote {}", target.display());
    }

    report(&expansion);
    Ok(ExitCode::SUCCESS)
}

fn check(path: &Path) -> Result<ExitCode, Error> {
    let manifest = load_manifest(path)?;
    let expansion = notigen_build::generate(&manifest);

    report(&expansion);

    if expansion.has_errors() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn load_manifest(path: &Path) -> Result<Manifest, Error> {
    let text = fs::read_to_string(path).map_err(|source| Error::ReadManifest {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| Error::ParseManifest {
        path: path.to_path_buf(),
        source,
    })
}

fn report(expansion: &Expansion) {
    for diag in &expansion.diagnostics {
        match &diag.location {
            Some(location) => eprintln!("{diag} ({location})"),
            None => eprintln!("{diag}"),
        }
    }
}
