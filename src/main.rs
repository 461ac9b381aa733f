//! Command-line front end for the interface generators.
//!
//! Loads one interface description and drives the requested generators
//! sequentially. Each generator owns its output file exclusively, so the
//! order of generation does not matter.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use idlgen::{GenOptions, Library, assembly, inline, structure};

#[derive(Parser, Debug)]
#[command(name = "idlgen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generates interface headers from an interface description", long_about = None)]
#[command(after_help = "Example:\n  idlgen -i -s -n -f -o sdk exec.xml")]
struct Args {
    /// Interface description input file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Generate the interface structure header
    #[arg(short = 'i', long)]
    interfaces: bool,

    /// Generate the assembler include file
    #[arg(short = 's', long = "asm")]
    asm: bool,

    /// Generate the inline macro header
    #[arg(short = 'n', long)]
    inline: bool,

    /// Do not generate private methods in interfaces
    #[arg(short = 'f', long = "no-private")]
    no_private: bool,

    /// Output directory (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    outdir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if !(args.interfaces || args.asm || args.inline) {
        bail!("nothing to generate: pass at least one of --interfaces, --asm, --inline");
    }

    let library = Library::load(&args.file)
        .with_context(|| format!("cannot load interface description {}", args.file.display()))?;

    let opts = GenOptions {
        suppress_private: args.no_private,
    };
    let outdir = match args.outdir {
        Some(dir) => dir,
        None => std::env::current_dir().context("cannot determine current directory")?,
    };

    if args.interfaces {
        let path = structure::write_structure(&library, &opts, &outdir)?;
        println!("wrote {}", path.display());
    }
    if args.asm {
        let path = assembly::write_assembly(&library, &opts, &outdir)?;
        println!("wrote {}", path.display());
    }
    if args.inline {
        let path = inline::write_inline(&library, &opts, &outdir)?;
        println!("wrote {}", path.display());
    }

    Ok(())
}
