//! apidb - README to JSON database converter

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use apidb::{Database, load_readme, validate, write_database};

#[derive(Parser)]
#[command(name = "apidb")]
#[command(version, about = "Builds JSON resource databases from a README", long_about = None)]
#[command(after_help = "EXAMPLES:
    apidb                       Build db/ from ./README.md
    apidb -o out docs/APIS.md   Build out/ from docs/APIS.md
    apidb --check               Lint ./README.md without building")]
struct Cli {
    /// Input README file
    #[arg(value_name = "README", default_value = "README.md")]
    input: PathBuf,

    /// Output directory for resources.json and categories.json
    #[arg(short, long, value_name = "DIR", default_value = "db")]
    outdir: PathBuf,

    /// Lint the README instead of building
    #[arg(long)]
    check: bool,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.check {
        return check(&cli);
    }

    match build(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn build(cli: &Cli) -> apidb::Result<()> {
    let db = Database::from_file(&cli.input)?;
    write_database(&db, &cli.outdir)?;
    if !cli.quiet {
        println!(
            "{}: {} entries in {} categories -> {}",
            cli.input.display(),
            db.resources.len(),
            db.categories.len(),
            cli.outdir.display()
        );
    }
    Ok(())
}

fn check(cli: &Cli) -> ExitCode {
    let text = match load_readme(&cli.input) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let messages = validate::check_readme(&text);
    if messages.is_empty() {
        if !cli.quiet {
            println!("{}: OK", cli.input.display());
        }
        ExitCode::SUCCESS
    } else {
        for message in &messages {
            println!("{message}");
        }
        ExitCode::FAILURE
    }
}
