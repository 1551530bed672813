use std::{error::Error, io, path::PathBuf};

use clap::Parser;
use colored::Colorize;
use library_catalog::{LendLogger, Library, UserId, menu, seed};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the library catalog
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file of books to load instead of the three sample books
    #[arg(long, value_name = "FILE")]
    seed: Option<PathBuf>,

    /// Id of the library user
    #[arg(long, default_value_t = 1)]
    user_id: UserId,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.no_color {
        colored::control::set_override(false);
    }

    let records = match &args.seed {
        Some(path) => seed::load_records(path)?,
        None => seed::sample_records(),
    };

    let mut library = Library::new(args.user_id);
    library.register_observer(Box::new(LendLogger));
    seed::populate(&mut library, &records)?;

    println!("{}", "Library Catalog".green().bold());
    menu::run(&mut library, io::stdin().lock(), &mut io::stdout())?;
    Ok(())
}

/// Send logs to stderr, filtered by `RUST_LOG` or `--verbose`
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}
