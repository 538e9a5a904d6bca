use std::{path::PathBuf, process, thread, time::Duration};

use clap::Parser;
use hotprops::{AccessError, Reader};

/// hotprops loads a properties file and prints its values. With `--watch` it
/// keeps the file loaded and reprints whenever it changes.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The properties file to load.
    file: PathBuf,

    /// Print only this property. May be repeated.
    #[arg(short, long = "get", value_name = "NAME")]
    names: Vec<String>,

    /// Poll the file for changes and reprint after every successful reload.
    #[arg(short, long)]
    watch: bool,

    /// Poll interval used by `--watch`, in milliseconds.
    #[arg(long, default_value_t = 250)]
    interval_ms: u64,

    /// Log at debug level (overrides `RUST_LOG`).
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if args.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let mut reader = Reader::new(args.file.clone()).unwrap_or_else(|e| {
                                                 eprintln!("{e}");
                                                 process::exit(1);
                                             });

    if let Err(e) = print_properties(&reader, &args.names) {
        eprintln!("{e}");
        if !args.watch {
            process::exit(1);
        }
    }

    if !args.watch {
        return;
    }

    loop {
        thread::sleep(Duration::from_millis(args.interval_ms));
        match reader.update_changes() {
            Ok(true) => {
                println!();
                if let Err(e) = print_properties(&reader, &args.names) {
                    eprintln!("{e}");
                }
            },
            Ok(false) => {},
            Err(e) => log::error!("{e}"),
        }
    }
}

/// Prints `TYPE name = value` lines, sorted by name, for every property or
/// only for the requested ones.
fn print_properties(reader: &Reader, names: &[String]) -> Result<(), AccessError> {
    if names.is_empty() {
        let mut all: Vec<_> = reader.bindings().iter().collect();
        all.sort_by(|a, b| a.0.cmp(b.0));
        for (name, value) in all {
            println!("{} {name} = {value}", value.kind());
        }
        return Ok(());
    }

    for name in names {
        let value = reader.get_value(name)?;
        println!("{} {name} = {value}", value.kind());
    }
    Ok(())
}
