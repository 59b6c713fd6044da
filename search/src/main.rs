use anyhow::Result;
use clap::Parser;
use ir_search::cli::Args;
use ir_search::{OutputFormat, Session};
use std::io;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let config = args.index_config()?;

    eprintln!("Please wait while the documents get indexed...");
    let format = if args.json { OutputFormat::Json } else { OutputFormat::Text };
    let session = Session::open(args.collection.clone(), config, args.shards)?
        .with_mode(args.mode.into())
        .with_format(format);
    eprintln!("Done");

    let stdout = io::stdout();
    match &args.query {
        Some(query) => {
            let results = session.search(query, args.top);
            session.write_results(&mut stdout.lock(), &results)
        }
        None => session.run(io::stdin().lock(), stdout.lock()),
    }
}
