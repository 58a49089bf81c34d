//! `stanza`: search a sonnet corpus from the command line.
//!
//! With `--query` the ranked report is printed once; otherwise an
//! interactive prompt reads queries and `:` commands from stdin.

use std::io;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use stanza::{corpus, Configuration, Searcher};

mod cli;
mod repl;

use cli::Cli;
use repl::Session;

fn main() {
    let cli = Cli::parse();
    cli::init_tracing(&cli);

    if let Err(e) = run(&cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = Configuration::load_or_default(&cli.config);
    cli.apply_overrides(&mut config);

    let started = Instant::now();
    let sonnets = corpus::load(&cli.corpus)
        .with_context(|| format!("loading corpus from {}", cli.corpus.display()))?;
    let load_ms = started.elapsed().as_secs_f64() * 1000.0;

    if let Some(query) = &cli.query {
        Searcher::new(&sonnets, &config).search(query)?.print()?;
        return Ok(());
    }

    println!("{}", repl::BANNER);
    println!("Loading sonnets took: {load_ms:.3} [ms]");
    println!("Loaded {} sonnets.", sonnets.len());

    let mut out = io::stdout().lock();
    let mut session = Session::new(&sonnets, config, cli.config.clone());
    session.run(io::stdin().lock(), &mut out)
}
