//! Basic Sonnet Search
//!
//! Search three sonnets for a word and print the ranked, highlighted report.
//!
//! ```bash
//! cargo run --example basic_search -- love
//! ```

use stanza::{corpus, Configuration, SearchMode, Searcher};

fn main() -> stanza::Result<()> {
    let query = std::env::args().nth(1).unwrap_or_else(|| "love".to_string());
    let sonnets = corpus::from_json(include_str!("sonnets.json"))?;

    // Whole query as one pattern
    let config = Configuration::default();
    Searcher::new(&sonnets, &config).search(&query)?.print()?;

    // Each word on its own; a sonnet must contain all of them
    let config = Configuration {
        search_mode: SearchMode::And,
        max_results: Some(2),
        ..Configuration::default()
    };
    println!();
    Searcher::new(&sonnets, &config)
        .search("mistress eyes")?
        .print()?;

    Ok(())
}
