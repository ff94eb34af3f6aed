use anyhow::Context;
use clap::Parser;
use letter_trie::PrefixTree;
use tracing::{debug, info, Level};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Inserts words into a prefix tree and reports word and prefix lookups."
)]
struct Cli {
    /// Words to insert, separated by commas.
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_values_t = ["apple", "application", "banana"].map(String::from),
    )]
    words: Vec<String>,

    /// Queries to look up, both as whole words and as prefixes.
    #[arg(
        value_name = "QUERY",
        default_values_t = ["apple", "app", "application", "banana", "ban", "orange"].map(String::from),
    )]
    queries: Vec<String>,

    /// Log every insert.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::TRACE } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let mut tree = PrefixTree::new();
    for word in &cli.words {
        let is_new = tree
            .insert(word)
            .with_context(|| format!("cannot insert {word:?}"))?;
        debug!(%word, is_new, "inserted");
    }
    info!(words = tree.len(), nodes = tree.node_count(), "built prefix tree");

    for query in &cli.queries {
        println!("search({query:?}) = {}", tree.search(query));
        println!("starts_with({query:?}) = {}", tree.starts_with(query));

        for word in tree.words_with_prefix(query) {
            println!("    {word}");
        }
    }

    Ok(())
}
