use clap::Parser;
use priosort::avl::AvlTree;
use priosort::cli::args::Cli;
use priosort::cli::output;
use priosort::cli::prompt::{Choice, PairPrompt};
use priosort::errors::SortResult;
use priosort::input::read_items;
use std::io;
use std::process;
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    if let Err(e) = run(&cli) {
        output::error(&e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> SortResult<()> {
    let items = read_items(&cli.file)?;
    debug!(num_items = items.len(), "loaded input");

    let stdin = io::stdin();
    let mut prompt = PairPrompt::new(stdin.lock(), io::stdout());
    let mut comparisons = 0u32;

    let mut tree = AvlTree::new();
    for item in items {
        tree.insert(item, |a: &String, b: &String| {
            comparisons += 1;
            // The prompt asks for the *higher* priority item while the tree
            // wants "sorts before": answering "a" files `a` earlier, so the
            // in-order traversal runs from highest priority to lowest.
            match prompt.choose(a, b) {
                Ok(Choice::First) => true,
                Ok(Choice::Second) => false,
                Err(e) => {
                    output::error(&e);
                    process::exit(1);
                }
            }
        });
    }
    debug!(
        len = tree.len(),
        height = tree.height(),
        comparisons,
        "sorting finished"
    );

    prompt.pause("\nYou're done sorting! Hit enter for the output (highest priority to lowest)")?;

    output::header("Priorities, highest first:");
    tree.traverse(|item| output::info(item));

    if cli.dump {
        println!();
        let stdout = io::stdout();
        tree.dump(&mut stdout.lock())?;
    }
    Ok(())
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // Logs go to stderr so they never mix with prompts or sorted output
    let fmt_layer = fmt::layer().with_writer(io::stderr).with_target(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}
