//! Quatrain CLI — rhyme grouping and ABAB poem composition.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use quatrain_core::compose::compose;
use quatrain_core::lexicon::{Lexicon, locate_and_load};
use quatrain_core::partition::partition;
use quatrain_core::rhyme::rhymes_of;
use quatrain_core::sentence::read_sentences;
use quatrain_core::types::RhymeGroup;

// ─── Top-level CLI ───────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "quatrain",
    about = "Compose ABAB poems from sentences with rhyming endings",
    version,
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compose a four-line ABAB poem from a sentence list
    Poem(PoemArgs),
    /// Show the rhyme groups found in a sentence list
    Groups(GroupsArgs),
    /// List dictionary words that rhyme with a word
    Rhymes(RhymesArgs),
}

// ─── Shared arguments (embedded in each subcommand) ──────────────

#[derive(Parser, Debug)]
struct SharedArgs {
    /// Pronunciation dictionary file (default: search QUATRAIN_DICT, then
    /// known locations)
    #[arg(long)]
    dict: Option<PathBuf>,

    /// Emit JSON instead of plain text
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Show verbose output
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

// ─── Poem ────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Compose a four-line ABAB poem from a sentence list")]
struct PoemArgs {
    #[command(flatten)]
    shared: SharedArgs,

    /// File with one sentence per line
    sentences: PathBuf,

    /// RNG seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

// ─── Groups ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Show the rhyme groups found in a sentence list")]
struct GroupsArgs {
    #[command(flatten)]
    shared: SharedArgs,

    /// File with one sentence per line
    sentences: PathBuf,
}

// ─── Rhymes ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "List dictionary words that rhyme with a word")]
struct RhymesArgs {
    #[command(flatten)]
    shared: SharedArgs,

    /// Word to look up
    word: String,
}

// ─── Main ────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    // Init logging
    let log_level = match &cli.command {
        Command::Poem(a) if a.shared.verbose => "debug",
        Command::Groups(a) if a.shared.verbose => "debug",
        Command::Rhymes(a) if a.shared.verbose => "debug",
        _ => "info",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let result = match cli.command {
        Command::Poem(args) => run_poem(args),
        Command::Groups(args) => run_groups(args),
        Command::Rhymes(args) => run_rhymes(args),
    };

    if let Err(e) = result {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

// ─── Helpers ─────────────────────────────────────────────────────

/// Load the pronunciation dictionary, explicit path first.
fn load_lexicon(dict: Option<&Path>) -> Result<Lexicon> {
    let lexicon = locate_and_load(dict)?;
    log::info!(
        "Dictionary: {} words, {} pronunciations",
        lexicon.len(),
        lexicon.pronunciation_count()
    );
    Ok(lexicon)
}

/// Read the sentence list, one sentence per line.
fn load_sentences(path: &Path) -> Result<Vec<String>> {
    let sentences = read_sentences(path)
        .with_context(|| format!("Failed to read sentences from {}", path.display()))?;
    if sentences.is_empty() {
        bail!("No sentences in {}", path.display());
    }
    log::info!("Read {} sentence(s) from {}", sentences.len(), path.display());
    Ok(sentences)
}

/// Partition sentences into rhyme groups, logging the outcome.
fn find_groups(sentences: &[String], lexicon: &Lexicon) -> Vec<RhymeGroup> {
    let groups = partition(sentences, lexicon);
    log::info!("Found {} rhyme group(s)", groups.len());
    groups
}

// ─── Poem runner ─────────────────────────────────────────────────

fn run_poem(args: PoemArgs) -> Result<()> {
    let lexicon = load_lexicon(args.shared.dict.as_deref())?;
    let sentences = load_sentences(&args.sentences)?;
    let groups = find_groups(&sentences, &lexicon);

    let poem = compose(&groups, args.seed)?;

    if args.shared.json {
        println!("{}", serde_json::to_string_pretty(&poem)?);
    } else {
        println!("{}", poem);
    }
    Ok(())
}

// ─── Groups runner ───────────────────────────────────────────────

fn run_groups(args: GroupsArgs) -> Result<()> {
    let lexicon = load_lexicon(args.shared.dict.as_deref())?;
    let sentences = load_sentences(&args.sentences)?;
    let groups = find_groups(&sentences, &lexicon);

    if args.shared.json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    if groups.is_empty() {
        println!("No rhyme groups found");
        return Ok(());
    }
    for (i, group) in groups.iter().enumerate() {
        println!("Group {} ({} sentences):", i + 1, group.len());
        for sentence in &group.sentences {
            println!("  {}", sentence);
        }
    }
    Ok(())
}

// ─── Rhymes runner ───────────────────────────────────────────────

fn run_rhymes(args: RhymesArgs) -> Result<()> {
    let lexicon = load_lexicon(args.shared.dict.as_deref())?;

    let word = args.word.to_lowercase();
    let mut rhymes: Vec<String> = rhymes_of(&word, &lexicon)
        .into_iter()
        .filter(|w| *w != word)
        .collect();
    rhymes.sort();

    if args.shared.json {
        println!("{}", serde_json::to_string_pretty(&rhymes)?);
        return Ok(());
    }

    if rhymes.is_empty() {
        println!("No rhymes found for {:?}", args.word);
        return Ok(());
    }
    for rhyme in &rhymes {
        println!("{}", rhyme);
    }
    Ok(())
}
