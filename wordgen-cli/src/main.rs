use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use wordgen_core::model::frequency::FrequencyModel;
use wordgen_core::model::generator::Generator;

/// Generate new words that statistically resemble a sample text.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Number of words to generate
    #[arg(
        short = 'n',
        long,
        default_value_t = 3,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    num_words: u32,

    /// Text file to learn transition frequencies from
    #[arg(short, long)]
    file: PathBuf,

    /// Seed for the random generator (random on every run when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    // The whole corpus is read and the tables built before any word is
    // generated; an unreadable file aborts the run here.
    let model = FrequencyModel::from_file(&args.file)
        .with_context(|| format!("cannot read corpus {}", args.file.display()))?;
    log::info!(
        "trained on {} symbols ({} order-2 contexts)",
        model.observed_symbols(),
        model.context_count(2)
    );

    let generator = Generator::new(model);
    match args.seed {
        Some(seed) => print_words(&generator, &mut StdRng::seed_from_u64(seed), args.num_words),
        None => print_words(&generator, &mut rand::rng(), args.num_words),
    }

    Ok(())
}

/// Each word is an independent walk over the same tables, printed on its
/// own line in generation order, leading space included.
fn print_words<R: Rng>(generator: &Generator, rng: &mut R, num_words: u32) {
    for _ in 0..num_words {
        println!("{}", generator.generate(rng));
    }
}
