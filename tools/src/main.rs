mod build_fst;
mod inspect;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rhyme_core::Language;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rhyme_tools", about = "Build and inspect rhyme word-list artifacts")]
struct Args {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile text word lists (one word per line) into an fst set
    BuildFst {
        #[arg(long, num_args = 1.., required = true)]
        input: Vec<PathBuf>,
        #[arg(long, default_value = "words.fst")]
        output: PathBuf,
    },
    /// Print the size and first words of an fst set
    Inspect {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value_t = 20)]
        limit: usize,
        /// Show phonetics for this language
        #[arg(long)]
        lang: Option<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    match args.command {
        Command::BuildFst { input, output } => {
            let count = build_fst::run(&input, &output)?;
            println!("Wrote {} words to {}", count, output.display());
        }
        Command::Inspect { input, limit, lang } => {
            let lang = lang.as_deref().map(Language::from_tag_or_default);
            inspect::run(&input, limit, lang)?;
        }
    }
    Ok(())
}
