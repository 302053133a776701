use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use librhyme::{
    analyze, export_json, parse_language_list, Engine, Language, Lexicon, RhymeConfig,
    RhymeGenerator, Suggestion,
};
use rhyme_core::{bridge_patterns, examples_for_syllable, transliterate};

#[derive(Parser)]
#[command(name = "librhyme", about = "Multilingual rhyme finder")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory with <language>.fst / <language>.txt word lists
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find rhymes for a word
    Rhymes {
        word: String,
        /// Language to search in
        #[arg(long)]
        lang: Option<String>,
        /// Language translations are shown in
        #[arg(long)]
        native: Option<String>,
        /// Minimum similarity for same-language rhymes
        #[arg(long)]
        min: Option<f64>,
        /// Search this word list instead of the loaded ones
        #[arg(long)]
        words: Option<PathBuf>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Also write the results as JSON to this file
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Show the phonetic breakdown of a word
    Analyze {
        word: String,
        #[arg(long)]
        lang: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Print the phonetic approximation of a word
    Phonetic {
        word: String,
        #[arg(long)]
        lang: Option<String>,
    },
    /// List target-language suffixes corresponding to a suffix
    Bridge {
        suffix: String,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// Ask the AI generator for rhymes
    Generate {
        word: String,
        /// Comma-separated languages, e.g. en,es,fr
        #[arg(long, default_value = "en")]
        langs: String,
    },
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<RhymeConfig> {
    match path {
        Some(path) => RhymeConfig::load_toml(path),
        None => Ok(RhymeConfig::default()),
    }
}

fn lang_or_default(tag: Option<&str>, default: Language) -> Language {
    tag.map_or(default, Language::from_tag_or_default)
}

fn print_suggestions(word: &str, lang: Language, results: &[Suggestion]) {
    if results.is_empty() {
        println!("No rhymes found for '{}' ({})", word, lang.display_name());
        return;
    }
    println!("Rhymes for '{}' ({}):", word, lang.display_name());
    for s in results {
        let c = &s.candidate;
        let translation = s
            .translation
            .as_deref()
            .map(|t| format!("  ({t})"))
            .unwrap_or_default();
        println!(
            "  {:<16} {:>5.2}  {:<14} {:<9} syl={} /{}/{}",
            c.word,
            c.similarity,
            c.rhyme_type.as_str(),
            s.quality.as_str(),
            c.syllable_count,
            c.phonetic_suffix,
            translation
        );
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = load_config(cli.config.as_ref())?;
    let default_lang = config.base().default_language;

    match cli.command {
        Command::Rhymes {
            word,
            lang,
            native,
            min,
            words,
            json,
            export,
        } => {
            let lang = lang_or_default(lang.as_deref(), default_lang);
            let native = lang_or_default(native.as_deref(), lang);
            if let Some(min) = min {
                config.base_mut().min_similarity = min.clamp(0.0, 1.0);
            }
            let engine = match &cli.data_dir {
                Some(dir) => Engine::from_data_dir(dir, config.into_base())?,
                None => Engine::demo(config.into_base()),
            };

            let results = match words {
                Some(path) => {
                    let mut lexicon = Lexicon::new();
                    lexicon.load_text(lang, &path)?;
                    engine.suggest_in(&word, lexicon.words(lang), lang, native)
                }
                None => engine.suggest(&word, lang, native),
            };

            if let Some(path) = export {
                export_json(&results, &path)?;
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print_suggestions(&word, lang, &results);
            }
        }
        Command::Analyze { word, lang, json } => {
            let lang = lang_or_default(lang.as_deref(), default_lang);
            let a = analyze(&word, lang);
            if json {
                println!("{}", serde_json::to_string_pretty(&a)?);
            } else {
                println!("word:            {}", a.word);
                println!("language:        {}", a.language.display_name());
                println!("phonetic:        /{}/", a.phonetic);
                println!("last syllable:   {} /{}/", a.last_syllable, a.syllable_phonetic);
                println!("syllables:       {}", a.syllable_count);
                println!("stress:          {}", a.stress);
                let examples = examples_for_syllable(&a.last_syllable, lang);
                if !examples.is_empty() {
                    println!("similar endings: {}", examples.join(", "));
                }
            }
        }
        Command::Phonetic { word, lang } => {
            let lang = lang_or_default(lang.as_deref(), default_lang);
            println!("{}", transliterate(&word, lang));
        }
        Command::Bridge { suffix, from, to } => {
            let from = Language::from_tag_or_default(&from);
            let to = Language::from_tag_or_default(&to);
            let patterns = bridge_patterns(&suffix, from, to);
            if patterns.is_empty() {
                println!("No {} correspondences for '{}'", to.display_name(), suffix);
            }
            for p in patterns {
                println!("{p}");
            }
        }
        Command::Generate { word, langs } => {
            if !config.generator.enabled {
                bail!("the generator is disabled ([generator] enabled = false)");
            }
            let languages = parse_language_list(&langs);
            let generator = RhymeGenerator::new(config.generator.clone());
            let results = generator
                .generate(&word, &languages)
                .with_context(|| format!("generate rhymes for '{word}'"))?;
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
    }

    Ok(())
}
