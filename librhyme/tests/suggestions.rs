use librhyme::{Config, Engine, Language, Quality, RhymeConfig, RhymeType};
use rhyme_core::lexicon::write_word_set;

fn tmp_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("librhyme_{}_{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn no_bundled_word_rhymes_with_itself() {
    let engine = Engine::demo(Config::default());
    let lexicon = engine.inner_arc().lexicon().clone();
    for target in Language::ALL {
        for native in Language::ALL {
            for word in lexicon.words(target) {
                let out = engine.suggest(word, target, native);
                assert!(
                    out.iter().all(|s| &s.candidate.word != word),
                    "{word} target={target} native={native}"
                );
            }
        }
    }
}

#[test]
fn spanish_search_for_an_english_speaker() {
    let engine = Engine::demo(Config::default());
    let out = engine.suggest("corazón", Language::Spanish, Language::English);

    assert!(!out.is_empty());
    assert!(out.len() <= engine.config().max_results);
    assert!(out.iter().all(|s| s.candidate.word != "corazón"));
    for s in &out {
        if s.candidate.rhyme_type == RhymeType::CrossLanguage {
            assert_eq!(s.quality, Quality::Good);
        }
    }
    let mut words: Vec<&str> = out.iter().map(|s| s.candidate.word.as_str()).collect();
    words.sort_unstable();
    let before = words.len();
    words.dedup();
    assert_eq!(before, words.len());
}

#[test]
fn same_language_results_come_first_and_sorted() {
    let engine = Engine::demo(Config::default());
    let out = engine.suggest("nation", Language::English, Language::French);
    let same: Vec<_> = out
        .iter()
        .take_while(|s| s.candidate.rhyme_type != RhymeType::CrossLanguage)
        .collect();
    for pair in same.windows(2) {
        assert!(pair[0].candidate.similarity >= pair[1].candidate.similarity);
    }
}

#[test]
fn data_dir_with_fst_and_text_lists() {
    let dir = tmp_dir("datadir");
    write_word_set(["maison", "raison", "chanson"], dir.join("french.fst")).unwrap();
    std::fs::write(dir.join("english.txt"), "# words\nlove\nabove\ndove\n").unwrap();
    std::fs::write(
        dir.join("translations.json"),
        r#"{ "french": { "english": { "raison": "reason" } } }"#,
    )
    .unwrap();

    let engine = Engine::from_data_dir(&dir, Config::default()).unwrap();
    let fr = engine.suggest("saison", Language::French, Language::English);
    let raison = fr.iter().find(|s| s.candidate.word == "raison").unwrap();
    assert_eq!(raison.translation.as_deref(), Some("reason"));

    let en = engine.suggest("love", Language::English, Language::English);
    assert!(en.iter().any(|s| s.candidate.word == "dove"));
    assert!(engine.suggest("casa", Language::Spanish, Language::Spanish).is_empty());

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn config_file_drives_the_engine() {
    let cfg = RhymeConfig::from_toml_str("max_results = 3\nmin_similarity = 0.9\n").unwrap();
    let engine = Engine::demo(cfg.into_base());
    let out = engine.suggest("day", Language::English, Language::English);
    assert!(out.len() <= 3);
    assert!(out.iter().all(|s| s.candidate.similarity >= 0.9));
}
