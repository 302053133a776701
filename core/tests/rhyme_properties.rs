//! Properties every rhyme query must satisfy, checked over the public API.

use rhyme_core::{
    bridge_patterns, find_rhymes, last_syllable, similarity, syllable_count, transliterate,
    Language, RhymeType,
};

const ENGLISH: &[&str] = &[
    "day", "way", "play", "cat", "hat", "nation", "station", "love", "above", "light", "night",
    "fire", "desire", "heart", "apart", "", "   ", "rhythm", "queue",
];
const SPANISH: &[&str] = &[
    "amor", "dolor", "canción", "corazón", "casa", "mesa", "cantando", "bailando", "sol", "y",
];
const FRENCH: &[&str] = &[
    "amour", "toujours", "chanson", "maison", "belle", "nouvelle", "lentement", "beau", "eau",
];

fn corpus() -> Vec<(Language, &'static [&'static str])> {
    vec![
        (Language::English, ENGLISH),
        (Language::Spanish, SPANISH),
        (Language::French, FRENCH),
    ]
}

#[test]
fn syllable_count_is_never_zero() {
    for (lang, words) in corpus() {
        for w in words {
            assert!(syllable_count(w, lang) >= 1, "{w} in {lang}");
        }
    }
    assert_eq!(syllable_count("", Language::English), 1);
    assert_eq!(syllable_count("brr", Language::French), 1);
}

#[test]
fn self_similarity_is_maximal_but_self_is_excluded() {
    for (lang, words) in corpus() {
        for w in words.iter().filter(|w| !w.trim().is_empty()) {
            let p = transliterate(w, lang);
            assert_eq!(similarity(&p, &p), 1.0);

            let results = find_rhymes(w, words.iter(), lang, 0.0);
            assert!(results.iter().all(|r| !r.word.eq_ignore_ascii_case(w)));
        }
    }
}

#[test]
fn similarity_is_symmetric_and_zero_on_different_endings() {
    let phonetics: Vec<String> = corpus()
        .into_iter()
        .flat_map(|(lang, words)| words.iter().map(move |w| transliterate(w, lang)))
        .collect();
    for a in &phonetics {
        for b in &phonetics {
            assert_eq!(similarity(a, b), similarity(b, a));
            if a.chars().last() != b.chars().last() {
                assert_eq!(similarity(a, b), 0.0);
            }
        }
    }
}

#[test]
fn short_words_are_their_own_last_syllable() {
    for (lang, words) in corpus() {
        for w in words
            .iter()
            .filter(|w| !w.trim().is_empty() && w.chars().count() <= 3)
        {
            assert_eq!(last_syllable(w, lang), *w);
        }
    }
}

#[test]
fn day_ranks_way_and_play_above_cat() {
    let results = find_rhymes("day", ["way", "play", "cat"], Language::English, 0.5);
    let pos = |word: &str| results.iter().position(|r| r.word == word);

    let way = pos("way").expect("way admitted");
    let play = pos("play").expect("play admitted");
    if let Some(cat) = pos("cat") {
        assert!(way < cat && play < cat);
    }
    assert!(matches!(
        results[way].rhyme_type,
        RhymeType::Perfect | RhymeType::Near
    ));
}

#[test]
fn results_are_sorted_and_deterministic() {
    for (lang, words) in corpus() {
        for w in words.iter().take(4) {
            let first = find_rhymes(w, words.iter(), lang, 0.0);
            let second = find_rhymes(w, words.iter(), lang, 0.0);
            assert_eq!(first, second);
            for pair in first.windows(2) {
                assert!(pair[0].similarity >= pair[1].similarity);
            }
        }
    }
}

#[test]
fn empty_input_finds_nothing() {
    for (lang, words) in corpus() {
        assert!(find_rhymes("", words.iter(), lang, 0.0).is_empty());
        assert!(find_rhymes(" \t", words.iter(), lang, 0.0).is_empty());
    }
}

#[test]
fn tion_bridges_to_spanish_cion() {
    assert!(bridge_patterns("tion", Language::English, Language::Spanish).contains("ción"));
}

#[test]
fn transliteration_has_no_hidden_state() {
    for (lang, words) in corpus() {
        for w in words {
            let once = transliterate(w, lang);
            let again = transliterate(&w.to_lowercase(), lang);
            assert_eq!(once, again);
        }
    }
}

#[test]
fn uppercase_input_matches_lowercase() {
    assert_eq!(
        transliterate("NATION", Language::English),
        transliterate("nation", Language::English)
    );
    assert_eq!(
        last_syllable("CORAZÓN", Language::Spanish),
        last_syllable("corazón", Language::Spanish)
    );
}
