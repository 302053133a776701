use super::SyllablePattern;
use phf::phf_map;

pub static IPA: &[(&str, &str)] = &[
    // nasal vowels
    ("an", "ɑ̃"),
    ("am", "ɑ̃"),
    ("en", "ɑ̃"),
    ("em", "ɑ̃"),
    ("in", "ɛ̃"),
    ("im", "ɛ̃"),
    ("yn", "ɛ̃"),
    ("ym", "ɛ̃"),
    ("on", "ɔ̃"),
    ("om", "ɔ̃"),
    ("un", "œ̃"),
    ("um", "œ̃"),
    ("ai", "ɛ"),
    ("ay", "ɛ"),
    ("au", "o"),
    ("eau", "o"),
    ("ei", "ɛ"),
    ("eu", "ø"),
    ("œu", "ø"),
    ("ie", "i"),
    ("oi", "wa"),
    ("oy", "wa"),
    ("ou", "u"),
    ("ui", "ɥi"),
    ("à", "a"),
    ("â", "a"),
    ("é", "e"),
    ("è", "ɛ"),
    ("ê", "ɛ"),
    ("ë", "ɛ"),
    ("î", "i"),
    ("ï", "i"),
    ("ô", "o"),
    ("ò", "ɔ"),
    ("ù", "y"),
    ("û", "y"),
    ("ü", "y"),
    ("a", "a"),
    ("e", "ə"),
    ("i", "i"),
    ("o", "o"),
    ("u", "y"),
    ("y", "i"),
    ("ch", "ʃ"),
    ("gn", "ɲ"),
    ("ph", "f"),
    ("qu", "k"),
    ("th", "t"),
    ("sch", "ʃ"),
    ("b", "b"),
    ("c", "k"),
    ("d", "d"),
    ("f", "f"),
    ("g", "g"),
    ("h", ""),
    ("j", "ʒ"),
    ("k", "k"),
    ("l", "l"),
    ("m", "m"),
    ("n", "n"),
    ("p", "p"),
    ("r", "ʁ"),
    ("s", "s"),
    ("t", "t"),
    ("v", "v"),
    ("w", "w"),
    ("x", "ks"),
    ("z", "z"),
];

pub static ENDINGS: &[&str] = &[
    "tion", "sion", "ment", "ance", "ence", // suffixes
    "eux", "euse", "able", "ible", // adjectives
    "er", "ir", "re", "oir", // verbs
    "age", "ure", "eur", "teur", "trice", // nouns
    "an", "en", "in", "on", "un", // nasals
    "ai", "au", "eau", "ei", "eu", "œu", "oi", "ou", "ui", // vowel teams
    "ard", "ert", "ort", "elle", "ette", "esse", "aux", "ique", "isme", "iste",
    "é", "è", "à", "a", "e", "i", "o", "u",
];

pub static SYLLABLES: phf::Map<&'static str, SyllablePattern> = phf_map! {
    "a" => pat!("a", ["là", "ça", "ma", "ta", "sa", "va"]),
    "e" => pat!("ə", ["le", "me", "te", "se", "de", "ne"]),
    "é" => pat!("e", ["café", "été", "né", "blé", "clé", "thé", "aimé", "chanté", "dansé", "rêvé", "volé"]),
    "è" => pat!("ɛ", ["très", "près", "après", "succès", "progrès"]),
    "i" => pat!("i", ["ici", "si", "qui", "mi", "ni", "pi", "fini", "choisi", "parti", "sorti", "dormi"]),
    "o" => pat!("o", ["trop", "gros", "dos", "pot", "mot", "sot"]),
    "u" => pat!("y", ["tu", "su", "nu", "bu", "cu", "du", "vu", "pu", "voulu", "dû"]),

    "ba" => pat!("ba", ["baba", "samba", "rumba", "bomba", "tomba"]),
    "ca" => pat!("ka", ["café", "cadeau", "caché", "caresse", "cascade"]),
    "da" => pat!("da", ["dada", "canada", "armada", "nevada", "pagoda"]),
    "fa" => pat!("fa", ["sofa", "alpha", "extra", "ultra", "opera"]),
    "ga" => pat!("ga", ["gala", "saga", "yoga", "omega", "mega"]),
    "ja" => pat!("ʒa", ["déjà", "raja", "ninja", "pyjama"]),
    "la" => pat!("la", ["là", "gala", "koala", "villa", "bella"]),
    "ma" => pat!("ma", ["mama", "drama", "trauma", "dogma", "asthma"]),
    "na" => pat!("na", ["banana", "cabana", "savana", "iguana", "piranha"]),
    "pa" => pat!("pa", ["papa", "tapa", "copa", "europa", "stampa"]),
    "ra" => pat!("ra", ["bra", "extra", "ultra", "zebra", "cobra"]),
    "sa" => pat!("sa", ["ça", "salsa", "pizza", "plaza", "visa"]),
    "ta" => pat!("ta", ["pasta", "fiesta", "siesta", "vista", "lista"]),
    "va" => pat!("va", ["va", "java", "lava", "guava", "diva"]),
    "za" => pat!("za", ["pizza", "plaza", "gaza", "ibiza"]),

    "tion" => pat!("sjɔ̃", ["nation", "passion", "émotion", "création", "attention"]),
    "sion" => pat!("sjɔ̃", ["mission", "vision", "décision", "précision", "division"]),
    "ment" => pat!("mɑ̃", ["moment", "vraiment", "seulement", "comment", "souvent", "lentement", "doucement", "simplement"]),
    "ance" => pat!("ɑ̃s", ["chance", "danse", "romance", "france", "enfance"]),
    "ence" => pat!("ɑ̃s", ["silence", "patience", "présence", "absence", "science"]),

    "eux" => pat!("ø", ["heureux", "amoureux", "joyeux", "merveilleux", "généreux", "yeux", "cheveux", "jeux", "lieux", "dieux"]),
    "euse" => pat!("øz", ["heureuse", "amoureuse", "joyeuse", "merveilleuse", "généreuse", "danseuse", "chanteuse", "vendeuse", "coiffeuse"]),
    "able" => pat!("abl", ["table", "stable", "capable", "notable", "portable"]),
    "ible" => pat!("ibl", ["terrible", "horrible", "incredible", "visible", "possible"]),

    "er" => pat!("e", ["aimer", "chanter", "danser", "rêver", "voler"]),
    "ir" => pat!("ir", ["partir", "finir", "choisir", "dormir", "sortir"]),
    "re" => pat!("r", ["être", "faire", "dire", "lire", "écrire"]),
    "oir" => pat!("war", ["voir", "savoir", "pouvoir", "vouloir", "devoir"]),

    "age" => pat!("aʒ", ["voyage", "courage", "message", "passage", "visage"]),
    "ure" => pat!("yr", ["nature", "culture", "aventure", "blessure", "mesure"]),
    "eur" => pat!("ør", ["cœur", "bonheur", "malheur", "douceur", "chaleur"]),
    "teur" => pat!("tør", ["acteur", "docteur", "directeur", "professeur"]),
    "trice" => pat!("tris", ["actrice", "directrice", "institutrice"]),

    "an" => pat!("ɑ̃", ["grand", "blanc", "chant", "tant", "enfant"]),
    "en" => pat!("ɑ̃", ["vent", "dent", "cent", "sent", "ment"]),
    "in" => pat!("ɛ̃", ["fin", "vin", "pain", "main", "train"]),
    "on" => pat!("ɔ̃", ["bon", "son", "ton", "don", "mon"]),
    "un" => pat!("œ̃", ["un", "brun", "parfum", "commun"]),

    "ai" => pat!("ɛ", ["mai", "vrai", "jamais", "français", "anglais"]),
    "au" => pat!("o", ["beau", "nouveau", "cadeau", "oiseau", "bateau"]),
    "eau" => pat!("o", ["beau", "nouveau", "cadeau", "oiseau", "bateau"]),
    "ei" => pat!("ɛ", ["neige", "beige", "treize", "seize"]),
    "eu" => pat!("ø", ["peu", "jeu", "lieu", "dieu", "bleu"]),
    "œu" => pat!("ø", ["cœur", "sœur", "bœuf", "œuf", "nœud"]),
    "oi" => pat!("wa", ["moi", "toi", "roi", "loi", "foi"]),
    "ou" => pat!("u", ["vous", "nous", "tout", "bout", "goût"]),
    "ui" => pat!("ɥi", ["lui", "nuit", "fruit", "bruit", "suit"]),

    "ard" => pat!("ar", ["regard", "retard", "hasard", "canard", "renard"]),
    "ert" => pat!("ɛr", ["vert", "ouvert", "expert", "concert", "désert"]),
    "ort" => pat!("ɔr", ["port", "sort", "fort", "mort", "sport"]),

    "elle" => pat!("ɛl", ["belle", "nouvelle", "éternelle", "naturelle", "personnelle"]),
    "ette" => pat!("ɛt", ["petite", "chouette", "cigarette", "baguette", "omelette"]),
    "esse" => pat!("ɛs", ["princesse", "déesse", "maîtresse", "tendresse", "richesse"]),

    "aux" => pat!("o", ["beaux", "nouveaux", "cadeaux", "oiseaux", "bateaux"]),

    "ique" => pat!("ik", ["musique", "magique", "unique", "classique", "romantique"]),
    "isme" => pat!("ism", ["tourisme", "réalisme", "optimisme", "pessimisme"]),
    "iste" => pat!("ist", ["artiste", "touriste", "dentiste", "pianiste"]),
};

/// French → English suffix correspondences.
pub static TO_ENGLISH: &[(&str, &[&str])] = &[
    ("ment", &["ment", "ly"]),
    ("tion", &["tion"]),
    ("sion", &["sion"]),
    ("eux", &["ous"]),
    ("euse", &["ous"]),
    ("able", &["able"]),
    ("ible", &["ible"]),
    ("ité", &["ity"]),
    ("été", &["ety"]),
    ("aire", &["ary"]),
    ("oire", &["ory"]),
    ("erie", &["ery"]),
    ("ure", &["ure"]),
    ("age", &["age"]),
    ("ice", &["ice"]),
    ("ance", &["ance"]),
    ("ence", &["ence"]),
    ("ique", &["ique", "ic"]),
    ("é", &["ay", "ey"]),
    ("ai", &["ay", "eye"]),
    ("ait", &["ay", "ate"]),
    ("i", &["ee"]),
    ("ie", &["ee"]),
    ("ou", &["oo"]),
    ("u", &["oo"]),
    ("au", &["ow"]),
    ("eau", &["ow", "o"]),
    ("oi", &["oy"]),
    ("er", &["er", "are"]),
    ("eur", &["or", "er"]),
    ("ar", &["ar"]),
    ("ard", &["ard"]),
    ("ir", &["eer", "ir"]),
    ("ire", &["ire", "eer"]),
    ("or", &["or"]),
    ("ant", &["ing", "ant"]),
    ("ent", &["ing", "ent"]),
    ("esse", &["ness"]),
    ("on", &["on"]),
    ("an", &["an"]),
    ("in", &["in"]),
    ("est", &["est"]),
    ("a", &["a"]),
    ("e", &["e"]),
    ("o", &["o"]),
];

/// French → Spanish suffix correspondences.
pub static TO_SPANISH: &[(&str, &[&str])] = &[
    ("ment", &["mente"]),
    ("tion", &["ción"]),
    ("sion", &["sión"]),
    ("eux", &["oso"]),
    ("euse", &["osa"]),
    ("ité", &["idad"]),
    ("âge", &["edad"]),
    ("aire", &["ario", "aria"]),
    ("oire", &["orio", "oria"]),
    ("ure", &["ura"]),
    ("age", &["aje"]),
    ("ance", &["ancia"]),
    ("ence", &["encia"]),
    ("ai", &["ai"]),
    ("ait", &["ai"]),
    ("ei", &["ei"]),
    ("oi", &["oi"]),
    ("au", &["au"]),
    ("eau", &["au"]),
    ("ou", &["u"]),
    ("er", &["er", "ar"]),
    ("eur", &["or"]),
    ("ar", &["ar"]),
    ("ard", &["ardo"]),
    ("ir", &["ir"]),
    ("ire", &["ir"]),
    ("or", &["or"]),
    ("ant", &["ando"]),
    ("ent", &["iendo"]),
    ("é", &["ado"]),
    ("i", &["ido"]),
    ("on", &["ón"]),
    ("an", &["án"]),
    ("in", &["ín"]),
    ("a", &["a"]),
    ("e", &["e"]),
    ("o", &["o"]),
];
