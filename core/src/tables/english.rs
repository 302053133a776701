use super::SyllablePattern;
use phf::phf_map;

pub static IPA: &[(&str, &str)] = &[
    // vowel teams and suffixes
    ("ough", "ʌf"),
    ("augh", "ɔːf"),
    ("eigh", "eɪ"),
    ("tion", "ʃən"),
    ("sion", "ʃən"),
    ("ture", "tʃər"),
    ("sure", "ʃər"),
    ("ious", "iəs"),
    ("eous", "iəs"),
    ("uous", "uəs"),
    ("able", "əbəl"),
    ("ible", "ɪbəl"),
    ("ment", "mənt"),
    ("ness", "nəs"),
    ("less", "ləs"),
    ("ful", "fəl"),
    ("aigh", "eɪ"),
    ("ight", "aɪt"),
    // digraphs and trigraphs
    ("tch", "tʃ"),
    ("dge", "dʒ"),
    ("sch", "sk"),
    ("psy", "saɪ"),
    ("rhy", "raɪ"),
    ("wri", "raɪ"),
    ("kno", "noʊ"),
    ("gno", "noʊ"),
    ("ph", "f"),
    ("gh", "f"),
    ("ch", "tʃ"),
    ("sh", "ʃ"),
    ("th", "θ"),
    ("ng", "ŋ"),
    ("qu", "kw"),
    ("ck", "k"),
    ("dg", "dʒ"),
    ("mb", "m"),
    ("kn", "n"),
    ("wr", "r"),
    ("gn", "n"),
    ("bt", "t"),
    ("mn", "m"),
    // vowel pairs
    ("ai", "eɪ"),
    ("ay", "eɪ"),
    ("au", "ɔː"),
    ("aw", "ɔː"),
    ("ea", "iː"),
    ("ee", "iː"),
    ("ei", "eɪ"),
    ("ey", "eɪ"),
    ("ie", "iː"),
    ("oa", "oʊ"),
    ("oo", "uː"),
    ("ou", "aʊ"),
    ("ow", "aʊ"),
    ("ue", "uː"),
    ("ui", "uː"),
    ("oy", "ɔɪ"),
    ("oi", "ɔɪ"),
    // r-controlled
    ("ar", "ɑːr"),
    ("er", "ər"),
    ("ir", "ər"),
    ("or", "ɔːr"),
    ("ur", "ər"),
    ("a", "æ"),
    ("e", "ɛ"),
    ("i", "ɪ"),
    ("o", "ɒ"),
    ("u", "ʌ"),
    ("y", "aɪ"),
    ("b", "b"),
    ("c", "k"),
    ("d", "d"),
    ("f", "f"),
    ("g", "g"),
    ("h", "h"),
    ("j", "dʒ"),
    ("k", "k"),
    ("l", "l"),
    ("m", "m"),
    ("n", "n"),
    ("p", "p"),
    ("r", "r"),
    ("s", "s"),
    ("t", "t"),
    ("v", "v"),
    ("w", "w"),
    ("x", "ks"),
    ("z", "z"),
];

/// Multi-syllable endings rewritten as a unit when a word ends with them.
pub static WORD_FINAL: &[(&str, &str)] = &[
    ("iful", "ɪfəl"),
    ("ible", "ɪbəl"),
    ("able", "eɪbəl"),
    ("ment", "mənt"),
    ("tion", "ʃən"),
    ("sion", "ʃən"),
    ("ness", "nəs"),
    ("less", "ləs"),
    ("ous", "əs"),
    ("eous", "iəs"),
    ("ious", "iəs"),
    ("uous", "uəs"),
    ("ent", "ənt"),
    ("ant", "ənt"),
    ("ient", "iənt"),
    ("ician", "ɪʃən"),
    ("ology", "ɒlədʒi"),
    ("ography", "ɒgrəfi"),
    ("ometry", "ɒmətri"),
    ("onomy", "ɒnəmi"),
    ("archy", "ɑːki"),
    ("ency", "ənsi"),
    ("ancy", "ənsi"),
    ("ity", "ɪti"),
    ("ety", "əti"),
    ("aty", "əti"),
    ("ory", "əri"),
    ("ary", "əri"),
    ("ery", "əri"),
    ("iry", "aɪri"),
    ("ury", "əri"),
    ("ly", "li"),
    ("ally", "əli"),
    ("ically", "ɪkəli"),
    ("ously", "əsli"),
    ("iously", "iəsli"),
    ("eously", "iəsli"),
    ("uously", "uəsli"),
];

pub static ENDINGS: &[&str] = &[
    "tion", "sion", "ture", "sure", "ment", "ness", "able", "ible", "ful", "less", "ous", "ious",
    "eous", "ual", "ial", "ive", "age", "ure", // suffixes
    "ling", "ning", "ring", "sing", "ting", "ing", // -ing
    "ted", "ded", "ped", "ked", "ed", // -ed
    "ber", "der", "ger", "ker", "ler", "mer", "ner", "per", "ter", "ver", "er", // -er
    "aly", "ely", "ily", "oly", "uly", "ly", // -ly
    "ack", "eck", "ick", "ock", "uck", "and", "end", "ind", "ond", "und", "ant", "ent", "int",
    "ont", "unt", "art", "ert", "irt", "ort", "urt", "all", "ell", "ill", "oll", "ull", "ass",
    "ess", "iss", "oss", "uss", // clusters
    "ay", "ee", "oo", "a", "e", "i", "o", "u", "y",
];

pub static SYLLABLES: phf::Map<&'static str, SyllablePattern> = phf_map! {
    "a" => pat!("æ", ["spa", "bra", "ma", "pa"]),
    "ay" => pat!("eɪ", ["day", "way", "say", "play", "stay", "may", "bay", "ray", "pay", "lay"]),
    "ee" => pat!("iː", ["see", "bee", "free", "tree", "knee", "flee", "spree", "agree", "degree"]),
    "i" => pat!("aɪ", ["my", "by", "fly", "try", "cry", "dry", "sky", "high", "buy", "guy"]),
    "o" => pat!("oʊ", ["go", "no", "so", "pro", "flow", "grow", "show", "know", "throw", "glow"]),
    "oo" => pat!("uː", ["do", "to", "who", "blue", "true", "new", "few", "grew", "threw", "knew"]),

    "ba" => pat!("bæ", ["crab", "grab", "stab", "tab", "cab", "lab", "dab", "jab"]),
    "be" => pat!("biː", ["maybe", "baby", "crazy", "lazy", "hazy", "daisy"]),
    "ca" => pat!("kæ", ["back", "pack", "track", "crack", "black", "stack", "attack", "snack"]),
    "da" => pat!("dæ", ["bad", "mad", "sad", "had", "glad", "dad", "pad", "add"]),
    "fa" => pat!("fæ", ["half", "staff", "laugh", "graph", "craft", "draft"]),
    "ga" => pat!("gæ", ["bag", "tag", "flag", "drag", "brag", "rag", "sag", "wag"]),
    "ha" => pat!("hæ", ["hat", "cat", "bat", "rat", "mat", "fat", "sat", "flat"]),
    "ja" => pat!("dʒæ", ["jazz", "jam", "jab", "jack"]),
    "ka" => pat!("kæ", ["back", "pack", "track", "crack", "black", "stack"]),
    "la" => pat!("læ", ["lab", "lap", "last", "land", "lamp", "lad"]),
    "ma" => pat!("mæ", ["map", "man", "mad", "mat", "mass", "mask"]),
    "na" => pat!("næ", ["nap", "name", "nail", "navy", "nasty"]),
    "pa" => pat!("pæ", ["pat", "pan", "pad", "pack", "pass", "path"]),
    "ra" => pat!("ræ", ["rat", "ran", "rap", "rag", "ram", "rank"]),
    "sa" => pat!("sæ", ["sat", "sad", "sack", "sand", "sang", "sank"]),
    "ta" => pat!("tæ", ["tap", "tag", "tan", "task", "tax", "tack"]),
    "va" => pat!("væ", ["van", "vat", "vast", "valve"]),
    "wa" => pat!("wæ", ["wag", "wax", "was", "want", "wash"]),
    "za" => pat!("zæ", ["zap", "zag", "zip", "zone"]),

    "tion" => pat!("ʃən", ["nation", "station", "creation", "education", "information", "celebration"]),
    "sion" => pat!("ʃən", ["mission", "vision", "decision", "precision", "division", "collision"]),
    "ment" => pat!("mənt", ["moment", "comment", "payment", "treatment", "movement", "agreement"]),
    "ness" => pat!("nəs", ["happiness", "sadness", "kindness", "darkness", "weakness", "fitness"]),
    "able" => pat!("əbəl", ["table", "stable", "capable", "notable", "portable", "suitable"]),
    "ible" => pat!("ɪbəl", ["terrible", "horrible", "incredible", "visible", "possible", "flexible"]),
    "ful" => pat!("fəl", ["beautiful", "wonderful", "powerful", "colorful", "helpful", "useful"]),
    "less" => pat!("ləs", ["hopeless", "helpless", "endless", "fearless", "careless", "harmless"]),
    "ous" => pat!("əs", ["famous", "serious", "curious", "nervous", "generous", "dangerous"]),
    "ious" => pat!("iəs", ["serious", "curious", "various", "previous", "obvious", "mysterious"]),
    "eous" => pat!("iəs", ["gorgeous", "courageous", "outrageous", "advantageous"]),
    "ual" => pat!("uəl", ["actual", "mutual", "annual", "manual", "visual", "sexual"]),
    "ial" => pat!("iəl", ["special", "social", "commercial", "financial", "material", "official"]),
    "ive" => pat!("ɪv", ["active", "native", "creative", "positive", "negative", "effective"]),
    "age" => pat!("ɪdʒ", ["message", "package", "damage", "manage", "storage", "courage"]),
    "ure" => pat!("ər", ["nature", "future", "picture", "culture", "feature", "measure"]),
    "ture" => pat!("tʃər", ["nature", "future", "picture", "culture", "feature", "adventure"]),
    "sure" => pat!("ʃər", ["measure", "pleasure", "treasure", "pressure", "leisure"]),

    "ing" => pat!("ɪŋ", ["running", "singing", "dancing", "walking", "talking", "working"]),
    "ling" => pat!("lɪŋ", ["feeling", "calling", "falling", "telling", "selling", "spelling"]),
    "ning" => pat!("nɪŋ", ["running", "winning", "beginning", "planning", "spinning"]),
    "ring" => pat!("rɪŋ", ["caring", "sharing", "wearing", "bearing", "tearing", "staring"]),
    "sing" => pat!("sɪŋ", ["missing", "kissing", "passing", "crossing", "pressing"]),
    "ting" => pat!("tɪŋ", ["sitting", "getting", "putting", "cutting", "hitting", "setting"]),

    "ed" => pat!("d", ["played", "stayed", "moved", "loved", "lived", "saved"]),
    "ted" => pat!("təd", ["wanted", "needed", "started", "created", "related", "located"]),
    "ded" => pat!("dəd", ["added", "ended", "handed", "landed", "banded", "sanded"]),
    "ped" => pat!("pt", ["stopped", "dropped", "stepped", "trapped", "wrapped", "clapped"]),
    "ked" => pat!("kt", ["walked", "talked", "worked", "looked", "cooked", "booked"]),

    "er" => pat!("ər", ["water", "better", "never", "other", "mother", "father"]),
    "ber" => pat!("bər", ["number", "member", "remember", "september", "october", "november"]),
    "der" => pat!("dər", ["under", "wonder", "order", "border", "folder", "holder"]),
    "ger" => pat!("gər", ["finger", "anger", "danger", "hunger", "longer", "stronger"]),
    "ker" => pat!("kər", ["maker", "baker", "taker", "speaker", "worker", "marker"]),
    "ler" => pat!("lər", ["color", "dollar", "collar", "scholar", "popular", "regular"]),
    "mer" => pat!("mər", ["summer", "hammer", "grammar", "former", "warmer", "farmer"]),
    "ner" => pat!("nər", ["corner", "dinner", "winner", "manner", "owner", "partner"]),
    "per" => pat!("pər", ["paper", "super", "proper", "upper", "pepper", "copper"]),
    "ter" => pat!("tər", ["water", "better", "letter", "matter", "center", "winter"]),
    "ver" => pat!("vər", ["never", "ever", "over", "cover", "river", "silver"]),

    "ly" => pat!("li", ["really", "only", "early", "family", "finally", "usually"]),
    "aly" => pat!("əli", ["really", "totally", "actually", "finally", "usually", "especially"]),
    "ely" => pat!("li", ["completely", "immediately", "definitely", "absolutely", "extremely"]),
    "ily" => pat!("ɪli", ["family", "easily", "happily", "quickly", "simply", "really"]),
    "oly" => pat!("əli", ["holy", "slowly", "only", "lonely", "lovely"]),
    "uly" => pat!("uli", ["truly", "duly", "unruly"]),

    "ack" => pat!("æk", ["back", "pack", "track", "crack", "black", "stack", "attack", "snack"]),
    "eck" => pat!("ɛk", ["check", "neck", "deck", "wreck", "speck", "trek"]),
    "ick" => pat!("ɪk", ["quick", "thick", "stick", "trick", "brick", "click", "pick", "sick"]),
    "ock" => pat!("ɒk", ["rock", "clock", "block", "shock", "stock", "knock", "lock", "dock"]),
    "uck" => pat!("ʌk", ["luck", "truck", "stuck", "duck", "buck", "muck", "suck", "chuck"]),

    "and" => pat!("ænd", ["hand", "land", "sand", "band", "stand", "grand", "brand", "command"]),
    "end" => pat!("ɛnd", ["end", "send", "bend", "tend", "mend", "spend", "blend", "defend"]),
    "ind" => pat!("aɪnd", ["mind", "find", "kind", "blind", "wind", "behind", "remind", "design"]),
    "ond" => pat!("ɒnd", ["pond", "bond", "fond", "beyond", "respond", "correspond"]),
    "und" => pat!("ʌnd", ["found", "sound", "round", "ground", "bound", "wound", "pound", "mound"]),

    "ant" => pat!("ænt", ["want", "plant", "grant", "can't", "chant", "slant"]),
    "ent" => pat!("ɛnt", ["went", "sent", "bent", "tent", "rent", "cent", "dent", "vent"]),
    "int" => pat!("ɪnt", ["hint", "mint", "print", "point", "joint", "paint", "faint", "saint"]),
    "ont" => pat!("ɒnt", ["front", "want", "font", "don't", "won't", "month"]),
    "unt" => pat!("ʌnt", ["hunt", "punt", "blunt", "grunt", "stunt", "front"]),

    "art" => pat!("ɑːrt", ["heart", "start", "part", "art", "smart", "chart", "dart", "cart"]),
    "ert" => pat!("ɜːrt", ["hurt", "shirt", "dirt", "skirt", "flirt", "alert", "expert", "desert"]),
    "irt" => pat!("ɜːrt", ["shirt", "dirt", "skirt", "flirt", "birth", "worth", "earth"]),
    "ort" => pat!("ɔːrt", ["short", "sport", "port", "sort", "fort", "court", "report", "support"]),
    "urt" => pat!("ɜːrt", ["hurt", "shirt", "dirt", "skirt", "flirt", "curt", "spurt"]),

    "all" => pat!("ɔːl", ["call", "fall", "wall", "ball", "tall", "small", "hall", "mall"]),
    "ell" => pat!("ɛl", ["tell", "well", "bell", "sell", "spell", "shell", "smell", "dwell"]),
    "ill" => pat!("ɪl", ["will", "still", "hill", "fill", "kill", "mill", "bill", "skill"]),
    "oll" => pat!("oʊl", ["roll", "poll", "toll", "doll", "control", "patrol", "enroll"]),
    "ull" => pat!("ʊl", ["full", "pull", "bull", "null", "skull", "hull"]),

    "ass" => pat!("æs", ["class", "pass", "glass", "grass", "mass", "bass", "last", "fast"]),
    "ess" => pat!("ɛs", ["less", "mess", "dress", "stress", "press", "guess", "bless", "chess"]),
    "iss" => pat!("ɪs", ["miss", "kiss", "this", "his", "dismiss", "bliss", "abyss"]),
    "oss" => pat!("ɒs", ["loss", "boss", "cross", "toss", "moss", "gloss", "across"]),
    "uss" => pat!("ʌs", ["bus", "plus", "thus", "fuss", "discuss", "focus"]),
};

/// English → Spanish suffix correspondences.
pub static TO_SPANISH: &[(&str, &[&str])] = &[
    ("tion", &["ción", "sión"]),
    ("sion", &["sión", "ción"]),
    ("ous", &["oso", "osa"]),
    ("ly", &["mente"]),
    ("able", &["able"]),
    ("ible", &["ible"]),
    ("ity", &["idad"]),
    ("ety", &["edad"]),
    ("ary", &["ario", "aria"]),
    ("ory", &["orio", "oria"]),
    ("ure", &["ura"]),
    ("age", &["aje"]),
    ("ance", &["ancia"]),
    ("ence", &["encia"]),
    ("ment", &["mento"]),
    ("ay", &["ai", "ay"]),
    ("ee", &["i"]),
    ("oo", &["u"]),
    ("ow", &["au"]),
    ("ey", &["ei"]),
    ("er", &["er", "ar"]),
    ("or", &["or"]),
    ("ar", &["ar"]),
    ("ir", &["ir"]),
    ("ur", &["ur"]),
    ("ing", &["ando", "iendo"]),
    ("ed", &["ado", "ido"]),
    ("est", &["est"]),
    ("ness", &["eza"]),
    ("at", &["at"]),
    ("et", &["et"]),
    ("it", &["it"]),
    ("ot", &["ot"]),
    ("ut", &["ut"]),
    ("on", &["ón"]),
    ("an", &["án"]),
    ("in", &["ín"]),
];

/// English → French suffix correspondences.
pub static TO_FRENCH: &[(&str, &[&str])] = &[
    ("ment", &["ment", "ant", "ent"]),
    ("tion", &["tion", "sion"]),
    ("sion", &["sion", "tion"]),
    ("able", &["able"]),
    ("ible", &["ible"]),
    ("ous", &["eux", "euse"]),
    ("ly", &["ment"]),
    ("ity", &["ité"]),
    ("ety", &["été"]),
    ("ary", &["aire"]),
    ("ory", &["oire"]),
    ("ery", &["erie"]),
    ("ure", &["ure"]),
    ("age", &["age"]),
    ("ice", &["ice"]),
    ("ance", &["ance"]),
    ("ence", &["ence"]),
    ("ique", &["ique"]),
    ("ay", &["é", "ai", "ait"]),
    ("ee", &["i", "ie"]),
    ("oo", &["ou", "u"]),
    ("ow", &["au", "eau"]),
    ("ey", &["é", "ai"]),
    ("er", &["er", "eur"]),
    ("or", &["eur", "or"]),
    ("ar", &["ar", "ard"]),
    ("ir", &["ir", "ire"]),
    ("ur", &["ur", "ure"]),
    ("ing", &["ant", "ent"]),
    ("ed", &["é", "ée"]),
    ("est", &["est"]),
    ("ness", &["esse"]),
    ("less", &["sans"]),
    ("ful", &["plein"]),
    ("at", &["at"]),
    ("et", &["et"]),
    ("it", &["it"]),
    ("ot", &["ot"]),
    ("ut", &["ut"]),
];
