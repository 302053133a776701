use super::SyllablePattern;
use phf::phf_map;

pub static IPA: &[(&str, &str)] = &[
    ("a", "a"),
    ("á", "a"),
    ("e", "e"),
    ("é", "e"),
    ("i", "i"),
    ("í", "i"),
    ("o", "o"),
    ("ó", "o"),
    ("u", "u"),
    ("ú", "u"),
    // diphthongs
    ("ai", "ai"),
    ("ay", "ai"),
    ("au", "au"),
    ("ei", "ei"),
    ("ey", "ei"),
    ("eu", "eu"),
    ("ie", "ie"),
    ("io", "io"),
    ("iu", "iu"),
    ("oi", "oi"),
    ("oy", "oi"),
    ("ou", "ou"),
    ("ua", "ua"),
    ("ue", "ue"),
    ("ui", "ui"),
    ("uo", "uo"),
    ("ch", "tʃ"),
    ("ll", "ʎ"),
    ("ñ", "ɲ"),
    ("rr", "r"),
    ("qu", "k"),
    ("gu", "g"),
    ("gü", "gw"),
    ("b", "b"),
    ("c", "k"),
    ("d", "d"),
    ("f", "f"),
    ("g", "g"),
    ("h", ""),
    ("j", "x"),
    ("k", "k"),
    ("l", "l"),
    ("m", "m"),
    ("n", "n"),
    ("p", "p"),
    ("r", "r"),
    ("s", "s"),
    ("t", "t"),
    ("v", "b"),
    ("w", "w"),
    ("x", "ks"),
    ("y", "j"),
    ("z", "s"),
];

pub static ENDINGS: &[&str] = &[
    "ción", "sión", "ando", "iendo", "mente", // suffixes
    "oso", "osa", "ito", "ita", // adjectives
    "ar", "er", "ir", // verbs
    "dad", "tad", "ura", "eza", // nouns
    "ia", "io", "ua", "ue", "ai", "ei", "oi", "au", "eu", // diphthongs
    "ón", "án", "ín", "ún", "al", "el", "il", "ol", "ul", "as", "es", "is", "os", "us",
    "a", "e", "i", "o", "u",
];

pub static SYLLABLES: phf::Map<&'static str, SyllablePattern> = phf_map! {
    "a" => pat!("a", ["casa", "masa", "pasa", "tasa", "rasa", "escasa"]),
    "e" => pat!("e", ["come", "nombre", "verde", "siempre", "gente", "mente"]),
    "i" => pat!("i", ["aquí", "así", "sí", "mi", "ti", "vi"]),
    "o" => pat!("o", ["como", "poco", "loco", "todo", "modo", "solo"]),
    "u" => pat!("u", ["tú", "su", "azul", "sur", "luz", "cruz"]),

    "ba" => pat!("ba", ["samba", "rumba", "bomba", "tumba", "comba"]),
    "ca" => pat!("ka", ["casa", "masa", "pasa", "tasa", "rasa", "barca"]),
    "da" => pat!("da", ["nada", "cada", "toda", "vida", "comida", "salida"]),
    "fa" => pat!("fa", ["sofa", "jirafa", "garrafa", "filosofa"]),
    "ga" => pat!("ga", ["llega", "paga", "juega", "entrega", "navega"]),
    "ja" => pat!("xa", ["caja", "baja", "paja", "trabaja", "viaja"]),
    "la" => pat!("la", ["sala", "bala", "mala", "escala", "gala"]),
    "ma" => pat!("ma", ["cama", "rama", "llama", "drama", "tema"]),
    "na" => pat!("na", ["cena", "pena", "arena", "antena", "cadena"]),
    "pa" => pat!("pa", ["papa", "mapa", "tapa", "copa", "sopa"]),
    "ra" => pat!("ra", ["para", "cara", "clara", "vara", "hora"]),
    "sa" => pat!("sa", ["mesa", "pesa", "besa", "empresa", "promesa"]),
    "ta" => pat!("ta", ["rata", "lata", "mata", "plata", "gata"]),
    "va" => pat!("ba", ["uva", "nueva", "llueva", "mueva", "prueba"]),
    "za" => pat!("sa", ["plaza", "raza", "taza", "caza", "abraza"]),

    "ción" => pat!("sjon", ["nación", "canción", "pasión", "razón", "corazón", "ilusión"]),
    "sión" => pat!("sjon", ["misión", "visión", "decisión", "precisión", "división"]),
    "ado" => pat!("ado", ["cansado", "enamorado", "preocupado", "ocupado", "callado"]),
    "ido" => pat!("ido", ["perdido", "querido", "conocido", "divertido", "aburrido"]),
    "ando" => pat!("ando", ["cantando", "bailando", "caminando", "hablando", "estudiando"]),
    "iendo" => pat!("jendo", ["corriendo", "viviendo", "escribiendo", "durmiendo", "sintiendo"]),
    "mente" => pat!("mente", ["realmente", "solamente", "fácilmente", "rápidamente", "lentamente"]),

    "oso" => pat!("oso", ["hermoso", "famoso", "gracioso", "generoso", "cariñoso"]),
    "osa" => pat!("osa", ["hermosa", "famosa", "graciosa", "generosa", "cariñosa"]),
    "ito" => pat!("ito", ["bonito", "pequeñito", "ratito", "poquito", "solito"]),
    "ita" => pat!("ita", ["bonita", "pequeñita", "ratita", "poquita", "solita"]),

    "ar" => pat!("ar", ["amar", "cantar", "bailar", "caminar", "hablar", "lugar", "hogar", "mar", "altar", "collar"]),
    "er" => pat!("er", ["comer", "beber", "correr", "leer", "ver", "mujer", "placer", "poder", "saber", "tener"]),
    "ir" => pat!("ir", ["vivir", "escribir", "dormir", "salir", "venir", "partir", "sentir", "morir"]),
    "or" => pat!("or", ["amor", "dolor", "color", "calor", "honor"]),
    "ur" => pat!("ur", ["sur", "azur", "augur", "sulfur"]),

    "dad" => pat!("dad", ["verdad", "ciudad", "libertad", "amistad", "felicidad"]),
    "tad" => pat!("tad", ["mitad", "voluntad", "facultad", "dificultad"]),
    "ura" => pat!("ura", ["altura", "dulzura", "ternura", "aventura", "cultura"]),
    "eza" => pat!("esa", ["belleza", "tristeza", "pureza", "nobleza", "riqueza"]),

    "ia" => pat!("ja", ["día", "alegría", "melodía", "poesía", "fantasía"]),
    "io" => pat!("jo", ["río", "frío", "mío", "tío", "brío"]),
    "ua" => pat!("wa", ["agua", "lengua", "antigua", "yegua", "fragua"]),
    "ue" => pat!("we", ["que", "fue", "sue", "hue", "cue"]),
    "ai" => pat!("aj", ["hay", "voy", "soy", "doy", "estoy"]),
    "ei" => pat!("ej", ["rey", "ley", "grey", "buey"]),
    "oi" => pat!("oj", ["hoy", "voy", "soy", "doy", "estoy"]),
    "au" => pat!("aw", ["auto", "causa", "pausa", "aula", "fauna"]),
    "eu" => pat!("ew", ["europa", "neutro", "feudal", "eucalipto"]),

    "ón" => pat!("on", ["corazón", "canción", "pasión", "razón", "ilusión"]),
    "án" => pat!("an", ["están", "darán", "serán", "harán", "vendrán"]),
    "ín" => pat!("in", ["jardín", "violín", "calcetín", "patín", "festín"]),
    "ún" => pat!("un", ["algún", "ningún", "común", "según"]),

    "al" => pat!("al", ["igual", "real", "ideal", "final", "total"]),
    "el" => pat!("el", ["papel", "nivel", "hotel", "pastel", "cruel"]),
    "il" => pat!("il", ["fácil", "difícil", "útil", "inútil", "sutil"]),
    "ol" => pat!("ol", ["español", "caracol", "alcohol", "control", "patrol"]),
    "ul" => pat!("ul", ["azul", "baúl", "paúl", "raúl", "saúl"]),

    "as" => pat!("as", ["casas", "masas", "pasas", "tasas", "rasas"]),
    "es" => pat!("es", ["comes", "nombres", "verdes", "siempres", "gentes"]),
    "is" => pat!("is", ["crisis", "tesis", "análisis", "síntesis", "génesis"]),
    "os" => pat!("os", ["ojos", "rojos", "pocos", "locos", "todos"]),
    "us" => pat!("us", ["virus", "campus", "corpus", "status", "bonus"]),
};

/// Spanish → English suffix correspondences.
pub static TO_ENGLISH: &[(&str, &[&str])] = &[
    ("ción", &["tion", "sion"]),
    ("sión", &["sion", "tion"]),
    ("oso", &["ous"]),
    ("osa", &["ous"]),
    ("mente", &["ly"]),
    ("able", &["able"]),
    ("ible", &["ible"]),
    ("idad", &["ity"]),
    ("edad", &["ety", "age"]),
    ("ario", &["ary"]),
    ("aria", &["ary"]),
    ("orio", &["ory"]),
    ("oria", &["ory"]),
    ("ura", &["ure"]),
    ("aje", &["age"]),
    ("ancia", &["ance"]),
    ("encia", &["ence"]),
    ("mento", &["ment"]),
    ("ai", &["ay", "eye"]),
    ("ei", &["ey", "ay"]),
    ("oi", &["oy"]),
    ("au", &["ow"]),
    ("ar", &["ar", "er"]),
    ("er", &["er", "ar"]),
    ("ir", &["ir", "eer"]),
    ("or", &["or", "ore"]),
    ("ur", &["ur", "ure"]),
    ("ando", &["ing"]),
    ("iendo", &["ing"]),
    ("ado", &["ed"]),
    ("ido", &["ed"]),
    ("eza", &["ness"]),
    ("ón", &["on"]),
    ("án", &["an"]),
    ("ín", &["in"]),
    ("és", &["ese"]),
    ("a", &["a"]),
    ("e", &["e", "ee"]),
    ("i", &["ee", "i"]),
    ("o", &["o", "ow"]),
    ("u", &["oo", "u"]),
];

/// Spanish → French suffix correspondences.
pub static TO_FRENCH: &[(&str, &[&str])] = &[
    ("ción", &["tion"]),
    ("sión", &["sion"]),
    ("oso", &["eux"]),
    ("osa", &["euse"]),
    ("mente", &["ment"]),
    ("idad", &["ité"]),
    ("edad", &["âge"]),
    ("ario", &["aire"]),
    ("aria", &["aire"]),
    ("orio", &["oire"]),
    ("oria", &["oire"]),
    ("ura", &["ure"]),
    ("aje", &["age"]),
    ("ancia", &["ance"]),
    ("encia", &["ence"]),
    ("ai", &["ai", "ait"]),
    ("ei", &["ei"]),
    ("oi", &["oi"]),
    ("au", &["au", "eau"]),
    ("ar", &["ar", "ard"]),
    ("er", &["er", "eur"]),
    ("ir", &["ir", "ire"]),
    ("or", &["eur", "or"]),
    ("ur", &["ur", "ure"]),
    ("ando", &["ant"]),
    ("iendo", &["ent"]),
    ("ado", &["é"]),
    ("ido", &["i"]),
    ("ón", &["on"]),
    ("án", &["an"]),
    ("ín", &["in"]),
    ("a", &["a"]),
    ("e", &["e"]),
    ("i", &["i"]),
    ("o", &["o", "eau"]),
    ("u", &["ou", "u"]),
];
