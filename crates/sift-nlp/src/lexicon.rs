//! Static word lists backing the lexicon tagger.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use crate::tagger::Pos;

fn set(words: &[&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

/// English stopwords (spaCy-style list, lower-case).
pub static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "a", "about", "above", "across", "after", "afterwards", "again", "against", "all",
        "almost", "alone", "along", "already", "also", "although", "always", "am", "among",
        "amongst", "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything",
        "anyway", "anywhere", "are", "around", "as", "at", "back", "be", "became", "because",
        "become", "becomes", "becoming", "been", "before", "beforehand", "behind", "being",
        "below", "beside", "besides", "between", "beyond", "both", "bottom", "but", "by",
        "ca", "call", "can", "cannot", "could", "did", "do", "does", "doing", "done", "down",
        "due", "during", "each", "eight", "either", "eleven", "else", "elsewhere", "empty",
        "enough", "even", "ever", "every", "everyone", "everything", "everywhere", "except",
        "few", "fifteen", "fifty", "first", "five", "for", "former", "formerly", "forty",
        "four", "from", "front", "full", "further", "get", "give", "go", "had", "has", "have",
        "he", "hence", "her", "here", "hereafter", "hereby", "herein", "hereupon", "hers",
        "herself", "him", "himself", "his", "how", "however", "hundred", "i", "if", "in",
        "indeed", "into", "is", "it", "its", "itself", "just", "keep", "last", "latter",
        "latterly", "least", "less", "made", "make", "many", "may", "me", "meanwhile",
        "might", "mine", "more", "moreover", "most", "mostly", "move", "much", "must", "my",
        "myself", "name", "namely", "neither", "never", "nevertheless", "next", "nine", "no",
        "nobody", "none", "noone", "nor", "not", "nothing", "now", "nowhere", "of", "off",
        "often", "on", "once", "one", "only", "onto", "or", "other", "others", "otherwise",
        "our", "ours", "ourselves", "out", "over", "own", "part", "per", "perhaps", "please",
        "put", "quite", "rather", "re", "really", "regarding", "same", "say", "see", "seem",
        "seemed", "seeming", "seems", "serious", "several", "she", "should", "show", "side",
        "since", "six", "sixty", "so", "some", "somehow", "someone", "something", "sometime",
        "sometimes", "somewhere", "still", "such", "take", "ten", "than", "that", "the",
        "their", "them", "themselves", "then", "thence", "there", "thereafter", "thereby",
        "therefore", "therein", "thereupon", "these", "they", "third", "this", "those",
        "though", "three", "through", "throughout", "thru", "thus", "to", "together", "too",
        "top", "toward", "towards", "twelve", "twenty", "two", "under", "unless", "until",
        "up", "upon", "us", "used", "using", "various", "very", "via", "was", "we", "well",
        "were", "what", "whatever", "when", "whence", "whenever", "where", "whereafter",
        "whereas", "whereby", "wherein", "whereupon", "wherever", "whether", "which",
        "while", "whither", "who", "whoever", "whole", "whom", "whose", "why", "will",
        "with", "within", "without", "would", "yet", "you", "your", "yours", "yourself",
        "yourselves", "n't", "'s", "'re", "'ve", "'ll", "'d", "'m",
    ])
});

/// Closed-class words with a fixed part of speech.
pub static CLOSED_CLASS: Lazy<HashMap<&'static str, Pos>> = Lazy::new(|| {
    let mut m = HashMap::new();
    let groups: &[(Pos, &[&'static str])] = &[
        (
            Pos::Determiner,
            &[
                "a", "an", "the", "this", "that", "these", "those", "each", "every", "either",
                "neither", "some", "any", "no", "all", "both", "another", "such", "what",
                "which", "whatever", "whichever", "several", "few", "many", "much", "more",
                "most", "less", "least", "enough",
            ],
        ),
        (
            Pos::Pronoun,
            &[
                "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself",
                "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
                "it", "its", "itself", "we", "us", "our", "ours", "ourselves", "they", "them",
                "their", "theirs", "themselves", "who", "whom", "whose", "whoever", "someone",
                "somebody", "something", "anyone", "anybody", "anything", "everyone",
                "everybody", "everything", "nobody", "nothing", "none", "noone", "one",
                "others",
            ],
        ),
        (
            Pos::Adposition,
            &[
                "of", "in", "on", "at", "by", "for", "with", "about", "against", "between",
                "into", "through", "during", "before", "after", "above", "below", "from",
                "up", "down", "out", "off", "over", "under", "onto", "upon", "within",
                "without", "toward", "towards", "across", "along", "among", "amongst",
                "around", "behind", "beneath", "beside", "besides", "beyond", "despite",
                "except", "inside", "outside", "near", "past", "per", "since", "than", "till",
                "until", "via", "throughout", "regarding", "like", "unlike", "amid", "to",
            ],
        ),
        (
            Pos::Conjunction,
            &[
                "and", "or", "but", "nor", "yet", "so", "because", "although", "though",
                "while", "whereas", "if", "unless", "whether", "once", "whenever",
                "wherever", "as", "that",
            ],
        ),
        (
            Pos::Auxiliary,
            &[
                "be", "am", "is", "are", "was", "were", "been", "being", "have", "has", "had",
                "having", "do", "does", "did", "will", "would", "shall", "should", "can",
                "could", "may", "might", "must", "ca", "wo", "'s", "'re", "'m", "'ve", "'ll",
                "'d",
            ],
        ),
        (Pos::Particle, &["not", "n't", "'", "never"]),
        (
            Pos::Adverb,
            &[
                "very", "too", "also", "just", "only", "even", "still", "already", "now",
                "then", "here", "there", "where", "when", "why", "how", "however", "again",
                "always", "often", "sometimes", "soon", "later", "ever", "almost", "quite",
                "rather", "really", "well", "perhaps", "maybe", "indeed", "thus", "hence",
                "therefore", "otherwise", "instead", "together", "away", "back", "ago",
                "yesterday", "today", "tomorrow", "tonight", "else", "elsewhere", "anyway",
                "somewhat", "further", "furthermore", "moreover", "nevertheless", "meanwhile",
                "afterwards", "forward", "ahead", "abroad", "alone", "yes", "not", "once",
            ],
        ),
        (
            Pos::Interjection,
            &[
                "wow", "oh", "ah", "hey", "hi", "hello", "ouch", "oops", "hmm", "huh", "yay",
                "alas", "ugh", "uh", "um", "whoa", "bravo", "okay", "ok", "please", "thanks",
            ],
        ),
        (
            Pos::Numeral,
            &[
                "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
                "ten", "eleven", "twelve", "thirteen", "fifteen", "twenty", "thirty", "forty",
                "fifty", "sixty", "hundred", "thousand", "million", "billion", "trillion",
            ],
        ),
    ];
    // Earlier groups win for words listed twice.
    for (pos, words) in groups {
        for w in *words {
            m.entry(*w).or_insert(*pos);
        }
    }
    m
});

/// Modals and do-support: the next open-class word is a verb.
pub static VERB_TRIGGERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "will", "would", "shall", "should", "can", "could", "may", "might", "must", "do",
        "does", "did", "n't", "not", "wo", "ca",
    ])
});

/// Subject pronouns: the next open-class word is a verb.
pub static SUBJECT_PRONOUNS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| set(&["i", "you", "we", "they", "he", "she", "it", "who"]));

/// Words after which an open-class word is a noun.
pub static NOUN_TRIGGERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "a", "an", "the", "this", "that", "these", "those", "my", "your", "his", "her", "its",
        "our", "their", "each", "every", "some", "any", "no", "another", "several", "many",
        "few", "'s",
    ])
});

/// Inflected verb forms mapped to their lemma.
pub static IRREGULAR_VERBS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let pairs: &[(&str, &str)] = &[
        ("sat", "sit"), ("ran", "run"), ("went", "go"), ("gone", "go"), ("came", "come"),
        ("saw", "see"), ("seen", "see"), ("took", "take"), ("taken", "take"), ("gave", "give"),
        ("given", "give"), ("got", "get"), ("gotten", "get"), ("made", "make"), ("said", "say"),
        ("told", "tell"), ("found", "find"), ("thought", "think"), ("knew", "know"),
        ("known", "know"), ("brought", "bring"), ("bought", "buy"), ("caught", "catch"),
        ("taught", "teach"), ("felt", "feel"), ("left", "leave"), ("kept", "keep"),
        ("held", "hold"), ("stood", "stand"), ("began", "begin"), ("begun", "begin"),
        ("wrote", "write"), ("written", "write"), ("spoke", "speak"), ("spoken", "speak"),
        ("rose", "rise"), ("risen", "rise"), ("fell", "fall"), ("fallen", "fall"),
        ("grew", "grow"), ("grown", "grow"), ("drove", "drive"), ("driven", "drive"),
        ("ate", "eat"), ("eaten", "eat"), ("met", "meet"), ("paid", "pay"), ("sold", "sell"),
        ("sent", "send"), ("spent", "spend"), ("built", "build"), ("lost", "lose"),
        ("won", "win"), ("led", "lead"), ("meant", "mean"), ("heard", "hear"),
        ("understood", "understand"), ("became", "become"), ("chose", "choose"),
        ("chosen", "choose"), ("broke", "break"), ("broken", "break"), ("forgot", "forget"),
        ("struck", "strike"), ("slept", "sleep"), ("fought", "fight"), ("sought", "seek"),
        ("threw", "throw"), ("thrown", "throw"), ("flew", "fly"), ("flown", "fly"),
        ("drew", "draw"), ("drawn", "draw"), ("shown", "show"), ("hid", "hide"),
        ("hidden", "hide"), ("woke", "wake"), ("wore", "wear"), ("worn", "wear"),
    ];
    pairs.iter().copied().collect()
});

/// Common verb lemmas. Used to confirm verb readings of inflected or ambiguous forms.
pub static VERB_BASES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "sit", "run", "go", "come", "see", "take", "give", "get", "make", "say", "tell",
        "find", "think", "know", "bring", "buy", "catch", "teach", "feel", "leave", "keep",
        "hold", "stand", "begin", "write", "speak", "rise", "fall", "grow", "drive", "eat",
        "meet", "pay", "sell", "send", "spend", "build", "lose", "win", "lead", "mean",
        "hear", "understand", "become", "choose", "break", "forget", "want", "need", "use",
        "help", "try", "ask", "seem", "show", "call", "work", "look", "play", "move", "live",
        "believe", "happen", "include", "continue", "provide", "create", "allow", "add",
        "expect", "offer", "remain", "suggest", "raise", "report", "decide", "require",
        "receive", "explain", "develop", "improve", "increase", "reduce", "launch",
        "announce", "release", "expose", "affect", "warn", "predict", "exceed", "drop",
        "rely", "compromise", "analyze", "analyse", "enable", "detect", "diagnose", "fail",
        "contain", "describe", "identify", "propose", "demonstrate", "achieve", "outperform",
        "hope", "plan", "start", "stop", "open", "close", "change", "love", "like", "hate",
        "enjoy", "learn", "study", "read", "watch", "wait", "return", "arrive", "die", "kill",
        "serve", "sound", "surge", "soar", "climb", "decline", "rank", "struggle", "threaten",
        "transform", "revolutionize", "promise", "disappoint", "apologize", "refund",
    ])
});

/// Adjectives the suffix rules cannot recognize.
pub static ADJECTIVES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "good", "great", "bad", "new", "old", "big", "small", "large", "little", "high", "low",
        "long", "short", "young", "early", "late", "important", "different", "easy", "hard",
        "strong", "weak", "real", "true", "false", "whole", "free", "full", "best", "better",
        "worst", "worse", "major", "minor", "recent", "significant", "artificial", "human",
        "public", "private", "social", "political", "economic", "national", "international",
        "global", "local", "clinical", "medical", "digital", "financial", "personal",
        "quick", "slow", "fast", "happy", "sad", "angry", "terrible", "horrible", "amazing",
        "excellent", "poor", "rich", "open", "clear", "possible", "impossible", "likely",
        "unlikely", "certain", "sure", "able", "unable", "available", "key", "main", "final",
        "first", "last", "next", "same", "other", "own", "such", "several", "various",
        "latest", "huge", "tiny", "severe", "extreme", "critical", "rapid", "steady",
        "broken", "unprecedented", "sensitive", "overall", "quarterly", "annual", "daily",
        "weekly", "monthly", "yearly", "current", "previous", "future", "potential",
        "additional", "entire", "common", "special", "specific", "general", "simple",
        "complex", "difficult", "deep", "wide", "hot", "cold", "warm", "dark", "bright",
        "red", "blue", "green", "black", "white", "nice", "fine", "mixed", "neutral",
        "positive", "negative", "unacceptable", "incredible", "remarkable", "robust",
        "novel", "existing", "modern", "traditional", "natural", "environmental", "fiscal",
    ])
});

/// Words carrying an adjective/adverb suffix that are nouns.
pub static SUFFIX_NOUNS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        // -ly
        "family", "supply", "reply", "assembly", "anomaly", "monopoly", "butterfly", "italy",
        "july", "rally", "ally", "belly", "jelly", "lily", "bully", "melancholy", "fly",
        "apply", "comply", "jolly", "homily",
        // -ive
        "executive", "objective", "initiative", "detective", "representative", "alternative",
        "incentive", "directive", "relative", "motive", "perspective", "archive", "narrative",
        "explosive", "collective", "drive", "olive", "hive", "dive", "derivative",
        "sedative", "adhesive", "captive", "native", "five", "live", "give", "alive",
        // -able / -ible
        "table", "cable", "vegetable", "variable", "timetable", "fable", "stable", "label",
        "bible", "constable", "receivable", "deliverable", "syllable",
        // -ish
        "fish", "dish", "wish", "english", "spanish", "polish", "finish", "radish", "relish",
        "publish", "establish", "diminish", "vanish", "punish", "cherish", "flourish",
        // -ful
        "handful", "mouthful", "spoonful",
        // -less
        "bless", "unless",
    ])
});

/// Words ending in -ed that are not past forms.
pub static ED_EXCEPTIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "need", "seed", "speed", "feed", "greed", "breed", "creed", "weed", "shed", "hundred",
        "sled", "steed", "deed", "bleed", "embed", "bed", "red", "fed", "wed", "led", "bred",
    ])
});

/// Words ending in -ing that are always nouns.
pub static ING_NOUNS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "thing", "king", "ring", "spring", "string", "wing", "morning", "evening", "ceiling",
        "sibling", "pudding", "darling", "viking", "swing", "sting", "bling", "nothing",
        "something", "anything", "everything", "beijing", "sterling", "inkling",
    ])
});

/// Nouns whose plural does not follow the suffix rules.
pub static IRREGULAR_PLURALS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let pairs: &[(&str, &str)] = &[
        ("men", "man"), ("women", "woman"), ("children", "child"), ("people", "person"),
        ("feet", "foot"), ("teeth", "tooth"), ("mice", "mouse"), ("geese", "goose"),
        ("criteria", "criterion"), ("phenomena", "phenomenon"),
        ("analyses", "analysis"), ("crises", "crisis"), ("theses", "thesis"),
        ("diagnoses", "diagnosis"), ("leaves", "leaf"), ("lives", "life"),
        ("knives", "knife"), ("wives", "wife"), ("halves", "half"), ("wolves", "wolf"),
        ("shelves", "shelf"),
    ];
    pairs.iter().copied().collect()
});

/// Nouns ending in `s` that are already singular.
pub static SINGULAR_S: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "news", "series", "species", "means", "physics", "economics", "mathematics",
        "politics", "ethics", "analytics", "logistics", "statistics", "electronics",
        "genetics", "robotics", "diabetes", "measles", "chaos", "gas", "bus", "lens",
        "canvas", "atlas", "alias", "bias", "corpus", "status", "campus", "virus", "bonus",
        "census", "focus", "plus", "thesis", "analysis", "crisis", "basis", "diagnosis",
        "emphasis", "hypothesis", "synopsis", "this", "its", "yes", "always", "perhaps",
    ])
});
