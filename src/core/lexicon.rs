// File: src/core/lexicon.rs
use crate::core::types::{LexiconStats, Role};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// An immutable view of the phrase dictionary, cheap to clone per request.
pub type PhraseSnapshot = Arc<HashMap<String, String>>;

// Role tables. Keys are lower-cased English forms; a form appears in at
// most one table, so lookup order alone decides classification.
const PRONOUNS: &[(&str, &str)] = &[
    ("i", "Arí"),
    ("you", "Ị"),
    ("he", "U"),
    ("she", "A"),
    ("we", "Wónì"),
    ("they", "Wónì"),
    ("my", "yè"),
    ("your", "wè"),
    ("his", "yè"),
    ("her", "yè"),
    ("our", "wónì"),
    ("their", "wónì"),
];

const VERBS: &[(&str, &str)] = &[
    ("am", "ye"),
    ("is", "ye"),
    ("are", "ye"),
    ("have", "sabi"),
    ("has", "sabi"),
    ("want", "wọnt"),
    ("wants", "wọnt"),
    ("like", "laik"),
    ("likes", "laik"),
    ("see", "fịnị"),
    ("sees", "fịnị"),
    ("eat", "fị"),
    ("eats", "fị"),
    ("drink", "mu"),
    ("drinks", "mu"),
    ("go", "gha"),
    ("goes", "gha"),
    ("come", "bia"),
    ("comes", "bia"),
    ("work", "wok"),
    ("works", "wok"),
    ("sleep", "turu"),
    ("sleeps", "turu"),
    ("build", "bil"),
    ("builds", "bil"),
    ("take", "akị́"),
    ("takes", "akị́"),
    ("give", "giv"),
    ("gives", "giv"),
    ("help", "help"),
    ("helps", "help"),
    ("walk", "waka"),
    ("walks", "waka"),
    ("run", "ron"),
    ("runs", "ron"),
    ("dance", "dans"),
    ("dances", "dans"),
    ("sing", "son"),
    ("sings", "son"),
    ("cook", "nkọ̀rọ"),
    ("cooks", "nkọ̀rọ"),
];

const NOUNS: &[(&str, &str)] = &[
    ("house", "wárị"),
    ("water", "bení"),
    ("food", "fị́yaị"),
    ("fish", "ìndí"),
    ("river", "ọ́wụ"),
    ("sun", "sọ́"),
    ("moon", "akalụ́"),
    ("child", "tọ́bọ̀ụ"),
    ("friend", "kẹ́nị"),
    ("family", "wárịbịbị̀"),
    ("father", "owéi"),
    ("mother", "ẹ́rẹ"),
    ("brother", "bàrà"),
    ("sister", "eréwèrí"),
    ("money", "abadị-ugú"),
    ("yam", "òkù-ị̀wẹ"),
    ("cassava", "abábùrú"),
    ("canoe", "òrù"),
    ("cup", "agbéì"),
    ("net", "agbunú"),
    ("market", "maket"),
    ("village", "òkù-ámà"),
    ("farm", "ògbó"),
    ("fire", "faya"),
    ("ancestor", "ìwéi"),
    ("ancestors", "ìwéi-wónì"),
    ("children", "tọ́bọ̀ụ-wónì"),
    ("friends", "kẹ́nị-wónì"),
    ("people", "òkù-wónì"),
];

const ADJECTIVES: &[(&str, &str)] = &[
    ("good", "botu"),
    ("bad", "kiri"),
    ("big", "toru"),
    ("small", "kiri-kiri"),
    ("happy", "hapi"),
    ("tired", "sik"),
    ("strong", "strong"),
    ("wise", "akíròro"),
    ("kind", "botu"),
    ("busy", "wok haad"),
    ("hungry", "hongri"),
    ("thirsty", "tosti"),
    ("hot", "tuu dọ́n"),
    ("cold", "kol"),
    ("clean", "klin"),
    ("fresh", "nyu"),
    ("warm", "hot"),
    ("bright", "rait"),
    ("deep", "tọ́n"),
    ("long", "pórù"),
    ("tall", "toru"),
    ("beautiful", "fain"),
    ("angry", "kírimá"),
    ("sad", "kiri"),
    ("old", "òkú"),
    ("young", "tọ́bọ̀ụ"),
    ("new", "nyu"),
    ("fast", "fast"),
    ("slow", "slow"),
    ("sick", "sik"),
];

// Closed-class word sets. These drive classification and tagging but carry
// no translation of their own.
const DETERMINERS: &[&str] = &["the", "a", "an", "this", "that"];
const PREPOSITIONS: &[&str] = &["to", "at", "in", "on", "with", "from"];

/// Possessive forms share the pronoun table but are excluded from subject
/// assignment; the possessive-phrase rule consumes them instead.
pub const POSSESSIVE_PRONOUNS: &[&str] = &["my", "your", "his", "her", "our", "their"];

/// Nouns that can fill the location slot once the object slot is taken.
pub const PLACE_NOUNS: &[&str] = &["house", "market", "river", "village", "farm"];

/// Bare temporal adverbs recognized by the tagger.
pub const TEMPORAL_WORDS: &[&str] = &["now", "today", "tomorrow", "early", "late"];

/// The layered word lexicon: compiled-in role tables plus a swappable
/// snapshot of the externally supplied phrase dictionary.
///
/// The phrase dictionary is the authoritative override layer; the role
/// tables are consulted in a fixed order behind it. Updates never mutate a
/// live snapshot: `add_phrase` builds a fresh map and swaps the `Arc`, so
/// concurrent readers always see a complete dictionary.
pub struct Lexicon {
    pronouns: HashMap<&'static str, &'static str>,
    verbs: HashMap<&'static str, &'static str>,
    nouns: HashMap<&'static str, &'static str>,
    adjectives: HashMap<&'static str, &'static str>,
    phrases: RwLock<PhraseSnapshot>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::with_phrases(HashMap::new())
    }

    /// Builds the lexicon around an externally supplied phrase dictionary.
    /// Keys are normalized to lower-cased, trimmed form on the way in.
    pub fn with_phrases(phrases: HashMap<String, String>) -> Self {
        let normalized: HashMap<String, String> = phrases
            .into_iter()
            .map(|(english, ijaw)| (english.trim().to_lowercase(), ijaw))
            .collect();
        Self {
            pronouns: PRONOUNS.iter().copied().collect(),
            verbs: VERBS.iter().copied().collect(),
            nouns: NOUNS.iter().copied().collect(),
            adjectives: ADJECTIVES.iter().copied().collect(),
            phrases: RwLock::new(Arc::new(normalized)),
        }
    }

    /// Current phrase-dictionary snapshot. Holding it pins one consistent
    /// view for the duration of a request.
    pub fn phrases(&self) -> PhraseSnapshot {
        self.phrases
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Adds or replaces a phrase-dictionary entry by building a new
    /// snapshot and swapping it in.
    pub fn add_phrase(&self, english: &str, ijaw: &str) {
        let mut guard = self
            .phrases
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut next = (**guard).clone();
        next.insert(english.trim().to_lowercase(), ijaw.to_string());
        *guard = Arc::new(next);
    }

    /// Looks up a normalized (lower-cased, trimmed) phrase verbatim.
    pub fn lookup_phrase(&self, normalized: &str) -> Option<String> {
        self.phrases().get(normalized).cloned()
    }

    /// Classifies a lower-cased token by priority lookup across the role
    /// tables and closed-class sets. Total; unknown forms are `Unknown`.
    pub fn classify(&self, token: &str) -> Role {
        if self.pronouns.contains_key(token) {
            Role::Pronoun
        } else if self.verbs.contains_key(token) {
            Role::Verb
        } else if self.nouns.contains_key(token) {
            Role::Noun
        } else if self.adjectives.contains_key(token) {
            Role::Adjective
        } else if DETERMINERS.contains(&token) {
            Role::Determiner
        } else if PREPOSITIONS.contains(&token) {
            Role::Preposition
        } else {
            Role::Unknown
        }
    }

    /// Translates a single token through the ordered lookup layers:
    /// phrase dictionary first, then pronoun, verb, noun and adjective
    /// tables. Unknown tokens pass through with their original casing.
    pub fn translate_token(&self, token: &str) -> String {
        let normalized = token.trim().to_lowercase();
        if let Some(ijaw) = self.phrases().get(&normalized) {
            return ijaw.clone();
        }
        for table in self.role_tables() {
            if let Some(&ijaw) = table.get(normalized.as_str()) {
                return ijaw.to_string();
            }
        }
        token.to_string()
    }

    // The layering is an ordered list so a new override layer (e.g. a
    // dialect table) slots in without touching the callers.
    fn role_tables(&self) -> [&HashMap<&'static str, &'static str>; 4] {
        [&self.pronouns, &self.verbs, &self.nouns, &self.adjectives]
    }

    pub fn is_possessive_pronoun(&self, token: &str) -> bool {
        POSSESSIVE_PRONOUNS.contains(&token)
    }

    pub fn is_place_noun(&self, token: &str) -> bool {
        PLACE_NOUNS.contains(&token)
    }

    pub fn is_temporal_word(&self, token: &str) -> bool {
        TEMPORAL_WORDS.contains(&token)
    }

    pub fn is_known_adjective(&self, token: &str) -> bool {
        self.adjectives.contains_key(token)
    }

    pub fn stats(&self) -> LexiconStats {
        LexiconStats {
            pronouns: self.pronouns.len(),
            verbs: self.verbs.len(),
            nouns: self.nouns.len(),
            adjectives: self.adjectives.len(),
            phrase_entries: self.phrases().len(),
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_order_is_pronoun_first() {
        let lexicon = Lexicon::new();
        assert_eq!(lexicon.classify("i"), Role::Pronoun);
        assert_eq!(lexicon.classify("have"), Role::Verb);
        assert_eq!(lexicon.classify("water"), Role::Noun);
        assert_eq!(lexicon.classify("good"), Role::Adjective);
        assert_eq!(lexicon.classify("the"), Role::Determiner);
        assert_eq!(lexicon.classify("with"), Role::Preposition);
        assert_eq!(lexicon.classify("xylophone"), Role::Unknown);
    }

    #[test]
    fn phrase_dictionary_overrides_role_tables() {
        let mut phrases = HashMap::new();
        phrases.insert("water".to_string(), "override".to_string());
        let lexicon = Lexicon::with_phrases(phrases);
        assert_eq!(lexicon.translate_token("water"), "override");
        // Classification is untouched by the phrase layer.
        assert_eq!(lexicon.classify("water"), Role::Noun);
    }

    #[test]
    fn unknown_tokens_pass_through_with_casing() {
        let lexicon = Lexicon::new();
        assert_eq!(lexicon.translate_token("Lagos"), "Lagos");
        assert_eq!(lexicon.translate_token("Water"), "bení");
    }

    #[test]
    fn phrase_keys_are_normalized_on_load_and_add() {
        let mut phrases = HashMap::new();
        phrases.insert("  Good Morning ".to_string(), "dọ́ọ̀".to_string());
        let lexicon = Lexicon::with_phrases(phrases);
        assert_eq!(lexicon.lookup_phrase("good morning").as_deref(), Some("dọ́ọ̀"));

        lexicon.add_phrase("Thank You", "migwo");
        assert_eq!(lexicon.lookup_phrase("thank you").as_deref(), Some("migwo"));
    }

    #[test]
    fn add_phrase_swaps_snapshot_without_touching_old_views() {
        let lexicon = Lexicon::new();
        let before = lexicon.phrases();
        lexicon.add_phrase("hello", "sanma");
        assert!(before.get("hello").is_none());
        assert_eq!(lexicon.phrases().get("hello").map(String::as_str), Some("sanma"));
    }
}
