// src/core/engine.rs
use crate::core::generator::TemplateGenerator;
use crate::core::lexicon::Lexicon;
use crate::core::tagger::SentenceTagger;
use crate::core::types::{LexiconStats, ParsedSlots, Role};
use crate::persistence::{load_phrase_dictionary, save_phrase_dictionary};
use std::collections::HashMap;
use std::path::Path;

// The engine composes the lexicon, tagger and generator. All per-request
// state lives on the stack; the only shared state is the phrase-dictionary
// snapshot inside the lexicon, so `&self` calls are safe across threads.
pub struct TranslationEngine {
    lexicon: Lexicon,
    tagger: SentenceTagger,
    generator: TemplateGenerator,
}

impl TranslationEngine {
    /// Engine with compiled-in role tables and an empty phrase dictionary.
    pub fn new() -> Self {
        Self::with_phrases(HashMap::new())
    }

    pub fn with_phrases(phrases: HashMap<String, String>) -> Self {
        Self {
            lexicon: Lexicon::with_phrases(phrases),
            tagger: SentenceTagger::new(),
            generator: TemplateGenerator::new(),
        }
    }

    /// Loads the phrase dictionary from a flat JSON object of
    /// english→ijaw strings. A malformed file is a fatal start-up error,
    /// never a per-request one.
    pub fn from_dictionary_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self::with_phrases(load_phrase_dictionary(path)?))
    }

    /// Lexical role of a single lower-cased token.
    pub fn classify(&self, token: &str) -> Role {
        self.lexicon.classify(token)
    }

    /// Single-word translation through the ordered lookup layers.
    pub fn translate_token(&self, token: &str) -> String {
        self.lexicon.translate_token(token)
    }

    /// Slot assignment for one sentence.
    pub fn parse_sentence(&self, sentence: &str) -> ParsedSlots {
        self.tagger.parse(&self.lexicon, sentence)
    }

    /// Rule-based translation of one sentence through the template
    /// cascade. Total: always returns a string.
    pub fn generate_translation(&self, sentence: &str) -> String {
        let slots = self.tagger.parse(&self.lexicon, sentence);
        self.generator.generate(&self.lexicon, &slots, sentence)
    }

    /// Service-facing translation: exact phrase hit, then the grammar
    /// cascade, then a per-word dictionary sweep. The cascade's output is
    /// only accepted when it actually changed something.
    pub fn translate(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }
        let normalized = text.trim().to_lowercase();
        if let Some(ijaw) = self.lexicon.lookup_phrase(&normalized) {
            return ijaw;
        }

        let generated = self.generate_translation(text);
        if !generated.is_empty() && generated != text {
            return generated;
        }

        // Word-by-word fallback: punctuation is stripped for the lookup
        // but an untranslated word is echoed back as written.
        let phrases = self.lexicon.phrases();
        normalized
            .split_whitespace()
            .map(|word| {
                let clean: String = word.chars().filter(|c| c.is_alphanumeric()).collect();
                phrases.get(&clean).cloned().unwrap_or_else(|| word.to_string())
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Adds a phrase-dictionary entry at runtime (snapshot swap; visible
    /// to the next lookup).
    pub fn add_phrase(&self, english: &str, ijaw: &str) {
        self.lexicon.add_phrase(english, ijaw);
    }

    /// Persists the current phrase dictionary as JSON.
    pub fn save_dictionary(&self, path: &Path) -> Result<(), std::io::Error> {
        save_phrase_dictionary(&self.lexicon.phrases(), path)
    }

    pub fn stats(&self) -> LexiconStats {
        self.lexicon.stats()
    }
}

impl Default for TranslationEngine {
    fn default() -> Self {
        Self::new()
    }
}
