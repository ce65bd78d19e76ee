// File: src/core/tagger.rs
use crate::core::lexicon::Lexicon;
use crate::core::types::{ParsedSlots, QuestionType, Role};

/// Single left-to-right pass that fills the sentence slots.
/// Each slot is first-match-wins; nothing is overwritten once set.
pub struct SentenceTagger;

impl SentenceTagger {
    pub fn new() -> Self {
        Self
    }

    /// Parses one English sentence into its slot assignment.
    /// Deterministic: the same input always yields the same slots.
    pub fn parse(&self, lexicon: &Lexicon, sentence: &str) -> ParsedSlots {
        let mut slots = ParsedSlots::default();
        let lowered = sentence.to_lowercase();

        for raw in lowered.split_whitespace() {
            // Trailing punctuation must not hide a word from the lexicon
            // ("river?" still tags as the noun "river").
            let word = raw.trim_matches(|c: char| !c.is_alphanumeric());
            match lexicon.classify(word) {
                Role::Pronoun
                    if slots.subject.is_none() && !lexicon.is_possessive_pronoun(word) =>
                {
                    slots.subject = Some(word.to_string());
                }
                Role::Verb if slots.verb.is_none() => {
                    slots.verb = Some(word.to_string());
                }
                Role::Noun => {
                    if slots.object.is_none() {
                        slots.object = Some(word.to_string());
                    } else if slots.location.is_none() && lexicon.is_place_noun(word) {
                        slots.location = Some(word.to_string());
                    }
                }
                Role::Adjective if slots.adjective.is_none() => {
                    slots.adjective = Some(word.to_string());
                }
                _ if slots.time.is_none() && lexicon.is_temporal_word(word) => {
                    slots.time = Some(word.to_string());
                }
                _ => {}
            }
        }

        // Question shape is read off the sentence as given, not the
        // lower-cased token stream.
        slots.question_type = question_type(sentence);
        slots
    }
}

impl Default for SentenceTagger {
    fn default() -> Self {
        Self::new()
    }
}

fn question_type(sentence: &str) -> Option<QuestionType> {
    if sentence.starts_with("where") {
        Some(QuestionType::Where)
    } else if sentence.starts_with("how are") {
        Some(QuestionType::HowAre)
    } else if sentence.starts_with("do you have") {
        Some(QuestionType::DoYouHave)
    } else {
        None
    }
}
