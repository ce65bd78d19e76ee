// src/core/types.rs
use serde::{Deserialize, Serialize};

/// The lexical role of a single English surface form.
/// Role tables are disjoint: a form resolves to at most one non-Unknown role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Pronoun,
    Verb,
    Noun,
    Adjective,
    Determiner,
    Preposition,
    Unknown,
}

/// Question shape detected from the sentence prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionType {
    Where,
    HowAre,
    DoYouHave,
}

/// Slot assignment produced by one tagger pass over a sentence.
/// Each slot holds the original (untranslated, lower-cased) English token.
/// A slot is filled at most once per parse; later candidates are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSlots {
    pub subject: Option<String>,
    pub object: Option<String>,
    pub verb: Option<String>,
    pub adjective: Option<String>,
    pub location: Option<String>,
    pub time: Option<String>,
    pub question_type: Option<QuestionType>,
}

/// Table sizes of the loaded lexicon, for the debug/stats surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconStats {
    pub pronouns: usize,
    pub verbs: usize,
    pub nouns: usize,
    pub adjectives: usize,
    pub phrase_entries: usize,
}
