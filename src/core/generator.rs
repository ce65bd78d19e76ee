// File: src/core/generator.rs
use crate::core::lexicon::Lexicon;
use crate::core::types::{ParsedSlots, QuestionType};

/// The target-language particle standing in for English "to be".
pub const COPULA: &str = "ye";

/// English verb forms that collapse to the bare copula in a
/// subject-verb clause.
const COPULA_VERBS: &[&str] = &["am", "is", "are"];

/// Fixed rendering for "how are you"-shaped questions.
const HOW_ARE_REPLY: &str = "I bódọụ?";
/// Interrogative suffix for "where is X" questions.
const WHERE_SUFFIX: &str = "kí ye?";
/// Second-person pronoun and suffix for "do you have X" questions.
const YOU_PRONOUN: &str = "Ị";
const HAVE_SUFFIX: &str = "sabi?";

/// Irregular verbs in the canonical SOV clause: the English surface form
/// selects a fixed particle placed after the object instead of the
/// dictionary translation of the verb.
const SOV_VERB_PARTICLES: &[(&str, &str)] = &[
    ("have", "sabi"),
    ("has", "sabi"),
    ("want", "wọnt"),
    ("wants", "wọnt"),
    ("like", "laik"),
    ("likes", "laik"),
    ("eat", "fị"),
    ("eats", "fị"),
    ("build", "bil"),
    ("builds", "bil"),
];

/// Motion verbs rendered as a directional particle after the location.
const DIRECTIONAL_VERB_PARTICLES: &[(&str, &str)] = &[
    ("go", "gha"),
    ("goes", "gha"),
    ("come", "bia"),
    ("comes", "bia"),
    ("walk", "waka"),
    ("walks", "waka"),
];

fn particle_for(table: &'static [(&'static str, &'static str)], verb: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(english, _)| *english == verb)
        .map(|&(_, particle)| particle)
}

/// Priority-ordered template cascade. The first matching rule renders the
/// output; the token-by-token fallback guarantees the cascade is total.
pub struct TemplateGenerator;

impl TemplateGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Renders a target-language string for the sentence and its slots.
    /// Never fails; degenerate input falls through to the per-token rule.
    pub fn generate(&self, lexicon: &Lexicon, slots: &ParsedSlots, sentence: &str) -> String {
        let normalized = sentence.trim().to_lowercase();

        // Rule 1: verbatim phrase-dictionary hit beats every template.
        if let Some(ijaw) = lexicon.lookup_phrase(&normalized) {
            return ijaw;
        }
        if let Some(rendered) = self.question(lexicon, slots) {
            return rendered;
        }
        if let Some(rendered) = self.statement(lexicon, slots) {
            return rendered;
        }
        if let Some(rendered) = self.possessive(lexicon, &normalized) {
            return rendered;
        }
        self.word_by_word(lexicon, sentence)
    }

    // Rule 2: fixed interrogative templates.
    fn question(&self, lexicon: &Lexicon, slots: &ParsedSlots) -> Option<String> {
        match slots.question_type? {
            QuestionType::HowAre => Some(HOW_ARE_REPLY.to_string()),
            QuestionType::Where => {
                let object = slots.object.as_deref()?;
                Some(format!("{} {}", lexicon.translate_token(object), WHERE_SUFFIX))
            }
            QuestionType::DoYouHave => {
                let object = slots.object.as_deref()?;
                Some(format!(
                    "{} {} {}",
                    YOU_PRONOUN,
                    lexicon.translate_token(object),
                    HAVE_SUFFIX
                ))
            }
        }
    }

    // Rules 3-5: slot-driven statement templates, most specific first.
    fn statement(&self, lexicon: &Lexicon, slots: &ParsedSlots) -> Option<String> {
        let subject = slots.subject.as_deref()?;
        let subj = lexicon.translate_token(subject);

        // Rule 3: subject + adjective takes an implicit copula.
        if let Some(adjective) = slots.adjective.as_deref() {
            return Some(format!(
                "{} {} {}",
                subj,
                lexicon.translate_token(adjective),
                COPULA
            ));
        }

        let verb = slots.verb.as_deref()?;

        // Rule 4: canonical SOV clause.
        if let Some(object) = slots.object.as_deref() {
            let obj = lexicon.translate_token(object);
            return Some(match particle_for(SOV_VERB_PARTICLES, verb) {
                Some(particle) => format!("{} {} {}", subj, obj, particle),
                None => format!("{} {} {}", subj, obj, lexicon.translate_token(verb)),
            });
        }

        // Rule 5: subject + verb, with location, time and copula branches.
        if let Some(location) = slots.location.as_deref() {
            let loc = lexicon.translate_token(location);
            return Some(match particle_for(DIRECTIONAL_VERB_PARTICLES, verb) {
                Some(particle) => format!("{} {} {}", subj, loc, particle),
                None => format!("{} {} {}", subj, loc, lexicon.translate_token(verb)),
            });
        }
        if let Some(time) = slots.time.as_deref() {
            return Some(format!(
                "{} {} {}",
                subj,
                lexicon.translate_token(time),
                lexicon.translate_token(verb)
            ));
        }
        if COPULA_VERBS.contains(&verb) {
            return Some(format!("{} {}", subj, COPULA));
        }
        Some(format!("{} {}", subj, lexicon.translate_token(verb)))
    }

    // Rule 6: possessive-phrase fallback, branching on token count.
    fn possessive(&self, lexicon: &Lexicon, normalized: &str) -> Option<String> {
        let words: Vec<&str> = normalized.split_whitespace().collect();
        if words.len() < 2 || !lexicon.is_possessive_pronoun(words[0]) {
            return None;
        }
        let possessive = lexicon.translate_token(words[0]);
        let noun = lexicon.translate_token(words[1]);

        if words.len() == 2 {
            return Some(format!("{} {}", noun, possessive));
        }
        if words.len() == 3 && matches!(words[2], "is" | "are") {
            return Some(format!("{} {} {}", noun, possessive, COPULA));
        }
        if words.len() == 4 && matches!(words[2], "is" | "are") {
            let trailing = lexicon.translate_token(words[3]);
            if lexicon.is_known_adjective(words[3]) {
                return Some(format!("{} {} {} {}", possessive, noun, trailing, COPULA));
            }
            return Some(format!("{} {} {} {}", noun, possessive, trailing, COPULA));
        }
        let rest = words[2..]
            .iter()
            .map(|word| lexicon.translate_token(word))
            .collect::<Vec<_>>()
            .join(" ");
        Some(format!("{} {} {}", noun, possessive, rest))
    }

    // Rule 7: token-by-token translation of the sentence as given.
    fn word_by_word(&self, lexicon: &Lexicon, sentence: &str) -> String {
        sentence
            .split_whitespace()
            .map(|word| lexicon.translate_token(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for TemplateGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tagger::SentenceTagger;
    use std::collections::HashMap;

    fn generate(sentence: &str) -> String {
        generate_with(Lexicon::new(), sentence)
    }

    fn generate_with(lexicon: Lexicon, sentence: &str) -> String {
        let slots = SentenceTagger::new().parse(&lexicon, sentence);
        TemplateGenerator::new().generate(&lexicon, &slots, sentence)
    }

    #[test]
    fn verbatim_phrase_beats_all_templates() {
        let mut phrases = HashMap::new();
        phrases.insert("i am happy".to_string(), "fixed phrase".to_string());
        assert_eq!(generate_with(Lexicon::with_phrases(phrases), "I am happy"), "fixed phrase");
    }

    #[test]
    fn how_are_question_uses_fixed_reply() {
        assert_eq!(generate("how are you?"), "I bódọụ?");
    }

    #[test]
    fn where_question_renders_object_with_suffix() {
        assert_eq!(generate("where is the river?"), "ọ́wụ kí ye?");
    }

    #[test]
    fn do_you_have_question_renders_object() {
        assert_eq!(generate("do you have money?"), "Ị abadị-ugú sabi?");
    }

    #[test]
    fn where_question_without_object_falls_through() {
        // No noun in the sentence, so the where-template cannot fire and
        // the per-token rule takes over.
        assert_eq!(generate("where?"), "where?");
    }

    #[test]
    fn subject_adjective_appends_copula() {
        assert_eq!(generate("I am happy"), "Arí hapi ye");
    }

    #[test]
    fn sov_clause_with_irregular_verb_particle() {
        assert_eq!(generate("you have water"), "Ị bení sabi");
        assert_eq!(generate("he likes fish"), "U ìndí laik");
        assert_eq!(generate("we eat food"), "Wónì fị́yaị fị");
        assert_eq!(generate("they build house"), "Wónì wárị bil");
    }

    #[test]
    fn sov_clause_with_regular_verb_translates_verb() {
        assert_eq!(generate("i see fish"), "Arí ìndí fịnị");
    }

    #[test]
    fn subject_verb_with_unknown_noun_drops_it() {
        // "home" is not in the noun table, so neither object nor location
        // is filled and the bare subject-verb branch renders.
        assert_eq!(generate("she goes home"), "A gha");
    }

    #[test]
    fn subject_verb_with_time_slot() {
        assert_eq!(generate("he sleeps now"), "U now turu");
    }

    #[test]
    fn copula_verb_collapses_to_particle() {
        assert_eq!(generate("i am"), "Arí ye");
    }

    #[test]
    fn possessive_pair_inverts_order() {
        assert_eq!(generate("my father"), "owéi yè");
    }

    #[test]
    fn possessive_with_copula_appends_particle() {
        assert_eq!(generate("my father is"), "owéi yè ye");
    }

    #[test]
    fn possessive_copula_adjective_reorders_to_sov() {
        // "my father is strong": known adjective after the copula puts the
        // possessive in front.
        assert_eq!(generate("my father is strong"), "yè owéi strong ye");
    }

    #[test]
    fn possessive_copula_unknown_trailing_word() {
        assert_eq!(generate("my father is chief"), "owéi yè chief ye");
    }

    #[test]
    fn possessive_long_tail_translates_rest() {
        assert_eq!(generate("my father has canoe"), "owéi yè sabi òrù");
    }

    #[test]
    fn fallback_translates_token_by_token() {
        assert_eq!(generate("the child sleeps now"), "the tọ́bọ̀ụ turu now");
    }

    #[test]
    fn fallback_matches_per_token_translation_exactly() {
        let lexicon = Lexicon::new();
        let sentence = "some totally unknown words here";
        let expected = sentence
            .split_whitespace()
            .map(|word| lexicon.translate_token(word))
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(generate(sentence), expected);
    }

    #[test]
    fn generation_is_total_over_degenerate_input() {
        assert_eq!(generate(""), "");
        assert_eq!(generate("   "), "");
        assert_eq!(generate("?!"), "?!");
        assert_eq!(generate("नमस्ते"), "नमस्ते");
    }
}
