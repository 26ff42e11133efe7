//! Rule-based French tokenizer, lemmatizer and tagger
//!
//! Covers what the feature builder needs: tokens for first-name lookup and
//! verb lemmas for a configured set of first-group (`-er`) verbs. Closed word
//! classes come from small fixed lists; everything else is tagged by shape.

use once_cell::sync::Lazy;
use predilex_domain::traits::Annotator;
use predilex_domain::{PartOfSpeech, Token};
use regex::Regex;
use std::collections::HashMap;

/// Elided forms (`l'`, `qu'`), hyphenated words, or single punctuation marks
static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\w+['’]|\w+(?:-\w+)*|[^\w\s]").expect("token pattern is valid")
});

/// Endings appended to the stem of a first-group verb
const ER_ENDINGS: &[&str] = &[
    "er", "e", "es", "ons", "ez", "ent", "é", "ée", "és", "ées", "ant", "ais", "ait", "ions",
    "iez", "aient", "ai", "as", "a", "âmes", "âtes", "èrent", "erai", "eras", "era", "erons",
    "erez", "eront", "erais", "erait", "erions", "eriez", "eraient", "asse", "asses", "ât",
];

const DEFAULT_VERBS: &[&str] = &[
    "tomber", "consolider", "chuter", "glisser", "heurter", "percuter", "blesser", "souffrir",
    "soigner", "hospitaliser", "examiner", "constater", "déclarer", "indemniser", "circuler",
    "traverser", "rouler", "demander", "condamner", "estimer", "fixer", "juger", "confirmer",
    "infirmer", "allouer", "réparer", "imputer", "expertiser",
];

const AUXILIARIES: &[(&str, &str)] = &[
    ("suis", "être"), ("es", "être"), ("est", "être"), ("sommes", "être"), ("êtes", "être"),
    ("sont", "être"), ("été", "être"), ("était", "être"), ("étaient", "être"), ("sera", "être"),
    ("seront", "être"), ("serait", "être"), ("soit", "être"), ("fut", "être"), ("être", "être"),
    ("ai", "avoir"), ("as", "avoir"), ("a", "avoir"), ("avons", "avoir"), ("avez", "avoir"),
    ("ont", "avoir"), ("eu", "avoir"), ("avait", "avoir"), ("avaient", "avoir"),
    ("aura", "avoir"), ("aurait", "avoir"), ("ait", "avoir"), ("eut", "avoir"), ("avoir", "avoir"),
];

const DETERMINERS: &[&str] = &[
    "le", "la", "les", "l'", "l’", "un", "une", "des", "du", "au", "aux", "ce", "cet", "cette",
    "ces", "son", "sa", "ses", "leur", "leurs", "mon", "ma", "mes", "notre", "votre",
];

const PRONOUNS: &[&str] = &[
    "je", "j'", "tu", "il", "elle", "on", "nous", "vous", "ils", "elles", "se", "s'", "lui",
    "qui", "que", "qu'", "dont", "y", "en", "celui", "celle", "ceux", "elle-même", "lui-même",
];

const ADPOSITIONS: &[&str] = &[
    "à", "de", "d'", "d’", "dans", "par", "pour", "sur", "sous", "avec", "sans", "chez", "vers",
    "entre", "après", "avant", "depuis", "pendant", "contre", "selon", "lors",
];

/// Rule-based [`Annotator`] for French text
pub struct RuleBasedAnnotator {
    verb_forms: HashMap<String, String>,
}

impl RuleBasedAnnotator {
    /// Build an annotator that recognizes the inflections of the given
    /// first-group infinitives
    pub fn new<I, S>(infinitives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut verb_forms = HashMap::new();
        for infinitive in infinitives {
            let infinitive = infinitive.as_ref().to_lowercase();
            let Some(stem) = infinitive.strip_suffix("er") else {
                // Only the infinitive itself is recognized for other groups
                verb_forms.insert(infinitive.clone(), infinitive);
                continue;
            };
            for ending in ER_ENDINGS {
                verb_forms
                    .entry(format!("{}{}", stem, ending))
                    .or_insert_with(|| infinitive.clone());
            }
        }
        Self { verb_forms }
    }

    fn tag(&self, surface: &str) -> Token {
        let lower = surface.to_lowercase();

        if surface.chars().all(|c| !c.is_alphanumeric()) {
            return Token::new(surface, surface, PartOfSpeech::Punctuation);
        }
        if surface.chars().all(|c| c.is_ascii_digit()) {
            return Token::new(surface, surface, PartOfSpeech::Number);
        }
        if let Some((_, lemma)) = AUXILIARIES.iter().find(|(form, _)| *form == lower) {
            return Token::new(surface, *lemma, PartOfSpeech::Auxiliary);
        }
        if let Some(lemma) = self.verb_forms.get(&lower) {
            return Token::new(surface, lemma.as_str(), PartOfSpeech::Verb);
        }

        let pos = if DETERMINERS.contains(&lower.as_str()) {
            PartOfSpeech::Determiner
        } else if PRONOUNS.contains(&lower.as_str()) {
            PartOfSpeech::Pronoun
        } else if ADPOSITIONS.contains(&lower.as_str()) {
            PartOfSpeech::Adposition
        } else if surface.chars().next().is_some_and(|c| c.is_uppercase()) {
            PartOfSpeech::ProperNoun
        } else {
            PartOfSpeech::Other
        };
        Token::new(surface, lower, pos)
    }
}

impl Default for RuleBasedAnnotator {
    fn default() -> Self {
        Self::new(DEFAULT_VERBS)
    }
}

impl Annotator for RuleBasedAnnotator {
    fn annotate(&self, text: &str) -> Vec<Token> {
        TOKEN_PATTERN
            .find_iter(text)
            .map(|m| self.tag(m.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verbs(tokens: &[Token]) -> Vec<&str> {
        tokens
            .iter()
            .filter(|t| t.is_verb())
            .map(|t| t.lemma.as_str())
            .collect()
    }

    #[test]
    fn test_tokenizes_elision_and_punctuation() {
        let annotator = RuleBasedAnnotator::default();
        let tokens = annotator.annotate("L'accident, survenu à Jean-Pierre.");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["L'", "accident", ",", "survenu", "à", "Jean-Pierre", "."]);
        assert_eq!(tokens[0].pos, PartOfSpeech::Determiner);
        assert_eq!(tokens[2].pos, PartOfSpeech::Punctuation);
        assert_eq!(tokens[5].pos, PartOfSpeech::ProperNoun);
    }

    #[test]
    fn test_lemmatizes_target_verbs() {
        let annotator = RuleBasedAnnotator::default();
        let tokens = annotator.annotate("Il est tombé puis sa blessure s'est consolidée; elles tombaient souvent");
        assert_eq!(verbs(&tokens), vec!["tomber", "consolider", "tomber"]);
    }

    #[test]
    fn test_inflections() {
        let annotator = RuleBasedAnnotator::default();
        for form in ["tombe", "tombent", "tombant", "tombera", "tombait", "tomba"] {
            let tokens = annotator.annotate(form);
            assert_eq!(verbs(&tokens), vec!["tomber"], "form {}", form);
        }
    }

    #[test]
    fn test_nouns_are_not_verbs() {
        let annotator = RuleBasedAnnotator::default();
        let tokens = annotator.annotate("la consolidation et la blessure");
        assert!(verbs(&tokens).is_empty());
    }

    #[test]
    fn test_auxiliaries() {
        let annotator = RuleBasedAnnotator::default();
        let tokens = annotator.annotate("elle a été");
        assert_eq!(tokens[0].pos, PartOfSpeech::Pronoun);
        assert_eq!(tokens[1].pos, PartOfSpeech::Auxiliary);
        assert_eq!(tokens[1].lemma, "avoir");
        assert_eq!(tokens[2].lemma, "être");
    }

    #[test]
    fn test_numbers_and_empty_text() {
        let annotator = RuleBasedAnnotator::default();
        let tokens = annotator.annotate("le 12/05/2020");
        assert_eq!(tokens[1].pos, PartOfSpeech::Number);
        assert_eq!(tokens[2].pos, PartOfSpeech::Punctuation);
        assert!(annotator.annotate("").is_empty());
    }

    #[test]
    fn test_custom_verbs() {
        let annotator = RuleBasedAnnotator::new(["déraper"]);
        let tokens = annotator.annotate("le véhicule a dérapé");
        assert_eq!(verbs(&tokens), vec!["déraper"]);
    }
}
