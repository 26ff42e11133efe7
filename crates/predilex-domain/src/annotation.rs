//! Linguistic annotation output

/// Coarse part-of-speech tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    /// Lexical verb
    Verb,
    /// Auxiliary verb (forms of être / avoir)
    Auxiliary,
    /// Determiner or article
    Determiner,
    /// Pronoun
    Pronoun,
    /// Preposition
    Adposition,
    /// Capitalized word outside sentence-initial closed classes
    ProperNoun,
    /// Digits
    Number,
    /// Punctuation
    Punctuation,
    /// Anything else
    Other,
}

/// A token with its lemma and tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface form as it appears in the text
    pub text: String,

    /// Dictionary form
    pub lemma: String,

    /// Part-of-speech tag
    pub pos: PartOfSpeech,
}

impl Token {
    /// Create a new token
    pub fn new(text: impl Into<String>, lemma: impl Into<String>, pos: PartOfSpeech) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            pos,
        }
    }

    /// Whether the token is tagged as a lexical verb
    pub fn is_verb(&self) -> bool {
        self.pos == PartOfSpeech::Verb
    }
}
