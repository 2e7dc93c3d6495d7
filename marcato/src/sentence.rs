use crate::errors::{MarcatoError, Result};

/// Reserved word and tag of the start-of-sentence marker.
pub const START_MARKER: &str = "<START>";

/// Reserved word and tag of the end-of-sentence marker.
pub const END_MARKER: &str = "<END>";

/// Word with its part-of-speech tag.
///
/// Sentence markers are ordinary tagged tokens whose word and tag equal
/// [`START_MARKER`] or [`END_MARKER`]; they take part in frequency collection
/// like any other token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaggedToken {
    word: String,
    tag: String,
}

impl TaggedToken {
    /// Creates a new [`TaggedToken`].
    ///
    /// # Examples
    ///
    /// ```
    /// use marcato::TaggedToken;
    ///
    /// let token = TaggedToken::new("cat", "NN");
    /// assert_eq!("cat", token.word());
    /// assert_eq!("NN", token.tag());
    /// ```
    pub fn new<W, T>(word: W, tag: T) -> Self
    where
        W: Into<String>,
        T: Into<String>,
    {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }

    /// Gets the word.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Gets the part-of-speech tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

/// Ordered sequence of tagged tokens.
///
/// The order of tokens is the order they occur in the corpus and is never
/// changed by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    tokens: Vec<TaggedToken>,
}

impl Sentence {
    /// Creates a new [`Sentence`] from a vector of tokens.
    pub fn from_tokens(tokens: Vec<TaggedToken>) -> Self {
        Self { tokens }
    }

    /// Creates a new [`Sentence`] from a tagged string.
    ///
    /// # Arguments
    ///
    /// * `tagged_text` - A string of whitespace-separated `word/tag` tokens.
    ///   The tag is the text after the last slash, so words may contain
    ///   slashes themselves (e.g. `1/2/CD`).
    ///
    /// # Returns
    ///
    /// A new [`Sentence`].
    ///
    /// # Errors
    ///
    /// This function will return an error variant when:
    ///
    /// * `tagged_text` contains no tokens.
    /// * A token has no slash separating word and tag.
    /// * A token has an empty word or an empty tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use marcato::Sentence;
    ///
    /// let s = Sentence::from_tagged("the/DT cat/NN");
    /// assert!(s.is_ok());
    ///
    /// let s = Sentence::from_tagged("the cat");
    /// assert!(s.is_err());
    /// ```
    pub fn from_tagged<S>(tagged_text: S) -> Result<Self>
    where
        S: AsRef<str>,
    {
        let tagged_text = tagged_text.as_ref();

        let mut tokens = vec![];
        for raw_token in tagged_text.split_whitespace() {
            let (word, tag) = raw_token.rsplit_once('/').ok_or_else(|| {
                MarcatoError::invalid_corpus(format!("token `{raw_token}` has no tag separator"))
            })?;
            if word.is_empty() {
                return Err(MarcatoError::invalid_corpus(format!(
                    "token `{raw_token}` has an empty word"
                )));
            }
            if tag.is_empty() {
                return Err(MarcatoError::invalid_corpus(format!(
                    "token `{raw_token}` has an empty tag"
                )));
            }
            tokens.push(TaggedToken::new(word, tag));
        }
        if tokens.is_empty() {
            return Err(MarcatoError::invalid_argument(
                "tagged_text",
                "must contain at least one token",
            ));
        }

        Ok(Self { tokens })
    }

    /// Gets the tokens.
    pub fn tokens(&self) -> &[TaggedToken] {
        &self.tokens
    }

    /// Consumes the sentence and returns its tokens.
    pub fn into_tokens(self) -> Vec<TaggedToken> {
        self.tokens
    }

    /// Returns the number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Checks whether the sentence contains no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
