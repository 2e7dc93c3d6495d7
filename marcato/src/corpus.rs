//! Reading of pre-tagged corpora.

use std::io::BufRead;

use crate::errors::Result;
use crate::sentence::{Sentence, TaggedToken};

/// Reader for Brown-style tagged corpora.
///
/// Every non-blank line of the input is one sentence of whitespace-separated
/// `word/tag` tokens. Before a sentence is handed to the handler, it is framed
/// with the configured start and end markers, so n-grams collected from it
/// never cross a sentence boundary.
///
/// # Examples
///
/// ```
/// use marcato::{CorpusReader, Sentence, TaggedToken, END_MARKER, START_MARKER};
///
/// let start_markers = vec![
///     TaggedToken::new(START_MARKER, START_MARKER),
///     TaggedToken::new(START_MARKER, START_MARKER),
/// ];
/// let end_markers = vec![TaggedToken::new(END_MARKER, END_MARKER)];
/// let reader = CorpusReader::new(start_markers, end_markers, false);
///
/// let mut sentences: Vec<Sentence> = vec![];
/// reader
///     .parse("the/DT cat/NN".as_bytes(), |s| sentences.push(s.clone()))
///     .unwrap();
///
/// assert_eq!(1, sentences.len());
/// assert_eq!(5, sentences[0].len());
/// ```
#[derive(Debug, Clone)]
pub struct CorpusReader {
    start_markers: Vec<TaggedToken>,
    end_markers: Vec<TaggedToken>,
    decapitalize_first: bool,
}

impl CorpusReader {
    /// Creates a new [`CorpusReader`].
    ///
    /// # Arguments
    ///
    /// * `start_markers` - Tokens prepended to every sentence.
    /// * `end_markers` - Tokens appended to every sentence.
    /// * `decapitalize_first` - If true, the first character of the first real
    ///   word of every sentence is lowercased.
    pub fn new(
        start_markers: Vec<TaggedToken>,
        end_markers: Vec<TaggedToken>,
        decapitalize_first: bool,
    ) -> Self {
        Self {
            start_markers,
            end_markers,
            decapitalize_first,
        }
    }

    /// Parses a corpus, calling the handler once per framed sentence, in
    /// corpus order.
    ///
    /// The input is consumed lazily and exactly once. Sentences are only
    /// borrowed by the handler for the duration of one call.
    ///
    /// # Errors
    ///
    /// Returns an error variant when a line cannot be read or a sentence is
    /// malformed. Sentences already handed to the handler are unaffected, but
    /// no further sentence is produced.
    pub fn parse<R, F>(&self, rdr: R, mut handler: F) -> Result<()>
    where
        R: BufRead,
        F: FnMut(&Sentence),
    {
        for line in rdr.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let mut real_tokens = Sentence::from_tagged(&line)?.into_tokens();
            if self.decapitalize_first {
                if let Some(first) = real_tokens.first_mut() {
                    *first = TaggedToken::new(decapitalize(first.word()), first.tag());
                }
            }
            let mut tokens = Vec::with_capacity(
                self.start_markers.len() + real_tokens.len() + self.end_markers.len(),
            );
            tokens.extend(self.start_markers.iter().cloned());
            tokens.extend(real_tokens);
            tokens.extend(self.end_markers.iter().cloned());
            handler(&Sentence::from_tokens(tokens));
        }
        Ok(())
    }
}

fn decapitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentence::{END_MARKER, START_MARKER};

    fn default_reader(decapitalize_first: bool) -> CorpusReader {
        let start_markers = vec![
            TaggedToken::new(START_MARKER, START_MARKER),
            TaggedToken::new(START_MARKER, START_MARKER),
        ];
        let end_markers = vec![TaggedToken::new(END_MARKER, END_MARKER)];
        CorpusReader::new(start_markers, end_markers, decapitalize_first)
    }

    #[test]
    fn test_corpus_reader_framing() {
        let reader = default_reader(false);

        let mut sentences = vec![];
        reader
            .parse("the/DT cat/NN".as_bytes(), |s| sentences.push(s.clone()))
            .unwrap();

        let expected = Sentence::from_tokens(vec![
            TaggedToken::new(START_MARKER, START_MARKER),
            TaggedToken::new(START_MARKER, START_MARKER),
            TaggedToken::new("the", "DT"),
            TaggedToken::new("cat", "NN"),
            TaggedToken::new(END_MARKER, END_MARKER),
        ]);
        assert_eq!(vec![expected], sentences);
    }

    #[test]
    fn test_corpus_reader_decapitalize_first() {
        let reader = default_reader(true);

        let mut sentences = vec![];
        reader
            .parse("The/DT Cat/NN".as_bytes(), |s| sentences.push(s.clone()))
            .unwrap();

        assert_eq!("the", sentences[0].tokens()[2].word());
        // Only the first word is decapitalized.
        assert_eq!("Cat", sentences[0].tokens()[3].word());
    }

    #[test]
    fn test_corpus_reader_no_decapitalize() {
        let reader = default_reader(false);

        let mut sentences = vec![];
        reader
            .parse("The/DT".as_bytes(), |s| sentences.push(s.clone()))
            .unwrap();

        assert_eq!("The", sentences[0].tokens()[2].word());
    }

    #[test]
    fn test_corpus_reader_skips_blank_lines() {
        let reader = default_reader(false);

        let mut n_sents = 0;
        reader
            .parse("a/DT\n\n   \nb/NN\n".as_bytes(), |_| n_sents += 1)
            .unwrap();

        assert_eq!(2, n_sents);
    }

    #[test]
    fn test_corpus_reader_empty_input() {
        let reader = default_reader(false);

        let mut n_sents = 0;
        reader.parse("".as_bytes(), |_| n_sents += 1).unwrap();

        assert_eq!(0, n_sents);
    }

    #[test]
    fn test_corpus_reader_malformed_sentence() {
        let reader = default_reader(false);

        let mut n_sents = 0;
        let result = reader.parse("a/DT\nbroken\n".as_bytes(), |_| n_sents += 1);

        assert!(result.is_err());
        assert_eq!(1, n_sents);
    }
}
