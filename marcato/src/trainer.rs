//! Collection of lexicon and tag n-gram frequencies.

use hashbrown::HashMap;

use crate::model::Model;
use crate::sentence::Sentence;

/// Collects the frequency tables a trigram part-of-speech tagger is trained
/// from.
///
/// The trainer consumes one framed sentence at a time and maintains four
/// running tables across the whole corpus: a word/tag lexicon and tag
/// unigram, bigram, and trigram frequencies. Sentence markers are counted
/// like any other token; because every sentence carries its own markers,
/// bigrams and trigrams never combine tags from two different sentences.
///
/// # Examples
///
/// ```
/// use marcato::{Sentence, Trainer};
///
/// let mut trainer = Trainer::new();
/// trainer.add_sentence(&Sentence::from_tagged("the/DT cat/NN").unwrap());
///
/// assert_eq!(Some(&1), trainer.bigrams().get("DT NN"));
/// ```
#[derive(Debug, Default)]
pub struct Trainer {
    lexicon: HashMap<String, HashMap<String, usize>>,
    unigrams: HashMap<String, usize>,
    bigrams: HashMap<String, usize>,
    trigrams: HashMap<String, usize>,
}

impl Trainer {
    /// Creates a new [`Trainer`] with empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the frequencies of a sentence to the tables.
    ///
    /// A single left-to-right pass over the tokens: the lexicon and unigram
    /// entries are updated at every position, bigrams from the second
    /// position on, trigrams from the third.
    pub fn add_sentence(&mut self, sentence: &Sentence) {
        let tokens = sentence.tokens();
        for (i, token) in tokens.iter().enumerate() {
            *self
                .lexicon
                .entry(token.word().to_string())
                .or_default()
                .entry(token.tag().to_string())
                .or_insert(0) += 1;
            *self.unigrams.entry(token.tag().to_string()).or_insert(0) += 1;
            if i >= 1 {
                let bigram = format!("{} {}", tokens[i - 1].tag(), token.tag());
                *self.bigrams.entry(bigram).or_insert(0) += 1;
            }
            if i >= 2 {
                let trigram = format!(
                    "{} {} {}",
                    tokens[i - 2].tag(),
                    tokens[i - 1].tag(),
                    token.tag()
                );
                *self.trigrams.entry(trigram).or_insert(0) += 1;
            }
        }
    }

    /// Gets the word/tag frequencies.
    pub fn lexicon(&self) -> &HashMap<String, HashMap<String, usize>> {
        &self.lexicon
    }

    /// Gets the tag unigram frequencies.
    pub fn unigrams(&self) -> &HashMap<String, usize> {
        &self.unigrams
    }

    /// Gets the tag bigram frequencies. Keys are two tags joined by a space,
    /// in sentence order.
    pub fn bigrams(&self) -> &HashMap<String, usize> {
        &self.bigrams
    }

    /// Gets the tag trigram frequencies. Keys are three tags joined by
    /// spaces, in sentence order.
    pub fn trigrams(&self) -> &HashMap<String, usize> {
        &self.trigrams
    }

    /// Consumes the trainer and returns the finished tables as a [`Model`].
    pub fn into_model(self) -> Model {
        Model::new(self.lexicon, self.unigrams, self.bigrams, self.trigrams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentence::{TaggedToken, END_MARKER, START_MARKER};

    fn framed(tagged_text: &str) -> Sentence {
        let mut tokens = vec![
            TaggedToken::new(START_MARKER, START_MARKER),
            TaggedToken::new(START_MARKER, START_MARKER),
        ];
        tokens.extend(Sentence::from_tagged(tagged_text).unwrap().into_tokens());
        tokens.push(TaggedToken::new(END_MARKER, END_MARKER));
        Sentence::from_tokens(tokens)
    }

    #[test]
    fn test_trainer_single_sentence() {
        let mut trainer = Trainer::new();
        trainer.add_sentence(&framed("the/DT cat/NN sat/VB"));

        assert_eq!(Some(&1), trainer.lexicon()["the"].get("DT"));
        assert_eq!(Some(&1), trainer.lexicon()["cat"].get("NN"));
        assert_eq!(Some(&1), trainer.lexicon()["sat"].get("VB"));
        assert_eq!(Some(&2), trainer.lexicon()[START_MARKER].get(START_MARKER));
        assert_eq!(Some(&1), trainer.lexicon()[END_MARKER].get(END_MARKER));

        assert_eq!(Some(&2), trainer.unigrams().get(START_MARKER));
        assert_eq!(Some(&1), trainer.unigrams().get("DT"));
        assert_eq!(Some(&1), trainer.unigrams().get("NN"));
        assert_eq!(Some(&1), trainer.unigrams().get("VB"));
        assert_eq!(Some(&1), trainer.unigrams().get(END_MARKER));
        assert_eq!(5, trainer.unigrams().len());

        assert_eq!(Some(&1), trainer.bigrams().get("<START> <START>"));
        assert_eq!(Some(&1), trainer.bigrams().get("<START> DT"));
        assert_eq!(Some(&1), trainer.bigrams().get("DT NN"));
        assert_eq!(Some(&1), trainer.bigrams().get("NN VB"));
        assert_eq!(Some(&1), trainer.bigrams().get("VB <END>"));
        assert_eq!(5, trainer.bigrams().len());

        assert_eq!(Some(&1), trainer.trigrams().get("<START> <START> DT"));
        assert_eq!(Some(&1), trainer.trigrams().get("<START> DT NN"));
        assert_eq!(Some(&1), trainer.trigrams().get("DT NN VB"));
        assert_eq!(Some(&1), trainer.trigrams().get("NN VB <END>"));
        assert_eq!(4, trainer.trigrams().len());
    }

    #[test]
    fn test_trainer_repeated_word_different_tags() {
        let mut trainer = Trainer::new();
        trainer.add_sentence(&framed("bank/NN bank/VB"));
        trainer.add_sentence(&framed("bank/NN bank/NN"));

        assert_eq!(Some(&3), trainer.lexicon()["bank"].get("NN"));
        assert_eq!(Some(&1), trainer.lexicon()["bank"].get("VB"));
    }

    #[test]
    fn test_trainer_count_conservation() {
        let sentences = [
            framed("the/DT cat/NN sat/VB"),
            framed("a/DT dog/NN barked/VB loudly/RB"),
            framed("cats/NN sleep/VB"),
        ];
        let n_tokens: usize = sentences.iter().map(|s| s.len()).sum();

        let mut trainer = Trainer::new();
        for sentence in &sentences {
            trainer.add_sentence(sentence);
        }

        assert_eq!(n_tokens, trainer.unigrams().values().sum::<usize>());
        assert_eq!(
            n_tokens,
            trainer
                .lexicon()
                .values()
                .flat_map(|tag_freqs| tag_freqs.values())
                .sum::<usize>()
        );
    }

    #[test]
    fn test_trainer_boundary_isolation() {
        let mut trainer = Trainer::new();
        trainer.add_sentence(&framed("a/N b/V"));
        trainer.add_sentence(&framed("c/N"));

        // The last real tag of the first sentence pairs with the end marker,
        // and the first real tag of the second sentence pairs with a start
        // marker; the two sentences share no bigram.
        assert_eq!(Some(&1), trainer.bigrams().get("V <END>"));
        assert_eq!(Some(&2), trainer.bigrams().get("<START> N"));
        assert_eq!(None, trainer.bigrams().get("V N"));
        assert_eq!(None, trainer.trigrams().get("N V N"));
    }

    #[test]
    fn test_trainer_deterministic() {
        let mut a = Trainer::new();
        let mut b = Trainer::new();
        for trainer in [&mut a, &mut b] {
            trainer.add_sentence(&framed("the/DT cat/NN sat/VB"));
            trainer.add_sentence(&framed("the/DT dog/NN"));
        }

        assert_eq!(a.lexicon(), b.lexicon());
        assert_eq!(a.unigrams(), b.unigrams());
        assert_eq!(a.bigrams(), b.bigrams());
        assert_eq!(a.trigrams(), b.trigrams());
    }
}
