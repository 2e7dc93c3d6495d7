//! Finished frequency tables and their serialization.

use std::io::Write;

use hashbrown::HashMap;

use crate::errors::Result;

/// Finished frequency tables of one training run.
///
/// A model is obtained from [`Trainer::into_model`](crate::Trainer::into_model)
/// after the whole corpus has been consumed, and is what a downstream decoder
/// loads.
///
/// Both serializers sort entries lexicographically by key, so the produced
/// files are byte-identical across runs over the same corpus. The readers of
/// these files distinguish line kinds by field count, not by order, so
/// sorting is safe.
#[derive(Debug)]
pub struct Model {
    lexicon: HashMap<String, HashMap<String, usize>>,
    unigrams: HashMap<String, usize>,
    bigrams: HashMap<String, usize>,
    trigrams: HashMap<String, usize>,
}

impl Model {
    pub(crate) fn new(
        lexicon: HashMap<String, HashMap<String, usize>>,
        unigrams: HashMap<String, usize>,
        bigrams: HashMap<String, usize>,
        trigrams: HashMap<String, usize>,
    ) -> Self {
        Self {
            lexicon,
            unigrams,
            bigrams,
            trigrams,
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

    /// Gets the tag bigram frequencies.
    pub fn bigrams(&self) -> &HashMap<String, usize> {
        &self.bigrams
    }

    /// Gets the tag trigram frequencies.
    pub fn trigrams(&self) -> &HashMap<String, usize> {
        &self.trigrams
    }

    /// Writes the lexicon as UTF-8 text.
    ///
    /// One line per word: the word followed by every `tag count` pair
    /// observed for it, all separated by single spaces. The sink is flushed
    /// before returning.
    ///
    /// # Errors
    ///
    /// Returns an error variant when writing fails. A failure partway through
    /// leaves the sink truncated.
    pub fn write_lexicon<W>(&self, mut wtr: W) -> Result<()>
    where
        W: Write,
    {
        let mut words: Vec<_> = self.lexicon.keys().collect();
        words.sort_unstable();
        for word in words {
            wtr.write_all(word.as_bytes())?;
            let tag_freqs = &self.lexicon[word];
            let mut tags: Vec<_> = tag_freqs.keys().collect();
            tags.sort_unstable();
            for tag in tags {
                write!(wtr, " {} {}", tag, tag_freqs[tag])?;
            }
            wtr.write_all(b"\n")?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Writes the n-gram frequencies as UTF-8 text.
    ///
    /// Unigram lines (`tag count`) come first, then bigram lines
    /// (`tag tag count`), then trigram lines (`tag tag tag count`), with no
    /// section markers in between; a reader tells the blocks apart by
    /// counting fields. The sink is flushed before returning.
    ///
    /// # Errors
    ///
    /// Returns an error variant when writing fails. A failure partway through
    /// leaves the sink truncated.
    pub fn write_ngrams<W>(&self, mut wtr: W) -> Result<()>
    where
        W: Write,
    {
        for table in [&self.unigrams, &self.bigrams, &self.trigrams] {
            let mut ngrams: Vec<_> = table.keys().collect();
            ngrams.sort_unstable();
            for ngram in ngrams {
                writeln!(wtr, "{} {}", ngram, table[ngram])?;
            }
        }
        wtr.flush()?;
        Ok(())
    }
}
