//! # Marcato
//!
//! Marcato collects the statistics a trigram part-of-speech tagger is trained
//! from: a word/tag lexicon and tag n-gram frequencies of orders 1 to 3,
//! counted in a single pass over a pre-tagged corpus and written in a stable
//! text format. Every sentence is framed with reserved start and end markers
//! before counting, so n-grams never cross sentence boundaries. No smoothing
//! and no probabilities; a downstream decoder consumes the raw counts.
//!
//! ## Examples
//!
//! ```no_run
//! use std::fs::File;
//! use std::io::{BufReader, BufWriter};
//!
//! use marcato::{CorpusReader, TaggedToken, Trainer, END_MARKER, START_MARKER};
//!
//! let start_markers = vec![
//!     TaggedToken::new(START_MARKER, START_MARKER),
//!     TaggedToken::new(START_MARKER, START_MARKER),
//! ];
//! let end_markers = vec![TaggedToken::new(END_MARKER, END_MARKER)];
//! let reader = CorpusReader::new(start_markers, end_markers, true);
//!
//! let corpus = BufReader::new(File::open("corpus.txt").unwrap());
//! let mut trainer = Trainer::new();
//! reader.parse(corpus, |s| trainer.add_sentence(s)).unwrap();
//!
//! let model = trainer.into_model();
//! model
//!     .write_lexicon(BufWriter::new(File::create("lexicon.txt").unwrap()))
//!     .unwrap();
//! model
//!     .write_ngrams(BufWriter::new(File::create("ngrams.txt").unwrap()))
//!     .unwrap();
//! ```

mod corpus;
mod errors;
mod model;
mod sentence;
mod trainer;

pub use corpus::CorpusReader;
pub use errors::{MarcatoError, Result};
pub use model::Model;
pub use sentence::{Sentence, TaggedToken, END_MARKER, START_MARKER};
pub use trainer::Trainer;
