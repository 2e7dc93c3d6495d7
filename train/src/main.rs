use std::fs::File;
use std::io::{prelude::*, stderr, BufReader, BufWriter};
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use marcato::{CorpusReader, TaggedToken, Trainer, END_MARKER, START_MARKER};

#[derive(Parser, Debug)]
#[command(about = "A program to collect training data for a trigram part-of-speech tagger.")]
struct Args {
    /// A pre-tagged training corpus
    corpus: PathBuf,

    /// The file to write word/tag frequencies to
    lexicon: PathBuf,

    /// The file to write tag n-gram frequencies to
    ngrams: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => process::exit(0),
                _ => process::exit(1),
            }
        }
    };

    let start_markers = vec![
        TaggedToken::new(START_MARKER, START_MARKER),
        TaggedToken::new(START_MARKER, START_MARKER),
    ];
    let end_markers = vec![TaggedToken::new(END_MARKER, END_MARKER)];
    let corpus_reader = CorpusReader::new(start_markers, end_markers, true);

    eprintln!("Loading corpus...");
    let f = File::open(args.corpus)?;
    let f = BufReader::new(f);
    let mut trainer = Trainer::new();
    let mut n_sents = 0;
    corpus_reader.parse(f, |sentence| {
        if n_sents % 10000 == 0 {
            eprint!("# of sentences: {n_sents}\r");
            stderr().flush().ok();
        }
        trainer.add_sentence(sentence);
        n_sents += 1;
    })?;
    eprintln!("# of sentences: {n_sents}");

    let model = trainer.into_model();

    eprintln!("Writing training data...");
    model.write_lexicon(BufWriter::new(File::create(args.lexicon)?))?;
    model.write_ngrams(BufWriter::new(File::create(args.ngrams)?))?;

    Ok(())
}
