mod error;
mod fingerprint;
mod kgram;
mod normalize;
mod pipeline;
mod scan;
mod similarity;
mod tokenize;
mod types;

pub use error::{Error, Result};

pub use fingerprint::{Fingerprint, kgram_hash};

pub use kgram::build_kgrams;

pub use normalize::{NameMap, normalize};

pub use pipeline::{fingerprint_sources, run_batch};

pub use similarity::{SimilarPair, SimilarityMatrix, jaccard};

pub use tokenize::{Token, TokenKind, tokenize};

pub use types::{
    BatchOutcome, BatchReport, BatchStats, DEFAULT_K, DEFAULT_MAX_FILE_SIZE_BYTES,
    DEFAULT_SIMILARITY_THRESHOLD, PipelineOptions, SourceUnit, UnitReport, default_ignore_dirs,
    default_source_extensions,
};
