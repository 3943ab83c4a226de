//! # tokpipe
//!
//! A pipeline runtime for declarative tokenizer configurations: raw text in,
//! model-ready tokens out, and back again.
//!
//! A serialized configuration tree describes four optional stages
//! (normalization, pre-tokenization, post-processing and decoding), each a
//! tagged variant materialized by its family's factory
//! ([`normalizer::create_normalizer`], [`pre_tokenizer::create_pre_tokenizer`],
//! [`post_processor::create_post_processor`], [`decoder::create_decoder`]),
//! or all four at once through [`pipeline::Pipeline`]. Every family has a
//! `Sequence` variant that chains child stages in order.
//!
//! Alongside the stage framework sit the two engines subword models build
//! on: [`splitter::DictionarySplitter`], a trie-based longest-match text
//! splitter, and [`lattice::TokenLattice`], a weighted lattice with Viterbi
//! decoding.
//!
//! Configuration nodes look like:
//!
//! ```json
//! {
//!   "normalizer": {"type": "Sequence", "normalizers": [
//!     {"type": "NFKC"},
//!     {"type": "Lowercase"}
//!   ]},
//!   "pre_tokenizer": {"type": "Whitespace"},
//!   "decoder": {"type": "WordPiece", "prefix": "##", "cleanup": true}
//! }
//! ```
//!
//! `null` is a valid configuration for any stage and means "no stage".

pub mod bytes;
pub mod config;
pub mod decoder;
pub mod lattice;
pub mod maths;
pub mod normalizer;
pub mod pipeline;
pub mod post_processor;
pub mod pre_tokenizer;
pub mod splitter;

pub use config::{ConfigError, Matcher, PatternConfig, SplitBehavior};
pub use decoder::{create_decoder, Decoder};
pub use lattice::{LatticeNode, TokenLattice};
pub use maths::{max, min, MathsError};
pub use normalizer::{create_normalizer, Normalizer};
pub use pipeline::{Pipeline, PipelineError};
pub use post_processor::{create_post_processor, PostProcessedOutput, PostProcessor};
pub use pre_tokenizer::{create_pre_tokenizer, PreTokenizer};
pub use splitter::DictionarySplitter;
