pub mod error;
pub mod extract;
pub mod lookup;
pub mod normalize;
pub mod types;

pub use error::{ExtractError, LookupError, ShapeError};
pub use extract::{extract_word_defs, load_document, write_definitions};
pub use normalize::{DefaultNormalizer, Normalizer};
pub use types::{Document, Entry, Meaning};
