pub mod state;
pub mod token;
pub mod tokenizer;

pub use state::{dwell_time, ReadingState};
pub use token::Token;
pub use tokenizer::tokenize;
