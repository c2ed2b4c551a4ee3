//! Input parsing: format sniffing and row tokenization.

mod sniff;
mod tokenize;

pub use sniff::{decode, detect_delimiter, detect_encoding, Delimiter};
pub use tokenize::{read_rows, split_row, tokenize};
