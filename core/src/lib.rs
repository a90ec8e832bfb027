pub mod filter;
pub mod fuzzy;
pub mod highlight;
pub mod interactions;
pub mod page;
pub mod tokenizer;

mod posting;
pub use posting::Posting;
