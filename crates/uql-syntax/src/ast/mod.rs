pub mod filter;
pub mod hint;
