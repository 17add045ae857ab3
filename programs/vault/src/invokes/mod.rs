pub mod share_token;

pub use share_token::*;
