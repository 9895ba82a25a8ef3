mod lexed_token;
mod token_kind;

pub use lexed_token::Token;
pub use token_kind::TokenKind;
