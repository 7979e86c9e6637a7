// Public exports.
pub use ast::{tag, AstNode};
pub use parser::{parse, ParseError, ParseErrorReason, Parser, MAX_DEPTH};
pub use tokenizer::{Token, TokenKind, TokenizeError, Tokenizer};

// Public mods.
pub mod ast;
pub mod parser;
pub mod tokenizer;
