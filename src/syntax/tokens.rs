use std::convert::TryFrom;

pub use crate::source_pos::{Span, Spanned};

use super::operators::{Operator, OPERATOR_TABLE};

pub type SpannedTok = Spanned<Token>;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Token {
    Num(f64),

    Op(Operator),

    Delimiter(Delimiter),
}

impl Token {
    pub fn is_op(&self) -> bool {
        matches!(self, Token::Op(_))
    }

    pub fn is_lparen(&self) -> bool {
        matches!(self, Token::Delimiter(Delimiter::LParen))
    }
}

/// Single-character tokens. Numbers are never produced from here, they come
/// out of the lexer's literal buffer.
impl TryFrom<char> for Token {
    type Error = ();
    fn try_from(value: char) -> Result<Self, Self::Error> {
        if let Ok(delimiter) = Delimiter::try_from(value) {
            return Ok(Token::Delimiter(delimiter));
        }
        OPERATOR_TABLE
            .get(&value)
            .map(|op| Token::Op(*op))
            .ok_or(())
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Delimiter {
    LParen,
    RParen,
}
impl TryFrom<char> for Delimiter {
    type Error = ();
    fn try_from(value: char) -> Result<Self, Self::Error> {
        Ok(match value {
            '(' => Delimiter::LParen,
            ')' => Delimiter::RParen,
            _ => return Err(()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_char_tokens() {
        assert_eq!(
            Token::try_from('('),
            Ok(Token::Delimiter(Delimiter::LParen))
        );
        assert_eq!(
            Token::try_from(')'),
            Ok(Token::Delimiter(Delimiter::RParen))
        );
        assert_eq!(Token::try_from('^'), Ok(Token::Op(OPERATOR_TABLE[&'^'])));
        assert_eq!(Token::try_from('7'), Err(()));
        assert_eq!(Token::try_from('e'), Err(()));
    }
}
