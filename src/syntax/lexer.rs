use std::{convert::TryFrom, f64::consts, mem, str::CharIndices};

use crate::{
    errors::err::{EvalError, EvalResult},
    syntax::{
        operators::OPERATOR_TABLE,
        tokens::{Delimiter, Span, Spanned, SpannedTok, Token},
    },
};

/// Turns an expression into tokens.
///
/// Digits and every character the lexer has no other use for are collected
/// into a literal buffer which is parsed once an operator, a parenthesis or
/// the end of input closes it. A `-` that cannot be a binary operator opens
/// the next literal as its sign; the constants `e` and `p` write their digits
/// into whatever literal is currently open.
pub struct Lexer<'a> {
    chars: CharIndices<'a>,
    tokens: Vec<SpannedTok>,
    literal: String,
    literal_span: Option<Span>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.char_indices(),
            tokens: vec![],
            literal: String::new(),
            literal_span: None,
        }
    }

    pub fn tokenize(mut self) -> EvalResult<Vec<SpannedTok>> {
        while let Some((pos, char)) = self.next() {
            match char {
                ' ' | '\t' => (),
                '-' => {
                    self.flush()?;
                    if self.sign_is_unary() {
                        self.push_literal(pos, char.len_utf8(), "-");
                    } else {
                        self.tokens.push(Spanned::new(
                            Token::Op(OPERATOR_TABLE[&'-']),
                            pos..pos + 1,
                        ));
                    }
                }
                c => match Token::try_from(c) {
                    Ok(tok) => {
                        self.flush()?;
                        self.tokens.push(Spanned::new(tok, pos..pos + 1));
                    }
                    Err(()) => match c {
                        'e' => self.push_literal(pos, 1, &consts::E.to_string()),
                        'p' => self.push_literal(pos, 1, &consts::PI.to_string()),
                        c => {
                            let mut buf = [0; 4];
                            self.push_literal(pos, c.len_utf8(), c.encode_utf8(&mut buf))
                        }
                    },
                },
            }
        }
        self.flush()?;
        validate(&self.tokens)?;
        Ok(self.tokens)
    }

    /// A `-` is a sign at the start of the expression and right after `(` or
    /// another operator.
    fn sign_is_unary(&self) -> bool {
        self.tokens
            .last()
            .map_or(true, |tok| tok.elem.is_op() || tok.elem.is_lparen())
    }

    fn push_literal(&mut self, pos: usize, len: usize, text: &str) {
        self.literal.push_str(text);
        match self.literal_span {
            Some(ref mut span) => span.end = pos + len,
            None => self.literal_span = Some(pos..pos + len),
        }
    }

    fn flush(&mut self) -> EvalResult<()> {
        let span = match self.literal_span.take() {
            Some(span) => span,
            None => return Ok(()),
        };
        let literal = mem::take(&mut self.literal);
        // a lone sign in front of something that is not a number, e.g. `-(2)`
        let elem = if literal == "-" {
            Token::Op(OPERATOR_TABLE[&'-'])
        } else {
            Token::Num(parse_number(literal, &span)?)
        };
        self.tokens.push(Spanned { elem, span });
        Ok(())
    }
}

impl Iterator for Lexer<'_> {
    type Item = (usize, char);
    fn next(&mut self) -> Option<(usize, char)> {
        self.chars.next()
    }
}

fn parse_number(literal: String, span: &Span) -> EvalResult<f64> {
    match literal.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(EvalError::InvalidToken {
            token: literal,
            span: span.clone(),
        }),
    }
}

/// Only the global balance of parentheses is checked, `)1(` goes through.
fn validate(tokens: &[SpannedTok]) -> EvalResult<()> {
    if tokens.is_empty() {
        return Err(EvalError::EmptyExpression);
    }
    let open = tokens.iter().fold(0isize, |open, tok| match tok.elem {
        Token::Delimiter(Delimiter::LParen) => open + 1,
        Token::Delimiter(Delimiter::RParen) => open - 1,
        _ => open,
    });
    if open != 0 {
        return Err(EvalError::UnclosedParentheses);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn elems(source: &str) -> Vec<Token> {
        Lexer::new(source)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|tok| tok.elem)
            .collect()
    }

    fn op(sym: char) -> Token {
        Token::Op(OPERATOR_TABLE[&sym])
    }

    const LPAREN: Token = Token::Delimiter(Delimiter::LParen);
    const RPAREN: Token = Token::Delimiter(Delimiter::RParen);

    #[test]
    fn numbers_and_operators() {
        assert_eq!(
            elems("1 +\t2.5*3"),
            vec![Token::Num(1.0), op('+'), Token::Num(2.5), op('*'), Token::Num(3.0)]
        );
    }

    #[test]
    fn whitespace_does_not_split_literals() {
        assert_eq!(elems("1 2"), vec![Token::Num(12.0)]);
    }

    #[test]
    fn leading_minus_is_a_sign() {
        assert_eq!(elems("-4/2"), vec![Token::Num(-4.0), op('/'), Token::Num(2.0)]);
    }

    #[test]
    fn minus_after_operator_or_paren_is_a_sign() {
        assert_eq!(
            elems("1+-2"),
            vec![Token::Num(1.0), op('+'), Token::Num(-2.0)]
        );
        assert_eq!(
            elems("2+(-1)"),
            vec![Token::Num(2.0), op('+'), LPAREN, Token::Num(-1.0), RPAREN]
        );
    }

    #[test]
    fn minus_after_number_or_rparen_is_binary() {
        assert_eq!(elems("3-1"), vec![Token::Num(3.0), op('-'), Token::Num(1.0)]);
        assert_eq!(
            elems("(3)-1"),
            vec![LPAREN, Token::Num(3.0), RPAREN, op('-'), Token::Num(1.0)]
        );
    }

    #[test]
    fn lone_sign_before_paren_becomes_an_operator() {
        assert_eq!(
            elems("-(2)"),
            vec![op('-'), LPAREN, Token::Num(2.0), RPAREN]
        );
    }

    #[test]
    fn constants_expand_into_the_open_literal() {
        assert_eq!(elems("e"), vec![Token::Num(consts::E)]);
        assert_eq!(elems("-p"), vec![Token::Num(-consts::PI)]);
        assert_eq!(elems("2e"), vec![Token::Num(22.718281828459045)]);
    }

    #[test]
    fn spans_cover_the_source() {
        let tokens = Lexer::new(" -12 + p").tokenize().unwrap();
        let spans: Vec<Span> = tokens.into_iter().map(|tok| tok.span).collect();
        assert_eq!(spans, vec![1..4, 5..6, 7..8]);
    }

    #[test]
    fn invalid_literal() {
        assert_eq!(
            Lexer::new("1+a").tokenize(),
            Err(EvalError::InvalidToken {
                token: "a".into(),
                span: 2..3
            })
        );
        assert_eq!(
            Lexer::new("1&1").tokenize(),
            Err(EvalError::InvalidToken {
                token: "1&1".into(),
                span: 0..3
            })
        );
        assert_eq!(
            Lexer::new("ee").tokenize(),
            Err(EvalError::InvalidToken {
                token: "2.7182818284590452.718281828459045".into(),
                span: 0..2
            })
        );
    }

    #[test]
    fn non_finite_literals_are_rejected() {
        assert!(matches!(
            Lexer::new("inf").tokenize(),
            Err(EvalError::InvalidToken { .. })
        ));
        assert!(matches!(
            Lexer::new("1+nan").tokenize(),
            Err(EvalError::InvalidToken { .. })
        ));
    }

    #[test]
    fn empty_input() {
        assert_eq!(Lexer::new("").tokenize(), Err(EvalError::EmptyExpression));
        assert_eq!(Lexer::new(" \t ").tokenize(), Err(EvalError::EmptyExpression));
    }

    #[test]
    fn unbalanced_parentheses() {
        assert_eq!(
            Lexer::new("(1+2").tokenize(),
            Err(EvalError::UnclosedParentheses)
        );
        assert_eq!(
            Lexer::new("1+2)").tokenize(),
            Err(EvalError::UnclosedParentheses)
        );
    }

    #[test]
    fn balance_is_global_only() {
        assert_eq!(elems(")1("), vec![RPAREN, Token::Num(1.0), LPAREN]);
    }
}
