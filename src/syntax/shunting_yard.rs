use crate::{
    errors::err::{EvalError, EvalResult},
    syntax::{
        operators::Operator,
        tokens::{Delimiter, SpannedTok, Token},
    },
};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Pending {
    LParen,
    Op(Operator),
}

/// Operand and operator stacks for a single evaluation.
#[derive(Debug, Default)]
pub struct ShuntingYard {
    operands: Vec<f64>,
    operators: Vec<Pending>,
}

pub fn evaluate(tokens: &[SpannedTok]) -> EvalResult<f64> {
    let mut yard = ShuntingYard::default();
    for tok in tokens {
        yard.push(tok.elem)?;
    }
    yard.finish()
}

impl ShuntingYard {
    pub fn push(&mut self, tok: Token) -> EvalResult<()> {
        match tok {
            Token::Num(n) => self.operands.push(n),
            Token::Delimiter(Delimiter::LParen) => self.operators.push(Pending::LParen),
            Token::Delimiter(Delimiter::RParen) => loop {
                match self.operators.pop() {
                    Some(Pending::LParen) => break,
                    Some(Pending::Op(op)) => self.apply(op)?,
                    None => return Err(EvalError::UnknownOperator { operator: ')' }),
                }
            },
            Token::Op(op) => {
                while let Some(&Pending::Op(top)) = self.operators.last() {
                    if !top.has_bigger_prec(&op) {
                        break;
                    }
                    self.operators.pop();
                    self.apply(top)?;
                }
                self.operators.push(Pending::Op(op));
            }
        }
        Ok(())
    }

    pub fn finish(mut self) -> EvalResult<f64> {
        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::Op(op) => self.apply(op)?,
                Pending::LParen => return Err(EvalError::UnknownOperator { operator: '(' }),
            }
        }
        match self.operands[..] {
            [result] if result.is_finite() => Ok(result),
            [result] => Err(EvalError::NonFiniteResult { value: result }),
            [] => Err(EvalError::EmptyExpression),
            _ => Err(EvalError::MissingOperator {
                operands: self.operands.len(),
            }),
        }
    }

    fn apply(&mut self, op: Operator) -> EvalResult<()> {
        if self.operands.len() < 2 {
            // A sign the lexer could not fold into a literal, e.g. `-(2)`.
            if let ([operand], '-') = (&mut self.operands[..], op.sym) {
                *operand = -*operand;
                return Ok(());
            }
            return Err(EvalError::NotEnoughOperands { operator: op.sym });
        }
        let b = self.operands.pop().unwrap_or_default();
        let a = self.operands.pop().unwrap_or_default();
        let result = match op.sym {
            '+' => a + b,
            '-' => a - b,
            '*' => a * b,
            '/' => {
                if b == 0.0 {
                    return Err(EvalError::DivisionByZero {
                        dividend: a,
                        divisor: b,
                    });
                }
                a / b
            }
            '^' => {
                if a == 0.0 && b <= 0.0 {
                    return Err(EvalError::ZeroBase { exponent: b });
                }
                if a < 0.0 && b.trunc() != b {
                    return Err(EvalError::NegativeBase {
                        base: a,
                        exponent: b,
                    });
                }
                a.powf(b)
            }
            sym => return Err(EvalError::UnknownOperator { operator: sym }),
        };
        self.operands.push(result);
        Ok(())
    }
}
