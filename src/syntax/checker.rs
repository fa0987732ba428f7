//! Recursive-descent grammar checker
//!
//! Accepts exactly the strings of the language grammar:
//!
//! ```text
//! program      := ALGORITMO STRING [varblock] INICIO {statement} FIMALGORITMO
//! varblock     := VAR {ID {COMMA ID} COLON TIPO}
//! statement    := assignment | write_cmd | read_cmd | if_cmd | for_cmd
//! assignment   := ID ATR arith_expr
//! write_cmd    := ESCREVA PARAB (ID | NUMINT | STRING) PARFE
//! read_cmd     := LEIA PARAB ID PARFE
//! if_cmd       := SE logic_expr ENTAO {statement} [SENAO {statement}] FIMSE
//! for_cmd      := PARA ID ATE NUMINT [PASSO NUMINT] {statement} FIMPARA
//! arith_expr   := arith_term {(OPMAIS|OPMENOS|OPMULTI|OPDIVI) arith_term}
//! arith_term   := ID | NUMINT | PARAB arith_expr PARFE
//! logic_expr   := logic_cmp {(E|OU) logic_cmp}
//! logic_cmp    := NAO logic_cmp
//!               | PARAB logic_expr PARFE
//!               | logic_operand relop logic_operand
//! logic_operand:= ID | NUMINT | STRING | PARAB logic_expr PARFE
//! ```
//!
//! Both expression grammars are flat and left-associative: `+ - * /`
//! share one level, as do `E` and `OU`. Every alternative is selected by
//! one-token lookahead. The checker stops at the first mismatch; no
//! recovery or resynchronization is attempted.

use crate::scanner::token::{SourceLine, Token, TokenKind, EOF_TOKEN};
use thiserror::Error;

/// Grammar error: the token sequence left the language at the cursor.
///
/// Every variant carries the offending lexeme and its source line so the
/// diagnostic points at the actual unexpected token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("grammar error: expected {expected}, got '{found}' at line {line}")]
    Expected {
        expected: &'static str,
        found: String,
        line: SourceLine,
    },

    #[error("grammar error: expected identifier or value in expression, got '{found}' at line {line}")]
    ExpectedOperand {
        found: String,
        line: SourceLine,
    },

    #[error("grammar error: expected comparison operator, got '{found}' at line {line}")]
    ExpectedComparison {
        found: String,
        line: SourceLine,
    },

    #[error("grammar error: unexpected start of statement '{found}' at line {line}")]
    UnexpectedStatement {
        found: String,
        line: SourceLine,
    },

    #[error("grammar error: unexpected trailing code '{found}' at line {line}")]
    TrailingCode {
        found: String,
        line: SourceLine,
    },
}

const RELATIONAL: [TokenKind; 6] = [
    TokenKind::LogIgual,
    TokenKind::LogDiff,
    TokenKind::LogMenor,
    TokenKind::LogMenorIgual,
    TokenKind::LogMaior,
    TokenKind::LogMaiorIgual,
];

const ARITHMETIC: [TokenKind; 4] = [
    TokenKind::OpMais,
    TokenKind::OpMenos,
    TokenKind::OpMulti,
    TokenKind::OpDivi,
];

/// Recursive descent acceptor over a borrowed token sequence.
///
/// Holds its own cursor; the sequence itself is never mutated. Each
/// grammar rule either advances past the tokens it consumes or fails
/// without advancing past the offending token.
pub struct SyntaxChecker<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl<'a> SyntaxChecker<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Check the entire token sequence against the grammar.
    ///
    /// Succeeds silently; any leftover tokens after the trailing
    /// `fimalgoritmo` are a fatal error.
    pub fn parse(&mut self) -> Result<(), SyntaxError> {
        self.expect(TokenKind::Algoritmo)?;
        self.expect(TokenKind::Str(String::new()))?;

        if self.check(&TokenKind::Var) {
            self.variable_block()?;
        }

        self.expect(TokenKind::Inicio)?;

        while !self.check(&TokenKind::FimAlgoritmo) && !self.at_end() {
            self.statement()?;
        }

        self.expect(TokenKind::FimAlgoritmo)?;

        if !self.at_end() {
            let token = self.peek();
            return Err(SyntaxError::TrailingCode {
                found: token.kind.lexeme().to_string(),
                line: token.line,
            });
        }

        Ok(())
    }

    /// varblock := VAR {ID {COMMA ID} COLON TIPO}
    fn variable_block(&mut self) -> Result<(), SyntaxError> {
        self.expect(TokenKind::Var)?;

        while self.check(&TokenKind::Id(String::new())) {
            self.advance();

            while self.check(&TokenKind::Comma) {
                self.advance();
                self.expect(TokenKind::Id(String::new()))?;
            }

            self.expect(TokenKind::Colon)?;
            self.expect(TokenKind::Tipo)?;
        }

        Ok(())
    }

    /// Dispatch on the statement-starting token. Anything unrecognized is
    /// a fatal error, never treated as the end of a block.
    fn statement(&mut self) -> Result<(), SyntaxError> {
        match &self.peek().kind {
            TokenKind::Id(_) => self.assignment(),
            TokenKind::Escreva => self.write_command(),
            TokenKind::Leia => self.read_command(),
            TokenKind::Se => self.if_command(),
            TokenKind::Para => self.for_command(),
            _ => {
                let token = self.peek();
                Err(SyntaxError::UnexpectedStatement {
                    found: token.kind.lexeme().to_string(),
                    line: token.line,
                })
            }
        }
    }

    /// assignment := ID ATR arith_expr
    fn assignment(&mut self) -> Result<(), SyntaxError> {
        self.expect(TokenKind::Id(String::new()))?;
        self.expect(TokenKind::Atr)?;
        self.arith_expression()
    }

    /// write_cmd := ESCREVA PARAB (ID | NUMINT | STRING) PARFE
    fn write_command(&mut self) -> Result<(), SyntaxError> {
        self.expect(TokenKind::Escreva)?;
        self.expect(TokenKind::ParAb)?;

        match &self.peek().kind {
            TokenKind::Id(_) | TokenKind::NumInt(_) | TokenKind::Str(_) => {
                self.advance();
            }
            _ => {
                let token = self.peek();
                return Err(SyntaxError::ExpectedOperand {
                    found: token.kind.lexeme().to_string(),
                    line: token.line,
                });
            }
        }

        self.expect(TokenKind::ParFe)
    }

    /// read_cmd := LEIA PARAB ID PARFE
    fn read_command(&mut self) -> Result<(), SyntaxError> {
        self.expect(TokenKind::Leia)?;
        self.expect(TokenKind::ParAb)?;
        self.expect(TokenKind::Id(String::new()))?;
        self.expect(TokenKind::ParFe)
    }

    /// if_cmd := SE logic_expr ENTAO {statement} [SENAO {statement}] FIMSE
    fn if_command(&mut self) -> Result<(), SyntaxError> {
        self.expect(TokenKind::Se)?;
        self.logic_expression()?;
        self.expect(TokenKind::Entao)?;

        while !self.check(&TokenKind::Senao)
            && !self.check(&TokenKind::FimSe)
            && !self.at_end()
        {
            self.statement()?;
        }

        if self.check(&TokenKind::Senao) {
            self.advance();
            while !self.check(&TokenKind::FimSe) && !self.at_end() {
                self.statement()?;
            }
        }

        self.expect(TokenKind::FimSe)
    }

    /// for_cmd := PARA ID ATE NUMINT [PASSO NUMINT] {statement} FIMPARA
    fn for_command(&mut self) -> Result<(), SyntaxError> {
        self.expect(TokenKind::Para)?;
        self.expect(TokenKind::Id(String::new()))?;
        self.expect(TokenKind::Ate)?;
        self.expect(TokenKind::NumInt(String::new()))?;

        if self.check(&TokenKind::Passo) {
            self.advance();
            self.expect(TokenKind::NumInt(String::new()))?;
        }

        while !self.check(&TokenKind::FimPara) && !self.at_end() {
            self.statement()?;
        }

        self.expect(TokenKind::FimPara)
    }

    /// arith_expr := arith_term {(OPMAIS|OPMENOS|OPMULTI|OPDIVI) arith_term}
    fn arith_expression(&mut self) -> Result<(), SyntaxError> {
        self.arith_term()?;

        while self.check_any(&ARITHMETIC) {
            self.advance();
            self.arith_term()?;
        }

        Ok(())
    }

    /// arith_term := ID | NUMINT | PARAB arith_expr PARFE
    fn arith_term(&mut self) -> Result<(), SyntaxError> {
        match &self.peek().kind {
            TokenKind::Id(_) | TokenKind::NumInt(_) => {
                self.advance();
                Ok(())
            }
            TokenKind::ParAb => {
                self.advance();
                self.arith_expression()?;
                self.expect(TokenKind::ParFe)
            }
            _ => {
                let token = self.peek();
                Err(SyntaxError::ExpectedOperand {
                    found: token.kind.lexeme().to_string(),
                    line: token.line,
                })
            }
        }
    }

    /// logic_expr := logic_cmp {(E|OU) logic_cmp}
    fn logic_expression(&mut self) -> Result<(), SyntaxError> {
        self.logic_comparison()?;

        while self.check(&TokenKind::E) || self.check(&TokenKind::Ou) {
            self.advance();
            self.logic_comparison()?;
        }

        Ok(())
    }

    /// logic_cmp := NAO logic_cmp
    ///            | PARAB logic_expr PARFE
    ///            | logic_operand relop logic_operand
    fn logic_comparison(&mut self) -> Result<(), SyntaxError> {
        if self.check(&TokenKind::Nao) {
            self.advance();
            return self.logic_comparison();
        }

        if self.check(&TokenKind::ParAb) {
            self.advance();
            self.logic_expression()?;
            return self.expect(TokenKind::ParFe);
        }

        self.logic_operand()?;

        if self.check_any(&RELATIONAL) {
            self.advance();
        } else {
            let token = self.peek();
            return Err(SyntaxError::ExpectedComparison {
                found: token.kind.lexeme().to_string(),
                line: token.line,
            });
        }

        self.logic_operand()
    }

    /// logic_operand := ID | NUMINT | STRING | PARAB logic_expr PARFE
    fn logic_operand(&mut self) -> Result<(), SyntaxError> {
        match &self.peek().kind {
            TokenKind::Id(_) | TokenKind::NumInt(_) | TokenKind::Str(_) => {
                self.advance();
                Ok(())
            }
            TokenKind::ParAb => {
                self.advance();
                self.logic_expression()?;
                self.expect(TokenKind::ParFe)
            }
            _ => {
                let token = self.peek();
                Err(SyntaxError::ExpectedOperand {
                    found: token.kind.lexeme().to_string(),
                    line: token.line,
                })
            }
        }
    }

    // ===== Cursor primitives =====

    /// Token at the cursor; reading past the end yields the synthetic
    /// end-of-input token.
    fn peek(&self) -> &Token {
        self.tokens.get(self.position).unwrap_or(&EOF_TOKEN)
    }

    /// Non-consuming lookahead by category.
    fn check(&self, kind: &TokenKind) -> bool {
        self.peek().is(kind)
    }

    /// Non-consuming lookahead against a set of categories.
    fn check_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.iter().any(|kind| self.check(kind))
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn at_end(&self) -> bool {
        self.peek().is_eof()
    }

    /// Consume one token of the given category or fail, leaving the
    /// cursor on the offending token.
    fn expect(&mut self, expected: TokenKind) -> Result<(), SyntaxError> {
        if self.check(&expected) {
            self.advance();
            Ok(())
        } else {
            let token = self.peek();
            Err(SyntaxError::Expected {
                expected: expected.category(),
                found: token.kind.lexeme().to_string(),
                line: token.line,
            })
        }
    }
}
