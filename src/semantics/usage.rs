//! Variable-usage checker
//!
//! One forward pass over the token sequence enforcing three rules, in
//! token order: no redeclaration, declare-before-read, and declare/assign
//! before use. Recognition is by shallow token adjacency (the token next
//! to a `TIPO`, `LEIA`, or `ATR` marker), not by a parse tree.
//!
//! The pass does not understand control flow: an assignment inside a
//! conditional or loop body marks the variable assigned for all code
//! after it in token order. Code before the branch still sees the
//! variable as unassigned.

use crate::scanner::token::{SourceLine, Token, TokenKind};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Variable-usage error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("usage error: double declaration of variable \"{name}\" at line {line}")]
    DoubleDeclaration { name: String, line: SourceLine },

    #[error("usage error: undeclared variable \"{name}\" used at line {line}")]
    Undeclared { name: String, line: SourceLine },

    #[error("usage error: unassigned variable \"{name}\" used at line {line}")]
    Unassigned { name: String, line: SourceLine },
}

/// Single-pass usage checker over a borrowed token sequence.
///
/// Owns its cursor and its declared/assigned sets; both sets map an
/// identifier name to the token that introduced it (the declaration, or
/// the first assignment). The sets only grow during the pass and are
/// discarded with the checker.
pub struct UsageChecker<'a> {
    tokens: &'a [Token],
    position: usize,
    declared: FxHashMap<&'a str, &'a Token>,
    assigned: FxHashMap<&'a str, &'a Token>,
}

impl<'a> UsageChecker<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
            declared: FxHashMap::default(),
            assigned: FxHashMap::default(),
        }
    }

    /// Walk the full token sequence, failing on the first violation.
    pub fn validate(&mut self) -> Result<(), UsageError> {
        while self.position < self.tokens.len() {
            match &self.tokens[self.position].kind {
                TokenKind::Tipo => self.register_declarations()?,
                TokenKind::Leia => self.register_read()?,
                // An escreva argument is never usage-checked; only leia
                // targets and bare identifier reads are.
                TokenKind::Escreva => self.position += 2,
                TokenKind::Id(_) => self.check_identifier()?,
                _ => {}
            }
            self.position += 1;
        }
        Ok(())
    }

    /// Cursor on `TIPO`, closing a declaration group of the shape
    /// `ID {COMMA ID} COLON TIPO`. Walk back across the colon and the
    /// comma-separated list, registering each identifier.
    fn register_declarations(&mut self) -> Result<(), UsageError> {
        let tokens = self.tokens;
        let position = self.position;

        if position < 2
            || tokens[position - 1].kind != TokenKind::Colon
            || !matches!(tokens[position - 2].kind, TokenKind::Id(_))
        {
            return Ok(());
        }

        let mut group = vec![position - 2];
        let mut index = position - 2;
        while index >= 2
            && tokens[index - 1].kind == TokenKind::Comma
            && matches!(tokens[index - 2].kind, TokenKind::Id(_))
        {
            index -= 2;
            group.push(index);
        }

        // Register in source order so a duplicate within one group is
        // reported at its second occurrence.
        for &id_index in group.iter().rev() {
            let token = &tokens[id_index];
            let TokenKind::Id(name) = &token.kind else {
                continue;
            };

            if self.declared.contains_key(name.as_str()) {
                return Err(UsageError::DoubleDeclaration {
                    name: name.clone(),
                    line: token.line,
                });
            }
            self.declared.insert(name.as_str(), token);
        }

        Ok(())
    }

    /// Cursor on `LEIA` of a `LEIA PARAB ID PARFE` command. The target
    /// must be declared; reading into it counts as its first assignment.
    fn register_read(&mut self) -> Result<(), UsageError> {
        self.position += 2;

        let Some(token) = self.tokens.get(self.position) else {
            return Ok(());
        };
        let TokenKind::Id(name) = &token.kind else {
            return Ok(());
        };

        if !self.declared.contains_key(name.as_str()) {
            return Err(UsageError::Undeclared {
                name: name.clone(),
                line: token.line,
            });
        }

        self.assigned.entry(name.as_str()).or_insert(token);
        Ok(())
    }

    /// Cursor on a standalone `ID`: an assignment target if the next
    /// token is `ATR`, a declaration-list member if the next token is
    /// `COLON` or `COMMA` (handled at the closing `TIPO`), and a plain
    /// read otherwise.
    fn check_identifier(&mut self) -> Result<(), UsageError> {
        let token = &self.tokens[self.position];
        let TokenKind::Id(name) = &token.kind else {
            return Ok(());
        };

        let next = self.tokens.get(self.position + 1).map(|t| &t.kind);

        match next {
            Some(TokenKind::Colon) | Some(TokenKind::Comma) => Ok(()),
            Some(TokenKind::Atr) => {
                if self.assigned.contains_key(name.as_str()) {
                    return Ok(());
                }
                if !self.declared.contains_key(name.as_str()) {
                    return Err(UsageError::Undeclared {
                        name: name.clone(),
                        line: token.line,
                    });
                }
                self.assigned.insert(name.as_str(), token);
                Ok(())
            }
            _ => {
                if !self.declared.contains_key(name.as_str()) {
                    return Err(UsageError::Undeclared {
                        name: name.clone(),
                        line: token.line,
                    });
                }
                if !self.assigned.contains_key(name.as_str()) {
                    return Err(UsageError::Unassigned {
                        name: name.clone(),
                        line: token.line,
                    });
                }
                Ok(())
            }
        }
    }
}
