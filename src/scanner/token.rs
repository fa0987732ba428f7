//! Token definitions for the pseudocode scanner
//!
//! The scanner produces a flat sequence of [`Token`] records consumed
//! read-only by both downstream checkers. Fixed-form categories (keywords,
//! punctuation, operators) carry no payload; their canonical spelling is a
//! static lookup via [`TokenKind::lexeme`]. The three open classes
//! (identifier, integer literal, quoted string) carry the matched source
//! text.

use std::fmt;

/// 1-based source line of a token.
///
/// `Unknown` is the sentinel used for the synthetic end-of-input token,
/// which has no position in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLine {
    Line(usize),
    Unknown,
}

impl fmt::Display for SourceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLine::Line(n) => write!(f, "{}", n),
            SourceLine::Unknown => write!(f, "unknown"),
        }
    }
}

/// All token categories produced by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // Program structure keywords
    Algoritmo,
    Var,
    Tipo,
    Inicio,
    FimAlgoritmo,

    // Read/write commands
    Escreva,
    Leia,

    // Conditional
    Se,
    Entao,
    Senao,
    FimSe,

    // Bounded loop
    Para,
    Ate,
    Passo,
    FimPara,

    // Logical connectives
    E,
    Ou,
    Nao,

    // Punctuation
    Comma,
    Colon,
    ParAb,
    ParFe,

    // Assignment operator `<-`
    Atr,

    // Arithmetic operators
    OpMais,
    OpMenos,
    OpMulti,
    OpDivi,

    // Relational operators
    LogIgual,
    LogDiff,
    LogMenor,
    LogMenorIgual,
    LogMaior,
    LogMaiorIgual,

    // Open classes: identifier, integer literal, quoted string
    Id(String),
    NumInt(String),
    Str(String),

    // Synthetic end-of-input
    Eof,
}

impl TokenKind {
    /// Returns the category name as reported in diagnostics and in the
    /// scanner's rewritten line form.
    pub fn category(&self) -> &'static str {
        match self {
            TokenKind::Algoritmo => "ALGORITMO",
            TokenKind::Var => "VAR",
            TokenKind::Tipo => "TIPO",
            TokenKind::Inicio => "INICIO",
            TokenKind::FimAlgoritmo => "FIMALGORITMO",
            TokenKind::Escreva => "ESCREVA",
            TokenKind::Leia => "LEIA",
            TokenKind::Se => "SE",
            TokenKind::Entao => "ENTAO",
            TokenKind::Senao => "SENAO",
            TokenKind::FimSe => "FIMSE",
            TokenKind::Para => "PARA",
            TokenKind::Ate => "ATE",
            TokenKind::Passo => "PASSO",
            TokenKind::FimPara => "FIMPARA",
            TokenKind::E => "E",
            TokenKind::Ou => "OU",
            TokenKind::Nao => "NAO",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
            TokenKind::ParAb => "PARAB",
            TokenKind::ParFe => "PARFE",
            TokenKind::Atr => "ATR",
            TokenKind::OpMais => "OPMAIS",
            TokenKind::OpMenos => "OPMENOS",
            TokenKind::OpMulti => "OPMULTI",
            TokenKind::OpDivi => "OPDIVI",
            TokenKind::LogIgual => "LOGIGUAL",
            TokenKind::LogDiff => "LOGDIFF",
            TokenKind::LogMenor => "LOGMENOR",
            TokenKind::LogMenorIgual => "LOGMENORIGUAL",
            TokenKind::LogMaior => "LOGMAIOR",
            TokenKind::LogMaiorIgual => "LOGMAIORIGUAL",
            TokenKind::Id(_) => "ID",
            TokenKind::NumInt(_) => "NUMINT",
            TokenKind::Str(_) => "STRING",
            TokenKind::Eof => "END_OF_FILE",
        }
    }

    /// Returns the lexeme: the canonical spelling for fixed-form
    /// categories, or the matched source text for the open classes.
    pub fn lexeme(&self) -> &str {
        match self {
            TokenKind::Algoritmo => "algoritmo",
            TokenKind::Var => "var",
            TokenKind::Tipo => "inteiro",
            TokenKind::Inicio => "inicio",
            TokenKind::FimAlgoritmo => "fimalgoritmo",
            TokenKind::Escreva => "escreva",
            TokenKind::Leia => "leia",
            TokenKind::Se => "se",
            TokenKind::Entao => "entao",
            TokenKind::Senao => "senao",
            TokenKind::FimSe => "fimse",
            TokenKind::Para => "para",
            TokenKind::Ate => "ate",
            TokenKind::Passo => "passo",
            TokenKind::FimPara => "fimpara",
            TokenKind::E => "e",
            TokenKind::Ou => "ou",
            TokenKind::Nao => "nao",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::ParAb => "(",
            TokenKind::ParFe => ")",
            TokenKind::Atr => "<-",
            TokenKind::OpMais => "+",
            TokenKind::OpMenos => "-",
            TokenKind::OpMulti => "*",
            TokenKind::OpDivi => "/",
            TokenKind::LogIgual => "=",
            TokenKind::LogDiff => "<>",
            TokenKind::LogMenor => "<",
            TokenKind::LogMenorIgual => "<=",
            TokenKind::LogMaior => ">",
            TokenKind::LogMaiorIgual => ">=",
            TokenKind::Id(text) | TokenKind::NumInt(text) | TokenKind::Str(text) => text,
            TokenKind::Eof => "end of file",
        }
    }
}

/// One scanned token: a category plus the 1-based source line it came
/// from. Tokens are immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: SourceLine,
}

/// Shared synthetic end-of-input token. Reading past the end of the
/// token sequence behaves identically to reading this record.
pub static EOF_TOKEN: Token = Token {
    kind: TokenKind::Eof,
    line: SourceLine::Unknown,
};

impl Token {
    pub fn new(kind: TokenKind, line: SourceLine) -> Self {
        Self { kind, line }
    }

    /// Compares by category only, ignoring any open-class payload.
    pub fn is(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.kind) == std::mem::discriminant(kind)
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind.category(), self.kind.lexeme())
    }
}
