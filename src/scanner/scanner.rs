//! Lexical scanner for pseudocode source text
//!
//! Converts raw source lines into a flat [`Token`] sequence. Each line is
//! scanned with a fixed, ordered list of matchers; the first matcher that
//! matches at the current offset consumes a span and emits one token. The
//! order resolves ambiguity (`<=` must never scan as `<` then `=`, and a
//! keyword must never match as the prefix of a longer identifier).
//!
//! Characters matched by nothing — whitespace included — are skipped one
//! at a time without emitting a token. The only fatal lexical condition is
//! a string literal with no closing quote on its line.

use super::token::{SourceLine, Token, TokenKind};
use thiserror::Error;

/// Lexical scan error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("scan error: unterminated string literal at line {line}")]
    UnterminatedString { line: usize },
}

/// Reserved keywords, longest spelling first so that a longer keyword is
/// always tried before any shorter one. Matching is case-insensitive.
const KEYWORDS: &[(&str, TokenKind)] = &[
    ("fimalgoritmo", TokenKind::FimAlgoritmo),
    ("algoritmo", TokenKind::Algoritmo),
    ("fimpara", TokenKind::FimPara),
    ("escreva", TokenKind::Escreva),
    ("inteiro", TokenKind::Tipo),
    ("inicio", TokenKind::Inicio),
    ("fimse", TokenKind::FimSe),
    ("passo", TokenKind::Passo),
    ("entao", TokenKind::Entao),
    ("senao", TokenKind::Senao),
    ("leia", TokenKind::Leia),
    ("para", TokenKind::Para),
    ("nao", TokenKind::Nao),
    ("ate", TokenKind::Ate),
    ("var", TokenKind::Var),
    ("se", TokenKind::Se),
    ("ou", TokenKind::Ou),
    ("e", TokenKind::E),
];

/// Operators and punctuation in matcher-precedence order: the assignment
/// arrow, then two-character relational operators, then their
/// single-character prefixes, then arithmetic and punctuation.
const OPERATORS: &[(&str, TokenKind)] = &[
    ("<-", TokenKind::Atr),
    ("<>", TokenKind::LogDiff),
    ("<=", TokenKind::LogMenorIgual),
    (">=", TokenKind::LogMaiorIgual),
    ("<", TokenKind::LogMenor),
    (">", TokenKind::LogMaior),
    ("=", TokenKind::LogIgual),
    ("+", TokenKind::OpMais),
    ("-", TokenKind::OpMenos),
    ("*", TokenKind::OpMulti),
    ("/", TokenKind::OpDivi),
    ("(", TokenKind::ParAb),
    (")", TokenKind::ParFe),
    (",", TokenKind::Comma),
    (":", TokenKind::Colon),
];

/// Line-by-line scanner for pseudocode source
pub struct Scanner {
    lines: Vec<Vec<char>>,
}

impl Scanner {
    /// Create a new scanner for the given source string.
    pub fn new(source: &str) -> Self {
        Self {
            lines: source.lines().map(|line| line.chars().collect()).collect(),
        }
    }

    /// Tokenize the entire input.
    ///
    /// Token positions are 1-based physical line numbers; every token on
    /// a line shares its line number. No explicit end-of-input token is
    /// appended — consumers treat reading past the end as
    /// [`TokenKind::Eof`].
    pub fn tokenize(&self) -> Result<Vec<Token>, ScanError> {
        let mut tokens = Vec::new();

        for (index, line) in self.lines.iter().enumerate() {
            self.scan_line(line, index + 1, &mut tokens)?;
        }

        Ok(tokens)
    }

    /// Scan a single line, appending its tokens in source order.
    fn scan_line(
        &self,
        line: &[char],
        number: usize,
        tokens: &mut Vec<Token>,
    ) -> Result<(), ScanError> {
        let mut offset = 0;

        while offset < line.len() {
            if let Some((kind, length)) = match_at(line, offset, number)? {
                tokens.push(Token::new(kind, SourceLine::Line(number)));
                offset += length;
            } else {
                // Unmatched characters (whitespace and stray symbols
                // alike) are skipped without emitting a token.
                offset += 1;
            }
        }

        Ok(())
    }
}

/// Try every matcher at the given offset, in precedence order.
fn match_at(
    line: &[char],
    offset: usize,
    number: usize,
) -> Result<Option<(TokenKind, usize)>, ScanError> {
    if line[offset] == '"' {
        return match_string(line, offset, number).map(Some);
    }

    let matched = match_keyword(line, offset)
        .or_else(|| match_operator(line, offset))
        .or_else(|| match_number(line, offset))
        .or_else(|| match_identifier(line, offset));

    Ok(matched)
}

/// Quoted string literal: from the opening quote to the next unescaped
/// quote on the same line. The lexeme keeps the quotes and any escapes
/// verbatim; content is never unescaped.
fn match_string(
    line: &[char],
    offset: usize,
    number: usize,
) -> Result<(TokenKind, usize), ScanError> {
    let mut index = offset + 1;
    let mut escaped = false;

    while index < line.len() {
        let ch = line[index];
        if escaped {
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == '"' {
            let text: String = line[offset..=index].iter().collect();
            return Ok((TokenKind::Str(text), index + 1 - offset));
        }
        index += 1;
    }

    Err(ScanError::UnterminatedString { line: number })
}

/// Reserved keyword: longest case-insensitive match, accepted only when
/// both boundaries are non-alphanumeric (so `inteiros` is an identifier,
/// not the keyword `inteiro` with a trailing `s`).
fn match_keyword(line: &[char], offset: usize) -> Option<(TokenKind, usize)> {
    for (spelling, kind) in KEYWORDS {
        let length = spelling.len();
        if offset + length > line.len() {
            continue;
        }

        let matches_spelling = spelling
            .chars()
            .zip(&line[offset..offset + length])
            .all(|(expected, &found)| expected.eq_ignore_ascii_case(&found));

        if matches_spelling && boundary_ok(line, offset, offset + length) {
            return Some((kind.clone(), length));
        }
    }
    None
}

/// Fixed-form operator or punctuation symbol.
fn match_operator(line: &[char], offset: usize) -> Option<(TokenKind, usize)> {
    for (symbol, kind) in OPERATORS {
        let length = symbol.len();
        if offset + length > line.len() {
            continue;
        }

        if symbol.chars().eq(line[offset..offset + length].iter().copied()) {
            return Some((kind.clone(), length));
        }
    }
    None
}

/// Integer literal: maximal digit run at non-alphanumeric boundaries. A
/// digit run glued to letters (`123abc`) matches nothing.
fn match_number(line: &[char], offset: usize) -> Option<(TokenKind, usize)> {
    if !line[offset].is_ascii_digit() {
        return None;
    }

    let mut end = offset;
    while end < line.len() && line[end].is_ascii_digit() {
        end += 1;
    }

    if !boundary_ok(line, offset, end) {
        return None;
    }

    let text: String = line[offset..end].iter().collect();
    Some((TokenKind::NumInt(text), end - offset))
}

/// Identifier: a letter or underscore followed by a maximal run of
/// letters, digits, and underscores, at a non-alphanumeric left boundary.
fn match_identifier(line: &[char], offset: usize) -> Option<(TokenKind, usize)> {
    let first = line[offset];
    if !first.is_alphabetic() && first != '_' {
        return None;
    }

    if offset > 0 && line[offset - 1].is_alphanumeric() {
        return None;
    }

    let mut end = offset + 1;
    while end < line.len() && (line[end].is_alphanumeric() || line[end] == '_') {
        end += 1;
    }

    let text: String = line[offset..end].iter().collect();
    Some((TokenKind::Id(text), end - offset))
}

/// Both boundaries of the span must be non-alphanumeric (or the edge of
/// the line).
fn boundary_ok(line: &[char], start: usize, end: usize) -> bool {
    let left_ok = start == 0 || !line[start - 1].is_alphanumeric();
    let right_ok = end == line.len() || !line[end].is_alphanumeric();
    left_ok && right_ok
}

/// Render the scanner's diagnostic "rewritten" form: one entry per source
/// line that produced tokens, pairing the line number with the
/// space-separated category names of its tokens.
///
/// This form is for external inspection only; the grammar checker
/// operates on the structured token sequence, never on this text.
pub fn category_lines(tokens: &[Token]) -> Vec<(usize, String)> {
    let mut rendered: Vec<(usize, String)> = Vec::new();

    for token in tokens {
        let SourceLine::Line(number) = token.line else {
            continue;
        };
        match rendered.last_mut() {
            Some((last, text)) if *last == number => {
                text.push(' ');
                text.push_str(token.kind.category());
            }
            _ => rendered.push((number, token.kind.category().to_string())),
        }
    }

    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(source: &str) -> Vec<Token> {
        Scanner::new(source).tokenize().unwrap()
    }

    #[test]
    fn test_keyword_boundary() {
        // `inteiros` fails the right-boundary check against the trailing
        // `s` and must scan as a single identifier.
        let tokens = scan("inteiros");
        assert_eq!(tokens.len(), 1);
        assert!(matches!(tokens[0].kind, TokenKind::Id(ref s) if s == "inteiros"));
    }

    #[test]
    fn test_keyword_case_insensitive() {
        let tokens = scan("ALGORITMO Inicio FimAlgoritmo");
        assert!(matches!(tokens[0].kind, TokenKind::Algoritmo));
        assert!(matches!(tokens[1].kind, TokenKind::Inicio));
        assert!(matches!(tokens[2].kind, TokenKind::FimAlgoritmo));
    }

    #[test]
    fn test_relational_longest_match() {
        let tokens = scan("<= >= <> <-");
        assert!(matches!(tokens[0].kind, TokenKind::LogMenorIgual));
        assert!(matches!(tokens[1].kind, TokenKind::LogMaiorIgual));
        assert!(matches!(tokens[2].kind, TokenKind::LogDiff));
        assert!(matches!(tokens[3].kind, TokenKind::Atr));
        assert_eq!(tokens.len(), 4);
    }

    #[test]
    fn test_single_char_operators() {
        let tokens = scan("< > = + - * / ( ) , :");
        let categories: Vec<&str> =
            tokens.iter().map(|t| t.kind.category()).collect();
        assert_eq!(
            categories,
            [
                "LOGMENOR", "LOGMAIOR", "LOGIGUAL", "OPMAIS", "OPMENOS",
                "OPMULTI", "OPDIVI", "PARAB", "PARFE", "COMMA", "COLON"
            ]
        );
    }

    #[test]
    fn test_assignment_line() {
        let tokens = scan("soma <- soma + 1");
        assert!(matches!(tokens[0].kind, TokenKind::Id(ref s) if s == "soma"));
        assert!(matches!(tokens[1].kind, TokenKind::Atr));
        assert!(matches!(tokens[2].kind, TokenKind::Id(_)));
        assert!(matches!(tokens[3].kind, TokenKind::OpMais));
        assert!(matches!(tokens[4].kind, TokenKind::NumInt(ref s) if s == "1"));
    }

    #[test]
    fn test_string_literal_keeps_quotes() {
        let tokens = scan(r#"escreva("ola mundo")"#);
        assert!(matches!(tokens[0].kind, TokenKind::Escreva));
        assert!(matches!(tokens[1].kind, TokenKind::ParAb));
        assert!(matches!(tokens[2].kind, TokenKind::Str(ref s) if s == "\"ola mundo\""));
        assert!(matches!(tokens[3].kind, TokenKind::ParFe));
    }

    #[test]
    fn test_escaped_quote_does_not_close_string() {
        let tokens = scan(r#""diz \"oi\"""#);
        assert_eq!(tokens.len(), 1);
        assert!(matches!(tokens[0].kind, TokenKind::Str(ref s) if s == r#""diz \"oi\"""#));
    }

    #[test]
    fn test_unterminated_string_is_fatal() {
        let result = Scanner::new("x <- 1\n\"abc").tokenize();
        assert_eq!(result, Err(ScanError::UnterminatedString { line: 2 }));
    }

    #[test]
    fn test_line_numbers_are_one_based() {
        let tokens = scan("algoritmo \"teste\"\ninicio\nfimalgoritmo");
        assert_eq!(tokens[0].line, SourceLine::Line(1));
        assert_eq!(tokens[1].line, SourceLine::Line(1));
        assert_eq!(tokens[2].line, SourceLine::Line(2));
        assert_eq!(tokens[3].line, SourceLine::Line(3));
    }

    #[test]
    fn test_blank_lines_preserve_numbering() {
        let tokens = scan("inicio\n\n\nfimalgoritmo");
        assert_eq!(tokens[1].line, SourceLine::Line(4));
    }

    #[test]
    fn test_unmatched_characters_skipped_silently() {
        // Stray symbols match no pattern and never surface as errors.
        let tokens = scan("x @ # $ y");
        assert_eq!(tokens.len(), 2);
        assert!(matches!(tokens[0].kind, TokenKind::Id(ref s) if s == "x"));
        assert!(matches!(tokens[1].kind, TokenKind::Id(ref s) if s == "y"));
    }

    #[test]
    fn test_digits_glued_to_letters_match_nothing() {
        let tokens = scan("123abc");
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_category_lines_rendering() {
        let tokens = scan("algoritmo \"soma\"\nx <- 2");
        let lines = category_lines(&tokens);
        assert_eq!(lines[0], (1, "ALGORITMO STRING".to_string()));
        assert_eq!(lines[1], (2, "ID ATR NUMINT".to_string()));
    }

    #[test]
    fn test_keyword_inside_identifier_is_not_split() {
        let tokens = scan("separa");
        assert_eq!(tokens.len(), 1);
        assert!(matches!(tokens[0].kind, TokenKind::Id(ref s) if s == "separa"));
    }
}
