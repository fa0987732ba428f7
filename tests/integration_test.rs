// Integration tests for the full validation pipeline

use porcheck::error::AnalysisError;
use porcheck::scanner::scanner::Scanner;
use porcheck::semantics::usage::UsageChecker;
use porcheck::syntax::checker::SyntaxChecker;
use porcheck::validate_source;

#[test]
fn test_complete_program_passes_all_stages() {
    let source = r#"algoritmo "media de duas notas"
var
  nota1, nota2, media : inteiro
inicio
  leia(nota1)
  leia(nota2)
  media <- (nota1 + nota2) / 2
  se media >= 7 entao
    escreva("aprovado")
  senao
    escreva("reprovado")
  fimse
  escreva(media)
fimalgoritmo"#;

    let tokens = validate_source(source).expect("pipeline should accept the program");
    assert!(!tokens.is_empty());
}

#[test]
fn test_loop_program_passes_all_stages() {
    let source = r#"algoritmo "contagem"
var
  i, total : inteiro
inicio
  total <- 0
  i <- 1
  para i ate 10 passo 2
    total <- total + i
  fimpara
  escreva(total)
fimalgoritmo"#;

    assert!(validate_source(source).is_ok());
}

#[test]
fn test_scan_error_stops_pipeline() {
    let source = "algoritmo \"abc\ninicio\nfimalgoritmo";
    let error = validate_source(source).unwrap_err();
    assert!(matches!(error, AnalysisError::Scan(_)));
    assert_eq!(
        error.to_string(),
        "scan error: unterminated string literal at line 1"
    );
}

#[test]
fn test_grammar_error_cites_expected_and_line() {
    let source = "algoritmo \"t\"\ninicio\nx <-\nfimalgoritmo";
    let error = validate_source(source).unwrap_err();
    assert!(matches!(error, AnalysisError::Grammar(_)));
    assert_eq!(
        error.to_string(),
        "grammar error: expected identifier or value in expression, got 'fimalgoritmo' at line 4"
    );
}

#[test]
fn test_usage_error_names_variable_and_line() {
    let source = "algoritmo \"t\"\nvar\nx : inteiro\nx : inteiro\ninicio\nfimalgoritmo";
    let error = validate_source(source).unwrap_err();
    assert_eq!(
        error.to_string(),
        "usage error: double declaration of variable \"x\" at line 4"
    );
}

#[test]
fn test_unassigned_read_reported_after_valid_grammar() {
    let source = "algoritmo \"t\"\nvar\nx, y : inteiro\ninicio\ny <- x\nfimalgoritmo";

    // Grammar accepts the program; only the usage pass rejects it.
    let tokens = Scanner::new(source).tokenize().unwrap();
    assert!(SyntaxChecker::new(&tokens).parse().is_ok());

    let error = validate_source(source).unwrap_err();
    assert_eq!(
        error.to_string(),
        "usage error: unassigned variable \"x\" used at line 5"
    );
}

#[test]
fn test_grammar_failure_precedes_usage_check() {
    // Both a grammar problem (missing fimse) and a usage problem
    // (undeclared z) are present; the grammar error wins because stages
    // run in order and the first failure aborts the rest.
    let source = "algoritmo \"t\"\ninicio\nse 1 > 0 entao\nz <- 1\nfimalgoritmo";
    let error = validate_source(source).unwrap_err();
    assert!(matches!(error, AnalysisError::Grammar(_)));
}

#[test]
fn test_pipeline_is_idempotent() {
    let valid = "algoritmo \"t\"\nvar\nx : inteiro\ninicio\nx <- 1\nfimalgoritmo";
    let first = validate_source(valid).unwrap();
    let second = validate_source(valid).unwrap();
    assert_eq!(first, second);

    let invalid = "algoritmo \"t\"\ninicio\nw <- 1\nfimalgoritmo";
    let first = validate_source(invalid).unwrap_err();
    let second = validate_source(invalid).unwrap_err();
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn test_checkers_keep_independent_cursors() {
    let source = "algoritmo \"t\"\nvar\nx : inteiro\ninicio\nx <- 1\nfimalgoritmo";
    let tokens = Scanner::new(source).tokenize().unwrap();

    // Running the grammar checker must not affect a usage checker over
    // the same borrowed sequence, in either order.
    let mut syntax = SyntaxChecker::new(&tokens);
    let mut usage = UsageChecker::new(&tokens);
    assert!(syntax.parse().is_ok());
    assert!(usage.validate().is_ok());

    let mut usage_first = UsageChecker::new(&tokens);
    assert!(usage_first.validate().is_ok());
    let mut syntax_second = SyntaxChecker::new(&tokens);
    assert!(syntax_second.parse().is_ok());
}

#[test]
fn test_keyword_prefix_identifier_flows_through_pipeline() {
    // `inteiros` scans as an identifier, so it declares and reads like
    // any other variable name.
    let source = "algoritmo \"t\"\nvar\ninteiros : inteiro\ninicio\n\
                  inteiros <- 3\nescreva(inteiros)\nfimalgoritmo";
    assert!(validate_source(source).is_ok());
}

#[test]
fn test_uppercase_source_is_accepted() {
    let source = "ALGORITMO \"MAIUSCULO\"\nVAR\nX : INTEIRO\nINICIO\nX <- 1\nFIMALGORITMO";
    assert!(validate_source(source).is_ok());
}
