//! Parser edge cases spanning multiple productions.

use crate::ast::*;
use crate::Parser;
use gsmc_lex::Lexer;
use gsmc_util::Handler;

fn parse_program(source: &str) -> Option<Program<'_>> {
    let handler = Handler::new();
    let tokens = Lexer::new(source).collect();
    Parser::new(tokens, &handler).parse()
}

#[test]
fn mixed_program_parses() {
    let source = "int x, y = 3, 4;\n\
                  x += y * 2;\n\
                  loopc x < 100 and y > 0: begin x *= 2; y -= 1; end\n\
                  if x >= 100: begin x = 0; end elif y == 0: begin x = 1; end\n\
                  else: begin x %= 7; end\n\
                  y ^= 2;";
    let program = parse_program(source).expect("should parse");
    assert_eq!(program.len(), 5);
    assert!(matches!(program[0], Stmt::Declaration(_)));
    assert!(matches!(program[1], Stmt::Assignment(_)));
    assert!(matches!(program[2], Stmt::Loop(_)));
    assert!(matches!(program[3], Stmt::If(_)));
    assert!(matches!(program[4], Stmt::Assignment(_)));
}

#[test]
fn declarations_never_hold_more_inits_than_names() {
    // Alignment invariant over a sweep of accepted declarations.
    for source in [
        "int a;",
        "int a, b;",
        "int a = 1;",
        "int a, b = 1;",
        "int a, b = 1, 2;",
        "int a, b, c = 1 + 2;",
    ] {
        let program = parse_program(source).expect("should parse");
        let Stmt::Declaration(decl) = &program[0] else {
            panic!("expected declaration");
        };
        assert!(
            decl.inits.len() <= decl.names.len(),
            "alignment violated for {source}"
        );
    }
}

#[test]
fn number_target_at_top_level_is_syntax_error() {
    // Top-level dispatch only enters an assignment on an identifier.
    assert!(parse_program("5 = 3;").is_none());
}

#[test]
fn keywords_are_reserved() {
    assert!(parse_program("int if;").is_none());
    assert!(parse_program("int begin = 1;").is_none());
}

#[test]
fn statement_outside_grammar_is_error() {
    assert!(parse_program("begin x = 1; end").is_none());
    assert!(parse_program("elif x == 1: begin end").is_none());
}

#[test]
fn whitespace_is_insignificant() {
    let compact = parse_program("int x=1;x+=2;").expect("should parse");
    let spaced = parse_program("int x\n=\n1\n;\nx\n+=\n2\n;").expect("should parse");
    assert_eq!(compact, spaced);
}

#[test]
fn failed_program_returns_none_not_prefix() {
    // A late error invalidates the whole program, not just the tail.
    let handler = Handler::new();
    let tokens = Lexer::new("int x = 1; x += 2; loopc x <: begin end").collect();
    let program = Parser::new(tokens, &handler).parse();
    assert!(program.is_none());
    assert!(handler.has_errors());
}
