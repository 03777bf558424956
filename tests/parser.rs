use intcalc::{
    error::{EvalError, ParseError, parse_error::Expected},
    interpreter::{
        core::Interpreter,
        lexer::Lexer,
        parser::Parser,
        token::{Token, TokenKind},
    },
};

fn parser(source: &str) -> Parser {
    Parser::new(Lexer::new(source)).unwrap_or_else(|e| panic!("`{source}` failed: {e}"))
}

#[test]
fn new_primes_the_lookahead() {
    assert_eq!(*parser(" 5 + 1").current_token(), Token::integer(5, 1));
}

#[test]
fn new_reports_lexical_error_in_first_token() {
    assert!(matches!(Parser::new(Lexer::new("#")),
                     Err(ParseError::Lexical { character: '#', position: 0 })));
}

#[test]
fn eat_consumes_matching_token() {
    let mut p = parser("(1");
    p.eat(TokenKind::LParen).unwrap();
    assert_eq!(*p.current_token(), Token::integer(1, 1));
    p.eat(TokenKind::Integer).unwrap();
    assert_eq!(p.current_token().kind, TokenKind::EndOfInput);
}

#[test]
fn eat_rejects_other_kinds_without_advancing() {
    let mut p = parser("1 + 2");
    let err = p.eat(TokenKind::Plus).unwrap_err();
    assert_eq!(err,
               EvalError::Parse(ParseError::Syntax { expected: Expected::Token(TokenKind::Plus),
                                                     found:    TokenKind::Integer,
                                                     position: 0, }));
    assert_eq!(*p.current_token(), Token::integer(1, 0));
}

#[test]
fn factor_stops_after_its_operand() {
    let mut p = parser("(1 + 2) * 3");
    assert_eq!(p.factor().unwrap(), 3);
    assert_eq!(p.current_token().kind, TokenKind::Mul);
}

#[test]
fn term_stops_at_additive_operator() {
    let mut p = parser("6 / 3 * 5 - 1");
    assert_eq!(p.term().unwrap(), 10);
    assert_eq!(p.current_token().kind, TokenKind::Minus);
}

#[test]
fn expr_leaves_first_unconsumed_token() {
    let mut p = parser("1 + 2 ) 9");
    assert_eq!(p.expr().unwrap(), 3);
    assert_eq!(p.current_token().kind, TokenKind::RParen);
    assert_eq!(p.current_token().position, 6);
}

#[test]
fn factor_rejects_operator() {
    let mut p = parser("/ 2");
    assert_eq!(p.factor(),
               Err(EvalError::Parse(ParseError::Syntax { expected: Expected::Operand,
                                                         found:    TokenKind::Div,
                                                         position: 0, })));
}

#[test]
fn interpreter_delegates_to_expr() {
    let mut interpreter = Interpreter::new(parser("8 - 2 * 3"));
    assert_eq!(interpreter.interpret().unwrap(), 2);
    assert_eq!(interpreter.parser().current_token().kind, TokenKind::EndOfInput);
}
