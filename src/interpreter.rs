/// The interpreter driver.
///
/// Holds [`core::Interpreter`], the single entry point that evaluates a whole
/// line by asking the parser for its lowest-precedence rule.
pub mod core;
/// The lexer module tokenizes source text on demand.
///
/// The lexer reads the raw text one character at a time and produces tokens
/// only when the parser asks for them. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts characters into integer, operator and parenthesis tokens with
///   their source position.
/// - Skips whitespace between tokens.
/// - Reports lexical errors for characters that start no token.
pub mod lexer;
/// The parser module evaluates tokens by recursive descent.
///
/// Each precedence level is a method on [`parser::Parser`] that calls the
/// next-higher level, and folds operands into a running result as soon as
/// they are read. No syntax tree is kept.
///
/// # Responsibilities
/// - Enforces operator precedence and left-associativity.
/// - Validates the grammar, reporting syntax errors with their position.
/// - Applies checked arithmetic to every operator.
pub mod parser;
/// Token definitions shared by the lexer and the parser.
pub mod token;
