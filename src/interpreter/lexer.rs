use tracing::trace;

use crate::{
    error::{ParseError, ParseResult},
    interpreter::token::{Token, TokenKind},
    util::num::parse_integer_literal,
};

/// Turns source text into tokens on demand.
///
/// The lexer keeps a cursor over the characters of the input and produces one
/// token per call to [`Lexer::get_next_token`]. Nothing is tokenized ahead of
/// time, so a bad character is only reported once the parser asks for the
/// token that contains it.
///
/// # Example
/// ```
/// use intcalc::interpreter::{lexer::Lexer, token::TokenKind};
///
/// let mut lexer = Lexer::new("12 + 3");
/// assert_eq!(lexer.get_next_token().unwrap().as_integer(), Some(12));
/// assert_eq!(lexer.get_next_token().unwrap().kind, TokenKind::Plus);
/// assert_eq!(lexer.get_next_token().unwrap().as_integer(), Some(3));
/// assert_eq!(lexer.get_next_token().unwrap().kind, TokenKind::EndOfInput);
/// ```
#[derive(Debug, Clone)]
pub struct Lexer {
    text:         Vec<char>,
    position:     usize,
    current_char: Option<char>,
}

impl Lexer {
    /// Creates a lexer positioned at the first character of `text`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let text: Vec<char> = text.chars().collect();
        let current_char = text.first().copied();
        Self { text,
               position: 0,
               current_char }
    }

    /// Zero-based index of the character under the cursor.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The character under the cursor, or `None` past the end.
    #[must_use]
    pub const fn current_char(&self) -> Option<char> {
        self.current_char
    }

    /// Moves the cursor one character to the right.
    fn advance(&mut self) {
        self.position += 1;
        self.current_char = self.text.get(self.position).copied();
    }

    /// Advances past a run of whitespace.
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.current_char
              && c.is_whitespace()
        {
            self.advance();
        }
    }

    /// Reads consecutive decimal digits and returns their value.
    ///
    /// The caller guarantees the current character is a digit.
    fn read_integer(&mut self) -> ParseResult<i64> {
        let start = self.position;
        let mut digits = String::new();
        while let Some(c) = self.current_char
              && c.is_ascii_digit()
        {
            digits.push(c);
            self.advance();
        }
        parse_integer_literal(&digits, start)
    }

    /// Produces the next token from the input.
    ///
    /// Whitespace between tokens is skipped. Once the input is exhausted every
    /// call returns an `EndOfInput` token positioned at the input length.
    ///
    /// # Errors
    /// - `ParseError::Lexical` for a character that starts no token.
    /// - `ParseError::LiteralTooLarge` for an integer literal above
    ///   `i64::MAX`.
    pub fn get_next_token(&mut self) -> ParseResult<Token> {
        while let Some(c) = self.current_char {
            if c.is_whitespace() {
                self.skip_whitespace();
                continue;
            }

            let start = self.position;

            if c.is_ascii_digit() {
                let token = Token::integer(self.read_integer()?, start);
                trace!(%token, position = start, "lexed");
                return Ok(token);
            }

            if let Some(kind) = TokenKind::from_symbol(c) {
                self.advance();
                let token = Token::symbol(kind, c, start);
                trace!(%token, position = start, "lexed");
                return Ok(token);
            }

            return Err(ParseError::Lexical { character: c,
                                             position:  start, });
        }

        Ok(Token::end_of_input(self.text.len()))
    }
}

/// Drains a fresh lexer over `source` into a vector of tokens.
///
/// The returned vector always ends with exactly one `EndOfInput` token.
///
/// # Errors
/// Returns the first lexical error encountered.
///
/// # Example
/// ```
/// use intcalc::interpreter::lexer::tokenize;
///
/// let tokens = tokenize("(1+2)").unwrap();
/// let printed: Vec<String> = tokens.iter().map(ToString::to_string).collect();
/// assert_eq!(printed,
///            ["Token(LPAREN, '(')",
///             "Token(INTEGER, 1)",
///             "Token(PLUS, '+')",
///             "Token(INTEGER, 2)",
///             "Token(RPAREN, ')')",
///             "Token(EOF, None)"]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<Token>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.get_next_token()?;
        tokens.push(token);
        if token.kind == TokenKind::EndOfInput {
            return Ok(tokens);
        }
    }
}
