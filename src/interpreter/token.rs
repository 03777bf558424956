/// The kind of a lexical token.
///
/// Every token produced by the lexer has exactly one of these kinds. The
/// grammar only ever inspects kinds; payloads are read once a kind has been
/// matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A non-negative integer literal, such as `42`.
    Integer,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// No characters left in the input.
    EndOfInput,
}

impl TokenKind {
    /// Upper-case tag used when a token is printed, e.g. `INTEGER` or `EOF`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::EndOfInput => "EOF",
        }
    }

    /// Maps an operator or parenthesis character to its token kind.
    ///
    /// # Example
    /// ```
    /// use intcalc::interpreter::token::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_symbol('*'), Some(TokenKind::Mul));
    /// assert_eq!(TokenKind::from_symbol('%'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '(' => Some(Self::LParen),
            ')' => Some(Self::RParen),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => write!(f, "an integer"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Mul => write!(f, "'*'"),
            Self::Div => write!(f, "'/'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// Payload attached to a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenValue {
    /// The value of an integer literal.
    Integer(i64),
    /// The literal character of an operator or parenthesis.
    Symbol(char),
}

/// Represents a lexical token in the source input.
///
/// A token is a kind, an optional payload and the character index where its
/// lexeme starts. `EndOfInput` has no payload and sits at the input length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// What sort of token this is.
    pub kind:     TokenKind,
    /// Literal value or operator character; `None` only for `EndOfInput`.
    pub value:    Option<TokenValue>,
    /// Zero-based character index of the lexeme.
    pub position: usize,
}

impl Token {
    /// Builds an integer literal token.
    #[must_use]
    pub const fn integer(value: i64, position: usize) -> Self {
        Self { kind: TokenKind::Integer,
               value: Some(TokenValue::Integer(value)),
               position }
    }

    /// Builds an operator or parenthesis token carrying its character.
    #[must_use]
    pub const fn symbol(kind: TokenKind, symbol: char, position: usize) -> Self {
        Self { kind,
               value: Some(TokenValue::Symbol(symbol)),
               position }
    }

    /// Builds the end-of-input marker.
    #[must_use]
    pub const fn end_of_input(position: usize) -> Self {
        Self { kind: TokenKind::EndOfInput,
               value: None,
               position }
    }

    /// Returns the integer payload, if this is an integer literal.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self.value {
            Some(TokenValue::Integer(n)) => Some(n),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = self.kind.tag();
        match self.value {
            Some(TokenValue::Integer(n)) => write!(f, "Token({tag}, {n})"),
            Some(TokenValue::Symbol(c)) => write!(f, "Token({tag}, '{c}')"),
            None => write!(f, "Token({tag}, None)"),
        }
    }
}
