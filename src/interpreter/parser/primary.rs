use crate::{
    error::{EvalResult, parse_error::Expected},
    interpreter::{parser::core::Parser, token::TokenKind},
};

impl Parser {
    /// Evaluates an integer literal or a parenthesized expression.
    ///
    /// Grammar: `factor := INTEGER | "(" expr ")"`
    ///
    /// # Errors
    /// - `ParseError::Syntax` if the current token starts neither form, or if
    ///   the closing `)` is missing.
    /// - `ParseError::NestingTooDeep` past
    ///   [`MAX_NESTING`](crate::interpreter::parser::core::MAX_NESTING) open
    ///   parentheses.
    /// - Anything raised by the nested `expr`.
    pub fn factor(&mut self) -> EvalResult<i64> {
        let token = *self.current_token();
        if let Some(value) = token.as_integer() {
            self.eat(TokenKind::Integer)?;
            return Ok(value);
        }
        if token.kind == TokenKind::LParen {
            self.enter_group()?;
            self.eat(TokenKind::LParen)?;
            let result = self.expr()?;
            self.eat(TokenKind::RParen)?;
            self.leave_group();
            return Ok(result);
        }
        Err(self.unexpected(Expected::Operand).into())
    }
}
