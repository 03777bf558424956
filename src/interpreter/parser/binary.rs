use crate::{
    error::EvalResult,
    interpreter::{parser::core::Parser, token::TokenKind},
    util::num::{checked_add, checked_mul, checked_sub, floor_div},
};

impl Parser {
    /// Evaluates addition and subtraction.
    ///
    /// Handles the lowest precedence level. Operators are left-associative:
    /// every right operand is folded into the running result, so `8 - 3 - 2`
    /// is `(8 - 3) - 2`.
    ///
    /// The rule is: `expr := term (("+" | "-") term)*`
    ///
    /// # Errors
    /// Propagates errors from `term` and from `eat`, and returns
    /// `RuntimeError::Overflow` if a sum or difference leaves the `i64` range.
    ///
    /// # Example
    /// ```
    /// use intcalc::interpreter::{lexer::Lexer, parser::Parser};
    ///
    /// let mut parser = Parser::new(Lexer::new("10 - 4 - 3")).unwrap();
    /// assert_eq!(parser.expr().unwrap(), 3);
    /// ```
    pub fn expr(&mut self) -> EvalResult<i64> {
        let mut result = self.term()?;
        loop {
            let operator = *self.current_token();
            match operator.kind {
                TokenKind::Plus => {
                    self.eat(TokenKind::Plus)?;
                    result = checked_add(result, self.term()?, operator.position)?;
                },
                TokenKind::Minus => {
                    self.eat(TokenKind::Minus)?;
                    result = checked_sub(result, self.term()?, operator.position)?;
                },
                _ => break,
            }
        }
        Ok(result)
    }

    /// Evaluates multiplication and division.
    ///
    /// Division rounds toward negative infinity, so `(2 - 9) / 2` is `-4`.
    ///
    /// The rule is: `term := factor (("*" | "/") factor)*`
    ///
    /// # Errors
    /// Propagates errors from `factor` and from `eat`, and returns
    /// `RuntimeError::DivisionByZero` or `RuntimeError::Overflow` when an
    /// operation cannot produce an `i64`.
    pub fn term(&mut self) -> EvalResult<i64> {
        let mut result = self.factor()?;
        loop {
            let operator = *self.current_token();
            match operator.kind {
                TokenKind::Mul => {
                    self.eat(TokenKind::Mul)?;
                    result = checked_mul(result, self.factor()?, operator.position)?;
                },
                TokenKind::Div => {
                    self.eat(TokenKind::Div)?;
                    result = floor_div(result, self.factor()?, operator.position)?;
                },
                _ => break,
            }
        }
        Ok(result)
    }
}
