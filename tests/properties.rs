//! Property-based tests for the evaluator.
//!
//! 1. Arbitrary text never panics.
//! 2. Evaluating the same text twice gives the same outcome.
//! 3. Extra whitespace between tokens never changes the outcome.
//! 4. Generated expression trees evaluate to what a reference fold computes.
//! 5. The token stream always ends with exactly one end-of-input token.

use intcalc::{
    evaluate,
    interpreter::{lexer::tokenize, token::TokenKind},
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Node {
    Literal(i64),
    Binary(Box<Node>, char, Box<Node>),
}

impl Node {
    fn render(&self) -> String {
        self.render_with(" ")
    }

    /// Renders with `gap` around every operator and parenthesis.
    fn render_with(&self, gap: &str) -> String {
        match self {
            Self::Literal(n) => n.to_string(),
            Self::Binary(left, op, right) => format!("({gap}{}{gap}{op}{gap}{}{gap})",
                                                     left.render_with(gap),
                                                     right.render_with(gap)),
        }
    }

    /// Evaluates with `i128` and floor semantics derived from `rem_euclid`.
    fn reference(&self) -> Option<i64> {
        match self {
            Self::Literal(n) => Some(*n),
            Self::Binary(left, op, right) => {
                let l = i128::from(left.reference()?);
                let r = i128::from(right.reference()?);
                let value = match op {
                    '+' => l + r,
                    '-' => l - r,
                    '*' => l * r,
                    '/' => {
                        if r == 0 {
                            return None;
                        }
                        let mut remainder = l.rem_euclid(r);
                        if r < 0 && remainder != 0 {
                            remainder += r;
                        }
                        (l - remainder) / r
                    },
                    _ => unreachable!(),
                };
                i64::try_from(value).ok()
            },
        }
    }
}

fn node() -> impl Strategy<Value = Node> {
    let leaf = (0i64..1000).prop_map(Node::Literal);
    leaf.prop_recursive(5, 32, 2, |inner| {
            (inner.clone(), prop::sample::select(vec!['+', '-', '*', '/']), inner)
                .prop_map(|(l, op, r)| Node::Binary(Box::new(l), op, Box::new(r)))
        })
}

const FRAGMENTS: &[&str] = &["1", "23", "+", "-", "*", "/", "(", ")", " ", "\t", "0", "x", "@"];

proptest! {
    #[test]
    fn arbitrary_text_never_panics(source in ".{0,64}") {
        let _ = evaluate(&source);
        let _ = tokenize(&source);
    }

    #[test]
    fn evaluation_is_deterministic(source in prop::collection::vec(prop::sample::select(FRAGMENTS), 0..24)) {
        let source = source.concat();
        prop_assert_eq!(evaluate(&source), evaluate(&source));
    }

    #[test]
    fn generated_trees_match_reference(tree in node()) {
        let source = tree.render();
        match tree.reference() {
            Some(expected) => {
                prop_assert_eq!(evaluate(&source), Ok(expected));
            },
            None => {
                prop_assert!(evaluate(&source).is_err());
            },
        }
    }

    #[test]
    fn whitespace_between_tokens_is_ignored(tree in node(),
                                            gap in prop::sample::select(vec![" ", "  ", "\t", "\n", " \r\n "])) {
        prop_assert_eq!(evaluate(&tree.render_with("")).ok(), evaluate(&tree.render_with(gap)).ok());
    }

    #[test]
    fn tokens_end_with_single_end_of_input(source in prop::collection::vec(prop::sample::select(FRAGMENTS), 0..24)) {
        if let Ok(tokens) = tokenize(&source.concat()) {
            prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndOfInput));
            prop_assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::EndOfInput).count(), 1);
        }
    }
}
