/// Checked integer helpers.
///
/// This module provides the arithmetic the parser folds operands with, and
/// the conversion of literal digits into values. Every function reports
/// overflow or division by zero as an error instead of wrapping or panicking,
/// tagged with the source position of the operator or literal involved.
pub mod num;
