//! Contains error types used throughout the library.



//		Packages

use thiserror::Error as ThisError;



//		Enums

//		ArithmeticError															
/// Represents arithmetic conditions that cannot be expressed as a flagged
/// result.
///
/// Overflow, division by zero, and negative radicands are reported through
/// the flags on [`Overflowing`](crate::Overflowing) and
/// [`DivResult`](crate::DivResult). This type covers the cases where no
/// meaningful value can be produced at all.
///
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ArithmeticError {
	/// The exponent is negative, which has no integer result.
	#[error("Negative exponent")]
	NegativeExponent,
}

//		ConversionError															
/// Represents all possible conversion errors that can occur.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ConversionError {
	/// The incoming value has no storage, and therefore no defined value.
	#[error("Empty value")]
	EmptyValue,
	
	/// The incoming value is negative, which is not allowed by the destination
	/// type.
	#[error("Value is negative")]
	ValueIsNegative,
	
	/// The incoming value is too large to be converted to the destination type.
	#[error("Value too large")]
	ValueTooLarge,
}
