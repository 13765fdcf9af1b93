//! Result types that pair a computed value with its reporting flags.



//		Modules

#[cfg(test)]
#[path = "tests/results.rs"]
mod tests;



//		Enums

//		CmpResult																
/// The outcome of a comparison between two integers.
///
/// A comparison is only defined when both operands have storage. Comparing
/// against an empty value yields [`Undefined`](CmpResult::Undefined), which
/// is a distinct state and must not be treated as `false`.
///
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CmpResult {
	/// The relation does not hold.
	False,
	
	/// The relation holds.
	True,
	
	/// At least one operand was empty.
	Undefined,
}

//󰭅		CmpResult																
impl CmpResult {
	//		is_false															
	/// Returns `true` only for [`CmpResult::False`].
	#[must_use]
	pub const fn is_false(self) -> bool {
		matches!(self, Self::False)
	}
	
	//		is_true																
	/// Returns `true` only for [`CmpResult::True`].
	#[must_use]
	pub const fn is_true(self) -> bool {
		matches!(self, Self::True)
	}
	
	//		is_undefined														
	/// Returns `true` only for [`CmpResult::Undefined`].
	#[must_use]
	pub const fn is_undefined(self) -> bool {
		matches!(self, Self::Undefined)
	}
}

//󰭅		From: bool -> CmpResult													
impl From<bool> for CmpResult {
	//		from																
	fn from(v: bool) -> Self {
		if v { Self::True } else { Self::False }
	}
}



//		Structs

//		Overflowing																
/// A value paired with an overflow flag.
///
/// Returned by addition, subtraction, multiplication, and exponentiation. The
/// value always lives in the storage of the first operand, at its original
/// width. When `overflow` is set the value has been truncated to that width
/// (two's-complement wrap for signed values, modulo `2^(8 × capacity)` for
/// unsigned ones), and callers must check the flag before trusting it.
///
#[derive(Clone, Debug)]
#[must_use]
pub struct Overflowing<T> {
	/// The computed value, possibly truncated.
	pub value:    T,
	
	/// Whether the true result did not fit.
	pub overflow: bool,
}

//󰭅		Overflowing																
impl<T> Overflowing<T> {
	//		into_inner															
	/// Discards the flag and returns the value.
	#[must_use]
	pub fn into_inner(self) -> T {
		self.value
	}
}

//		DivResult																
/// A quotient and remainder paired with an error flag.
///
/// Returned by division and by root extraction. The quotient (or root) lives
/// in the storage of the first operand. When `err` is set (division by zero,
/// or a root of a negative signed value) the contents of `quot` and `rem` are
/// unspecified.
///
/// For cube roots the remainder is unused and always zero; for square roots
/// it holds `radicand - root²`.
///
#[derive(Clone, Debug)]
#[must_use]
pub struct DivResult<T> {
	/// The quotient, or the floor of the root.
	pub quot: T,
	
	/// The remainder.
	pub rem:  T,
	
	/// Set on division by zero or on a negative radicand.
	pub err:  bool,
}
