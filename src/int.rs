//! Fixed-capacity integer type over an octet buffer.

//	Inherent `add`, `not`, `div` and friends return flagged results, so they
//	cannot be the operator traits of the same name.
#![allow(clippy::should_implement_trait, reason = "Flagged results do not fit the operator traits")]



//		Modules																											

#[cfg(test)]
#[path = "tests/int.rs"]
mod tests;



//		Packages																										

use crate::{
	errors::{ArithmeticError, ConversionError},
	octets::{self, Magnitude},
	results::{CmpResult, DivResult, Overflowing},
};
use bytes::BytesMut;
use core::{
	cmp::Ordering,
	fmt::{Debug, Formatter, self},
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr, ShrAssign},
};



//		Type aliases																									

/// Type alias for signed integers, for convenience.
pub type SInt = Int<true>;

/// Type alias for unsigned integers, for convenience.
pub type UInt = Int<false>;



//		Structs																											

//		Int																		
/// A fixed-capacity integer of caller-chosen width.
///
/// This type provides an integer whose width, in octets, is chosen when it is
/// created and never changes afterwards. It can be signed or unsigned.
///
/// # Type parameters
///
/// * `SIGNED` - Whether the integer is signed (`true`) or unsigned (`false`).
///
/// # Representations
///
/// The two instantiations share one operation catalogue but differ in what
/// their size means:
///
///   - [`SInt`] is two's-complement. Its size always equals its capacity, and
///     the high bit of the last octet is the sign.
///   - [`UInt`] is a plain magnitude. Its capacity is the allocated width,
///     and its size ([`len()`](Int::len())) is the number of significant
///     octets, kept up to date after every operation. All operations still
///     act across the full capacity.
///
/// # Arithmetic
///
/// Arithmetic, bitwise, and shift operations take the value by ownership and
/// hand back a result that lives in the very same buffer, at the very same
/// width. Nothing ever grows. When a result does not fit it is truncated
/// (two's-complement wrap for signed values, modulo `2^(8 × capacity)` for
/// unsigned ones) and the overflow flag on the returned [`Overflowing`] is
/// set. Division and roots report division by zero and negative radicands
/// through the error flag on [`DivResult`].
///
/// The right-hand operand may have any width. It is read by value, i.e.
/// sign-extended or zero-extended when narrower, and in full when wider, in
/// which case arithmetic overflows if the true result does not fit.
///
/// # Comparison
///
/// Comparisons return a [`CmpResult`], which is
/// [`Undefined`](CmpResult::Undefined) whenever either operand is empty.
/// Comparisons only ever read their operands.
///
/// # Internal representation
///
/// The value is stored as a sequence of octets in little-endian order (least
/// significant octet first), for both signed and unsigned values. This matches
/// the layout of Rust's primitive integers, so the `From` conversions are a
/// verbatim copy of [`to_le_bytes()`](i64::to_le_bytes()).
///
/// For example, the 16-bit value `0x1234`:
///
///   - Written in hex: `0x1234` (most-significant octets written first by
///     convention)
///   - Stored in memory: `[0x34, 0x12]` (least-significant octet stored
///     first)
///
/// Bit positions (as used by [`bit()`](Int::bit()) and
/// [`set_bit()`](Int::set_bit())) are zero-based, where bit 0 is the
/// least-significant bit of the first octet.
///
#[derive(Clone, Default)]
pub struct Int<const SIGNED: bool> {
	/// The octets, least significant first. Never resized after creation.
	data: BytesMut,
	
	/// Number of octets in use: the capacity for signed values, the
	/// significant octets for unsigned ones.
	len:  u16,
}

//󰭅		Int																		
impl<const SIGNED: bool> Int<SIGNED> {
	//		Public constants													
	/// The largest width, in octets, that a value can be created with.
	pub const MAX_OCTETS: u16 = u16::MAX;
	
	//		Constructors														
	
	//		init																
	/// Creates a zero-valued [`Int`] with the given width.
	///
	/// A width of zero produces an empty value, which has no storage and
	/// compares as undefined against everything.
	///
	/// # Parameters
	///
	/// * `width` - The number of octets to allocate.
	///
	#[must_use]
	pub fn init(width: u16) -> Self {
		Self {
			data: BytesMut::zeroed(usize::from(width)),
			len:  if SIGNED { width } else { 0 },
		}
	}
	
	//		from_le_bytes														
	/// Creates an [`Int`] from a little-endian octet slice.
	///
	/// The width of the new value is the length of the slice, and the octets
	/// are copied verbatim.
	///
	/// # Parameters
	///
	/// * `bytes` - The little-endian octets to create the [`Int`] from.
	///
	/// # Errors
	///
	/// Returns an error if the slice is longer than [`Self::MAX_OCTETS`].
	///
	pub fn from_le_bytes(bytes: &[u8]) -> Result<Self, ConversionError> {
		if bytes.len() > usize::from(Self::MAX_OCTETS) {
			return Err(ConversionError::ValueTooLarge);
		}
		Ok(Self::from_octets(bytes))
	}
	
	//		dup																	
	/// Makes a deep copy holding only the significant octets.
	///
	/// High-order octets that carry no information are left out of the copy:
	/// zero octets for unsigned values, and for signed values any octets that
	/// merely repeat the sign. At least one octet is kept for a non-empty
	/// value, so zero duplicates to a one-octet zero. An empty value
	/// duplicates to an empty value.
	///
	/// This differs from [`Clone`], which keeps the full width.
	///
	#[must_use]
	pub fn dup(&self) -> Self {
		let len = octets::minimal_len(&self.data, SIGNED);
		self.data.get(..len).map_or_else(Self::default, Self::from_octets)
	}
	
	//		fini																
	/// Releases the value and its buffer.
	///
	/// Dropping the value releases the buffer as well; this exists to make the
	/// end of a value's life explicit at the call site.
	///
	pub fn fini(self) {
		drop(self);
	}
	
	//		zero																
	/// Overwrites every allocated octet with zero, leaving the width alone.
	#[must_use]
	pub fn zero(mut self) -> Self {
		self.data.fill(0);
		self.refresh_len();
		self
	}
	
	//		Public methods														
	
	//		as_slice															
	/// Represents the internal value as a slice of octets.
	///
	/// The slice always spans the full capacity, least significant octet
	/// first.
	///
	#[must_use]
	pub fn as_slice(&self) -> &[u8] {
		&self.data
	}
	
	//		bit																	
	/// Gets the value of a specific bit.
	///
	/// Returns `false` if the position is out of range.
	///
	/// # Parameters
	///
	/// * `pos` - The position of the bit to get, where `0` is the
	///           least-significant bit.
	///
	#[must_use]
	pub fn bit(&self, pos: u32) -> bool {
		usize::try_from(pos).is_ok_and(|pos| octets::bit(&self.data, pos))
	}
	
	//		capacity															
	/// The allocated width, in octets.
	#[must_use]
	pub fn capacity(&self) -> u16 {
		u16::try_from(self.data.len()).unwrap_or(Self::MAX_OCTETS)
	}
	
	//		is_empty															
	/// Whether the value has no storage at all.
	///
	/// Note that this is about capacity, not about the value: an unsigned zero
	/// has a [`len()`](Int::len()) of zero but is not empty.
	///
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}
	
	//		is_negative															
	/// Determines if the value is negative. Always `false` for unsigned values.
	#[must_use]
	pub fn is_negative(&self) -> bool {
		SIGNED && octets::is_negative(&self.data)
	}
	
	//		is_zero																
	/// Determines if the value is zero. Empty values are zero.
	#[must_use]
	pub fn is_zero(&self) -> bool {
		octets::is_zero(&self.data)
	}
	
	//		len																	
	/// The size, in octets.
	///
	/// For signed values this is always the capacity. For unsigned values it
	/// is the number of significant octets, i.e. up to and including the
	/// highest non-zero one.
	///
	#[must_use]
	pub const fn len(&self) -> u16 {
		self.len
	}
	
	//		set_bit																
	/// Sets the value of a specific bit.
	///
	/// Returns `false` if the position is out of range. Otherwise, returns
	/// `true` to indicate success. Note that success does not mean the bit was
	/// actually changed.
	///
	/// # Parameters
	///
	/// * `pos`   - The position of the bit to set, where `0` is the
	///             least-significant bit.
	/// * `value` - The value to set the bit to.
	///
	pub fn set_bit(&mut self, pos: u32, value: bool) -> bool {
		let Ok(pos) = usize::try_from(pos) else {
			return false;
		};
		if pos >= self.data.len().saturating_mul(8) {
			return false;
		}
		octets::set_bit(&mut self.data, pos, value);
		self.refresh_len();
		true
	}
	
	//		Comparison															
	
	//		cmp_eq																
	/// Compares two values for equality.
	///
	/// The values are equal when their sizes match and every octet matches.
	/// Signed values of different widths are therefore never equal, whereas
	/// unsigned values are compared on their significant octets only.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to compare against.
	///
	pub fn cmp_eq(&self, rhs: &Self) -> CmpResult {
		if self.is_empty() || rhs.is_empty() {
			return CmpResult::Undefined;
		}
		if self.len != rhs.len {
			return CmpResult::False;
		}
		self.active().iter().eq(rhs.active()).into()
	}
	
	//		cmp_ge																
	/// Determines whether `self` is greater than or equal to `rhs`.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to compare against.
	///
	pub fn cmp_ge(&self, rhs: &Self) -> CmpResult {
		self.compare(rhs).map_or(CmpResult::Undefined, |order| (order != Ordering::Less).into())
	}
	
	//		cmp_gt																
	/// Determines whether `self` is strictly greater than `rhs`.
	///
	/// For signed values the signs decide first, so any negative value is
	/// less than any non-negative one regardless of width.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to compare against.
	///
	pub fn cmp_gt(&self, rhs: &Self) -> CmpResult {
		self.compare(rhs).map_or(CmpResult::Undefined, |order| (order == Ordering::Greater).into())
	}
	
	//		Arithmetic															
	
	//		add																	
	/// Adds `rhs` to `self` in place.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to add to `self`.
	///
	pub fn add(mut self, rhs: &Self) -> Overflowing<Self> {
		let overflow = octets::add_assign(&mut self.data, &rhs.data, SIGNED, false);
		self.refresh_len();
		Overflowing { value: self, overflow }
	}
	
	//		sub																	
	/// Subtracts `rhs` from `self` in place.
	///
	/// For unsigned values any result below zero is an overflow.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to subtract from `self`.
	///
	pub fn sub(mut self, rhs: &Self) -> Overflowing<Self> {
		let overflow = octets::add_assign(&mut self.data, &rhs.data, SIGNED, true);
		self.refresh_len();
		Overflowing { value: self, overflow }
	}
	
	//		mul																	
	/// Multiplies `self` by `rhs` in place.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to multiply `self` by.
	///
	pub fn mul(mut self, rhs: &Self) -> Overflowing<Self> {
		let overflow = Self::mul_octets(&mut self.data, &rhs.data);
		self.refresh_len();
		Overflowing { value: self, overflow }
	}
	
	//		div																	
	/// Divides `self` by `rhs`, truncating towards zero.
	///
	/// The quotient is written into the storage of `self`. The remainder is a
	/// new value with the width of `rhs`, and takes the sign of the dividend.
	/// Dividing the most negative signed value by `-1` wraps back to the most
	/// negative value, as with [`i64::wrapping_div()`].
	///
	/// If `rhs` is zero (or empty), the error flag is set and the quotient and
	/// remainder are unspecified.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	pub fn div(mut self, rhs: &Self) -> DivResult<Self> {
		let divisor = Magnitude::new(&rhs.data, SIGNED);
		let mut rem = Self::init(rhs.capacity());
		if divisor.is_zero() {
			return DivResult { quot: self, rem, err: true };
		}
		
		let negative = self.is_negative();
		if negative {
			octets::negate(&mut self.data);
		}
		octets::div_rem_magnitude(&mut self.data, &divisor, &mut rem.data);
		if negative != divisor.is_negated() {
			octets::negate(&mut self.data);
		}
		if negative {
			octets::negate(&mut rem.data);
		}
		
		self.refresh_len();
		rem.refresh_len();
		DivResult { quot: self, rem, err: false }
	}
	
	//		pow																	
	/// Raises `self` to the power of `exp` in place.
	///
	/// This uses binary exponentiation over the bits of `exp`, and the
	/// overflow flag is set as soon as any partial product does not fit. Zero
	/// to the power of zero is one.
	///
	/// # Parameters
	///
	/// * `exp` - The exponent.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::NegativeExponent`] if `exp` is negative. The
	/// base is released in that case.
	///
	pub fn pow(mut self, exp: &Self) -> Result<Overflowing<Self>, ArithmeticError> {
		if exp.is_negative() {
			return Err(ArithmeticError::NegativeExponent);
		}
		let exp_bits = octets::bit_len(&exp.data);
		
		if self.is_empty() {
			//	An empty value can hold zero, but not the one from x^0
			return Ok(Overflowing { value: self, overflow: exp_bits == 0 });
		}
		
		let base       = self.clone();
		let mut square = self.clone();
		self.data.fill(0);
		if let Some(low) = self.data.first_mut() {
			*low = 1;
		}
		
		let mut overflow = false;
		for pos in (0..exp_bits).rev() {
			square.data.copy_from_slice(&self.data);
			overflow |= Self::mul_octets(&mut self.data, &square.data);
			if octets::bit(&exp.data, pos) {
				overflow |= Self::mul_octets(&mut self.data, &base.data);
			}
		}
		
		self.refresh_len();
		Ok(Overflowing { value: self, overflow })
	}
	
	//		sqrt																
	/// Takes the integer square root of `self`.
	///
	/// The quotient is the floor of the true root, written into the storage of
	/// `self`. The remainder is `self - root²`, as a new value of the same
	/// width. A negative radicand sets the error flag.
	///
	pub fn sqrt(mut self) -> DivResult<Self> {
		let width   = self.capacity();
		let mut rem = Self::init(width);
		if self.is_negative() {
			return DivResult { quot: self, rem, err: true };
		}
		
		let mut term = Self::scratch(width);
		rem.data.copy_from_slice(&self.data);
		octets::sqrt_rem(&mut rem.data, &mut self.data, &mut term);
		rem.refresh_len();
		self.refresh_len();
		DivResult { quot: self, rem, err: false }
	}
	
	//		cbrt																
	/// Takes the integer cube root of `self`.
	///
	/// The quotient is the floor of the true root, written into the storage of
	/// `self`. Unlike [`sqrt()`](Int::sqrt()), the remainder is unused and
	/// always zero. A negative radicand sets the error flag.
	///
	pub fn cbrt(mut self) -> DivResult<Self> {
		let width   = self.capacity();
		let mut rem = Self::init(width);
		if self.is_negative() {
			return DivResult { quot: self, rem, err: true };
		}
		
		let mut square = Self::scratch(width);
		let mut term   = Self::scratch(width);
		let mut part   = Self::scratch(width);
		rem.data.copy_from_slice(&self.data);
		octets::cbrt_rem(&mut rem.data, &mut self.data, &mut square, &mut term, &mut part);
		rem.data.fill(0);
		rem.refresh_len();
		self.refresh_len();
		DivResult { quot: self, rem, err: false }
	}
	
	//		Bitwise operations													
	
	//		and																	
	/// Bitwise AND across the full width of `self`. The sign bit gets no
	/// special treatment.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to combine with, extended or truncated to the
	///           width of `self`.
	///
	#[must_use]
	pub fn and(mut self, rhs: &Self) -> Self {
		self.combine(rhs, |a, b| a & b);
		self
	}
	
	//		not																	
	/// Bitwise NOT across the full width of `self`, sign bit included.
	#[must_use]
	pub fn not(mut self) -> Self {
		self.invert();
		self
	}
	
	//		orr																	
	/// Bitwise OR across the full width of `self`. The sign bit gets no
	/// special treatment.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to combine with, extended or truncated to the
	///           width of `self`.
	///
	#[must_use]
	pub fn orr(mut self, rhs: &Self) -> Self {
		self.combine(rhs, |a, b| a | b);
		self
	}
	
	//		xor																	
	/// Bitwise exclusive OR across the full width of `self`. The sign bit gets
	/// no special treatment.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to combine with, extended or truncated to the
	///           width of `self`.
	///
	#[must_use]
	pub fn xor(mut self, rhs: &Self) -> Self {
		self.combine(rhs, |a, b| a ^ b);
		self
	}
	
	//		Shifts and rotations												
	
	//		lsl																	
	/// Logical shift left by `n` bits. Vacated bits are zero, and bits shifted
	/// past the top are lost. Shifting by the full width or more gives zero.
	#[must_use]
	pub fn lsl(mut self, n: u32) -> Self {
		self.shift_left(n);
		self
	}
	
	//		lsr																	
	/// Logical shift right by `n` bits. Vacated bits are zero, including the
	/// sign bit of signed values.
	#[must_use]
	pub fn lsr(mut self, n: u32) -> Self {
		self.shift_right(n, false);
		self
	}
	
	//		rol																	
	/// Rotates left by `n` bits across the full width. The amount is taken
	/// modulo the width in bits.
	#[must_use]
	pub fn rol(mut self, n: u32) -> Self {
		octets::rotate_left(&mut self.data, n);
		self.refresh_len();
		self
	}
	
	//		ror																	
	/// Rotates right by `n` bits across the full width. The amount is taken
	/// modulo the width in bits.
	#[must_use]
	pub fn ror(mut self, n: u32) -> Self {
		octets::rotate_right(&mut self.data, n);
		self.refresh_len();
		self
	}
	
	//		Bit counting														
	
	//		clz																	
	/// Counts the leading zero bits across the full width.
	///
	/// The result is relative to the width of this particular value: a zero of
	/// four octets has 32 leading zeroes, one of eight octets has 64.
	///
	#[must_use]
	pub fn clz(&self) -> u32 {
		octets::leading_zeros(&self.data)
	}
	
	//		ctz																	
	/// Counts the trailing zero bits. A zero value yields the full width in
	/// bits.
	#[must_use]
	pub fn ctz(&self) -> u32 {
		octets::trailing_zeros(&self.data)
	}
	
	//		popcount															
	/// Counts the set bits across the full width. Subtracting the result from
	/// the width in bits gives the number of clear bits.
	#[must_use]
	pub fn popcount(&self) -> u32 {
		octets::count_ones(&self.data)
	}
	
	//		Private methods														
	
	//		active																
	/// The octets that take part in equality.
	fn active(&self) -> &[u8] {
		self.data.get(..usize::from(self.len)).unwrap_or(&self.data)
	}
	
	//		combine																
	/// Applies an octet-wise boolean operation across the width of `self`.
	fn combine<F: Fn(u8, u8) -> u8>(&mut self, rhs: &Self, op: F) {
		let ext = octets::extension(&rhs.data, SIGNED);
		for (i, byte) in self.data.iter_mut().enumerate() {
			*byte = op(*byte, rhs.data.get(i).copied().unwrap_or(ext));
		}
		self.refresh_len();
	}
	
	//		compare																
	/// Orders two values, or gives [`None`] if either is empty.
	fn compare(&self, rhs: &Self) -> Option<Ordering> {
		if self.is_empty() || rhs.is_empty() {
			return None;
		}
		Some(octets::compare(&self.data, &rhs.data, SIGNED))
	}
	
	//		from_octets															
	fn from_octets(bytes: &[u8]) -> Self {
		let mut value = Self { data: BytesMut::from(bytes), len: 0 };
		value.refresh_len();
		value
	}
	
	//		invert																
	fn invert(&mut self) {
		for byte in self.data.iter_mut() {
			*byte = !*byte;
		}
		self.refresh_len();
	}
	
	//		mul_octets															
	/// Multiplies `lhs` by `rhs` in place, returning the overflow flag.
	///
	/// Both sides are reduced to magnitudes, multiplied as unsigned, and the
	/// sign applied afterwards. For signed values the product must also leave
	/// the sign bit free, except for the most negative value itself.
	///
	fn mul_octets(lhs: &mut [u8], rhs: &[u8]) -> bool {
		let lhs_negative = SIGNED && octets::is_negative(lhs);
		if lhs_negative {
			octets::negate(lhs);
		}
		let magnitude    = Magnitude::new(rhs, SIGNED);
		let mut overflow = octets::mul_magnitude(lhs, &magnitude);
		
		if SIGNED {
			let negative = lhs_negative != magnitude.is_negated();
			if let Some((&top, rest)) = lhs.split_last() {
				if top & 0x80 != 0 {
					let is_min = top == 0x80 && octets::is_zero(rest);
					overflow  |= !(negative && is_min);
				}
			}
			if negative {
				octets::negate(lhs);
			}
		}
		overflow
	}
	
	//		refresh_len															
	/// Brings the size back in line with the buffer after a write.
	fn refresh_len(&mut self) {
		let len  = if SIGNED { self.data.len() } else { octets::significant_len(&self.data) };
		self.len = u16::try_from(len).unwrap_or(Self::MAX_OCTETS);
	}
	
	//		scratch																
	/// Zeroed working space one octet wider than `width`, for intermediate
	/// terms that can briefly outgrow the value they are built from.
	fn scratch(width: u16) -> BytesMut {
		BytesMut::zeroed(usize::from(width).saturating_add(1))
	}
	
	//		shift_left															
	fn shift_left(&mut self, n: u32) {
		octets::shift_left(&mut self.data, n);
		self.refresh_len();
	}
	
	//		shift_right															
	/// Shifts right, replicating the sign bit if `arithmetic` is set.
	fn shift_right(&mut self, n: u32, arithmetic: bool) {
		let fill = if arithmetic { octets::extension(&self.data, SIGNED) } else { 0 };
		octets::shift_right(&mut self.data, n, fill);
		self.refresh_len();
	}
	
	//		to_primitive														
	/// Copies the value into the octets of an `N`-octet primitive.
	///
	/// # Parameters
	///
	/// * `target_signed` - Whether the destination primitive is signed.
	///
	/// # Errors
	///
	/// Fails if the value is empty, is negative and the target is unsigned, or
	/// does not fit in `N` octets.
	///
	fn to_primitive<const N: usize>(&self, target_signed: bool) -> Result<[u8; N], ConversionError> {
		if self.is_empty() {
			return Err(ConversionError::EmptyValue);
		}
		let negative = self.is_negative();
		if negative && !target_signed {
			return Err(ConversionError::ValueIsNegative);
		}
		
		let ext       = octets::extension(&self.data, SIGNED);
		let mut bytes = [ext; N];
		for (i, &byte) in self.data.iter().enumerate() {
			match bytes.get_mut(i) {
				Some(slot)          => *slot = byte,
				None if byte != ext => return Err(ConversionError::ValueTooLarge),
				None                => {},
			}
		}
		
		//	The truncated value must still carry the right sign
		if target_signed && octets::is_negative(&bytes) != negative {
			return Err(ConversionError::ValueTooLarge);
		}
		Ok(bytes)
	}
}

//󰭅		SInt																	
impl Int<true> {
	//		make64																
	/// Creates an eight-octet signed value from an [`i64`].
	#[must_use]
	pub fn make64(v: i64) -> Self {
		Self::from(v)
	}
	
	//		make32																
	/// Creates a four-octet signed value from an [`i32`].
	#[must_use]
	pub fn make32(v: i32) -> Self {
		Self::from(v)
	}
	
	//		make16																
	/// Creates a two-octet signed value from an [`i16`].
	#[must_use]
	pub fn make16(v: i16) -> Self {
		Self::from(v)
	}
	
	//		make8																
	/// Creates a one-octet signed value from an [`i8`].
	#[must_use]
	pub fn make8(v: i8) -> Self {
		Self::from(v)
	}
	
	//		asr																	
	/// Arithmetic shift right by `n` bits.
	///
	/// Vacated high bits are filled with copies of the sign bit, so negative
	/// values stay negative. Shifting by the full width or more gives `0` or
	/// `-1`.
	///
	#[must_use]
	pub fn asr(mut self, n: u32) -> Self {
		self.shift_right(n, true);
		self
	}
}

//󰭅		UInt																	
impl Int<false> {
	//		make64																
	/// Creates an eight-octet unsigned value from a [`u64`].
	#[must_use]
	pub fn make64(v: u64) -> Self {
		Self::from(v)
	}
	
	//		make32																
	/// Creates a four-octet unsigned value from a [`u32`].
	#[must_use]
	pub fn make32(v: u32) -> Self {
		Self::from(v)
	}
	
	//		make16																
	/// Creates a two-octet unsigned value from a [`u16`].
	#[must_use]
	pub fn make16(v: u16) -> Self {
		Self::from(v)
	}
	
	//		make8																
	/// Creates a one-octet unsigned value from a [`u8`].
	#[must_use]
	pub fn make8(v: u8) -> Self {
		Self::from(v)
	}
}

//󰭅		BitAnd																	
impl<const SIGNED: bool> BitAnd<&Self> for Int<SIGNED> {
	type Output = Self;
	
	//		bitand																
	fn bitand(mut self, rhs: &Self) -> Self::Output {
		self.combine(rhs, |a, b| a & b);
		self
	}
}

//󰭅		BitAndAssign															
impl<const SIGNED: bool> BitAndAssign<&Self> for Int<SIGNED> {
	//		bitand_assign														
	fn bitand_assign(&mut self, rhs: &Self) {
		self.combine(rhs, |a, b| a & b);
	}
}

//󰭅		BitOr																	
impl<const SIGNED: bool> BitOr<&Self> for Int<SIGNED> {
	type Output = Self;
	
	//		bitor																
	fn bitor(mut self, rhs: &Self) -> Self::Output {
		self.combine(rhs, |a, b| a | b);
		self
	}
}

//󰭅		BitOrAssign																
impl<const SIGNED: bool> BitOrAssign<&Self> for Int<SIGNED> {
	//		bitor_assign														
	fn bitor_assign(&mut self, rhs: &Self) {
		self.combine(rhs, |a, b| a | b);
	}
}

//󰭅		BitXor																	
impl<const SIGNED: bool> BitXor<&Self> for Int<SIGNED> {
	type Output = Self;
	
	//		bitxor																
	fn bitxor(mut self, rhs: &Self) -> Self::Output {
		self.combine(rhs, |a, b| a ^ b);
		self
	}
}

//󰭅		BitXorAssign															
impl<const SIGNED: bool> BitXorAssign<&Self> for Int<SIGNED> {
	//		bitxor_assign														
	fn bitxor_assign(&mut self, rhs: &Self) {
		self.combine(rhs, |a, b| a ^ b);
	}
}

//󰭅		Debug																	
impl<const SIGNED: bool> Debug for Int<SIGNED> {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		//	Standard format - Int::<signed>(0x<octets, most significant first>)
		write!(f, "Int::<{SIGNED}>(0x")?;
		for byte in self.data.iter().rev() {
			write!(f, "{byte:02x}")?;
		}
		write!(f, ")")?;
		
		//	For alternate formatting (#), show the octets in storage order
		if f.alternate() {
			write!(f, " [")?;
			for (i, byte) in self.data.iter().enumerate() {
				if i > 0 {
					write!(f, ", ")?;
				}
				write!(f, "0x{byte:02x}")?;
			}
			write!(f, "]")?;
		}
		
		Ok(())
	}
}

//󰭅		Not																		
impl<const SIGNED: bool> Not for Int<SIGNED> {
	type Output = Self;
	
	//		not																	
	fn not(mut self) -> Self::Output {
		self.invert();
		self
	}
}

//󰭅		Shl																		
impl<const SIGNED: bool> Shl<u32> for Int<SIGNED> {
	type Output = Self;
	
	//		shl																	
	fn shl(mut self, rhs: u32) -> Self::Output {
		self.shift_left(rhs);
		self
	}
}

//󰭅		ShlAssign																
impl<const SIGNED: bool> ShlAssign<u32> for Int<SIGNED> {
	//		shl_assign															
	fn shl_assign(&mut self, rhs: u32) {
		self.shift_left(rhs);
	}
}

//󰭅		Shr																		
impl<const SIGNED: bool> Shr<u32> for Int<SIGNED> {
	type Output = Self;
	
	//		shr																	
	/// Arithmetic for signed values and logical for unsigned ones, as with the
	/// primitive integer types.
	fn shr(mut self, rhs: u32) -> Self::Output {
		self.shift_right(rhs, SIGNED);
		self
	}
}

//󰭅		ShrAssign																
impl<const SIGNED: bool> ShrAssign<u32> for Int<SIGNED> {
	//		shr_assign															
	fn shr_assign(&mut self, rhs: u32) {
		self.shift_right(rhs, SIGNED);
	}
}



//		Macros																											

//		primitive_conversions!													
/// Implements construction from a primitive, whose octets are copied verbatim,
/// and fallible conversion back to every primitive of the same width.
macro_rules! primitive_conversions {
	($($signed:literal, $prim:ty, $uprim:ty, $octets:literal);+ $(;)?) => { $(
		//󰭅		From: $prim -> Int												
		impl From<$prim> for Int<$signed> {
			//		from														
			fn from(v: $prim) -> Self {
				Self::from_octets(&v.to_le_bytes())
			}
		}
		
		//󰭅		TryFrom: Int -> $prim											
		impl<const SIGNED: bool> TryFrom<&Int<SIGNED>> for $prim {
			type Error = ConversionError;
			
			//		try_from													
			fn try_from(v: &Int<SIGNED>) -> Result<Self, Self::Error> {
				v.to_primitive::<$octets>(true).map(Self::from_le_bytes)
			}
		}
		
		//󰭅		TryFrom: Int -> $uprim											
		impl<const SIGNED: bool> TryFrom<&Int<SIGNED>> for $uprim {
			type Error = ConversionError;
			
			//		try_from													
			fn try_from(v: &Int<SIGNED>) -> Result<Self, Self::Error> {
				v.to_primitive::<$octets>(false).map(Self::from_le_bytes)
			}
		}
		
		//󰭅		From: $uprim -> Int												
		impl From<$uprim> for Int<false> {
			//		from														
			fn from(v: $uprim) -> Self {
				Self::from_octets(&v.to_le_bytes())
			}
		}
	)+ };
}

primitive_conversions! {
	true, i8,  u8,  1;
	true, i16, u16, 2;
	true, i32, u32, 4;
	true, i64, u64, 8;
}
