//! Arithmetic kernels over little-endian octet slices.
//!
//! Every function here works in place on the slice it is given, and none of
//! them allocate. Widths are taken from the slices themselves, so operands of
//! different widths can be combined: the narrower side is extended with its
//! sign (signed) or with zeroes (unsigned).

//	These lint checks are unnecessary in this module because:
//	  1. Every index is either bounded by the slice length in the enclosing
//	     loop, or the access goes through `get()`.
//	  2. The shift amounts are all reduced modulo 8 before use.
#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "Indices are bounded by the slice lengths"
)]

//	Carries, borrows, and bit positions are the core of this module and are
//	all bounded by the octet arithmetic they come from.
#![allow(clippy::arithmetic_side_effects, reason = "Carries and positions are bounded")]
#![allow(clippy::integer_division,        reason = "Splitting bit counts into octets and bits")]
#![allow(clippy::as_conversions,          reason = "Shift amounts are u32, which always fits in usize here")]



//		Modules																											

#[cfg(test)]
#[path = "tests/octets.rs"]
mod tests;



//		Packages																										

use core::cmp::Ordering;



//		Structs																											

//		Magnitude																
/// A read-only view of the absolute value of an operand.
///
/// Negative two's-complement operands are negated on the fly, octet by octet,
/// so that callers never need to copy or mutate the operand. The magnitude of
/// an `n`-octet value always fits in `n` octets when read as unsigned.
///
#[derive(Clone, Copy, Debug)]
pub(crate) struct Magnitude<'a> {
	/// The raw octets of the operand.
	octets:        &'a [u8],
	
	/// Whether the operand is negative and must be read negated.
	negated:       bool,
	
	/// Index of the lowest non-zero octet, or the length if there is none.
	first_nonzero: usize,
}

//󰭅		Magnitude																
impl<'a> Magnitude<'a> {
	//		new																	
	/// Creates a magnitude view over `octets`.
	pub(crate) fn new(octets: &'a [u8], signed: bool) -> Self {
		Self {
			octets,
			negated:       signed && is_negative(octets),
			first_nonzero: octets.iter().position(|&b| b != 0).unwrap_or(octets.len()),
		}
	}
	
	//		is_negated															
	/// Whether the underlying operand was negative.
	pub(crate) const fn is_negated(&self) -> bool {
		self.negated
	}
	
	//		is_zero																
	pub(crate) const fn is_zero(&self) -> bool {
		self.first_nonzero == self.octets.len()
	}
	
	//		len																	
	pub(crate) const fn len(&self) -> usize {
		self.octets.len()
	}
	
	//		octet																
	/// Returns octet `j` of the magnitude. Positions past the end read as zero.
	pub(crate) fn octet(&self, j: usize) -> u8 {
		let Some(&raw) = self.octets.get(j) else {
			return 0;
		};
		if !self.negated {
			return raw;
		}
		//	-x = !x + 1, and the +1 only carries through the low zero octets
		match j.cmp(&self.first_nonzero) {
			Ordering::Less    => 0,
			Ordering::Equal   => raw.wrapping_neg(),
			Ordering::Greater => !raw,
		}
	}
	
	//		significant_len														
	/// Number of octets up to and including the highest non-zero one.
	pub(crate) fn significant_len(&self) -> usize {
		(0..self.octets.len()).rev().find(|&j| self.octet(j) != 0).map_or(0, |j| j + 1)
	}
}



//		Functions																										

//		add_assign																
/// Adds (or subtracts) `rhs` into `lhs`, returning whether the result
/// overflowed the width of `lhs`.
///
/// The sum is computed across one octet more than the wider operand, with
/// both sides extended, so it is always exact there. The octets that land
/// inside `lhs` are written back; the rest must match the extension of what
/// was written, or the true result did not fit. An empty `lhs` holds no
/// result to overflow, so it is left alone and never reports overflow.
///
pub(crate) fn add_assign(lhs: &mut [u8], rhs: &[u8], signed: bool, subtract: bool) -> bool {
	let width      = lhs.len();
	if width == 0 {
		return false;
	}
	let lhs_ext    = extension(lhs, signed);
	let rhs_ext    = extension(rhs, signed);
	let mut carry  = u16::from(subtract);
	let mut stored = 0_u8;
	let mut overflow = false;
	
	for i in 0..=width.max(rhs.len()) {
		let a    = lhs.get(i).copied().unwrap_or(lhs_ext);
		let b    = rhs.get(i).copied().unwrap_or(rhs_ext);
		let b    = if subtract { !b } else { b };
		let sum  = u16::from(a) + u16::from(b) + carry;
		let [byte, high] = sum.to_le_bytes();
		carry    = u16::from(high);
		
		if let Some(slot) = lhs.get_mut(i) {
			*slot = byte;
			if i + 1 == width && signed && byte & 0x80 != 0 {
				stored = 0xFF;
			}
		} else if byte != stored {
			overflow = true;
		}
	}
	overflow
}

//		bit_len																	
/// Number of bits up to and including the highest set one. Zero for an
/// all-zero slice.
pub(crate) fn bit_len(octets: &[u8]) -> usize {
	octets.iter().rposition(|&b| b != 0).map_or(0, |i| {
		i * 8 + 8 - octets[i].leading_zeros() as usize
	})
}

//		bit																		
/// Gets the value of bit `pos`, where `0` is the least-significant bit.
/// Positions past the end read as `false`.
pub(crate) fn bit(octets: &[u8], pos: usize) -> bool {
	octets.get(pos / 8).is_some_and(|&b| b & (1 << (pos % 8)) != 0)
}

//		cbrt_rem																
/// Digit-by-digit integer cube root.
///
/// `rem` holds the unsigned radicand on entry and `radicand − root³` on
/// return, and `root` receives the floor of the cube root. Each candidate bit
/// `k` is kept when the growth it causes, `3r²·2ᵏ + 3r·4ᵏ + 8ᵏ`, still fits
/// in what is left, with `r²` carried along in `square` so that no step
/// multiplies. `square`, `term` and `part` are scratch, and must each be at
/// least one octet wider than `rem`.
///
pub(crate) fn cbrt_rem(rem: &mut [u8], root: &mut [u8], square: &mut [u8], term: &mut [u8], part: &mut [u8]) {
	root.fill(0);
	square.fill(0);
	//	Radicands are at most u16::MAX octets wide, so bit counts fit in u32
	let top = u32::try_from(bit_len(rem).div_ceil(3)).unwrap_or_default();
	for k in (0..top).rev() {
		//	Every term stays below 2^(bits + 5), so the spare scratch octet
		//	keeps these sums exact
		load(term, square);
		shift_left(term, 1);
		_ = add_assign(term, square, false, false);
		shift_left(term, k);
		load(part, root);
		shift_left(part, 1);
		_ = add_assign(part, root, false, false);
		shift_left(part, 2 * k);
		_ = add_assign(term, part, false, false);
		//	Both terms above start at bit 3k + 1 or higher, as root has no bits
		//	at or below k
		set_bit(term, 3 * k as usize, true);
		
		if compare(rem, term, false) != Ordering::Less {
			//	Cannot borrow, as term does not exceed rem
			_ = add_assign(rem, term, false, true);
			load(part, root);
			shift_left(part, k + 1);
			set_bit(part, 2 * k as usize, true);
			_ = add_assign(square, part, false, false);
			set_bit(root, k as usize, true);
		}
	}
}

//		compare																	
/// Compares two operands by value.
///
/// Signs are compared first. With equal signs, both operands are read
/// sign-extended to the wider width and scanned from the most-significant
/// octet down, so that octets of the longer operand beyond the shorter one
/// are checked against the shorter operand's extension before the shared
/// octets. Neither operand is modified.
///
pub(crate) fn compare(lhs: &[u8], rhs: &[u8], signed: bool) -> Ordering {
	let lhs_neg = signed && is_negative(lhs);
	let rhs_neg = signed && is_negative(rhs);
	if lhs_neg != rhs_neg {
		return if lhs_neg { Ordering::Less } else { Ordering::Greater };
	}
	let lhs_ext = extension(lhs, signed);
	let rhs_ext = extension(rhs, signed);
	for i in (0..lhs.len().max(rhs.len())).rev() {
		let a = lhs.get(i).copied().unwrap_or(lhs_ext);
		let b = rhs.get(i).copied().unwrap_or(rhs_ext);
		match a.cmp(&b) {
			Ordering::Equal => {},
			unequal         => return unequal,
		}
	}
	Ordering::Equal
}

//		compare_magnitude														
/// Compares an unsigned register against a magnitude.
pub(crate) fn compare_magnitude(lhs: &[u8], rhs: &Magnitude<'_>) -> Ordering {
	for i in (0..lhs.len().max(rhs.len())).rev() {
		let a = lhs.get(i).copied().unwrap_or(0);
		match a.cmp(&rhs.octet(i)) {
			Ordering::Equal => {},
			unequal         => return unequal,
		}
	}
	Ordering::Equal
}

//		count_ones																
pub(crate) fn count_ones(octets: &[u8]) -> u32 {
	octets.iter().map(|b| b.count_ones()).sum()
}

//		div_rem_magnitude														
/// Restoring long division of the unsigned value in `quot` by `divisor`.
///
/// On return `quot` holds the quotient and `rem` the remainder. The dividend
/// is consumed bit by bit from the top, and each quotient bit is written back
/// into the position it was read from. `rem` must be at least as wide as the
/// divisor's magnitude, and the divisor must not be zero.
///
pub(crate) fn div_rem_magnitude(quot: &mut [u8], divisor: &Magnitude<'_>, rem: &mut [u8]) {
	rem.fill(0);
	for pos in (0..quot.len() * 8).rev() {
		let incoming = bit(quot, pos);
		let outgoing = shift_left_one(rem, incoming);
		//	A bit shifted out of the register means it exceeds any divisor that
		//	fits the register, and the wrapping subtraction is then exact
		let take     = outgoing || compare_magnitude(rem, divisor) != Ordering::Less;
		if take {
			sub_magnitude(rem, divisor);
		}
		set_bit(quot, pos, take);
	}
}

//		extension																
/// The octet that extends `octets` to a wider width without changing its
/// value: `0xFF` for negative signed values, `0x00` otherwise.
pub(crate) fn extension(octets: &[u8], signed: bool) -> u8 {
	if signed && is_negative(octets) { 0xFF } else { 0x00 }
}

//		is_negative																
/// Whether the top bit of the last octet is set. Empty slices are not
/// negative.
pub(crate) fn is_negative(octets: &[u8]) -> bool {
	octets.last().is_some_and(|&b| b & 0x80 != 0)
}

//		is_zero																	
pub(crate) fn is_zero(octets: &[u8]) -> bool {
	octets.iter().all(|&b| b == 0)
}

//		leading_zeros															
/// Counts the leading zero bits across the whole slice. An all-zero slice
/// yields `8 × len`.
pub(crate) fn leading_zeros(octets: &[u8]) -> u32 {
	let mut count = 0;
	for &byte in octets.iter().rev() {
		count += byte.leading_zeros();
		if byte != 0 {
			break;
		}
	}
	count
}

//		load																	
/// Zero-fills `dst` and copies as much of `src` into its low end as fits.
fn load(dst: &mut [u8], src: &[u8]) {
	dst.fill(0);
	let n = dst.len().min(src.len());
	dst[..n].copy_from_slice(&src[..n]);
}

//		minimal_len																
/// The fewest octets that still represent the same value, never less than
/// one for a non-empty slice.
///
/// Unsigned values drop high-order zero octets. Signed values also drop
/// high-order `0xFF` octets of negative values, but only while the octet
/// below keeps the same sign bit.
///
pub(crate) fn minimal_len(octets: &[u8], signed: bool) -> usize {
	let ext     = extension(octets, signed);
	let mut len = octets.len();
	while len > 1 && octets[len - 1] == ext {
		if signed && (octets[len - 2] & 0x80 != 0) != (ext != 0) {
			break;
		}
		len -= 1;
	}
	len
}

//		mul_magnitude															
/// Multiplies the unsigned value in `lhs` by `rhs` in place, returning
/// whether the true product exceeded the width of `lhs`.
///
/// Octets of `lhs` are taken from the top down. Each one is cleared and its
/// partial product added back at its own position and above, so the lower
/// octets still hold their original digits when they are reached. Any
/// non-zero contribution at or beyond the width of `lhs` is an overflow.
///
pub(crate) fn mul_magnitude(lhs: &mut [u8], rhs: &Magnitude<'_>) -> bool {
	let width        = lhs.len();
	let rhs_len      = rhs.significant_len();
	let mut overflow = false;
	
	for i in (0..width).rev() {
		let digit = u16::from(lhs[i]);
		if digit == 0 {
			continue;
		}
		lhs[i]        = 0;
		let mut carry = 0_u16;
		
		for j in 0..rhs_len {
			let Some(slot) = lhs.get_mut(i + j) else {
				if carry != 0 || (j..rhs_len).any(|k| rhs.octet(k) != 0) {
					overflow = true;
				}
				carry = 0;
				break;
			};
			//	255 × 255 + 255 + 255 fits exactly in a u16
			let [low, high] = (digit * u16::from(rhs.octet(j)) + u16::from(*slot) + carry).to_le_bytes();
			*slot = low;
			carry = u16::from(high);
		}
		
		let mut k = i + rhs_len;
		while carry != 0 {
			let Some(slot) = lhs.get_mut(k) else {
				overflow = true;
				break;
			};
			let [low, high] = (u16::from(*slot) + carry).to_le_bytes();
			*slot = low;
			carry = u16::from(high);
			k    += 1;
		}
	}
	overflow
}

//		negate																	
/// Two's-complement negation in place. The most negative value maps to
/// itself, which is also its magnitude when read as unsigned.
pub(crate) fn negate(octets: &mut [u8]) {
	let mut carry = true;
	for byte in octets.iter_mut() {
		let (sum, next) = (!*byte).overflowing_add(u8::from(carry));
		*byte = sum;
		carry = next;
	}
}

//		rotate_left																
/// Rotates the whole slice left by `n` bits.
pub(crate) fn rotate_left(octets: &mut [u8], n: u32) {
	let bits = octets.len() * 8;
	if bits == 0 {
		return;
	}
	let shift = n as usize % bits;
	let (byte_shift, bit_shift) = (shift / 8, shift % 8);
	
	//	Octet 0 is least significant, so moving up in value moves up in index
	octets.rotate_right(byte_shift);
	if bit_shift != 0 {
		let mut carry = octets[octets.len() - 1] >> (8 - bit_shift);
		for byte in octets.iter_mut() {
			let next = *byte >> (8 - bit_shift);
			*byte    = (*byte << bit_shift) | carry;
			carry    = next;
		}
	}
}

//		rotate_right															
/// Rotates the whole slice right by `n` bits.
pub(crate) fn rotate_right(octets: &mut [u8], n: u32) {
	let bits = octets.len() * 8;
	if bits == 0 {
		return;
	}
	let shift = n as usize % bits;
	let (byte_shift, bit_shift) = (shift / 8, shift % 8);
	
	octets.rotate_left(byte_shift);
	if bit_shift != 0 {
		let mut carry = octets[0] << (8 - bit_shift);
		for byte in octets.iter_mut().rev() {
			let next = *byte << (8 - bit_shift);
			*byte    = (*byte >> bit_shift) | carry;
			carry    = next;
		}
	}
}

//		set_bit																	
/// Sets bit `pos` to `value`. Positions past the end are ignored.
pub(crate) fn set_bit(octets: &mut [u8], pos: usize, value: bool) {
	if let Some(byte) = octets.get_mut(pos / 8) {
		if value {
			*byte |=   1 << (pos % 8);
		} else {
			*byte &= !(1 << (pos % 8));
		}
	}
}

//		shift_left																
/// Logical left shift by `n` bits, zero-filling from the bottom and
/// discarding bits shifted past the top.
pub(crate) fn shift_left(octets: &mut [u8], n: u32) {
	let width = octets.len();
	let shift = n as usize;
	if shift >= width * 8 {
		octets.fill(0);
		return;
	}
	let (byte_shift, bit_shift) = (shift / 8, shift % 8);
	
	//	Walking downwards only ever reads octets that are not yet written
	for i in (0..width).rev() {
		let high = if i >= byte_shift     { octets[i - byte_shift]     } else { 0 };
		let low  = if i >  byte_shift     { octets[i - byte_shift - 1] } else { 0 };
		octets[i] = if bit_shift == 0 {
			high
		} else {
			(high << bit_shift) | (low >> (8 - bit_shift))
		};
	}
}

//		shift_right																
/// Right shift by `n` bits, filling vacated high bits from `fill`
/// (`0x00` for a logical shift, `0xFF` to replicate a set sign bit).
pub(crate) fn shift_right(octets: &mut [u8], n: u32, fill: u8) {
	let width = octets.len();
	let shift = n as usize;
	if shift >= width * 8 {
		octets.fill(fill);
		return;
	}
	let (byte_shift, bit_shift) = (shift / 8, shift % 8);
	
	//	Walking upwards only ever reads octets that are not yet written
	for i in 0..width {
		let low  = octets.get(i + byte_shift).copied().unwrap_or(fill);
		let high = octets.get(i + byte_shift + 1).copied().unwrap_or(fill);
		octets[i] = if bit_shift == 0 {
			low
		} else {
			(low >> bit_shift) | (high << (8 - bit_shift))
		};
	}
}

//		shift_left_one															
/// Shifts left by a single bit, feeding `incoming` into the bottom and
/// returning the bit shifted out of the top.
fn shift_left_one(octets: &mut [u8], incoming: bool) -> bool {
	let mut carry = u8::from(incoming);
	for byte in octets.iter_mut() {
		let next = *byte >> 7;
		*byte    = (*byte << 1) | carry;
		carry    = next;
	}
	carry != 0
}

//		significant_len															
/// Number of octets up to and including the highest non-zero one.
pub(crate) fn significant_len(octets: &[u8]) -> usize {
	octets.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1)
}

//		sqrt_rem																
/// Digit-by-digit integer square root.
///
/// `rem` holds the unsigned radicand on entry and `radicand − root²` on
/// return, and `root` receives the floor of the square root. Each candidate
/// bit `k` is kept when `r·2ᵏ⁺¹ + 4ᵏ` still fits in what is left. `term` is
/// scratch, and must be at least one octet wider than `rem`.
///
pub(crate) fn sqrt_rem(rem: &mut [u8], root: &mut [u8], term: &mut [u8]) {
	root.fill(0);
	//	Radicands are at most u16::MAX octets wide, so bit counts fit in u32
	let top = u32::try_from(bit_len(rem).div_ceil(2)).unwrap_or_default();
	for k in (0..top).rev() {
		load(term, root);
		shift_left(term, k + 1);
		//	Root has no bits at or below k, so bit 2k is still clear
		set_bit(term, 2 * k as usize, true);
		if compare(rem, term, false) != Ordering::Less {
			//	Cannot borrow, as term does not exceed rem
			_ = add_assign(rem, term, false, true);
			set_bit(root, k as usize, true);
		}
	}
}

//		sub_magnitude															
/// Wrapping subtraction of a magnitude from an unsigned register.
pub(crate) fn sub_magnitude(lhs: &mut [u8], rhs: &Magnitude<'_>) {
	let mut borrow = false;
	for (i, byte) in lhs.iter_mut().enumerate() {
		let (diff1, b1) = byte.overflowing_sub(rhs.octet(i));
		let (diff2, b2) = diff1.overflowing_sub(u8::from(borrow));
		*byte  = diff2;
		borrow = b1 || b2;
	}
}

//		trailing_zeros															
/// Counts the trailing zero bits across the whole slice. An all-zero slice
/// yields `8 × len`.
pub(crate) fn trailing_zeros(octets: &[u8]) -> u32 {
	let mut count = 0;
	for &byte in octets {
		count += byte.trailing_zeros();
		if byte != 0 {
			break;
		}
	}
	count
}
