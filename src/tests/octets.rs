//		Packages

use super::*;



//		Tests

mod magnitude {
	use super::*;
	
	//		new																	
	#[test]
	fn new__positive() {
		let magnitude = Magnitude::new(&[0x05, 0x00], true);
		assert!(!magnitude.is_negated());
		assert!(!magnitude.is_zero());
		assert_eq!(magnitude.octet(0), 0x05);
		assert_eq!(magnitude.octet(1), 0x00);
	}
	#[test]
	fn new__negative() {
		//	-5 in two octets
		let magnitude = Magnitude::new(&[0xFB, 0xFF], true);
		assert!(magnitude.is_negated());
		assert_eq!(magnitude.octet(0), 0x05);
		assert_eq!(magnitude.octet(1), 0x00);
		assert_eq!(magnitude.significant_len(), 1);
	}
	#[test]
	fn new__unsigned_ignores_top_bit() {
		let magnitude = Magnitude::new(&[0xFB, 0xFF], false);
		assert!(!magnitude.is_negated());
		assert_eq!(magnitude.octet(1), 0xFF);
		assert_eq!(magnitude.significant_len(), 2);
	}
	
	//		octet																
	#[test]
	fn octet__negative_with_low_zeroes() {
		//	-0x0100 is 0xFF00
		let magnitude = Magnitude::new(&[0x00, 0xFF], true);
		assert_eq!(magnitude.octet(0), 0x00);
		assert_eq!(magnitude.octet(1), 0x01);
	}
	#[test]
	fn octet__most_negative() {
		let magnitude = Magnitude::new(&[0x00, 0x80], true);
		assert_eq!(magnitude.octet(0), 0x00);
		assert_eq!(magnitude.octet(1), 0x80);
	}
	#[test]
	fn octet__past_end() {
		let magnitude = Magnitude::new(&[0xFF], true);
		assert_eq!(magnitude.octet(0), 0x01);
		assert_eq!(magnitude.octet(5), 0x00);
	}
	
	//		is_zero																
	#[test]
	fn is_zero__empty() {
		assert!(Magnitude::new(&[], true).is_zero());
	}
}

mod functions {
	use super::*;
	
	//		add_assign															
	#[test]
	fn add_assign__carry() {
		let mut lhs = [0xFF, 0x00];
		assert!(!add_assign(&mut lhs, &[0x01], false, false));
		assert_eq!(lhs, [0x00, 0x01]);
	}
	#[test]
	fn add_assign__unsigned_overflow() {
		let mut lhs = [0xFF];
		assert!(add_assign(&mut lhs, &[0x01], false, false));
		assert_eq!(lhs, [0x00]);
	}
	#[test]
	fn add_assign__unsigned_borrow() {
		let mut lhs = [0x00];
		assert!(add_assign(&mut lhs, &[0x01], false, true));
		assert_eq!(lhs, [0xFF]);
	}
	#[test]
	fn add_assign__signed_overflow() {
		let mut lhs = [0x7F];
		assert!(add_assign(&mut lhs, &[0x01], true, false));
		assert_eq!(lhs, [0x80]);
	}
	#[test]
	fn add_assign__signed_negative_no_overflow() {
		let mut lhs = [0xFF];
		assert!(!add_assign(&mut lhs, &[0xFF], true, false));
		assert_eq!(lhs, [0xFE]);
	}
	#[test]
	fn add_assign__narrow_negative_rhs() {
		//	1000 + (-1)
		let mut lhs = [0xE8, 0x03];
		assert!(!add_assign(&mut lhs, &[0xFF], true, false));
		assert_eq!(lhs, [0xE7, 0x03]);
	}
	#[test]
	fn add_assign__wide_rhs_overflows() {
		let mut lhs = [0x01];
		assert!(add_assign(&mut lhs, &[0x00, 0x01], false, false));
		assert_eq!(lhs, [0x01]);
	}
	#[test]
	fn add_assign__wide_rhs_fits() {
		//	-1 + 0x0001 in two octets
		let mut lhs = [0xFF];
		assert!(!add_assign(&mut lhs, &[0x01, 0x00], true, false));
		assert_eq!(lhs, [0x00]);
	}
	#[test]
	fn add_assign__empty_lhs() {
		let mut lhs: [u8; 0] = [];
		assert!(!add_assign(&mut lhs, &[0x05], true,  false));
		assert!(!add_assign(&mut lhs, &[0x05], false, true));
	}
	
	//		bit_len																
	#[test]
	fn bit_len__values() {
		assert_eq!(bit_len(&[]), 0);
		assert_eq!(bit_len(&[0x00, 0x00]), 0);
		assert_eq!(bit_len(&[0x01, 0x00]), 1);
		assert_eq!(bit_len(&[0xFF, 0x01]), 9);
		assert_eq!(bit_len(&[0x00, 0x80]), 16);
	}
	
	//		bit																	
	#[test]
	fn bit__positions() {
		let octets = [0b0000_0101, 0b1000_0000];
		assert!( bit(&octets, 0));
		assert!(!bit(&octets, 1));
		assert!( bit(&octets, 2));
		assert!( bit(&octets, 15));
		assert!(!bit(&octets, 16));
	}
	
	//		cbrt_rem															
	#[test]
	fn cbrt_rem__one_octet() {
		let mut rem  = [0xFF];
		let mut root = [0x00];
		let (mut square, mut term, mut part) = ([0; 2], [0; 2], [0; 2]);
		cbrt_rem(&mut rem, &mut root, &mut square, &mut term, &mut part);
		assert_eq!(root, [6]);
		assert_eq!(rem,  [39]);
		assert_eq!(square, [36, 0]);
	}
	#[test]
	fn cbrt_rem__two_octets() {
		//	40³ = 64000, and 65535 - 64000 = 1535
		let mut rem  = [0xFF, 0xFF];
		let mut root = [0x00, 0x00];
		let (mut square, mut term, mut part) = ([0; 3], [0; 3], [0; 3]);
		cbrt_rem(&mut rem, &mut root, &mut square, &mut term, &mut part);
		assert_eq!(root, [40, 0]);
		assert_eq!(rem,  [0xFF, 0x05]);
	}
	#[test]
	fn cbrt_rem__zero() {
		let mut rem  = [0x00, 0x00];
		let mut root = [0xAA, 0xAA];
		let (mut square, mut term, mut part) = ([0; 3], [0; 3], [0; 3]);
		cbrt_rem(&mut rem, &mut root, &mut square, &mut term, &mut part);
		assert_eq!(root, [0, 0]);
		assert_eq!(rem,  [0, 0]);
	}
	
	//		compare																
	#[test]
	fn compare__signs_first() {
		assert_eq!(compare(&[0xFF, 0xFF], &[0x00], true), Ordering::Less);
		assert_eq!(compare(&[0x00], &[0x80], true),       Ordering::Greater);
	}
	#[test]
	fn compare__mixed_widths() {
		assert_eq!(compare(&[0x05, 0x00, 0x00], &[0x05], true),  Ordering::Equal);
		assert_eq!(compare(&[0xFE, 0xFF], &[0xFF], true),        Ordering::Less);
		assert_eq!(compare(&[0x00, 0x01], &[0xFF], false),       Ordering::Greater);
	}
	#[test]
	fn compare__does_not_modify() {
		let lhs = [0x00, 0x80];
		let rhs = [0xFF, 0xFF];
		assert_eq!(compare(&lhs, &rhs, true), Ordering::Less);
		assert_eq!(lhs, [0x00, 0x80]);
		assert_eq!(rhs, [0xFF, 0xFF]);
	}
	
	//		count_ones															
	#[test]
	fn count_ones__values() {
		assert_eq!(count_ones(&[]), 0);
		assert_eq!(count_ones(&[0xFF, 0x01]), 9);
	}
	
	//		div_rem_magnitude													
	#[test]
	fn div_rem_magnitude__exact() {
		let mut quot = [0xE8, 0x03];
		let mut rem  = [0x00];
		div_rem_magnitude(&mut quot, &Magnitude::new(&[0x0A], false), &mut rem);
		assert_eq!(quot, [0x64, 0x00]);
		assert_eq!(rem,  [0x00]);
	}
	#[test]
	fn div_rem_magnitude__with_remainder() {
		let mut quot = [0xFF, 0xFF];
		let mut rem  = [0x00];
		div_rem_magnitude(&mut quot, &Magnitude::new(&[0xFE], false), &mut rem);
		//	65535 = 258 × 254 + 3
		assert_eq!(quot, [0x02, 0x01]);
		assert_eq!(rem,  [0x03]);
	}
	#[test]
	fn div_rem_magnitude__negated_divisor() {
		let mut quot = [0x07];
		let mut rem  = [0x00];
		div_rem_magnitude(&mut quot, &Magnitude::new(&[0xFE], true), &mut rem);
		assert_eq!(quot, [0x03]);
		assert_eq!(rem,  [0x01]);
	}
	#[test]
	fn div_rem_magnitude__wide_divisor() {
		let mut quot = [0x10];
		let mut rem  = [0x00, 0x00];
		div_rem_magnitude(&mut quot, &Magnitude::new(&[0x00, 0x01], false), &mut rem);
		assert_eq!(quot, [0x00]);
		assert_eq!(rem,  [0x10, 0x00]);
	}
	
	//		extension															
	#[test]
	fn extension__values() {
		assert_eq!(extension(&[0x80], true),  0xFF);
		assert_eq!(extension(&[0x80], false), 0x00);
		assert_eq!(extension(&[0x7F], true),  0x00);
		assert_eq!(extension(&[], true),      0x00);
	}
	
	//		leading_zeros														
	#[test]
	fn leading_zeros__values() {
		assert_eq!(leading_zeros(&[]), 0);
		assert_eq!(leading_zeros(&[0x00, 0x00]), 16);
		assert_eq!(leading_zeros(&[0xFF, 0x00]), 8);
		assert_eq!(leading_zeros(&[0x00, 0x10]), 3);
	}
	
	//		load																
	#[test]
	fn load__pads_and_truncates() {
		let mut dst = [0xAA; 3];
		load(&mut dst, &[0x01, 0x02]);
		assert_eq!(dst, [0x01, 0x02, 0x00]);
		let mut dst = [0xAA; 1];
		load(&mut dst, &[0x01, 0x02]);
		assert_eq!(dst, [0x01]);
	}
	
	//		minimal_len															
	#[test]
	fn minimal_len__unsigned() {
		assert_eq!(minimal_len(&[], false), 0);
		assert_eq!(minimal_len(&[0x00, 0x00], false), 1);
		assert_eq!(minimal_len(&[0x05, 0x00, 0x00], false), 1);
		assert_eq!(minimal_len(&[0x00, 0x01, 0x00], false), 2);
	}
	#[test]
	fn minimal_len__signed() {
		assert_eq!(minimal_len(&[0xFF, 0xFF], true), 1);
		assert_eq!(minimal_len(&[0x7F, 0xFF], true), 2);
		assert_eq!(minimal_len(&[0x80, 0x00], true), 2);
		assert_eq!(minimal_len(&[0x80, 0xFF], true), 1);
	}
	
	//		mul_magnitude														
	#[test]
	fn mul_magnitude__fits() {
		let mut lhs = [0xE8, 0x03, 0x00];
		assert!(!mul_magnitude(&mut lhs, &Magnitude::new(&[0xE8, 0x03], false)));
		//	1000 × 1000 = 0x0F4240
		assert_eq!(lhs, [0x40, 0x42, 0x0F]);
	}
	#[test]
	fn mul_magnitude__overflow() {
		let mut lhs = [0x10];
		assert!(mul_magnitude(&mut lhs, &Magnitude::new(&[0x10], false)));
		assert_eq!(lhs, [0x00]);
	}
	#[test]
	fn mul_magnitude__overflow_by_carry() {
		let mut lhs = [0xFF, 0x00];
		assert!(!mul_magnitude(&mut lhs, &Magnitude::new(&[0xFF], false)));
		assert_eq!(lhs, [0x01, 0xFE]);
		assert!(mul_magnitude(&mut lhs, &Magnitude::new(&[0x02], false)));
		assert_eq!(lhs, [0x02, 0xFC]);
	}
	#[test]
	fn mul_magnitude__by_zero() {
		let mut lhs = [0x12, 0x34];
		assert!(!mul_magnitude(&mut lhs, &Magnitude::new(&[0x00], false)));
		assert_eq!(lhs, [0x00, 0x00]);
	}
	
	//		negate																
	#[test]
	fn negate__values() {
		let mut octets = [0x01, 0x00];
		negate(&mut octets);
		assert_eq!(octets, [0xFF, 0xFF]);
		negate(&mut octets);
		assert_eq!(octets, [0x01, 0x00]);
	}
	#[test]
	fn negate__most_negative() {
		let mut octets = [0x00, 0x80];
		negate(&mut octets);
		assert_eq!(octets, [0x00, 0x80]);
	}
	
	//		rotate_left															
	#[test]
	fn rotate_left__bits_and_octets() {
		let mut octets = [0x01, 0x80];
		rotate_left(&mut octets, 1);
		assert_eq!(octets, [0x03, 0x00]);
		rotate_left(&mut octets, 8);
		assert_eq!(octets, [0x00, 0x03]);
		rotate_left(&mut octets, 16);
		assert_eq!(octets, [0x00, 0x03]);
	}
	#[test]
	fn rotate_left__empty() {
		let mut octets: Vec<u8> = Vec::new();
		rotate_left(&mut octets, 3);
		rotate_right(&mut octets, 3);
		assert!(octets.is_empty());
	}
	
	//		rotate_right														
	#[test]
	fn rotate_right__bits_and_octets() {
		let mut octets = [0x03, 0x00];
		rotate_right(&mut octets, 1);
		assert_eq!(octets, [0x01, 0x80]);
		rotate_right(&mut octets, 12);
		assert_eq!(octets, [0x18, 0x00]);
	}
	
	//		set_bit																
	#[test]
	fn set_bit__set_and_clear() {
		let mut octets = [0x00, 0x00];
		set_bit(&mut octets, 9, true);
		assert_eq!(octets, [0x00, 0x02]);
		set_bit(&mut octets, 9, false);
		assert_eq!(octets, [0x00, 0x00]);
		set_bit(&mut octets, 16, true);
		assert_eq!(octets, [0x00, 0x00]);
	}
	
	//		shift_left															
	#[test]
	fn shift_left__values() {
		let mut octets = [0x81, 0x00, 0x00];
		shift_left(&mut octets, 1);
		assert_eq!(octets, [0x02, 0x01, 0x00]);
		shift_left(&mut octets, 12);
		assert_eq!(octets, [0x00, 0x20, 0x10]);
		shift_left(&mut octets, 24);
		assert_eq!(octets, [0x00, 0x00, 0x00]);
	}
	
	//		shift_left_one														
	#[test]
	fn shift_left_one__carries() {
		let mut octets = [0x80, 0x80];
		assert!(shift_left_one(&mut octets, true));
		assert_eq!(octets, [0x01, 0x01]);
	}
	
	//		shift_right															
	#[test]
	fn shift_right__logical() {
		let mut octets = [0x00, 0x81];
		shift_right(&mut octets, 4, 0x00);
		assert_eq!(octets, [0x10, 0x08]);
	}
	#[test]
	fn shift_right__arithmetic() {
		let mut octets = [0x00, 0x81];
		shift_right(&mut octets, 4, 0xFF);
		assert_eq!(octets, [0x10, 0xF8]);
		shift_right(&mut octets, 99, 0xFF);
		assert_eq!(octets, [0xFF, 0xFF]);
	}
	
	//		significant_len														
	#[test]
	fn significant_len__values() {
		assert_eq!(significant_len(&[]), 0);
		assert_eq!(significant_len(&[0x00, 0x00]), 0);
		assert_eq!(significant_len(&[0x00, 0x01, 0x00]), 2);
	}
	
	//		sqrt_rem															
	#[test]
	fn sqrt_rem__one_octet() {
		let mut rem  = [0xFF];
		let mut root = [0x00];
		let mut term = [0; 2];
		sqrt_rem(&mut rem, &mut root, &mut term);
		assert_eq!(root, [15]);
		assert_eq!(rem,  [30]);
	}
	#[test]
	fn sqrt_rem__perfect_square() {
		//	65536 = 256²
		let mut rem  = [0x00, 0x00, 0x01];
		let mut root = [0x00, 0x00, 0x00];
		let mut term = [0; 4];
		sqrt_rem(&mut rem, &mut root, &mut term);
		assert_eq!(root, [0x00, 0x01, 0x00]);
		assert_eq!(rem,  [0x00, 0x00, 0x00]);
	}
	
	//		sub_magnitude														
	#[test]
	fn sub_magnitude__borrow() {
		let mut lhs = [0x00, 0x01];
		sub_magnitude(&mut lhs, &Magnitude::new(&[0x01], false));
		assert_eq!(lhs, [0xFF, 0x00]);
	}
	
	//		trailing_zeros														
	#[test]
	fn trailing_zeros__values() {
		assert_eq!(trailing_zeros(&[]), 0);
		assert_eq!(trailing_zeros(&[0x00, 0x00]), 16);
		assert_eq!(trailing_zeros(&[0x00, 0x10]), 12);
	}
}


