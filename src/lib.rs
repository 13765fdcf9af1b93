//! The Flexint crate provides signed and unsigned integers of any width chosen
//! at runtime, stored in fixed-capacity octet buffers.
//!
//! The width of each value is set when it is created, in octets, and never
//! changes. Arithmetic happens in place and never grows the buffer: a result
//! that does not fit is truncated and flagged, so that callers can decide what
//! overflow means for them.
//!
//! Two flavours are provided: [`SInt`] is two's-complement, and [`UInt`] is a
//! plain magnitude that additionally tracks how many of its octets are
//! significant.



//		Global configuration

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::cast_lossless,
	clippy::cast_possible_truncation,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::exhaustive_enums,
	clippy::exhaustive_structs,
	clippy::expect_used,
	clippy::indexing_slicing,
	clippy::let_underscore_must_use,
	clippy::let_underscore_untyped,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::panic,
	clippy::print_stdout,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

mod errors;
mod int;
mod octets;
mod results;



//		Packages

pub use errors::{ArithmeticError, ConversionError};
pub use int::{Int, SInt, UInt};
pub use results::{CmpResult, DivResult, Overflowing};


