pub mod rounding;
pub mod tone_exception;
