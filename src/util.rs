/// Numeric conversion helpers.
///
/// This module provides the conversions between the floating-point register
/// and the integers the extended operations work on. Truncation is explicit
/// and saturating, and integer results only re-enter the register when they
/// are exactly representable as an `f64`.
pub mod num;
