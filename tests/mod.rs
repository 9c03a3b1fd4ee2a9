pub mod convert;
pub mod ops;

#[cfg(feature = "std")]
pub mod capture;
