//! Target-language walkers.

#[cfg(feature = "write-kotlin")]
pub mod kotlin;

#[cfg(feature = "write-kotlin")]
pub use kotlin::KotlinWriter;
