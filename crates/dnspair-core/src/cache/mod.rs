//! Zone-ID cache implementations
//!
//! See [`crate::traits::ZoneIdCache`] for the contract.

pub mod file;
pub mod memory;

pub use file::FileZoneCache;
pub use memory::MemoryZoneCache;
