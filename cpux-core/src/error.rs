//! Error types for host probing
//!
//! These never reach a descriptor consumer: the snapshot builders fold every
//! probe error into a zero or empty field and log it.

use thiserror::Error;

/// Reasons a single host value could not be determined
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// The OS reported no logical CPUs at all
    #[error("host reported an empty CPU list")]
    CpuListEmpty,

    /// The CPU brand string is missing or blank
    #[error("CPU brand string unavailable")]
    BrandUnavailable,

    /// The physical core count could not be read
    #[error("physical core count unavailable")]
    PhysicalCoresUnavailable,

    /// Total physical memory could not be read
    #[error("total physical memory unavailable")]
    MemoryUnavailable,
}

/// Result type alias for probe operations
pub type ProbeResult<T> = Result<T, ProbeError>;
