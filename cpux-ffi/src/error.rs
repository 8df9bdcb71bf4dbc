//! Error types for descriptor allocation

use thiserror::Error;

/// Errors that can occur while handing a descriptor across the C boundary
///
/// Never crosses the boundary itself: every variant becomes a NULL return.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    /// The allocator returned NULL
    #[error("failed to allocate {size}-byte descriptor")]
    AllocationFailed {
        /// Requested allocation size in bytes
        size: usize,
    },
}

/// Result type alias for descriptor operations
pub type DescriptorResult<T> = Result<T, DescriptorError>;
