//! Bounded inline collections for header values
//!
//! Some header values are small sequences with a hard protocol bound. They
//! are stored inline with an explicit element count instead of on the heap,
//! so a header record has a fixed shape regardless of what it carries.
//!
//! ## Performance Characteristics
//!
//! - No allocation; the whole collection lives inside its owner
//! - O(1) push, O(n) membership
//! - Unused slots hold `T::default()` so equality is deterministic

use crate::common::PayloadError;

/// Common interface for bounded collections
pub trait DynamicPayload<T> {
    type Error;

    /// Current number of valid elements
    fn len(&self) -> usize;

    /// Check if payload is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert to slice of valid elements only
    fn as_slice(&self) -> &[T];

    /// Create from slice with bounds validation
    fn from_slice(slice: &[T]) -> Result<Self, Self::Error>
    where
        Self: Sized;
}

/// Fixed-capacity vector with inline storage
///
/// Holds up to `N` elements plus the count of valid ones. A push beyond
/// capacity is rejected and leaves the contents untouched; there is no
/// truncation and no eviction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedVec<T, const N: usize>
where
    T: Copy,
{
    /// Number of valid elements (0 to N)
    count: usize,

    /// Fixed-size array holding elements (unused slots are defaulted)
    elements: [T; N],
}

impl<T, const N: usize> FixedVec<T, N>
where
    T: Copy + Default,
{
    /// Create new empty FixedVec
    pub fn new() -> Self {
        Self {
            count: 0,
            elements: [T::default(); N],
        }
    }

    /// Push element if capacity allows
    pub fn try_push(&mut self, element: T) -> Result<(), PayloadError> {
        if self.count >= N {
            return Err(PayloadError::CapacityExceeded {
                max_capacity: N,
                attempted: self.count + 1,
            });
        }

        self.elements[self.count] = element;
        self.count += 1;
        Ok(())
    }

    /// Whether all `N` slots are in use
    pub fn is_full(&self) -> bool {
        self.count == N
    }

    /// Get iterator over valid elements only
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

impl<T, const N: usize> FixedVec<T, N>
where
    T: Copy + Default + PartialEq,
{
    /// Membership test over valid elements
    pub fn contains(&self, element: &T) -> bool {
        self.as_slice().contains(element)
    }
}

impl<T, const N: usize> Default for FixedVec<T, N>
where
    T: Copy + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> DynamicPayload<T> for FixedVec<T, N>
where
    T: Copy + Default,
{
    type Error = PayloadError;

    fn len(&self) -> usize {
        self.count
    }

    fn as_slice(&self) -> &[T] {
        &self.elements[..self.count]
    }

    fn from_slice(slice: &[T]) -> Result<Self, Self::Error> {
        if slice.len() > N {
            return Err(PayloadError::InvalidLength {
                expected_max: N,
                got: slice.len(),
            });
        }

        let mut result = Self::new();
        result.elements[..slice.len()].copy_from_slice(slice);
        result.count = slice.len();
        Ok(result)
    }
}
