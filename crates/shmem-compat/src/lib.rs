//! Shared memory compatibility layer (contract only).
//!
//! Converting between a [`SharedFileRegion`] received over IPC and a native
//! shared memory handle requires mapping file descriptors, which belongs to
//! the memory service, not to the descriptor converters. This crate only
//! fixes the shape of that capability.

use std::fmt;
use std::sync::Arc;

use media_aidl::SharedFileRegion;
use tracing::trace;

/// Native shared memory handle.
///
/// Handles are reference counted; whoever holds the last `Arc` releases the
/// mapping.
pub trait Memory: fmt::Debug + Send + Sync {
    /// Offset of this window within its backing heap.
    fn offset(&self) -> u64;
    /// Size of this window in bytes.
    fn size(&self) -> usize;
}

/// Shared handle as returned to converter callers.
pub type MemoryRef = Arc<dyn Memory>;

/// Two-way mapping between wire file regions and native memory handles.
///
/// Implementors provide the non-nullable pair. The nullable pair treats an
/// absent value on either side as a valid, absent result and defers to the
/// non-nullable pair otherwise.
pub trait SharedRegionBridge: Send + Sync {
    /// Map a region, or `None` when it cannot be mapped.
    fn region_to_memory(&self, region: &SharedFileRegion) -> Option<MemoryRef>;

    /// Describe a handle as a region, or `None` when it cannot be shared.
    fn memory_to_region(&self, memory: &MemoryRef) -> Option<SharedFileRegion>;

    /// Nullable variant of [`region_to_memory`](Self::region_to_memory).
    /// The outer `None` signals failure.
    fn nullable_region_to_memory(
        &self,
        region: Option<&SharedFileRegion>,
    ) -> Option<Option<MemoryRef>> {
        match region {
            None => {
                trace!("null region maps to null memory");
                Some(None)
            }
            Some(region) => self.region_to_memory(region).map(Some),
        }
    }

    /// Nullable variant of [`memory_to_region`](Self::memory_to_region).
    /// The outer `None` signals failure.
    fn nullable_memory_to_region(
        &self,
        memory: Option<&MemoryRef>,
    ) -> Option<Option<SharedFileRegion>> {
        match memory {
            None => {
                trace!("null memory maps to null region");
                Some(None)
            }
            Some(memory) => self.memory_to_region(memory).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Window {
        offset: u64,
        size: usize,
    }

    impl Memory for Window {
        fn offset(&self) -> u64 {
            self.offset
        }

        fn size(&self) -> usize {
            self.size
        }
    }

    struct RejectAll;

    impl SharedRegionBridge for RejectAll {
        fn region_to_memory(&self, _region: &SharedFileRegion) -> Option<MemoryRef> {
            None
        }

        fn memory_to_region(&self, _memory: &MemoryRef) -> Option<SharedFileRegion> {
            None
        }
    }

    #[test]
    fn nullable_absent_values_succeed_without_bridge() {
        let bridge = RejectAll;
        assert!(matches!(bridge.nullable_region_to_memory(None), Some(None)));
        assert_eq!(bridge.nullable_memory_to_region(None), Some(None));
    }

    #[test]
    fn nullable_present_values_defer_to_bridge() {
        let bridge = RejectAll;
        let region = SharedFileRegion {
            fd: 3,
            offset: 0,
            size: 16,
            writeable: false,
        };
        assert!(bridge.nullable_region_to_memory(Some(&region)).is_none());
        let memory: MemoryRef = Arc::new(Window { offset: 0, size: 16 });
        assert_eq!(memory.size(), 16);
        assert!(bridge.nullable_memory_to_region(Some(&memory)).is_none());
    }
}
