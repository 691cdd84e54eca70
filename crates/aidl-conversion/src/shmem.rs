//! Shared memory region conversions, delegated to a [`SharedRegionBridge`].

use media_aidl::SharedFileRegion;
use shmem_compat::{MemoryRef, SharedRegionBridge};

use crate::error::{ConversionError, ConversionResult};

pub fn aidl2legacy_shared_file_region_imemory(
    aidl: &SharedFileRegion,
    bridge: &dyn SharedRegionBridge,
) -> ConversionResult<MemoryRef> {
    bridge
        .region_to_memory(aidl)
        .ok_or(ConversionError::BadValue)
}

pub fn legacy2aidl_imemory_shared_file_region(
    legacy: &MemoryRef,
    bridge: &dyn SharedRegionBridge,
) -> ConversionResult<SharedFileRegion> {
    bridge
        .memory_to_region(legacy)
        .ok_or(ConversionError::BadValue)
}

/// An absent region converts to an absent handle.
pub fn aidl2legacy_nullable_shared_file_region_imemory(
    aidl: Option<&SharedFileRegion>,
    bridge: &dyn SharedRegionBridge,
) -> ConversionResult<Option<MemoryRef>> {
    bridge
        .nullable_region_to_memory(aidl)
        .ok_or(ConversionError::BadValue)
}

/// An absent handle converts to an absent region.
pub fn legacy2aidl_nullable_imemory_shared_file_region(
    legacy: Option<&MemoryRef>,
    bridge: &dyn SharedRegionBridge,
) -> ConversionResult<Option<SharedFileRegion>> {
    bridge
        .nullable_memory_to_region(legacy)
        .ok_or(ConversionError::BadValue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shmem_compat::Memory;
    use std::sync::Arc;

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

    /// Maps non-negative descriptors only, and never shares memory back.
    struct OneWay;

    impl SharedRegionBridge for OneWay {
        fn region_to_memory(&self, region: &SharedFileRegion) -> Option<MemoryRef> {
            if region.fd < 0 {
                return None;
            }
            Some(Arc::new(Window {
                offset: u64::try_from(region.offset).ok()?,
                size: usize::try_from(region.size).ok()?,
            }))
        }

        fn memory_to_region(&self, _memory: &MemoryRef) -> Option<SharedFileRegion> {
            None
        }
    }

    fn region(fd: i32) -> SharedFileRegion {
        SharedFileRegion {
            fd,
            offset: 4096,
            size: 8192,
            writeable: true,
        }
    }

    #[test]
    fn bridge_failure_is_bad_value() {
        assert_eq!(
            aidl2legacy_shared_file_region_imemory(&region(-1), &OneWay).err(),
            Some(ConversionError::BadValue)
        );
        let memory = aidl2legacy_shared_file_region_imemory(&region(5), &OneWay).unwrap();
        assert_eq!(memory.offset(), 4096);
        assert_eq!(memory.size(), 8192);
        assert_eq!(
            legacy2aidl_imemory_shared_file_region(&memory, &OneWay),
            Err(ConversionError::BadValue)
        );
    }

    #[test]
    fn absent_values_pass_through() {
        assert!(matches!(
            aidl2legacy_nullable_shared_file_region_imemory(None, &OneWay),
            Ok(None)
        ));
        assert_eq!(
            legacy2aidl_nullable_imemory_shared_file_region(None, &OneWay),
            Ok(None)
        );
        assert!(matches!(
            aidl2legacy_nullable_shared_file_region_imemory(Some(&region(3)), &OneWay),
            Ok(Some(_))
        ));
        assert!(
            aidl2legacy_nullable_shared_file_region_imemory(Some(&region(-3)), &OneWay).is_err()
        );
    }
}
