//! Capacity and membership properties of the bounded header collections

use mrcp_types::{
    ActiveRequestIdList, DynamicPayload, FixedVec, GenericHeaderId, GenericHeaderRecord,
    PayloadError, MAX_ACTIVE_REQUEST_ID_COUNT,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_append_never_exceeds_capacity(ids in prop::collection::vec(any::<u32>(), 0..12)) {
        let mut list = ActiveRequestIdList::new();
        for (n, id) in ids.iter().enumerate() {
            let result = list.append(*id);
            if n < MAX_ACTIVE_REQUEST_ID_COUNT {
                prop_assert!(result.is_ok());
            } else {
                prop_assert!(
                    matches!(result, Err(PayloadError::CapacityExceeded { .. })),
                    "append past capacity must fail"
                );
            }
        }

        let kept = ids.len().min(MAX_ACTIVE_REQUEST_ID_COUNT);
        prop_assert_eq!(list.as_slice(), &ids[..kept]);
    }

    #[test]
    fn test_find_matches_slice_membership(
        ids in prop::collection::vec(0u32..20, 0..=5),
        candidate in 0u32..20,
    ) {
        let list = ActiveRequestIdList::from_slice(&ids).unwrap();
        prop_assert_eq!(list.find(candidate), ids.contains(&candidate));
    }

    #[test]
    fn test_from_slice_bounds(values in prop::collection::vec(any::<u16>(), 0..8)) {
        let result = FixedVec::<u16, 4>::from_slice(&values);
        if values.len() <= 4 {
            let vec = result.unwrap();
            prop_assert_eq!(vec.as_slice(), &values[..]);
        } else {
            prop_assert!(result.is_err());
        }
    }

    #[test]
    fn test_presence_tracks_setters(mask in any::<u16>()) {
        let mut record = GenericHeaderRecord::new();
        for id in GenericHeaderId::ALL {
            if mask & (1 << id.index()) != 0 {
                match id {
                    GenericHeaderId::ActiveRequestIdList => {
                        record.active_request_ids_mut();
                    }
                    GenericHeaderId::VendorSpecificParams => {
                        record.append_vendor_param("com.example.k", "v");
                    }
                    GenericHeaderId::ContentLength | GenericHeaderId::FetchTimeout => {
                        record.set_size(id, 0).unwrap();
                    }
                    _ => record.set_text(id, "").unwrap(),
                }
            }
        }

        prop_assert_eq!(record.presence().bits(), mask);
        prop_assert_eq!(record.present_count(), mask.count_ones() as usize);
    }
}
