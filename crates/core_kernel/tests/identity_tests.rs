//! Unit tests for the identity module

use core_kernel::{ExpenseId, IdentityAllocator, IdentityError, PersonId, RawId};

mod allocation {
    use super::*;

    #[test]
    fn test_fresh_allocator_counts_up_from_zero() {
        let mut ids = IdentityAllocator::new();
        assert_eq!(ids.allocate(), 0);
        assert_eq!(ids.allocate(), 1);
        assert_eq!(ids.live_count(), 2);
    }

    #[test]
    fn test_gap_left_by_release_is_filled_first() {
        let mut ids = IdentityAllocator::new();
        for _ in 0..5 {
            ids.allocate();
        }
        ids.release(2).unwrap();

        assert_eq!(ids.allocate(), 2);
        assert_eq!(ids.allocate(), 5);
    }

    #[test]
    fn test_register_then_allocate_around_it() {
        let mut ids = IdentityAllocator::new();
        ids.register(1).unwrap();

        assert_eq!(ids.allocate(), 0);
        assert_eq!(ids.allocate(), 2);
    }

    #[test]
    fn test_is_registered_tracks_lifecycle() {
        let mut ids = IdentityAllocator::new();
        let id = ids.allocate();
        assert!(ids.is_registered(id));

        ids.release(id).unwrap();
        assert!(!ids.is_registered(id));
    }
}

mod misuse {
    use super::*;

    #[test]
    fn test_double_registration() {
        let mut ids = IdentityAllocator::new();
        let id = ids.allocate();
        assert_eq!(ids.register(id), Err(IdentityError::AlreadyRegistered(id)));
    }

    #[test]
    fn test_release_of_unknown_id() {
        let mut ids = IdentityAllocator::new();
        assert_eq!(ids.release(99), Err(IdentityError::NotRegistered(99)));
    }

    #[test]
    fn test_failed_register_does_not_corrupt_state() {
        let mut ids = IdentityAllocator::new();
        let id = ids.allocate();
        let _ = ids.register(id);

        assert!(ids.is_registered(id));
        assert_eq!(ids.live_count(), 1);
        assert_eq!(ids.allocate(), id + 1);
    }
}

mod typed_ids {
    use super::*;

    #[test]
    fn test_person_and_expense_ids_never_collide() {
        let mut ids = IdentityAllocator::new();
        let person = ids.next_person_id();
        let expense = ids.next_expense_id();
        assert_ne!(person.raw(), expense.raw());
    }

    #[test]
    fn test_display_is_the_raw_number() {
        assert_eq!(PersonId::from_raw(7).to_string(), "7");
        assert_eq!(ExpenseId::from_raw(12).to_string(), "12");
    }

    #[test]
    fn test_parse_round_trip() {
        let id: PersonId = "19".parse().unwrap();
        assert_eq!(id, PersonId::from_raw(19));
        assert!("not-a-number".parse::<PersonId>().is_err());
    }

    #[test]
    fn test_raw_conversions() {
        let id = ExpenseId::from(3 as RawId);
        let raw: RawId = id.into();
        assert_eq!(raw, 3);
    }

    #[test]
    fn test_ids_order_by_raw_value() {
        let mut ids = vec![PersonId::from_raw(5), PersonId::from_raw(1), PersonId::from_raw(3)];
        ids.sort();
        assert_eq!(ids, vec![PersonId::from_raw(1), PersonId::from_raw(3), PersonId::from_raw(5)]);
    }

    #[test]
    fn test_serde_is_transparent() {
        let json = serde_json::to_string(&PersonId::from_raw(4)).unwrap();
        assert_eq!(json, "4");
        let back: PersonId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PersonId::from_raw(4));
    }
}
