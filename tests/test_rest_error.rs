//! Property tests for REST error payloads
use proptest::prelude::*;

use restkit::{RestError, RestkitError};

proptest! {
    #[test]
    fn prop_wire_round_trip(code in any::<u16>(), message in ".*") {
        let original = RestError::new(code, message);
        let decoded = RestError::from_bytes(&original.to_json().unwrap()).unwrap();
        prop_assert_eq!(decoded, original);
    }

    #[test]
    fn prop_arbitrary_bytes_never_panic(payload in proptest::collection::vec(any::<u8>(), 0..256)) {
        match RestError::from_bytes(&payload) {
            Ok(_) | Err(RestkitError::Decode(_)) => {}
            Err(other) => prop_assert!(false, "unexpected error kind: {:?}", other),
        }
    }

    #[test]
    fn prop_display_prefixes_code(code in 100u16..600, message in "[a-z ]{0,40}") {
        let err = RestError::new(code, message.clone());
        prop_assert_eq!(err.to_string(), format!("{}: {}", code, message));
    }
}
