//! Property tests over generated keys and values.

use crate::common::TestStore;
use proptest::prelude::*;

fn key_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z0-9_-]{1,8}", 1..4).prop_map(|segments| segments.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn roundtrip(key in key_strategy(), value in "\\PC{0,64}") {
        let t = TestStore::new();
        t.store.put(&key, &value).unwrap();
        prop_assert_eq!(t.store.get(&key).unwrap(), value);
    }

    #[test]
    fn leading_separators_are_ignored(key in key_strategy(), slashes in 1usize..4) {
        let t = TestStore::new();
        let prefixed = format!("{}{}", "/".repeat(slashes), key);
        t.store.put(&prefixed, "v").unwrap();
        prop_assert_eq!(t.store.get(&key).unwrap(), "v");
    }

    #[test]
    fn last_write_wins(key in key_strategy(), v1 in "\\PC{0,32}", v2 in "\\PC{0,32}") {
        let t = TestStore::new();
        t.store.put(&key, &v1).unwrap();
        t.store.put(&key, &v2).unwrap();
        prop_assert_eq!(t.store.get(&key).unwrap(), v2);
    }
}
