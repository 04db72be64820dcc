use crate::name;
use proptest::prelude::*;

proptest! {
    #[test]
    fn override_is_used_verbatim(
        ident in "[_a-zA-Z][a-zA-Z0-9_]{0,12}",
        name in "[A-Za-z][a-zA-Z0-9_]{0,12}",
    ) {
        prop_assert_eq!(name::resolve(&ident, Some(&name)), name);
    }

    #[test]
    fn derived_name_sheds_leading_underscores(ident in "_{0,4}[a-z][a-zA-Z0-9_]{0,12}") {
        let resolved = name::resolve(&ident, None);
        prop_assert!(!resolved.starts_with('_'));
    }

    #[test]
    fn derived_name_starts_upper_cased(ident in "_{0,4}[a-z][a-zA-Z0-9_]{0,12}") {
        let resolved = name::resolve(&ident, None);
        let first = resolved.chars().next().expect("derivation accepted a non-empty stem");
        prop_assert!(first.is_uppercase());
    }

    #[test]
    fn remainder_survives_byte_for_byte(ident in "[a-z][a-zA-Z0-9_]{0,12}") {
        let resolved = name::resolve(&ident, None);
        prop_assert_eq!(&resolved[1..], &ident[1..]);
    }

    #[test]
    fn derivation_is_idempotent(ident in "_{0,4}[a-zA-Z][a-zA-Z0-9_]{0,12}") {
        let resolved = name::resolve(&ident, None);
        let again = name::resolve(&resolved, None);
        prop_assert_eq!(again, resolved);
    }

    #[test]
    fn underscores_alone_derive_nothing(ident in "_{1,6}") {
        prop_assert_eq!(name::resolve(&ident, None), "");
    }
}
