//! Property tests for project names and path resolution.

use std::path::Path;

use proptest::prelude::*;

use mlscaffold::domain::services::{resolve, PathResolver};
use mlscaffold::domain::value_objects::{ProjectName, SafePath};

fn valid_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_]{1,32}").unwrap()
}

fn relative_template() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[A-Za-z0-9_-][A-Za-z0-9._-]{0,11}").unwrap();
    proptest::collection::vec(segment, 1..=4).prop_map(|segments| segments.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every valid name parses and round-trips through Display.
    #[test]
    fn property_valid_names_parse(name in valid_name()) {
        let parsed = ProjectName::parse(&name).unwrap();
        prop_assert_eq!(parsed.as_str(), name.as_str());
    }

    /// PROPERTY: any name containing a character outside [A-Za-z0-9_] is rejected.
    #[test]
    fn property_names_with_other_chars_rejected(
        prefix in valid_name(),
        bad in "[^A-Za-z0-9_]",
        suffix in "[A-Za-z0-9_]{0,8}",
    ) {
        let name = format!("{prefix}{bad}{suffix}");
        prop_assert!(ProjectName::parse(&name).is_err());
    }

    /// PROPERTY: parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,64}") {
        let _ = ProjectName::parse(&s);
        let _ = SafePath::new(&s);
    }

    /// PROPERTY: resolved paths always stay under the project root.
    #[test]
    fn property_resolved_paths_stay_under_root(
        name in valid_name(),
        template in relative_template(),
    ) {
        let base = Path::new("/work");
        let parsed = ProjectName::parse(&name).unwrap();
        let resolver = PathResolver::new(base, &parsed);

        let path = resolver.resolve(&template).unwrap();

        prop_assert!(path.starts_with(resolver.root()));
        prop_assert!(path != resolver.root());
    }

    /// PROPERTY: a `..` segment anywhere is rejected before touching the root.
    #[test]
    fn property_traversal_always_rejected(
        name in valid_name(),
        before in relative_template(),
        after in relative_template(),
    ) {
        let template = format!("{before}/../{after}");
        prop_assert!(resolve(Path::new("/work"), &name, &template).is_err());
    }
}
