//! Property tests for manifest construction.

use std::collections::HashSet;

use proptest::prelude::*;

use mlscaffold::domain::entities::EntryKind;
use mlscaffold::domain::services::ManifestBuilder;
use mlscaffold::domain::value_objects::ProjectName;

fn builder() -> impl Strategy<Value = ManifestBuilder> {
    (
        "[A-Za-z0-9_]{1,24}",
        proptest::string::string_regex("\\.?[a-z]{1,10}").unwrap(),
    )
        .prop_map(|(name, env_dir)| {
            ManifestBuilder::new(ProjectName::parse(&name).unwrap()).with_env_dir(env_dir)
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: within a phase, every parent directory precedes its children.
    #[test]
    fn property_manifests_are_parent_ordered(builder in builder()) {
        for manifest in builder.build_all() {
            prop_assert!(manifest.is_parent_ordered(), "{:?}", manifest.phase());
        }
    }

    /// PROPERTY: no path appears twice across the whole run.
    #[test]
    fn property_paths_are_unique(builder in builder()) {
        let mut seen = HashSet::new();
        for manifest in builder.build_all() {
            for entry in manifest.entries() {
                prop_assert!(seen.insert(entry.relative_path().to_string()));
            }
        }
    }

    /// PROPERTY: every nested entry's parent is created in the same or an earlier phase.
    #[test]
    fn property_parents_exist_before_children(builder in builder()) {
        let mut dirs: HashSet<String> = HashSet::new();
        for manifest in builder.build_all() {
            for entry in manifest.entries() {
                let path = entry.relative_path();
                if let Some((parent, _)) = path.rsplit_once('/') {
                    prop_assert!(dirs.contains(parent), "{path} before {parent}");
                }
                if entry.kind() == EntryKind::Directory {
                    dirs.insert(path.to_string());
                }
            }
        }
    }
}
