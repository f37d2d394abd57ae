//! Property tests for applying manifests to a real directory.

use std::fs;

use proptest::prelude::*;

use mlscaffold::application::apply_manifest;
use mlscaffold::domain::entities::Outcome;
use mlscaffold::domain::services::{ManifestBuilder, PathResolver};
use mlscaffold::domain::value_objects::ProjectName;
use mlscaffold::infrastructure::LocalFs;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 16,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: applying the same manifests twice creates nothing new and
    /// leaves file contents alone.
    #[test]
    fn property_apply_is_idempotent(
        name in "[A-Za-z0-9_]{1,16}",
        user_text in "[a-z ]{1,32}",
    ) {
        let dir = tempfile::tempdir().unwrap();
        let project = ProjectName::parse(&name).unwrap();
        let resolver = PathResolver::new(dir.path(), &project);
        fs::create_dir(resolver.root()).unwrap();
        let manifests = ManifestBuilder::new(project).build_all();

        for manifest in &manifests {
            let results = apply_manifest(&LocalFs::new(), &resolver, manifest).unwrap();
            prop_assert!(results.iter().all(|r| r.outcome == Outcome::Created));
        }

        let main_py = resolver.root().join("main.py");
        fs::write(&main_py, &user_text).unwrap();

        for manifest in &manifests {
            let results = apply_manifest(&LocalFs::new(), &resolver, manifest).unwrap();
            prop_assert!(results.iter().all(|r| r.outcome == Outcome::AlreadyExists));
        }
        prop_assert_eq!(fs::read_to_string(&main_py).unwrap(), user_text);
    }
}
