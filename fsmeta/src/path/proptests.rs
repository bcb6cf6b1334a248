//! Property-based tests for path handling.

use super::normalize::{clean, expand_tilde_with};
use proptest::prelude::*;
use std::path::{Component, PathBuf};

// Strategy for generating path-like strings
fn path_component_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-z0-9_-]{1,12}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
        1 => Just(String::new()),
    ]
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(path_component_strategy(), 0..10).prop_map(|parts| parts.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Cleaning is idempotent: clean(clean(p)) == clean(p)
    #[test]
    fn clean_idempotent(path in relative_path_strategy()) {
        let once = clean(std::path::Path::new(&path));
        let twice = clean(&once);
        prop_assert_eq!(once, twice);
    }

    // Cleaned paths never contain "." components and only lead with ".."
    #[test]
    fn cleaned_paths_have_no_inner_dots(path in relative_path_strategy()) {
        let cleaned = clean(std::path::Path::new(&path));
        let components: Vec<_> = cleaned.components().collect();
        if components != [Component::CurDir] {
            prop_assert!(!components.contains(&Component::CurDir));
        }
        let first_normal = components
            .iter()
            .position(|c| matches!(c, Component::Normal(_)))
            .unwrap_or(components.len());
        prop_assert!(!components[first_normal..].contains(&Component::ParentDir));
    }

    // Absolute paths stay absolute after cleaning
    #[test]
    fn clean_preserves_absoluteness(path in relative_path_strategy()) {
        let absolute = PathBuf::from("/").join(&path);
        prop_assert!(clean(&absolute).has_root());
    }

    // "~/rest" expands to home joined with rest
    #[test]
    fn tilde_expansion_joins_home(rest in "[a-z0-9_-]{1,12}(/[a-z0-9_-]{1,12}){0,4}") {
        let home = PathBuf::from("/home/prop");
        let expanded = expand_tilde_with(
            std::path::Path::new(&format!("~/{rest}")),
            || Some(home.clone()),
        ).unwrap();
        prop_assert_eq!(expanded, home.join(&rest));
    }
}
