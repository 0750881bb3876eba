//! Property tests for content root detection.

use std::fs;

use proptest::prelude::*;
use tempfile::TempDir;

use plasma_compose::{resolve_content_root, LayerName, Layout};

fn dir_name() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(LayerName::ALL.iter().map(|l| l.as_str().to_string()).collect::<Vec<_>>()),
        "[a-z]{1,8}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the content root is always the package root or its `src`,
    /// and `src` is chosen exactly when it holds a recognised layer directory.
    #[test]
    fn property_content_root_is_root_or_src(
        has_src in any::<bool>(),
        src_dirs in prop::collection::vec(dir_name(), 0..4),
        src_files in prop::collection::vec(dir_name(), 0..3),
        root_dirs in prop::collection::vec(dir_name(), 0..4),
    ) {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("pkg");
        fs::create_dir_all(&root).unwrap();

        for name in &root_dirs {
            if name != "src" {
                fs::create_dir_all(root.join(name)).unwrap();
            }
        }

        let mut expect_modern = false;
        if has_src {
            let src = root.join("src");
            fs::create_dir_all(&src).unwrap();
            for name in &src_dirs {
                fs::create_dir_all(src.join(name)).unwrap();
                expect_modern |= LayerName::is_layer(name);
            }
            for name in &src_files {
                if !src.join(name).exists() {
                    fs::write(src.join(name), b"file").unwrap();
                }
            }
        }

        let resolved = resolve_content_root(&root);
        let src = root.join("src");

        if expect_modern {
            prop_assert_eq!(resolved.layout(), Layout::Modern);
            prop_assert_eq!(resolved.path(), src.as_path());
        } else {
            prop_assert_eq!(resolved.layout(), Layout::Legacy);
            prop_assert_eq!(resolved.path(), root.as_path());
        }
    }
}
