//! Property tests for last-source-wins merging.

use std::fs;

use proptest::prelude::*;
use tempfile::TempDir;

use plasma_compose::{merge, LayerName, MergeSource};

fn layer() -> impl Strategy<Value = LayerName> {
    prop::sample::select(LayerName::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: for any shared path, the destination holds the content of the
    /// last source providing it, whatever the order.
    #[test]
    fn property_last_source_wins(
        layer in layer(),
        file in "[a-z]{1,8}\\.txt",
        contents in prop::collection::vec("[a-zA-Z0-9]{0,16}", 1..5),
        reversed in any::<bool>(),
    ) {
        let temp = TempDir::new().unwrap();
        let mut sources = Vec::new();
        for (idx, content) in contents.iter().enumerate() {
            let root = temp.path().join(format!("pkg{idx}"));
            let dir = root.join(layer.as_str());
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join(&file), content).unwrap();
            sources.push(MergeSource::new(format!("pkg{idx}"), root));
        }

        let mut expected = contents.last().cloned().unwrap_or_default();
        if reversed {
            sources.reverse();
            expected = contents[0].clone();
        }

        let dest = temp.path().join("out");
        let report = merge(&sources, &dest).unwrap();

        let written = fs::read_to_string(dest.join(layer.as_str()).join(&file)).unwrap();
        prop_assert_eq!(written, expected);
        prop_assert_eq!(report.file_count(), 1);
        prop_assert_eq!(report.overrides.len(), contents.len() - 1);
    }

    /// PROPERTY: directories outside the layer catalog never reach the destination.
    #[test]
    fn property_unrecognised_dirs_are_ignored(
        extra in "[a-z]{1,10}",
        layer in layer(),
    ) {
        prop_assume!(!LayerName::is_layer(&extra));

        let temp = TempDir::new().unwrap();
        let root = temp.path().join("pkg");
        fs::create_dir_all(root.join(&extra)).unwrap();
        fs::write(root.join(&extra).join("stray.txt"), "stray").unwrap();
        fs::create_dir_all(root.join(layer.as_str())).unwrap();
        fs::write(root.join(layer.as_str()).join("kept.txt"), "kept").unwrap();

        let dest = temp.path().join("out");
        merge(&[MergeSource::new("pkg", root)], &dest).unwrap();

        prop_assert!(!dest.join(&extra).exists());
        prop_assert!(dest.join(layer.as_str()).join("kept.txt").is_file());
    }
}
