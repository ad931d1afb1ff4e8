//! Property tests for rewriting a real file on disk.

use proptest::prelude::*;

use fix_includes::{replace_header, target_path, HeaderRewriter, LocalFs};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the file on disk ends up exactly as the pure splice says.
    #[test]
    fn property_disk_matches_splice(input in "(?s).{0,256}") {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("src")).unwrap();
        let path = target_path(dir.path());
        std::fs::write(&path, &input).unwrap();

        let report = HeaderRewriter::new(LocalFs::new())
            .rewrite(&path)
            .unwrap();

        let on_disk = std::fs::read_to_string(&path).unwrap();
        prop_assert_eq!(&on_disk, &replace_header(&input));
        prop_assert_eq!(report.lines_replaced + report.lines_kept, report.lines_in);
    }
}
