//! Property tests for recorder manifest parsing.

use proptest::prelude::*;

use texwatch::application::parse_manifest;

fn manifest_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,8}(/[a-z]{1,8}){0,2}\\.(tex|bib|sty|cls)".prop_map(|p| format!("INPUT {p}")),
        "/[a-z]{1,8}(/[a-z]{1,8}){0,2}\\.(tex|sty)".prop_map(|p| format!("INPUT {p}")),
        "[a-z]{1,8}\\.(aux|log|pdf)".prop_map(|p| format!("OUTPUT {p}")),
        "/[a-z]{1,12}".prop_map(|p| format!("PWD {p}")),
        "[a-z0-9 ][A-Za-z0-9 ]{0,29}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: absolute paths never reach the watched set.
    #[test]
    fn property_parsed_paths_are_relative(
        lines in proptest::collection::vec(manifest_line(), 0..24),
    ) {
        let deps = parse_manifest(&lines.join("\n"));
        for path in deps.iter() {
            prop_assert!(!path.is_absolute(), "absolute path kept: {}", path.display());
        }
    }

    /// PROPERTY: every watched path comes from a relative INPUT record.
    #[test]
    fn property_only_input_records_are_kept(
        lines in proptest::collection::vec(manifest_line(), 0..24),
    ) {
        let deps = parse_manifest(&lines.join("\n"));
        let expected: std::collections::BTreeSet<String> = lines
            .iter()
            .filter_map(|l| l.strip_prefix("INPUT "))
            .filter(|p| !p.starts_with('/'))
            .map(str::to_string)
            .collect();

        let actual: std::collections::BTreeSet<String> =
            deps.iter().map(|p| p.display().to_string()).collect();
        prop_assert_eq!(actual, expected);
    }

    /// PROPERTY: arbitrary text never panics the parser.
    #[test]
    fn property_parse_never_panics(content in ".{0,400}") {
        let _ = parse_manifest(&content);
    }
}
