use std::collections::HashSet;

use precancel::preprocess::preprocess_str;
use proptest::prelude::*;

/// Builds a PrusaSlicer-style file from generated object blocks.
fn build_prusa_file(objects: &[(String, Vec<(u32, u32)>)]) -> String {
    let mut file = String::from("; generated by PrusaSlicer 2.5.0\nG28\n");
    for (name, points) in objects {
        file.push_str(&format!("; printing object {name}\n"));
        for (x, y) in points {
            file.push_str(&format!("G1 X{x} Y{y} E0.1\n"));
        }
        file.push_str(&format!("; stop printing object {name}\n"));
    }
    file.push_str("M107\n");
    file
}

fn arb_objects() -> impl Strategy<Value = Vec<(String, Vec<(u32, u32)>)>> {
    prop::collection::vec(
        (
            "[a-z]{1,8}",
            prop::collection::vec((0u32..250, 0u32..250), 1..10),
        ),
        1..5,
    )
}

proptest! {
    #[test]
    fn header_count_matches_distinct_objects(objects in arb_objects()) {
        let input = build_prusa_file(&objects);
        let (out, report) = preprocess_str(&input).expect("preprocess failed");

        let distinct: HashSet<&str> = objects.iter().map(|(name, _)| name.as_str()).collect();
        prop_assert_eq!(report.object_count, distinct.len());
        prop_assert!(
            out.contains(&format!("; {} known objects", distinct.len())),
            "output missing known objects header for {} objects",
            distinct.len()
        );
        prop_assert_eq!(out.matches("DEFINE_OBJECT").count(), distinct.len());
    }

    #[test]
    fn start_and_end_markers_match_the_input_blocks(objects in arb_objects()) {
        let input = build_prusa_file(&objects);
        let (out, _) = preprocess_str(&input).expect("preprocess failed");

        let blocks = objects.len();
        prop_assert_eq!(out.matches("START_CURRENT_OBJECT NAME=").count(), blocks);
        prop_assert_eq!(out.matches("END_CURRENT_OBJECT NAME=").count(), blocks);
    }

    #[test]
    fn reprocessing_annotated_output_is_a_byte_identical_no_op(objects in arb_objects()) {
        let input = build_prusa_file(&objects);
        let (first, _) = preprocess_str(&input).expect("first run");
        let (second, report) = preprocess_str(&first).expect("second run");

        prop_assert!(report.already_processed);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn original_lines_are_preserved_in_order(objects in arb_objects()) {
        let input = build_prusa_file(&objects);
        let (out, _) = preprocess_str(&input).expect("preprocess failed");

        // Dropping the injected lines yields exactly the input again,
        // except for the header's two leading blank lines.
        let reconstructed: Vec<&str> = out
            .lines()
            .filter(|l| {
                !l.starts_with("DEFINE_OBJECT")
                    && !l.starts_with("START_CURRENT_OBJECT")
                    && !l.starts_with("END_CURRENT_OBJECT")
                    && !l.starts_with("; Pre-Processed")
                    && !l.ends_with("known objects")
                    && !l.is_empty()
            })
            .collect();
        let original: Vec<&str> = input.lines().filter(|l| !l.is_empty()).collect();
        prop_assert_eq!(reconstructed, original);
    }
}
