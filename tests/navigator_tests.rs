mod common;

use common::{refs, tagged, RecordBuilder};
use rstest::rstest;
use runstats::config::AnalysisParams;
use runstats::error::RunStatsError;
use runstats::navigator::{build_levels, Navigator, OTHER_LABEL};
use runstats::record::Medal;
use runstats::weighting::{self, WeightMode};

fn labels(nav: &Navigator<'_>) -> Vec<String> {
    nav.slices().into_iter().map(|s| s.label).collect()
}

#[test]
fn test_worked_example_chain() {
    let records = tagged(&["Race,Tech", "Race", "Ice"]);
    let levels = build_levels(&refs(&records), WeightMode::Frequency, 0.3, 10);

    assert_eq!(levels.len(), 2);

    assert_eq!(levels[0].visible.len(), 1);
    assert_eq!(levels[0].visible["Race"], 2);
    assert_eq!(levels[0].other_total, 2);
    assert_eq!(levels[0].source.len(), 3);

    // The Race+Tech record is excluded because its string contains "Race".
    assert_eq!(levels[1].source.len(), 1);
    assert_eq!(levels[1].source[0].styles, "Ice");
    assert_eq!(levels[1].visible["Ice"], 1);
    assert_eq!(levels[1].other_total, 0);
}

#[test]
fn test_substring_containment_excludes_partial_label_matches() {
    // "Tech" is visible; "SpeedTech" contains it and is excluded too.
    let records = tagged(&["Tech", "Tech", "Tech", "SpeedTech", "Ice"]);
    let levels = build_levels(&refs(&records), WeightMode::Frequency, 0.3, 10);

    assert_eq!(levels.len(), 2);
    assert_eq!(levels[1].source.len(), 1);
    assert_eq!(levels[1].source[0].styles, "Ice");
}

#[test]
fn test_level_sums_match_raw_weights() {
    let records = tagged(&[
        "Race,Tech",
        "Race",
        "Ice,Dirt",
        "Dirt",
        "Grass",
        "FullSpeed,Race",
        "Plastic",
        "Water,Ice",
    ]);
    let levels = build_levels(&refs(&records), WeightMode::Frequency, 0.15, 10);

    for level in &levels {
        let raw = weighting::compute(level.source.iter().copied(), WeightMode::Frequency);
        assert_eq!(level.total(), weighting::total(&raw));
    }
}

#[test]
fn test_sources_shrink_along_the_chain() {
    let records = tagged(&["A", "A", "A", "A", "B", "B", "C", "D", "E", "F"]);
    let levels = build_levels(&refs(&records), WeightMode::Frequency, 0.15, 10);

    assert!(levels.len() > 1);
    for pair in levels.windows(2) {
        assert!(pair[1].source.len() < pair[0].source.len());
        for r in &pair[1].source {
            assert!(pair[0].source.iter().any(|p| p.id == r.id));
        }
    }
}

#[test]
fn test_max_depth_caps_chain() {
    // Halving shares: every level shows one tag and pushes the rest to Other.
    let mut styles = Vec::new();
    for (i, tag) in ["A", "B", "C", "D", "E", "F"].iter().enumerate() {
        for _ in 0..(1 << (6 - i)) {
            styles.push(*tag);
        }
    }
    styles.push("G");
    let records = tagged(&styles);

    let full = build_levels(&refs(&records), WeightMode::Frequency, 0.45, 10);
    assert!(full.len() > 3);

    let capped = build_levels(&refs(&records), WeightMode::Frequency, 0.45, 3);
    assert_eq!(capped.len(), 3);
    assert!(capped[2].has_other());
}

#[test]
fn test_empty_record_set_is_single_terminal_level() {
    let nav = Navigator::with_defaults(Vec::new());

    assert_eq!(nav.depth(), 1);
    assert!(nav.current_level().visible.is_empty());
    assert_eq!(nav.current_level().other_total, 0);
    assert!(nav.slices().is_empty());
}

#[test]
fn test_with_defaults_matches_default_params() {
    let records = tagged(&["Race", "Race,Tech", "Ice", "Dirt", "Race"]);
    let defaults = Navigator::with_defaults(refs(&records));
    let from_params = Navigator::from_params(refs(&records), &AnalysisParams::default()).unwrap();

    assert_eq!(defaults.mode(), from_params.mode());
    assert_eq!(defaults.default_cutoff(), from_params.default_cutoff());
    assert_eq!(defaults.max_depth(), from_params.max_depth());
    assert_eq!(defaults.levels(), from_params.levels());
}

#[test]
fn test_medal_filter_residual_without_medals_ends_chain() {
    let records = vec![
        RecordBuilder::new(1, "Race").medal(Medal::At).build(),
        RecordBuilder::new(2, "Race").medal(Medal::At).build(),
        RecordBuilder::new(3, "Race").medal(Medal::At).build(),
        RecordBuilder::new(4, "Ice").medal(Medal::At).build(),
        RecordBuilder::new(5, "Dirt").medal(Medal::Gold).build(),
    ];
    let levels = build_levels(
        &refs(&records),
        WeightMode::MedalFiltered(Medal::At),
        0.3,
        10,
    );

    assert_eq!(levels.len(), 2);
    assert_eq!(levels[0].visible["Race"], 3);
    assert_eq!(levels[0].other_total, 1);
    // Residual keeps Ice (at) and Dirt (gold); only Ice is weighted.
    assert_eq!(levels[1].source.len(), 2);
    assert_eq!(levels[1].visible.len(), 1);
    assert_eq!(levels[1].other_total, 0);
}

#[test]
fn test_all_tags_below_cutoff_stops_after_first_level() {
    let records = tagged(&["A", "B", "C", "D"]);
    let levels = build_levels(&refs(&records), WeightMode::Frequency, 0.5, 10);

    assert_eq!(levels.len(), 1);
    assert!(levels[0].visible.is_empty());
    assert_eq!(levels[0].other_total, 4);
}

#[test]
fn test_drill_down_walks_chain_and_stops() {
    let records = tagged(&["Race,Tech", "Race", "Ice"]);
    let mut nav = Navigator::new(refs(&records), WeightMode::Frequency, 0.3, 10).unwrap();

    assert_eq!(nav.current_index(), 0);
    assert!(nav.can_drill());
    assert!(nav.drill_down());
    assert_eq!(nav.current_index(), 1);

    assert!(!nav.drill_down());
    assert_eq!(nav.current_index(), 1);
}

#[rstest]
#[case(0, 0)]
#[case(1, 1)]
#[case(5, 1)]
#[case(usize::MAX, 1)]
fn test_jump_to_clamps(#[case] target: usize, #[case] expected: usize) {
    let records = tagged(&["Race,Tech", "Race", "Ice"]);
    let mut nav = Navigator::new(refs(&records), WeightMode::Frequency, 0.3, 10).unwrap();

    assert_eq!(nav.jump_to(target), expected);
    assert_eq!(nav.current_index(), expected);
}

#[test]
fn test_configuration_changes_reset_index() {
    let records = vec![
        RecordBuilder::new(1, "Race,Tech").skips(1).build(),
        RecordBuilder::new(2, "Race").skips(1).build(),
        RecordBuilder::new(3, "Ice").skips(4).build(),
    ];
    let mut nav = Navigator::new(refs(&records), WeightMode::Frequency, 0.3, 10).unwrap();

    nav.drill_down();
    nav.set_mode(WeightMode::SkipWeighted).unwrap();
    assert_eq!(nav.current_index(), 0);
    assert_eq!(nav.mode(), WeightMode::SkipWeighted);
    assert_eq!(nav.grand_totals()["Ice"], 4);

    nav.set_mode(WeightMode::Frequency).unwrap();
    nav.drill_down();
    nav.set_cutoff(0.1).unwrap();
    assert_eq!(nav.current_index(), 0);
}

#[test]
fn test_invalid_cutoff_preserves_state() {
    let records = tagged(&["Race,Tech", "Race", "Ice"]);
    let mut nav = Navigator::new(refs(&records), WeightMode::Frequency, 0.3, 10).unwrap();
    nav.drill_down();
    let before = nav.levels().to_vec();

    for bad in [-0.1, 1.5, f64::NAN] {
        let err = nav.set_cutoff(bad).unwrap_err();
        assert!(matches!(err, RunStatsError::InvalidCutoff(_)));
    }
    assert_eq!(nav.current_index(), 1);
    assert_eq!(nav.cutoff_ratio(), 0.3);
    assert_eq!(nav.levels(), &before[..]);
}

#[test]
fn test_invalid_mode_preserves_state() {
    let records = tagged(&["Race,Tech", "Race", "Ice"]);
    let mut nav = Navigator::new(refs(&records), WeightMode::Frequency, 0.3, 10).unwrap();
    nav.drill_down();

    let err = nav.set_mode(WeightMode::MedalFiltered(Medal::Bronze)).unwrap_err();
    assert!(matches!(err, RunStatsError::InvalidMode(_)));
    assert!(nav.set_mode_label("Fastest").is_err());

    assert_eq!(nav.current_index(), 1);
    assert_eq!(nav.mode(), WeightMode::Frequency);
}

#[test]
fn test_construction_validates_inputs() {
    let records = tagged(&["Race"]);
    assert!(matches!(
        Navigator::new(refs(&records), WeightMode::Frequency, 2.0, 10),
        Err(RunStatsError::InvalidCutoff(_))
    ));
    assert!(matches!(
        Navigator::new(refs(&records), WeightMode::Frequency, 0.1, 0),
        Err(RunStatsError::InvalidDepth(0))
    ));

    let params = AnalysisParams {
        mode: "Best [bronze]".to_string(),
        ..Default::default()
    };
    assert!(matches!(
        Navigator::from_params(refs(&records), &params),
        Err(RunStatsError::InvalidMode(_))
    ));
}

#[test]
fn test_reset_restores_configured_cutoff() {
    let records = tagged(&["Race,Tech", "Race", "Ice"]);
    let mut nav = Navigator::new(refs(&records), WeightMode::Frequency, 0.3, 10).unwrap();

    nav.set_cutoff(0.0).unwrap();
    assert_eq!(nav.depth(), 1);

    nav.reset();
    assert_eq!(nav.cutoff_ratio(), 0.3);
    assert_eq!(nav.default_cutoff(), 0.3);
    assert_eq!(nav.depth(), 2);
    assert_eq!(nav.current_index(), 0);
}

#[test]
fn test_zero_cutoff_shows_raw_weights() {
    let records = tagged(&["Race,Tech", "Race", "Ice", "Dirt"]);
    let mut nav = Navigator::with_defaults(refs(&records));
    nav.set_cutoff(0.0).unwrap();

    assert_eq!(nav.depth(), 1);
    assert_eq!(nav.current_level().other_total, 0);
    assert_eq!(&nav.current_level().visible, nav.grand_totals());
}

#[test]
fn test_slices_expose_level_and_overall_shares() {
    let records = tagged(&["Race,Tech", "Race", "Ice"]);
    let mut nav = Navigator::new(refs(&records), WeightMode::Frequency, 0.3, 10).unwrap();

    let top = nav.slices();
    assert_eq!(labels(&nav), vec!["Race".to_string(), OTHER_LABEL.to_string()]);
    assert_eq!(top[0].weight, 2);
    assert!((top[0].level_share - 0.5).abs() < 1e-9);
    assert!((top[0].overall_share - 0.5).abs() < 1e-9);
    assert!(top[1].is_other);
    assert!((top[1].overall_share - 0.5).abs() < 1e-9);

    nav.drill_down();
    let deeper = nav.slices();
    assert_eq!(deeper.len(), 1);
    assert_eq!(deeper[0].label, "Ice");
    assert!((deeper[0].level_share - 1.0).abs() < 1e-9);
    assert!((deeper[0].overall_share - 0.25).abs() < 1e-9);
}

#[test]
fn test_ordering_is_weight_desc_then_label() {
    let records = tagged(&["B", "A", "C,C", "C", "A"]);
    let mut nav = Navigator::with_defaults(refs(&records));
    nav.set_cutoff(0.0).unwrap();

    assert_eq!(labels(&nav), vec!["C", "A", "B"]);
}

#[test]
fn test_navigators_share_records_but_not_state() {
    let records = tagged(&["Race,Tech", "Race", "Ice"]);
    let mut a = Navigator::new(refs(&records), WeightMode::Frequency, 0.3, 10).unwrap();
    let b = Navigator::new(refs(&records), WeightMode::Frequency, 0.3, 10).unwrap();

    a.drill_down();
    assert_eq!(a.current_index(), 1);
    assert_eq!(b.current_index(), 0);
}
