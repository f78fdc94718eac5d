use mold_match::{select_best, MatchError, MatchScorer, MoldCandidate, VesselObservation};

fn observation(
    shape: &str,
    diameter: Option<f64>,
    height: Option<f64>,
    texture: Option<&str>,
) -> VesselObservation {
    VesselObservation {
        shape: shape.to_string(),
        diameter_inches: diameter,
        height_inches: height,
        texture: texture.map(str::to_string),
    }
}

fn candidate(
    id: &str,
    shape: &str,
    diameter: Option<f64>,
    height: Option<f64>,
    tags: &[&str],
) -> MoldCandidate {
    MoldCandidate {
        id: id.to_string(),
        shape_type: shape.to_string(),
        diameter_inches: diameter,
        height_inches: height,
        style_tags: tags.iter().map(|t| t.to_string()).collect(),
        is_active: true,
    }
}

#[test]
fn selection_is_deterministic_for_fixed_inputs() {
    let scorer = MatchScorer::default();
    let obs = observation("cylinder", Some(3.1), Some(4.2), Some("ribbed"));
    let candidates = vec![
        candidate("a", "cylinder", Some(3.0), Some(4.0), &["ribbed"]),
        candidate("b", "cylinder", Some(3.2), Some(4.5), &["smooth"]),
        candidate("c", "bowl", Some(3.1), Some(4.2), &["ribbed"]),
    ];

    let first = select_best(&scorer, &obs, candidates.clone()).unwrap();
    for _ in 0..10 {
        let again = select_best(&scorer, &obs, candidates.clone()).unwrap();
        assert_eq!(again.suggested_mold.id, first.suggested_mold.id);
        assert_eq!(again.confidence, first.confidence);
    }
}

#[test]
fn scores_and_confidence_stay_within_bounds() {
    let scorer = MatchScorer::default();
    let shapes = ["cylinder", "bowl", "sphere", "scallop"];
    let diameters = [None, Some(0.5), Some(3.0), Some(8.0)];
    let textures = [None, Some("ribbed"), Some("smooth matte")];

    let candidates: Vec<MoldCandidate> = shapes
        .iter()
        .enumerate()
        .map(|(i, shape)| {
            candidate(
                &format!("mold-{}", i),
                shape,
                Some(3.0),
                Some(4.0),
                &["ribbed", "rustic"],
            )
        })
        .collect();

    for shape in &shapes {
        for diameter in &diameters {
            for texture in &textures {
                let obs = observation(shape, *diameter, Some(4.0), *texture);

                for cand in &candidates {
                    let score = scorer.score(&obs, cand);
                    assert!((0.0..=120.0).contains(&score), "score {} out of bounds", score);
                }

                let result = select_best(&scorer, &obs, candidates.clone()).unwrap();
                assert!(
                    (0.0..=100.0).contains(&result.confidence),
                    "confidence {} out of bounds",
                    result.confidence
                );
            }
        }
    }
}

#[test]
fn matching_shape_outscores_mismatch_by_at_least_the_shape_weight() {
    let scorer = MatchScorer::default();
    let obs = observation("cylinder", Some(3.0), Some(4.0), Some("ribbed"));

    let matching = candidate("a", "cylinder", Some(3.0), Some(4.0), &["ribbed"]);
    let mismatched = candidate("b", "bowl", Some(3.0), Some(4.0), &["ribbed"]);

    let difference = scorer.score(&obs, &matching) - scorer.score(&obs, &mismatched);
    assert!(difference >= 50.0);
}

#[test]
fn closer_diameters_never_score_lower() {
    let scorer = MatchScorer::default();
    let nominal = 4.0;
    let cand = candidate("a", "cylinder", Some(nominal), None, &[]);

    // walk the observed diameter toward the nominal value, staying inside
    // the 20% window the whole way
    let offsets = [0.7, 0.5, 0.3, 0.2, 0.1, 0.05, 0.0];
    let mut previous = f64::NEG_INFINITY;
    for offset in offsets {
        let obs = observation("cylinder", Some(nominal + offset), None, None);
        let score = scorer.score(&obs, &cand);
        assert!(
            score >= previous,
            "score decreased from {} to {} at offset {}",
            previous,
            score,
            offset
        );
        previous = score;
    }
}

#[test]
fn missing_diameter_scores_like_a_far_off_diameter() {
    let scorer = MatchScorer::default();
    let cand = candidate("a", "cylinder", Some(3.0), None, &["ribbed"]);

    let missing = observation("cylinder", None, None, Some("ribbed"));
    // 4.0 vs 3.0 is a 33% relative difference, beyond the cutoff
    let far_off = observation("cylinder", Some(4.0), None, Some("ribbed"));

    assert_eq!(scorer.score(&missing, &cand), scorer.score(&far_off, &cand));
}

#[test]
fn empty_candidate_set_signals_an_error() {
    let scorer = MatchScorer::default();
    let obs = observation("cylinder", None, None, None);

    let result = select_best(&scorer, &obs, vec![]);
    assert!(matches!(result, Err(MatchError::EmptyCandidateSet)));
}

// Worked scenarios with exact expected numbers.

#[test]
fn scenario_full_match_reports_confidence_100() {
    let scorer = MatchScorer::default();
    let obs = observation("cylinder", Some(3.0), Some(4.0), Some("ribbed"));
    let cand = candidate("a", "cylinder", Some(3.0), Some(4.0), &["ribbed", "modern"]);

    assert_eq!(scorer.score(&obs, &cand), 120.0);

    let result = select_best(&scorer, &obs, vec![cand]).unwrap();
    assert_eq!(result.confidence, 100.0);
}

#[test]
fn scenario_wrong_shape_keeps_the_other_terms() {
    let scorer = MatchScorer::default();
    let obs = observation("cylinder", Some(3.0), Some(4.0), Some("ribbed"));
    let cand = candidate("a", "bowl", Some(3.0), Some(4.0), &["ribbed"]);

    assert_eq!(scorer.score(&obs, &cand), 70.0);

    let result = select_best(&scorer, &obs, vec![cand]).unwrap();
    assert_eq!(result.confidence, 70.0);
}

#[test]
fn scenario_near_diameter_gets_partial_credit() {
    let scorer = MatchScorer::default();
    let obs = observation("none", Some(3.0), None, None);
    let cand = candidate("a", "cylinder", Some(3.5), None, &[]);

    let score = scorer.score(&obs, &cand);
    assert!((score - 17.142857).abs() < 1e-4);
}

#[test]
fn scenario_diameter_at_25_percent_gets_nothing() {
    let scorer = MatchScorer::default();
    let obs = observation("none", Some(3.0), None, None);
    let cand = candidate("a", "cylinder", Some(4.0), None, &[]);

    assert_eq!(scorer.score(&obs, &cand), 0.0);
}

#[test]
fn scenario_all_zero_scores_default_to_the_first_candidate() {
    let scorer = MatchScorer::default();
    let obs = observation("cylinder", None, None, None);
    let candidates = vec![
        candidate("first", "bowl", None, None, &[]),
        candidate("second", "sphere", None, None, &[]),
    ];

    let result = select_best(&scorer, &obs, candidates).unwrap();
    assert_eq!(result.suggested_mold.id, "first");
    assert_eq!(result.confidence, 0.0);
}
