use super::*;

fn result(id: &str, tp: f64) -> TeamResult {
    TeamResult {
        place: 0,
        team_id: id.to_string(),
        team_name: id.to_string(),
        nationality: String::new(),
        section_id: "default".to_string(),
        section_name: "default".to_string(),
        sci_raw: 0.0,
        rep_raw: 0.0,
        opp_raw: 0.0,
        rev_raw: 0.0,
        sci: 0.0,
        rep: 0.0,
        opp: 0.0,
        rev: 0.0,
        raw_tp: tp,
        tp,
        z_score: 0.0,
        rp: 0.0,
        score: 0.0,
        leniency: 1.0,
        tasks: Vec::new(),
        grades: Vec::new(),
    }
}

fn with_rp(id: &str, rp: f64) -> TeamResult {
    let mut r = result(id, 0.0);
    r.rp = rp;
    r
}

#[test]
fn test_single_team_is_centered() {
    let out = run_stage5(vec![result("solo", 137.4)]);
    assert_eq!(out[0].z_score, 0.0);
    assert_eq!(out[0].rp, 50.0);
    assert_eq!(out[0].score, 50.0);
    assert_eq!(out[0].place, 1);
}

#[test]
fn test_std_floor() {
    let stats = tp_stats(&[result("a", 10.0), result("b", 10.5)]);
    assert_eq!(stats.mean, 10.25);
    assert_eq!(stats.std, 1.0);

    let out = run_stage5(vec![result("a", 10.0), result("b", 10.5)]);
    assert_eq!(out[0].team_id, "b");
    assert_eq!(out[0].rp, 52.5);
    assert_eq!(out[1].rp, 47.5);
}

#[test]
fn test_population_std_and_rp() {
    let out = run_stage5(vec![result("low", 40.0), result("mid", 60.0), result("high", 80.0)]);
    // population std of [40, 60, 80] = sqrt(800/3)
    let std = (800.0f64 / 3.0).sqrt();
    assert_eq!(out[0].team_id, "high");
    assert!((out[0].z_score - 20.0 / std).abs() < 1e-12);
    assert!((out[0].rp - (50.0 + 10.0 * 20.0 / std)).abs() < 1e-9);
    assert_eq!(out[1].rp, 50.0);
    let places: Vec<u32> = out.iter().map(|r| r.place).collect();
    assert_eq!(places, vec![1, 2, 3]);
}

#[test]
fn test_equal_rp_keeps_input_order() {
    let out = run_stage5(vec![
        result("first", 20.0),
        result("top", 90.0),
        result("second", 20.0),
        result("third", 20.0),
    ]);
    let ids: Vec<&str> = out.iter().map(|r| r.team_id.as_str()).collect();
    assert_eq!(ids, vec!["top", "first", "second", "third"]);
    let places: Vec<u32> = out.iter().map(|r| r.place).collect();
    assert_eq!(places, vec![1, 2, 2, 2]);
}

#[test]
fn test_places_do_not_compress_after_tie() {
    let mut rows = vec![
        with_rp("a", 60.0),
        with_rp("b", 55.0),
        with_rp("c", 55.005),
        with_rp("d", 40.0),
    ];
    assign_places(&mut rows);
    let places: Vec<u32> = rows.iter().map(|r| r.place).collect();
    assert_eq!(places, vec![1, 2, 2, 4]);
}

#[test]
fn test_tolerance_is_against_predecessor_only() {
    // each step is under the tolerance, so the whole chain inherits place 1
    let mut rows = vec![
        with_rp("a", 50.018),
        with_rp("b", 50.010),
        with_rp("c", 50.002),
        with_rp("d", 49.98),
    ];
    assign_places(&mut rows);
    let places: Vec<u32> = rows.iter().map(|r| r.place).collect();
    assert_eq!(places, vec![1, 1, 1, 4]);
}

#[test]
fn test_empty() {
    assert!(run_stage5(Vec::new()).is_empty());
    let stats = tp_stats(&[]);
    assert_eq!(stats.std, 1.0);
}
