use super::*;
use crate::model::records::GradeEntry;
use crate::model::roles::Role;

fn team(id: &str, section: Option<&str>, grades: &[(&str, &str)]) -> Team {
    Team {
        id: id.to_string(),
        name: format!("Team {id}"),
        nationality: "AT".to_string(),
        section_id: section.map(str::to_string),
        grades: grades
            .iter()
            .map(|(r, t)| GradeEntry {
                role: Role::from_label(r),
                token: t.to_string(),
            })
            .collect(),
    }
}

fn two_sections() -> Vec<Section> {
    vec![
        Section {
            id: "a".to_string(),
            name: "Lenient".to_string(),
        },
        Section {
            id: "b".to_string(),
            name: "Strict".to_string(),
        },
    ]
}

#[test]
fn test_empty_team_set() {
    assert!(score_teams(&[], &two_sections()).is_empty());
}

#[test]
fn test_single_team_single_section() {
    let teams = vec![team("solo", Some("a"), &[])];
    let out = score_teams(&teams, &two_sections());
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].leniency, 1.0);
    assert_eq!(out[0].tp, 0.0);
    assert_eq!(out[0].z_score, 0.0);
    assert_eq!(out[0].rp, 50.0);
    assert_eq!(out[0].place, 1);
    assert_eq!(out[0].section_name, "Lenient");
}

#[test]
fn test_leniency_reorders_equal_raw_scores() {
    let teams = vec![
        team("t1", Some("a"), &[("reporter_sci", "5 5 5")]),
        team("t2", Some("a"), &[("reporter_sci", "4 4 4")]),
        team("t3", Some("b"), &[("reporter_sci", "4 4 4")]),
    ];
    let out = score_teams(&teams, &two_sections());
    let ids: Vec<&str> = out.iter().map(|r| r.team_id.as_str()).collect();
    assert_eq!(ids, vec!["t1", "t3", "t2"]);

    let t2 = &out[2];
    let t3 = &out[1];
    assert_eq!(t2.raw_tp, t3.raw_tp);
    assert!(t3.tp > t2.tp);
    assert!(t2.leniency > 1.0);
    assert!(t3.leniency < 1.0);
    let places: Vec<u32> = out.iter().map(|r| r.place).collect();
    assert_eq!(places, vec![1, 2, 3]);
}

#[test]
fn test_tied_pair_then_distinct_team() {
    let teams = vec![
        team("x", None, &[("opponent", "5")]),
        team("y", None, &[("opponent", "5")]),
        team("z", None, &[("opponent", "3")]),
    ];
    let out = score_teams(&teams, &[]);
    let places: Vec<u32> = out.iter().map(|r| r.place).collect();
    assert_eq!(places, vec![1, 1, 3]);
    assert_eq!(out[0].team_id, "x");
    assert_eq!(out[1].team_id, "y");
}

#[test]
fn test_rerun_is_bit_identical_and_input_untouched() {
    let teams = vec![
        team("t1", Some("a"), &[("reporter_sci", "5- 4+ 5"), ("reviewer", "3+ 4-")]),
        team("t2", Some("b"), &[("opponent", "4 X 3"), ("reporter_pres", "5+")]),
        team("t3", None, &[("reporter_sci", "2 3- 3"), ("chair", "5")]),
    ];
    let sections = two_sections();
    let before = teams.clone();
    let first = score_teams(&teams, &sections);
    let second = score_teams(&teams, &sections);
    assert_eq!(teams, before);
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.team_id, b.team_id);
        assert_eq!(a.tp.to_bits(), b.tp.to_bits());
        assert_eq!(a.rp.to_bits(), b.rp.to_bits());
        assert_eq!(a.leniency.to_bits(), b.leniency.to_bits());
        assert_eq!(a.place, b.place);
    }
}

#[test]
fn test_rp_is_centered_across_sections() {
    let teams = vec![
        team("t1", Some("a"), &[("reporter_sci", "5")]),
        team("t2", Some("b"), &[("reporter_sci", "3")]),
        team("t3", None, &[("reporter_sci", "4")]),
        team("t4", None, &[("reviewer", "4+")]),
    ];
    let out = score_teams(&teams, &two_sections());
    let mean_rp = out.iter().map(|r| r.rp).sum::<f64>() / out.len() as f64;
    assert!((mean_rp - 50.0).abs() < 1e-9);
    for r in &out {
        assert_eq!(r.rp, r.score);
        assert!((0.6..=1.5).contains(&r.leniency));
    }
}
