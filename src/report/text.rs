use crate::model::results::TeamResult;
use crate::report::{format_f64_2, format_f64_3, summarize_sections};

pub fn render_leaderboard_text(results: &[TeamResult]) -> String {
    let mut out = String::new();
    out.push_str("Leaderboard\n");
    out.push_str("===========\n\n");

    if results.is_empty() {
        out.push_str("No teams.\n");
        return out;
    }

    let team_w = column_width("Team", results.iter().map(|r| r.team_name.as_str()));
    let nat_w = column_width("Nat", results.iter().map(|r| r.nationality.as_str()));
    let sec_w = column_width("Section", results.iter().map(|r| r.section_name.as_str()));

    out.push_str(&format!(
        "{:>5}  {:<team_w$}  {:<nat_w$}  {:<sec_w$}  {:>6}  {:>8}  {:>8}  {:>7}\n",
        "Place", "Team", "Nat", "Section", "L", "Raw TP", "TP", "RP"
    ));
    for r in results {
        out.push_str(&format!(
            "{:>5}  {:<team_w$}  {:<nat_w$}  {:<sec_w$}  {:>6}  {:>8}  {:>8}  {:>7}\n",
            r.place,
            r.team_name,
            r.nationality,
            r.section_name,
            format_f64_3(r.leniency),
            format_f64_2(r.raw_tp),
            format_f64_2(r.tp),
            format_f64_2(r.rp)
        ));
    }

    out.push_str("\nSections\n");
    for s in summarize_sections(results) {
        out.push_str(&format!(
            "{} ({}): leniency {}, {} team(s)\n",
            s.section_name,
            s.section_id,
            format_f64_3(s.leniency),
            s.n_teams
        ));
    }
    out
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(0)
        .max(header.len())
}
