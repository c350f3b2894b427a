use crate::model::results::TeamResult;

pub fn render_leaderboard_json(results: &[TeamResult]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(results)
}
