use crate::model::constants::{PLACE_TIE_TOLERANCE, RP_CENTER, RP_SCALE, TP_STD_FLOOR};
use crate::model::results::TeamResult;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TpStats {
    pub mean: f64,
    pub std: f64,
}

/// Population mean and standard deviation of adjusted TP, std floored.
pub fn tp_stats(results: &[TeamResult]) -> TpStats {
    if results.is_empty() {
        return TpStats {
            mean: 0.0,
            std: TP_STD_FLOOR,
        };
    }
    let n = results.len() as f64;
    let mean = results.iter().map(|r| r.tp).sum::<f64>() / n;
    let variance = results.iter().map(|r| (r.tp - mean).powi(2)).sum::<f64>() / n;
    TpStats {
        mean,
        std: variance.sqrt().max(TP_STD_FLOOR),
    }
}

pub fn run_stage5(mut results: Vec<TeamResult>) -> Vec<TeamResult> {
    let stats = tp_stats(&results);
    tracing::debug!(mean = stats.mean, std = stats.std, "global TP");

    for r in &mut results {
        r.z_score = (r.tp - stats.mean) / stats.std;
        r.rp = RP_CENTER + r.z_score * RP_SCALE;
        r.score = r.rp;
    }

    // Stable: equal RP keeps input order.
    results.sort_by(|a, b| b.rp.total_cmp(&a.rp));
    assign_places(&mut results);
    results
}

/// A team within tolerance of its predecessor shares that place; any other
/// team takes its 1-based position, so a tied block does not compress what follows.
pub fn assign_places(sorted: &mut [TeamResult]) {
    for i in 0..sorted.len() {
        let place = if i > 0 && (sorted[i].rp - sorted[i - 1].rp).abs() < PLACE_TIE_TOLERANCE {
            sorted[i - 1].place
        } else {
            (i + 1) as u32
        };
        sorted[i].place = place;
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_rank.rs"]
mod tests;
