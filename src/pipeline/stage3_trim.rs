/// Mean after dropping one lowest and one highest score (only with three or
/// more scores), divided by `leniency`. Empty input is 0.
pub fn trimmed_average(scores: &[f64], leniency: f64) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let mut sorted = scores.to_vec();
    sorted.sort_by(f64::total_cmp);
    let kept = if sorted.len() >= 3 {
        &sorted[1..sorted.len() - 1]
    } else {
        &sorted[..]
    };
    let avg = kept.iter().sum::<f64>() / kept.len() as f64;
    avg / leniency
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_trim.rs"]
mod tests;
