/// Grading scale, lowest to highest. Tokens are matched exactly.
pub const GRADE_SCALE: [(&str, f64); 10] = [
    ("2", 2.0),
    ("3-", 5.0),
    ("3", 9.0),
    ("3+", 14.0),
    ("4-", 20.0),
    ("4", 27.0),
    ("4+", 34.0),
    ("5-", 42.0),
    ("5", 51.0),
    ("5+", 60.0),
];

/// Value of the middle grade ("4"), used as the global mean when nothing was graded.
pub const SCALE_MIDPOINT: f64 = 27.0;

pub const SCI_WEIGHT: f64 = 2.0;
pub const PRESENTER_WEIGHT: f64 = 0.35;
pub const OPP_WEIGHT: f64 = 2.0;
pub const REV_WEIGHT: f64 = 1.0;

pub const LENIENCY_DAMPING: f64 = 0.5;
pub const LENIENCY_MIN: f64 = 0.6;
pub const LENIENCY_MAX: f64 = 1.5;
pub const NEUTRAL_LENIENCY: f64 = 1.0;

pub const TP_STD_FLOOR: f64 = 1.0;
pub const RP_CENTER: f64 = 50.0;
pub const RP_SCALE: f64 = 10.0;
pub const PLACE_TIE_TOLERANCE: f64 = 0.01;

/// Bucket shared by every team without a section.
pub const DEFAULT_SECTION_ID: &str = "default";

pub fn grade_value(token: &str) -> Option<f64> {
    GRADE_SCALE
        .iter()
        .find(|(t, _)| *t == token)
        .map(|(_, v)| *v)
}
