use serde::{Deserialize, Serialize};

use crate::analysis::tone::ToneResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityLabel {
    Strong,
    Moderate,
    Weak,
}

/// Composite resume quality, 0–100:
/// 0.35*(100 - bs_score) + 0.35*ats_score + 0.3*min(10*distinct_tones, 30)
///
/// Each term is already bounded for in-range inputs. Out-of-range inputs
/// never panic; a negative total saturates to 0.
pub fn calculate_resume_quality(bs_score: f64, ats_score: f64, tone: &ToneResult) -> u32 {
    let tone_diversity = (10.0 * tone.len() as f64).min(30.0);
    let quality = 0.35 * (100.0 - bs_score) + 0.35 * ats_score + 0.3 * tone_diversity;
    quality.round().max(0.0) as u32
}

pub fn quality_label(score: u32) -> QualityLabel {
    match score {
        s if s >= 70 => QualityLabel::Strong,
        s if s >= 50 => QualityLabel::Moderate,
        _ => QualityLabel::Weak,
    }
}
