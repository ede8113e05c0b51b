//! Human-readable readouts for a buzzword score.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ScoreMeter {
    pub interpretation: &'static str,
    pub bs_meter: &'static str,
    /// 0–100, for a progress bar.
    pub progress: u8,
}

pub fn score_meter(score: f64) -> ScoreMeter {
    ScoreMeter {
        interpretation: interpret_score(score),
        bs_meter: bs_meter(score),
        progress: progress(score),
    }
}

pub fn interpret_score(score: f64) -> &'static str {
    match score {
        s if s == 0.0 => "🧼 Spotless. Did a human actually write this?",
        s if s < 10.0 => "🟢 Minimal fluff. You might be employable *and* honest.",
        s if s < 25.0 => "🟡 A few corporate clichés, but nothing HR can’t ignore.",
        s if s < 40.0 => "🟠 You’re speaking fluent LinkedIn. Proceed with caution.",
        s if s < 60.0 => "🔴 Corporate bingo is strong with this one.",
        s if s < 75.0 => "🚨 You’ve unlocked the Synergy Achievement Badge™️.",
        s if s < 90.0 => "💀 This reads like it was written by ChatGPT trapped in 2013.",
        _ => "🧨 Buzzword singularity detected. Please step away from the resume.",
    }
}

pub fn bs_meter(score: f64) -> &'static str {
    match score {
        s if s < 10.0 => "🟩🟩⬜⬜⬜⬜",
        s if s < 25.0 => "🟨🟨🟩⬜⬜⬜",
        s if s < 40.0 => "🟧🟨🟨🟩⬜⬜",
        s if s < 60.0 => "🟥🟧🟨🟨🟩⬜",
        s if s < 75.0 => "🔥🟥🟧🟨🟨⬜",
        s if s < 90.0 => "💣🔥🟥🟧🟨⬜",
        _ => "☢️💣🔥🟥🟧🟨",
    }
}

/// Truncated to a whole percent and capped at 100.
pub fn progress(score: f64) -> u8 {
    score.clamp(0.0, 100.0) as u8
}
