// Heuristic analyses run alongside decoding: tone balance, ATS friendliness,
// and the composite quality score that combines them with the buzzword score.

pub mod ats;
pub mod quality;
pub mod tone;
