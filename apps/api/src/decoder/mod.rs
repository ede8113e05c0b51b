// Buzzword decoding: dictionary, styled rewrites, density score and the
// lighthearted extras around it (score meter, honest titles, samples).

pub mod dictionary;
pub mod engine;
pub mod handlers;
pub mod samples;
pub mod score_meter;
pub mod style;
pub mod titles;
