/// Built-in example texts for trying the decoder without pasting anything.
pub const SAMPLES: &[(&str, &str)] = &[
    (
        "Software Engineer – Corporate",
        "We are seeking a results-driven, self-starter to join our fast-paced team. \
         The ideal candidate will wear many hats and deliver impactful solutions while \
         collaborating cross-functionally.",
    ),
    (
        "Marketing Resume Sample",
        "Dynamic and detail-oriented marketing professional with a proven track record of \
         delivering innovative campaigns that drive engagement and ROI.",
    ),
    (
        "Startup Operations Manager",
        "Looking for a rockstar generalist who thrives under pressure, embraces chaos, and \
         brings a get-it-done attitude to every challenge.",
    ),
    (
        "Customer Support – Remote",
        "Seeking a customer-obsessed team player with strong communication skills, empathy, \
         and an unwavering commitment to delivering white-glove support experiences.",
    ),
];

pub fn find_sample(name: &str) -> Option<&'static str> {
    SAMPLES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, text)| *text)
}
