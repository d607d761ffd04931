/// The sixteen transmittable words with their morse spelling.
///
/// Index order is the order of frequencies on the module's dial, so the
/// answer index is also the number of right-arrow clicks.
pub const PHRASES: [(&str, &str); 16] = [
    ("shell", "... .... . .-.. .-.."),
    ("halls", ".... .- .-.. .-.. ..."),
    ("slick", "... .-.. .. -.-. -.-"),
    ("trick", "- .-. .. -.-. -.-"),
    ("boxes", "-... --- -..- . ..."),
    ("leaks", ".-.. . .- -.- ..."),
    ("strobe", "... - .-. --- -... ."),
    ("bistro", "-... .. ... - .-. ---"),
    ("flick", "..-. .-.. .. -.-. -.-"),
    ("bombs", "-... --- -- -... ..."),
    ("break", "-... .-. . .- -.-"),
    ("brick", "-... .-. .. -.-. -.-"),
    ("steak", "... - . .- -.-"),
    ("sting", "... - .. -. --."),
    ("vector", "...- . -.-. - --- .-."),
    ("beats", "-... . .- - ..."),
];

/// Indices of every phrase whose looped transmission contains `code`.
///
/// The module repeats its word forever with a long pause between
/// repetitions, so a capture can start anywhere inside the word and wrap
/// over the pause. Matching against `word/word` covers every such window.
pub fn candidates(code: &str) -> Vec<usize> {
    PHRASES
        .iter()
        .enumerate()
        .filter(|(_, (_, morse))| format!("{morse}/{morse}").contains(code))
        .map(|(index, _)| index)
        .collect()
}

/// The phrase index when `code` identifies exactly one word.
pub fn match_phrase(code: &str) -> Option<usize> {
    match candidates(code).as_slice() {
        [index] => Some(*index),
        _ => None,
    }
}
