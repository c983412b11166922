const INDEX_FREQUENCY: f64 = 12.9898;
const PARAMETER_FREQUENCY: f64 = 78.233;
const SCRAMBLE: f64 = 43758.5453;

/// Stateless hash noise in [-1, 1] keyed by strand index and curve parameter.
/// The same inputs always produce the same output.
pub fn hash_noise(strand_index: usize, t: f64) -> f64 {
    let seed = (strand_index as f64 + 1.) * INDEX_FREQUENCY + t * PARAMETER_FREQUENCY;
    let h = seed.sin() * SCRAMBLE;
    let fract = h - h.floor();
    fract * 2. - 1.
}
