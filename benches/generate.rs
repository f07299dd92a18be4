use rand::prelude::*;

const ALPHABET: &[u8] = b"ACGT";

#[derive(Clone, Debug)]
pub struct PairGenerationOptions {
    /// Seed for the random number generator to ensure consistent data.
    pub seed: u64,
    /// Length of the first sequence
    pub length: usize,
    /// Chance for each symbol of the first sequence to be substituted, deleted or followed by
    /// an insertion in the second sequence
    pub mutation_rate: f64,
}

/// Generates a random DNA sequence and a mutated copy of it.
/// NOTE: The second sequence is usually not the same length as the first, so the blocked
/// method falls back to whatever tiles its divisors allow.
pub fn generate_pair(options: &PairGenerationOptions) -> (Vec<u8>, Vec<u8>) {
    let mut rng = StdRng::seed_from_u64(options.seed);

    let s = (0..options.length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())])
        .collect::<Vec<u8>>();

    let mut t = Vec::with_capacity(s.len());
    for &c in s.iter() {
        if rng.random::<f64>() >= options.mutation_rate {
            t.push(c);
            continue;
        }

        match rng.random_range(0..3) {
            // Substitution
            0 => t.push(ALPHABET[rng.random_range(0..ALPHABET.len())]),
            // Deletion
            1 => {}
            // Insertion after the symbol
            _ => {
                t.push(c);
                t.push(ALPHABET[rng.random_range(0..ALPHABET.len())]);
            }
        }
    }

    (s, t)
}
