//! Item generation strategies.

use parlor_protocol::Item;
use rand::Rng;
use rand::seq::SliceRandom;

/// The capability a room needs to refill its pool.
///
/// Supplied at room construction — deterministic or random at the
/// implementer's discretion. Implementations MUST return items with a
/// non-empty `answer`; the room treats an empty answer as a programming
/// error and panics rather than limping on with an unguessable item.
pub trait ItemGenerator: Send + 'static {
    /// Produces the next guessable item.
    fn generate(&mut self) -> Item;
}

/// Default generator: picks a word from a bank and presents its letters
/// shuffled. The answer is the original word; positions are uniform in
/// the unit square.
pub struct ScrambleGenerator {
    words: Vec<String>,
}

impl ScrambleGenerator {
    /// A generator over a custom word bank. Empty words are dropped.
    ///
    /// # Panics
    ///
    /// Panics if the bank ends up empty — a generator that cannot
    /// generate violates its contract before the room even starts.
    pub fn new(words: impl IntoIterator<Item = String>) -> Self {
        let words: Vec<String> = words.into_iter().filter(|w| !w.is_empty()).collect();
        assert!(!words.is_empty(), "word bank must not be empty");
        Self { words }
    }

    /// A generator over the built-in word bank.
    pub fn with_default_bank() -> Self {
        Self::new(DEFAULT_BANK.iter().map(|w| (*w).to_string()))
    }
}

impl ItemGenerator for ScrambleGenerator {
    fn generate(&mut self) -> Item {
        let mut rng = rand::rng();
        let word = &self.words[rng.random_range(0..self.words.len())];

        let mut letters: Vec<char> = word.chars().collect();
        // A shuffle can reproduce the original word; retry a few times so
        // the prompt is usually not the answer itself.
        for _ in 0..8 {
            letters.shuffle(&mut rng);
            if letters.iter().collect::<String>() != *word {
                break;
            }
        }
        let text: String = letters.iter().collect();

        Item::new(rng.random::<f32>(), rng.random::<f32>(), text, word.clone())
    }
}

const DEFAULT_BANK: &[&str] = &[
    "anchor", "blanket", "candle", "dolphin", "ember", "falcon", "garnet", "harbor", "island",
    "jigsaw", "kettle", "lantern", "meadow", "nectar", "orchard", "pebble", "quiver", "raven",
    "saddle", "thimble", "umbrella", "velvet", "walnut", "zephyr",
];
