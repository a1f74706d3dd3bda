use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Word pool for generated names and descriptions.
const LEXICON: &[&str] = &[
    "amber", "birch", "cedar", "dusk", "ember", "fern", "glade", "harbor",
    "iris", "juniper", "kestrel", "lichen", "meadow", "nutmeg", "osprey",
    "pebble", "quartz", "russet", "sorrel", "thistle", "umber", "vole",
    "willow", "yarrow",
];

/// Timestamps are derived from a fixed anchor rather than `now` so the same
/// seed produces the same output on every run.
const ANCHOR_UNIX_SECS: i64 = 1_704_067_200; // 2024-01-01T00:00:00Z

/// Seeded pseudo-random data generator. Two fakers built from the same seed
/// emit identical sequences.
pub struct Faker {
    rng: StdRng,
}

impl Faker {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn int_in(&mut self, low: i64, high: i64) -> i64 {
        self.rng.gen_range(low..high)
    }

    pub fn bool(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    pub fn word(&mut self) -> &'static str {
        LEXICON[self.rng.gen_range(0..LEXICON.len())]
    }

    pub fn words(&mut self, count: usize) -> String {
        (0..count).map(|_| self.word()).collect::<Vec<_>>().join(" ")
    }

    /// Panics if `items` is empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        assert!(!items.is_empty(), "pick called with an empty slice");
        &items[self.rng.gen_range(0..items.len())]
    }

    /// A vector of random length in `min..=max`, filled by `generate`.
    pub fn vec_of<T>(
        &mut self,
        min: usize,
        max: usize,
        mut generate: impl FnMut(&mut Self) -> T,
    ) -> Vec<T> {
        let len = self.rng.gen_range(min..=max);
        (0..len).map(|_| generate(self)).collect()
    }

    /// A timestamp up to 30 days before the fixed anchor.
    pub fn recent_timestamp(&mut self) -> DateTime<Utc> {
        let offset_secs = self.int_in(0, 30 * 24 * 3600);
        let anchor = DateTime::from_timestamp(ANCHOR_UNIX_SECS, 0).unwrap_or_default();
        anchor - Duration::seconds(offset_secs)
    }
}
