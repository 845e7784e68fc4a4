use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::OrdSet;

pub const SEED: u64 = 1_597_150_055_724_205_000;

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

/// `n` distinct zero-padded numbers (`"000".."n-1"`) in shuffled order.
pub fn shuffled_numeric_keys(n: usize, rng: &mut StdRng) -> Vec<String> {
    let width = n.saturating_sub(1).to_string().len();
    let mut keys: Vec<String> = (0..n).map(|i| format!("{:0width$}", i)).collect();
    keys.shuffle(rng);
    keys
}

/// `n` random 8-letter lowercase keys. May contain duplicates.
pub fn random_alpha_keys(n: usize, rng: &mut StdRng) -> Vec<String> {
    (0..n)
        .map(|_| (0..8).map(|_| rng.random_range('a'..='z')).collect())
        .collect()
}

/// `keys` deduplicated and sorted greatest first.
pub fn sorted_desc(keys: &[String]) -> Vec<String> {
    let mut out = keys.to_vec();
    out.sort_unstable_by(|a, b| b.cmp(a));
    out.dedup();
    out
}

pub fn is_strictly_descending(keys: &[String]) -> bool {
    keys.windows(2).all(|w| w[0] > w[1])
}

/// Five users and one item, the layout the bucket and cursor tests share:
/// `user` holds `rob pike bob anna alice`, `item` holds `003`.
pub fn users_and_items(set: &OrdSet) {
    let users = set.bucket("user");
    for name in ["rob", "bob", "pike", "alice", "anna"] {
        users.put(name);
    }
    set.bucket("item").put("003");
}
