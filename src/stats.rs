use lazy_static::lazy_static;
use metrics::{counter, Counter};

lazy_static! {
    pub static ref GLOBAL_STATS: Stats = Stats::new();
}

pub struct Stats {
    pub validator_creations: Counter,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            validator_creations: counter!("id_card.validator_creations"),
        }
    }
}
