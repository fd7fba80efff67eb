use log::debug;
use std::collections::HashMap;

use crate::schedule::terms::FinancingTerms;
use crate::schedule::{compute_schedule, Schedule};
use crate::FinanceResult;

/// Caller-owned cache of computed schedules.
///
/// Keyed on the full `FinancingTerms` (amounts compare by value, so `100`
/// and `100.00` share an entry). Errors are never cached.
#[derive(Debug, Default)]
pub struct ScheduleMemo {
    cache: HashMap<FinancingTerms, Schedule>,
    hits: u64,
    misses: u64,
}

impl ScheduleMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached schedule for `terms`, computing it on a miss.
    pub fn get_or_compute(&mut self, terms: &FinancingTerms) -> FinanceResult<Schedule> {
        if let Some(schedule) = self.cache.get(terms) {
            self.hits += 1;
            return Ok(schedule.clone());
        }

        let schedule = compute_schedule(terms)?.result;
        self.misses += 1;
        debug!("schedule memo miss ({} cached)", self.cache.len() + 1);
        self.cache.insert(terms.clone(), schedule.clone());
        Ok(schedule)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.cache.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
