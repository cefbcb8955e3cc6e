//! Link importance tracking
//!
//! Accumulates an inbound internal link count per normalized URL across a
//! crawl run. Counts include targets that were never visited because the
//! page budget ran out; importance is about being referenced, not crawled.

use crate::results::TopLinkedPage;
use indexmap::IndexMap;

/// Tracks how often each URL appears as a same-hostname anchor target
///
/// Backed by an insertion-ordered map so that ranking ties break by
/// first-seen order.
#[derive(Debug, Default)]
pub struct LinkTracker {
    counts: IndexMap<String, u64>,
}

impl LinkTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `url` as an internal link target
    pub fn record(&mut self, url: &str) {
        if let Some(count) = self.counts.get_mut(url) {
            *count += 1;
        } else {
            self.counts.insert(url.to_string(), 1);
        }
    }

    /// Returns the current inbound count for `url` (0 if never seen)
    pub fn count(&self, url: &str) -> u64 {
        self.counts.get(url).copied().unwrap_or(0)
    }

    /// Returns the top `n` URLs by inbound count
    ///
    /// Sorted descending by count; a stable sort over the insertion order
    /// breaks ties by first-seen URL.
    pub fn top_linked(&self, n: usize) -> Vec<TopLinkedPage> {
        let mut entries: Vec<(&String, &u64)> = self.counts.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(a.1));
        entries
            .into_iter()
            .take(n)
            .map(|(url, count)| TopLinkedPage {
                url: url.clone(),
                link_count: *count,
            })
            .collect()
    }
}
