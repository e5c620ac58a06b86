//! Discovered points of interest: the emergency site and creeks.

/// The final report when the run ends without a single creek registered.
pub const NO_CREEK_FOUND: &str = "no creek found";

/// A creek and its distance at the moment of discovery.
#[derive(Debug, Clone)]
struct Creek {
    id: String,
    distance: i64,
}

/// The drone's record of discovered points of interest.
///
/// At most one emergency site (first writer wins) and any number of creeks in
/// registration order, each registered at most once. A creek's distance is
/// fixed when it is registered and never changes afterwards.
#[derive(Debug, Default)]
pub struct DiscoveryLog {
    site: Option<String>,
    creeks: Vec<Creek>,
}

impl DiscoveryLog {
    /// Record the emergency site. A no-op when one is already recorded.
    pub fn register_site(&mut self, id: &str) {
        if self.site.is_none() {
            self.site = Some(id.to_string());
        }
    }

    /// Record a creek with its discovery distance. A no-op when the id is
    /// already registered.
    pub fn register_creek(&mut self, id: &str, distance: i64) {
        if self.creeks.iter().any(|c| c.id == id) {
            return;
        }
        self.creeks.push(Creek {
            id: id.to_string(),
            distance,
        });
    }

    /// The emergency site, if found.
    pub fn site(&self) -> Option<&str> {
        self.site.as_deref()
    }

    /// Whether at least one creek has been registered.
    pub fn any_creek(&self) -> bool {
        !self.creeks.is_empty()
    }

    /// The registered creek with the smallest stored distance.
    ///
    /// Ties go to the earliest registration. `None` when no creek is known.
    pub fn nearest_creek(&self) -> Option<&str> {
        let mut best: Option<&Creek> = None;
        for creek in &self.creeks {
            if best.is_none_or(|b| creek.distance < b.distance) {
                best = Some(creek);
            }
        }
        best.map(|c| c.id.as_str())
    }

    /// The final deliverable: the nearest creek id, or the sentinel.
    pub fn final_report(&self) -> String {
        self.nearest_creek().unwrap_or(NO_CREEK_FOUND).to_string()
    }
}
