//! Entity stores
//!
//! One store per collection, each owning the in-memory working copy behind a
//! `RwLock`, mirroring every change into the local cache and pushing writes
//! to the remote store first. Reads never touch the network after init.

pub mod church;
pub mod member;
pub mod seed;

#[cfg(test)]
pub mod testing;

pub use church::ChurchStore;
pub use member::MemberStore;

use dashmap::DashMap;

/// Coarse per-resource busy flags surfaced to the UI while a load or sync
/// is in flight
#[derive(Default)]
pub struct LoadingFlags {
    flags: DashMap<String, bool>,
}

impl LoadingFlags {
    pub fn set(&self, resource: &str, loading: bool) {
        self.flags.insert(resource.to_string(), loading);
    }

    pub fn is_loading(&self, resource: &str) -> bool {
        self.flags.get(resource).map(|v| *v).unwrap_or(false)
    }

    pub fn snapshot(&self) -> std::collections::BTreeMap<String, bool> {
        self.flags
            .iter()
            .map(|e| (e.key().clone(), *e.value()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_default_to_not_loading() {
        let flags = LoadingFlags::default();
        assert!(!flags.is_loading("membros"));

        flags.set("membros", true);
        assert!(flags.is_loading("membros"));
        assert!(!flags.is_loading("igrejas"));

        flags.set("membros", false);
        assert!(!flags.is_loading("membros"));
    }
}
