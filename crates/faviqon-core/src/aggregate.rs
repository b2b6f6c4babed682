//! Group successful outcomes by fingerprint.

use std::collections::HashMap;

use crate::dispatch::FetchOutcome;

/// Fingerprint → base URLs sharing it, in the order they were visited.
///
/// Map iteration order is unspecified; output built from it is not sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FingerprintGroups {
    groups: HashMap<i32, Vec<String>>,
}

impl FingerprintGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `base_url` to the group for `fingerprint`, creating it if needed.
    pub fn insert(&mut self, fingerprint: i32, base_url: impl Into<String>) {
        self.groups
            .entry(fingerprint)
            .or_default()
            .push(base_url.into());
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn members(&self, fingerprint: i32) -> Option<&[String]> {
        self.groups.get(&fingerprint).map(Vec::as_slice)
    }

    pub fn fingerprints(&self) -> impl Iterator<Item = i32> + '_ {
        self.groups.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, &[String])> + '_ {
        self.groups.iter().map(|(fp, urls)| (*fp, urls.as_slice()))
    }
}

impl FromIterator<(i32, String)> for FingerprintGroups {
    fn from_iter<T: IntoIterator<Item = (i32, String)>>(iter: T) -> Self {
        let mut groups = Self::new();
        for (fingerprint, url) in iter {
            groups.insert(fingerprint, url);
        }
        groups
    }
}

/// Builds groups from dispatcher outcomes. Failed outcomes are skipped.
pub fn aggregate(outcomes: &[FetchOutcome]) -> FingerprintGroups {
    outcomes
        .iter()
        .filter(|o| !o.failed)
        .map(|o| (o.fingerprint, o.base_url.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_fingerprints_share_a_group() {
        let outcomes = [
            FetchOutcome::success("http://a.com", 116323821),
            FetchOutcome::success("http://b.com", -1277814690),
            FetchOutcome::success("http://c.com", 116323821),
        ];
        let groups = aggregate(&outcomes);
        assert_eq!(groups.len(), 2);
        assert_eq!(
            groups.members(116323821).unwrap(),
            ["http://a.com", "http://c.com"]
        );
        assert_eq!(groups.members(-1277814690).unwrap(), ["http://b.com"]);
    }

    #[test]
    fn failed_outcomes_never_grouped() {
        let outcomes = [
            FetchOutcome::failure("http://down.com"),
            FetchOutcome::success("http://up.com", 42),
        ];
        let groups = aggregate(&outcomes);
        assert_eq!(groups.len(), 1);
        // A failure carries fingerprint 0 but must not create that group.
        assert!(groups.members(0).is_none());
        assert!(groups.iter().all(|(_, urls)| !urls.contains(&"http://down.com".to_string())));
    }

    #[test]
    fn all_failed_yields_no_groups() {
        let outcomes = [FetchOutcome::failure("http://x"), FetchOutcome::failure("http://y")];
        assert!(aggregate(&outcomes).is_empty());
    }

    #[test]
    fn zero_fingerprint_from_success_is_grouped() {
        let groups = aggregate(&[FetchOutcome::success("http://empty.com", 0)]);
        assert_eq!(groups.members(0).unwrap(), ["http://empty.com"]);
    }

    #[test]
    fn every_group_nonempty_and_urls_unique() {
        let outcomes: Vec<FetchOutcome> = (0..50)
            .map(|i| FetchOutcome::success(format!("http://h{i}"), i % 7))
            .collect();
        let groups = aggregate(&outcomes);
        let total: usize = groups.iter().map(|(_, urls)| urls.len()).sum();
        assert_eq!(total, 50);
        assert!(groups.iter().all(|(_, urls)| !urls.is_empty()));
        assert_eq!(groups.len(), 7);
    }
}
