//! Fingerprint of one watched file

use std::time::SystemTime;

use crate::domain::value_objects::ContentHash;

/// Last observed (modification time, content hash) of a path.
///
/// Both halves start unknown. An unknown timestamp is older than every real
/// one, and an unknown hash differs from every real one, so the first
/// observation of a path always counts as a change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackedFile {
    modified: Option<SystemTime>,
    hash: Option<ContentHash>,
}

impl TrackedFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }

    pub fn hash(&self) -> Option<&ContentHash> {
        self.hash.as_ref()
    }

    /// Record `modified` if it is strictly newer than what we have.
    ///
    /// Returns true when the timestamp advanced.
    pub fn advance_timestamp(&mut self, modified: SystemTime) -> bool {
        match self.modified {
            Some(seen) if modified <= seen => false,
            _ => {
                self.modified = Some(modified);
                true
            }
        }
    }

    /// Record `hash`, returning true when it differs from the previous one.
    pub fn update_hash(&mut self, hash: ContentHash) -> bool {
        if self.hash.as_ref() == Some(&hash) {
            return false;
        }
        self.hash = Some(hash);
        true
    }
}
