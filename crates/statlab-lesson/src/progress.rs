use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::section::Section;

/// The set of lesson sections the learner has completed.
///
/// Completion is monotonic: marking a section complete twice is a no-op and
/// sections are never un-completed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    completed: BTreeSet<Section>,
}

impl Progress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a section as complete. Returns `false` if it already was.
    pub fn mark_complete(&mut self, section: Section) -> bool {
        self.completed.insert(section)
    }

    #[must_use]
    pub fn is_complete(&self, section: Section) -> bool {
        self.completed.contains(&section)
    }

    /// Number of completed sections.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Whether every section of the course is complete.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.completed_count() == Section::ALL.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marking_is_idempotent() {
        let mut progress = Progress::new();
        assert!(progress.mark_complete(Section::Introduction));
        assert!(!progress.mark_complete(Section::Introduction));
        assert_eq!(progress.completed_count(), 1);
        assert!(progress.is_complete(Section::Introduction));
        assert!(!progress.is_complete(Section::Dispersion));
    }

    #[test]
    fn test_finished_after_all_sections() {
        let mut progress = Progress::new();
        for section in Section::ALL {
            assert!(!progress.is_finished());
            progress.mark_complete(section);
        }
        assert!(progress.is_finished());
    }
}
