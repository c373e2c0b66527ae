use serde::{Deserialize, Serialize};

/// A section of the lesson, in course order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Section {
    Introduction,
    DataPreparation,
    DataPresentation,
    CentralTendency,
    Dispersion,
    StatisticalSoftware,
}

impl Section {
    /// All sections in course order.
    pub const ALL: [Self; 6] = [
        Self::Introduction,
        Self::DataPreparation,
        Self::DataPresentation,
        Self::CentralTendency,
        Self::Dispersion,
        Self::StatisticalSoftware,
    ];

    /// Human-readable section title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Introduction => "Introduction",
            Self::DataPreparation => "Data Preparation",
            Self::DataPresentation => "Data Presentation",
            Self::CentralTendency => "Central Tendency",
            Self::Dispersion => "Dispersion",
            Self::StatisticalSoftware => "Statistical Software",
        }
    }

    /// Zero-based position in course order.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Section at the given course position.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The following section; the last section returns itself.
    #[must_use]
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1).unwrap_or(self)
    }

    /// The preceding section; the first section returns itself.
    #[must_use]
    pub fn prev(self) -> Self {
        match self.index() {
            0 => self,
            index => Self::from_index(index - 1).unwrap_or(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_match_course_order() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
            assert_eq!(Section::from_index(i), Some(*section));
        }
        assert_eq!(Section::from_index(Section::ALL.len()), None);
    }

    #[test]
    fn test_navigation_saturates_at_the_ends() {
        assert_eq!(Section::Introduction.prev(), Section::Introduction);
        assert_eq!(
            Section::StatisticalSoftware.next(),
            Section::StatisticalSoftware
        );
        assert_eq!(Section::Introduction.next(), Section::DataPreparation);
        assert_eq!(Section::Dispersion.prev(), Section::CentralTendency);
    }
}
