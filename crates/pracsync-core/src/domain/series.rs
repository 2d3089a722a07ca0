//! Practice series (board groups) that can be synchronized.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A logical partition of the practice board.
///
/// Each series corresponds to exactly one group on the board; the group
/// title returned by [`Series::label`] is matched verbatim against items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Series {
    HighSchoolCore,
    MiddleSchoolCore,
    ElementaryCore,
    EarlyLearningCore,
    Transition,
    SchoolSafety,
    CounselorSeries,
    SoundPractices,
}

/// Error returned when parsing an unknown series key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown series '{0}'")]
pub struct UnknownSeries(pub String);

impl Series {
    /// Every series, in the order they are presented to users.
    pub const ALL: [Self; 8] = [
        Self::HighSchoolCore,
        Self::MiddleSchoolCore,
        Self::ElementaryCore,
        Self::EarlyLearningCore,
        Self::Transition,
        Self::SchoolSafety,
        Self::CounselorSeries,
        Self::SoundPractices,
    ];

    /// Stable selector key (e.g. `elementary_core`).
    pub const fn key(self) -> &'static str {
        match self {
            Self::HighSchoolCore => "high_school_core",
            Self::MiddleSchoolCore => "middle_school_core",
            Self::ElementaryCore => "elementary_core",
            Self::EarlyLearningCore => "early_learning_core",
            Self::Transition => "transition",
            Self::SchoolSafety => "school_safety",
            Self::CounselorSeries => "counselor_series",
            Self::SoundPractices => "sound_practices",
        }
    }

    /// Group title on the board (e.g. `Elementary Core`).
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighSchoolCore => "High School Core",
            Self::MiddleSchoolCore => "Middle School Core",
            Self::ElementaryCore => "Elementary Core",
            Self::EarlyLearningCore => "Early Learning Core",
            Self::Transition => "Transition Practices",
            Self::SchoolSafety => "School Safety Series",
            Self::CounselorSeries => "Counselor Series",
            Self::SoundPractices => "Sound Practices",
        }
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Series {
    type Err = UnknownSeries;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|series| series.key() == s)
            .ok_or_else(|| UnknownSeries(s.to_string()))
    }
}
