/// Pre-computed verdict on whether applying to a posting is advisable.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SuitabilityInfo {
    pub suitable: bool,
    pub message: String,
    pub emoji: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuitabilityTheme {
    Favorable,
    Unfavorable,
}

impl SuitabilityTheme {
    pub fn class_name(self) -> &'static str {
        match self {
            SuitabilityTheme::Favorable => "score-card--favorable",
            SuitabilityTheme::Unfavorable => "score-card--unfavorable",
        }
    }

    pub fn accent(self) -> &'static str {
        match self {
            SuitabilityTheme::Favorable => "#2563eb",
            SuitabilityTheme::Unfavorable => "#dc2626",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            SuitabilityTheme::Favorable => "#eff6ff",
            SuitabilityTheme::Unfavorable => "#fef2f2",
        }
    }
}

impl SuitabilityInfo {
    pub fn theme(&self) -> SuitabilityTheme {
        if self.suitable {
            SuitabilityTheme::Favorable
        } else {
            SuitabilityTheme::Unfavorable
        }
    }

    pub fn headline(&self) -> String {
        format!("이 공고에 지원하기 {}합니다!", self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Strength {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Weakness {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub content: String,
}

/// Everything the matching service produced for one posting.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub suitability_info: SuitabilityInfo,
    #[serde(default)]
    pub strengths: Vec<Strength>,
    #[serde(default)]
    pub weaknesses: Vec<Weakness>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}
