//! View models handed to the portfolio presentation layer

use serde::{Deserialize, Serialize};

/// Full mapping output: hero block plus the ordered section list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MappedPortfolio {
    pub hero: HeroViewModel,
    pub sections: Vec<SectionViewModel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeroViewModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
}

/// One rendered page section. `id` is the stable source-section key,
/// `kind` tells the presentation layer which template to use.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionViewModel {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SectionKind,
    pub title: String,
    pub data: SectionData,
}

/// Closed set of rendering hints agreed with the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Paragraph,
    Bento,
    Timeline,
    Projects,
    Certifications,
    Publications,
    Languages,
    Accomplishments,
    Hobbies,
    Courses,
    Contact,
    Memberships,
    Patents,
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SectionKind::Paragraph => "paragraph",
            SectionKind::Bento => "bento",
            SectionKind::Timeline => "timeline",
            SectionKind::Projects => "projects",
            SectionKind::Certifications => "certifications",
            SectionKind::Publications => "publications",
            SectionKind::Languages => "languages",
            SectionKind::Accomplishments => "accomplishments",
            SectionKind::Hobbies => "hobbies",
            SectionKind::Courses => "courses",
            SectionKind::Contact => "contact",
            SectionKind::Memberships => "memberships",
            SectionKind::Patents => "patents",
        };
        write!(f, "{}", name)
    }
}

/// Section payload, one shape per `SectionKind`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SectionData {
    Paragraph(String),
    Bento(Vec<SkillGroupView>),
    Timeline(Vec<TimelineEntry>),
    Projects(Vec<ProjectView>),
    Certifications(Vec<CertificationView>),
    Publications(Vec<PublicationView>),
    Languages(Vec<LanguageView>),
    Accomplishments(Vec<AccomplishmentView>),
    Hobbies(Vec<String>),
    Courses(Vec<CourseView>),
    Contact(Vec<ContactItemView>),
    Memberships(Vec<MembershipView>),
    Patents(Vec<PatentView>),
}

impl SectionData {
    /// Number of entries carried by the payload. Paragraphs count as one.
    pub fn len(&self) -> usize {
        match self {
            SectionData::Paragraph(_) => 1,
            SectionData::Bento(items) => items.len(),
            SectionData::Timeline(items) => items.len(),
            SectionData::Projects(items) => items.len(),
            SectionData::Certifications(items) => items.len(),
            SectionData::Publications(items) => items.len(),
            SectionData::Languages(items) => items.len(),
            SectionData::Accomplishments(items) => items.len(),
            SectionData::Hobbies(items) => items.len(),
            SectionData::Courses(items) => items.len(),
            SectionData::Contact(items) => items.len(),
            SectionData::Memberships(items) => items.len(),
            SectionData::Patents(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub title: String,
    pub subtitle: String,
    pub period: String,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SkillGroupView {
    pub name: String,
    pub icon: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectView {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CertificationView {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PublicationView {
    pub title: String,
    pub publisher: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LanguageView {
    pub language: String,
    pub proficiency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccomplishmentView {
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CourseView {
    pub name: String,
    pub provider: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactItemView {
    pub label: String,
    pub value: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MembershipView {
    pub organization: String,
    pub role: String,
    pub period: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PatentView {
    pub title: String,
    pub number: String,
    pub date: String,
}

/// A quantified accomplishment mined from job-description prose.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedAchievement {
    pub title: String,
    pub description: String,
    pub icon: AchievementIcon,
    pub confidence: f32,
}

/// Coarse category tag for a mined achievement, not a UI icon reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AchievementIcon {
    Award,
    Users,
    Target,
    TrendingUp,
}

impl AchievementIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementIcon::Award => "award",
            AchievementIcon::Users => "users",
            AchievementIcon::Target => "target",
            AchievementIcon::TrendingUp => "trending-up",
        }
    }
}

impl std::fmt::Display for AchievementIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
