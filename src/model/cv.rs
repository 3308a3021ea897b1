//! CV document structures deserialized from the extraction backend's JSON
//!
//! Every section is independently optional. A missing or empty section means
//! "omit it from the rendered portfolio", never an error, so every field here
//! is either an `Option` or a defaulted collection.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CvDocument {
    pub hero: Option<HeroSection>,
    pub contact: Option<ContactSection>,
    pub summary: Option<SummarySection>,
    pub experience: Option<ExperienceSection>,
    pub education: Option<EducationSection>,
    pub skills: Option<SkillsSection>,
    pub projects: Option<ProjectsSection>,
    pub achievements: Option<AchievementsSection>,
    pub certifications: Option<CertificationsSection>,
    pub publications: Option<PublicationsSection>,
    pub speaking_engagements: Option<SpeakingSection>,
    pub languages: Option<LanguagesSection>,
    pub hobbies: Option<HobbiesSection>,
    pub courses: Option<CoursesSection>,
    pub volunteer_work: Option<VolunteerSection>,
    pub patents: Option<PatentsSection>,
    pub memberships: Option<MembershipsSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroSection {
    pub full_name: Option<String>,
    pub job_title: Option<String>,
    pub tagline: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSection {
    pub section_title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub professional_links: Vec<ProfessionalLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfessionalLink {
    pub platform: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummarySection {
    pub section_title: Option<String>,
    pub summary_text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceSection {
    pub section_title: Option<String>,
    pub experience_items: Vec<ExperienceItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceItem {
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub location: Option<Location>,
    pub date_range: Option<DateRange>,
    pub responsibilities_and_achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DateRange {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_current: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationSection {
    pub section_title: Option<String>,
    pub education_items: Vec<EducationItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationItem {
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub institution_name: Option<String>,
    pub location: Option<Location>,
    pub date_range: Option<DateRange>,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillsSection {
    pub section_title: Option<String>,
    pub skill_categories: Vec<SkillCategory>,
    pub ungrouped_skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillCategory {
    pub category_name: Option<String>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectsSection {
    pub section_title: Option<String>,
    pub project_items: Vec<ProjectItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectItem {
    pub project_name: Option<String>,
    pub description: Option<String>,
    pub technologies: Vec<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AchievementsSection {
    pub section_title: Option<String>,
    pub achievement_items: Vec<AchievementItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AchievementItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationsSection {
    pub section_title: Option<String>,
    pub certification_items: Vec<CertificationItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationItem {
    pub name: Option<String>,
    pub issuing_organization: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PublicationsSection {
    pub section_title: Option<String>,
    pub publication_items: Vec<PublicationItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PublicationItem {
    pub title: Option<String>,
    pub publisher: Option<String>,
    pub date: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpeakingSection {
    pub section_title: Option<String>,
    pub speaking_items: Vec<SpeakingItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpeakingItem {
    pub title: Option<String>,
    pub event: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguagesSection {
    pub section_title: Option<String>,
    pub language_items: Vec<LanguageItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageItem {
    pub language: Option<String>,
    pub proficiency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HobbiesSection {
    pub section_title: Option<String>,
    pub hobbies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoursesSection {
    pub section_title: Option<String>,
    pub course_items: Vec<CourseItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseItem {
    pub name: Option<String>,
    pub provider: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VolunteerSection {
    pub section_title: Option<String>,
    pub volunteer_items: Vec<VolunteerItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VolunteerItem {
    pub role: Option<String>,
    pub organization: Option<String>,
    pub date_range: Option<DateRange>,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatentsSection {
    pub section_title: Option<String>,
    pub patent_items: Vec<PatentItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatentItem {
    pub title: Option<String>,
    pub patent_number: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MembershipsSection {
    pub section_title: Option<String>,
    pub membership_items: Vec<MembershipItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MembershipItem {
    pub organization: Option<String>,
    pub role: Option<String>,
    pub date_range: Option<DateRange>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_document_deserializes() {
        let json = r#"{
            "hero": {"fullName": "Jane Doe", "jobTitle": "Engineer"},
            "experience": {
                "sectionTitle": "Work History",
                "experienceItems": [{
                    "jobTitle": "Developer",
                    "companyName": "Acme",
                    "dateRange": {"startDate": "2019", "isCurrent": true}
                }]
            }
        }"#;

        let cv: CvDocument = serde_json::from_str(json).unwrap();
        assert_eq!(cv.hero.as_ref().unwrap().full_name.as_deref(), Some("Jane Doe"));
        assert!(cv.skills.is_none());

        let experience = cv.experience.unwrap();
        assert_eq!(experience.section_title.as_deref(), Some("Work History"));
        assert_eq!(experience.experience_items.len(), 1);

        let range = experience.experience_items[0].date_range.as_ref().unwrap();
        assert_eq!(range.start_date.as_deref(), Some("2019"));
        assert_eq!(range.end_date, None);
        assert_eq!(range.is_current, Some(true));
    }

    #[test]
    fn test_empty_object_is_valid() {
        let cv: CvDocument = serde_json::from_str("{}").unwrap();
        assert_eq!(cv, CvDocument::default());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let json = r#"{"summary": {"summaryText": "Hi", "wordCount": 1}, "theme": "dark"}"#;
        let cv: CvDocument = serde_json::from_str(json).unwrap();
        assert_eq!(cv.summary.unwrap().summary_text.as_deref(), Some("Hi"));
    }
}
