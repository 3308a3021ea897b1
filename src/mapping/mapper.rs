//! CV document to section view-model assembly
//!
//! The mapper is a total function: a missing, empty, or malformed source
//! section is simply omitted from the output list, never an error. Output
//! order is fixed by the traversal below, independent of source key order.

use crate::mapping::format::{format_date_range, format_location, join_non_empty};
use crate::mapping::icons::{platform_icon, skill_category_icon};
use crate::model::cv::*;
use crate::model::view::*;

/// Fixed traversal order of the output section list.
pub const SECTION_ORDER: &[&str] = &[
    "summary",
    "skills",
    "experience",
    "projects",
    "education",
    "certifications",
    "publications",
    "speaking",
    "languages",
    "achievements",
    "hobbies",
    "courses",
    "volunteer",
    "patents",
    "memberships",
    "contact",
];

/// Fallback headings used when the source provides no section title.
const DEFAULT_SECTION_TITLES: &[(&str, &str)] = &[
    ("summary", "Summary"),
    ("skills", "Skills"),
    ("experience", "Experience"),
    ("projects", "Projects"),
    ("education", "Education"),
    ("certifications", "Certifications"),
    ("publications", "Publications"),
    ("speaking", "Speaking Engagements"),
    ("languages", "Languages"),
    ("achievements", "Achievements"),
    ("hobbies", "Hobbies"),
    ("courses", "Courses"),
    ("volunteer", "Volunteer Work"),
    ("patents", "Patents"),
    ("memberships", "Memberships"),
    ("contact", "Contact"),
];

pub fn default_title(section_id: &str) -> &'static str {
    DEFAULT_SECTION_TITLES
        .iter()
        .find(|(id, _)| *id == section_id)
        .map(|(_, title)| *title)
        .unwrap_or("Details")
}

/// Position of a section id in the fixed output order. Unknown ids sort last.
pub fn section_order_index(section_id: &str) -> usize {
    SECTION_ORDER
        .iter()
        .position(|id| *id == section_id)
        .unwrap_or(SECTION_ORDER.len())
}

fn title_for(section_id: &str, source_title: Option<&String>) -> String {
    match source_title.map(|title| title.trim()) {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => default_title(section_id).to_string(),
    }
}

/// Map a CV document into the hero block and ordered section list the
/// presentation layer renders. `None` degrades to an empty portfolio.
pub fn map_cv_to_sections(cv: Option<&CvDocument>) -> MappedPortfolio {
    let Some(cv) = cv else {
        return MappedPortfolio::default();
    };

    let hero = cv
        .hero
        .as_ref()
        .map(|hero| HeroViewModel {
            name: hero.full_name.clone(),
            title: hero.job_title.clone(),
            tagline: hero.tagline.clone(),
        })
        .unwrap_or_default();

    let mut sections = Vec::new();
    let mut push = |section: Option<SectionViewModel>| {
        if let Some(section) = section {
            sections.push(section);
        }
    };

    push(cv.summary.as_ref().and_then(map_summary));
    push(cv.skills.as_ref().and_then(map_skills));
    push(cv.experience.as_ref().and_then(map_experience));
    push(cv.projects.as_ref().and_then(map_projects));
    push(cv.education.as_ref().and_then(map_education));
    push(cv.certifications.as_ref().and_then(map_certifications));
    push(cv.publications.as_ref().and_then(map_publications));
    push(cv.speaking_engagements.as_ref().and_then(map_speaking));
    push(cv.languages.as_ref().and_then(map_languages));
    push(cv.achievements.as_ref().and_then(map_achievements));
    push(cv.hobbies.as_ref().and_then(map_hobbies));
    push(cv.courses.as_ref().and_then(map_courses));
    push(cv.volunteer_work.as_ref().and_then(map_volunteer));
    push(cv.patents.as_ref().and_then(map_patents));
    push(cv.memberships.as_ref().and_then(map_memberships));
    push(cv.contact.as_ref().and_then(map_contact));

    MappedPortfolio { hero, sections }
}

fn section(id: &str, kind: SectionKind, source_title: Option<&String>, data: SectionData) -> SectionViewModel {
    SectionViewModel {
        id: id.to_string(),
        kind,
        title: title_for(id, source_title),
        data,
    }
}

fn map_summary(source: &SummarySection) -> Option<SectionViewModel> {
    let text = source.summary_text.as_deref()?.trim();
    if text.is_empty() {
        return None;
    }
    Some(section(
        "summary",
        SectionKind::Paragraph,
        source.section_title.as_ref(),
        SectionData::Paragraph(text.to_string()),
    ))
}

fn map_skills(source: &SkillsSection) -> Option<SectionViewModel> {
    let mut groups: Vec<SkillGroupView> = source
        .skill_categories
        .iter()
        .filter(|category| !category.skills.is_empty())
        .map(|category| {
            let name = category
                .category_name
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .unwrap_or("Skills")
                .to_string();
            SkillGroupView {
                icon: skill_category_icon(&name).to_string(),
                name,
                skills: category.skills.clone(),
            }
        })
        .collect();

    // Loose skills become a synthetic trailing category
    if !source.ungrouped_skills.is_empty() {
        groups.push(SkillGroupView {
            name: "Additional Skills".to_string(),
            icon: skill_category_icon("Additional Skills").to_string(),
            skills: source.ungrouped_skills.clone(),
        });
    }

    if groups.is_empty() {
        return None;
    }
    Some(section(
        "skills",
        SectionKind::Bento,
        source.section_title.as_ref(),
        SectionData::Bento(groups),
    ))
}

fn map_experience(source: &ExperienceSection) -> Option<SectionViewModel> {
    if source.experience_items.is_empty() {
        return None;
    }
    let entries = source
        .experience_items
        .iter()
        .map(|item| TimelineEntry {
            title: item.job_title.clone().unwrap_or_default(),
            subtitle: join_non_empty(&[
                item.company_name.as_deref().unwrap_or(""),
                &format_location(item.location.as_ref()),
            ]),
            period: format_date_range(item.date_range.as_ref()),
            details: item.responsibilities_and_achievements.clone(),
        })
        .collect();
    Some(section(
        "experience",
        SectionKind::Timeline,
        source.section_title.as_ref(),
        SectionData::Timeline(entries),
    ))
}

fn map_projects(source: &ProjectsSection) -> Option<SectionViewModel> {
    if source.project_items.is_empty() {
        return None;
    }
    let projects = source
        .project_items
        .iter()
        .map(|item| ProjectView {
            title: item.project_name.clone().unwrap_or_default(),
            description: item.description.clone().unwrap_or_default(),
            tags: item.technologies.clone(),
            link: item.link.clone(),
        })
        .collect();
    Some(section(
        "projects",
        SectionKind::Projects,
        source.section_title.as_ref(),
        SectionData::Projects(projects),
    ))
}

fn map_education(source: &EducationSection) -> Option<SectionViewModel> {
    if source.education_items.is_empty() {
        return None;
    }
    let entries = source
        .education_items
        .iter()
        .map(|item| {
            let title = match (item.degree.as_deref(), item.field_of_study.as_deref()) {
                (Some(degree), Some(field)) => join_non_empty(&[degree, field]),
                (Some(degree), None) => degree.trim().to_string(),
                (None, Some(field)) => field.trim().to_string(),
                (None, None) => String::new(),
            };
            TimelineEntry {
                title,
                subtitle: join_non_empty(&[
                    item.institution_name.as_deref().unwrap_or(""),
                    &format_location(item.location.as_ref()),
                ]),
                period: format_date_range(item.date_range.as_ref()),
                details: item.details.clone(),
            }
        })
        .collect();
    Some(section(
        "education",
        SectionKind::Timeline,
        source.section_title.as_ref(),
        SectionData::Timeline(entries),
    ))
}

fn map_certifications(source: &CertificationsSection) -> Option<SectionViewModel> {
    if source.certification_items.is_empty() {
        return None;
    }
    let certifications = source
        .certification_items
        .iter()
        .map(|item| CertificationView {
            name: item.name.clone().unwrap_or_default(),
            issuer: item.issuing_organization.clone().unwrap_or_default(),
            date: item.date.clone().unwrap_or_default(),
        })
        .collect();
    Some(section(
        "certifications",
        SectionKind::Certifications,
        source.section_title.as_ref(),
        SectionData::Certifications(certifications),
    ))
}

fn map_publications(source: &PublicationsSection) -> Option<SectionViewModel> {
    if source.publication_items.is_empty() {
        return None;
    }
    let publications = source
        .publication_items
        .iter()
        .map(|item| PublicationView {
            title: item.title.clone().unwrap_or_default(),
            publisher: item.publisher.clone().unwrap_or_default(),
            date: item.date.clone().unwrap_or_default(),
            link: item.link.clone(),
        })
        .collect();
    Some(section(
        "publications",
        SectionKind::Publications,
        source.section_title.as_ref(),
        SectionData::Publications(publications),
    ))
}

fn map_speaking(source: &SpeakingSection) -> Option<SectionViewModel> {
    if source.speaking_items.is_empty() {
        return None;
    }
    // No dedicated rendering type for talks; the timeline template fits
    let entries = source
        .speaking_items
        .iter()
        .map(|item| TimelineEntry {
            title: item.title.clone().unwrap_or_default(),
            subtitle: item.event.clone().unwrap_or_default(),
            period: item.date.clone().unwrap_or_default(),
            details: Vec::new(),
        })
        .collect();
    Some(section(
        "speaking",
        SectionKind::Timeline,
        source.section_title.as_ref(),
        SectionData::Timeline(entries),
    ))
}

fn map_languages(source: &LanguagesSection) -> Option<SectionViewModel> {
    if source.language_items.is_empty() {
        return None;
    }
    let languages = source
        .language_items
        .iter()
        .map(|item| LanguageView {
            language: item.language.clone().unwrap_or_default(),
            proficiency: item.proficiency.clone().unwrap_or_default(),
        })
        .collect();
    Some(section(
        "languages",
        SectionKind::Languages,
        source.section_title.as_ref(),
        SectionData::Languages(languages),
    ))
}

fn map_achievements(source: &AchievementsSection) -> Option<SectionViewModel> {
    if source.achievement_items.is_empty() {
        return None;
    }
    let accomplishments = source
        .achievement_items
        .iter()
        .map(|item| AccomplishmentView {
            title: item.title.clone().unwrap_or_default(),
            description: item.description.clone().unwrap_or_default(),
            icon: "award".to_string(),
            date: item.date.clone(),
            badge: None,
        })
        .collect();
    Some(section(
        "achievements",
        SectionKind::Accomplishments,
        source.section_title.as_ref(),
        SectionData::Accomplishments(accomplishments),
    ))
}

fn map_hobbies(source: &HobbiesSection) -> Option<SectionViewModel> {
    let hobbies: Vec<String> = source
        .hobbies
        .iter()
        .map(|hobby| hobby.trim().to_string())
        .filter(|hobby| !hobby.is_empty())
        .collect();
    if hobbies.is_empty() {
        return None;
    }
    Some(section(
        "hobbies",
        SectionKind::Hobbies,
        source.section_title.as_ref(),
        SectionData::Hobbies(hobbies),
    ))
}

fn map_courses(source: &CoursesSection) -> Option<SectionViewModel> {
    if source.course_items.is_empty() {
        return None;
    }
    let courses = source
        .course_items
        .iter()
        .map(|item| CourseView {
            name: item.name.clone().unwrap_or_default(),
            provider: item.provider.clone().unwrap_or_default(),
            date: item.date.clone().unwrap_or_default(),
        })
        .collect();
    Some(section(
        "courses",
        SectionKind::Courses,
        source.section_title.as_ref(),
        SectionData::Courses(courses),
    ))
}

fn map_volunteer(source: &VolunteerSection) -> Option<SectionViewModel> {
    if source.volunteer_items.is_empty() {
        return None;
    }
    let entries = source
        .volunteer_items
        .iter()
        .map(|item| TimelineEntry {
            title: item.role.clone().unwrap_or_default(),
            subtitle: item.organization.clone().unwrap_or_default(),
            period: format_date_range(item.date_range.as_ref()),
            details: item.details.clone(),
        })
        .collect();
    Some(section(
        "volunteer",
        SectionKind::Timeline,
        source.section_title.as_ref(),
        SectionData::Timeline(entries),
    ))
}

fn map_patents(source: &PatentsSection) -> Option<SectionViewModel> {
    if source.patent_items.is_empty() {
        return None;
    }
    let patents = source
        .patent_items
        .iter()
        .map(|item| PatentView {
            title: item.title.clone().unwrap_or_default(),
            number: item.patent_number.clone().unwrap_or_default(),
            date: item.date.clone().unwrap_or_default(),
        })
        .collect();
    Some(section(
        "patents",
        SectionKind::Patents,
        source.section_title.as_ref(),
        SectionData::Patents(patents),
    ))
}

fn map_memberships(source: &MembershipsSection) -> Option<SectionViewModel> {
    if source.membership_items.is_empty() {
        return None;
    }
    let memberships = source
        .membership_items
        .iter()
        .map(|item| MembershipView {
            organization: item.organization.clone().unwrap_or_default(),
            role: item.role.clone().unwrap_or_default(),
            period: format_date_range(item.date_range.as_ref()),
        })
        .collect();
    Some(section(
        "memberships",
        SectionKind::Memberships,
        source.section_title.as_ref(),
        SectionData::Memberships(memberships),
    ))
}

fn map_contact(source: &ContactSection) -> Option<SectionViewModel> {
    let mut items = Vec::new();

    if let Some(email) = non_empty(source.email.as_deref()) {
        items.push(ContactItemView {
            label: "Email".to_string(),
            value: email.to_string(),
            icon: "mail".to_string(),
        });
    }
    if let Some(phone) = non_empty(source.phone.as_deref()) {
        items.push(ContactItemView {
            label: "Phone".to_string(),
            value: phone.to_string(),
            icon: "phone".to_string(),
        });
    }
    if let Some(location) = non_empty(source.location.as_deref()) {
        items.push(ContactItemView {
            label: "Location".to_string(),
            value: location.to_string(),
            icon: "map-pin".to_string(),
        });
    }
    for link in &source.professional_links {
        let Some(url) = non_empty(link.url.as_deref()) else {
            continue;
        };
        let platform = non_empty(link.platform.as_deref()).unwrap_or("Website");
        items.push(ContactItemView {
            label: platform.to_string(),
            value: url.to_string(),
            icon: platform_icon(platform).to_string(),
        });
    }

    if items.is_empty() {
        return None;
    }
    Some(section(
        "contact",
        SectionKind::Contact,
        source.section_title.as_ref(),
        SectionData::Contact(items),
    ))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cv_with_experience(count: usize) -> CvDocument {
        CvDocument {
            experience: Some(ExperienceSection {
                section_title: None,
                experience_items: (0..count)
                    .map(|i| ExperienceItem {
                        job_title: Some(format!("Engineer {}", i)),
                        company_name: Some("Acme".to_string()),
                        ..Default::default()
                    })
                    .collect(),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_none_maps_to_empty_portfolio() {
        let portfolio = map_cv_to_sections(None);
        assert_eq!(portfolio.hero, HeroViewModel::default());
        assert!(portfolio.sections.is_empty());
    }

    #[test]
    fn test_null_skills_and_two_experience_items() {
        let cv = cv_with_experience(2);
        let portfolio = map_cv_to_sections(Some(&cv));

        assert!(portfolio.sections.iter().all(|s| s.id != "skills"));
        let experience: Vec<_> = portfolio
            .sections
            .iter()
            .filter(|s| s.id == "experience")
            .collect();
        assert_eq!(experience.len(), 1);
        assert_eq!(experience[0].data.len(), 2);
        assert_eq!(experience[0].kind, SectionKind::Timeline);
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let cv = CvDocument {
            skills: Some(SkillsSection::default()),
            projects: Some(ProjectsSection::default()),
            summary: Some(SummarySection {
                section_title: None,
                summary_text: Some("   ".to_string()),
            }),
            ..Default::default()
        };
        let portfolio = map_cv_to_sections(Some(&cv));
        assert!(portfolio.sections.is_empty());
    }

    #[test]
    fn test_default_titles_applied() {
        let cv = cv_with_experience(1);
        let portfolio = map_cv_to_sections(Some(&cv));
        assert_eq!(portfolio.sections[0].title, "Experience");
    }

    #[test]
    fn test_source_title_preserved() {
        let mut cv = cv_with_experience(1);
        cv.experience.as_mut().unwrap().section_title = Some("Work History".to_string());
        let portfolio = map_cv_to_sections(Some(&cv));
        assert_eq!(portfolio.sections[0].title, "Work History");
    }

    #[test]
    fn test_experience_subtitle_and_period() {
        let cv = CvDocument {
            experience: Some(ExperienceSection {
                section_title: None,
                experience_items: vec![ExperienceItem {
                    job_title: Some("Data Engineer".to_string()),
                    company_name: Some("Initech".to_string()),
                    location: Some(Location {
                        city: Some("Boston".to_string()),
                        state: None,
                        country: Some("United States".to_string()),
                    }),
                    date_range: Some(DateRange {
                        start_date: Some("2019".to_string()),
                        end_date: None,
                        is_current: Some(true),
                    }),
                    responsibilities_and_achievements: vec!["Built pipelines".to_string()],
                }],
            }),
            ..Default::default()
        };

        let portfolio = map_cv_to_sections(Some(&cv));
        let SectionData::Timeline(entries) = &portfolio.sections[0].data else {
            panic!("expected timeline data");
        };
        assert_eq!(entries[0].subtitle, "Initech, Boston, United States");
        assert_eq!(entries[0].period, "2019 — Present");
        assert_eq!(entries[0].details, vec!["Built pipelines".to_string()]);
    }

    #[test]
    fn test_skills_merge_ungrouped() {
        let cv = CvDocument {
            skills: Some(SkillsSection {
                section_title: None,
                skill_categories: vec![SkillCategory {
                    category_name: Some("Programming Languages".to_string()),
                    skills: vec!["Rust".to_string(), "Python".to_string()],
                }],
                ungrouped_skills: vec!["Public Speaking".to_string()],
            }),
            ..Default::default()
        };

        let portfolio = map_cv_to_sections(Some(&cv));
        let SectionData::Bento(groups) = &portfolio.sections[0].data else {
            panic!("expected bento data");
        };
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].icon, "code");
        assert_eq!(groups[1].name, "Additional Skills");
        assert_eq!(groups[1].skills, vec!["Public Speaking".to_string()]);
    }

    #[test]
    fn test_contact_items_conditional() {
        let cv = CvDocument {
            contact: Some(ContactSection {
                section_title: None,
                email: Some("jane@example.com".to_string()),
                phone: None,
                location: Some("Berlin".to_string()),
                professional_links: vec![
                    ProfessionalLink {
                        platform: Some("LinkedIn".to_string()),
                        url: Some("https://linkedin.com/in/jane".to_string()),
                    },
                    ProfessionalLink {
                        platform: Some("Blog".to_string()),
                        url: None,
                    },
                ],
            }),
            ..Default::default()
        };

        let portfolio = map_cv_to_sections(Some(&cv));
        let SectionData::Contact(items) = &portfolio.sections[0].data else {
            panic!("expected contact data");
        };
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].label, "Email");
        assert_eq!(items[1].label, "Location");
        assert_eq!(items[2].icon, "linkedin");
    }

    #[test]
    fn test_fixed_section_ordering() {
        let cv = CvDocument {
            contact: Some(ContactSection {
                email: Some("a@b.c".to_string()),
                ..Default::default()
            }),
            summary: Some(SummarySection {
                section_title: None,
                summary_text: Some("Engineer with a decade of experience.".to_string()),
            }),
            experience: cv_with_experience(1).experience,
            languages: Some(LanguagesSection {
                section_title: None,
                language_items: vec![LanguageItem {
                    language: Some("German".to_string()),
                    proficiency: Some("C1".to_string()),
                }],
            }),
            ..Default::default()
        };

        let portfolio = map_cv_to_sections(Some(&cv));
        let ids: Vec<&str> = portfolio.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["summary", "experience", "languages", "contact"]);
    }

    #[test]
    fn test_hero_passthrough() {
        let cv = CvDocument {
            hero: Some(HeroSection {
                full_name: Some("Jane Doe".to_string()),
                job_title: Some("Engineer".to_string()),
                tagline: None,
            }),
            ..Default::default()
        };
        let portfolio = map_cv_to_sections(Some(&cv));
        assert_eq!(portfolio.hero.name.as_deref(), Some("Jane Doe"));
        assert_eq!(portfolio.hero.tagline, None);
    }

    #[test]
    fn test_section_order_index() {
        assert!(section_order_index("summary") < section_order_index("contact"));
        assert_eq!(section_order_index("unknown"), SECTION_ORDER.len());
    }
}
