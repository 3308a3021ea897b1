//! Composition of the achievement extractor and the section mapper

use crate::config::Config;
use crate::extraction::{badge_summary, AchievementExtractor};
use crate::mapping::mapper::{default_title, map_cv_to_sections, section_order_index};
use crate::model::cv::CvDocument;
use crate::model::view::{
    AccomplishmentView, ExtractedAchievement, MappedPortfolio, SectionData, SectionKind,
    SectionViewModel,
};
use log::debug;

/// Runs the full CV-to-portfolio pipeline: map the document, then optionally
/// mine each experience item's prose and merge the results into the
/// accomplishments section.
pub struct PortfolioPipeline {
    extractor: AchievementExtractor,
    enrich_achievements: bool,
}

impl PortfolioPipeline {
    pub fn new(config: &Config) -> Self {
        Self {
            extractor: AchievementExtractor::with_config(config.extraction.clone()),
            enrich_achievements: config.mapping.enrich_achievements,
        }
    }

    pub fn with_enrichment(mut self, enabled: bool) -> Self {
        self.enrich_achievements = enabled;
        self
    }

    pub fn run(&self, cv: Option<&CvDocument>) -> MappedPortfolio {
        let mut portfolio = map_cv_to_sections(cv);

        if !self.enrich_achievements {
            return portfolio;
        }
        let Some(cv) = cv else {
            return portfolio;
        };

        let mined = self.mine_experience(cv);
        if mined.is_empty() {
            return portfolio;
        }
        debug!("Mined {} achievements from experience prose", mined.len());
        merge_mined(&mut portfolio, &mined);
        portfolio
    }

    /// Run the extractor over each experience item independently. Duplicate
    /// titles across items are kept once.
    pub fn mine_experience(&self, cv: &CvDocument) -> Vec<ExtractedAchievement> {
        let Some(experience) = cv.experience.as_ref() else {
            return Vec::new();
        };

        let mut mined: Vec<ExtractedAchievement> = Vec::new();
        for item in &experience.experience_items {
            let prose = item.responsibilities_and_achievements.join(". ");
            for achievement in self.extractor.extract_achievements(&prose) {
                if mined.iter().any(|existing| existing.title == achievement.title) {
                    continue;
                }
                mined.push(achievement);
            }
        }
        mined
    }
}

impl Default for PortfolioPipeline {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

/// Append mined achievements to the accomplishments section, creating it at
/// its fixed ordering slot when the source CV had none.
fn merge_mined(portfolio: &mut MappedPortfolio, mined: &[ExtractedAchievement]) {
    let views: Vec<AccomplishmentView> = mined
        .iter()
        .map(|achievement| AccomplishmentView {
            title: achievement.title.clone(),
            description: achievement.description.clone(),
            icon: achievement.icon.as_str().to_string(),
            date: None,
            badge: Some(badge_summary(&achievement.title, &achievement.description)),
        })
        .collect();

    if let Some(existing) = portfolio
        .sections
        .iter_mut()
        .find(|section| section.id == "achievements")
    {
        if let SectionData::Accomplishments(items) = &mut existing.data {
            items.extend(views);
        }
        return;
    }

    let slot = section_order_index("achievements");
    let position = portfolio
        .sections
        .iter()
        .position(|section| section_order_index(&section.id) > slot)
        .unwrap_or(portfolio.sections.len());

    portfolio.sections.insert(
        position,
        SectionViewModel {
            id: "achievements".to_string(),
            kind: SectionKind::Accomplishments,
            title: default_title("achievements").to_string(),
            data: SectionData::Accomplishments(views),
        },
    );
}
