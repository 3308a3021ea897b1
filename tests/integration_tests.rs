//! Integration tests for the portfolio mapping pipeline

use portfolio_mapper::config::Config;
use portfolio_mapper::mapping::map_cv_to_sections;
use portfolio_mapper::model::cv::CvDocument;
use portfolio_mapper::model::view::{SectionData, SectionKind};
use portfolio_mapper::pipeline::PortfolioPipeline;
use std::path::Path;

fn load_fixture() -> CvDocument {
    let raw = std::fs::read_to_string(Path::new("tests/fixtures/sample_cv.json"))
        .expect("fixture should exist");
    serde_json::from_str(&raw).expect("fixture should deserialize")
}

#[test]
fn test_fixture_maps_to_ordered_sections() {
    let cv = load_fixture();
    let portfolio = map_cv_to_sections(Some(&cv));

    let ids: Vec<&str> = portfolio.sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["summary", "skills", "experience", "education", "languages", "contact"]
    );

    assert_eq!(portfolio.hero.name.as_deref(), Some("Jordan Alvarez"));
    assert_eq!(portfolio.sections[0].title, "About Me");
    assert_eq!(portfolio.sections[1].title, "Skills");
}

#[test]
fn test_fixture_experience_details() {
    let cv = load_fixture();
    let portfolio = map_cv_to_sections(Some(&cv));

    let experience = portfolio
        .sections
        .iter()
        .find(|s| s.id == "experience")
        .expect("experience section");
    assert_eq!(experience.kind, SectionKind::Timeline);

    let SectionData::Timeline(entries) = &experience.data else {
        panic!("expected timeline data");
    };
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].subtitle, "Northwind Analytics, Boston, United States");
    assert_eq!(entries[0].period, "2021 — Present");
    assert_eq!(entries[1].period, "2017 — 2021");
}

#[test]
fn test_fixture_skills_include_synthetic_category() {
    let cv = load_fixture();
    let portfolio = map_cv_to_sections(Some(&cv));

    let skills = portfolio
        .sections
        .iter()
        .find(|s| s.id == "skills")
        .expect("skills section");
    let SectionData::Bento(groups) = &skills.data else {
        panic!("expected bento data");
    };

    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0].icon, "code");
    assert_eq!(groups[1].icon, "cloud");
    assert_eq!(groups[2].name, "Additional Skills");
}

#[test]
fn test_pipeline_enriches_achievements_from_experience() {
    let cv = load_fixture();
    let pipeline = PortfolioPipeline::new(&Config::default());
    let portfolio = pipeline.run(Some(&cv));

    let ids: Vec<&str> = portfolio.sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "summary",
            "skills",
            "experience",
            "education",
            "languages",
            "achievements",
            "contact"
        ]
    );

    let achievements = portfolio
        .sections
        .iter()
        .find(|s| s.id == "achievements")
        .expect("achievements section");
    let SectionData::Accomplishments(items) = &achievements.data else {
        panic!("expected accomplishments data");
    };

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "Led Team of 6 People");
    assert_eq!(items[0].icon, "users");
    assert_eq!(items[1].title, "Reduced Warehouse Costs by 35%");
    assert_eq!(items[1].icon, "trending-up");
    for item in items {
        assert!(item.badge.is_some());
    }
}

#[test]
fn test_section_order_ignores_source_key_order() {
    let reordered = r#"{
        "contact": { "email": "jordan@example.com" },
        "languages": { "languageItems": [{ "language": "Spanish", "proficiency": "Native" }] },
        "summary": { "summaryText": "Engineer with a long history of shipping things." }
    }"#;

    let cv: CvDocument = serde_json::from_str(reordered).unwrap();
    let portfolio = map_cv_to_sections(Some(&cv));
    let ids: Vec<&str> = portfolio.sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["summary", "languages", "contact"]);
}

#[test]
fn test_missing_document_degrades_to_empty_output() {
    let portfolio = map_cv_to_sections(None);
    assert!(portfolio.sections.is_empty());

    let value = serde_json::to_value(&portfolio).unwrap();
    assert_eq!(value["hero"], serde_json::json!({}));
    assert_eq!(value["sections"], serde_json::json!([]));
}

#[test]
fn test_serialized_output_contract() {
    let cv = load_fixture();
    let portfolio = map_cv_to_sections(Some(&cv));
    let value = serde_json::to_value(&portfolio).unwrap();

    let allowed_kinds = [
        "paragraph",
        "bento",
        "timeline",
        "projects",
        "certifications",
        "publications",
        "languages",
        "accomplishments",
        "hobbies",
        "courses",
        "contact",
        "memberships",
        "patents",
    ];

    for section in value["sections"].as_array().unwrap() {
        let kind = section["type"].as_str().unwrap();
        assert!(allowed_kinds.contains(&kind), "unexpected kind: {}", kind);
        assert!(section["id"].is_string());
        assert!(section["title"].is_string());
    }
}
