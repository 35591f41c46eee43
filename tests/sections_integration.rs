//! Integration tests for section extraction and section-based indexing

mod common;

use common::{system, system_with};
use ragmatch::sections::{JobSection, ResumeSection};
use ragmatch::RagConfig;
use serde_json::json;

const RESUME: &str = "SUMMARY: I build systems.\nEXPERIENCE: Acme Corp, 2020-2023. Did X, Y, Z.";

const JOB: &str = "\
Acme Corp is hiring a backend engineer.

Responsibilities
Design and operate payment services
Review code from teammates

Requirements
Five years writing Rust or Go
Comfort with Linux servers

Benefits: Remote work and a learning budget";

#[test]
fn test_resume_sections_split_on_headers() {
    let (rag, _) = system();
    let sections = rag.extract_resume_sections(RESUME).unwrap();

    assert_eq!(sections.names(), vec!["experience", "summary"]);
    assert_eq!(sections.label(ResumeSection::Summary), Some("I build systems."));
    assert_eq!(
        sections.get("experience"),
        Some("Acme Corp, 2020-2023. Did X, Y, Z.")
    );
    assert!(sections.header().is_none());
}

#[test]
fn test_leading_lines_go_to_header() {
    let (rag, _) = system();
    let text = "Jane Doe\njane@example.com\n\nEXPERIENCE\nAcme Corp\nGlobex Inc";
    let sections = rag.extract_resume_sections(text).unwrap();

    assert_eq!(sections.header(), Some("Jane Doe\njane@example.com"));
    assert_eq!(sections.label(ResumeSection::Experience), Some("Acme Corp\nGlobex Inc"));
    assert_eq!(sections.len(), 2);
}

#[test]
fn test_repeated_label_is_concatenated() {
    let (rag, _) = system();
    let text = "SKILLS: Rust\nSQL\nTechnical Skills\nKubernetes";
    let sections = rag.extract_resume_sections(text).unwrap();

    assert_eq!(sections.label(ResumeSection::Skills), Some("Rust\nSQL\nKubernetes"));
    assert_eq!(sections.len(), 1);
}

#[test]
fn test_long_lines_are_never_headers() {
    let (rag, _) = system();
    let text = "SUMMARY\nTen years of professional experience building distributed payment platforms";
    let sections = rag.extract_resume_sections(text).unwrap();

    assert_eq!(sections.names(), vec!["summary"]);
    assert!(sections.label(ResumeSection::Summary).unwrap().contains("professional experience"));
}

#[test]
fn test_empty_sections_are_omitted() {
    let (rag, _) = system();
    let text = "EDUCATION\n\nSKILLS\nRust";
    let sections = rag.extract_resume_sections(text).unwrap();

    assert!(sections.label(ResumeSection::Education).is_none());
    assert_eq!(sections.label(ResumeSection::Skills), Some("Rust"));
}

#[test]
fn test_empty_text_has_no_sections() {
    let (rag, _) = system();
    assert!(rag.extract_resume_sections("").unwrap().is_empty());
    assert!(rag.extract_job_sections("\n\n").unwrap().is_empty());
}

#[test]
fn test_threshold_above_every_score_labels_nothing() {
    let mut config = RagConfig::default();
    config.classifier.threshold = 1.0;
    let (rag, _) = system_with(config);

    let sections = rag.extract_resume_sections(RESUME).unwrap();

    assert_eq!(sections.names(), vec!["header"]);
    assert_eq!(sections.header(), Some(RESUME));
}

#[test]
fn test_job_sections() {
    let (rag, _) = system();
    let sections = rag.extract_job_sections(JOB).unwrap();

    assert_eq!(sections.header(), Some("Acme Corp is hiring a backend engineer."));
    assert_eq!(
        sections.label(JobSection::Responsibilities),
        Some("Design and operate payment services\nReview code from teammates")
    );
    assert_eq!(
        sections.label(JobSection::Requirements),
        Some("Five years writing Rust or Go\nComfort with Linux servers")
    );
    assert_eq!(sections.label(JobSection::Benefits), Some("Remote work and a learning budget"));
}

#[test]
fn test_sections_serialize_as_plain_map() {
    let (rag, _) = system();
    let sections = rag.extract_resume_sections(RESUME).unwrap();

    let value = serde_json::to_value(&sections).unwrap();
    assert_eq!(
        value,
        json!({
            "experience": "Acme Corp, 2020-2023. Did X, Y, Z.",
            "summary": "I build systems."
        })
    );
}

#[test]
fn test_job_requirements_index_tags_chunks() {
    let (mut rag, _) = system();
    rag.add_documents(&["stale passage from an earlier session"], &[]).unwrap();

    let added = rag.build_job_requirements_index(JOB).unwrap();

    // header, responsibilities, requirements, benefits, full document
    assert_eq!(added, 5);
    assert_eq!(rag.get_stats().total_chunks, 5);

    let results = rag.search("Five years writing Rust or Go", 5).unwrap();
    assert_eq!(results.len(), 5);
    assert!(results.iter().all(|r| r.text != "stale passage from an earlier session"));

    let full: Vec<_> = results
        .iter()
        .filter(|r| r.metadata["type"] == json!("full_document"))
        .collect();
    assert_eq!(full.len(), 1);
    assert_eq!(full[0].text, JOB);

    let requirements = results
        .iter()
        .find(|r| r.metadata.get("label") == Some(&json!("requirements")))
        .expect("requirements section indexed");
    assert_eq!(requirements.metadata["type"], json!("section"));
    assert_eq!(requirements.metadata["source"], json!("document"));
    assert_eq!(requirements.text, "Five years writing Rust or Go\nComfort with Linux servers");
}

#[test]
fn test_job_context_for_resume() {
    let (mut rag, _) = system();
    rag.build_job_requirements_index(JOB).unwrap();

    let context = rag
        .get_context_for_query("Five years writing Rust or Go", 2, 2000)
        .unwrap();

    assert!(context.contains("Five years writing Rust or Go"));
    assert!(context.chars().count() <= 2000);
}

#[test]
fn test_rebuilding_replaces_previous_sections() {
    let (mut rag, _) = system();
    rag.build_job_requirements_index(JOB).unwrap();

    let added = rag
        .build_job_requirements_index("Responsibilities\nWater the office plants")
        .unwrap();

    assert_eq!(added, 2);
    assert_eq!(rag.get_stats().total_chunks, 2);
}

#[test]
fn test_section_reference_index() {
    let (mut rag, _) = system();
    let added = rag.build_section_reference_index().unwrap();

    assert!(added > 0);
    assert_eq!(rag.get_stats().total_chunks, added);

    let results = rag.search("VOLUNTEER EXPERIENCE: Red Cross - Coordinator, 2022. Organized donation drives.", 1).unwrap();
    assert_eq!(results[0].metadata["type"], json!("section_example"));
    assert_eq!(results[0].metadata["section"], json!("volunteer"));
}
