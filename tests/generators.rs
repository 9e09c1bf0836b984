//! Integration tests rendering every generator into a temporary directory.

use std::fs;

use ave_docgen::generators::{
    BusinessCase, ClickScript, FullScript, Generator, Playbook, Presentation,
};
use ave_docgen::ooxml::docx::writer::ParagraphAlignment;
use ave_docgen::ooxml::inspect::{BodyBlock, inspect_docx, inspect_pptx};
use ave_docgen::render::Render;
use tempfile::TempDir;

fn generate_document<G: Generator<Document = ave_docgen::Outline>>(generator: G) {
    let dir = TempDir::new().unwrap();
    let path = generator.generate(dir.path()).unwrap();

    assert_eq!(path, dir.path().join(G::FILE_NAME));
    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);

    let outline = generator.build().unwrap();
    let summary = inspect_docx(&path).unwrap();
    assert_eq!(summary.body_element_count(), outline.body_element_count());
    assert_eq!(summary.title.as_deref(), Some(outline.title()));
    outline.verify(&path).unwrap();
}

#[test]
fn test_business_case_file() {
    generate_document(BusinessCase);
}

#[test]
fn test_click_script_file() {
    generate_document(ClickScript);
}

#[test]
fn test_full_script_file() {
    generate_document(FullScript);
}

#[test]
fn test_playbook_file() {
    generate_document(Playbook);
}

#[test]
fn test_presentation_file() {
    let dir = TempDir::new().unwrap();
    let path = Presentation.generate(dir.path()).unwrap();
    assert!(path.ends_with("Eindpresentatie_Stage_AVE_CRM.pptx"));

    let summary = inspect_pptx(&path).unwrap();
    assert_eq!(summary.slide_count(), 12);
    assert_eq!(summary.slide_size, (9_144_000, 6_858_000));
    assert!(summary.slides[0].is_title_slide);
    assert_eq!(summary.slides[0].title, "Eindpresentatie Stage AVE CRM");
    assert_eq!(summary.slides[11].title, "Conclusie");
    Presentation.build().unwrap().verify(&path).unwrap();
}

#[test]
fn test_rendering_is_idempotent() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    for dir in [&first, &second] {
        BusinessCase.generate(dir.path()).unwrap();
        Playbook.generate(dir.path()).unwrap();
        Presentation.generate(dir.path()).unwrap();
    }

    for name in [BusinessCase::FILE_NAME, Playbook::FILE_NAME, Presentation::FILE_NAME] {
        let a = fs::read(first.path().join(name)).unwrap();
        let b = fs::read(second.path().join(name)).unwrap();
        assert_eq!(a, b, "{name} differs between runs");
    }
}

#[test]
fn test_generate_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(BusinessCase::FILE_NAME), b"stale").unwrap();
    let path = BusinessCase.generate(dir.path()).unwrap();
    assert!(inspect_docx(path).is_ok());
}

#[test]
fn test_business_case_scenario() {
    let dir = TempDir::new().unwrap();
    let path = BusinessCase.generate(dir.path()).unwrap();
    let summary = inspect_docx(path).unwrap();
    let paragraphs: Vec<_> = summary.paragraphs().collect();

    // Title block
    assert_eq!(paragraphs[0].style.as_deref(), Some("Title"));
    assert_eq!(paragraphs[0].alignment, Some(ParagraphAlignment::Center));
    assert_eq!(paragraphs[0].text(), "Business Case: AVE CRM Platform");

    // Info paragraph with bold labels
    let info = paragraphs[1];
    assert_eq!(info.alignment, Some(ParagraphAlignment::Right));
    let labels: Vec<_> = info.runs.iter().filter(|r| r.bold).map(|r| r.text.as_str()).collect();
    assert_eq!(labels, vec!["Betreft:", "Datum:"]);

    // Three brand-colored sections
    let sections: Vec<_> = paragraphs
        .iter()
        .filter(|p| p.style.as_deref() == Some("Heading1"))
        .collect();
    assert_eq!(sections.len(), 3);
    for heading in &sections {
        assert!(heading.runs.iter().all(|r| r.color.as_deref() == Some("800400")));
        assert!(heading.runs.iter().all(|r| r.size == Some(28)));
    }

    // Eight bullets, each starting with a bold label
    let bullets: Vec<_> = paragraphs
        .iter()
        .filter(|p| p.style.as_deref() == Some("ListBullet"))
        .collect();
    assert_eq!(bullets.len(), 8);
    assert!(bullets.iter().all(|p| p.runs[0].bold && !p.runs[1].bold));

    // Spacer, then the italic centered footer
    let n = paragraphs.len();
    assert!(paragraphs[n - 2].is_empty());
    let footer = paragraphs[n - 1];
    assert_eq!(footer.alignment, Some(ParagraphAlignment::Center));
    assert!(footer.runs.iter().all(|r| r.italic && r.size == Some(16)));
    assert!(footer.text().starts_with("Vertrouwelijk document"));

    assert_eq!(
        BusinessCase.confirmation(),
        "Document succesvol gegenereerd: AVE_CRM_Business_Case.docx"
    );
}

#[test]
fn test_playbook_table_rows() {
    let dir = TempDir::new().unwrap();
    let path = Playbook.generate(dir.path()).unwrap();
    let summary = inspect_docx(path).unwrap();

    let tables: Vec<_> = summary
        .blocks
        .iter()
        .filter_map(|b| match b {
            BodyBlock::Table(t) => Some(t),
            BodyBlock::Paragraph(_) => None,
        })
        .collect();
    assert_eq!(tables.len(), 1);
    let table = tables[0];
    assert_eq!(table.grid, vec![1440, 6480, 1152]);
    assert_eq!(table.row_cell_counts(), vec![3; 14]);
    assert_eq!(table.rows[0], vec!["Slide", "Kernboodschap & Wat te vertellen", "Tijd"]);
    assert_eq!(table.rows[13][2], "0:30");
}

#[test]
fn test_missing_output_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = ClickScript.generate(&dir.path().join("absent")).unwrap_err();
    assert!(matches!(err, ave_docgen::Error::Io(_)));
}
