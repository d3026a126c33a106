use cv_render::core::traversal::{SectionKind, CANONICAL_ORDER};
use cv_render::render::NodeRole;
use cv_render::{
    list_available_templates, render_pdf_document, render_pdf_document_with, render_preview,
    render_preview_html, CvProfile, Locale, PdfNode, RenderConfig, TemplateId,
};
use scraper::{Html, Selector};
use serde_json::json;

const TEMPLATES: [&str; 3] = ["modern", "classic", "minimal"];

fn alice() -> CvProfile {
    serde_json::from_value(json!({
        "personalInfo": { "fullName": "Alice Tran", "email": "a@x.com" },
        "education": [],
        "experience": [
            { "company": "Acme", "position": "Engineer", "startDate": "2020-01-01", "endDate": "" }
        ],
        "skills": [ { "name": "Go", "level": "Expert" } ],
        "languages": [],
        "projects": [],
        "certificates": [],
        "awards": []
    }))
    .unwrap()
}

fn full_profile() -> CvProfile {
    serde_json::from_value(json!({
        "personalInfo": {
            "fullName": "Minh Nguyen",
            "title": "Platform Engineer",
            "email": "minh@example.com",
            "phone": "+84 90 000 0000",
            "address": "Ho Chi Minh City",
            "link": "minh.dev",
            "avatar": "https://cdn.example.com/minh.png",
            "birthday": "1992-03-14",
            "gender": "male",
            "bio": "Builds reliable backend systems."
        },
        "education": [
            {
                "school": "HCMUT",
                "degree": "BSc",
                "field": "Computer Science",
                "startDate": "2010-09-01",
                "endDate": "2014-06-30"
            },
            {
                "school": "INSA Lyon",
                "degree": "MSc",
                "field": "Distributed Systems",
                "startDate": "2014-09-01",
                "endDate": "2016-06-30"
            }
        ],
        "experience": [
            {
                "company": "Acme",
                "position": "Engineer",
                "startDate": "2016-07-01",
                "endDate": "2019-12-31",
                "description": "APIs"
            },
            {
                "company": "Globex",
                "position": "Senior Engineer",
                "startDate": "2020-01-01",
                "endDate": "2022-06-30"
            },
            { "company": "Initech", "position": "Staff Engineer", "startDate": "2022-07-01" }
        ],
        "skills": [
            { "name": "Rust", "level": "Advanced" },
            { "name": "Go", "level": "Expert" }
        ],
        "languages": [ { "name": "Vietnamese", "proficiency": "Native" } ],
        "projects": [
            {
                "name": "cv-render",
                "position": "Maintainer",
                "description": "CV layouts",
                "link": "https://github.com/example/cv-render"
            }
        ],
        "certificates": [
            { "name": "CKA", "issuer": "CNCF", "date": "2021-05-10" },
            { "name": "AWS SAA", "issuer": "Amazon", "date": "2022-02-01" }
        ],
        "awards": [ { "name": "Hackathon winner", "date": "2019-11-20" } ]
    }))
    .unwrap()
}

fn html_sections(profile: &CvProfile, template: &str) -> Vec<String> {
    let fragment = Html::parse_fragment(&render_preview(profile, template).to_html());
    let selector = Selector::parse("[data-section]").unwrap();
    fragment
        .select(&selector)
        .filter_map(|el| el.value().attr("data-section").map(str::to_string))
        .collect()
}

fn pdf_sections(profile: &CvProfile, template: &str) -> Vec<String> {
    render_pdf_document(profile, template)
        .sections()
        .iter()
        .map(|kind| kind.key().to_string())
        .collect()
}

fn sorted(mut keys: Vec<String>) -> Vec<String> {
    keys.sort();
    keys
}

#[test]
fn empty_sections_are_not_rendered_on_any_template_or_backend() {
    let profile = alice();
    let expected = vec!["experience".to_string(), "skills".to_string()];

    for template in TEMPLATES {
        assert_eq!(sorted(html_sections(&profile, template)), expected, "html {}", template);
        assert_eq!(sorted(pdf_sections(&profile, template)), expected, "pdf {}", template);
    }
}

#[test]
fn section_set_is_identical_across_templates_and_backends() {
    let profile = full_profile();
    let expected: Vec<String> = sorted(
        CANONICAL_ORDER
            .iter()
            .map(|kind| kind.key().to_string())
            .collect(),
    );

    for template in TEMPLATES {
        assert_eq!(sorted(html_sections(&profile, template)), expected, "html {}", template);
        assert_eq!(sorted(pdf_sections(&profile, template)), expected, "pdf {}", template);
    }
}

#[test]
fn html_and_pdf_agree_on_section_order() {
    let profile = full_profile();
    for template in TEMPLATES {
        assert_eq!(html_sections(&profile, template), pdf_sections(&profile, template));
    }
}

#[test]
fn dividers_only_between_entries() {
    let profile = full_profile();
    // experience 3, education 2, projects 1, certificates 2, awards 1
    let expected_dividers = 2 + 1 + 0 + 1 + 0;

    for template in TEMPLATES {
        let fragment = Html::parse_fragment(&render_preview(&profile, template).to_html());
        let hr = Selector::parse("hr.cv-divider").unwrap();
        assert_eq!(fragment.select(&hr).count(), expected_dividers, "html {}", template);

        let experience =
            Selector::parse("[data-section=\"experience\"] hr.cv-divider").unwrap();
        assert_eq!(fragment.select(&experience).count(), 2);

        let document = render_pdf_document(&profile, template);
        let dividers =
            document.find_all(&|node: &PdfNode| node.role() == Some(NodeRole::Divider));
        assert_eq!(dividers.len(), expected_dividers, "pdf {}", template);
    }
}

#[test]
fn unknown_template_renders_like_modern() {
    let profile = full_profile();
    assert_eq!(
        render_preview(&profile, "does-not-exist"),
        render_preview(&profile, "modern")
    );
    assert_eq!(
        render_pdf_document(&profile, "does-not-exist"),
        render_pdf_document(&profile, "modern")
    );
}

#[test]
fn alice_renders_two_sections_with_classic() {
    let profile = alice();
    let html = render_preview(&profile, "classic").to_html();
    let fragment = Html::parse_fragment(&html);

    let sections = Selector::parse("section.cv-section").unwrap();
    assert_eq!(fragment.select(&sections).count(), 2);
    assert_eq!(html_sections(&profile, "classic"), vec!["experience", "skills"]);

    let experience_entries =
        Selector::parse("[data-section=\"experience\"] article.cv-entry").unwrap();
    let entries: Vec<_> = fragment.select(&experience_entries).collect();
    assert_eq!(entries.len(), 1);
    let entry_text: String = entries[0].text().collect();
    assert!(entry_text.contains("Acme"));
    assert!(entry_text.contains("Present"));

    let indicator = Selector::parse("[data-section=\"skills\"] .cv-indicator").unwrap();
    let indicators: Vec<_> = fragment.select(&indicator).collect();
    assert_eq!(indicators.len(), 1);
    assert_eq!(indicators[0].value().attr("data-filled"), Some("5"));
    assert_eq!(indicators[0].value().attr("data-total"), Some("5"));

    let document = render_pdf_document(&profile, "classic");
    assert_eq!(
        document.sections(),
        vec![SectionKind::Experience, SectionKind::Skills]
    );
    let filled = document.find_all(&|node: &PdfNode| {
        node.role() == Some(NodeRole::Indicator { filled: 5, total: 5 })
    });
    assert_eq!(filled.len(), 1);
    assert!(document.text_content().contains("Present"));
}

#[test]
fn missing_contact_values_show_placeholder() {
    let profile = alice();
    let fragment = Html::parse_fragment(&render_preview(&profile, "minimal").to_html());

    let rows = Selector::parse("li.cv-contact").unwrap();
    assert_eq!(fragment.select(&rows).count(), 6);

    let placeholders = Selector::parse(".cv-placeholder").unwrap();
    assert_eq!(fragment.select(&placeholders).count(), 5);

    let custom = RenderConfig::default()
        .with_template(TemplateId::Minimal)
        .with_placeholder("unknown".to_string());
    let page = render_preview_html(&profile, &custom).unwrap();
    assert!(page.contains("unknown"));
}

#[test]
fn avatar_uses_initials_when_missing() {
    let fragment = Html::parse_fragment(&render_preview(&alice(), "modern").to_html());
    let placeholder = Selector::parse(".cv-avatar--placeholder").unwrap();
    let initials: String = fragment
        .select(&placeholder)
        .flat_map(|el| el.text())
        .collect();
    assert_eq!(initials, "AT");
}

#[test]
fn pdf_avatar_goes_through_image_proxy() {
    let config =
        RenderConfig::default().with_image_proxy("https://api.example.com/proxy".to_string());
    let document = render_pdf_document_with(&full_profile(), &config);
    let images = document.find_all(&|node: &PdfNode| matches!(node, PdfNode::Image { .. }));
    assert_eq!(images.len(), 1);
    match images[0] {
        PdfNode::Image { src, .. } => {
            assert!(src.starts_with("https://api.example.com/proxy?url="));
            assert!(src.contains("cdn.example.com"));
        }
        _ => unreachable!(),
    }
}

#[test]
fn localized_labels_follow_config() {
    let config = RenderConfig::default()
        .with_template(TemplateId::Classic)
        .with_locale(Locale::Fr);
    let page = render_preview_html(&alice(), &config).unwrap();
    assert!(page.contains("lang=\"fr\""));
    assert!(page.contains("Présent"));
}

#[test]
fn pdf_document_serializes_as_tagged_tree() {
    let value = serde_json::to_value(render_pdf_document(&alice(), "classic")).unwrap();
    assert_eq!(value["type"], "document");
    assert_eq!(value["children"][0]["type"], "page");
    assert_eq!(value["children"][0]["size"], "A4");
}

#[test]
fn template_catalogue_lists_three_layouts() {
    let ids: Vec<TemplateId> = list_available_templates().iter().map(|t| t.id).collect();
    assert_eq!(ids, TemplateId::ALL.to_vec());
}

#[test]
fn blank_birthday_shows_placeholder_not_present() {
    let profile = cv_render::parse_profile(
        r#"{"personalInfo": {"fullName": "Alice Tran", "email": "a@x.com", "birthday": ""}}"#,
        cv_render::InputFormat::Json,
    )
    .unwrap();
    assert_eq!(profile.personal_info.birthday, None);
    let mut raw = profile.clone();
    raw.personal_info.birthday = Some(cv_render::types::cv_data::CvDate::from(""));

    for profile in [&profile, &raw] {
        for template in TEMPLATES {
            let fragment = Html::parse_fragment(&render_preview(profile, template).to_html());
            let rows = Selector::parse("li.cv-contact").unwrap();
            let birthday_row = fragment
                .select(&rows)
                .find(|row| row.text().any(|t| t.contains("Date of birth")))
                .expect("birthday row");
            let text: String = birthday_row.text().collect();
            assert!(!text.contains("Present"), "{}: {}", template, text);
            assert!(text.contains("Not provided"), "{}: {}", template, text);

            let header_text = render_pdf_document(profile, template).text_content();
            assert!(!header_text.contains("Present"), "pdf {}", template);
        }
    }
}

#[test]
fn project_links_are_sanitized_on_both_backends() {
    let mut profile = full_profile();
    profile.projects = serde_json::from_value(json!([
        { "name": "Bad", "link": "javascript:alert(1)" },
        { "name": "Repo", "link": "github.com/acme/repo" }
    ]))
    .unwrap();

    for template in TEMPLATES {
        let fragment = Html::parse_fragment(&render_preview(&profile, template).to_html());
        let anchors = Selector::parse("[data-section=\"projects\"] a[href]").unwrap();
        let hrefs: Vec<&str> = fragment
            .select(&anchors)
            .filter_map(|a| a.value().attr("href"))
            .collect();
        assert_eq!(hrefs, vec!["https://github.com/acme/repo"], "html {}", template);

        let document = render_pdf_document(&profile, template);
        let srcs: Vec<&str> = document
            .find_all(&|node: &PdfNode| matches!(node, PdfNode::Link { .. }))
            .into_iter()
            .filter_map(|node| match node {
                PdfNode::Link { src, .. } => Some(src.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(srcs, hrefs, "pdf {}", template);

        let json = serde_json::to_string(&document).unwrap();
        assert!(!json.contains("\"src\":\"javascript:"));
    }
}
