// src/render/primitives.rs
//! Layout pieces shared by all templates: contact rows, section wrapper,
//! header, and the per-section entry builders.

use super::{BoxKind, ContactIcon, RenderBackend, RenderContext, TextKind};
use crate::core::formatting::{
    format_date_for_display, format_date_range, format_gender, skill_level_indicator_count,
    SKILL_INDICATOR_DOTS,
};
use crate::core::traversal::{interleave, CvSection, SectionKind};
use crate::types::cv_data::{
    Award, Certificate, Education, Experience, Language, PersonalInfo, Project, Skill,
};

/// One labeled contact fact. The row is always emitted; a missing value
/// shows `placeholder`, or the locale's "not provided" text.
pub fn contact_row_item<B: RenderBackend>(
    backend: &B,
    icon: ContactIcon,
    label: &str,
    value: Option<&str>,
    placeholder: Option<&str>,
    ctx: &RenderContext,
) -> B::Node {
    let value_node = match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => backend.text(TextKind::Value, v, ctx),
        None => backend.text(
            TextKind::Placeholder,
            placeholder.unwrap_or(ctx.placeholder),
            ctx,
        ),
    };

    backend.block(
        BoxKind::ContactRow,
        vec![
            backend.icon(icon, ctx),
            backend.text(TextKind::Label, label, ctx),
            value_node,
        ],
        ctx,
    )
}

/// Titled container. Callers only invoke this for non-empty content.
pub fn section<B: RenderBackend>(
    backend: &B,
    kind: SectionKind,
    children: Vec<B::Node>,
    ctx: &RenderContext,
) -> B::Node {
    backend.section(kind, kind.title(ctx.labels), children, ctx)
}

pub fn cv_header<B: RenderBackend>(
    backend: &B,
    info: &PersonalInfo,
    ctx: &RenderContext,
) -> B::Node {
    let labels = ctx.labels;

    let avatar = info
        .avatar
        .as_deref()
        .filter(|src| !src.trim().is_empty())
        .and_then(|src| backend.image(src, &info.full_name, ctx))
        .unwrap_or_else(|| backend.avatar_placeholder(&info.initials(), ctx));

    let mut identity = vec![backend.text(TextKind::Name, &info.full_name, ctx)];
    if let Some(title) = non_blank(info.title.as_deref()) {
        identity.push(backend.text(TextKind::Headline, title, ctx));
    }

    // Blank birthdays are missing values, not open-ended ranges.
    let birthday = info
        .birthday
        .as_ref()
        .filter(|date| !date.is_blank())
        .map(|date| format_date_for_display(Some(date), ctx.locale));
    let gender = format_gender(info.gender, ctx.locale);

    let rows = [
        (ContactIcon::Email, labels.email, Some(info.email.as_str())),
        (ContactIcon::Phone, labels.phone, info.phone.as_deref()),
        (ContactIcon::Address, labels.address, info.address.as_deref()),
        (ContactIcon::Website, labels.website, info.link.as_deref()),
        (ContactIcon::Birthday, labels.birthday, birthday.as_deref()),
        (ContactIcon::Gender, labels.gender, gender),
    ];
    let contacts: Vec<B::Node> = rows
        .into_iter()
        .map(|(icon, label, value)| contact_row_item(backend, icon, label, value, None, ctx))
        .collect();

    backend.block(
        BoxKind::Header,
        vec![
            avatar,
            backend.block(BoxKind::Identity, identity, ctx),
            backend.block(BoxKind::ContactList, contacts, ctx),
        ],
        ctx,
    )
}

/// Render one non-empty section with its entries, dividers included.
pub fn render_section<B: RenderBackend>(
    backend: &B,
    cv_section: CvSection<'_>,
    ctx: &RenderContext,
) -> B::Node {
    let entries: Vec<B::Node> = match cv_section {
        CvSection::Bio(text) => vec![backend.text(TextKind::Body, text, ctx)],
        CvSection::Experience(items) => build_all(items, |e| experience_entry(backend, e, ctx)),
        CvSection::Education(items) => build_all(items, |e| education_entry(backend, e, ctx)),
        CvSection::Skills(items) => build_all(items, |s| skill_item(backend, s, ctx)),
        CvSection::Languages(items) => build_all(items, |l| language_item(backend, l, ctx)),
        CvSection::Projects(items) => build_all(items, |p| project_entry(backend, p, ctx)),
        CvSection::Certificates(items) => {
            build_all(items, |c| certificate_entry(backend, c, ctx))
        }
        CvSection::Awards(items) => build_all(items, |a| award_entry(backend, a, ctx)),
    };

    let kind = cv_section.kind();
    let body = if kind.uses_dividers() {
        interleave(entries, || backend.divider(ctx))
    } else {
        entries
    };

    section(backend, kind, body, ctx)
}

fn build_all<T, N>(items: &[T], build: impl Fn(&T) -> N) -> Vec<N> {
    items.iter().map(build).collect()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn heading<B: RenderBackend>(
    backend: &B,
    title: &str,
    meta: Option<&str>,
    ctx: &RenderContext,
) -> B::Node {
    let mut children = vec![backend.text(TextKind::EntryTitle, title, ctx)];
    if let Some(meta) = meta {
        children.push(backend.text(TextKind::EntryMeta, meta, ctx));
    }
    backend.block(BoxKind::EntryHeading, children, ctx)
}

fn push_body<B: RenderBackend>(
    backend: &B,
    children: &mut Vec<B::Node>,
    text: Option<&str>,
    ctx: &RenderContext,
) {
    if let Some(text) = non_blank(text) {
        children.push(backend.text(TextKind::Body, text, ctx));
    }
}

fn experience_entry<B: RenderBackend>(
    backend: &B,
    exp: &Experience,
    ctx: &RenderContext,
) -> B::Node {
    let range = format_date_range(&exp.start_date, exp.end_date.as_ref(), ctx.locale);
    let mut children = vec![
        heading(backend, &exp.position, Some(range.as_str()), ctx),
        backend.text(TextKind::EntrySubtitle, &exp.company, ctx),
    ];
    push_body(backend, &mut children, exp.description.as_deref(), ctx);
    backend.block(BoxKind::Entry, children, ctx)
}

fn education_entry<B: RenderBackend>(backend: &B, edu: &Education, ctx: &RenderContext) -> B::Node {
    let range = format_date_range(&edu.start_date, edu.end_date.as_ref(), ctx.locale);
    let degree = match non_blank(Some(edu.field.as_str())) {
        Some(field) => format!("{} - {}", edu.degree, field),
        None => edu.degree.clone(),
    };
    let mut children = vec![
        heading(backend, &edu.school, Some(range.as_str()), ctx),
        backend.text(TextKind::EntrySubtitle, &degree, ctx),
    ];
    push_body(backend, &mut children, edu.description.as_deref(), ctx);
    backend.block(BoxKind::Entry, children, ctx)
}

fn skill_item<B: RenderBackend>(backend: &B, skill: &Skill, ctx: &RenderContext) -> B::Node {
    let filled = skill_level_indicator_count(&skill.level);
    backend.block(
        BoxKind::ListItem,
        vec![
            backend.text(TextKind::Value, &skill.name, ctx),
            backend.indicator(filled, SKILL_INDICATOR_DOTS, ctx),
        ],
        ctx,
    )
}

fn language_item<B: RenderBackend>(backend: &B, lang: &Language, ctx: &RenderContext) -> B::Node {
    let mut children = vec![backend.text(TextKind::Value, &lang.name, ctx)];
    if let Some(proficiency) = non_blank(Some(lang.proficiency.as_str())) {
        children.push(backend.text(TextKind::EntryMeta, proficiency, ctx));
    }
    backend.block(BoxKind::ListItem, children, ctx)
}

fn project_entry<B: RenderBackend>(backend: &B, project: &Project, ctx: &RenderContext) -> B::Node {
    let mut title_row = vec![backend.text(TextKind::EntryTitle, &project.name, ctx)];
    if let Some(link) = non_blank(project.link.as_deref()) {
        title_row.push(backend.link(link, link, ctx));
    }

    let mut children = vec![backend.block(BoxKind::EntryHeading, title_row, ctx)];
    if let Some(position) = non_blank(project.position.as_deref()) {
        let role = format!("{}: {}", ctx.labels.role_in_project, position);
        children.push(backend.text(TextKind::EntrySubtitle, &role, ctx));
    }
    push_body(backend, &mut children, Some(project.description.as_str()), ctx);
    backend.block(BoxKind::Entry, children, ctx)
}

fn certificate_entry<B: RenderBackend>(
    backend: &B,
    cert: &Certificate,
    ctx: &RenderContext,
) -> B::Node {
    let date = format_date_for_display(Some(&cert.date), ctx.locale);
    let mut children = vec![heading(backend, &cert.name, Some(date.as_str()), ctx)];
    if let Some(issuer) = non_blank(Some(cert.issuer.as_str())) {
        let issued = format!("{} {}", ctx.labels.issued_by, issuer);
        children.push(backend.text(TextKind::EntrySubtitle, &issued, ctx));
    }
    backend.block(BoxKind::Entry, children, ctx)
}

fn award_entry<B: RenderBackend>(backend: &B, award: &Award, ctx: &RenderContext) -> B::Node {
    let date = format_date_for_display(Some(&award.date), ctx.locale);
    let mut children = vec![heading(backend, &award.name, Some(date.as_str()), ctx)];
    push_body(backend, &mut children, award.description.as_deref(), ctx);
    backend.block(BoxKind::Entry, children, ctx)
}
