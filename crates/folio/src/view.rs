//! Terminal rendering of the portfolio.
//!
//! Pure string builders over the portfolio document and the description
//! cache. Everything here tolerates absent or partial cache entries and
//! substitutes the loading placeholder; nothing here blocks on or
//! triggers resolution.

use serde_json::json;

use crate::cache::{DescriptionCache, DescriptionEntry};
use crate::config::DisplayConfig;
use crate::error::Result;
use crate::portfolio::{Portfolio, Project};

/// Placeholder shown on a card while its description is unresolved.
pub const LOADING_DESCRIPTION: &str = "Loading description...";

/// Render the whole portfolio, section by section.
#[must_use]
pub fn render_portfolio(
    portfolio: &Portfolio,
    cache: &DescriptionCache,
    display: &DisplayConfig,
) -> String {
    let mut out = String::new();

    out.push_str(&render_cover(portfolio, display.width));
    out.push_str(&render_about(portfolio, display.width));
    out.push_str(&render_education(portfolio, display.width));
    out.push_str(&render_skills(portfolio, display.width));
    out.push_str(&render_experience(portfolio, display.width));
    out.push_str(&render_projects(portfolio, cache, display.width));
    if display.testimonials {
        out.push_str(&render_testimonials(portfolio, display.width));
    }
    out.push_str(&render_contact(portfolio, display.width));

    out
}

/// Render just the project cards.
#[must_use]
pub fn render_projects(portfolio: &Portfolio, cache: &DescriptionCache, width: usize) -> String {
    let mut out = section_header("Projects", width);
    for project in &portfolio.projects {
        out.push_str(&project_card(project, cache));
        out.push('\n');
    }
    out
}

/// Render one project card.
#[must_use]
pub fn project_card(project: &Project, cache: &DescriptionCache) -> String {
    let description = cache
        .get(&project.identifier)
        .and_then(|entry| entry.short_form)
        .unwrap_or_else(|| LOADING_DESCRIPTION.to_string());

    let mut out = String::new();
    out.push_str(&format!("{}  [{}]\n", project.title, project.read_time));
    if !project.tags.is_empty() {
        out.push_str(&format!("  {}\n", project.tags.join(" / ")));
    }
    out.push_str(&format!("  {description}\n"));
    out.push_str(&format!("  {}\n", project.repository_url()));
    out
}

/// JSON snapshot of the portfolio with current descriptions.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(portfolio: &Portfolio, cache: &DescriptionCache) -> Result<String> {
    let value = json!({
        "profile": portfolio.profile,
        "education": portfolio.education,
        "skills": portfolio.skills,
        "experience": portfolio.experience,
        "projects": projects_json(portfolio, cache),
        "testimonials": portfolio.testimonials,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

/// JSON snapshot of the project cards with current descriptions.
#[must_use]
pub fn projects_json(portfolio: &Portfolio, cache: &DescriptionCache) -> serde_json::Value {
    let projects: Vec<_> = portfolio
        .projects
        .iter()
        .map(|project| {
            let entry = cache.get(&project.identifier);
            json!({
                "identifier": project.identifier,
                "title": project.title,
                "tags": project.tags,
                "read_time": project.read_time,
                "repository": project.repository_url(),
                "description": entry
                    .as_ref()
                    .and_then(|e| e.short_form.clone())
                    .unwrap_or_else(|| LOADING_DESCRIPTION.to_string()),
                "resolved": entry.as_ref().is_some_and(DescriptionEntry::is_resolved),
                "has_readme": entry.as_ref().is_some_and(DescriptionEntry::has_long_form),
            })
        })
        .collect();
    serde_json::Value::Array(projects)
}

fn section_header(title: &str, width: usize) -> String {
    let rule = "=".repeat(width);
    format!("{rule}\n{title}\n{rule}\n")
}

fn render_cover(portfolio: &Portfolio, width: usize) -> String {
    let rule = "=".repeat(width);
    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!("{}\n", portfolio.profile.name));
    out.push_str(&format!("{}\n", portfolio.profile.tagline));
    out.push_str(&rule);
    out.push('\n');
    out
}

fn render_about(portfolio: &Portfolio, width: usize) -> String {
    let mut out = section_header("About", width);
    for paragraph in &portfolio.profile.about {
        out.push_str(paragraph);
        out.push_str("\n\n");
    }
    out
}

fn render_education(portfolio: &Portfolio, width: usize) -> String {
    let mut out = section_header("Education & Training", width);
    for (index, entry) in portfolio.education.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", index + 1, entry.title));
        out.push_str(&format!("   {}\n", entry.detail));
    }
    out.push('\n');
    out
}

fn render_skills(portfolio: &Portfolio, width: usize) -> String {
    let mut out = section_header("Skills", width);
    for category in &portfolio.skills {
        out.push_str(&format!(
            "{}: {}\n",
            category.category,
            category.skills.join(", ")
        ));
    }
    out.push('\n');
    out
}

fn render_experience(portfolio: &Portfolio, width: usize) -> String {
    let mut out = section_header("Experience", width);
    for entry in &portfolio.experience {
        out.push_str(&format!("{} ({})\n", entry.role, entry.period));
        for highlight in &entry.highlights {
            out.push_str(&format!("  - {highlight}\n"));
        }
    }
    out.push('\n');
    out
}

fn render_testimonials(portfolio: &Portfolio, width: usize) -> String {
    let mut out = section_header("Testimonials", width);
    for testimonial in &portfolio.testimonials {
        out.push_str(&format!("\"{}\"\n", testimonial.quote));
        out.push_str(&format!("  -- {}\n\n", testimonial.attribution));
    }
    out
}

fn render_contact(portfolio: &Portfolio, width: usize) -> String {
    let mut out = section_header("Contact", width);
    for link in &portfolio.profile.links {
        out.push_str(&format!("{}: {}\n", link.label, link.url));
    }
    out
}
