//! Card factories: one record in, one card out. No document access.

use crate::domain::model::{present, Certificate, Project, Skill};
use crate::page::html::escape;
use crate::page::{Card, CardKind};

/// A record that knows which card it becomes.
pub trait CardSource {
    fn to_card(&self) -> Card;
}

impl CardSource for Skill {
    fn to_card(&self) -> Card {
        skill_card(self)
    }
}

impl CardSource for Project {
    fn to_card(&self) -> Card {
        project_card(self)
    }
}

impl CardSource for Certificate {
    fn to_card(&self) -> Card {
        certificate_card(self)
    }
}

fn tag_list(items: &[String], class: &str) -> String {
    items
        .iter()
        .map(|item| format!("<span class=\"{}\">{}</span>", class, escape(item)))
        .collect()
}

pub fn skill_card(skill: &Skill) -> Card {
    let color = skill.level().color();

    let mut html = String::with_capacity(512);
    html.push_str("<div class=\"skill-header\">");
    html.push_str(&format!(
        "<div class=\"skill-icon\"><i class=\"{}\"></i></div>",
        escape(&skill.icon)
    ));
    html.push_str(&format!(
        "<div><h3 class=\"skill-name\">{}</h3>\
         <div class=\"skill-level\" style=\"color: {}\">{}</div></div>",
        escape(&skill.name),
        color.hex(),
        escape(&skill.level)
    ));
    html.push_str("</div>");
    html.push_str(&format!("<p>{}</p>", escape(&skill.description)));
    html.push_str(&format!(
        "<div class=\"skill-tags\">{}</div>",
        tag_list(&skill.tags, "skill-tag")
    ));

    Card {
        kind: CardKind::Skill,
        inner_html: html,
    }
}

pub fn project_card(project: &Project) -> Card {
    let mut links = String::new();
    if let Some(github) = present(&project.github) {
        links.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener\" class=\"btn btn-secondary code-link\">\
             <i class=\"fab fa-github\"></i> Code</a>",
            escape(github)
        ));
    }
    if let Some(live) = present(&project.live) {
        links.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener\" class=\"btn btn-primary demo-link\">\
             <i class=\"fas fa-external-link-alt\"></i> Live Demo</a>",
            escape(live)
        ));
    }

    let mut html = String::with_capacity(512);
    html.push_str(&format!(
        "<div class=\"project-image\"><i class=\"{}\"></i></div>",
        escape(&project.icon)
    ));
    html.push_str("<div class=\"project-content\">");
    html.push_str(&format!(
        "<h3 class=\"project-title\">{}</h3>",
        escape(&project.title)
    ));
    html.push_str(&format!(
        "<p class=\"project-description\">{}</p>",
        escape(&project.description)
    ));
    html.push_str(&format!(
        "<div class=\"project-tech\">{}</div>",
        tag_list(&project.technologies, "tech-tag")
    ));
    html.push_str(&format!("<div class=\"project-links\">{}</div>", links));
    html.push_str("</div>");

    Card {
        kind: CardKind::Project,
        inner_html: html,
    }
}

pub fn certificate_card(certificate: &Certificate) -> Card {
    let mut html = String::with_capacity(512);
    html.push_str("<div class=\"certificate-header\">");
    html.push_str(&format!(
        "<div class=\"certificate-icon\"><i class=\"{}\"></i></div>",
        escape(&certificate.icon)
    ));
    html.push_str(&format!(
        "<div><h3 class=\"certificate-title\">{}</h3>\
         <p class=\"certificate-issuer\">{}</p></div>",
        escape(&certificate.title),
        escape(&certificate.issuer)
    ));
    html.push_str("</div>");
    html.push_str(&format!("<p>{}</p>", escape(&certificate.description)));
    html.push_str(&format!(
        "<div class=\"certificate-date\"><i class=\"far fa-calendar\"></i> {}",
        escape(&certificate.date)
    ));
    if let Some(credential) = present(&certificate.credential_id) {
        html.push_str(&format!(
            "<br><span class=\"certificate-credential\"><i class=\"fas fa-id-card\"></i> {}</span>",
            escape(credential)
        ));
    }
    html.push_str("</div>");

    Card {
        kind: CardKind::Certificate,
        inner_html: html,
    }
}
