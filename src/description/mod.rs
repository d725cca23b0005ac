//! Waypoint description rendering
//!
//! A description is a fixed sequence of sections. Each section renderer
//! decides on its own whether it has anything to show; included sections
//! are separated by a blank line. Lines inside a section are only emitted
//! for data that is present, except checkbox lines which always appear.

pub mod style;

pub use style::{PlainText, TextDecorator, TextStyle, UnicodeBold};

use crate::directions::direction_arrows;
use crate::models::{Site, SiteLocation, SiteLocationType};

const CHECKED: char = '☑';
const UNCHECKED: char = '☐';

fn checkbox(value: bool) -> char {
    if value { CHECKED } else { UNCHECKED }
}

/// Everything a section renderer can look at
pub struct SectionContext<'a> {
    pub site: &'a Site,
    pub location: &'a SiteLocation,
    pub decorator: &'a dyn TextDecorator,
}

impl SectionContext<'_> {
    /// Bold header followed by the given body lines
    fn section(&self, header: &str, lines: Vec<String>) -> String {
        let mut section = self.decorator.decorate(header, TextStyle::Bold);
        for line in lines {
            section.push('\n');
            section.push_str(&line);
        }
        section
    }
}

type SectionRenderer = fn(&SectionContext<'_>) -> Option<String>;

/// Sections in output order
const SECTIONS: [SectionRenderer; 11] = [
    heading,
    site_info,
    site_remarks,
    requirements,
    terrain,
    winch,
    access,
    flight_types,
    location_remarks,
    weather,
    summary,
];

fn heading(ctx: &SectionContext<'_>) -> Option<String> {
    Some(format!(
        "{} - {}",
        ctx.location.location_type.label(),
        ctx.site.site_type
    ))
}

fn site_info(ctx: &SectionContext<'_>) -> Option<String> {
    ctx.site.info.clone()
}

fn site_remarks(ctx: &SectionContext<'_>) -> Option<String> {
    let remarks = ctx.site.remarks.as_ref()?;
    Some(ctx.section("Bemerkungen", vec![remarks.clone()]))
}

fn requirements(ctx: &SectionContext<'_>) -> Option<String> {
    let requirements = ctx.site.requirements.as_ref()?;
    Some(ctx.section("Voraussetzungen", vec![requirements.clone()]))
}

fn terrain(ctx: &SectionContext<'_>) -> Option<String> {
    let location = ctx.location;
    let mut lines = Vec::new();

    let directions = location
        .directions_text
        .as_ref()
        .or(location.directions.as_ref());
    if let Some(directions) = directions {
        let arrows = direction_arrows(directions);
        if arrows.is_empty() {
            lines.push(format!("Startrichtung: {directions}"));
        } else {
            lines.push(format!("Startrichtung: {directions} ({arrows})"));
        }
    }
    if ctx.site.height_difference_max > 0 {
        lines.push(format!(
            "Höhenunterschied: {} m",
            ctx.site.height_difference_max
        ));
    }
    if location.altitude > 0 {
        lines.push(format!("Höhe: {} m", location.altitude));
    }

    Some(ctx.section("Gelände", lines))
}

fn winch(ctx: &SectionContext<'_>) -> Option<String> {
    let location = ctx.location;
    if location.location_type != SiteLocationType::WhinchStart {
        return None;
    }

    let mut lines = vec![if location.is_mobile_winch() {
        "Mobile Abrollwinde".to_string()
    } else {
        "Stationäre Abrollwinde".to_string()
    }];
    if location.towing_length > 0 {
        lines.push(format!("Schlepplänge: {} m", location.towing_length));
    }
    if location.towing_height1 > 0 {
        lines.push(format!(
            "Schlepphöhe: {} - {} m",
            location.towing_height1, location.towing_height2
        ));
    }

    Some(ctx.section("Winde", lines))
}

fn access(ctx: &SectionContext<'_>) -> Option<String> {
    let location = ctx.location;
    let mut lines = vec![format!(
        "{} Auto {} Öffentliche Verkhersmittel {} Zu Fuß",
        checkbox(location.access_by_car),
        checkbox(location.access_by_public_transport),
        checkbox(location.access_by_foot),
    )];
    if let Some(remarks) = &location.access_remarks {
        lines.push(remarks.clone());
    }
    if let Some(cable_car) = &ctx.site.cable_car {
        lines.push(format!("Gondel: {cable_car}"));
    }

    Some(ctx.section("Zugang", lines))
}

fn flight_types(ctx: &SectionContext<'_>) -> Option<String> {
    let line = format!(
        "{} Gleitschirm {} Hängegleiter",
        checkbox(ctx.location.paragliding),
        checkbox(ctx.location.hanggliding),
    );
    Some(ctx.section("Flugarten", vec![line]))
}

fn location_remarks(ctx: &SectionContext<'_>) -> Option<String> {
    let remarks = ctx.location.remarks.as_ref()?;
    Some(ctx.section("Bemerkungen zum Platz", vec![remarks.clone()]))
}

fn weather(ctx: &SectionContext<'_>) -> Option<String> {
    let site = ctx.site;
    if !site.has_weather_info() {
        return None;
    }

    let mut lines = Vec::new();
    if let Some(info) = &site.weather_info {
        lines.push(info.clone());
    }
    if let Some(phone) = &site.weather_phone {
        lines.push(format!("Wetter-Telefon: {phone}"));
    }
    let webcams = [&site.webcam1, &site.webcam2, &site.webcam3];
    for (number, webcam) in (1..).zip(webcams) {
        if let Some(webcam) = webcam {
            lines.push(format!("WebCam {number}: {webcam}"));
        }
    }

    Some(ctx.section("Wetter", lines))
}

fn summary(ctx: &SectionContext<'_>) -> Option<String> {
    let site = ctx.site;
    let mut lines = vec![if site.de_certified {
        format!("DE-Zertifiziert: {CHECKED} Zertifiziert")
    } else {
        format!("DE-Zertifiziert: {UNCHECKED} Nicht Zertifiziert")
    }];
    if let Some(holder) = &site.de_certification_holder {
        lines.push(format!("Zertifikatsinhaber: {holder}"));
    }
    if let Some(contact) = &site.contact {
        lines.push(format!("Kontakt: {contact}"));
    }
    lines.push(match &site.url {
        Some(url) => format!("Url: {url}"),
        None => "Url:".to_string(),
    });

    Some(ctx.section("Weiteres", lines))
}

/// Render the waypoint description of one location of a site
#[must_use]
pub fn describe_location(
    site: &Site,
    location: &SiteLocation,
    decorator: &dyn TextDecorator,
) -> String {
    let ctx = SectionContext {
        site,
        location,
        decorator,
    };

    SECTIONS
        .iter()
        .filter_map(|render| render(&ctx))
        .collect::<Vec<_>>()
        .join("\n\n")
}
