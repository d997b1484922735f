//! HTML catalog page.

use std::io::Write;

use anyhow::Result;
use lmcat_model::{
    Availability, Contributor, CutOffDate, CutOffType, Entity, LanguageVariety, NameAndUrl,
};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::error::ReportError;

/// Fixed page text for one language.
#[derive(Debug)]
pub struct Labels {
    pub title: &'static str,
    pub intro: &'static str,
    pub model_id: &'static str,
    pub license: &'static str,
    pub proprietary: &'static str,
    pub release_date: &'static str,
    pub future_release: &'static str,
    pub size: &'static str,
    pub base_model: &'static str,
    pub varieties: &'static str,
    pub weights: &'static str,
    pub public_api: &'static str,
    pub online_chat: &'static str,
    pub available: &'static str,
    pub planned: &'static str,
    pub unavailable: &'static str,
    pub training_data: &'static str,
    pub origin: &'static str,
    pub knowledge_cutoff: &'static str,
    pub unknown: &'static str,
    pub contributors: &'static str,
    pub generated: &'static str,
    pub variety_names: [(LanguageVariety, &'static str); 3],
}

pub const PT: Labels = Labels {
    title: "Modelos de língua para o português",
    intro: "Catálogo de modelos de língua com suporte para variedades do português.",
    model_id: "Identificador",
    license: "Licença",
    proprietary: "Proprietária",
    release_date: "Data de lançamento",
    future_release: "futuro",
    size: "Tamanho",
    base_model: "Modelo base",
    varieties: "Variante do português",
    weights: "Pesos disponíveis",
    public_api: "API",
    online_chat: "Chat online",
    available: "sim",
    planned: "planeado",
    unavailable: "não",
    training_data: "Dados usados no treinamento",
    origin: "Responsáveis",
    knowledge_cutoff: "Data de corte dos dados",
    unknown: "(?)",
    contributors: "Contribuidores",
    generated: "Gerado em",
    variety_names: [
        (LanguageVariety::PtPt, "Portugal"),
        (LanguageVariety::PtBr, "Brasil"),
        (LanguageVariety::GlEs, "Galiza"),
    ],
};

pub fn labels(lang: &str) -> Option<&'static Labels> {
    match lang {
        "pt" => Some(&PT),
        _ => None,
    }
}

/// Render the full page for `lang`.
pub fn render_page(
    entities: &[Entity],
    contributors: &[Contributor],
    lang: &str,
    stylesheets: &[String],
    generated_at: &str,
) -> Result<String> {
    let labels = labels(lang).ok_or_else(|| ReportError::UnsupportedLanguage {
        lang: lang.to_string(),
    })?;
    let mut xml = Writer::new_with_indent(Vec::new(), b' ', 2);

    xml.write_event(Event::DocType(BytesText::from_escaped("html")))?;
    let mut html = BytesStart::new("html");
    html.push_attribute(("lang", lang));
    xml.write_event(Event::Start(html))?;

    xml.write_event(Event::Start(BytesStart::new("head")))?;
    let mut meta = BytesStart::new("meta");
    meta.push_attribute(("charset", "utf-8"));
    xml.write_event(Event::Empty(meta))?;
    write_text_element(&mut xml, "title", labels.title)?;
    for sheet in stylesheets {
        let mut link = BytesStart::new("link");
        link.push_attribute(("rel", "stylesheet"));
        link.push_attribute(("href", sheet.as_str()));
        xml.write_event(Event::Empty(link))?;
    }
    xml.write_event(Event::End(BytesEnd::new("head")))?;

    xml.write_event(Event::Start(BytesStart::new("body")))?;
    write_text_element(&mut xml, "h1", labels.title)?;
    write_text_element(&mut xml, "p", labels.intro)?;

    let mut models = BytesStart::new("section");
    models.push_attribute(("id", "models"));
    xml.write_event(Event::Start(models))?;
    for entity in entities {
        write_entity(&mut xml, entity, labels)?;
    }
    xml.write_event(Event::End(BytesEnd::new("section")))?;

    write_contributors(&mut xml, contributors, labels)?;

    let mut footer = BytesStart::new("footer");
    footer.push_attribute(("class", "generated"));
    xml.write_event(Event::Start(footer))?;
    xml.write_event(Event::Text(BytesText::new(&format!(
        "{} {generated_at}",
        labels.generated
    ))))?;
    xml.write_event(Event::End(BytesEnd::new("footer")))?;

    xml.write_event(Event::End(BytesEnd::new("body")))?;
    xml.write_event(Event::End(BytesEnd::new("html")))?;

    let mut page = String::from_utf8(xml.into_inner())?;
    page.push('\n');
    Ok(page)
}

fn write_entity<W: Write>(xml: &mut Writer<W>, entity: &Entity, labels: &Labels) -> Result<()> {
    let mut article = BytesStart::new("article");
    article.push_attribute(("class", "model"));
    xml.write_event(Event::Start(article))?;

    xml.write_event(Event::Start(BytesStart::new("h2")))?;
    write_optional_link(xml, &entity.name, entity.url.as_deref())?;
    xml.write_event(Event::End(BytesEnd::new("h2")))?;

    xml.write_event(Event::Start(BytesStart::new("dl")))?;
    if !entity.model_id.is_empty() {
        write_term(xml, labels.model_id, &entity.model_id)?;
    }
    let license = if entity.is_proprietary() {
        labels.proprietary
    } else {
        or_unknown(&entity.license, labels)
    };
    write_term(xml, labels.license, license)?;
    let release = if entity.is_future_release() {
        labels.future_release
    } else {
        or_unknown(&entity.release_date, labels)
    };
    write_term(xml, labels.release_date, release)?;
    write_term(xml, labels.size, or_unknown(&entity.size, labels))?;
    write_term(xml, labels.base_model, or_unknown(&entity.base_model, labels))?;
    write_term(xml, labels.varieties, &varieties_text(entity.language_varieties.as_deref(), labels))?;

    for (label, availability) in [
        (labels.weights, &entity.weight_availability),
        (labels.public_api, &entity.public_api_availability),
        (labels.online_chat, &entity.online_chat_availability),
    ] {
        write_availability(xml, label, availability, labels)?;
    }

    write_links(xml, labels.training_data, &entity.training_data, labels)?;
    write_links(xml, labels.origin, &entity.origin, labels)?;
    let cutoff = entity
        .knowledge_cutoff
        .as_ref()
        .map_or_else(|| labels.unknown.to_string(), cutoff_text);
    write_term(xml, labels.knowledge_cutoff, &cutoff)?;
    xml.write_event(Event::End(BytesEnd::new("dl")))?;

    xml.write_event(Event::End(BytesEnd::new("article")))?;
    Ok(())
}

fn write_contributors<W: Write>(
    xml: &mut Writer<W>,
    contributors: &[Contributor],
    labels: &Labels,
) -> Result<()> {
    let mut section = BytesStart::new("section");
    section.push_attribute(("id", "contributors"));
    xml.write_event(Event::Start(section))?;
    write_text_element(xml, "h2", labels.contributors)?;
    xml.write_event(Event::Start(BytesStart::new("ul")))?;
    for contributor in contributors {
        let url = contributor
            .extra
            .get("url")
            .and_then(serde_json::Value::as_str);
        xml.write_event(Event::Start(BytesStart::new("li")))?;
        write_optional_link(xml, &contributor.name, url)?;
        xml.write_event(Event::End(BytesEnd::new("li")))?;
    }
    xml.write_event(Event::End(BytesEnd::new("ul")))?;
    xml.write_event(Event::End(BytesEnd::new("section")))?;
    Ok(())
}

fn write_availability<W: Write>(
    xml: &mut Writer<W>,
    label: &str,
    availability: &Availability,
    labels: &Labels,
) -> Result<()> {
    write_text_element(xml, "dt", label)?;
    xml.write_event(Event::Start(BytesStart::new("dd")))?;
    if availability.available_now {
        write_optional_link(xml, labels.available, availability.url.as_deref())?;
    } else if availability.planned == Some(true) {
        xml.write_event(Event::Text(BytesText::new(labels.planned)))?;
    } else {
        xml.write_event(Event::Text(BytesText::new(labels.unavailable)))?;
    }
    xml.write_event(Event::End(BytesEnd::new("dd")))?;
    Ok(())
}

fn write_links<W: Write>(
    xml: &mut Writer<W>,
    label: &str,
    links: &[NameAndUrl],
    labels: &Labels,
) -> Result<()> {
    if links.is_empty() {
        return write_term(xml, label, labels.unknown);
    }
    write_text_element(xml, "dt", label)?;
    xml.write_event(Event::Start(BytesStart::new("dd")))?;
    xml.write_event(Event::Start(BytesStart::new("ul")))?;
    for link in links {
        let text = if link.name.is_empty() {
            link.url.as_deref().unwrap_or_default()
        } else {
            link.name.as_str()
        };
        xml.write_event(Event::Start(BytesStart::new("li")))?;
        write_optional_link(xml, text, link.url.as_deref())?;
        xml.write_event(Event::End(BytesEnd::new("li")))?;
    }
    xml.write_event(Event::End(BytesEnd::new("ul")))?;
    xml.write_event(Event::End(BytesEnd::new("dd")))?;
    Ok(())
}

fn write_term<W: Write>(xml: &mut Writer<W>, term: &str, description: &str) -> Result<()> {
    write_text_element(xml, "dt", term)?;
    write_text_element(xml, "dd", description)
}

fn write_optional_link<W: Write>(xml: &mut Writer<W>, text: &str, href: Option<&str>) -> Result<()> {
    match href.filter(|href| !href.is_empty()) {
        Some(href) => {
            let mut anchor = BytesStart::new("a");
            anchor.push_attribute(("href", href));
            xml.write_event(Event::Start(anchor))?;
            xml.write_event(Event::Text(BytesText::new(text)))?;
            xml.write_event(Event::End(BytesEnd::new("a")))?;
        }
        None => xml.write_event(Event::Text(BytesText::new(text)))?,
    }
    Ok(())
}

fn write_text_element<W: Write>(xml: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new(name)))?;
    xml.write_event(Event::Text(BytesText::new(text)))?;
    xml.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn or_unknown<'a>(value: &'a str, labels: &'a Labels) -> &'a str {
    if value.is_empty() { labels.unknown } else { value }
}

fn varieties_text(varieties: Option<&[LanguageVariety]>, labels: &Labels) -> String {
    let Some(varieties) = varieties.filter(|varieties| !varieties.is_empty()) else {
        return labels.unknown.to_string();
    };
    varieties
        .iter()
        .map(|variety| {
            labels
                .variety_names
                .iter()
                .find(|(candidate, _)| candidate == variety)
                .map_or(variety.code(), |(_, name)| *name)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Cutoff date with its qualifier glyph.
pub fn cutoff_text(cutoff: &CutOffDate) -> String {
    match cutoff.kind {
        CutOffType::PossiblyLater => format!("≥ {}", cutoff.date),
        CutOffType::PossiblyEarlier => format!("≤ {}", cutoff.date),
        CutOffType::Strict | CutOffType::Unspecified => cutoff.date.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cutoff_qualifiers() {
        assert_eq!(
            cutoff_text(&CutOffDate::new("2023-01", CutOffType::PossiblyLater)),
            "≥ 2023-01"
        );
        assert_eq!(
            cutoff_text(&CutOffDate::new("2023", CutOffType::PossiblyEarlier)),
            "≤ 2023"
        );
        assert_eq!(
            cutoff_text(&CutOffDate::new("2023-05-01", CutOffType::Strict)),
            "2023-05-01"
        );
    }

    #[test]
    fn variety_names() {
        assert_eq!(
            varieties_text(Some(&[LanguageVariety::PtBr, LanguageVariety::GlEs]), &PT),
            "Brasil, Galiza"
        );
        assert_eq!(varieties_text(None, &PT), "(?)");
    }

    #[test]
    fn links_escape_text() {
        let mut xml = Writer::new(Vec::new());
        write_optional_link(&mut xml, "P&D <lab>", Some("https://x.example/?a=1&b=2")).unwrap();
        let out = String::from_utf8(xml.into_inner()).unwrap();
        insta::assert_snapshot!(out, @r#"<a href="https://x.example/?a=1&amp;b=2">P&amp;D &lt;lab&gt;</a>"#);
    }
}
