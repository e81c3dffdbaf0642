use log::{debug, info};
use regex::Regex;
use scraper::{Html, Selector};

// Parsed once and shared by every source
pub struct ProfilePage<'a> {
    text: &'a str,
    document: Html,
}

impl<'a> ProfilePage<'a> {
    pub fn parse(text: &'a str) -> Self {
        ProfilePage {
            text,
            document: Html::parse_document(text),
        }
    }

    pub fn text(&self) -> &str {
        self.text
    }

    // Only the first matching tag counts, even when its content is empty
    fn meta_content(&self, attr: &str, value: &str) -> Option<String> {
        let meta = Selector::parse("meta").unwrap();
        self.document
            .select(&meta)
            .find(|element| element.value().attr(attr) == Some(value))
            .and_then(|element| element.value().attr("content"))
            .filter(|content| !content.is_empty())
            .map(|content| content.to_string())
    }
}

pub trait ImageSource {
    fn name(&self) -> &str;
    fn locate(&self, page: &ProfilePage) -> Option<String>;
}

pub struct MetaProperty {
    property: String,
}

impl MetaProperty {
    pub fn new(property: &str) -> Self {
        MetaProperty {
            property: property.to_string(),
        }
    }
}

impl ImageSource for MetaProperty {
    fn name(&self) -> &str {
        &self.property
    }

    fn locate(&self, page: &ProfilePage) -> Option<String> {
        page.meta_content("property", &self.property)
    }
}

pub struct MetaName {
    name: String,
}

impl MetaName {
    pub fn new(name: &str) -> Self {
        MetaName {
            name: name.to_string(),
        }
    }
}

impl ImageSource for MetaName {
    fn name(&self) -> &str {
        &self.name
    }

    fn locate(&self, page: &ProfilePage) -> Option<String> {
        page.meta_content("name", &self.name)
    }
}

/// `"avatarLarger"` in the JSON state embedded in the page scripts.
pub struct ScriptPattern {
    pattern: Regex,
}

impl Default for ScriptPattern {
    fn default() -> Self {
        ScriptPattern {
            pattern: Regex::new(r#""avatarLarger"\s*:\s*"([^"]+)""#).unwrap(),
        }
    }
}

impl ImageSource for ScriptPattern {
    fn name(&self) -> &str {
        "avatarLarger"
    }

    fn locate(&self, page: &ProfilePage) -> Option<String> {
        self.pattern
            .captures(page.text())
            .and_then(|caps| caps.get(1))
            .map(|value| value.as_str().replace("\\u002F", "/"))
    }
}

pub struct AvatarLocator {
    sources: Vec<Box<dyn ImageSource>>,
}

impl Default for AvatarLocator {
    fn default() -> Self {
        AvatarLocator::new(vec![
            Box::new(MetaProperty::new("og:image")),
            Box::new(MetaName::new("twitter:image")),
            Box::new(ScriptPattern::default()),
        ])
    }
}

impl AvatarLocator {
    pub fn new(sources: Vec<Box<dyn ImageSource>>) -> Self {
        AvatarLocator { sources }
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|source| source.name()).collect()
    }

    pub fn locate(&self, status: u16, html: &str) -> Option<String> {
        if status != 200 {
            debug!("not inspecting page with status {}", status);
            return None;
        }

        let page = ProfilePage::parse(html);
        let found = self.sources.iter().find_map(|source| {
            let url = source.locate(&page)?;
            info!("profile image found via {}", source.name());
            Some(url)
        })?;

        Some(absolutize(&found))
    }

    pub fn diagnose(&self, html: &str) -> Vec<(String, Option<String>)> {
        let page = ProfilePage::parse(html);
        self.sources
            .iter()
            .map(|source| (source.name().to_string(), source.locate(&page)))
            .collect()
    }
}

pub fn absolutize(url: &str) -> String {
    if url.starts_with("//") {
        format!("https:{}", url)
    } else {
        url.to_string()
    }
}
