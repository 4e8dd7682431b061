use scraper::{Html, Selector};

use crate::{
    configuration::SelectorSettings,
    domain::{date_taken::normalize_date_taken, photo::PhotoDetails},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailField {
    Title,
    Description,
    DateTakenLabel,
}

pub struct FieldRule {
    pub field: DetailField,
    pub selector: Selector,
    pub required: bool,
    pub post_process: fn(&str) -> String,
}

impl FieldRule {
    pub fn new(field: DetailField, selector: &str, required: bool) -> anyhow::Result<Self> {
        let selector = Selector::parse(selector)
            .map_err(|e| anyhow::anyhow!("Invalid selector {:?} for {:?}: {:?}", selector, field, e))?;

        Ok(FieldRule {
            field,
            selector,
            required,
            post_process: trim_text,
        })
    }

    /// Text of the first match, post-processed. `None` when nothing matches.
    fn apply(&self, html_document: &Html) -> Option<String> {
        html_document
            .select(&self.selector)
            .next()
            .map(|element| (self.post_process)(&element.text().collect::<String>()))
    }
}

fn trim_text(text: &str) -> String {
    text.trim().to_string()
}

/// Reads title, description and date taken from a detail page.
pub struct DetailScraper {
    rules: Vec<FieldRule>,
}

impl DetailScraper {
    pub fn new(rules: Vec<FieldRule>) -> Self {
        DetailScraper { rules }
    }

    /// Every field optional, one rule per field from the configured selectors.
    pub fn from_settings(selectors: &SelectorSettings) -> anyhow::Result<Self> {
        Ok(DetailScraper::new(vec![
            FieldRule::new(DetailField::Title, &selectors.title, false)?,
            FieldRule::new(DetailField::Description, &selectors.description, false)?,
            FieldRule::new(DetailField::DateTakenLabel, &selectors.date_taken, false)?,
        ]))
    }

    /// `None` only when a required field is missing. Optional fields that
    /// are missing become an empty string, or no date.
    pub fn extract_details(&self, page_source: &str) -> Option<PhotoDetails> {
        let html_document = Html::parse_document(page_source);
        let mut details = PhotoDetails::default();

        for rule in self.rules.iter() {
            let value = rule.apply(&html_document);

            let Some(value) = value else {
                if rule.required {
                    log::warn!("Required field {:?} missing from detail page", rule.field);
                    return None;
                }
                continue;
            };

            match rule.field {
                DetailField::Title => details.title = value,
                DetailField::Description => details.description = value,
                DetailField::DateTakenLabel => details.date_taken = normalize_date_taken(&value),
            }
        }

        Some(details)
    }
}
