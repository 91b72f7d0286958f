//! Static document metadata: title, description, keywords and the social
//! preview cards. `index.html` carries the same tags for crawlers that never
//! run the wasm bundle.

use log::{debug, warn};
use web_sys::Document;

pub const TITLE: &str = "Skopio — The Simple Client Portal for Freelancers";
pub const DESCRIPTION: &str = "Give every client a branded portal. AI writes your proposals in 10 seconds. Project status, invoicing, file sharing — all in one link. Starting at $19/month.";
pub const KEYWORDS: &str = "client portal, freelancer tools, AI proposals, invoicing, project management, freelance";

const OG_DESCRIPTION: &str = "Give every client a branded portal. AI writes your proposals in 10 seconds. Starting at $19/month.";
const TWITTER_DESCRIPTION: &str = "AI writes your proposals in 10 seconds. Starting at $19/month.";
const SITE_URL: &str = "https://skopio.co";
const SITE_NAME: &str = "Skopio";
const TWITTER_CREATOR: &str = "@skopioapp";

/// Which attribute keys a `<meta>` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaKey {
    Name(&'static str),
    Property(&'static str),
}

impl MetaKey {
    fn attribute(&self) -> &'static str {
        match self {
            MetaKey::Name(_) => "name",
            MetaKey::Property(_) => "property",
        }
    }

    fn value(&self) -> &'static str {
        match self {
            MetaKey::Name(v) | MetaKey::Property(v) => v,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetaTag {
    pub key: MetaKey,
    pub content: &'static str,
}

impl MetaTag {
    /// CSS selector matching this tag's `<meta>` element.
    pub fn selector(&self) -> String {
        format!("meta[{}=\"{}\"]", self.key.attribute(), self.key.value())
    }
}

pub fn head_tags() -> Vec<MetaTag> {
    let tag = |key, content| MetaTag { key, content };
    vec![
        tag(MetaKey::Name("description"), DESCRIPTION),
        tag(MetaKey::Name("keywords"), KEYWORDS),
        tag(MetaKey::Property("og:title"), TITLE),
        tag(MetaKey::Property("og:description"), OG_DESCRIPTION),
        tag(MetaKey::Property("og:url"), SITE_URL),
        tag(MetaKey::Property("og:site_name"), SITE_NAME),
        tag(MetaKey::Property("og:type"), "website"),
        tag(MetaKey::Name("twitter:card"), "summary_large_image"),
        tag(MetaKey::Name("twitter:title"), TITLE),
        tag(MetaKey::Name("twitter:description"), TWITTER_DESCRIPTION),
        tag(MetaKey::Name("twitter:creator"), TWITTER_CREATOR),
    ]
}

/// Sets the title and upserts every meta tag into `<head>`.
pub fn apply_to_document(document: &Document) {
    document.set_title(TITLE);

    let Some(head) = document.head() else {
        warn!("document has no <head>, skipping meta tags");
        return;
    };

    for tag in head_tags() {
        let selector = tag.selector();
        let existing = document.query_selector(&selector).ok().flatten();
        let element = match existing {
            Some(el) => el,
            None => match document.create_element("meta") {
                Ok(el) => {
                    if head.append_child(&el).is_err() {
                        warn!("could not append {}", selector);
                        continue;
                    }
                    el
                }
                Err(e) => {
                    warn!("could not create {}: {:?}", selector, e);
                    continue;
                }
            },
        };
        if let Err(e) = element
            .set_attribute(tag.key.attribute(), tag.key.value())
            .and_then(|_| element.set_attribute("content", tag.content))
        {
            warn!("could not set {}: {:?}", selector, e);
        }
    }
    debug!("document metadata applied");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique() {
        let tags = head_tags();
        for (i, a) in tags.iter().enumerate() {
            assert!(tags[i + 1..].iter().all(|b| b.key != a.key), "duplicate {:?}", a.key);
        }
    }

    #[test]
    fn open_graph_uses_property_attribute() {
        for tag in head_tags() {
            if tag.key.value().starts_with("og:") {
                assert_eq!(tag.key.attribute(), "property");
            } else {
                assert_eq!(tag.key.attribute(), "name");
            }
        }
    }

    #[test]
    fn selector_names_the_keyed_attribute() {
        let og = MetaTag { key: MetaKey::Property("og:title"), content: TITLE };
        assert_eq!(og.selector(), r#"meta[property="og:title"]"#);
        let description = MetaTag { key: MetaKey::Name("description"), content: DESCRIPTION };
        assert_eq!(description.selector(), r#"meta[name="description"]"#);
    }

    #[test]
    fn twitter_card_is_large_image() {
        let card = head_tags()
            .into_iter()
            .find(|t| t.key == MetaKey::Name("twitter:card"))
            .map(|t| t.content);
        assert_eq!(card, Some("summary_large_image"));
    }
}
