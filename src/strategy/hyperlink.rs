use crate::strategy::{IntoKeywords, Strategy};
use std::collections::{BTreeMap, BTreeSet};

/// HTML attributes rendered on a link, iterated in key order.
pub type Attributes = BTreeMap<String, String>;

const HREF: &str = "href";

/// Links a set of keywords to a url.
///
/// The attributes become html attributes on every link this strategy
/// produces. When a url is set it is rendered as `href`, unless the
/// supplied attributes carry their own `href`, which then takes precedence:
///
/// ```
/// use keylink::{Attributes, LinkStrategy};
///
/// let mut attributes = Attributes::new();
/// attributes.insert("title".to_string(), "How cool!".to_string());
///
/// let strategy = LinkStrategy::new(Some("https://example.com"), attributes);
/// assert_eq!(
///     strategy.decorate("cool"),
///     r#"<a href="https://example.com" title="How cool!">cool</a>"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkStrategy {
    url: Option<String>,
    /// Attributes as last handed to `set_attributes`.
    supplied: Attributes,
    /// `supplied` merged with the url.
    attributes: Attributes,
    keywords: BTreeSet<String>,
}

impl LinkStrategy {
    pub fn new(url: Option<&str>, attributes: Attributes) -> Self {
        let mut strategy = Self::default();
        strategy.set_attributes(attributes);
        strategy.set_url(url);
        strategy
    }

    pub fn with_url(url: &str) -> Self {
        Self::new(Some(url), Attributes::new())
    }

    /// Replaces every keyword. Nested collections are flattened one level.
    pub fn set_keywords<I>(&mut self, keywords: I)
    where
        I: IntoIterator,
        I::Item: IntoKeywords,
    {
        self.keywords = keywords
            .into_iter()
            .flat_map(IntoKeywords::into_keywords)
            .collect();
    }

    /// Keywords this strategy is registered under. Never consulted by
    /// `decorate`.
    pub fn keywords(&self) -> &BTreeSet<String> {
        &self.keywords
    }

    pub fn add_keyword(&mut self, keyword: impl Into<String>) -> &mut Self {
        self.keywords.insert(keyword.into());
        self
    }

    /// An empty url counts as no url.
    pub fn set_url(&mut self, url: Option<&str>) {
        self.url = url.filter(|url| !url.is_empty()).map(str::to_owned);
        self.attributes = merge_attributes(self.url.as_deref(), &self.supplied);
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn set_attributes(&mut self, attributes: Attributes) {
        self.attributes = merge_attributes(self.url.as_deref(), &attributes);
        self.supplied = attributes;
    }

    /// The attributes rendered on each link, `href` included.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Wraps `keyword` in an anchor tag. Neither the keyword nor the
    /// attribute values are escaped.
    pub fn decorate(&self, keyword: &str) -> String {
        let mut link = String::from("<a");
        for (name, value) in self.attributes.iter() {
            link.push(' ');
            link.push_str(name);
            link.push_str("=\"");
            link.push_str(value);
            link.push('"');
        }
        link.push('>');
        link.push_str(keyword);
        link.push_str("</a>");
        link
    }
}

impl Strategy for LinkStrategy {
    fn keywords(&self) -> &BTreeSet<String> {
        LinkStrategy::keywords(self)
    }

    fn decorate(&self, keyword: &str) -> String {
        LinkStrategy::decorate(self, keyword)
    }
}

/// Starts from `{href: url}` when a url is given and lays `attributes` on
/// top, so an `href` in `attributes` replaces the one derived from the url.
pub fn merge_attributes(url: Option<&str>, attributes: &Attributes) -> Attributes {
    match url {
        Some(url) => {
            let mut merged = Attributes::new();
            merged.insert(HREF.to_string(), url.to_string());
            merged.extend(attributes.iter().map(|(k, v)| (k.clone(), v.clone())));
            merged
        }
        None => attributes.clone(),
    }
}
