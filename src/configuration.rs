use crate::strategy::{Attributes, KeywordEntry, LinkStrategy};
use anyhow::{anyhow, Result};
use config::{Config, FileFormat};
use log::debug;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub strategies: Vec<StrategyConfig>,
}

/// One strategy definition. Written either as a map with `url`,
/// `attributes` and `keywords`, or compactly as `"url, keyword, ..."`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(try_from = "StrategyEntry")]
pub struct StrategyConfig {
    pub url: Option<String>,
    pub attributes: Attributes,
    pub keywords: Vec<KeywordEntry>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StrategyEntry {
    Compact(String),
    Full {
        #[serde(default)]
        url: Option<String>,
        #[serde(default, deserialize_with = "deserialize_attributes")]
        attributes: Attributes,
        #[serde(default, deserialize_with = "deserialize_keywords")]
        keywords: Vec<KeywordEntry>,
    },
}

/// Scalar config value; taken as text whatever its config type.
#[derive(Deserialize)]
#[serde(untagged)]
enum ScalarValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum KeywordValue {
    One(ScalarValue),
    Many(Vec<ScalarValue>),
}

impl Configuration {
    pub fn parse(path: PathBuf) -> Result<Self> {
        debug!("Loading strategies from {}", path.display());
        let conf = Config::builder()
            .add_source(config::File::from(path))
            .build()?;
        conf.try_deserialize().map_err(|e| e.into())
    }

    pub fn parse_str(source: &str, format: FileFormat) -> Result<Self> {
        let conf = Config::builder()
            .add_source(config::File::from_str(source, format))
            .build()?;
        conf.try_deserialize().map_err(|e| e.into())
    }
}

impl TryFrom<&str> for StrategyConfig {
    type Error = anyhow::Error;

    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        let mut parts = s
            .split(',')
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .map(String::from);

        let url = parts.next().ok_or(anyhow!("missing url"))?;
        let keywords: Vec<KeywordEntry> = parts.map(KeywordEntry::One).collect();
        if keywords.is_empty() {
            return Err(anyhow!("missing keywords for {}", url));
        }
        Ok(StrategyConfig {
            url: Some(url),
            attributes: Attributes::new(),
            keywords,
        })
    }
}

impl TryFrom<String> for StrategyConfig {
    type Error = anyhow::Error;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}

impl TryFrom<StrategyEntry> for StrategyConfig {
    type Error = anyhow::Error;

    fn try_from(entry: StrategyEntry) -> std::result::Result<Self, Self::Error> {
        match entry {
            StrategyEntry::Compact(s) => Self::try_from(s),
            StrategyEntry::Full {
                url,
                attributes,
                keywords,
            } => Ok(StrategyConfig {
                url,
                attributes,
                keywords,
            }),
        }
    }
}

impl From<StrategyConfig> for LinkStrategy {
    fn from(conf: StrategyConfig) -> Self {
        let mut strategy = LinkStrategy::new(conf.url.as_deref(), conf.attributes);
        strategy.set_keywords(conf.keywords);
        strategy
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Text(s) => write!(f, "{}", s),
            ScalarValue::Integer(i) => write!(f, "{}", i),
            // `{:?}` keeps the fraction on whole floats: 1.0 stays "1.0".
            ScalarValue::Float(x) => write!(f, "{:?}", x),
            ScalarValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

fn keyword_entry(value: KeywordValue) -> KeywordEntry {
    match value {
        KeywordValue::One(keyword) => KeywordEntry::One(keyword.to_string()),
        KeywordValue::Many(keywords) => {
            KeywordEntry::Many(keywords.iter().map(ToString::to_string).collect())
        }
    }
}

pub fn deserialize_attributes<'de, D>(deserializer: D) -> Result<Attributes, D::Error>
where
    D: Deserializer<'de>,
{
    let v: BTreeMap<String, ScalarValue> = BTreeMap::deserialize(deserializer)?;
    Ok(v.into_iter().map(|(k, v)| (k, v.to_string())).collect())
}

pub fn deserialize_keywords<'de, D>(deserializer: D) -> Result<Vec<KeywordEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let v: Vec<KeywordValue> = Vec::deserialize(deserializer)?;
    Ok(v.into_iter().map(keyword_entry).collect())
}
