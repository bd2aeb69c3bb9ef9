/// Keyword input that flattens one level of nesting.
pub trait IntoKeywords {
    fn into_keywords(self) -> Vec<String>;
}

impl IntoKeywords for &str {
    fn into_keywords(self) -> Vec<String> {
        vec![self.to_owned()]
    }
}

impl IntoKeywords for String {
    fn into_keywords(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoKeywords for &String {
    fn into_keywords(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl<T: Into<String>> IntoKeywords for Vec<T> {
    fn into_keywords(self) -> Vec<String> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<String>, const N: usize> IntoKeywords for [T; N] {
    fn into_keywords(self) -> Vec<String> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Clone + Into<String>> IntoKeywords for &[T] {
    fn into_keywords(self) -> Vec<String> {
        self.iter().cloned().map(Into::into).collect()
    }
}

/// A keyword list element that is either a single keyword or a group of them,
/// e.g. `[rust, [cargo, Cargo]]`.
#[derive(Debug, Clone, PartialEq)]
pub enum KeywordEntry {
    One(String),
    Many(Vec<String>),
}

impl IntoKeywords for KeywordEntry {
    fn into_keywords(self) -> Vec<String> {
        match self {
            KeywordEntry::One(keyword) => vec![keyword],
            KeywordEntry::Many(keywords) => keywords,
        }
    }
}

impl From<&str> for KeywordEntry {
    fn from(keyword: &str) -> Self {
        KeywordEntry::One(keyword.to_owned())
    }
}

impl From<String> for KeywordEntry {
    fn from(keyword: String) -> Self {
        KeywordEntry::One(keyword)
    }
}

impl<T: Into<String>> From<Vec<T>> for KeywordEntry {
    fn from(keywords: Vec<T>) -> Self {
        KeywordEntry::Many(keywords.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod test {
    use crate::strategy::{IntoKeywords, KeywordEntry};

    #[test]
    fn test_into_keywords() {
        let cases: Vec<(Vec<String>, Vec<&str>)> = vec![
            ("rust".into_keywords(), vec!["rust"]),
            (String::from("cargo").into_keywords(), vec!["cargo"]),
            (vec!["a", "b"].into_keywords(), vec!["a", "b"]),
            (["a", "b", "a"].into_keywords(), vec!["a", "b", "a"]),
            (["x", "y"][..].into_keywords(), vec!["x", "y"]),
            (KeywordEntry::from("one").into_keywords(), vec!["one"]),
            (
                KeywordEntry::from(vec!["b", "c"]).into_keywords(),
                vec!["b", "c"],
            ),
        ];

        for (actual, expected) in cases {
            assert_eq!(actual, expected, "testing keywords: {:?}", expected);
        }
    }
}
