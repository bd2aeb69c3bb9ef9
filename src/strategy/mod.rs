mod hyperlink;
mod keywords;

use std::collections::BTreeSet;

pub use hyperlink::{merge_attributes, Attributes, LinkStrategy};
pub use keywords::{IntoKeywords, KeywordEntry};

/// Something a keyword matcher can register and call back at match time.
pub trait Strategy {
    /// The keywords this strategy should be indexed under.
    fn keywords(&self) -> &BTreeSet<String>;
    /// Markup to splice into the output in place of the matched keyword.
    fn decorate(&self, keyword: &str) -> String;
}
