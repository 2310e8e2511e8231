use compact_str::{format_compact, CompactString};
use std::borrow::Borrow;
use std::fmt;

use crate::question::Question;

/// Cache key for a [`Question`], rendered as `name:type:class`.
///
/// Type and class are written as decimal wire codes. Neither contains a
/// colon, so splitting on the last two colons always recovers the triple and
/// distinct questions never share a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(CompactString);

impl CacheKey {
    pub fn from_question(question: &Question) -> Self {
        Self(format_compact!(
            "{}:{}:{}",
            question.name,
            question.record_type.to_u16(),
            question.query_class.to_u16()
        ))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&Question> for CacheKey {
    fn from(question: &Question) -> Self {
        Self::from_question(question)
    }
}

impl Borrow<str> for CacheKey {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
