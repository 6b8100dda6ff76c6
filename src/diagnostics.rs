// Tag balance counting.
//
// Matching is plain substring search, not markup parsing. `<Tabs` also hits
// `<TabsContent`, and attributes or self-closing forms count as openings.
// Reports produced by earlier runs depend on these exact numbers.

use serde::{Serialize, Serializer};
use serde::ser::SerializeStruct;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub tag: String,
    pub open: usize,
    pub close: usize,
}

impl TagCount {
    pub fn balance(&self) -> i64 {
        self.open as i64 - self.close as i64
    }

    pub fn is_balanced(&self) -> bool {
        self.open == self.close
    }
}

impl fmt::Display for TagCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Open={}, Close={}, Balance={}",
            self.tag,
            self.open,
            self.close,
            self.balance()
        )
    }
}

impl Serialize for TagCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("TagCount", 4)?;
        s.serialize_field("tag", &self.tag)?;
        s.serialize_field("open", &self.open)?;
        s.serialize_field("close", &self.close)?;
        s.serialize_field("balance", &self.balance())?;
        s.end()
    }
}

pub fn count_tag(content: &str, tag: &str) -> TagCount {
    let open = content.matches(&format!("<{tag}")).count();
    let close = content.matches(&format!("</{tag}>")).count();
    TagCount {
        tag: tag.to_string(),
        open,
        close,
    }
}

/// One record per tag, in the order given.
pub fn tag_balance<S: AsRef<str>>(content: &str, tags: &[S]) -> Vec<TagCount> {
    tags.iter()
        .map(|tag| {
            let count = count_tag(content, tag.as_ref());
            tracing::debug!(
                tag = %count.tag,
                open = count.open,
                close = count.close,
                balanced = count.is_balanced(),
                "counted tag"
            );
            count
        })
        .collect()
}
