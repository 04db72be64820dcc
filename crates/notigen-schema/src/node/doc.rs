use crate::prelude::*;

///
/// DocComment
/// The structured documentation block attached to a field, exactly as the
/// environment hands it over: an opening `<member …>` wrapper line, the
/// interior markup, the closing wrapper line, and a trailing blank line.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DocComment(String);

impl DocComment {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Raw lines of the block, framing included.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.split('\n')
    }
}
