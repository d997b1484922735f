//! Raw spreadsheet cells.

/// A hyperlink embedded in a cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Link {
    /// Display text of the link (untrimmed).
    pub text: String,
    pub href: Option<String>,
}

/// The text content of one cell plus every link inside it, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawCell {
    pub text: String,
    pub links: Vec<Link>,
}

impl RawCell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            links: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_link(mut self, text: impl Into<String>, href: Option<&str>) -> Self {
        self.links.push(Link {
            text: text.into(),
            href: href.map(str::to_string),
        });
        self
    }

    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    pub fn first_link(&self) -> Option<&Link> {
        self.links.first()
    }
}
