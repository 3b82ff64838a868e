use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub role: String,
    pub avatar_url: String,
}

/// One line of a post's body
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentLine {
    Paragraph { content: String },
    /// Text displayed as a hyperlink, the link target is always a placeholder
    Link { content: String },
    /// Any tag this version does not know how to render
    #[serde(other)]
    Unsupported,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub post_id: i64,
    pub author: Author,
    pub published_at: chrono::DateTime<chrono::Utc>,
    pub content: Vec<ContentLine>,
}

impl ContentLine {
    pub fn text(&self) -> Option<&str> {
        match self {
            ContentLine::Paragraph { content } | ContentLine::Link { content } => Some(content.as_str()),
            ContentLine::Unsupported => None,
        }
    }
}

impl Post {
    /// Content lines that can be displayed, in order. Unsupported lines are logged and skipped.
    pub fn displayable_content(&self) -> impl Iterator<Item = &ContentLine> {
        self.content.iter().filter(|line| match line {
            ContentLine::Unsupported => {
                log::warn!("Skip unsupported content line in post {}.", self.post_id);
                false
            },
            _ => true,
        })
    }
}
