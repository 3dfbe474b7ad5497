use serde::{Deserialize, Serialize};

/// A blog post as returned by the content service listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostSummary {
    /// Opaque id, unique within the blog collection.
    pub id: String,
    /// URL-safe identifier, unique within (type, language).
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    /// Tags for categorization and search.
    #[serde(default)]
    pub tags: Vec<String>,
    /// ISO-8601 publication timestamp.
    pub date: String,
    /// Estimated reading time, e.g. "6 min".
    #[serde(default, rename = "readTime")]
    pub read_time: String,
}

/// A portfolio project as returned by the content service listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Explicit publication date, if the entry has one.
    #[serde(default)]
    pub date: Option<String>,
    /// Creation timestamp maintained by the service itself.
    #[serde(default, rename = "createdTime")]
    pub created_time: Option<String>,
}

/// Full body of a single blog post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostContent {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

/// One unit of a rich-text document as modeled by the content service.
///
/// The service emits more block kinds than the ones listed here (dividers,
/// images, embeds, ...). Those deserialize into `Other` so schema drift on
/// the service side never breaks decoding; text extraction treats them as
/// contributing no text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ContentBlock {
    #[serde(rename = "paragraph")]
    Paragraph {
        #[serde(default)]
        paragraph: RichTextPayload,
    },
    #[serde(rename = "heading_1")]
    Heading1 {
        #[serde(default)]
        heading_1: RichTextPayload,
    },
    #[serde(rename = "heading_2")]
    Heading2 {
        #[serde(default)]
        heading_2: RichTextPayload,
    },
    #[serde(rename = "heading_3")]
    Heading3 {
        #[serde(default)]
        heading_3: RichTextPayload,
    },
    #[serde(rename = "bulleted_list_item")]
    BulletedListItem {
        #[serde(default)]
        bulleted_list_item: RichTextPayload,
    },
    #[serde(rename = "numbered_list_item")]
    NumberedListItem {
        #[serde(default)]
        numbered_list_item: RichTextPayload,
    },
    #[serde(rename = "quote")]
    Quote {
        #[serde(default)]
        quote: RichTextPayload,
    },
    #[serde(other)]
    Other,
}

/// The `rich_text` runs carried by a recognized block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RichTextPayload {
    #[serde(default)]
    pub rich_text: Vec<RichTextRun>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RichTextRun {
    #[serde(default)]
    pub plain_text: String,
}

impl RichTextPayload {
    pub fn from_plain(text: &str) -> Self {
        Self {
            rich_text: vec![RichTextRun {
                plain_text: text.to_string(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_deserialization() {
        let json = r###"{
            "type": "paragraph",
            "paragraph": {
                "rich_text": [
                    { "plain_text": "Hello " },
                    { "plain_text": "world" }
                ]
            }
        }"###;

        let block: ContentBlock = serde_json::from_str(json).unwrap();
        match block {
            ContentBlock::Paragraph { paragraph } => {
                assert_eq!(paragraph.rich_text.len(), 2);
                assert_eq!(paragraph.rich_text[0].plain_text, "Hello ");
            }
            other => panic!("Expected paragraph, got: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_block_deserializes_to_other() {
        let json = r###"{ "type": "divider", "divider": {} }"###;
        let block: ContentBlock = serde_json::from_str(json).unwrap();
        assert!(matches!(block, ContentBlock::Other));
    }

    #[test]
    fn test_run_missing_plain_text_defaults_empty() {
        let json = r###"{
            "type": "quote",
            "quote": { "rich_text": [ {} ] }
        }"###;

        let block: ContentBlock = serde_json::from_str(json).unwrap();
        match block {
            ContentBlock::Quote { quote } => {
                assert_eq!(quote.rich_text[0].plain_text, "");
            }
            other => panic!("Expected quote, got: {:?}", other),
        }
    }

    #[test]
    fn test_post_content_default_empty() {
        let content: PostContent = serde_json::from_str("{}").unwrap();
        assert!(content.content.is_empty());
    }
}
