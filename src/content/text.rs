use crate::content::types::{ContentBlock, RichTextPayload};

/// Flatten a block sequence into plain text for search scoring.
///
/// Each recognized block contributes the concatenation of its runs'
/// `plain_text`; unrecognized blocks contribute an empty string. Per-block
/// strings are joined with a single space in input order, so an unrecognized
/// block still introduces a separator rather than being skipped.
pub fn extract_text(blocks: &[ContentBlock]) -> String {
    blocks
        .iter()
        .map(block_text)
        .collect::<Vec<_>>()
        .join(" ")
}

fn block_text(block: &ContentBlock) -> String {
    match block {
        ContentBlock::Paragraph { paragraph } => runs_text(paragraph),
        ContentBlock::Heading1 { heading_1 } => runs_text(heading_1),
        ContentBlock::Heading2 { heading_2 } => runs_text(heading_2),
        ContentBlock::Heading3 { heading_3 } => runs_text(heading_3),
        ContentBlock::BulletedListItem { bulleted_list_item } => runs_text(bulleted_list_item),
        ContentBlock::NumberedListItem { numbered_list_item } => runs_text(numbered_list_item),
        ContentBlock::Quote { quote } => runs_text(quote),
        ContentBlock::Other => String::new(),
    }
}

fn runs_text(payload: &RichTextPayload) -> String {
    payload
        .rich_text
        .iter()
        .map(|run| run.plain_text.as_str())
        .collect()
}
