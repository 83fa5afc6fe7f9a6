/// Instruction sent to the generator for `channel`.
///
/// The wording is free; the entry count and the per-entry rules (summary and
/// body length targets, neutral third-person tone, entity extraction, topic
/// classification, 0-100 sentiment, plausible view count) are not.
pub fn build_prompt(channel: &str, entry_count: usize) -> String {
    format!(
        r#"You are one stage of an automated pipeline that turns a YouTube channel into a formal encyclopaedia.
The channel is: "{channel}".

Produce the results of the content extraction and language processing stages for exactly {entry_count} representative videos from this channel.
If the channel is well known, draw on what you know about it to keep the entries accurate.
If the channel is obscure or generic, invent realistic content that fits its name.

For each video provide:
1. "title" and a realistic "publishDate".
2. "summary": an abstract-style summary of about 80 words.
3. "fullContent": an academic article body of about 300 words. Write in objective, third-person language and describe the subject matter directly instead of saying "In this video".
4. "entities": the key people, technologies, places and concepts, each with a type label.
5. "category": a broad topic classification.
6. "sentimentScore": a number from 0 (negative) to 100 (positive) reflecting the video's tone.
7. "views": a realistic view count.

Keep the tone academic, objective and structured, suitable for publication on a MediaWiki site."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_channel_and_count() {
        let prompt = build_prompt("Fireship", 6);
        assert!(prompt.contains("\"Fireship\""));
        assert!(prompt.contains("exactly 6 representative videos"));
        assert!(prompt.contains("about 80 words"));
        assert!(prompt.contains("about 300 words"));
    }
}
