use crate::ai::client::EMPTY_SENTINEL;

/// Build the digest prompt for one category's raw block.
///
/// The model is asked to answer in Telegram Markdown only, and to reply with
/// the literal sentinel phrase when nothing in the block is worth reporting,
/// so the caller can detect an empty category by substring match.
pub fn build_digest_prompt(category: &str, raw_text: &str) -> String {
    format!(
        "You are the editor of a daily AI news briefing.\n\
         \n\
         TASK:\n\
         Analyze the following article snippets collected for the category \
         \"{category}\". Ignore duplicates and minor announcements.\n\
         \n\
         1. Identify the 3 to 5 most important stories or breakthroughs.\n\
         2. Write a short, neutral summary for each (2-3 sentences).\n\
         3. Under each summary, list the links to the original articles.\n\
         4. If there is nothing important, reply exactly: \"{EMPTY_SENTINEL}\".\n\
         \n\
         Format the whole answer as clean Telegram Markdown (use *bold*, \
         _italic_, [text](URL), but no Markdown headings #).\n\
         Start directly with the first story.\n\
         \n\
         HERE IS TODAY'S RAW DATA:\n\
         ---\n\
         {raw_text}\n\
         ---\n\
         END OF RAW DATA.\n"
    )
}
