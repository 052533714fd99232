//! Prompt construction for tag generation.
//!
//! The system instruction states the hard constraints; the user message
//! lists the full current whitelist and blacklist inline, so prompt size
//! scales linearly with vocabulary size. No pagination or truncation: an
//! oversized prompt fails the call and that failure surfaces as a
//! generation error.

/// Fixed system instruction establishing role and constraints.
pub const SYSTEM_PROMPT: &str = "You are an AI assistant that generates relevant tags for images. \
     Generate tags in english language. \
     You must only use tags from the approved list of tags. \
     Never use any tags from the blacklist. \
     Your tags must be clean, appropriate, and safe for work.";

/// Build the user message text for the given vocabulary.
pub fn user_prompt(whitelist: &[String], blacklist: &[String]) -> String {
    format!(
        "Generate relevant tags for this image in english, using only the following approved tags:\n\
         {}\n\n\
         IMPORTANT: Never use these blacklisted tags: {}\n\n\
         Return only the tags separated by commas. Make sure tags are concise and relevant.",
        whitelist.join(", "),
        blacklist.join(", ")
    )
}
