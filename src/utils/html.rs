/// Strips markup from user-authored text before it is stored.
///
/// The front-end renders mentor questions, answers and contact messages with
/// `innerHTML`, so anything kept here must be inert. `ammonia` keeps harmless
/// formatting tags and drops scripts, event handlers and their content.
pub fn clean_html(input: &str) -> String {
    ammonia::clean(input.trim())
}
