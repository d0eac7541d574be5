/// Derive a URL-safe slug from a post title.
///
/// Lowercases ASCII letters, drops every character that is not an ASCII
/// letter, digit, whitespace or `-`, and joins the remaining words with a
/// single `-`. Leading and trailing separators are never emitted.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() || c == '-' {
            pending_separator = true;
        }
    }

    slug
}
