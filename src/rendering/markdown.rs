use std::borrow::Cow;

use pulldown_cmark::{html, Options, Parser};

/// Render a blog post's Markdown body to sanitized HTML.
///
/// Tables, footnotes, strikethrough and smart punctuation are enabled. Raw
/// HTML in a post goes through `ammonia`; the only class that survives is the
/// `language-*` marker on fenced code, which the stylesheet highlights.
pub fn render_markdown(raw: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_SMART_PUNCTUATION;

    let parser = Parser::new_ext(raw, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    ammonia::Builder::default()
        .add_tag_attributes("code", &["class"])
        .attribute_filter(keep_code_language)
        .clean(&html_output)
        .to_string()
}

fn keep_code_language<'u>(element: &str, attribute: &str, value: &'u str) -> Option<Cow<'u, str>> {
    if element == "code" && attribute == "class" && !value.starts_with("language-") {
        return None;
    }
    Some(Cow::Borrowed(value))
}
