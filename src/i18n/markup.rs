//! Choosing between text and markup when writing a translation.

/// Inline tags a translation may carry.
const ALLOWED_TAGS: &[&str] = &["br", "strong", "b", "em", "i", "span"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Text(String),
    Markup(String),
}

/// Markup is used when either the node already renders a line break or the
/// translation itself contains a tag. Everything else is written as text.
pub fn render(current_markup: &str, target: &str) -> Rendered {
    if current_markup.contains("<br") || target.contains('<') {
        Rendered::Markup(sanitize_inline(target))
    } else {
        Rendered::Text(target.to_string())
    }
}

/// Escapes every `<` that does not open or close an allowed inline tag.
pub fn sanitize_inline(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;
    while let Some(pos) = rest.find('<') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match allowed_tag_len(tail) {
            Some(len) => {
                out.push_str(&tail[..len]);
                rest = &tail[len..];
            }
            None => {
                out.push_str("&lt;");
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Length of the tag at the start of `tail` if it is an allowed one without
/// attributes, e.g. `<br>`, `<br/>`, `</strong>`.
fn allowed_tag_len(tail: &str) -> Option<usize> {
    let end = tail.find('>')?;
    let inner = &tail[1..end];
    let inner = inner.strip_prefix('/').unwrap_or(inner);
    let inner = inner.strip_suffix('/').unwrap_or(inner).trim_end();
    let allowed = ALLOWED_TAGS
        .iter()
        .any(|tag| tag.eq_ignore_ascii_case(inner));
    allowed.then_some(end + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_strings_stay_text() {
        assert_eq!(
            render("About", "О проекте"),
            Rendered::Text("О проекте".to_string())
        );
    }

    #[test]
    fn ampersands_in_plain_text_are_not_markup() {
        assert_eq!(
            render("Research", "Research & Planning"),
            Rendered::Text("Research & Planning".to_string())
        );
    }

    #[test]
    fn target_with_tag_is_markup() {
        assert_eq!(
            render("x", "Next Generation<br>Urban Air Mobility"),
            Rendered::Markup("Next Generation<br>Urban Air Mobility".to_string())
        );
    }

    #[test]
    fn current_line_break_forces_markup() {
        assert_eq!(
            render("Line<br>break", "Single line"),
            Rendered::Markup("Single line".to_string())
        );
    }

    #[test]
    fn allowed_tags_survive_sanitizing() {
        let source = "<strong>Joby S4</strong> goes <em>fast</em><br/>ok</B>";
        assert_eq!(sanitize_inline(source), source);
    }

    #[test]
    fn other_tags_are_escaped() {
        assert_eq!(
            sanitize_inline("<script>alert(1)</script><br>"),
            "&lt;script>alert(1)&lt;/script><br>"
        );
        assert_eq!(sanitize_inline("<span class=\"x\">a</span>"), "&lt;span class=\"x\">a</span>");
    }

    #[test]
    fn stray_angle_bracket_is_escaped() {
        assert_eq!(sanitize_inline("noise < 65 dB"), "noise &lt; 65 dB");
    }
}
