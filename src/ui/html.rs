/// Escape text for use in element content and quoted attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind<'a> {
    Submit,
    Link(&'a str),
}

pub fn button(kind: ButtonKind<'_>, text: &str, class: &str) -> String {
    match kind {
        ButtonKind::Submit => format!(
            r#"<button type="submit" class="{}">{}</button>"#,
            escape(class),
            escape(text)
        ),
        ButtonKind::Link(href) => format!(
            r#"<a href="{}" class="{}">{}</a>"#,
            escape(href),
            escape(class),
            escape(text)
        ),
    }
}
