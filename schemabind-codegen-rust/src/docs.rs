//! Doc comment text for generated items.

/// Trimmed, non-empty description paragraphs.
pub(crate) fn paragraphs(description: &[String]) -> Vec<String> {
    description
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn link(href: &str) -> String {
    format!("<{}>", href)
}

/// Description paragraphs separated by blank lines, then the reference link.
pub(crate) fn item_doc(description: &[String], href: Option<&str>) -> Option<String> {
    let mut sections = paragraphs(description);
    sections.extend(href.map(link));
    (!sections.is_empty()).then(|| sections.join("\n\n"))
}
