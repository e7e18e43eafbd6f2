/// The element selector an in-page link points at. A bare `#` and links
/// to other pages have none.
pub fn fragment_target(href: &str) -> Option<&str> {
    let href = href.trim();
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(href),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_same_page_fragments() {
        assert_eq!(fragment_target("#services"), Some("#services"));
        assert_eq!(fragment_target(" #home "), Some("#home"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("/faq#try"), None);
        assert_eq!(fragment_target("https://snapboost.app"), None);
    }
}
