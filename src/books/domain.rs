use crate::core::domain::Identifiable;

pub mod model;

pub(crate) trait Book: Identifiable {
    fn is_read(&self) -> bool;
    fn author_contains(&self, query: &str) -> bool;
    fn title_contains(&self, query: &str) -> bool;
}

// case-insensitive substring match used by author and title searches
pub(crate) fn contains_ignore_case(value: &str, query: &str) -> bool {
    value.to_lowercase().contains(query.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use crate::books::domain::contains_ignore_case;

    #[tokio::test]
    async fn test_should_match_ignoring_case() {
        assert!(contains_ignore_case("The Hobbit", "HOBBIT"));
        assert!(contains_ignore_case("J. R. R. Tolkien", "tolk"));
        assert!(contains_ignore_case("Dune", ""));
        assert!(!contains_ignore_case("Dune", "dunes"));
    }
}
