//! Link derivation from routing conventions. Pure: no store access, and the
//! same identifier always yields the same URI.

/// Builds the URIs callers use to re-fetch or re-list airports.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    base: String,
}

impl LinkBuilder {
    /// `base` is the public origin plus any mount prefix, e.g.
    /// `http://localhost:3000`. Trailing slashes are stripped.
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        LinkBuilder { base }
    }

    /// URI of one airport.
    pub fn airport(&self, code: &str) -> String {
        format!("{}/airports/{}", self.base, code)
    }

    /// URI of the airport collection.
    pub fn airports(&self) -> String {
        format!("{}/airports", self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_link_embeds_the_code() {
        let links = LinkBuilder::new("http://api.test");
        assert_eq!(links.airport("JFK"), "http://api.test/airports/JFK");
        assert_eq!(links.airports(), "http://api.test/airports");
    }

    #[test]
    fn trailing_slashes_are_stripped() {
        let links = LinkBuilder::new("http://api.test//");
        assert_eq!(links.airports(), "http://api.test/airports");
    }
}
