//! Wire shapes: the airport representation and its hypermedia envelope.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// External shape of an airport. Carries the raw terminal id, never the
/// terminal itself. String fields default to empty on input so partial
/// payloads (terminal reassignment) deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportRepresentation {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(rename = "terminalId")]
    pub terminal_id: Option<i64>,
}

/// One hypermedia link target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Href {
    pub href: String,
}

/// A representation plus its named links, serialized HAL-style: the inner
/// fields flattened at the top level, links under `_links`. The map is
/// ordered so serialization is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Linked<T> {
    #[serde(flatten)]
    pub data: T,
    #[serde(rename = "_links")]
    pub links: BTreeMap<String, Href>,
}

impl<T> Linked<T> {
    pub fn new(data: T) -> Self {
        Linked {
            data,
            links: BTreeMap::new(),
        }
    }

    pub fn with_link(mut self, name: &str, href: String) -> Self {
        self.links.insert(name.to_string(), Href { href });
        self
    }

    pub fn link(&self, name: &str) -> Option<&str> {
        self.links.get(name).map(|h| h.href.as_str())
    }
}
