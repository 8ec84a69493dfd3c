//! Link header parsing (RFC 5988 style)
//!
//! Format: `Link: <https://www.extra-life.org/api/participants?offset=101>;rel="next", ...`
//!
//! Parsing is lenient: a directive without both a `<url>` and a `rel="..."`
//! capture, or with a relation other than first/prev/next/last, is dropped
//! without affecting the rest of the header.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Text strictly between `<` and the following `>`
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<([^>]+)>").unwrap());

/// Text strictly between `rel="` and the following `"`, keyword matched case-insensitively
static REL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"(?i)rel="([^"]+)""#).unwrap());

/// Link relations understood by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    First,
    Prev,
    Next,
    Last,
}

impl Relation {
    /// Match a captured relation name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_uppercase().as_str() {
            "FIRST" => Some(Self::First),
            "PREV" => Some(Self::Prev),
            "NEXT" => Some(Self::Next),
            "LAST" => Some(Self::Last),
            _ => None,
        }
    }

    /// Wire name of the relation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Prev => "prev",
            Self::Next => "next",
            Self::Last => "last",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relation → URL mapping advertised by one response
///
/// Holds at most one URL per relation. Built once per response by
/// [`parse_link_header`] and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSet {
    first: Option<String>,
    prev: Option<String>,
    next: Option<String>,
    last: Option<String>,
}

impl LinkSet {
    /// URL advertised for a relation
    pub fn get(&self, rel: Relation) -> Option<&str> {
        match rel {
            Relation::First => self.first.as_deref(),
            Relation::Prev => self.prev.as_deref(),
            Relation::Next => self.next.as_deref(),
            Relation::Last => self.last.as_deref(),
        }
    }

    pub fn first_link(&self) -> Option<&str> {
        self.get(Relation::First)
    }

    pub fn prev_link(&self) -> Option<&str> {
        self.get(Relation::Prev)
    }

    pub fn next_link(&self) -> Option<&str> {
        self.get(Relation::Next)
    }

    pub fn last_link(&self) -> Option<&str> {
        self.get(Relation::Last)
    }

    /// True when no recognized relation was advertised
    pub fn is_empty(&self) -> bool {
        self.first.is_none() && self.prev.is_none() && self.next.is_none() && self.last.is_none()
    }

    fn set(&mut self, rel: Relation, url: String) {
        let slot = match rel {
            Relation::First => &mut self.first,
            Relation::Prev => &mut self.prev,
            Relation::Next => &mut self.next,
            Relation::Last => &mut self.last,
        };
        *slot = Some(url);
    }
}

/// Parse a raw `link` header value
///
/// Returns `None` when the header is absent or empty. Otherwise returns a
/// [`LinkSet`], which may hold no relations at all if nothing in the header
/// was usable. Directives are processed left to right; when two of them
/// claim the same relation the later one wins.
pub fn parse_link_header(raw: Option<&str>) -> Option<LinkSet> {
    let raw = raw.filter(|s| !s.is_empty())?;

    let directives: Vec<&str> = raw.split(',').collect();
    if directives.is_empty() {
        return None;
    }

    let mut links = LinkSet::default();
    for directive in directives {
        let (Some(url), Some(rel)) = (URL_REGEX.captures(directive), REL_REGEX.captures(directive))
        else {
            continue;
        };

        if let Some(relation) = Relation::from_name(&rel[1]) {
            links.set(relation, url[1].to_string());
        }
    }

    Some(links)
}
