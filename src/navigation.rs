use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use std::fmt;
use url::{Position, Url};

// Addresses are resolved against a throwaway base so relative inputs like
// "draft-07/readme?tab=draft" normalize, then serialized back without it.
static BASE: Lazy<Url> =
    Lazy::new(|| Url::parse("https://headline.invalid/").expect("unreachable"));

/// The current page's address, path and query only. The renderer receives it
/// explicitly instead of reading browser state, so navigation is testable
/// without a routing environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageAddress {
    url: Url,
}

impl PageAddress {
    pub fn parse(raw: &str) -> Result<Self> {
        let url = Url::options()
            .base_url(Some(&BASE))
            .parse(raw)
            .with_context(|| format!("{} is not a valid page address", raw))?;

        Ok(PageAddress { url })
    }

    /// The same address with its fragment replaced, as a relative string:
    /// `{path}[?query]#{fragment}`.
    pub fn with_fragment(&self, fragment: &str) -> String {
        let mut url = self.url.clone();
        url.set_fragment(Some(fragment));

        url[Position::BeforePath..].to_string()
    }
}

impl fmt::Display for PageAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url[Position::BeforePath..])
    }
}

/// The routing collaborator's contract: move the page to the given
/// same-document address. Implementations decide the mechanism.
pub trait Navigate {
    fn navigate(&mut self, address: &str) -> Result<()>;
}
