//! Price lookups against the pricing site.
//!
//! Pages are fetched with a blocking client and scanned for the labeled
//! price-table cell. A page missing the expected structure yields `None`
//! rather than an error; only transport failures surface as errors, so a
//! dead network and a missing label stay distinguishable downstream.

use crate::config;
use crate::error::Result;
use crate::html;
use rand::Rng;
use reqwest::blocking::Client;
use std::thread;
use std::time::Duration;

// ---------------------------------------------------------------------------
// CardIdentity
// ---------------------------------------------------------------------------

/// Name and set scraped from a card page heading. Either half may be
/// missing when the page layout is unexpected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardIdentity {
    pub name: Option<String>,
    pub set_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Pacing
// ---------------------------------------------------------------------------

/// Delay policy between consecutive fetches in a bulk refresh.
///
/// The pricing site rate-limits scripted traffic; a uniformly random pause
/// keeps successive requests off a fixed beat. Correctness never depends on
/// the delay, only politeness.
#[derive(Debug, Clone, Copy)]
pub struct Pacing {
    pub min: Duration,
    pub max: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            min: Duration::from_millis(2000),
            max: Duration::from_millis(4000),
        }
    }
}

// ---------------------------------------------------------------------------
// PriceFetcher
// ---------------------------------------------------------------------------

/// Fetches card pages and extracts labeled prices and headings.
pub struct PriceFetcher {
    timeout: Duration,
    pacing: Pacing,
    client: Option<Client>,
}

impl PriceFetcher {
    pub fn new(timeout: Duration, pacing: Pacing) -> Self {
        Self {
            timeout,
            pacing,
            client: None,
        }
    }

    /// Lazy HTTP client, created on first use.
    fn client(&mut self) -> &Client {
        if self.client.is_none() {
            self.client = Some(
                Client::builder()
                    .timeout(self.timeout)
                    .redirect(reqwest::redirect::Policy::limited(10))
                    .user_agent(config::USER_AGENT)
                    .build()
                    .expect("failed to build HTTP client"),
            );
        }
        self.client.as_ref().unwrap()
    }

    fn fetch_page(&mut self, url: &str) -> Result<String> {
        let resp = self.client().get(url).send()?.error_for_status()?;
        Ok(resp.text()?)
    }

    /// Price for the table row labeled `label` (e.g. `"Ungraded"`, `"PSA 10"`).
    pub fn quote(&mut self, url: &str, label: &str) -> Result<Option<f64>> {
        let page = self.fetch_page(url)?;
        Ok(extract_price(&page, label))
    }

    /// Both card-ledger prices from a single page fetch.
    pub fn card_quote(&mut self, url: &str) -> Result<(Option<f64>, Option<f64>)> {
        let page = self.fetch_page(url)?;
        Ok((
            extract_price(&page, config::LABEL_UNGRADED),
            extract_price(&page, config::LABEL_PSA10),
        ))
    }

    /// Card name and set from the page heading.
    pub fn identify(&mut self, url: &str) -> Result<CardIdentity> {
        let page = self.fetch_page(url)?;
        Ok(extract_identity(&page))
    }

    /// Sleep a uniformly random interval per the pacing policy.
    pub fn pause(&self) {
        let lo = self.pacing.min.as_secs_f64();
        let hi = self.pacing.max.as_secs_f64().max(lo);
        let secs = rand::thread_rng().gen_range(lo..=hi);
        thread::sleep(Duration::from_secs_f64(secs));
    }
}

// ---------------------------------------------------------------------------
// Page extraction
// ---------------------------------------------------------------------------

/// Find the price cell following the cell whose text equals `label`.
///
/// The price table lays labels and values out as sibling `<td>` cells, so
/// in document order the value is the cell right after its label.
pub fn extract_price(page: &str, label: &str) -> Option<f64> {
    let cells = html::inner_blocks(page, "td");
    let at = match cells.iter().position(|cell| html::text(cell) == label) {
        Some(at) => at,
        None => {
            eprintln!("No '{}' row on page", label);
            return None;
        }
    };
    let raw = match cells.get(at + 1) {
        Some(raw) => html::text(raw),
        None => {
            eprintln!("'{}' row has no price cell", label);
            return None;
        }
    };
    match parse_price(&raw) {
        Some(price) => Some(price),
        None => {
            eprintln!("Could not parse '{}' price from '{}'", label, raw);
            None
        }
    }
}

/// Card name and set from the first `<h1>`: the heading carries the name
/// and the set as separate text runs.
pub fn extract_identity(page: &str) -> CardIdentity {
    let heading = match html::inner_blocks(page, "h1").into_iter().next() {
        Some(heading) => heading,
        None => {
            eprintln!("No page heading found");
            return CardIdentity::default();
        }
    };
    let mut runs = html::text_runs(heading).into_iter();
    CardIdentity {
        name: runs.next(),
        set_name: runs.next(),
    }
}

/// Parse a price cell: currency symbol and thousands separators dropped.
fn parse_price(text: &str) -> Option<f64> {
    let cleaned = text.replace(['$', ','], "");
    cleaned.trim().parse::<f64>().ok()
}
