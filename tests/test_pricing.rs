//! Unit tests for page extraction: labeled price cells and card headings.
//! These run against inline HTML fixtures; no network is involved.

use pokebinder::pricing::{self, CardIdentity, Pacing};
use std::time::Duration;

const SAMPLE_PAGE: &str = r#"<html><body>
<h1 id="product_name">
  Charizard #4
  <a href="/console/pokemon-base-set">Pokemon Base Set</a>
</h1>
<table id="price_data">
<tr><td>Ungraded</td><td class="price js-price">$326.00</td></tr>
<tr><td>Grade 9</td><td class="price js-price">$828.40</td></tr>
<tr><td>PSA 10</td><td class="price js-price">$1,234.56</td></tr>
</table>
</body></html>"#;

// ---------------------------------------------------------------------------
// Price extraction
// ---------------------------------------------------------------------------

#[test]
fn extracts_the_labeled_price() {
    assert_eq!(pricing::extract_price(SAMPLE_PAGE, "Ungraded"), Some(326.0));
    assert_eq!(pricing::extract_price(SAMPLE_PAGE, "Grade 9"), Some(828.4));
}

#[test]
fn strips_currency_symbol_and_thousands_separator() {
    assert_eq!(pricing::extract_price(SAMPLE_PAGE, "PSA 10"), Some(1234.56));
}

#[test]
fn missing_label_yields_none() {
    assert_eq!(pricing::extract_price(SAMPLE_PAGE, "Grade 10"), None);
}

#[test]
fn unparseable_price_cell_yields_none() {
    let page = "<table><tr><td>PSA 10</td><td>N/A</td></tr></table>";
    assert_eq!(pricing::extract_price(page, "PSA 10"), None);
}

#[test]
fn label_without_a_sibling_cell_yields_none() {
    let page = "<table><tr><td>PSA 10</td></tr></table>";
    assert_eq!(pricing::extract_price(page, "PSA 10"), None);
}

// ---------------------------------------------------------------------------
// Heading extraction
// ---------------------------------------------------------------------------

#[test]
fn heading_splits_into_name_and_set() {
    let identity = pricing::extract_identity(SAMPLE_PAGE);
    assert_eq!(identity.name.as_deref(), Some("Charizard #4"));
    assert_eq!(identity.set_name.as_deref(), Some("Pokemon Base Set"));
}

#[test]
fn missing_heading_yields_an_empty_identity() {
    assert_eq!(
        pricing::extract_identity("<html><body>nothing here</body></html>"),
        CardIdentity::default()
    );
}

#[test]
fn heading_with_only_a_name_leaves_the_set_unknown() {
    let page = "<h1>Charizard #4</h1>";
    let identity = pricing::extract_identity(page);
    assert_eq!(identity.name.as_deref(), Some("Charizard #4"));
    assert_eq!(identity.set_name, None);
}

// ---------------------------------------------------------------------------
// Pacing
// ---------------------------------------------------------------------------

#[test]
fn default_pacing_is_two_to_four_seconds() {
    let pacing = Pacing::default();
    assert_eq!(pacing.min, Duration::from_secs(2));
    assert_eq!(pacing.max, Duration::from_secs(4));
}
