//! Command definitions and interactive flows.
//!
//! All prompting and retry-until-valid input handling lives here, at the
//! boundary; the library surfaces typed errors and never blocks on a
//! terminal.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Input, Select};
use std::path::PathBuf;

use pokebinder::ledgers::CardDetails;
use pokebinder::{
    binder, config, CardEntry, CardOutcome, CollectionTracker, DexEntry, EntryKey, LedgerRecord,
    ProductEntry, ProductOutcome, QuantityUpdate, Selector,
};

// ---------------------------------------------------------------------------
// Command definitions
// ---------------------------------------------------------------------------

/// Track a Pokémon TCG collection: dex checklist, card prices, sealed products.
#[derive(Parser)]
#[command(name = "pokebinder", version, about)]
pub struct Cli {
    /// Directory holding the ledger CSV files
    #[arg(short, long, global = true, env = "POKEBINDER_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create any missing ledger files in the data directory
    Init,
    /// National-dex checklist
    #[command(subcommand)]
    Dex(DexCommands),
    /// Owned singles: prices, grading, quantities
    #[command(subcommand)]
    Cards(CardCommands),
    /// Sealed products: MSRP vs market price
    #[command(subcommand)]
    Products(ProductCommands),
}

#[derive(Subcommand)]
enum DexCommands {
    /// Document a species, or replace its card details
    Record {
        /// Species name; prompted for when omitted
        species: Option<String>,
    },
    /// Find a documented card and its binder position
    Lookup {
        /// Species name or national dex number
        query: String,
    },
    /// Resolve a name or number against the national dex reference
    Find {
        /// Species name or national dex number
        query: String,
    },
    /// Show the binder page and slot for a dex number
    Position { number: u32 },
}

#[derive(Subcommand)]
enum CardCommands {
    /// Add a card by its pricing-page URL
    Add { url: String },
    /// Re-fetch prices for one entry, by card name or row index
    Update { target: String },
    /// Update the owned quantity for one entry
    Quantity { target: String },
    /// Re-fetch prices for every entry, pausing between requests
    Refresh,
    /// Remove an entry by card name or row index
    Remove {
        /// Prompted for when omitted
        target: Option<String>,
    },
    /// Print the ledger
    List {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum ProductCommands {
    /// Add a sealed product by its pricing-page URL
    Add { url: String },
    /// Re-fetch the market price for one entry, by name or row index
    Update { target: String },
    /// Update the owned quantity for one entry
    Quantity { target: String },
    /// Re-fetch the market price for every entry, pausing between requests
    Refresh,
    /// Remove an entry by name or row index
    Remove {
        /// Prompted for when omitted
        target: Option<String>,
    },
    /// Print the ledger
    List {
        #[arg(long)]
        json: bool,
    },
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn run(args: Cli) -> Result<()> {
    let mut builder = CollectionTracker::builder();
    if let Some(dir) = args.data_dir {
        builder = builder.data_dir(dir);
    }
    let tracker = builder.build()?;

    match args.command {
        Commands::Init => cmd_init(&tracker),
        Commands::Dex(cmd) => match cmd {
            DexCommands::Record { species } => dex_record(&tracker, species),
            DexCommands::Lookup { query } => dex_lookup(&tracker, &query),
            DexCommands::Find { query } => dex_find(&tracker, &query),
            DexCommands::Position { number } => dex_position(number),
        },
        Commands::Cards(cmd) => match cmd {
            CardCommands::Add { url } => cards_add(&tracker, &url),
            CardCommands::Update { target } => cards_update(&tracker, &target),
            CardCommands::Quantity { target } => cards_quantity(&tracker, &target),
            CardCommands::Refresh => cards_refresh(&tracker),
            CardCommands::Remove { target } => cards_remove(&tracker, target),
            CardCommands::List { json } => cards_list(&tracker, json),
        },
        Commands::Products(cmd) => match cmd {
            ProductCommands::Add { url } => products_add(&tracker, &url),
            ProductCommands::Update { target } => products_update(&tracker, &target),
            ProductCommands::Quantity { target } => products_quantity(&tracker, &target),
            ProductCommands::Refresh => products_refresh(&tracker),
            ProductCommands::Remove { target } => products_remove(&tracker, target),
            ProductCommands::List { json } => products_list(&tracker, json),
        },
    }
}

fn cmd_init(tracker: &CollectionTracker) -> Result<()> {
    let created = tracker.init_ledgers()?;
    if created.is_empty() {
        println!(
            "All ledger files already exist in {}.",
            tracker.store().data_dir().display()
        );
    } else {
        for path in created {
            println!("Created {}", path.display());
        }
    }
    if !tracker.store().path(config::NATIONAL_DEX_FILE).exists() {
        println!(
            "Note: {} is missing; dex commands need the reference table.",
            config::NATIONAL_DEX_FILE
        );
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Dex commands
// ---------------------------------------------------------------------------

fn dex_record(tracker: &CollectionTracker, species: Option<String>) -> Result<()> {
    let species = match species {
        Some(species) => species,
        None => Input::new().with_prompt("Pokemon name").interact_text()?,
    };
    let dex = tracker.dex();
    let (number, name) = dex.resolve_species(&species)?;
    println!("{} is national dex #{}.", name, number);

    if let Some((entry, position)) = dex.find(&name)? {
        println!("Already documented:");
        print_dex_entry(&entry);
        println!("{}", binder::render_page(position));
        let replace = Confirm::new()
            .with_prompt("Replace this card?")
            .default(false)
            .interact()?;
        if !replace {
            println!("Kept the existing card.");
            return Ok(());
        }
    }

    let details = ask_card_details()?;
    let outcome = dex.record(&name, details)?;
    if outcome.created {
        println!("Documented {} (#{}).", outcome.entry.species, outcome.entry.dex_number);
    } else {
        println!("Replaced the {} card.", outcome.entry.species);
    }
    println!("File it in the binder here:");
    println!("{}", binder::render_page(outcome.position));
    Ok(())
}

fn dex_lookup(tracker: &CollectionTracker, query: &str) -> Result<()> {
    let (entry, position) = tracker.dex().lookup(query)?;
    println!("{} (#{}) is in your records.", entry.species, entry.dex_number);
    print_dex_entry(&entry);
    println!("{}", binder::render_page(position));
    Ok(())
}

fn dex_find(tracker: &CollectionTracker, query: &str) -> Result<()> {
    let (number, name) = tracker.dex().reference_lookup(query)?;
    println!("{} has national dex number #{}.", name, number);
    Ok(())
}

fn dex_position(number: u32) -> Result<()> {
    let position = binder::page_slot(number)?;
    println!("{}", binder::render_page(position));
    Ok(())
}

fn ask_card_details() -> Result<CardDetails> {
    let set_name = pick_set()?;
    let foil = Confirm::new()
        .with_prompt("Is the card a foil? (any foil)")
        .default(false)
        .interact()?;
    // Non-foils are never full art; skip the question.
    let full_art = if foil {
        Confirm::new()
            .with_prompt("Is it full art? (IR or higher rarity)")
            .default(false)
            .interact()?
    } else {
        false
    };
    let url: String = Input::new()
        .with_prompt("Reference url for the card")
        .allow_empty(true)
        .interact_text()?;
    Ok(CardDetails {
        set_name,
        foil,
        full_art,
        url: url.trim().to_string(),
    })
}

fn pick_set() -> Result<String> {
    let mut items: Vec<&str> = config::RECENT_SETS.to_vec();
    items.push("Other");
    let choice = Select::new()
        .with_prompt("Set name")
        .items(&items)
        .default(0)
        .interact()?;
    if choice == config::RECENT_SETS.len() {
        let manual: String = Input::new()
            .with_prompt("Enter the set name")
            .interact_text()?;
        Ok(manual.trim().to_string())
    } else {
        Ok(items[choice].to_string())
    }
}

// ---------------------------------------------------------------------------
// Card commands
// ---------------------------------------------------------------------------

fn cards_add(tracker: &CollectionTracker, url: &str) -> Result<()> {
    match tracker.cards().add_from_url(url)? {
        CardOutcome::Added(entry) => {
            println!("Added to the ledger:");
            print_card_entry(&entry);
        }
        CardOutcome::AlreadyOwned(entry) => {
            println!("{} is already on the ledger.", entry.key());
            let action = Select::new()
                .with_prompt("Would you like to")
                .items(&["Refresh the price", "Update the quantity"])
                .default(0)
                .interact()?;
            if action == 0 {
                let updated = tracker.cards().refresh_price(&entry.key())?;
                print_card_entry(&updated);
            } else {
                let update = ask_quantity_update(entry.quantity)?;
                let updated = tracker.cards().set_quantity(&entry.key(), update)?;
                println!("Quantity is now {}.", updated.quantity);
            }
        }
    }
    Ok(())
}

fn cards_update(tracker: &CollectionTracker, target: &str) -> Result<()> {
    let keys = card_keys(tracker)?;
    let key = pick_key(&keys, target, "card")?;
    println!("Updating prices for {}...", key);
    let entry = tracker.cards().refresh_price(&key)?;
    print_card_entry(&entry);
    Ok(())
}

fn cards_quantity(tracker: &CollectionTracker, target: &str) -> Result<()> {
    let keys = card_keys(tracker)?;
    let key = pick_key(&keys, target, "card")?;
    let entry = tracker.cards().get(&key)?;
    let update = ask_quantity_update(entry.quantity)?;
    let updated = tracker.cards().set_quantity(&key, update)?;
    println!("Quantity of {} is now {}.", updated.key(), updated.quantity);
    Ok(())
}

fn cards_refresh(tracker: &CollectionTracker) -> Result<()> {
    println!("Refreshing every card; this pauses between requests.");
    let summary = tracker.cards().refresh_all(|index, entry| {
        println!(
            "[{}] {} -- ungraded {}, PSA 10 {}, grade {}",
            index,
            entry.key(),
            fmt_price(entry.ungraded_price),
            fmt_price(entry.psa10_price),
            entry.grade_verdict
        );
    })?;
    println!("Updated {} rows ({} failed).", summary.updated, summary.failed);
    Ok(())
}

fn cards_remove(tracker: &CollectionTracker, target: Option<String>) -> Result<()> {
    let target = match target {
        Some(target) => target,
        None => Input::new()
            .with_prompt("Card name or row index to delete")
            .interact_text()?,
    };
    let selector = selector_for(&card_keys(tracker)?, target.trim(), "card")?;
    let removed = tracker.cards().remove(&selector)?;
    println!("Removed {} from the ledger.", removed.key());
    Ok(())
}

fn cards_list(tracker: &CollectionTracker, json: bool) -> Result<()> {
    let rows = tracker.cards().list()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    if rows.is_empty() {
        println!("No cards on the ledger.");
        return Ok(());
    }
    for (index, entry) in rows.iter().enumerate() {
        println!(
            "{:>3}  {} ({})  qty {}  ungraded {}  PSA 10 {}  grade {}",
            index,
            entry.name,
            entry.set_name,
            entry.quantity,
            fmt_price(entry.ungraded_price),
            fmt_price(entry.psa10_price),
            entry.grade_verdict
        );
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Product commands
// ---------------------------------------------------------------------------

fn products_add(tracker: &CollectionTracker, url: &str) -> Result<()> {
    let msrp: f64 = Input::new()
        .with_prompt("What is the MSRP?")
        .validate_with(|price: &f64| {
            if *price >= 0.0 {
                Ok(())
            } else {
                Err("MSRP cannot be negative")
            }
        })
        .interact_text()?;
    let quantity: u32 = Input::new()
        .with_prompt("How many do you own?")
        .interact_text()?;

    match tracker.products().add_from_url(url, msrp, quantity)? {
        ProductOutcome::Added(entry) => {
            println!("Added to the ledger:");
            print_product_entry(&entry);
        }
        ProductOutcome::AlreadyOwned(entry) => {
            println!("{} is already on the ledger.", entry.key());
            let action = Select::new()
                .with_prompt("Would you like to")
                .items(&["Refresh the market price", "Update the quantity"])
                .default(0)
                .interact()?;
            if action == 0 {
                let updated = tracker.products().refresh_price(&entry.key())?;
                print_product_entry(&updated);
            } else {
                let update = ask_quantity_update(entry.quantity)?;
                let updated = tracker.products().set_quantity(&entry.key(), update)?;
                println!("Quantity is now {}.", updated.quantity);
            }
        }
    }
    Ok(())
}

fn products_update(tracker: &CollectionTracker, target: &str) -> Result<()> {
    let keys = product_keys(tracker)?;
    let key = pick_key(&keys, target, "product")?;
    println!("Updating market price for {}...", key);
    let entry = tracker.products().refresh_price(&key)?;
    print_product_entry(&entry);
    Ok(())
}

fn products_quantity(tracker: &CollectionTracker, target: &str) -> Result<()> {
    let keys = product_keys(tracker)?;
    let key = pick_key(&keys, target, "product")?;
    let entry = tracker.products().get(&key)?;
    let update = ask_quantity_update(entry.quantity)?;
    let updated = tracker.products().set_quantity(&key, update)?;
    println!("Quantity of {} is now {}.", updated.key(), updated.quantity);
    Ok(())
}

fn products_refresh(tracker: &CollectionTracker) -> Result<()> {
    println!("Refreshing every product; this pauses between requests.");
    let summary = tracker.products().refresh_all(|index, entry| {
        println!(
            "[{}] {} -- market {}",
            index,
            entry.key(),
            fmt_price(entry.market_price)
        );
    })?;
    println!("Updated {} rows ({} failed).", summary.updated, summary.failed);
    Ok(())
}

fn products_remove(tracker: &CollectionTracker, target: Option<String>) -> Result<()> {
    let target = match target {
        Some(target) => target,
        None => Input::new()
            .with_prompt("Product name or row index to delete")
            .interact_text()?,
    };
    let selector = selector_for(&product_keys(tracker)?, target.trim(), "product")?;
    let removed = tracker.products().remove(&selector)?;
    println!("Removed {} from the ledger.", removed.key());
    Ok(())
}

fn products_list(tracker: &CollectionTracker, json: bool) -> Result<()> {
    let rows = tracker.products().list()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    if rows.is_empty() {
        println!("No products on the ledger.");
        return Ok(());
    }
    for (index, entry) in rows.iter().enumerate() {
        println!(
            "{:>3}  {} ({})  qty {}  MSRP ${:.2}  market {}",
            index,
            entry.name,
            entry.set_name,
            entry.quantity,
            entry.msrp,
            fmt_price(entry.market_price)
        );
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn card_keys(tracker: &CollectionTracker) -> Result<Vec<EntryKey>> {
    Ok(tracker
        .cards()
        .list()?
        .iter()
        .map(|entry| entry.key())
        .collect())
}

fn product_keys(tracker: &CollectionTracker) -> Result<Vec<EntryKey>> {
    Ok(tracker
        .products()
        .list()?
        .iter()
        .map(|entry| entry.key())
        .collect())
}

/// Resolve a name-or-index target to a full key, asking the user to pick a
/// set when the name appears more than once.
fn pick_key(keys: &[EntryKey], target: &str, kind: &str) -> Result<EntryKey> {
    if let Ok(index) = target.parse::<usize>() {
        return keys
            .get(index)
            .cloned()
            .with_context(|| format!("no {} row at index {}", kind, index));
    }
    let matches: Vec<&EntryKey> = keys.iter().filter(|key| key.name == target).collect();
    match matches.len() {
        0 => bail!("no {} named '{}' on the ledger", kind, target),
        1 => Ok(matches[0].clone()),
        _ => {
            let sets: Vec<&str> = matches.iter().map(|key| key.set_name.as_str()).collect();
            let choice = Select::new()
                .with_prompt(format!("'{}' appears in several sets; which one?", target))
                .items(&sets)
                .default(0)
                .interact()?;
            Ok(matches[choice].clone())
        }
    }
}

fn selector_for(keys: &[EntryKey], target: &str, kind: &str) -> Result<Selector<EntryKey>> {
    if let Ok(index) = target.parse::<usize>() {
        Ok(Selector::Index(index))
    } else {
        pick_key(keys, target, kind).map(Selector::Key)
    }
}

fn ask_quantity_update(current: u32) -> Result<QuantityUpdate> {
    println!("You currently have {}.", current);
    let mode = Select::new()
        .with_prompt("Update quantity")
        .items(&["Add one", "Set the total"])
        .default(0)
        .interact()?;
    if mode == 0 {
        return Ok(QuantityUpdate::AddOne);
    }
    let count: i64 = Input::new()
        .with_prompt("How many do you own now?")
        .validate_with(|count: &i64| {
            if *count >= 0 {
                Ok(())
            } else {
                Err("quantity cannot be negative")
            }
        })
        .interact_text()?;
    Ok(QuantityUpdate::Set(count))
}

fn fmt_price(price: Option<f64>) -> String {
    match price {
        Some(price) => format!("${:.2}", price),
        None => "unknown".to_string(),
    }
}

fn print_dex_entry(entry: &DexEntry) {
    println!("Set Name: {}", entry.set_name);
    println!("Foil: {}", if entry.foil { "yes" } else { "no" });
    println!("Full art: {}", if entry.full_art { "yes" } else { "no" });
    println!("URL: {}", entry.url);
}

fn print_card_entry(entry: &CardEntry) {
    println!("Card Name: {}", entry.name);
    println!("Set Name: {}", entry.set_name);
    println!("Url: {}", entry.url);
    println!("Ungraded Price: {}", fmt_price(entry.ungraded_price));
    println!("PSA 10 Price: {}", fmt_price(entry.psa10_price));
    println!("Worth grading: {}", entry.grade_verdict);
    println!("Quantity: {}", entry.quantity);
}

fn print_product_entry(entry: &ProductEntry) {
    println!("Product Name: {}", entry.name);
    println!("Set Name: {}", entry.set_name);
    println!("Url: {}", entry.url);
    println!("MSRP: ${:.2}", entry.msrp);
    println!("Market Price: {}", fmt_price(entry.market_price));
    println!("Quantity: {}", entry.quantity);
}
