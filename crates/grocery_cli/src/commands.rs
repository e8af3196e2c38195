//! Command handlers for the view layer.
//!
//! Handlers print to an injected writer and leave process concerns
//! (exit codes, stderr) to `main`.

use crate::lookup::resolve_item_id;
use crate::output;
use grocery_core::{
    CompletionSource, GroceryStore, ItemId, SqliteItemRepository, SqliteUiStateRepository,
    StoreError,
};
use log::warn;
use std::fmt::Display;
use std::io::Write;

pub type Store = GroceryStore<SqliteItemRepository>;

pub const SEED_SKIPPED_NOTICE: &str =
    "The list already has items; essential foods were not added.";

/// Result of a command that ran without an internal failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// The id did not match a live item; carries a user-facing notice.
    Missing(String),
}

pub fn list(
    store: &Store,
    ui_state: &SqliteUiStateRepository<'_>,
    json: bool,
    out: &mut impl Write,
) -> Result<Outcome, String> {
    if json {
        emit(out, output::render_json(store.list())?)?;
        return Ok(Outcome::Done);
    }
    if !store.is_empty() {
        emit(out, output::render_items(store.list()))?;
        return Ok(Outcome::Done);
    }

    emit(out, output::render_empty_cart())?;
    if !ui_state.has_shown_tip().map_err(|err| err.to_string())? {
        emit(out, output::render_tip())?;
        ui_state.mark_tip_shown().map_err(|err| err.to_string())?;
    }
    Ok(Outcome::Done)
}

pub fn add(
    store: &mut Store,
    title: &str,
    json: bool,
    out: &mut impl Write,
) -> Result<Outcome, String> {
    let Some(item) = store.add(title).map_err(|err| err.to_string())? else {
        return Ok(Outcome::Done);
    };
    if json {
        emit(out, output::render_json(&item)?)?;
    } else {
        emit(out, output::render_item(&item))?;
    }
    Ok(Outcome::Done)
}

pub fn toggle(
    store: &mut Store,
    raw_id: &str,
    json: bool,
    out: &mut impl Write,
) -> Result<Outcome, String> {
    let id = match lookup(store, raw_id) {
        Ok(id) => id,
        Err(missing) => return Ok(missing),
    };
    match store.toggle_completion(id) {
        Ok(item) if json => emit(out, output::render_json(&item)?)?,
        Ok(item) => emit(out, output::render_item(&item))?,
        Err(StoreError::NotFound(id)) => return Ok(missing(id)),
        Err(err) => return Err(err.to_string()),
    }
    Ok(Outcome::Done)
}

pub fn delete(store: &mut Store, raw_id: &str) -> Result<Outcome, String> {
    let id = match lookup(store, raw_id) {
        Ok(id) => id,
        Err(missing) => return Ok(missing),
    };
    match store.delete(id) {
        Ok(()) => Ok(Outcome::Done),
        Err(StoreError::NotFound(id)) => Ok(missing(id)),
        Err(err) => Err(err.to_string()),
    }
}

/// Seeds an empty list. The tip flag is best-effort once items are stored.
pub fn seed(
    store: &mut Store,
    ui_state: &SqliteUiStateRepository<'_>,
    source: &mut dyn CompletionSource,
    json: bool,
    out: &mut impl Write,
) -> Result<Outcome, String> {
    if !store.is_empty() {
        emit(out, SEED_SKIPPED_NOTICE)?;
        return Ok(Outcome::Done);
    }

    let seeded = store
        .seed_essentials(source)
        .map_err(|err| err.to_string())?;
    if let Err(err) = ui_state.mark_tip_shown() {
        warn!("event=tip_mark module=cli status=error error={err}");
    }

    if json {
        emit(out, output::render_json(&seeded)?)?;
    } else {
        emit(out, output::render_items(&seeded))?;
    }
    Ok(Outcome::Done)
}

fn lookup(store: &Store, raw_id: &str) -> Result<ItemId, Outcome> {
    let known: Vec<ItemId> = store.list().iter().map(|item| item.id).collect();
    resolve_item_id(raw_id, &known).map_err(Outcome::Missing)
}

fn missing(id: ItemId) -> Outcome {
    Outcome::Missing(format!(
        "No item `{id}`; it may already have been removed."
    ))
}

fn emit(out: &mut impl Write, text: impl Display) -> Result<(), String> {
    writeln!(out, "{text}").map_err(|err| format!("failed to write output: {err}"))
}
