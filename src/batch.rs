// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 The hn Authors

//! Concurrent, order-preserving retrieval of many items at once.

use crate::item::{Item, ItemId};
use log::{debug, trace};
use tokio::task::{JoinError, JoinSet};

/// Fetches every item in `ids` concurrently using `fetch`, returning the
/// items in the same order as `ids`.
///
/// One task is spawned per id, with no limit on how many run at once.
/// Items come back in whatever order their fetches complete, so the
/// result is rebuilt from each task's position in `ids`.
///
/// If any fetch fails, the whole batch fails and no items are returned.
/// When several fetches fail, the error for the id that comes first in
/// `ids` is returned. Either way, every task runs to completion before
/// this function returns. A task that panics is reported as an error.
///
/// An empty `ids` returns an empty list without calling `fetch`.
pub async fn fetch_all<F, Fut, E>(ids: &[ItemId], fetch: F) -> Result<Vec<Item>, E>
where
    F: Fn(ItemId) -> Fut,
    Fut: Future<Output = Result<Item, E>> + Send + 'static,
    E: From<JoinError> + Send + 'static,
{
    if ids.is_empty() {
        return Ok(vec![]);
    }

    debug!("fetching {} items", ids.len());

    let mut tasks = JoinSet::new();
    for (index, &id) in ids.iter().enumerate() {
        let fut = fetch(id);
        tasks.spawn(async move { (index, fut.await) });
    }

    let mut slots: Vec<Option<Item>> = vec![None; ids.len()];
    let mut first_error: Option<(usize, E)> = None;

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, Ok(item))) => {
                trace!("fetched item {} at position {index}", item.id);
                slots[index] = Some(item);
            }
            Ok((index, Err(err))) => {
                debug!("failed to fetch item {}", ids[index]);
                record_error(&mut first_error, index, err);
            }
            Err(err) => {
                // The task's position is lost with the panic, so it sorts
                // after every ordinary failure.
                debug!("fetch task failed: {err}");
                record_error(&mut first_error, usize::MAX, E::from(err));
            }
        }
    }

    if let Some((_, err)) = first_error {
        return Err(err);
    }

    // Every task succeeded, so every slot is filled.
    Ok(slots.into_iter().flatten().collect())
}

fn record_error<E>(first_error: &mut Option<(usize, E)>, index: usize, err: E) {
    match first_error {
        Some((first, _)) if *first <= index => {}
        _ => *first_error = Some((index, err)),
    }
}
