//! Home feed command.

use anyhow::Result;
use encore_catalog::CatalogHomeFeedRepository;
use encore_store::{HomeFeedSnapshot, HomeFeedStore, current_greeting};
use serde::Serialize;
use std::sync::Arc;

use super::{CatalogFailure, connect, emit};
use crate::Cli;

#[derive(Serialize)]
struct HomeOutput<'a> {
    greeting: &'a str,
    #[serde(flatten)]
    feed: &'a HomeFeedSnapshot,
}

/// Fetches and prints the home feed.
///
/// Sections that failed are listed after the ones that loaded; the command
/// only fails when nothing loaded at all.
pub async fn run(cli: &Cli) -> Result<()> {
    let session = connect(cli).await?;
    let store = HomeFeedStore::new(
        Arc::new(CatalogHomeFeedRepository::new(session.ctx.clone())),
        session.config.market.clone(),
    );

    store.refresh().await;
    let snapshot = store.snapshot().await;

    let output = HomeOutput {
        greeting: current_greeting(),
        feed: &snapshot,
    };
    emit(cli, &output, |text, o| text.format_home(o.greeting, o.feed))?;

    match snapshot.errors.first() {
        Some(failure) if snapshot.carousels.is_empty() => match failure.cause {
            Some(cause) => Err(CatalogFailure(cause).into()),
            None => anyhow::bail!("Home feed unavailable: {}", failure.message),
        },
        _ => Ok(()),
    }
}
