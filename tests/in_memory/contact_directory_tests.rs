//! In-memory integration tests for the contact directory.

use super::helpers::{MemoryDirectory, directory};
use rstest::rstest;
use trellis::contact::{domain::ContactUpdate, services::ContactDirectoryError};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn search_and_sidebar_follow_edits(directory: MemoryDirectory) -> Result<(), eyre::Report> {
    let hopper = directory.create_empty().await?;
    let turing = directory.create_empty().await?;
    directory
        .update(hopper.id(), ContactUpdate::new().with_first("Grace").with_last("Hopper"))
        .await?;
    directory
        .update(turing.id(), ContactUpdate::new().with_first("Alan").with_last("Turing"))
        .await?;
    directory.set_favorite(turing.id(), true).await?;

    let found = directory.list(Some("GRACE")).await?;
    eyre::ensure!(found.len() == 1, "expected one match, found {}", found.len());
    eyre::ensure!(
        found.first().map(|c| c.id()) == Some(hopper.id()),
        "search returned the wrong contact"
    );

    let sidebar = directory.sidebar(None).await?;
    let labels: Vec<(&str, bool)> = sidebar
        .iter()
        .map(|entry| (entry.label.as_str(), entry.favorite))
        .collect();
    eyre::ensure!(
        labels == [("Grace Hopper", false), ("Alan Turing", true)],
        "unexpected sidebar {labels:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_contact_cannot_be_found(directory: MemoryDirectory) -> Result<(), eyre::Report> {
    let contact = directory.create_empty().await?;

    directory.delete(contact.id()).await?;
    let result = directory.find(contact.id()).await;

    eyre::ensure!(
        matches!(result, Err(ContactDirectoryError::NotFound(id)) if id == contact.id()),
        "unexpected result {result:?}"
    );
    eyre::ensure!(directory.list(None).await?.is_empty(), "directory should be empty");
    Ok(())
}
