//! Bulk import flows
//!
//! The remote collection is replaced wholesale: clear, insert in chunks
//! through the write saga, then re-fetch to confirm what actually landed
//! before replacing the working copy. A partial failure returns a report
//! whose `chunks_committed` is below `chunks_total`; nothing local is
//! replaced and the last-sync mark is left untouched.

use shared::models::{Church, ImportReport, Member, SheetConnection};
use shared::util::now_iso;
use tracing::{info, warn};

use super::orchestrator::{SyncOptions, execute};
use super::saga::ChunkedWrite;
use crate::AppResult;
use crate::cache::CacheStorage;
use crate::remote::{CHUNK_SIZE, RemoteStore};
use crate::sheets::SheetStore;
use crate::stores::{ChurchStore, MemberStore};

/// Replace the remote member collection with `members`.
/// Ids and timestamps on the inputs are ignored; the backend assigns fresh
/// ones and the re-fetch brings them back.
pub async fn import_members_to_remote(
    remote: &dyn RemoteStore,
    store: &MemberStore,
    cache: &CacheStorage,
    members: Vec<Member>,
    options: SyncOptions,
) -> AppResult<ImportReport> {
    let total_rows = members.len();
    execute("clear remote members", options, || remote.clear_members()).await?;

    let mut saga = ChunkedWrite::new(members, CHUNK_SIZE);
    let chunks_total = saga.total();

    let outcome = saga
        .run(|chunk| {
            execute("insert member chunk", options, move || {
                let chunk = chunk.clone();
                async move { remote.insert_members_chunk(&chunk).await }
            })
        })
        .await;

    if let Err(e) = outcome {
        warn!(
            target: "sync",
            "Member import stopped at chunk {}/{}: {e}",
            saga.committed(),
            chunks_total
        );
        return Ok(ImportReport {
            total_rows,
            chunks_total,
            chunks_committed: saga.committed(),
            confirmed_rows: 0,
        });
    }

    let confirmed = execute("confirm imported members", options, || {
        remote.read_members()
    })
    .await?;
    let confirmed_rows = confirmed.len();
    store.replace_all(confirmed).await?;
    cache.put_last_sync(&now_iso())?;

    info!(target: "sync", "Imported {confirmed_rows} members in {chunks_total} chunks");
    Ok(ImportReport {
        total_rows,
        chunks_total,
        chunks_committed: chunks_total,
        confirmed_rows,
    })
}

/// Replace the remote church collection with `churches`
pub async fn import_churches_to_remote(
    remote: &dyn RemoteStore,
    store: &ChurchStore,
    cache: &CacheStorage,
    churches: Vec<Church>,
    options: SyncOptions,
) -> AppResult<ImportReport> {
    let total_rows = churches.len();
    execute("clear remote churches", options, || remote.clear_churches()).await?;

    let mut saga = ChunkedWrite::new(churches, CHUNK_SIZE);
    let chunks_total = saga.total();

    let outcome = saga
        .run(|chunk| {
            execute("insert church chunk", options, move || {
                let chunk = chunk.clone();
                async move { remote.insert_churches_chunk(&chunk).await }
            })
        })
        .await;

    if let Err(e) = outcome {
        warn!(
            target: "sync",
            "Church import stopped at chunk {}/{}: {e}",
            saga.committed(),
            chunks_total
        );
        return Ok(ImportReport {
            total_rows,
            chunks_total,
            chunks_committed: saga.committed(),
            confirmed_rows: 0,
        });
    }

    let confirmed = execute("confirm imported churches", options, || {
        remote.read_churches()
    })
    .await?;
    let confirmed_rows = confirmed.len();
    store.replace_all(confirmed).await?;
    cache.put_last_sync(&now_iso())?;

    info!(target: "sync", "Imported {confirmed_rows} churches in {chunks_total} chunks");
    Ok(ImportReport {
        total_rows,
        chunks_total,
        chunks_committed: chunks_total,
        confirmed_rows,
    })
}

/// Pull members from the spreadsheet and replace the remote collection
pub async fn sync_members_from_sheet(
    sheet: &dyn SheetStore,
    conn: &SheetConnection,
    remote: &dyn RemoteStore,
    store: &MemberStore,
    cache: &CacheStorage,
    options: SyncOptions,
) -> AppResult<ImportReport> {
    let members = execute("read member sheet", options, || sheet.read_members(conn)).await?;
    import_members_to_remote(remote, store, cache, members, options).await
}

/// Pull churches from the spreadsheet and replace the remote collection
pub async fn sync_churches_from_sheet(
    sheet: &dyn SheetStore,
    conn: &SheetConnection,
    remote: &dyn RemoteStore,
    store: &ChurchStore,
    cache: &CacheStorage,
    options: SyncOptions,
) -> AppResult<ImportReport> {
    let churches = execute("read church sheet", options, || sheet.read_churches(conn)).await?;
    import_churches_to_remote(remote, store, cache, churches, options).await
}

/// Append the current member list to the spreadsheet
pub async fn export_members_to_sheet(
    sheet: &dyn SheetStore,
    conn: &SheetConnection,
    store: &MemberStore,
    cache: &CacheStorage,
    options: SyncOptions,
) -> AppResult<usize> {
    let members = store.list().await;
    let total = members.len();
    execute("write member sheet", options, move || {
        let members = members.clone();
        async move { sheet.write_members(conn, &members).await }
    })
    .await?;
    cache.put_last_sync(&now_iso())?;
    Ok(total)
}

/// Append the current church list to the spreadsheet
pub async fn export_churches_to_sheet(
    sheet: &dyn SheetStore,
    conn: &SheetConnection,
    store: &ChurchStore,
    cache: &CacheStorage,
    options: SyncOptions,
) -> AppResult<usize> {
    let churches = store.list().await;
    let total = churches.len();
    execute("write church sheet", options, move || {
        let churches = churches.clone();
        async move { sheet.write_churches(conn, &churches).await }
    })
    .await?;
    cache.put_last_sync(&now_iso())?;
    Ok(total)
}
