//! BDD step definitions for the monitor display

use cucumber::{then, when};
use rover_core::render::TableRow;

use crate::world::MonitorWorld;

fn row_ids(rows: &[TableRow]) -> Vec<String> {
    rows.iter()
        .filter_map(|row| match row {
            TableRow::Record { id, .. } => Some(id.clone()),
            TableRow::Error { .. } => None,
        })
        .collect()
}

#[when(expr = "the monitor polls every {int} ms")]
async fn monitor_polls(world: &mut MonitorWorld, interval_ms: u64) {
    world.start_view(interval_ms);
    world.wait_for_reads(1).await;
}

#[when(expr = "{int} more polls have run")]
async fn more_polls(world: &mut MonitorWorld, count: usize) {
    let target = world.store().read_count() + count;
    world.wait_for_reads(target).await;
    // let the last response land on the screen
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
}

#[when(expr = "{int} ms pass")]
async fn time_passes(_world: &mut MonitorWorld, ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[then(expr = "the status shows {string}")]
async fn status_shows(world: &mut MonitorWorld, expected: String) {
    world
        .wait_for_screen(&format!("status '{expected}'"), |s| {
            s.status_visible && s.status == expected
        })
        .await;
}

#[then(expr = "the history shows ids {string}")]
async fn history_shows_ids(world: &mut MonitorWorld, ids: String) {
    let expected: Vec<String> = ids.split(',').map(|id| id.trim().to_string()).collect();
    world
        .wait_for_screen(&format!("rows {expected:?}"), |s| row_ids(&s.rows) == expected)
        .await;
}

#[then(expr = "the history holds {int} rows")]
fn history_holds_rows(world: &mut MonitorWorld, count: usize) {
    assert_eq!(world.view().screen().snapshot().rows.len(), count);
}

#[then("the history is empty")]
async fn history_empty(world: &mut MonitorWorld) {
    world
        .wait_for_screen("an empty table", |s| s.rows.is_empty())
        .await;
}

#[then(expr = "the status was written {int} time(s)")]
fn status_written(world: &mut MonitorWorld, count: u64) {
    assert_eq!(world.view().screen().snapshot().status_writes, count);
}

#[then("the monitor never shows a loader")]
fn never_loading(world: &mut MonitorWorld) {
    let screen = world.view().screen().snapshot();
    assert!(!screen.loading);
    assert!(screen.buttons.is_empty());
}
