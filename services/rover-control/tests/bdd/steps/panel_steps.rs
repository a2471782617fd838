//! BDD step definitions for the control panel itself

use cucumber::{then, when};
use rover_control::view::{ControlState, PressOutcome};
use rover_core::render::TableRow;
use rover_core::Command;

use crate::world::ControlWorld;

#[when("the control panel starts")]
async fn panel_starts(world: &mut ControlWorld) {
    let view = world.build_view();
    view.start().await;
}

#[when(expr = "the operator presses {string}")]
async fn operator_presses(world: &mut ControlWorld, label: String) {
    let command: Command = label.parse().expect("unknown command label");
    let outcome = world.view().press(command).await;
    world.last_outcome = Some(outcome);
}

#[then(expr = "the history shows ids {string}")]
fn history_shows_ids(world: &mut ControlWorld, ids: String) {
    let expected: Vec<&str> = ids.split(',').map(str::trim).collect();
    let screen = world.view().screen().snapshot();
    let actual: Vec<String> = screen
        .rows
        .iter()
        .map(|row| match row {
            TableRow::Record { id, .. } => id.clone(),
            TableRow::Error { message } => panic!("unexpected error row: {message}"),
        })
        .collect();
    assert_eq!(actual, expected);
}

#[then("the history is empty")]
fn history_empty(world: &mut ControlWorld) {
    assert!(world.view().screen().snapshot().rows.is_empty());
}

#[then(expr = "the history shows a single error row {string}")]
fn history_single_error(world: &mut ControlWorld, message: String) {
    let rows = world.view().screen().snapshot().rows;
    assert_eq!(rows, vec![TableRow::error(message)]);
}

#[then(expr = "the status reads {string}")]
fn status_reads(world: &mut ControlWorld, expected: String) {
    let screen = world.view().screen().snapshot();
    assert_eq!(screen.status, expected);
    assert!(screen.status_visible);
}

#[then("the panel is idle")]
fn panel_idle(world: &mut ControlWorld) {
    let view = world.view();
    let screen = view.screen().snapshot();
    assert_eq!(view.state(), ControlState::Idle);
    assert!(!screen.loading);
    assert!(screen.buttons_enabled);
    assert_eq!(screen.buttons.len(), 11);
}

#[then("the submission succeeded")]
fn submission_succeeded(world: &mut ControlWorld) {
    assert!(
        matches!(world.last_outcome, Some(PressOutcome::Submitted(_))),
        "outcome was {:?}",
        world.last_outcome
    );
}

#[then("the submission failed silently")]
fn submission_failed(world: &mut ControlWorld) {
    assert_eq!(world.last_outcome, Some(PressOutcome::Failed));
}
