//! BDD step definitions for record store setup and assertions

use bdd_infra::FakeRecordStore;
use cucumber::{given, then};

use crate::world::ControlWorld;

#[given("a running record store")]
async fn running_store(world: &mut ControlWorld) {
    let store = FakeRecordStore::start()
        .await
        .expect("failed to start fake record store");
    world.store = Some(store);
}

#[given(expr = "the store holds record {string} with status {string}")]
fn store_holds_record(world: &mut ControlWorld, id: String, status: String) {
    world.store().seed(&id, &status);
}

#[given(expr = "the store answers reads with status {int}")]
fn store_fails_reads(world: &mut ControlWorld, status: u16) {
    world.store().fail_reads(Some(status));
}

#[given(expr = "the store answers writes with status {int}")]
fn store_fails_writes(world: &mut ControlWorld, status: u16) {
    world.store().fail_writes(Some(status));
}

#[given("the public IP service is down")]
fn ip_service_down(world: &mut ControlWorld) {
    world.store().set_ip(None);
}

#[then(expr = "the store received {int} write(s)")]
fn store_received_writes(world: &mut ControlWorld, count: usize) {
    assert_eq!(world.store().writes().len(), count);
}

#[then(expr = "the last write has {word} {string}")]
fn last_write_has(world: &mut ControlWorld, field: String, expected: String) {
    let writes = world.store().writes();
    let last = writes.last().expect("no writes received");
    assert_eq!(
        last[field.as_str()].as_str(),
        Some(expected.as_str()),
        "write was {last}"
    );
}

#[then(expr = "the store was read {int} time(s)")]
fn store_read_count(world: &mut ControlWorld, count: usize) {
    assert_eq!(world.store().read_count(), count);
}
