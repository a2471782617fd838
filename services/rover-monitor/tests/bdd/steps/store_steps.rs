//! BDD step definitions for the fake record store

use bdd_infra::FakeRecordStore;
use cucumber::{given, then, when};

use crate::world::MonitorWorld;

#[given("a running record store")]
async fn running_store(world: &mut MonitorWorld) {
    let store = FakeRecordStore::start()
        .await
        .expect("failed to start fake record store");
    world.store = Some(store);
}

#[given(expr = "the store holds {int} records ending with status {string}")]
fn store_holds_records(world: &mut MonitorWorld, count: u32, last_status: String) {
    let store = world.store();
    for id in 1..count {
        store.seed(&id.to_string(), "adelante");
    }
    store.seed(&count.to_string(), &last_status);
}

#[given(expr = "the store holds record {string} with status {string}")]
fn store_holds_record(world: &mut MonitorWorld, id: String, status: String) {
    world.store().seed(&id, &status);
}

#[when(expr = "the store gains record {string} with status {string}")]
fn store_gains_record(world: &mut MonitorWorld, id: String, status: String) {
    world.store().seed(&id, &status);
}

#[when(expr = "the store starts answering reads with status {int}")]
fn store_fails_reads(world: &mut MonitorWorld, status: u16) {
    world.store().fail_reads(Some(status));
}

#[when("the store recovers")]
fn store_recovers(world: &mut MonitorWorld) {
    world.store().fail_reads(None);
}

#[given(expr = "the store takes {int} ms to answer reads")]
fn store_slow_reads(world: &mut MonitorWorld, delay_ms: u64) {
    world
        .store()
        .delay_reads(std::time::Duration::from_millis(delay_ms));
}

#[then(expr = "the store was read at least {int} times")]
fn store_read_at_least(world: &mut MonitorWorld, count: usize) {
    let reads = world.store().read_count();
    assert!(reads >= count, "only {reads} reads");
}
