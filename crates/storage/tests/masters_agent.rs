#![forbid(unsafe_code)]

mod common;

use common::{count, fixture, raw};
use ic_core::catalog::Vendor;
use ic_core::fields::{AGENT_MASTER_FIELDS_REQUIRED, ModelConfigFields};
use ic_core::model::{Access, MasterType};
use ic_storage::{
    DetailFields, ItemFields, Master, MasterFields, MasterUpdate, NewMaster, StoreError,
};

fn triage(model: &str) -> ModelConfigFields {
    ModelConfigFields {
        name: "Triage".to_string(),
        description: "Routes tickets".to_string(),
        model: model.to_string(),
        role: "dispatcher".to_string(),
        instructions: "Pick one queue.".to_string(),
    }
}

#[test]
fn agent_master_wraps_a_classified_master_agent() {
    let mut fx = fixture();
    let master = fx
        .store
        .create_master(&fx.alice, &NewMaster::Agent(triage("gpt-4.1")))
        .expect("create");
    assert_eq!(master.master_type(), MasterType::Agent);

    let agent = master.as_agent().expect("agent master");
    assert_eq!(agent.vendor, Vendor::OpenAi);
    assert_eq!(agent.model, "gpt-4.1");
    assert_eq!(agent.base.name, "Triage");
    assert_eq!(agent.base.username, "alice");

    let payload = fx
        .store
        .get_master_agent(&fx.alice, agent.master_agent_id)
        .expect("wrapped master agent");
    assert_eq!(payload.name, "Triage");
    assert_eq!(payload.role, "dispatcher");

    let conn = raw(&fx.store);
    assert_eq!(count(&conn, "masters"), 1);
    assert_eq!(count(&conn, "master_agents"), 1);
    assert_eq!(count(&conn, "master_agent_relations"), 1);
}

#[test]
fn update_reclassifies_and_rewrites_both_rows() {
    let mut fx = fixture();
    let master = fx
        .store
        .create_master(&fx.alice, &NewMaster::Agent(triage("gpt-4.1")))
        .expect("create");
    let master_agent_id = master.as_agent().expect("agent").master_agent_id;

    let mut fields = triage("claude-3-7-sonnet-latest");
    fields.name = "Escalation".to_string();
    let updated = fx
        .store
        .update_master(&fx.alice, master.id(), &MasterUpdate::Agent(fields))
        .expect("update");
    let agent = updated.as_agent().expect("agent");
    assert_eq!(agent.vendor, Vendor::Anthropic);
    assert_eq!(agent.base.name, "Escalation");
    assert_eq!(agent.master_agent_id, master_agent_id);

    let payload = fx
        .store
        .get_master_agent(&fx.alice, master_agent_id)
        .expect("payload");
    assert_eq!(payload.name, "Escalation");
    assert_eq!(payload.vendor, Vendor::Anthropic);
    assert_eq!(count(&raw(&fx.store), "master_agent_relations"), 1);
}

#[test]
fn invalid_agent_master_writes_nothing() {
    let mut fx = fixture();
    let mut blank_role = triage("not-a-model");
    blank_role.role = String::new();

    let err = fx
        .store
        .create_master(&fx.alice, &NewMaster::Agent(blank_role))
        .expect_err("blank role");
    assert_eq!(err.user_message(), AGENT_MASTER_FIELDS_REQUIRED);

    let err = fx
        .store
        .create_master(&fx.alice, &NewMaster::Agent(triage("not-a-model")))
        .expect_err("unknown model");
    assert_eq!(
        err.user_message(),
        "Model not recognized as a supported model."
    );
    assert_eq!(err.status_code(), 400);

    let conn = raw(&fx.store);
    assert_eq!(count(&conn, "masters"), 0);
    assert_eq!(count(&conn, "master_agents"), 0);
    assert_eq!(count(&conn, "master_agent_relations"), 0);
}

#[test]
fn update_must_match_the_stored_type() {
    let mut fx = fixture();
    let master = fx
        .store
        .create_master(&fx.alice, &NewMaster::Agent(triage("gemini-1.5-pro")))
        .expect("create");

    let err = fx
        .store
        .update_master(
            &fx.alice,
            master.id(),
            &MasterUpdate::List(MasterFields {
                name: "Plain".to_string(),
                description: String::new(),
            }),
        )
        .expect_err("type mismatch");
    assert!(matches!(err, StoreError::Validation(_)));

    let unchanged = fx
        .store
        .get_master(&fx.alice, master.id(), Access::Creator)
        .expect("reload");
    assert_eq!(unchanged, master);
}

#[test]
fn items_and_details_are_refused_on_agent_masters() {
    let mut fx = fixture();
    let master = fx
        .store
        .create_master(&fx.alice, &NewMaster::Agent(triage("gpt-4.1-mini")))
        .expect("create");

    let err = fx
        .store
        .add_detail(
            &fx.alice,
            master.id(),
            &DetailFields {
                name: "Queue".to_string(),
                description: String::new(),
            },
        )
        .expect_err("detail on agent master");
    assert_eq!(err.user_message(), "Items and details belong to list masters.");

    let err = fx
        .store
        .add_item(&fx.alice, master.id(), &ItemFields::default())
        .expect_err("item on agent master");
    assert!(matches!(err, StoreError::Validation(_)));
}

#[test]
fn delete_removes_master_agent_relation_and_master() {
    let mut fx = fixture();
    let keep = fx
        .store
        .create_master(&fx.alice, &NewMaster::Agent(triage("gpt-4.1")))
        .expect("keep");
    let gone = fx
        .store
        .create_master(&fx.alice, &NewMaster::Agent(triage("gemini-2.0-flash-lite")))
        .expect("gone");

    fx.store.delete_master(&fx.alice, gone.id()).expect("delete");

    let conn = raw(&fx.store);
    assert_eq!(count(&conn, "masters"), 1);
    assert_eq!(count(&conn, "master_agents"), 1);
    assert_eq!(count(&conn, "master_agent_relations"), 1);
    let listed = fx
        .store
        .list_masters(&fx.alice, MasterType::Agent)
        .expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, keep.id());
}

#[test]
fn reads_follow_the_access_policy() {
    let mut fx = fixture();
    let master = fx
        .store
        .create_master(&fx.alice, &NewMaster::Agent(triage("gpt-4.1")))
        .expect("create");

    assert!(matches!(
        fx.store.get_master(&fx.bob, master.id(), Access::Creator),
        Err(StoreError::Forbidden)
    ));
    match fx
        .store
        .get_master(&fx.bob, master.id(), Access::Internal)
        .expect("internal")
    {
        Master::Agent(agent) => assert_eq!(agent.role, "dispatcher"),
        other => panic!("expected agent master, got {other:?}"),
    }
    assert!(matches!(
        fx.store.delete_master(&fx.bob, master.id()),
        Err(StoreError::Forbidden)
    ));
}
