use challenges_core::{ChallengeCommand, ChallengeEvent, ChallengeStatus, NewChallenge};
use challenges_tests::ChallengeWorld;
use cucumber::{given, then, when};
use std::collections::HashSet;
use uuid::Uuid;

fn parse_status(status: &str) -> ChallengeStatus {
    status
        .parse()
        .unwrap_or_else(|e| panic!("Bad status in step: {}", e))
}

fn add_challenge(world: &mut ChallengeWorld, title: &str, description: &str, deadline: &str) {
    let input = NewChallenge::new(title, description, deadline, world.any_image());
    let event = world
        .execute(ChallengeCommand::AddChallenge { id: None, input })
        .clone();

    assert!(
        matches!(event, ChallengeEvent::ChallengeAdded { .. }),
        "Expected ChallengeAdded, got {:?}",
        event
    );
}

// ===== Given Steps =====

#[given("an empty challenge board")]
async fn empty_board(world: &mut ChallengeWorld) {
    assert!(world.event_loop.store().is_empty());
}

#[given(expr = "a challenge {string} exists")]
async fn challenge_exists(world: &mut ChallengeWorld, title: String) {
    add_challenge(world, &title, "Some description", "2024-12-01");
}

#[given(expr = "{int} challenges exist")]
async fn n_challenges_exist(world: &mut ChallengeWorld, count: usize) {
    for i in 0..count {
        add_challenge(world, &format!("Challenge {}", i + 1), "Generated", "2025-01-15");
    }
}

#[given(expr = "{string} is marked as {word}")]
async fn challenge_is_marked(world: &mut ChallengeWorld, title: String, status: String) {
    mark_challenge(world, title, status).await;
}

#[given("I remember the store")]
async fn remember_store(world: &mut ChallengeWorld) {
    world.snapshot = Some(world.event_loop.store().clone());
}

// ===== When Steps =====

#[when(expr = "I add a challenge {string} with description {string} due {string}")]
async fn add_full_challenge(
    world: &mut ChallengeWorld,
    title: String,
    description: String,
    deadline: String,
) {
    add_challenge(world, &title, &description, &deadline);
}

#[when(expr = "I mark {string} as {word}")]
async fn mark_challenge(world: &mut ChallengeWorld, title: String, status: String) {
    let id = world.challenge_id(&title);
    let status = parse_status(&status);
    world.execute(ChallengeCommand::UpdateChallengeStatus { id, status });
}

#[when(expr = "I mark an unknown challenge as {word}")]
async fn mark_unknown(world: &mut ChallengeWorld, status: String) {
    let status = parse_status(&status);
    world.execute(ChallengeCommand::UpdateChallengeStatus {
        id: Uuid::new_v4(),
        status,
    });
}

// ===== Then Steps =====

#[then(expr = "the board holds {int} challenge(s)")]
async fn board_holds(world: &mut ChallengeWorld, count: usize) {
    assert_eq!(world.event_loop.store().len(), count);
}

#[then("all challenge ids are distinct")]
async fn ids_distinct(world: &mut ChallengeWorld) {
    let challenges = world.event_loop.store().challenges();
    let ids: HashSet<_> = challenges.iter().map(|c| c.id()).collect();
    assert_eq!(ids.len(), challenges.len());
}

#[then("every challenge is active")]
async fn every_active(world: &mut ChallengeWorld) {
    assert!(world
        .event_loop
        .store()
        .challenges()
        .iter()
        .all(|c| c.status() == ChallengeStatus::Active));
}

#[then(expr = "{string} is {word}")]
async fn challenge_has_status(world: &mut ChallengeWorld, title: String, status: String) {
    assert_eq!(world.challenge(&title).status(), parse_status(&status));
}

#[then(expr = "{string} shows the deadline {string}")]
async fn challenge_deadline(world: &mut ChallengeWorld, title: String, formatted: String) {
    assert_eq!(world.challenge(&title).deadline().formatted(), formatted);
}

#[then("the command fails")]
async fn command_fails(world: &mut ChallengeWorld) {
    assert!(
        world.last_command_failed(),
        "Expected CommandFailed, got {:?}",
        world.last_event()
    );
}

#[then(expr = "the error mentions {string}")]
async fn error_mentions(world: &mut ChallengeWorld, text: String) {
    let message = world.last_error_message().unwrap_or_default();
    assert!(
        message.contains(&text),
        "Error '{}' does not mention '{}'",
        message,
        text
    );
}

#[then("the store is unchanged")]
async fn store_unchanged(world: &mut ChallengeWorld) {
    let snapshot = world.snapshot.as_ref().expect("No remembered store");
    assert_eq!(world.event_loop.store(), snapshot);
}

#[then(expr = "the remembered store still has {string} as {word}")]
async fn remembered_status(world: &mut ChallengeWorld, title: String, status: String) {
    let id = world.challenge_id(&title);
    let snapshot = world.snapshot.as_ref().expect("No remembered store");
    let challenge = snapshot.get(id).expect("Challenge missing from snapshot");
    assert_eq!(challenge.status(), parse_status(&status));
}

#[then(expr = "only {string} differs from the remembered store")]
async fn only_one_differs(world: &mut ChallengeWorld, title: String) {
    let id = world.challenge_id(&title);
    let snapshot = world.snapshot.as_ref().expect("No remembered store");
    let current = world.event_loop.store();

    assert_eq!(snapshot.len(), current.len());
    for (before, after) in snapshot.challenges().iter().zip(current.challenges()) {
        if before.id() == id {
            assert_ne!(before, after);
        } else {
            assert_eq!(before, after);
        }
    }
}
