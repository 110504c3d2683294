use challenges_core::{ChallengeCommand, ChallengeEvent, ChallengeStatus};
use challenges_tests::ChallengeWorld;
use cucumber::{then, when};

// ===== When Steps =====

#[when(expr = "I select the {word} tab")]
async fn select_tab(world: &mut ChallengeWorld, status: String) {
    let status: ChallengeStatus = status
        .parse()
        .unwrap_or_else(|e| panic!("Bad status in step: {}", e));
    world.execute(ChallengeCommand::SelectType { status });
}

#[when(expr = "I toggle the details of {string}")]
async fn toggle_details(world: &mut ChallengeWorld, title: String) {
    let id = world.challenge_id(&title);
    world.execute(ChallengeCommand::ToggleDetails { id });
}

// ===== Then Steps =====

#[then(expr = "the partitions hold {int} active, {int} completed and {int} failed")]
async fn partition_sizes(world: &mut ChallengeWorld, active: usize, completed: usize, failed: usize) {
    let partition = world.event_loop.partition();
    assert_eq!(partition.active().len(), active, "active");
    assert_eq!(partition.completed().len(), completed, "completed");
    assert_eq!(partition.failed().len(), failed, "failed");
}

#[then("every challenge appears in exactly one partition")]
async fn partition_complete(world: &mut ChallengeWorld) {
    let partition = world.event_loop.partition();
    let store = world.event_loop.store();

    assert_eq!(partition.len(), store.len());
    for challenge in store.challenges() {
        let hits = ChallengeStatus::ALL
            .iter()
            .filter(|status| partition.get(**status).iter().any(|c| c.id() == challenge.id()))
            .count();
        assert_eq!(hits, 1, "{} found in {} partitions", challenge.title(), hits);
    }
}

#[then(expr = "the {word} tab is selected")]
async fn tab_selected(world: &mut ChallengeWorld, status: String) {
    let status: ChallengeStatus = status
        .parse()
        .unwrap_or_else(|e| panic!("Bad status in step: {}", e));
    assert_eq!(world.event_loop.selected_type(), status);
}

#[then("the displayed list is empty")]
async fn displayed_empty(world: &mut ChallengeWorld) {
    assert!(world.event_loop.displayed().is_empty());
}

#[then(expr = "the displayed list shows {string}")]
async fn displayed_shows(world: &mut ChallengeWorld, title: String) {
    assert!(
        world
            .event_loop
            .displayed()
            .iter()
            .any(|c| c.title() == title),
        "'{}' not displayed",
        title
    );
}

#[then(expr = "the details of {string} are open")]
async fn details_open(world: &mut ChallengeWorld, title: String) {
    let id = world.challenge_id(&title);
    assert!(world.event_loop.is_expanded(id));
    assert_eq!(world.event_loop.expanded(), Some(id));
}

#[then("no details are open")]
async fn no_details_open(world: &mut ChallengeWorld) {
    assert_eq!(world.event_loop.expanded(), None);
    assert!(matches!(
        world.last_event(),
        ChallengeEvent::DetailsToggled { expanded: None, .. }
    ));
}
