use challenges_core::{ChallengeCommand, ChallengeEvent, FormField};
use challenges_tests::ChallengeWorld;
use cucumber::{then, when};

fn parse_field(field: &str) -> FormField {
    match field {
        "title" => FormField::Title,
        "description" => FormField::Description,
        "deadline" => FormField::Deadline,
        "image" => FormField::Image,
        other => panic!("Unknown form field in step: {}", other),
    }
}

// ===== When Steps =====

#[when("I open the creation dialog")]
async fn open_dialog(world: &mut ChallengeWorld) {
    world.execute(ChallengeCommand::OpenForm);
}

#[when(expr = "I enter {string} as the {word}")]
async fn enter_field(world: &mut ChallengeWorld, value: String, field: String) {
    let field = parse_field(&field);
    world.execute(ChallengeCommand::SetFormField { field, value });
}

#[when(expr = "I choose the image {string}")]
async fn choose_image(world: &mut ChallengeWorld, alt: String) {
    let image = world.image(&alt);
    world.execute(ChallengeCommand::SelectImage { image });
}

#[when("I submit the creation dialog")]
async fn submit_dialog(world: &mut ChallengeWorld) {
    world.execute(ChallengeCommand::SubmitForm);
}

#[when("I cancel the creation dialog")]
async fn cancel_dialog(world: &mut ChallengeWorld) {
    world.execute(ChallengeCommand::CancelForm);
}

// ===== Then Steps =====

#[then("the creation dialog is open")]
async fn dialog_open(world: &mut ChallengeWorld) {
    assert!(world.event_loop.form().is_open());
}

#[then("the creation dialog is closed")]
async fn dialog_closed(world: &mut ChallengeWorld) {
    assert!(!world.event_loop.form().is_open());
}

#[then(expr = "the dialog still holds {string} as the {word}")]
async fn draft_holds(world: &mut ChallengeWorld, value: String, field: String) {
    let draft = world
        .event_loop
        .form()
        .draft()
        .expect("Creation dialog is closed");

    let actual = match parse_field(&field) {
        FormField::Title => draft.title.clone(),
        FormField::Description => draft.description.clone(),
        FormField::Deadline => draft.deadline.clone(),
        FormField::Image => draft.image.as_ref().map(|i| i.alt.clone()).unwrap_or_default(),
    };
    assert_eq!(actual, value);
}

#[then(expr = "the submit is rejected for a missing {word}")]
async fn submit_rejected(world: &mut ChallengeWorld, field: String) {
    let field = parse_field(&field);
    match world.last_event() {
        ChallengeEvent::FormRejected { missing } => {
            assert!(missing.contains(&field), "{:?} not in {:?}", field, missing)
        }
        other => panic!("Expected FormRejected, got {:?}", other),
    }
}

#[then(expr = "{string} was added with the image {string}")]
async fn added_with_image(world: &mut ChallengeWorld, title: String, alt: String) {
    match world.last_event() {
        ChallengeEvent::ChallengeAdded { challenge } => {
            assert_eq!(challenge.title(), title);
            assert_eq!(challenge.image().alt, alt);
        }
        other => panic!("Expected ChallengeAdded, got {:?}", other),
    }
}
