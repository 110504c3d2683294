use crate::application::{
    ChallengeCommand, ChallengeEvent, CreationForm, ExpansionState, FormError, FormField,
    TabSelection,
};
use crate::domain::{
    Challenge, ChallengeId, ChallengePartition, ChallengeStatus, ChallengeStore, ImageAsset,
    ImageCatalog, NewChallenge,
};

/// Command loop owning the store and all view state of the board.
///
/// Every command runs to completion and yields exactly one event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChallengeEventLoop {
    store: ChallengeStore,
    tabs: TabSelection,
    expansion: ExpansionState,
    form: CreationForm,
}

impl ChallengeEventLoop {
    /// Create an empty board using the default image catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty board offering a specific image catalog
    pub fn with_catalog(catalog: ImageCatalog) -> Self {
        Self {
            form: CreationForm::new(catalog),
            ..Self::default()
        }
    }

    /// Process a single command and return the resulting event
    pub fn handle_command(&mut self, command: ChallengeCommand) -> ChallengeEvent {
        let name = command.name();
        tracing::debug!(command = name, "Handling command");

        let event = match command {
            ChallengeCommand::AddChallenge { id, input } => self.handle_add_challenge(id, input),

            ChallengeCommand::UpdateChallengeStatus { id, status } => {
                self.handle_update_status(id, status)
            }

            ChallengeCommand::SelectType { status } => {
                self.tabs.select_type(status);
                ChallengeEvent::TypeSelected { status }
            }

            ChallengeCommand::ToggleDetails { id } => {
                let expanded = self.expansion.toggle_details(id);
                ChallengeEvent::DetailsToggled { id, expanded }
            }

            ChallengeCommand::OpenForm => {
                self.form.open();
                ChallengeEvent::FormOpened
            }

            ChallengeCommand::SetFormField { field, value } => {
                self.handle_set_form_field(field, value)
            }

            ChallengeCommand::SelectImage { image } => self.handle_select_image(image),

            ChallengeCommand::SubmitForm => self.handle_submit_form(),

            ChallengeCommand::CancelForm => {
                self.form.cancel();
                ChallengeEvent::FormClosed
            }
        };

        if let ChallengeEvent::CommandFailed { command, reason } = &event {
            tracing::warn!(%command, %reason, "Command failed");
        }

        event
    }

    fn handle_add_challenge(
        &mut self,
        id: Option<ChallengeId>,
        input: NewChallenge,
    ) -> ChallengeEvent {
        let id = match id {
            Some(id) => match self.store.insert(Challenge::with_id(id, input)) {
                Ok(()) => id,
                Err(e) => {
                    return ChallengeEvent::CommandFailed {
                        command: "AddChallenge".to_string(),
                        reason: e.to_string(),
                    };
                }
            },
            None => self.store.add_challenge(input),
        };

        self.added_event(id)
    }

    fn handle_update_status(&mut self, id: ChallengeId, status: ChallengeStatus) -> ChallengeEvent {
        match self.store.update_challenge_status(id, status) {
            Ok(from) => ChallengeEvent::ChallengeStatusChanged {
                id,
                from,
                to: status,
            },
            Err(e) => ChallengeEvent::CommandFailed {
                command: "UpdateChallengeStatus".to_string(),
                reason: e.to_string(),
            },
        }
    }

    fn handle_set_form_field(&mut self, field: FormField, value: String) -> ChallengeEvent {
        match self.form.set_field(field, value) {
            Ok(()) => ChallengeEvent::FormFieldChanged { field },
            Err(e) => ChallengeEvent::CommandFailed {
                command: "SetFormField".to_string(),
                reason: e.to_string(),
            },
        }
    }

    fn handle_select_image(&mut self, image: ImageAsset) -> ChallengeEvent {
        match self.form.select_image(image.clone()) {
            Ok(()) => ChallengeEvent::ImageSelected { image },
            Err(e) => ChallengeEvent::CommandFailed {
                command: "SelectImage".to_string(),
                reason: e.to_string(),
            },
        }
    }

    fn handle_submit_form(&mut self) -> ChallengeEvent {
        match self.form.submit() {
            Ok(input) => {
                let id = self.store.add_challenge(input);
                tracing::info!(%id, "Challenge created from dialog");
                self.added_event(id)
            }
            Err(FormError::Incomplete { missing }) => ChallengeEvent::FormRejected { missing },
            Err(e) => ChallengeEvent::CommandFailed {
                command: "SubmitForm".to_string(),
                reason: e.to_string(),
            },
        }
    }

    fn added_event(&self, id: ChallengeId) -> ChallengeEvent {
        match self.store.get(id) {
            Some(challenge) => ChallengeEvent::ChallengeAdded {
                challenge: challenge.clone(),
            },
            None => ChallengeEvent::CommandFailed {
                command: "AddChallenge".to_string(),
                reason: format!("Challenge {} missing after insert", id),
            },
        }
    }

    // ===== Queries =====

    pub fn store(&self) -> &ChallengeStore {
        &self.store
    }

    pub fn partition(&self) -> ChallengePartition<'_> {
        self.store.partition()
    }

    pub fn selected_type(&self) -> ChallengeStatus {
        self.tabs.selected()
    }

    pub fn tabs(&self) -> &TabSelection {
        &self.tabs
    }

    /// Challenges of the selected tab, in creation order
    pub fn displayed(&self) -> Vec<&Challenge> {
        self.partition().get(self.tabs.selected()).to_vec()
    }

    pub fn expanded(&self) -> Option<ChallengeId> {
        self.expansion.expanded()
    }

    pub fn is_expanded(&self, id: ChallengeId) -> bool {
        self.expansion.is_expanded(id)
    }

    pub fn form(&self) -> &CreationForm {
        &self.form
    }

    pub fn catalog(&self) -> &ImageCatalog {
        self.form.catalog()
    }
}
