use challenges_core::{
    ChallengeCommand, ChallengeEvent, ChallengeEventLoop, ChallengeId, ChallengeStatus,
};
use crossterm::event::KeyCode;

mod form_input;

pub use form_input::FormInput;

/// Ticks the form border stays highlighted after a rejected submit
pub const SHAKE_TICKS: u8 = 3;

/// Terminal presentation state around the board
pub struct App {
    pub board: ChallengeEventLoop,
    pub form_input: FormInput,

    /// Row of the highlighted challenge in the displayed list
    pub cursor: usize,
    pub shake_ticks: u8,
    pub last_event: Option<ChallengeEvent>,
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(ChallengeEventLoop::new())
    }
}

impl App {
    pub fn new(board: ChallengeEventLoop) -> Self {
        Self {
            board,
            form_input: FormInput::default(),
            cursor: 0,
            shake_ticks: 0,
            last_event: None,
            should_quit: false,
        }
    }

    pub fn is_shaking(&self) -> bool {
        self.shake_ticks > 0
    }

    /// Run a command through the board and update presentation state
    pub fn dispatch(&mut self, command: ChallengeCommand) -> &ChallengeEvent {
        let event = self.board.handle_command(command);

        match &event {
            ChallengeEvent::FormRejected { missing } => {
                tracing::debug!(?missing, "Shaking form");
                self.shake_ticks = SHAKE_TICKS;
            }
            ChallengeEvent::FormOpened => {
                self.form_input = FormInput::default();
            }
            ChallengeEvent::TypeSelected { .. } => {
                self.cursor = 0;
            }
            _ => {}
        }

        self.clamp_cursor();
        self.last_event.insert(event)
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyCode) {
        if self.board.form().is_open() {
            self.handle_form_key(key);
        } else {
            self.handle_board_key(key);
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }

            // Cycle on a copy; the board changes only through the command
            KeyCode::Tab | KeyCode::Right => {
                let status = { *self.board.tabs() }.next();
                self.dispatch(ChallengeCommand::SelectType { status });
            }

            KeyCode::BackTab | KeyCode::Left => {
                let status = { *self.board.tabs() }.previous();
                self.dispatch(ChallengeCommand::SelectType { status });
            }

            KeyCode::Char('j') | KeyCode::Down => {
                let max = self.board.displayed().len().saturating_sub(1);
                self.cursor = (self.cursor + 1).min(max);
            }

            KeyCode::Char('k') | KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
            }

            KeyCode::Enter => {
                if let Some(id) = self.selected_id() {
                    self.dispatch(ChallengeCommand::ToggleDetails { id });
                }
            }

            KeyCode::Char('c') => self.update_selected(ChallengeStatus::Completed),
            KeyCode::Char('f') => self.update_selected(ChallengeStatus::Failed),

            KeyCode::Char('a') => {
                self.dispatch(ChallengeCommand::OpenForm);
            }

            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyCode) {
        let Some(draft) = self.board.form().draft().cloned() else {
            return;
        };
        let field = self.form_input.focus();

        match key {
            KeyCode::Esc => {
                self.dispatch(ChallengeCommand::CancelForm);
            }

            KeyCode::Enter => {
                self.dispatch(ChallengeCommand::SubmitForm);
            }

            KeyCode::Tab | KeyCode::Down => self.form_input.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form_input.focus_previous(),

            KeyCode::Left | KeyCode::Right => {
                let images = self.board.catalog().images();
                let index = self.form_input.shift_image(
                    key == KeyCode::Right,
                    images.len(),
                    draft.image.is_some(),
                );
                if let Some(image) = images.get(index).cloned() {
                    self.dispatch(ChallengeCommand::SelectImage { image });
                }
            }

            KeyCode::Char(c) => {
                if let Some(value) = self.form_input.typed(&draft, c) {
                    self.dispatch(ChallengeCommand::SetFormField { field, value });
                }
            }

            KeyCode::Backspace => {
                if let Some(value) = self.form_input.erased(&draft) {
                    self.dispatch(ChallengeCommand::SetFormField { field, value });
                }
            }

            _ => {}
        }
    }

    fn update_selected(&mut self, status: ChallengeStatus) {
        if let Some(id) = self.selected_id() {
            self.dispatch(ChallengeCommand::UpdateChallengeStatus { id, status });
        }
    }

    /// Id of the highlighted challenge, if the list is not empty
    pub fn selected_id(&self) -> Option<ChallengeId> {
        self.board.displayed().get(self.cursor).map(|c| c.id())
    }

    fn clamp_cursor(&mut self) {
        let max = self.board.displayed().len().saturating_sub(1);
        self.cursor = self.cursor.min(max);
    }

    /// Advance timers
    pub fn tick(&mut self) {
        self.shake_ticks = self.shake_ticks.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c));
        }
    }

    fn add_via_form(app: &mut App, title: &str) {
        app.handle_key(KeyCode::Char('a'));
        type_text(app, title);
        app.handle_key(KeyCode::Tab);
        type_text(app, "Every morning");
        app.handle_key(KeyCode::Tab);
        type_text(app, "2024-12-01");
        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Enter);
    }

    #[test]
    fn test_add_challenge_through_form() {
        let mut app = App::default();
        add_via_form(&mut app, "Run 5k");

        assert!(!app.board.form().is_open());
        let displayed = app.board.displayed();
        assert_eq!(displayed.len(), 1);
        assert_eq!(displayed[0].title(), "Run 5k");
        assert_eq!(displayed[0].image(), &app.board.catalog().images()[0]);
    }

    #[test]
    fn test_first_arrow_selects_first_image() {
        let mut app = App::default();
        app.handle_key(KeyCode::Char('a'));
        let images = app.board.catalog().images().to_vec();

        app.handle_key(KeyCode::Right);
        assert_eq!(app.board.form().selected_image(), Some(&images[0]));
        assert_eq!(images[0].alt, "A burger");

        app.handle_key(KeyCode::Right);
        assert_eq!(app.board.form().selected_image(), Some(&images[1]));

        app.handle_key(KeyCode::Left);
        app.handle_key(KeyCode::Left);
        assert_eq!(app.board.form().selected_image(), Some(&images[images.len() - 1]));
    }

    #[test]
    fn test_letters_in_form_are_text() {
        let mut app = App::default();
        app.handle_key(KeyCode::Char('a'));
        type_text(&mut app, "qcf");

        assert!(!app.should_quit);
        assert_eq!(app.board.form().draft().unwrap().title, "qcf");

        app.handle_key(KeyCode::Backspace);
        assert_eq!(app.board.form().draft().unwrap().title, "qc");
    }

    #[test]
    fn test_rejected_submit_shakes_then_settles() {
        let mut app = App::default();
        app.handle_key(KeyCode::Char('a'));
        app.handle_key(KeyCode::Enter);

        assert!(app.is_shaking());
        assert!(app.board.form().is_open());

        for _ in 0..SHAKE_TICKS {
            app.tick();
        }
        assert!(!app.is_shaking());
    }

    #[test]
    fn test_complete_moves_challenge_to_completed_tab() {
        let mut app = App::default();
        add_via_form(&mut app, "Run 5k");

        app.handle_key(KeyCode::Char('c'));
        assert!(app.board.displayed().is_empty());
        assert_eq!(app.cursor, 0);

        app.handle_key(KeyCode::Tab);
        assert_eq!(app.board.selected_type(), ChallengeStatus::Completed);
        assert_eq!(app.board.displayed().len(), 1);
    }

    #[test]
    fn test_enter_toggles_details() {
        let mut app = App::default();
        add_via_form(&mut app, "Run 5k");
        let id = app.selected_id().unwrap();

        app.handle_key(KeyCode::Enter);
        assert!(app.board.is_expanded(id));

        app.handle_key(KeyCode::Enter);
        assert!(!app.board.is_expanded(id));
    }

    #[test]
    fn test_escape_cancels_form_before_quitting() {
        let mut app = App::default();
        app.handle_key(KeyCode::Char('a'));

        app.handle_key(KeyCode::Esc);
        assert!(!app.board.form().is_open());
        assert!(!app.should_quit);

        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_status_keys_on_empty_list_do_nothing() {
        let mut app = App::default();
        app.handle_key(KeyCode::Char('c'));
        app.handle_key(KeyCode::Enter);

        assert!(app.last_event.is_none());
    }
}
