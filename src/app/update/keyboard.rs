//! Keyboard and action message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::Action;

impl App {
    /// Handle keyboard-related messages
    pub fn handle_keyboard(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::KeyPressed(key, modifiers) => {
                if let Some(action) = self.core.settings.keybindings.find_action(key, modifiers) {
                    return Some(self.update(Message::ExecuteAction(action)));
                }
                Some(Task::none())
            }

            Message::ExecuteAction(action) => Some(self.execute_action(*action)),

            _ => None,
        }
    }

    /// Execute a keybinding action
    ///
    /// Actions only fire when the matching button is on screen.
    fn execute_action(&mut self, action: Action) -> Task<Message> {
        match action {
            Action::SayYes => self.update(Message::Affirmative),
            Action::SayNo if self.interaction.negative_visible() => self.update(Message::Negative),
            Action::StartOver if self.interaction.reset_visible() => self.update(Message::Reset),
            _ => {
                tracing::debug!(
                    "{:?} not available at stage {}",
                    action,
                    self.interaction.stage()
                );
                Task::none()
            }
        }
    }
}
