//! Message update handlers - thin dispatcher delegating to submodules

mod animation;
mod images;
mod interaction;
mod keyboard;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        if let Some(task) = self.handle_interaction(&message) {
            return task;
        }
        if let Some(task) = self.handle_images(&message) {
            return task;
        }
        if let Some(task) = self.handle_keyboard(&message) {
            return task;
        }
        if let Some(task) = self.handle_animation(&message) {
            return task;
        }

        Task::none()
    }
}
