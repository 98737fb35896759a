//! Stage photo download results

use iced::Task;
use iced::widget::image;

use crate::app::message::Message;
use crate::app::state::{App, StageImage};

impl App {
    pub fn handle_images(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::StageImageLoaded(stage, result) => {
                let slot = match result {
                    Ok(bytes) => {
                        tracing::debug!("Photo for stage {} ready", stage);
                        StageImage::Ready(image::Handle::from_bytes(bytes.clone()))
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load photo for stage {}: {}", stage, e);
                        StageImage::Unavailable
                    }
                };
                self.ui.images.insert(*stage, slot);
                Some(Task::none())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{Settings, Stage};

    #[test]
    fn failed_download_marks_unavailable() {
        let (mut app, _) = App::new(Settings::default());
        let _ = app.update(Message::StageImageLoaded(
            Stage::Crying,
            Err("timed out".to_string()),
        ));

        assert!(matches!(
            app.ui.images.get(&Stage::Crying),
            Some(StageImage::Unavailable)
        ));
        assert!(app.ui.photo(Stage::Crying).is_none());
    }

    #[test]
    fn downloaded_photo_is_shown() {
        let (mut app, _) = App::new(Settings::default());
        let png = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        let _ = app.update(Message::StageImageLoaded(Stage::Happy, Ok(png)));

        assert!(app.ui.photo(Stage::Happy).is_some());
        assert!(app.ui.photo(Stage::Initial).is_none());
    }
}
