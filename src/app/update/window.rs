//! Window and pointer event handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    pub(super) fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::WindowResized(size) => {
                self.ui.background.regenerate(size.width, size.height);
                Some(Task::none())
            }

            Message::PointerMoved(position) => {
                // Stored only; the redraw is driven by the frames subscription
                self.ui.pointer = *position;
                Some(Task::none())
            }

            // Reaching the runtime is enough to trigger a view pass
            Message::AnimationTick => Some(Task::none()),

            _ => None,
        }
    }
}
