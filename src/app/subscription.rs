// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::routing::View;
use iced::{event, Subscription};

/// File drops are only listened to while the extraction view is shown.
pub fn create_event_subscription(view: View) -> Subscription<Message> {
    match view {
        View::Extraction => event::listen_with(|event, _status, _window_id| {
            if let event::Event::Window(iced::window::Event::FileDropped(path)) = event {
                return Some(Message::FileDropped(path));
            }
            None
        }),
        _ => Subscription::none(),
    }
}
