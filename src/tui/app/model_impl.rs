//! `Model` trait implementation for the rating TUI application.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};

use super::{RatingApp, normalise_viewport};
use crate::tui::input::map_key_to_message;
use crate::tui::messages::AppMsg;

impl Model for RatingApp {
    fn init() -> (Self, Option<Cmd>) {
        // Retrieve startup context from module-level storage
        let (width, height) = crate::tui::get_initial_terminal_size();
        let mut model = Self::new(crate::tui::get_initial_page())
            .with_size(width, height)
            .with_telemetry_sink(crate::tui::get_telemetry_sink());
        if let Some(gateway) = crate::tui::get_gateway() {
            model = model.with_gateway(gateway);
        }

        (model, Some(Self::immediate_init_cmd()))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            // Any key closes the help overlay
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            return map_key_to_message(key_msg).and_then(|mapped| self.handle_message(&mapped));
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            return self.handle_message(&AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            });
        }

        None
    }

    fn view(&self) -> String {
        let frame = if self.show_help {
            Self::render_help_overlay()
        } else {
            self.render_page()
        };
        normalise_viewport(&frame, self.width, self.height)
    }
}
