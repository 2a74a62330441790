//! Message routing.

use super::model::Model;
use crate::layout::Region;
use crate::modal::FocusFilterMsg;
use bubbletea_rs::{quit, Cmd, KeyMsg, MouseMsg, Msg, WindowSizeMsg};
use crossterm::event::{MouseButton, MouseEventKind};

/// Outcome of handing a message to the widget.
pub struct Dispatch {
    /// Command for the runtime to run, if any.
    pub cmd: Option<Cmd>,
    /// True if the host must not apply its own default handling, such as
    /// scrolling the screen for a drag that began on the header.
    pub default_prevented: bool,
}

impl Dispatch {
    fn ignored() -> Self {
        Self {
            cmd: None,
            default_prevented: false,
        }
    }

    fn run(cmd: Cmd) -> Self {
        Self {
            cmd: Some(cmd),
            default_prevented: false,
        }
    }

    fn prevented() -> Self {
        Self {
            cmd: None,
            default_prevented: true,
        }
    }
}

impl Model {
    /// Routes a message to the operation it triggers.
    ///
    /// - [`FocusFilterMsg`]: completes a deferred focus.
    /// - [`WindowSizeMsg`]: recomputes the layout.
    /// - [`KeyMsg`]: opens the dialog while closed; while open, navigates the
    ///   list, chooses the cursor item, closes, or edits the filter.
    /// - [`MouseMsg`]: clicks activate list rows, open the dialog from the
    ///   mirror field, or close it from outside; wheel events scroll the
    ///   body; drags that start on the header are prevented.
    pub fn dispatch(&mut self, msg: &Msg) -> Dispatch {
        if let Some(focus_msg) = msg.downcast_ref::<FocusFilterMsg>() {
            self.handle_focus(focus_msg);
            return Dispatch::ignored();
        }
        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            self.resize(size.width, size.height);
            return Dispatch::ignored();
        }
        if let Some(mouse) = msg.downcast_ref::<MouseMsg>() {
            return self.handle_mouse(mouse);
        }
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key_msg, msg);
        }
        Dispatch::ignored()
    }

    fn handle_key(&mut self, key_msg: &KeyMsg, msg: &Msg) -> Dispatch {
        if self.keymap.force_quit.matches(key_msg) {
            return Dispatch::run(quit());
        }

        if !self.state.is_visible() {
            if self.keymap.open.matches(key_msg) {
                return Dispatch::run(self.open_modal());
            }
            return Dispatch::ignored();
        }

        if self.keymap.close.matches(key_msg) {
            if self.filter.focused() {
                self.filter_blurred();
            } else {
                self.close_modal();
            }
        } else if self.list.keymap().choose.matches(key_msg) {
            if let Some(index) = self.list.selected_index() {
                self.activate(index);
            }
        } else if !self.list.update(msg) && self.filter.update(msg) {
            let query = self.filter.value();
            self.list.apply_filter(&query);
        }
        Dispatch::ignored()
    }

    fn handle_mouse(&mut self, mouse: &MouseMsg) -> Dispatch {
        let hit = self.layout.hit(mouse.x, mouse.y);
        match mouse.button {
            MouseEventKind::Down(button) => {
                self.press_origin = hit;
                if button == MouseButton::Left {
                    return self.click(hit, mouse.y);
                }
            }
            MouseEventKind::Up(_) => self.press_origin = None,
            MouseEventKind::Drag(_) => {
                if self.press_origin.or(hit) == Some(Region::Header) {
                    log::trace!("suppressing drag from header at {},{}", mouse.x, mouse.y);
                    return Dispatch::prevented();
                }
            }
            MouseEventKind::ScrollDown | MouseEventKind::ScrollUp => {
                let body = self.layout.get(Region::Body);
                if self.state.is_visible() && body.contains(mouse.x, mouse.y) {
                    let delta = if mouse.button == MouseEventKind::ScrollDown {
                        1
                    } else {
                        -1
                    };
                    self.list.scroll(delta);
                }
            }
            _ => {}
        }
        Dispatch::ignored()
    }

    fn click(&mut self, hit: Option<Region>, y: u16) -> Dispatch {
        if !self.state.is_visible() {
            if hit == Some(Region::MirrorInput) {
                return Dispatch::run(self.open_modal());
            }
            return Dispatch::ignored();
        }

        match hit {
            Some(Region::List) => {
                let row = y.saturating_sub(self.layout.get(Region::List).y) as usize;
                if let Some(index) = self.list.item_at_row(row) {
                    self.activate(index);
                }
            }
            Some(Region::FilterField) => self.focus_filter(),
            Some(Region::Body) | Some(Region::Overlay) => {}
            _ => {
                if self.filter.focused() {
                    self.filter_blurred();
                } else {
                    self.close_modal();
                }
            }
        }
        Dispatch::ignored()
    }
}
