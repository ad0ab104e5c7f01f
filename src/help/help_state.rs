use crate::app::Focus;
use crate::scroll::ScrollState;

/// Help popup visibility and the pane it was opened from
#[derive(Default)]
pub struct HelpPopupState {
    pub visible: bool,
    pub scroll: ScrollState,
    /// Pane whose section is highlighted
    pub context: Option<Focus>,
    /// Scroll to the context section on the next render
    jump_pending: bool,
}

impl HelpPopupState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open for `focus`, or close if already open
    pub fn toggle(&mut self, focus: Focus) {
        if self.visible {
            self.close();
        } else {
            self.visible = true;
            self.context = Some(focus);
            self.scroll.reset();
            self.jump_pending = true;
        }
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.context = None;
        self.jump_pending = false;
        self.scroll.reset();
    }

    /// Consume the pending jump once the popup knows its bounds
    pub fn take_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump_pending)
    }
}
