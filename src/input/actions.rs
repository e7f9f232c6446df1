//! Game action definitions

/// All actions the game reacts to
///
/// Keyboard / gamepad mappings:
/// - MoveLeft:  Left, A        / d-pad left, left stick
/// - MoveRight: Right, D       / d-pad right, left stick
/// - Jump:      Space, Up, W   / A (south)
/// - Confirm:   Enter          / Start
/// - Quit:      Escape         / Select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Held
    MoveLeft,
    MoveRight,

    // One-shot
    Jump,
    Confirm,
    Quit,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::Jump,
        Action::Confirm,
        Action::Quit,
    ];

    /// True for actions that fire once per press rather than while held
    pub fn is_one_shot(&self) -> bool {
        matches!(self, Action::Jump | Action::Confirm | Action::Quit)
    }
}

/// Snapshot of input for one simulation step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// MoveLeft held
    pub left: bool,
    /// MoveRight held
    pub right: bool,
    /// Jump pressed
    pub jump: bool,
    /// Confirm pressed
    pub confirm: bool,
    /// Quit pressed
    pub quit: bool,
}

impl FrameInput {
    /// Fold a newer poll into this one: held state is replaced, presses
    /// accumulate until consumed by a simulation step.
    pub fn absorb(&mut self, newer: FrameInput) {
        self.left = newer.left;
        self.right = newer.right;
        self.jump |= newer.jump;
        self.confirm |= newer.confirm;
        self.quit |= newer.quit;
    }

    /// Clear presses once a simulation step has seen them
    pub fn clear_one_shots(&mut self) {
        self.jump = false;
        self.confirm = false;
        self.quit = false;
    }

    pub fn set(&mut self, action: Action, active: bool) {
        match action {
            Action::MoveLeft => self.left = active,
            Action::MoveRight => self.right = active,
            Action::Jump => self.jump = active,
            Action::Confirm => self.confirm = active,
            Action::Quit => self.quit = active,
        }
    }
}
