//! Ring controller for carousel and overlay input
//!
//! Controls:
//! - Left/Right arrows: previous/next panel (halts auto-rotation)
//! - Space: toggle auto-rotation
//! - Enter: activate the front panel
//! - Escape: dismiss the overlay (or quit at top level)
//! - Horizontal drag past the swipe threshold: previous/next panel
//! - Short click: activate at the cursor; three within a second burst confetti

use std::time::Duration;

use vitrine_math::Vec2;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

/// Default horizontal distance that turns a drag into a swipe
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// How long a click streak stays alive
const CLICK_STREAK_WINDOW: Duration = Duration::from_secs(1);

/// Commands the controller emits for the application to apply
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RingCommand {
    /// Step the ring backward and halt auto-rotation
    Previous,
    /// Step the ring forward and halt auto-rotation
    Next,
    /// Toggle auto-rotation on/off
    ToggleRotation,
    /// A short click finished at this position
    Click(Vec2),
    /// Activate the front panel (keyboard path)
    ActivateFront,
    /// Dismiss the topmost overlay, or exit when nothing is open
    Dismiss,
    /// Three quick clicks: celebrate
    ConfettiBurst,
}

/// Stateful translator from window events to [`RingCommand`]s
pub struct RingController {
    swipe_threshold: f32,
    cursor: Vec2,
    drag_origin: Option<Vec2>,
    streak_count: u32,
    streak_clock: Duration,
    pending: Vec<RingCommand>,
}

impl Default for RingController {
    fn default() -> Self {
        Self::new()
    }
}

impl RingController {
    pub fn new() -> Self {
        Self {
            swipe_threshold: SWIPE_THRESHOLD,
            cursor: Vec2::ZERO,
            drag_origin: None,
            streak_count: 0,
            streak_clock: Duration::ZERO,
            pending: Vec::new(),
        }
    }

    /// Override the swipe threshold
    pub fn with_swipe_threshold(mut self, threshold: f32) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    /// Advance the click-streak window
    pub fn update(&mut self, dt: Duration) {
        if self.streak_count > 0 {
            self.streak_clock += dt;
            if self.streak_clock >= CLICK_STREAK_WINDOW {
                self.streak_count = 0;
                self.streak_clock = Duration::ZERO;
            }
        }
    }

    /// Process keyboard input; returns true when the key was consumed
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        if state != ElementState::Pressed {
            return false;
        }

        match key {
            KeyCode::ArrowLeft => {
                self.pending.push(RingCommand::Previous);
                true
            }
            KeyCode::ArrowRight => {
                self.pending.push(RingCommand::Next);
                true
            }
            KeyCode::Space => {
                self.pending.push(RingCommand::ToggleRotation);
                true
            }
            KeyCode::Enter => {
                self.pending.push(RingCommand::ActivateFront);
                true
            }
            KeyCode::Escape => {
                self.pending.push(RingCommand::Dismiss);
                true
            }
            _ => false,
        }
    }

    /// Track the cursor for drag classification
    pub fn process_cursor_moved(&mut self, x: f32, y: f32) {
        self.cursor = Vec2::new(x, y);
    }

    /// Process mouse buttons; press anchors a potential drag, release
    /// classifies it as a swipe or a click
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button != MouseButton::Left {
            return;
        }

        match state {
            ElementState::Pressed => {
                self.drag_origin = Some(self.cursor);
            }
            ElementState::Released => {
                let Some(origin) = self.drag_origin.take() else {
                    return;
                };
                let delta_x = self.cursor.x - origin.x;

                if delta_x.abs() >= self.swipe_threshold {
                    // Dragging left pulls the next panel into view
                    if delta_x < 0.0 {
                        self.pending.push(RingCommand::Next);
                    } else {
                        self.pending.push(RingCommand::Previous);
                    }
                } else {
                    self.register_click();
                }
            }
        }
    }

    /// Drain the commands accumulated since the last poll
    pub fn poll(&mut self) -> Vec<RingCommand> {
        std::mem::take(&mut self.pending)
    }

    fn register_click(&mut self) {
        self.streak_count += 1;
        if self.streak_count == 1 {
            self.streak_clock = Duration::ZERO;
        }

        self.pending.push(RingCommand::Click(self.cursor));

        if self.streak_count == 3 {
            self.streak_count = 0;
            self.streak_clock = Duration::ZERO;
            self.pending.push(RingCommand::ConfettiBurst);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn click_at(controller: &mut RingController, x: f32, y: f32) {
        controller.process_cursor_moved(x, y);
        controller.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        controller.process_mouse_button(MouseButton::Left, ElementState::Released);
    }

    #[test]
    fn test_arrow_keys() {
        let mut controller = RingController::new();
        controller.process_keyboard(KeyCode::ArrowLeft, ElementState::Pressed);
        controller.process_keyboard(KeyCode::ArrowRight, ElementState::Pressed);
        // Releases are ignored
        controller.process_keyboard(KeyCode::ArrowRight, ElementState::Released);
        assert_eq!(
            controller.poll(),
            vec![RingCommand::Previous, RingCommand::Next]
        );
        assert!(controller.poll().is_empty());
    }

    #[test]
    fn test_unmapped_key_not_consumed() {
        let mut controller = RingController::new();
        assert!(!controller.process_keyboard(KeyCode::KeyQ, ElementState::Pressed));
        assert!(controller.poll().is_empty());
    }

    #[test]
    fn test_leftward_swipe_is_next() {
        let mut controller = RingController::new();
        controller.process_cursor_moved(300.0, 200.0);
        controller.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        controller.process_cursor_moved(240.0, 205.0);
        controller.process_mouse_button(MouseButton::Left, ElementState::Released);
        assert_eq!(controller.poll(), vec![RingCommand::Next]);
    }

    #[test]
    fn test_rightward_swipe_is_previous() {
        let mut controller = RingController::new();
        controller.process_cursor_moved(300.0, 200.0);
        controller.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        controller.process_cursor_moved(355.0, 195.0);
        controller.process_mouse_button(MouseButton::Left, ElementState::Released);
        assert_eq!(controller.poll(), vec![RingCommand::Previous]);
    }

    #[test]
    fn test_short_drag_is_click() {
        let mut controller = RingController::new();
        controller.process_cursor_moved(300.0, 200.0);
        controller.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        controller.process_cursor_moved(320.0, 200.0);
        controller.process_mouse_button(MouseButton::Left, ElementState::Released);
        assert_eq!(
            controller.poll(),
            vec![RingCommand::Click(Vec2::new(320.0, 200.0))]
        );
    }

    #[test]
    fn test_threshold_boundary() {
        let mut controller = RingController::new();
        // Exactly the threshold counts as a swipe
        controller.process_cursor_moved(100.0, 0.0);
        controller.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        controller.process_cursor_moved(150.0, 0.0);
        controller.process_mouse_button(MouseButton::Left, ElementState::Released);
        assert_eq!(controller.poll(), vec![RingCommand::Previous]);
    }

    #[test]
    fn test_vertical_drag_is_click() {
        let mut controller = RingController::new();
        controller.process_cursor_moved(100.0, 100.0);
        controller.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        controller.process_cursor_moved(110.0, 400.0);
        controller.process_mouse_button(MouseButton::Left, ElementState::Released);
        assert_eq!(
            controller.poll(),
            vec![RingCommand::Click(Vec2::new(110.0, 400.0))]
        );
    }

    #[test]
    fn test_triple_click_bursts() {
        let mut controller = RingController::new();
        click_at(&mut controller, 50.0, 50.0);
        controller.update(ms(100));
        click_at(&mut controller, 50.0, 50.0);
        controller.update(ms(100));
        click_at(&mut controller, 50.0, 50.0);

        let commands = controller.poll();
        assert_eq!(commands.iter().filter(|c| matches!(c, RingCommand::Click(_))).count(), 3);
        assert_eq!(commands.last(), Some(&RingCommand::ConfettiBurst));
    }

    #[test]
    fn test_slow_clicks_do_not_burst() {
        let mut controller = RingController::new();
        click_at(&mut controller, 50.0, 50.0);
        controller.update(ms(1_100));
        click_at(&mut controller, 50.0, 50.0);
        controller.update(ms(1_100));
        click_at(&mut controller, 50.0, 50.0);

        let commands = controller.poll();
        assert!(!commands.contains(&RingCommand::ConfettiBurst));
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut controller = RingController::new();
        controller.process_mouse_button(MouseButton::Left, ElementState::Released);
        assert!(controller.poll().is_empty());
    }

    #[test]
    fn test_custom_threshold() {
        let mut controller = RingController::new().with_swipe_threshold(10.0);
        controller.process_cursor_moved(0.0, 0.0);
        controller.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        controller.process_cursor_moved(-12.0, 0.0);
        controller.process_mouse_button(MouseButton::Left, ElementState::Released);
        assert_eq!(controller.poll(), vec![RingCommand::Next]);
    }
}
