//! Input events, reduced to what the visualizer reacts to.
//!
//! Raw winit events are translated into [`AppEvent`]s so the state update can
//! be driven (and tested) without a window.

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{Key as WinitKey, NamedKey};

/// Keys the visualizer responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Up,
    Down,
    /// The `A` key, either case.
    A,
    Space,
    Other,
}

impl From<&WinitKey> for Key {
    fn from(key: &WinitKey) -> Self {
        match key {
            WinitKey::Named(NamedKey::Escape) => Key::Escape,
            WinitKey::Named(NamedKey::ArrowUp) => Key::Up,
            WinitKey::Named(NamedKey::ArrowDown) => Key::Down,
            WinitKey::Named(NamedKey::Space) => Key::Space,
            WinitKey::Character(c) if c.as_str().eq_ignore_ascii_case("a") => Key::A,
            WinitKey::Character(c) if c.as_str() == " " => Key::Space,
            _ => Key::Other,
        }
    }
}

/// Window events the application state handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// New inner size of the window in physical pixels.
    Resize { width: u32, height: u32 },
    /// A key went down. Auto-repeat presses are delivered too.
    KeyDown(Key),
    Close,
}

impl AppEvent {
    /// Translate a winit event, or `None` for events the visualizer ignores.
    pub fn from_window_event(event: &WindowEvent) -> Option<Self> {
        match event {
            WindowEvent::CloseRequested => Some(AppEvent::Close),
            WindowEvent::Resized(size) => Some(AppEvent::Resize {
                width: size.width,
                height: size.height,
            }),
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                Some(AppEvent::KeyDown(Key::from(&event.logical_key)))
            }
            _ => None,
        }
    }
}

/// What the window collaborator must do after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Exit,
    ToggleFullscreen,
    /// Reconfigure the surface to a new size.
    Resize { width: u32, height: u32 },
}

/// Display flags owned by the application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayToggles {
    /// Tri-state axis flag: toggled by negation, axes drawn only when it is `1`.
    show_axes: i8,
}

impl DisplayToggles {
    pub fn new(show_axes: bool) -> Self {
        Self {
            show_axes: if show_axes { 1 } else { -1 },
        }
    }

    pub fn toggle_axes(&mut self) {
        self.show_axes = -self.show_axes;
    }

    pub fn axes_visible(&self) -> bool {
        self.show_axes == 1
    }
}

impl Default for DisplayToggles {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalSize;
    use winit::keyboard::SmolStr;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Key::from(&WinitKey::Named(NamedKey::Escape)), Key::Escape);
        assert_eq!(Key::from(&WinitKey::Named(NamedKey::ArrowUp)), Key::Up);
        assert_eq!(Key::from(&WinitKey::Named(NamedKey::ArrowDown)), Key::Down);
        assert_eq!(Key::from(&WinitKey::Named(NamedKey::Space)), Key::Space);
        assert_eq!(Key::from(&WinitKey::Character(SmolStr::new("a"))), Key::A);
        assert_eq!(Key::from(&WinitKey::Character(SmolStr::new("A"))), Key::A);
        assert_eq!(Key::from(&WinitKey::Character(SmolStr::new("b"))), Key::Other);
        assert_eq!(Key::from(&WinitKey::Named(NamedKey::Enter)), Key::Other);
    }

    #[test]
    fn test_window_event_translation() {
        assert_eq!(
            AppEvent::from_window_event(&WindowEvent::CloseRequested),
            Some(AppEvent::Close)
        );
        assert_eq!(
            AppEvent::from_window_event(&WindowEvent::Resized(PhysicalSize::new(1024, 768))),
            Some(AppEvent::Resize {
                width: 1024,
                height: 768
            })
        );
        assert_eq!(AppEvent::from_window_event(&WindowEvent::Focused(true)), None);
    }

    #[test]
    fn test_axis_toggle_is_involution() {
        let mut toggles = DisplayToggles::default();
        assert!(!toggles.axes_visible());

        toggles.toggle_axes();
        assert!(toggles.axes_visible());

        toggles.toggle_axes();
        assert_eq!(toggles, DisplayToggles::default());
    }

    #[test]
    fn test_toggles_start_visible() {
        let toggles = DisplayToggles::new(true);
        assert!(toggles.axes_visible());
    }
}
