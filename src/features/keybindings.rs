//! Keyboard shortcuts
//!
//! Every shortcut maps to the same action as one of the on-screen buttons,
//! so the key goes through the same visibility gate as the click.
//!
//! In the settings file a shortcut is a plain string: a single character
//! (`"y"`) or one of the named keys (`"enter"`, `"space"`, `"backspace"`).

use std::collections::HashMap;
use std::fmt;

use iced::keyboard::key::Named;
use iced::keyboard::{Key, Modifiers};
use serde::{Deserialize, Serialize};

/// All bindable actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    SayYes,
    SayNo,
    StartOver,
}

impl Action {
    pub fn all() -> &'static [Action] {
        &[Action::SayYes, Action::SayNo, Action::StartOver]
    }

    /// Name used in log output
    pub fn display_name(&self) -> &'static str {
        match self {
            Action::SayYes => "可以",
            Action::SayNo => "不可以",
            Action::StartOver => "重新开始",
        }
    }
}

/// One key that triggers an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Shortcut {
    /// A printable key, stored lowercase
    Char(char),
    Enter,
    Space,
    Backspace,
}

impl Shortcut {
    /// Whether a key press triggers this shortcut
    ///
    /// Shift is allowed so caps lock or a held shift still works;
    /// Ctrl, Alt and the logo key are left to the system.
    pub fn matches(&self, key: &Key, modifiers: &Modifiers) -> bool {
        if modifiers.control() || modifiers.alt() || modifiers.logo() {
            return false;
        }

        match (self, key) {
            (Shortcut::Char(expected), Key::Character(c)) => {
                let mut chars = c.chars().flat_map(char::to_lowercase);
                chars.next() == Some(*expected) && chars.next().is_none()
            }
            (Shortcut::Enter, Key::Named(Named::Enter))
            | (Shortcut::Space, Key::Named(Named::Space))
            | (Shortcut::Backspace, Key::Named(Named::Backspace)) => true,
            _ => false,
        }
    }
}

impl TryFrom<String> for Shortcut {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();
        match lower.as_str() {
            "enter" => Ok(Shortcut::Enter),
            "space" => Ok(Shortcut::Space),
            "backspace" => Ok(Shortcut::Backspace),
            _ => {
                let mut chars = lower.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if !c.is_whitespace() => Ok(Shortcut::Char(c)),
                    _ => Err(format!("unknown key {:?}", value)),
                }
            }
        }
    }
}

impl From<Shortcut> for String {
    fn from(shortcut: Shortcut) -> Self {
        match shortcut {
            Shortcut::Char(c) => c.to_string(),
            Shortcut::Enter => "enter".to_string(),
            Shortcut::Space => "space".to_string(),
            Shortcut::Backspace => "backspace".to_string(),
        }
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shortcut::Char(c) => write!(f, "{}", c.to_uppercase()),
            Shortcut::Enter => f.write_str("Enter"),
            Shortcut::Space => f.write_str("Space"),
            Shortcut::Backspace => f.write_str("Backspace"),
        }
    }
}

/// Action → shortcuts table, as it appears under `keybindings`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyBindings {
    bindings: HashMap<Action, Vec<Shortcut>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            bindings: HashMap::from([
                (Action::SayYes, vec![Shortcut::Char('y'), Shortcut::Enter]),
                (Action::SayNo, vec![Shortcut::Char('n')]),
                (Action::StartOver, vec![Shortcut::Char('r')]),
            ]),
        }
    }
}

impl KeyBindings {
    /// Find the action bound to a key press
    pub fn find_action(&self, key: &Key, modifiers: &Modifiers) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(_, shortcuts)| shortcuts.iter().any(|s| s.matches(key, modifiers)))
            .map(|(action, _)| *action)
    }

    /// Shortcuts for an action joined for display, e.g. "Y / Enter"
    pub fn describe(&self, action: &Action) -> String {
        match self.bindings.get(action) {
            Some(shortcuts) if !shortcuts.is_empty() => shortcuts
                .iter()
                .map(Shortcut::to_string)
                .collect::<Vec<_>>()
                .join(" / "),
            _ => "unbound".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn char_key(c: &str) -> Key {
        Key::Character(c.into())
    }

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::default();
        for action in Action::all() {
            assert_ne!(bindings.describe(action), "unbound", "{:?}", action);
        }
        assert_eq!(bindings.describe(&Action::SayYes), "Y / Enter");
        assert_eq!(bindings.describe(&Action::StartOver), "R");
    }

    #[test]
    fn test_find_action() {
        let bindings = KeyBindings::default();
        let none = Modifiers::empty();

        assert_eq!(bindings.find_action(&char_key("y"), &none), Some(Action::SayYes));
        assert_eq!(bindings.find_action(&char_key("Y"), &Modifiers::SHIFT), Some(Action::SayYes));
        assert_eq!(
            bindings.find_action(&Key::Named(Named::Enter), &none),
            Some(Action::SayYes)
        );
        assert_eq!(bindings.find_action(&char_key("n"), &none), Some(Action::SayNo));
        assert_eq!(bindings.find_action(&char_key("r"), &none), Some(Action::StartOver));
        assert_eq!(bindings.find_action(&char_key("q"), &none), None);
        assert_eq!(bindings.find_action(&Key::Unidentified, &none), None);
    }

    #[test]
    fn test_system_modifiers_never_match() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.find_action(&char_key("n"), &Modifiers::CTRL), None);
        assert_eq!(bindings.find_action(&char_key("y"), &Modifiers::ALT), None);
        assert_eq!(bindings.find_action(&char_key("r"), &Modifiers::LOGO), None);
    }

    #[test]
    fn test_parse_shortcut() {
        assert_eq!(Shortcut::try_from("Y".to_string()), Ok(Shortcut::Char('y')));
        assert_eq!(Shortcut::try_from("Enter".to_string()), Ok(Shortcut::Enter));
        assert_eq!(Shortcut::try_from("好".to_string()), Ok(Shortcut::Char('好')));
        assert!(Shortcut::try_from("ctrl+y".to_string()).is_err());
        assert!(Shortcut::try_from(String::new()).is_err());
        assert!(Shortcut::try_from(" ".to_string()).is_err());
    }

    #[test]
    fn test_override_from_json() {
        let json = r#"{ "say_no": ["backspace", "x"] }"#;
        let bindings: KeyBindings = serde_json::from_str(json).unwrap();
        let none = Modifiers::empty();

        assert_eq!(
            bindings.find_action(&Key::Named(Named::Backspace), &none),
            Some(Action::SayNo)
        );
        assert_eq!(bindings.find_action(&char_key("x"), &none), Some(Action::SayNo));
        assert_eq!(bindings.find_action(&char_key("y"), &none), None);
        assert_eq!(bindings.describe(&Action::SayYes), "unbound");
    }

    #[test]
    fn test_unknown_key_in_json_is_an_error() {
        let json = r#"{ "say_yes": ["page_up"] }"#;
        assert!(serde_json::from_str::<KeyBindings>(json).is_err());
    }

    #[test]
    fn test_written_form_reads_back() {
        let json = serde_json::to_string(&KeyBindings::default()).unwrap();
        assert!(json.contains("\"enter\""));
        let parsed: KeyBindings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, KeyBindings::default());
    }
}
