//! User configuration: friends-list key bindings, the default avatar, and
//! persistence.
//!
//! Stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/eatsplit/config.toml` (default `~/.config/eatsplit/config.toml`).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::add_friend::DEFAULT_AVATAR_URL;

// ───────────────────────────────────────── actions ───────────

/// Rebindable actions. Text entry inside the forms is not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    EnterApp,
    MoveUp,
    MoveDown,
    Select,
    ToggleAddFriend,
    NextPane,
    Quit,
}

impl Action {
    pub const ALL: &[Action] = &[
        Action::EnterApp,
        Action::MoveUp,
        Action::MoveDown,
        Action::Select,
        Action::ToggleAddFriend,
        Action::NextPane,
        Action::Quit,
    ];

    fn config_key(self) -> &'static str {
        match self {
            Action::EnterApp => "enter_app",
            Action::MoveUp => "move_up",
            Action::MoveDown => "move_down",
            Action::Select => "select",
            Action::ToggleAddFriend => "toggle_add_friend",
            Action::NextPane => "next_pane",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A key code plus CTRL/ALT/SHIFT modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

const MODIFIER_MASK: KeyModifiers = KeyModifiers::CONTROL
    .union(KeyModifiers::ALT)
    .union(KeyModifiers::SHIFT);

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn matches(&self, event: KeyEvent) -> bool {
        self.code == event.code
            && (self.modifiers & MODIFIER_MASK) == (event.modifiers & MODIFIER_MASK)
    }

    /// Short form for the status bar (`"↑"`, `"Ctrl+c"`, `"a"`).
    pub fn display(&self) -> String {
        let key = match self.code {
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            _ => key_name(self.code),
        };
        format!("{}{key}", modifier_prefix(self.modifiers))
    }

    fn to_config_string(&self) -> String {
        format!("{}{}", modifier_prefix(self.modifiers), key_name(self.code))
    }

    /// Parse `"Ctrl+c"`, `"Enter"`, `"Space"`, `"j"`.
    fn parse(s: &str) -> Option<Self> {
        let mut parts: Vec<&str> = s.split('+').collect();
        let key_part = parts.pop()?;

        let mut modifiers = KeyModifiers::NONE;
        for part in parts {
            modifiers |= match part.to_lowercase().as_str() {
                "ctrl" => KeyModifiers::CONTROL,
                "alt" => KeyModifiers::ALT,
                "shift" => KeyModifiers::SHIFT,
                _ => return None,
            };
        }

        let code = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "space" => KeyCode::Char(' '),
            s if s.starts_with('f') && s.len() > 1 => KeyCode::F(s[1..].parse().ok()?),
            _ if key_part.chars().count() == 1 => KeyCode::Char(key_part.chars().next()?),
            _ => return None,
        };

        Some(KeyBind { code, modifiers })
    }
}

fn modifier_prefix(modifiers: KeyModifiers) -> String {
    let mut s = String::new();
    if modifiers.contains(KeyModifiers::CONTROL) {
        s.push_str("Ctrl+");
    }
    if modifiers.contains(KeyModifiers::ALT) {
        s.push_str("Alt+");
    }
    if modifiers.contains(KeyModifiers::SHIFT) {
        s.push_str("Shift+");
    }
    s
}

fn key_name(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".into(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Up => "Up".into(),
        KeyCode::Down => "Down".into(),
        KeyCode::Left => "Left".into(),
        KeyCode::Right => "Right".into(),
        KeyCode::Enter => "Enter".into(),
        KeyCode::Esc => "Esc".into(),
        KeyCode::Tab => "Tab".into(),
        KeyCode::F(n) => format!("F{n}"),
        other => format!("{other:?}"),
    }
}

// ───────────────────────────────────────── config ────────────

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    /// Image URL the add-friend form starts with.
    pub default_avatar_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            default_avatar_url: DEFAULT_AVATAR_URL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let mut m = HashMap::new();

        m.insert(EnterApp, vec![KeyBind::plain(Enter), KeyBind::plain(Char(' '))]);
        m.insert(MoveUp, vec![KeyBind::plain(Up), KeyBind::plain(Char('k'))]);
        m.insert(MoveDown, vec![KeyBind::plain(Down), KeyBind::plain(Char('j'))]);
        m.insert(Select, vec![KeyBind::plain(Enter), KeyBind::plain(Char(' '))]);
        m.insert(ToggleAddFriend, vec![KeyBind::plain(Char('a'))]);
        m.insert(NextPane, vec![KeyBind::plain(Tab)]);
        m.insert(Quit, vec![KeyBind::plain(Char('q'))]);

        m
    }

    /// Does `event` trigger `action`? Enter is shared by `enter_app` and
    /// `select`, so lookups go per action, never key to action.
    pub fn is(&self, action: Action, event: KeyEvent) -> bool {
        self.bindings
            .get(&action)
            .is_some_and(|binds| binds.iter().any(|b| b.matches(event)))
    }

    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action).and_then(|b| b.first()) {
            Some(bind) => bind.display(),
            None => "?".into(),
        }
    }

    pub fn landing_hint(&self) -> String {
        format!(
            "{}: enter app | {}: quit",
            self.short_binding(Action::EnterApp),
            self.short_binding(Action::Quit),
        )
    }

    pub fn list_hint(&self) -> String {
        format!(
            "{}/{}: move | {}: select | {}: add friend | {}: next pane | {}: quit",
            self.short_binding(Action::MoveUp),
            self.short_binding(Action::MoveDown),
            self.short_binding(Action::Select),
            self.short_binding(Action::ToggleAddFriend),
            self.short_binding(Action::NextPane),
            self.short_binding(Action::Quit),
        )
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents),
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "no config file, using defaults");
                Self::default()
            }
        }
    }

    /// Write the current config to the default location.
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&config_path())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.serialise())?;
        Ok(())
    }

    fn parse(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            if key == "default_avatar_url" {
                let url = value.trim_matches('"');
                if !url.is_empty() {
                    config.default_avatar_url = url.to_string();
                }
                continue;
            }

            let Some(action) = Action::from_config_key(key) else {
                tracing::debug!(key, "unknown config key");
                continue;
            };

            let parsed: Vec<KeyBind> = value
                .split(',')
                .filter_map(|part| KeyBind::parse(part.trim().trim_matches('"')))
                .collect();
            if !parsed.is_empty() {
                config.bindings.insert(action, parsed);
            }
        }

        config
    }

    fn serialise(&self) -> String {
        let mut lines = vec![
            "# eatsplit configuration".to_string(),
            String::new(),
            format!("default_avatar_url = \"{}\"", self.default_avatar_url),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            String::new(),
        ];

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(|b| b.to_config_string()).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// `$XDG_CONFIG_HOME/eatsplit/config.toml`.
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("eatsplit").join("config.toml")
}
