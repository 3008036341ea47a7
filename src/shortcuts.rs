//! Centralized shortcut and action system.
//!
//! Maps key events to actions per input context. The same table drives
//! event handling and the help overlay, so the two never drift apart.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Context name for the card view (no text input focused).
pub const MAIN_CONTEXT: &str = "main";

/// Context name for the search field.
pub const SEARCH_CONTEXT: &str = "search";

/// All possible actions in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === FILTER BUTTONS ===
    ShowUnfunded,
    ShowFunded,
    ShowAll,

    // === SEARCH ===
    FocusSearch,
    SubmitSearch,
    LeaveSearch,
    ClearSearch,

    // === SCROLLING ===
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    JumpToFirst,
    JumpToLast,

    // === GENERAL ===
    ToggleHelp,
    Cancel,
    Quit,
}

impl Action {
    /// Short description for the help overlay.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ShowUnfunded => "Show unfunded games only",
            Self::ShowFunded => "Show funded games only",
            Self::ShowAll => "Show all games",
            Self::FocusSearch => "Focus the search field",
            Self::SubmitSearch => "Search game names",
            Self::LeaveSearch => "Leave the search field",
            Self::ClearSearch => "Clear the search field",
            Self::ScrollUp => "Scroll up",
            Self::ScrollDown => "Scroll down",
            Self::PageUp => "Scroll up one page",
            Self::PageDown => "Scroll down one page",
            Self::JumpToFirst => "Jump to first card",
            Self::JumpToLast => "Jump to last card",
            Self::ToggleHelp => "Toggle this help",
            Self::Cancel => "Dismiss status message",
            Self::Quit => "Quit",
        }
    }
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    ///
    /// Shift is dropped for character keys; the character already carries it
    /// and terminals disagree on whether to report it.
    #[must_use]
    pub fn from_event(event: KeyEvent) -> Self {
        let modifiers = match event.code {
            KeyCode::Char(_) => event.modifiers.difference(KeyModifiers::SHIFT),
            _ => event.modifiers,
        };
        Self {
            code: event.code,
            modifiers,
        }
    }

    /// Human-readable key label ("Ctrl+C", "PgDn", "/").
    #[must_use]
    pub fn label(&self) -> String {
        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::PageUp => "PgUp".to_string(),
            KeyCode::PageDown => "PgDn".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            other => format!("{other:?}"),
        };
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{key}")
        } else {
            key
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(String, KeyBinding), Action>,
    /// Registration order per context, for help listings
    order: Vec<(String, KeyBinding, Action)>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
            order: Vec::new(),
        };

        registry.register_main_shortcuts();
        registry.register_search_shortcuts();
        registry
    }

    /// Register all shortcuts for the card view.
    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = MAIN_CONTEXT;

        // === FILTER BUTTONS ===
        self.register(ctx, K::Char('u'), M::NONE, Action::ShowUnfunded);
        self.register(ctx, K::Char('f'), M::NONE, Action::ShowFunded);
        self.register(ctx, K::Char('a'), M::NONE, Action::ShowAll);

        // === SEARCH ===
        self.register(ctx, K::Char('/'), M::NONE, Action::FocusSearch);
        self.register(ctx, K::Char('s'), M::NONE, Action::FocusSearch);

        // === SCROLLING ===
        self.register(ctx, K::Up, M::NONE, Action::ScrollUp);
        self.register(ctx, K::Down, M::NONE, Action::ScrollDown);
        self.register(ctx, K::Char('k'), M::NONE, Action::ScrollUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::ScrollDown);
        self.register(ctx, K::PageUp, M::NONE, Action::PageUp);
        self.register(ctx, K::PageDown, M::NONE, Action::PageDown);
        self.register(ctx, K::Home, M::NONE, Action::JumpToFirst);
        self.register(ctx, K::End, M::NONE, Action::JumpToLast);

        // === GENERAL ===
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
    }

    /// Register all shortcuts for the search field.
    ///
    /// Unbound printable keys are typed into the field by the handler.
    fn register_search_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = SEARCH_CONTEXT;

        self.register(ctx, K::Enter, M::NONE, Action::SubmitSearch);
        self.register(ctx, K::Esc, M::NONE, Action::LeaveSearch);
        self.register(ctx, K::Tab, M::NONE, Action::LeaveSearch);
        self.register(ctx, K::Char('u'), M::CONTROL, Action::ClearSearch);
        self.register(ctx, K::Up, M::NONE, Action::ScrollUp);
        self.register(ctx, K::Down, M::NONE, Action::ScrollDown);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
    }

    /// Register a shortcut binding.
    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
        self.order.push((context.to_string(), binding, action));
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }

    /// Key labels and descriptions for one context, one entry per action,
    /// with all keys bound to that action joined ("↑ / k").
    #[must_use]
    pub fn help_entries(&self, context: &str) -> Vec<(String, &'static str)> {
        let mut entries: Vec<(Action, Vec<String>)> = Vec::new();
        for (ctx, binding, action) in &self.order {
            if ctx != context {
                continue;
            }
            match entries.iter_mut().find(|(a, _)| a == action) {
                Some((_, keys)) => keys.push(binding.label()),
                None => entries.push((*action, vec![binding.label()])),
            }
        }
        entries
            .into_iter()
            .map(|(action, keys)| (keys.join(" / "), action.description()))
            .collect()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
