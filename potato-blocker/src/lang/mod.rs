//! Localized plugin messages.
//!
//! Every message is a [`Translations`] entry in a compile-time map. English is
//! a required field of each entry, so a key can never be missing its fallback
//! text. Lookups never fail: anything that cannot be resolved becomes
//! [`MESSAGE_NOT_FOUND`].

use std::fmt;

use crossbeam::atomic::AtomicCell;
use potato_blocker_util::Language;

mod messages;

/// Returned when a key is unknown or has no usable text.
pub const MESSAGE_NOT_FOUND: &str = "Message not found";

/// Language consulted when the current one has no entry for a key.
pub const FALLBACK_LANGUAGE: Language = Language::English;

/// All localized texts of a single message.
#[derive(Debug, Clone, Copy)]
pub struct Translations {
    /// Fallback text. An empty string counts as unpopulated.
    pub english: &'static str,
    pub localized: &'static [(Language, &'static str)],
}

impl Translations {
    /// The text for exactly `language`, without falling back.
    pub fn get(&self, language: Language) -> Option<&'static str> {
        let text = if language == FALLBACK_LANGUAGE {
            Some(self.english)
        } else {
            self.localized
                .iter()
                .find(|(lang, _)| *lang == language)
                .map(|(_, text)| *text)
        };
        text.filter(|text| !text.is_empty())
    }
}

/// Read-only message key -> translations table.
#[derive(Clone, Copy)]
pub struct MessageTable {
    entries: &'static phf::Map<&'static str, Translations>,
}

impl MessageTable {
    pub const fn new(entries: &'static phf::Map<&'static str, Translations>) -> Self {
        Self { entries }
    }

    /// The messages shipped with the plugin.
    pub fn builtin() -> Self {
        Self::new(&messages::BUILTIN_MESSAGES)
    }

    pub fn get(&self, key: &str) -> Option<&'static Translations> {
        self.entries.get(key)
    }

    /// Keys from `keys` that would resolve to [`MESSAGE_NOT_FOUND`] under the
    /// fallback language.
    pub fn missing_fallbacks<'a>(&self, keys: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        keys.into_iter()
            .filter(|key| {
                self.get(key)
                    .and_then(|translations| translations.get(FALLBACK_LANGUAGE))
                    .is_none()
            })
            .collect()
    }

    /// Resolves `key` for `language`: the exact entry, then the fallback
    /// language, then the sentinel.
    pub fn resolve(&self, key: &str, language: Language) -> &'static str {
        let Some(translations) = self.get(key) else {
            return MESSAGE_NOT_FOUND;
        };
        translations
            .get(language)
            .or_else(|| translations.get(FALLBACK_LANGUAGE))
            .unwrap_or(MESSAGE_NOT_FOUND)
    }
}

impl fmt::Debug for MessageTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageTable")
            .field("entries", &self.entries.len())
            .finish()
    }
}

/// Keys of the built-in messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Blocked,
    Info,
    Loading,
    Enabled,
    Compatibility,
    Optimization,
    ListenerRegistered,
    BlockedAttemptLog,
    Disabled,
    ErrorGeneric,
}

impl MessageKey {
    pub const ALL: [MessageKey; 10] = [
        Self::Blocked,
        Self::Info,
        Self::Loading,
        Self::Enabled,
        Self::Compatibility,
        Self::Optimization,
        Self::ListenerRegistered,
        Self::BlockedAttemptLog,
        Self::Disabled,
        Self::ErrorGeneric,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Blocked => "blocked_message",
            Self::Info => "info_message",
            Self::Loading => "loading",
            Self::Enabled => "enabled",
            Self::Compatibility => "compatibility",
            Self::Optimization => "optimization",
            Self::ListenerRegistered => "listener_registered",
            Self::BlockedAttemptLog => "blocked_attempt_log",
            Self::Disabled => "disabled",
            Self::ErrorGeneric => "error_generic",
        }
    }
}

/// Message table plus the language currently selected for lookups.
///
/// Shared between the lifecycle and the event handler through an `Arc`. The
/// table is immutable, and the language is a lock-free atomic, so lookups and
/// language switches may happen on different threads.
#[derive(Debug)]
pub struct MessageStore {
    table: MessageTable,
    current: AtomicCell<Language>,
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageStore {
    #[must_use]
    pub fn new() -> Self {
        let table = MessageTable::builtin();
        debug_assert!(
            table
                .missing_fallbacks(MessageKey::ALL.iter().map(MessageKey::as_str))
                .is_empty(),
            "built-in messages without {FALLBACK_LANGUAGE} text"
        );
        Self::with_table(table)
    }

    #[must_use]
    pub fn with_table(table: MessageTable) -> Self {
        Self {
            table,
            current: AtomicCell::new(Language::default()),
        }
    }

    pub fn set_language(&self, language: Language) {
        self.current.store(language);
    }

    pub fn current_language(&self) -> Language {
        self.current.load()
    }

    /// Localized text for `key` in the current language.
    pub fn get_message(&self, key: &str) -> &'static str {
        self.table.resolve(key, self.current_language())
    }

    pub fn message(&self, key: MessageKey) -> &'static str {
        self.get_message(key.as_str())
    }

    pub fn blocked_message(&self) -> &'static str {
        self.message(MessageKey::Blocked)
    }

    pub fn info_message(&self) -> &'static str {
        self.message(MessageKey::Info)
    }

    pub fn loading_message(&self) -> &'static str {
        self.message(MessageKey::Loading)
    }

    pub fn enabled_message(&self) -> &'static str {
        self.message(MessageKey::Enabled)
    }

    pub fn compatibility_message(&self) -> &'static str {
        self.message(MessageKey::Compatibility)
    }
}
