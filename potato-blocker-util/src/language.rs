use std::fmt;

use serde::{Deserialize, Serialize};

/// Locales the plugin ships messages for.
///
/// Simplified Chinese is the default since the plugin targets Chinese servers,
/// English is the fallback every message must provide.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "zh_CN", alias = "zh-CN", alias = "zh_cn", alias = "zh-cn")]
    ChineseSimplified,
    #[serde(rename = "en_US", alias = "en-US", alias = "en_us", alias = "en-us")]
    English,
}

impl Language {
    pub const ALL: [Language; 2] = [Self::ChineseSimplified, Self::English];

    pub const fn code(&self) -> &'static str {
        match self {
            Self::ChineseSimplified => "zh_CN",
            Self::English => "en_US",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::ChineseSimplified => "简体中文",
            Self::English => "English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
