use phf::phf_map;
use potato_blocker_util::Language::ChineseSimplified;

use super::Translations;

pub(super) static BUILTIN_MESSAGES: phf::Map<&'static str, Translations> = phf_map! {
    "blocked_message" => Translations {
        english: "§cBone meal cannot be used on potato crops!",
        localized: &[(ChineseSimplified, "§c骨粉不能用于土豆作物！")],
    },
    "info_message" => Translations {
        english: "§eYou can still use bone meal on other crops.",
        localized: &[(ChineseSimplified, "§e你仍然可以在其他作物上使用骨粉。")],
    },
    "loading" => Translations {
        english: "Loading Potato Bone Meal Blocker v1.1.0...",
        localized: &[(ChineseSimplified, "正在加载土豆骨粉阻止器 v1.1.0...")],
    },
    "enabled" => Translations {
        english: "Potato Bone Meal Blocker enabled successfully!",
        localized: &[(ChineseSimplified, "土豆骨粉阻止器已成功启用！")],
    },
    "compatibility" => Translations {
        english: "Compatible with LeviLamina 3 v1.2.0",
        localized: &[(ChineseSimplified, "兼容 LeviLamina 3 v1.2.0")],
    },
    "optimization" => Translations {
        english: "Plugin initialized with optimized performance features",
        localized: &[(ChineseSimplified, "插件已初始化，具有优化的性能特性")],
    },
    "listener_registered" => Translations {
        english: "Event listener registered for PlayerInteractBlockEvent",
        localized: &[(ChineseSimplified, "已为 PlayerInteractBlockEvent 注册事件监听器")],
    },
    "blocked_attempt_log" => Translations {
        english: "Prevented {} from using bone meal on potato crop at ({}, {}, {})",
        localized: &[(ChineseSimplified, "阻止了 {} 在位置 ({}, {}, {}) 对土豆作物使用骨粉")],
    },
    "disabled" => Translations {
        english: "Potato Bone Meal Blocker disabled",
        localized: &[(ChineseSimplified, "土豆骨粉阻止器已禁用")],
    },
    "error_generic" => Translations {
        english: "An error occurred while running the plugin",
        localized: &[(ChineseSimplified, "插件运行时发生错误")],
    },
};
