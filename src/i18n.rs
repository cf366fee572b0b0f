// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持日语（默认）、英文、中文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 支持的语言
pub const SUPPORTED_LOCALES: [&str; 3] = ["ja", "en", "zh-CN"];

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// 不支持的语言代码回退为日语。
pub fn set_locale(locale: &str) {
    if SUPPORTED_LOCALES.contains(&locale) {
        rust_i18n::set_locale(locale);
    } else {
        tracing::warn!(locale, "不支持的语言，使用 ja");
        rust_i18n::set_locale("ja");
    }
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use zoo_db::i18n::t;
/// let msg = t("error.cage_master");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

// rust-i18n 的 locale 为全局状态，且 Rust 测试默认并行执行；
// 依赖 locale 的测试需持有此锁。
#[cfg(test)]
pub(crate) static LOCALE_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("en");
        assert_eq!(current_locale(), "en");

        set_locale("ja");
        assert_eq!(current_locale(), "ja");
    }

    #[test]
    fn test_unsupported_locale_falls_back_to_ja() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("fr");
        assert_eq!(current_locale(), "ja");
    }

    #[test]
    fn test_translate_simple() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("ja");
        assert_eq!(t("error.cage_master"), "檻マスタデータ取得に失敗しました。");

        set_locale("zh-CN");
        assert_eq!(t("report.empty"), "当前没有饲养中的动物。");

        set_locale("en");
        assert_eq!(t("report.empty"), "No animals are currently kept.");

        set_locale("ja");
    }
}
