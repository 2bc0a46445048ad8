//! Host UI language detection for the CLI harness.
//!
//! An editor host passes its own UI language tag; on a plain terminal the
//! POSIX locale environment is the closest equivalent.

/// Active UI language tag, e.g. `ja`, `en-us`, `zh-cn`.
pub fn ui_language_tag() -> String {
    for key in ["LC_ALL", "LC_MESSAGES", "LANG"] {
        if let Ok(value) = std::env::var(key)
            && !value.is_empty()
            && value != "C"
            && value != "POSIX"
        {
            return normalize(&value);
        }
    }
    "en".to_string()
}

// `ja_JP.UTF-8` -> `ja-jp`
fn normalize(raw: &str) -> String {
    let tag = raw.split('.').next().unwrap_or(raw);
    tag.replace('_', "-").to_lowercase()
}
