//! Localized prompt templates and assembly.
//!
//! Templates are fixed strings held in a static registry keyed by language
//! code. Assembly is a pure function over the accepted diffs; it never fails.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Language used when the configured or detected one is unsupported.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Token a custom prompt may use to position the diff body.
pub const DIFF_PLACEHOLDER: &str = "{{diff}}";

/// Fixed strings for one supported language.
pub struct PromptTemplate {
    pub header: &'static str,
    pub file_label: &'static str,
    skip_notice: &'static str,
}

impl PromptTemplate {
    /// Skip-notice sentence parameterized by the number of skipped files.
    pub fn skip_notice(&self, count: usize) -> String {
        self.skip_notice.replace("{count}", &count.to_string())
    }
}

static TEMPLATE_REGISTRY: Lazy<HashMap<&'static str, PromptTemplate>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(
        "en",
        PromptTemplate {
            header: "Please review the following code changes and point out potential problems, bugs, and improvements.",
            file_label: "File",
            skip_notice: "Note: {count} file(s) were skipped because they were too large or could not be read.",
        },
    );
    m.insert(
        "ja",
        PromptTemplate {
            header: "以下のコード変更をレビューして、潜在的な問題やバグ、改善点を指摘してください。",
            file_label: "ファイル",
            skip_notice: "注: {count} 件のファイルは、サイズ超過または読み取り不可のためスキップされました。",
        },
    );
    m.insert(
        "zh-cn",
        PromptTemplate {
            header: "请审查以下代码变更，并指出潜在的问题、缺陷和改进建议。",
            file_label: "文件",
            skip_notice: "注意：有 {count} 个文件因过大或无法读取而被跳过。",
        },
    );
    m.insert(
        "ko",
        PromptTemplate {
            header: "다음 코드 변경 사항을 리뷰하고 잠재적인 문제, 버그, 개선점을 지적해 주세요.",
            file_label: "파일",
            skip_notice: "참고: {count}개의 파일이 너무 크거나 읽을 수 없어 건너뛰었습니다.",
        },
    );
    m.insert(
        "fr",
        PromptTemplate {
            header: "Veuillez relire les modifications de code suivantes et signaler les problèmes potentiels, les bogues et les améliorations possibles.",
            file_label: "Fichier",
            skip_notice: "Remarque : {count} fichier(s) ont été ignorés car trop volumineux ou illisibles.",
        },
    );
    m.insert(
        "de",
        PromptTemplate {
            header: "Bitte überprüfen Sie die folgenden Codeänderungen und weisen Sie auf mögliche Probleme, Fehler und Verbesserungen hin.",
            file_label: "Datei",
            skip_notice: "Hinweis: {count} Datei(en) wurden übersprungen, da sie zu groß oder nicht lesbar waren.",
        },
    );
    m.insert(
        "es",
        PromptTemplate {
            header: "Por favor, revisa los siguientes cambios de código y señala posibles problemas, errores y mejoras.",
            file_label: "Archivo",
            skip_notice: "Nota: se omitieron {count} archivo(s) por ser demasiado grandes o ilegibles.",
        },
    );
    m
});

/// Look up a template, falling back to the default language.
pub fn template_for(language: &str) -> &'static PromptTemplate {
    TEMPLATE_REGISTRY
        .get(language)
        .unwrap_or_else(|| &TEMPLATE_REGISTRY[DEFAULT_LANGUAGE])
}

fn canonical(code: &str) -> Option<&'static str> {
    TEMPLATE_REGISTRY.get_key_value(code).map(|(key, _)| *key)
}

/// Resolve the prompt language from the configured setting and the host's
/// UI locale tag.
///
/// An explicit configured code wins when supported. With `auto`, any `zh*`
/// locale maps to Simplified Chinese; otherwise the two-letter prefix of the
/// locale tag is used. Anything unsupported falls back to the default.
pub fn resolve_language(configured: &str, locale_tag: &str) -> &'static str {
    if configured != "auto" {
        return canonical(configured).unwrap_or(DEFAULT_LANGUAGE);
    }

    let tag = locale_tag.to_lowercase();
    if tag.starts_with("zh") {
        return "zh-cn";
    }

    let prefix: String = tag.chars().take(2).collect();
    canonical(&prefix).unwrap_or(DEFAULT_LANGUAGE)
}

/// Assemble the final prompt from the accepted diffs.
///
/// `custom_prompt` replaces the built-in header when non-blank; if it contains
/// [`DIFF_PLACEHOLDER`] the body is substituted there, otherwise the body is
/// appended after a blank line. The skip notice is appended whenever
/// `skipped > 0`, regardless of which prompt source was used.
pub fn assemble(
    diffs: &[(String, String)],
    skipped: usize,
    language: &str,
    custom_prompt: Option<&str>,
) -> String {
    let template = template_for(language);

    let body = diffs
        .iter()
        .map(|(file_name, diff_text)| {
            format!(
                "### {}: {}\n```diff\n{}\n```",
                template.file_label,
                file_name,
                diff_text.trim_end_matches('\n')
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    let mut prompt = match custom_prompt {
        Some(custom) if !custom.trim().is_empty() => {
            if custom.contains(DIFF_PLACEHOLDER) {
                custom.replace(DIFF_PLACEHOLDER, &body)
            } else {
                format!("{custom}\n\n{body}")
            }
        }
        _ => format!("{}\n\n{body}", template.header),
    };

    if skipped > 0 {
        prompt.push_str("\n\n");
        prompt.push_str(&template.skip_notice(skipped));
    }

    prompt
}
