//! Prompt derivation for chat completion requests
//!
//! Instruction selection is a cascade over the language pair. The generic
//! template names both languages in English; targets in the Chinese family
//! get Chinese-language instructions; an identical source and target pair
//! turns the request into style polishing instead of translation. Later
//! rules override earlier ones.

use crate::data::TranslateQuery;
use crate::lang::display_name;

/// Base instruction for translation requests
pub const TRANSLATION_SYSTEM_PROMPT: &str =
    "You are a translation engine that can only translate text and cannot interpret it.";

/// Instruction used when source and target languages coincide
pub const EMBELLISH_SYSTEM_PROMPT: &str =
    "You are a text embellisher, you can only embellish the text, don't interpret it.";

/// System and user instruction pair derived for one query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

/// Derive the instruction pair for a query.
///
/// The returned user instruction always ends with the literal query text
/// after a `:` and a blank line.
///
/// # Example
///
/// ```ignore
/// let query = TranslateQuery::new("hello", "en", "fr");
/// let prompts = generate_prompts(&query);
/// assert_eq!(prompts.user, "translate from English to French:\n\nhello");
/// ```
pub fn generate_prompts(query: &TranslateQuery) -> PromptPair {
    let from = query.source_language.as_str();
    let to = query.target_language.as_str();
    let target_name = display_name(to);

    let mut system = TRANSLATION_SYSTEM_PROMPT;
    let mut user = format!(
        "translate from {} to {}",
        display_name(from),
        target_name
    );

    // Classical Chinese and Cantonese targets take a Chinese instruction
    // naming the target variant
    if to == "wyw" || to == "yue" {
        user = format!("翻译成{}", target_name);
    }

    // Conversions within the Chinese family ask for vernacular output
    if matches!(from, "wyw" | "zh-Hans" | "zh-Hant") {
        match to {
            "zh-Hant" => user = "翻译成繁体白话文".to_string(),
            "zh-Hans" => user = "翻译成简体白话文".to_string(),
            "yue" => user = "翻译成粤语白话文".to_string(),
            _ => {}
        }
    }

    // Identical source and target turns the request into style polishing
    if from == to {
        system = EMBELLISH_SYSTEM_PROMPT;
        user = if to == "zh-Hant" || to == "zh-Hans" {
            "润色此句".to_string()
        } else {
            "polish this sentence".to_string()
        };
    }

    PromptPair {
        system: system.to_string(),
        user: format!("{}:\n\n{}", user, query.text),
    }
}

/// Substitute query values into a host supplied template.
///
/// Only the first occurrence of each of `$text`, `$sourceLang` and
/// `$targetLang` is replaced, in that order.
pub fn replace_prompt_keywords(template: &str, query: &TranslateQuery) -> String {
    template
        .replacen("$text", &query.text, 1)
        .replacen("$sourceLang", &query.source_language, 1)
        .replacen("$targetLang", &query.target_language, 1)
}
