use crate::core::error::{Error, Result};
use crate::core::logger::ActivityLog;

/// Supported language names and the code the search endpoint expects for each.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("arab", "ar"),
    ("greek", "el"),
    ("german", "de"),
    ("english", "en"),
    ("spanish", "es"),
    ("french", "fr"),
    ("italian", "it"),
    ("korean", "ko"),
    ("russian", "ru"),
    ("chines", "zh"),
];

pub fn supported_languages() -> impl Iterator<Item = &'static str> {
    LANGUAGES.iter().map(|(name, _)| *name)
}

pub fn lookup(name: &str) -> Option<&'static str> {
    let wanted = name.trim().to_lowercase();
    LANGUAGES
        .iter()
        .find(|(language, _)| *language == wanted)
        .map(|(_, code)| *code)
}

pub fn resolve(name: &str, log: &ActivityLog) -> Result<&'static str> {
    if let Some(code) = lookup(name) {
        return Ok(code);
    }

    let mut message = format!("Sorry, but we can't get the language '{}'...", name);
    message.push_str("\nWe currently have support for the following languages:");
    for language in supported_languages() {
        message.push_str("\n   - ");
        message.push_str(language);
    }
    message.push_str("\nIf you think that your language should be supported, open a pull request at ");
    message.push_str(env!("CARGO_PKG_REPOSITORY"));

    Err(log.report(
        &format!("Can't find the language requested: {}", name),
        Error::UnsupportedLanguage(message),
    ))
}
