//! UI language selection for menu captions, tooltips and notices.

/// Languages the tray can display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    /// English captions.
    #[default]
    English,
    /// Spanish captions.
    Spanish,
}

impl Language {
    /// Choose between the English and Spanish form of a string.
    pub fn pick<'a>(self, english: &'a str, spanish: &'a str) -> &'a str {
        match self {
            Language::English => english,
            Language::Spanish => spanish,
        }
    }

    /// Short code written to config.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
        }
    }

    /// Parse a config value: `en`/`english` or `es`/`spanish`/`español`,
    /// ignoring case. Anything else is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_lowercase();
        match value.as_str() {
            "en" | "english" => Some(Language::English),
            "es" | "spanish" | "español" | "espanol" => Some(Language::Spanish),
            _ => None,
        }
    }

    /// Map an OS UI language (ISO 639-1 code, optionally with a region such
    /// as `es-MX` or `es_ES.UTF-8`) to a supported language.
    pub fn from_iso_code(code: &str) -> Self {
        let primary = code
            .trim()
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default();
        if primary.eq_ignore_ascii_case("es") {
            Language::Spanish
        } else {
            Language::English
        }
    }

    /// Application title shown when no plan is active.
    pub fn app_title(self) -> &'static str {
        self.pick("Switch Power Plan", "Cambiar plan de energía")
    }
}
