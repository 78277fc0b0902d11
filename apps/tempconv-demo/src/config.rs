//! Launch settings read from the environment.

#![deny(missing_docs)]

const DEFAULT_TITLE: &str = "Temperature Converter";
const DEFAULT_WIDTH: u32 = 480;
const DEFAULT_HEIGHT: u32 = 720;

/// Window settings handed to the launcher.
///
/// | variable                 | default                   |
/// |--------------------------|---------------------------|
/// | `TEMPCONV_TITLE`         | `Temperature Converter`   |
/// | `TEMPCONV_WINDOW_WIDTH`  | `480`                     |
/// | `TEMPCONV_WINDOW_HEIGHT` | `720`                     |
/// | `TEMPCONV_HEADLESS`      | `false`                   |
///
/// Values that do not parse fall back to the default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoConfig {
    /// Window title.
    pub title: String,
    /// Initial window width in pixels.
    pub width: u32,
    /// Initial window height in pixels.
    pub height: u32,
    /// Run without opening a window.
    pub headless: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            headless: false,
        }
    }
}

impl DemoConfig {
    /// Reads the settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let config = Self {
            title: lookup("TEMPCONV_TITLE")
                .filter(|title| !title.trim().is_empty())
                .unwrap_or(defaults.title),
            width: parse_dimension(lookup("TEMPCONV_WINDOW_WIDTH"), defaults.width),
            height: parse_dimension(lookup("TEMPCONV_WINDOW_HEIGHT"), defaults.height),
            headless: parse_flag(lookup("TEMPCONV_HEADLESS"), defaults.headless),
        };
        log::debug!("demo config: {:?}", config);
        config
    }
}

fn parse_dimension(value: Option<String>, default: u32) -> u32 {
    value
        .and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|&value| value > 0)
        .unwrap_or(default)
}

fn parse_flag(value: Option<String>, default: bool) -> bool {
    value
        .map(|value| match value.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        })
        .unwrap_or(default)
}
