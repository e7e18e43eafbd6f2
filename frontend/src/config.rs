use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Everything the landing page needs at startup, built once in `main` and
/// handed down to the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LandingConfig {
    pub i18n: I18nConfig,
    pub effects: EffectsConfig,
}

#[derive(Clone, Debug, PartialEq)]
pub struct I18nConfig {
    /// Reference locale, also the language the markup is written in.
    pub default_locale: &'static str,
    pub rtl_locales: &'static [&'static str],
    /// Property name of the namespace installed on `window`.
    pub namespace: &'static str,
    /// Class given to pictograph marker spans.
    pub emoji_class: &'static str,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: "en",
            rtl_locales: &["ar", "he", "fa", "ur"],
            namespace: "SnapBoostI18n",
            emoji_class: "emoji",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EffectsConfig {
    pub counter_duration_ms: u32,
    pub counter_step_ms: u32,
    /// Scroll offset in pixels past which the header gets the `scrolled` class.
    pub header_scrolled_threshold: f64,
    /// Scroll offset in pixels below which the header never hides.
    pub header_hide_threshold: f64,
    pub particle_count: usize,
    pub ripple_lifetime_ms: u32,
    pub tilt_max_degrees: f64,
    pub reveal_class: &'static str,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            counter_duration_ms: 2000,
            counter_step_ms: 16,
            header_scrolled_threshold: 50.0,
            header_hide_threshold: 100.0,
            particle_count: 30,
            ripple_lifetime_ms: 600,
            tilt_max_degrees: 10.0,
            reveal_class: "visible",
        }
    }
}
