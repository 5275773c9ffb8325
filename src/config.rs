use super::*;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Every threshold, delay and ratio the page behaviors use.
///
/// Each table and field is optional in TOML; missing values fall back to the
/// site's shipped defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub navigation: NavigationConfig,
    pub forms: FormConfig,
    pub animation: AnimationConfig,
    pub notifications: NotificationConfig,
    pub carousel: CarouselConfig,
    pub effects: EffectsConfig,
    pub loader: LoaderConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// `#navbar` gains `scrolled` past this scroll offset.
    pub scrolled_offset: f64,
    /// `#backToTop` gains `visible` past this scroll offset.
    pub back_to_top_offset: f64,
    pub section_lookahead: f64,
    /// Space left above an anchor target after an in-page jump.
    pub anchor_offset: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scrolled_offset: 100.0,
            back_to_top_offset: 500.0,
            section_lookahead: 100.0,
            anchor_offset: 80.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub validation_reset_ms: i64,
    pub booking_result_delay_ms: i64,
    pub booking_focus_delay_ms: i64,
    /// Character counters turn red above this share of `maxlength`.
    pub char_warn_ratio: f64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            validation_reset_ms: 3000,
            booking_result_delay_ms: 2000,
            booking_focus_delay_ms: 500,
            char_warn_ratio: 0.9,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub counter_duration_ms: i64,
    pub frame_interval_ms: i64,
    pub counter_threshold: f64,
    /// Cards reveal once their top edge is above this share of the viewport.
    pub reveal_fraction: f64,
    pub parallax_rate: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            counter_duration_ms: 2000,
            frame_interval_ms: 16,
            counter_threshold: 0.5,
            reveal_fraction: 0.8,
            parallax_rate: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub visible_ms: i64,
    pub exit_ms: i64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            visible_ms: 3000,
            exit_ms: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub wide_gap: f64,
    pub narrow_gap: f64,
    /// Viewports wider than this use `wide_gap`.
    pub wide_breakpoint: f64,
    pub autoplay_ms: i64,
    pub resize_debounce_ms: i64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            wide_gap: 32.0,
            narrow_gap: 16.0,
            wide_breakpoint: 968.0,
            autoplay_ms: 5000,
            resize_debounce_ms: 250,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub ripple_ms: i64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self { ripple_ms: 600 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub hide_ms: i64,
    pub detach_ms: i64,
    pub hero_stagger_ms: i64,
    pub hero_settle_ms: i64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            hide_ms: 1500,
            detach_ms: 500,
            hero_stagger_ms: 200,
            hero_settle_ms: 100,
        }
    }
}

impl SiteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|err| {
            Error::Config(format!("cannot read {}: {err}", path.as_ref().display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|err| Error::Config(format!("TOML parsing error: {err}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let durations = [
            ("forms.validation_reset_ms", self.forms.validation_reset_ms),
            ("forms.booking_result_delay_ms", self.forms.booking_result_delay_ms),
            ("forms.booking_focus_delay_ms", self.forms.booking_focus_delay_ms),
            ("animation.counter_duration_ms", self.animation.counter_duration_ms),
            ("animation.frame_interval_ms", self.animation.frame_interval_ms),
            ("notifications.visible_ms", self.notifications.visible_ms),
            ("notifications.exit_ms", self.notifications.exit_ms),
            ("carousel.autoplay_ms", self.carousel.autoplay_ms),
            ("carousel.resize_debounce_ms", self.carousel.resize_debounce_ms),
            ("effects.ripple_ms", self.effects.ripple_ms),
            ("loader.hide_ms", self.loader.hide_ms),
            ("loader.detach_ms", self.loader.detach_ms),
            ("loader.hero_stagger_ms", self.loader.hero_stagger_ms),
            ("loader.hero_settle_ms", self.loader.hero_settle_ms),
        ];
        for (field, value) in durations {
            if value <= 0 {
                return Err(Error::Config(format!(
                    "{field} must be a positive number of milliseconds, got {value}"
                )));
            }
        }

        let ratios = [
            ("forms.char_warn_ratio", self.forms.char_warn_ratio),
            ("animation.counter_threshold", self.animation.counter_threshold),
            ("animation.reveal_fraction", self.animation.reveal_fraction),
        ];
        for (field, value) in ratios {
            if !(value > 0.0 && value <= 1.0) {
                return Err(Error::Config(format!(
                    "{field} must be within (0, 1], got {value}"
                )));
            }
        }

        let lengths = [
            ("navigation.scrolled_offset", self.navigation.scrolled_offset),
            ("navigation.back_to_top_offset", self.navigation.back_to_top_offset),
            ("navigation.section_lookahead", self.navigation.section_lookahead),
            ("navigation.anchor_offset", self.navigation.anchor_offset),
            ("carousel.wide_gap", self.carousel.wide_gap),
            ("carousel.narrow_gap", self.carousel.narrow_gap),
            ("carousel.wide_breakpoint", self.carousel.wide_breakpoint),
        ];
        for (field, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::Config(format!(
                    "{field} must be a non-negative length, got {value}"
                )));
            }
        }

        if !self.animation.parallax_rate.is_finite() {
            return Err(Error::Config("animation.parallax_rate must be finite".into()));
        }
        Ok(())
    }
}

/// Everything a [`Page`] needs besides its HTML.
#[derive(Debug, Clone)]
pub struct PageOptions {
    pub config: SiteConfig,
    pub viewport: Viewport,
    pub local_storage: LocalStorage,
    pub match_media: HashMap<String, bool>,
    pub default_match_media: bool,
    /// Layout boxes applied to every element matching the selector, in order.
    pub layout: Vec<(String, LayoutBox)>,
    /// Day used for `min` on date inputs.
    pub today: NaiveDate,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            config: SiteConfig::default(),
            viewport: Viewport::default(),
            local_storage: LocalStorage::default(),
            match_media: HashMap::new(),
            default_match_media: false,
            layout: Vec::new(),
            today: chrono::Utc::now().date_naive(),
        }
    }
}

impl PageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SiteConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_viewport(mut self, width: f64, height: f64) -> Self {
        self.viewport = Viewport::new(width, height);
        self
    }

    pub fn with_local_storage(mut self, storage: LocalStorage) -> Self {
        self.local_storage = storage;
        self
    }

    pub fn with_stored(mut self, key: &str, value: &str) -> Self {
        // a read-only store keeps its seed as-is
        let _ = self.local_storage.set(key, value);
        self
    }

    pub fn with_match_media(mut self, query: &str, matches: bool) -> Self {
        self.match_media.insert(query.to_string(), matches);
        self
    }

    pub fn with_default_match_media(mut self, matches: bool) -> Self {
        self.default_match_media = matches;
        self
    }

    pub fn with_layout(mut self, selector: &str, layout: LayoutBox) -> Self {
        self.layout.push((selector.to_string(), layout));
        self
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }
}
