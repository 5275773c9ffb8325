use super::*;

pub(crate) const THEME_STORAGE_KEY: &str = "theme";
pub(crate) const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Color theme applied through `data-theme` on the document element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Anything other than `dark` reads as the light theme.
    pub fn parse(value: &str) -> Self {
        if value == "dark" { Self::Dark } else { Self::Light }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    fn icon_class(self) -> &'static str {
        match self {
            Self::Dark => "fas fa-sun",
            Self::Light => "fas fa-moon",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Page {
    /// Theme currently set on the document element.
    pub fn theme(&self) -> Theme {
        self.dom
            .document_element()
            .and_then(|root| self.dom.attr(root, "data-theme"))
            .map(|value| Theme::parse(&value))
            .unwrap_or_default()
    }

    /// The stored value is applied verbatim; an empty store means light.
    pub(crate) fn apply_initial_theme(&mut self) -> Result<()> {
        let stored = self
            .storage
            .get(THEME_STORAGE_KEY)
            .filter(|value| !value.is_empty())
            .unwrap_or(Theme::Light.as_str())
            .to_string();
        self.set_theme_attr(&stored)
    }

    fn set_theme_attr(&mut self, value: &str) -> Result<()> {
        let Some(root) = self.dom.document_element() else {
            return Ok(());
        };
        self.dom.set_attr(root, "data-theme", value)
    }

    pub(crate) fn sync_theme_icon(&mut self) -> Result<()> {
        let Some(toggle) = self.dom.by_id("themeToggle") else {
            return Ok(());
        };
        let Some(icon) = self.dom.query_selector_from(toggle, "i")? else {
            return Ok(());
        };
        let theme = self.theme();
        self.dom.set_class_name(icon, theme.icon_class())
    }

    pub(crate) fn init_theme_toggle(&mut self) {
        if let Some(toggle) = self.dom.by_id("themeToggle") {
            self.on(toggle, EventType::Click, Handler::ThemeToggle);
        }
    }

    pub(crate) fn on_theme_toggle(&mut self, event: &EventState) -> Result<()> {
        let toggle = event.current_node()?;
        self.flip_theme()?;
        self.create_ripple(toggle, event.pointer)
    }

    /// Flips the theme as a click on `#themeToggle` would, without the ripple.
    pub fn toggle_theme(&mut self) -> Result<Theme> {
        self.flip_theme()
    }

    fn flip_theme(&mut self) -> Result<Theme> {
        let next = self.theme().toggled();
        self.set_theme_attr(next.as_str())?;
        if let Err(err) = self.storage.set(THEME_STORAGE_KEY, next.as_str()) {
            tracing::warn!(error = %err, "theme preference not persisted");
        }
        self.sync_theme_icon()?;
        tracing::debug!(theme = %next, "theme toggled");
        Ok(next)
    }

    /// Follows the system dark preference when the visitor never chose.
    pub(crate) fn apply_dark_preference(&mut self) -> Result<()> {
        if !self.media.evaluate(DARK_SCHEME_QUERY) {
            return Ok(());
        }
        if self.storage.get(THEME_STORAGE_KEY).is_some_and(|v| !v.is_empty()) {
            return Ok(());
        }
        self.set_theme_attr(Theme::Dark.as_str())?;
        self.sync_theme_icon()
    }
}
