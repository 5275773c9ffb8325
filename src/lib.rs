//! Deterministic runtime for the interactive behaviors of a travel agency
//! landing page.
//!
//! A [`Page`] parses the site's HTML into an in-memory DOM, wires every page
//! behavior (theme, navigation, booking forms, carousel, accordion, toasts,
//! counters and the decorative effects) as typed listeners, and drives them on
//! a virtual clock. Hosts and tests interact with it through user actions such
//! as [`Page::click`], [`Page::scroll_to`] and [`Page::advance_time`].

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

mod behaviors;
mod config;
mod dom;
mod events;
mod html;
mod page;
mod platform;
mod scheduler;
mod selector;

pub use behaviors::notification::ToastKind;
pub use behaviors::theme::Theme;
pub use config::{
    AnimationConfig, CarouselConfig, EffectsConfig, FormConfig, LoaderConfig, NavigationConfig,
    NotificationConfig, PageOptions, SiteConfig,
};
pub use dom::LayoutBox;
pub use events::KeyPress;
pub use page::Page;
pub use platform::{LocalStorage, Viewport};
pub use scheduler::PendingTimer;

use behaviors::*;
use dom::*;
use events::*;
use html::*;
use platform::*;
use scheduler::*;
use selector::*;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("html parse error: {0}")]
    HtmlParse(String),
    #[error("unsupported selector: {0}")]
    UnsupportedSelector(String),
    #[error("selector not found: {0}")]
    SelectorNotFound(String),
    #[error("dom error: {0}")]
    Dom(String),
    #[error("type mismatch for {selector}: expected {expected}, actual {actual}")]
    TypeMismatch {
        selector: String,
        expected: String,
        actual: String,
    },
    #[error(
        "assertion failed for {selector}: expected {expected}, actual {actual}, snippet {dom_snippet}"
    )]
    AssertionFailed {
        selector: String,
        expected: String,
        actual: String,
        dom_snippet: String,
    },
    #[error("timer error: {0}")]
    Timer(String),
    #[error("configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests;
