use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum EventTarget {
    Window,
    Node(NodeId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum EventType {
    Click,
    Submit,
    Input,
    Focus,
    Blur,
    KeyDown,
    MouseEnter,
    MouseLeave,
    Scroll,
    Resize,
    Load,
    Error,
}

impl EventType {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Submit => "submit",
            Self::Input => "input",
            Self::Focus => "focus",
            Self::Blur => "blur",
            Self::KeyDown => "keydown",
            Self::MouseEnter => "mouseenter",
            Self::MouseLeave => "mouseleave",
            Self::Scroll => "scroll",
            Self::Resize => "resize",
            Self::Load => "load",
            Self::Error => "error",
        }
    }

    pub(crate) fn bubbles(self) -> bool {
        matches!(
            self,
            Self::Click | Self::Submit | Self::Input | Self::KeyDown
        )
    }
}

/// A key press as seen by `keydown` listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyPress {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ctrl: false,
            meta: false,
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }
}

#[derive(Debug, Clone)]
pub(crate) struct EventState {
    pub(crate) event_type: EventType,
    pub(crate) target: EventTarget,
    pub(crate) current_target: EventTarget,
    /// `clientX`/`clientY` of mouse events.
    pub(crate) pointer: Option<(f64, f64)>,
    pub(crate) key: Option<KeyPress>,
    pub(crate) message: Option<String>,
    pub(crate) default_prevented: bool,
    pub(crate) propagation_stopped: bool,
    pub(crate) bubbles: bool,
}

impl EventState {
    pub(crate) fn new(event_type: EventType, target: EventTarget) -> Self {
        Self {
            event_type,
            target,
            current_target: target,
            pointer: None,
            key: None,
            message: None,
            default_prevented: false,
            propagation_stopped: false,
            bubbles: event_type.bubbles(),
        }
    }

    pub(crate) fn with_pointer(mut self, x: f64, y: f64) -> Self {
        self.pointer = Some((x, y));
        self
    }

    pub(crate) fn with_key(mut self, key: KeyPress) -> Self {
        self.key = Some(key);
        self
    }

    pub(crate) fn with_message(mut self, message: String) -> Self {
        self.message = Some(message);
        self
    }

    pub(crate) fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub(crate) fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub(crate) fn key_is(&self, key: &str) -> bool {
        self.key.as_ref().is_some_and(|press| press.key == key)
    }

    pub(crate) fn current_node(&self) -> Result<NodeId> {
        match self.current_target {
            EventTarget::Node(node) => Ok(node),
            EventTarget::Window => Err(Error::Dom(format!(
                "{} listener expected an element target",
                self.event_type.as_str()
            ))),
        }
    }
}

/// Listener bodies. Each variant names one page behavior; data captured at
/// registration time travels with the variant.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Handler {
    ThemeToggle,
    NavToggle,
    NavLink,
    NavScroll,
    SmoothScroll,
    BackToTop,
    BookingTab,
    BookingSubmit,
    ContactSubmit,
    NewsletterSubmit,
    RevealScroll,
    Ripple,
    PackageView { card: NodeId },
    SocialEnter,
    SocialLeave,
    Shortcuts,
    InputFocus,
    InputBlur,
    CharCounter { counter: NodeId, max_length: String },
    TestimonialDot { index: usize },
    TestimonialPrev,
    TestimonialNext,
    SliderEnter,
    SliderLeave,
    CarouselResize,
    FaqQuestion { item: NodeId },
    FaqKey,
    PageLoad,
    Parallax,
    ErrorLog,
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ListenerStore {
    map: HashMap<(EventTarget, EventType), Vec<Handler>>,
}

impl ListenerStore {
    pub(crate) fn add(&mut self, target: EventTarget, event_type: EventType, handler: Handler) {
        let listeners = self.map.entry((target, event_type)).or_default();
        // the same listener is only registered once per target and type
        if listeners.contains(&handler) {
            return;
        }
        listeners.push(handler);
    }

    pub(crate) fn get(&self, target: EventTarget, event_type: EventType) -> Vec<Handler> {
        self.map
            .get(&(target, event_type))
            .cloned()
            .unwrap_or_default()
    }
}
