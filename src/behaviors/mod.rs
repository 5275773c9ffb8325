//! Page behaviors, one file per feature, each an `impl Page` block.

use super::*;

pub(crate) mod animation;
pub(crate) mod booking;
pub(crate) mod effects;
pub(crate) mod enhancements;
pub(crate) mod faq;
pub(crate) mod loader;
pub(crate) mod navigation;
pub(crate) mod notification;
pub(crate) mod testimonials;
pub(crate) mod theme;

pub(crate) use testimonials::TestimonialCarousel;

/// Per-behavior state captured when the document becomes ready.
#[derive(Debug, Default)]
pub(crate) struct Controllers {
    pub(crate) navigation: NavigationController,
    pub(crate) booking: BookingController,
    /// Cards that fade in once scrolled into view.
    pub(crate) reveal: Vec<NodeId>,
    pub(crate) testimonials: TestimonialCarousel,
    pub(crate) faq_items: Vec<NodeId>,
}

#[derive(Debug, Default)]
pub(crate) struct NavigationController {
    pub(crate) toggle: Option<NodeId>,
    pub(crate) menu: Option<NodeId>,
    pub(crate) navbar: Option<NodeId>,
    pub(crate) back_to_top: Option<NodeId>,
    pub(crate) links: Vec<NodeId>,
}

#[derive(Debug, Default)]
pub(crate) struct BookingController {
    pub(crate) tabs: Vec<NodeId>,
    pub(crate) forms: Vec<NodeId>,
}
