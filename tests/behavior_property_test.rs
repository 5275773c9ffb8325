use proptest::collection::vec;
use proptest::prelude::*;
use proptest::test_runner::{FileFailurePersistence, TestCaseError, TestCaseResult};
use travel_page::{LayoutBox, Page, PageOptions, Theme};

const BEHAVIOR_PROPTEST_REGRESSION_FILE: &str =
    "tests/proptest-regressions/behavior_property_test.txt";
const DEFAULT_BEHAVIOR_PROPTEST_CASES: u32 = 64;

fn behavior_proptest_cases() -> u32 {
    std::env::var("TRAVEL_PAGE_PROPTEST_CASES")
        .ok()
        .and_then(|raw| raw.parse::<u32>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_BEHAVIOR_PROPTEST_CASES)
}

fn fail(err: travel_page::Error) -> TestCaseError {
    TestCaseError::fail(format!("{err:?}"))
}

const SECTIONS_HTML: &str = r##"
<nav>
  <a href="#home" class="nav-link active">Home</a>
  <a href="#booking" class="nav-link">Book</a>
  <a href="#packages" class="nav-link">Packages</a>
  <a href="#contact" class="nav-link">Contact</a>
</nav>
<section id="home"></section>
<section id="booking"></section>
<section id="gallery"></section>
<section id="packages"></section>
<section id="contact"></section>
"##;

const FORM_HTML: &str = r#"
<form id="contactForm">
  <input id="first" required>
  <input id="second" required>
  <textarea id="third" required></textarea>
  <input id="optional">
</form>
"#;

const FAQ_HTML: &str = r#"
<div class="faq-item" id="f0"><div class="faq-question" id="q0">A?</div></div>
<div class="faq-item" id="f1"><div class="faq-question" id="q1">B?</div></div>
<div class="faq-item" id="f2"><div class="faq-question" id="q2">C?</div></div>
"#;

fn carousel_html(cards: usize) -> String {
    let cards = (0..cards)
        .map(|i| format!("<div class=\"testimonial-card\">card {i}</div>"))
        .collect::<String>();
    format!(
        r#"
        <div class="testimonials-slider"><div id="testimonialsTrack">{cards}</div></div>
        <button id="testimonialPrev">Prev</button>
        <button id="testimonialNext">Next</button>
        <div id="testimonialsDots"></div>
        "#
    )
}

#[derive(Debug, Clone)]
enum CarouselOp {
    Next,
    Prev,
    GoTo(i64),
}

fn carousel_op_strategy() -> BoxedStrategy<CarouselOp> {
    prop_oneof![
        3 => Just(CarouselOp::Next),
        3 => Just(CarouselOp::Prev),
        2 => (-6i64..12).prop_map(CarouselOp::GoTo),
    ]
    .boxed()
}

fn field_value_strategy() -> BoxedStrategy<String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        Just("\t".to_string()),
        "[a-z]{1,6}".prop_map(|s| s),
        " [a-z]{1,4} ".prop_map(|s| s),
    ]
    .boxed()
}

fn model_wrap(index: i64, count: i64) -> i64 {
    if index < 0 {
        count - 1
    } else if index >= count {
        0
    } else {
        index
    }
}

fn assert_theme_round_trip(toggles: usize) -> TestCaseResult {
    let mut page = Page::from_html(r#"<button id="themeToggle"><i></i></button>"#).map_err(fail)?;
    for _ in 0..toggles {
        page.click("#themeToggle").map_err(fail)?;
    }
    let expected = if toggles % 2 == 1 { Theme::Dark } else { Theme::Light };
    prop_assert_eq!(page.theme(), expected);
    if toggles > 0 {
        prop_assert_eq!(page.local_storage().get("theme"), Some(expected.as_str()));
    } else {
        prop_assert_eq!(page.local_storage().get("theme"), None);
    }
    let icon = page.attr("#themeToggle i", "class").map_err(fail)?;
    let expected_icon = if expected == Theme::Dark { "fas fa-sun" } else { "fas fa-moon" };
    prop_assert_eq!(icon.as_deref(), Some(expected_icon));
    Ok(())
}

fn assert_carousel_arithmetic(cards: usize, ops: &[CarouselOp]) -> TestCaseResult {
    let options = PageOptions::new()
        .with_layout(".testimonials-slider", LayoutBox::new(0.0, 0.0, 800.0, 300.0));
    let mut page = Page::from_html_with_options(&carousel_html(cards), options).map_err(fail)?;
    let count = i64::try_from(cards).map_err(|err| TestCaseError::fail(err.to_string()))?;
    let mut model = 0i64;

    for op in ops {
        match op {
            CarouselOp::Next => {
                page.click("#testimonialNext").map_err(fail)?;
                model = model_wrap(model + 1, count);
            }
            CarouselOp::Prev => {
                page.click("#testimonialPrev").map_err(fail)?;
                model = model_wrap(model - 1, count);
            }
            CarouselOp::GoTo(index) => {
                page.go_to_testimonial(*index).map_err(fail)?;
                model = model_wrap(*index, count);
            }
        }
        prop_assert_eq!(i64::try_from(page.testimonial_index()).unwrap_or(-1), model);
        prop_assert_eq!(page.count(".testimonial-dot.active").map_err(fail)?, 1);
        let transform = page.style("#testimonialsTrack", "transform").map_err(fail)?;
        prop_assert_eq!(transform, format!("translateX(-{}px)", model * 832));
    }
    Ok(())
}

/// Section id, top, height and whether a nav link points at it, in document
/// order. `#gallery` overlaps `#booking` and `#contact` overlaps `#packages`.
const SECTION_LAYOUT: [(&str, f64, f64, bool); 5] = [
    ("home", 0.0, 700.0, true),
    ("booking", 700.0, 650.0, true),
    ("gallery", 1000.0, 300.0, false),
    ("packages", 1650.0, 900.0, true),
    ("contact", 2400.0, 500.0, true),
];

/// Last section containing the offset wins; a linkless match clears every
/// link and no match leaves the previous state.
fn model_active_link(scroll_y: f64, current: Option<String>) -> Option<String> {
    SECTION_LAYOUT
        .iter()
        .filter(|(_, top, height, _)| scroll_y >= top - 100.0 && scroll_y < top - 100.0 + height)
        .last()
        .map_or(current, |(id, _, _, linked)| linked.then(|| format!("#{id}")))
}

fn assert_active_link_matches_model(positions: &[f64]) -> TestCaseResult {
    let options = SECTION_LAYOUT
        .iter()
        .fold(PageOptions::new(), |options, (id, top, height, _)| {
            options.with_layout(&format!("#{id}"), LayoutBox::block(*top, *height))
        });
    let mut page = Page::from_html_with_options(SECTIONS_HTML, options).map_err(fail)?;
    let mut model = Some("#home".to_string());
    for position in positions {
        page.scroll_to(*position).map_err(fail)?;
        model = model_active_link(*position, model);
        let active = page.count(".nav-link.active").map_err(fail)?;
        prop_assert!(active <= 1, "{} links active at scrollY={}", active, position);
        prop_assert_eq!(page.active_nav_link(), model.clone(), "scrollY={}", position);
    }
    Ok(())
}

fn assert_validation_matches_blankness(values: &[String]) -> TestCaseResult {
    let mut page = Page::from_html(FORM_HTML).map_err(fail)?;
    for (selector, value) in ["#first", "#second", "#third"].iter().zip(values) {
        page.type_text(selector, value).map_err(fail)?;
    }
    let expected = values.iter().all(|value| !value.trim().is_empty());
    prop_assert_eq!(page.validate_form("#contactForm").map_err(fail)?, expected);
    for (selector, value) in ["#first", "#second", "#third"].iter().zip(values) {
        let color = page.style(selector, "border-color").map_err(fail)?;
        let expected_color = if value.trim().is_empty() { "#ef4444" } else { "#10b981" };
        prop_assert_eq!(color, expected_color);
    }
    prop_assert_eq!(page.style("#optional", "border-color").map_err(fail)?, "");
    Ok(())
}

fn assert_faq_exclusive(clicks: &[usize]) -> TestCaseResult {
    let mut page = Page::from_html(FAQ_HTML).map_err(fail)?;
    let mut open: Option<usize> = None;
    for index in clicks {
        page.click(&format!("#q{index}")).map_err(fail)?;
        open = if open == Some(*index) { None } else { Some(*index) };
        prop_assert_eq!(page.open_faq_count(), usize::from(open.is_some()));
        if let Some(item) = open {
            let selector = format!("#f{item}");
            let is_open = page.has_class(&selector, "active").map_err(fail)?;
            prop_assert!(is_open, "{} should be open", selector);
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: behavior_proptest_cases(),
        failure_persistence: Some(Box::new(
            FileFailurePersistence::Direct(BEHAVIOR_PROPTEST_REGRESSION_FILE),
        )),
        .. ProptestConfig::default()
    })]

    #[test]
    fn theme_toggles_round_trip(toggles in 0usize..7) {
        assert_theme_round_trip(toggles)?;
    }

    #[test]
    fn carousel_index_stays_in_range_and_wraps(
        cards in 1usize..=6,
        ops in vec(carousel_op_strategy(), 1..=20),
    ) {
        assert_carousel_arithmetic(cards, &ops)?;
    }

    #[test]
    fn active_nav_link_is_the_last_containing_section(
        positions in vec(0.0f64..3_500.0, 1..=16),
    ) {
        assert_active_link_matches_model(&positions)?;
    }

    #[test]
    fn validation_succeeds_iff_required_fields_are_filled(
        values in vec(field_value_strategy(), 3),
    ) {
        assert_validation_matches_blankness(&values)?;
    }

    #[test]
    fn faq_keeps_at_most_one_item_open(clicks in vec(0usize..3, 1..=12)) {
        assert_faq_exclusive(&clicks)?;
    }
}
