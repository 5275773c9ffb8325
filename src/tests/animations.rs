use super::*;

#[test]
fn counter_waits_for_half_visibility() -> Result<()> {
    let mut page = landing_page()?;
    page.assert_text("#statTravelers", "0")?;

    page.scroll_to(119.0)?;
    page.assert_class("#statTravelers", "animated", false)?;

    page.scroll_to(120.0)?;
    page.assert_class("#statTravelers", "animated", true)?;
    page.assert_text("#statTravelers", "2")?;
    Ok(())
}

#[test]
fn counter_counts_up_per_frame_and_lands_on_target() -> Result<()> {
    let mut page = landing_page()?;
    page.scroll_to(200.0)?;
    page.assert_text("#statTravelers", "2")?;

    page.advance_time(16)?;
    page.assert_text("#statTravelers", "4")?;
    page.advance_time(160)?;
    page.assert_text("#statTravelers", "24")?;

    page.advance_time(2_000)?;
    page.assert_text("#statTravelers", "250")?;
    assert!(page.pending_timers().iter().all(|t| t.kind != "counter-frame"));
    Ok(())
}

#[test]
fn counter_animates_only_once() -> Result<()> {
    let mut page = landing_page()?;
    page.scroll_to(200.0)?;
    page.advance_time(2_100)?;
    page.assert_text("#statTravelers", "250")?;

    page.scroll_to(0.0)?;
    page.scroll_to(200.0)?;
    page.assert_text("#statTravelers", "250")?;
    assert!(page.pending_timers().iter().all(|t| t.kind != "counter-frame"));
    Ok(())
}

#[test]
fn unparsable_counter_target_shows_nan() -> Result<()> {
    let mut page = landing_page()?;
    page.scroll_to(200.0)?;
    page.assert_text("#statBroken", "NaN")?;
    page.assert_class("#statBroken", "animated", true)?;
    Ok(())
}

#[test]
fn cards_fade_in_once_above_the_reveal_line() -> Result<()> {
    let mut page = landing_page()?;
    page.assert_class("#pkgBali", "fade-in", false)?;

    page.scroll_to(759.0)?;
    page.assert_class("#pkgBali", "fade-in", false)?;
    page.scroll_to(760.0)?;
    page.assert_class("#pkgBali", "fade-in", true)?;
    page.assert_class("#serviceVisa", "fade-in", false)?;

    page.scroll_to(1360.0)?;
    page.assert_class("#serviceVisa", "fade-in", true)?;

    page.scroll_to(0.0)?;
    page.assert_class("#pkgBali", "fade-in", true)?;
    page.assert_class("#serviceVisa", "fade-in", true)?;
    Ok(())
}

#[test]
fn cards_in_view_at_startup_are_revealed_immediately() -> Result<()> {
    let page = Page::from_html(
        r#"<div class="tip-card" id="tip">Pack light</div><div class="why-card" id="why">Support</div>"#,
    )?;
    page.assert_class("#tip", "fade-in", true)?;
    page.assert_class("#why", "fade-in", true)?;
    Ok(())
}

#[test]
fn lazy_image_swaps_source_when_it_appears() -> Result<()> {
    let mut page = landing_page()?;
    page.assert_attr("#lazyBeach", "src", None)?;

    page.scroll_to(3_100.0)?;
    page.assert_attr("#lazyBeach", "src", Some("images/beach.jpg"))?;
    page.assert_attr("#lazyBeach", "data-src", None)?;
    Ok(())
}

#[test]
fn parallax_moves_the_hero_at_half_speed() -> Result<()> {
    let mut page = landing_page()?;
    page.scroll_to(300.0)?;
    page.assert_style(".hero", "transform", "translateY(150px)")?;
    page.scroll_to(301.0)?;
    page.assert_style(".hero", "transform", "translateY(150.5px)")?;
    Ok(())
}

#[test]
fn load_hides_the_loader_then_detaches_it() -> Result<()> {
    let mut page = landing_page()?;
    page.load()?;
    page.load()?;
    assert_eq!(
        page.pending_timers()
            .iter()
            .filter(|t| t.kind == "loader-hide")
            .count(),
        1
    );

    page.advance_time(1_499)?;
    page.assert_class("#loader", "hidden", false)?;
    page.advance_time(1)?;
    page.assert_class("#loader", "hidden", true)?;
    page.assert_style("#loader", "display", "")?;
    page.advance_time(500)?;
    page.assert_style("#loader", "display", "none")?;
    Ok(())
}

#[test]
fn hero_elements_enter_with_a_stagger() -> Result<()> {
    let mut page = landing_page()?;
    page.load()?;

    page.advance_time(0)?;
    page.assert_style(".hero-badge", "opacity", "0")?;
    page.assert_style(".hero-badge", "transform", "translateY(30px)")?;
    page.assert_style(".hero-badge", "transition", "all 0.8s ease")?;
    page.assert_style(".hero-title", "opacity", "")?;

    page.advance_time(100)?;
    page.assert_style(".hero-badge", "opacity", "1")?;
    page.assert_style(".hero-badge", "transform", "translateY(0)")?;

    page.advance_time(100)?;
    page.assert_style(".hero-title", "opacity", "0")?;
    page.advance_time(500)?;
    page.assert_style(".hero-buttons", "opacity", "1")?;
    page.assert_style(".hero-description", "transform", "translateY(0)")?;
    Ok(())
}
