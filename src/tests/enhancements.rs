use super::*;

#[test]
fn date_inputs_start_at_today() -> Result<()> {
    let page = landing_page()?;
    page.assert_attr("#departure", "min", Some("2025-06-01"))?;
    page.assert_attr("#checkin", "min", Some("2025-06-01"))?;
    page.assert_attr("#from", "min", None)?;
    Ok(())
}

#[test]
fn social_links_lift_while_hovered() -> Result<()> {
    let mut page = landing_page()?;
    page.pointer_enter("#socialInstagram")?;
    page.assert_style("#socialInstagram", "transform", "translateY(-5px) scale(1.1)")?;
    page.pointer_leave("#socialInstagram")?;
    page.assert_style("#socialInstagram", "transform", "translateY(0) scale(1)")?;
    Ok(())
}

#[test]
fn hovering_a_social_icon_lifts_its_link() -> Result<()> {
    let mut page = landing_page()?;
    page.pointer_enter("#socialInstagram i")?;
    page.assert_style("#socialInstagram", "transform", "translateY(-5px) scale(1.1)")?;

    page.pointer_leave("#socialInstagram i")?;
    page.assert_style("#socialInstagram", "transform", "translateY(-5px) scale(1.1)")?;

    page.pointer_enter("#navToggle")?;
    page.assert_style("#socialInstagram", "transform", "translateY(0) scale(1)")?;
    Ok(())
}

#[test]
fn escape_closes_the_open_menu() -> Result<()> {
    let mut page = landing_page()?;
    page.press_key_on_page(KeyPress::new("Escape"))?;
    page.assert_class("#navMenu", "active", false)?;

    page.click("#navToggle")?;
    page.press_key_on_page(KeyPress::new("Escape"))?;
    page.assert_class("#navMenu", "active", false)?;
    page.assert_class("#navToggle", "active", false)?;
    page.assert_style("body", "overflow", "")?;
    Ok(())
}

#[test]
fn ctrl_k_jumps_to_booking_and_focuses_first_input() -> Result<()> {
    let mut page = landing_page()?;
    page.press_key_on_page(KeyPress::new("k").with_ctrl())?;
    assert_eq!(page.scroll_y(), 700.0);
    assert!(!page.is_focused("#from")?);

    page.advance_time(500)?;
    assert!(page.is_focused("#from")?);
    page.assert_class("#flightsForm", "focused", true)?;
    Ok(())
}

#[test]
fn meta_k_works_like_ctrl_k_and_plain_k_does_nothing() -> Result<()> {
    let mut page = landing_page()?;
    page.press_key_on_page(KeyPress::new("k"))?;
    assert_eq!(page.scroll_y(), 0.0);

    page.press_key_on_page(KeyPress::new("k").with_meta())?;
    assert_eq!(page.scroll_y(), 700.0);
    Ok(())
}

#[test]
fn focused_class_stays_while_the_field_has_a_value() -> Result<()> {
    let mut page = landing_page()?;

    page.focus("#contactName")?;
    page.assert_class("#nameGroup", "focused", true)?;
    page.blur("#contactName")?;
    page.assert_class("#nameGroup", "focused", false)?;

    page.focus("#contactName")?;
    page.type_text("#contactName", "Ana")?;
    page.focus("#message")?;
    page.assert_class("#nameGroup", "focused", true)?;
    page.assert_class("#messageGroup", "focused", true)?;
    Ok(())
}

#[test]
fn textarea_counter_tracks_length_and_warns_near_the_limit() -> Result<()> {
    let mut page = landing_page()?;
    page.assert_count("#messageGroup > .char-counter", 1)?;
    page.assert_text("#messageGroup .char-counter", "0 / 100")?;

    page.type_text("#message", &"a".repeat(95))?;
    page.assert_text(".char-counter", "95 / 100")?;
    page.assert_style(".char-counter", "color", "#ef4444")?;

    page.type_text("#message", &"a".repeat(50))?;
    page.assert_text(".char-counter", "50 / 100")?;
    page.assert_style(".char-counter", "color", "")?;

    page.type_text("#message", &"a".repeat(90))?;
    page.assert_style(".char-counter", "color", "")?;
    page.type_text("#message", &"a".repeat(91))?;
    page.assert_style(".char-counter", "color", "#ef4444")?;
    Ok(())
}

#[test]
fn textarea_counter_respects_maxlength_in_utf16_units() -> Result<()> {
    let mut page = landing_page()?;
    page.type_text("#message", &"b".repeat(120))?;
    page.assert_text(".char-counter", "100 / 100")?;

    page.type_text("#message", "\u{1F30D}\u{1F30D}\u{1F30D}")?;
    page.assert_text(".char-counter", "6 / 100")?;
    Ok(())
}

#[test]
fn textarea_without_maxlength_gets_no_counter() -> Result<()> {
    let page = Page::from_html("<div><textarea id='notes'></textarea></div>")?;
    page.assert_count(".char-counter", 0)?;
    Ok(())
}
