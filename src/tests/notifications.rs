use super::*;

#[test]
fn toast_has_kind_class_icon_and_message() -> Result<()> {
    let mut page = landing_page()?;
    page.show_notification("Hello traveler", ToastKind::Info)?;

    page.assert_count("body > .notification", 1)?;
    page.assert_class(".notification", "notification-info", true)?;
    page.assert_exists(".notification > .notification-content > i.fas.fa-info-circle")?;
    page.assert_text(".notification-content span", "Hello traveler")?;
    page.assert_count("head > #notification-styles", 1)?;
    Ok(())
}

#[test]
fn toast_message_is_plain_text() -> Result<()> {
    let mut page = landing_page()?;
    page.show_notification("<b>50% off</b> today", ToastKind::Success)?;
    page.assert_count(".notification b", 0)?;
    page.assert_text(".notification span", "<b>50% off</b> today")?;
    Ok(())
}

#[test]
fn new_toast_replaces_the_visible_one() -> Result<()> {
    let mut page = landing_page()?;
    page.show_notification("first", ToastKind::Info)?;
    page.advance_time(1_000)?;
    page.show_notification("second", ToastKind::Error)?;

    page.assert_count(".notification", 1)?;
    page.assert_text(".notification span", "second")?;
    page.assert_count("#notification-styles", 1)?;

    // first toast's exit lands on its detached node
    page.advance_time(2_300)?;
    page.assert_count(".notification", 1)?;
    page.assert_style(".notification", "animation", "")?;
    assert!(page.uncaught_errors().is_empty());
    Ok(())
}

#[test]
fn toast_slides_out_then_disappears() -> Result<()> {
    let mut page = landing_page()?;
    page.show_notification("bye", ToastKind::Success)?;

    page.advance_time(2_999)?;
    page.assert_style(".notification", "animation", "")?;
    page.advance_time(1)?;
    page.assert_style(".notification", "animation", "slideInRight 0.3s ease reverse")?;
    page.advance_time(299)?;
    page.assert_count(".notification", 1)?;
    page.advance_time(1)?;
    page.assert_count(".notification", 0)?;
    Ok(())
}

#[test]
fn package_view_announces_the_location() -> Result<()> {
    let mut page = landing_page()?;
    page.click("#viewBali")?;
    page.assert_class(".notification", "notification-info", true)?;
    page.assert_text(
        ".notification span",
        "Exploring packages for Bali, Indonesia...",
    )?;
    Ok(())
}

#[test]
fn package_without_location_shows_nothing() -> Result<()> {
    let mut page = landing_page()?;
    page.click("#viewMystery")?;
    page.assert_count(".notification", 0)?;
    Ok(())
}

#[test]
fn package_view_keeps_the_click_from_reaching_outer_links() -> Result<()> {
    let html = r##"
        <section id="deals">
          <a href="#deals" id="dealLink">
            <div class="package-card">
              <div class="package-location"><span>Oslo</span></div>
              <button class="btn-outline" id="viewOslo" type="button">View</button>
            </div>
          </a>
        </section>
    "##;
    let options = PageOptions::new().with_layout("#deals", LayoutBox::block(900.0, 400.0));
    let mut page = Page::from_html_with_options(html, options)?;

    page.click("#viewOslo")?;
    assert_eq!(page.scroll_y(), 0.0);
    page.assert_text(".notification span", "Exploring packages for Oslo...")?;

    page.click("#dealLink")?;
    assert_eq!(page.scroll_y(), 820.0);
    Ok(())
}
