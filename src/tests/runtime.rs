use super::*;

#[test]
fn event_and_timer_traces_are_buffered_when_enabled() -> Result<()> {
    let mut page = landing_page()?;
    page.enable_trace(true);

    page.click("#navToggle")?;
    page.click("#themeToggle")?;
    let logs = page.take_trace_logs();
    assert!(
        logs.iter()
            .any(|line| line.starts_with("[event] click target=button#navToggle")),
        "{logs:?}"
    );
    assert!(
        logs.iter()
            .any(|line| line.contains("[timer] schedule timeout") && line.contains("remove-node")),
        "{logs:?}"
    );
    assert!(page.take_trace_logs().is_empty());

    page.set_trace_events(false);
    page.click("#navToggle")?;
    assert!(page.take_trace_logs().iter().all(|line| !line.starts_with("[event]")));
    Ok(())
}

#[test]
fn trace_log_limit_keeps_the_newest_lines() -> Result<()> {
    let mut page = landing_page()?;
    assert!(matches!(page.set_trace_log_limit(0), Err(Error::Config(_))));

    page.enable_trace(true);
    page.set_trace_log_limit(2)?;
    page.click("#navToggle")?;
    page.click("#navToggle")?;
    page.advance_time(10)?;
    let logs = page.take_trace_logs();
    assert_eq!(logs.len(), 2);
    assert!(logs[1].starts_with("[timer] advance"), "{logs:?}");
    Ok(())
}

#[test]
fn flush_fails_while_autoplay_keeps_rescheduling() -> Result<()> {
    let mut page = landing_page()?;
    assert!(matches!(page.set_timer_step_limit(0), Err(Error::Timer(_))));
    page.set_timer_step_limit(50)?;
    assert!(matches!(page.flush(), Err(Error::Timer(_))));

    page.pointer_enter(".testimonials-slider")?;
    page.flush()?;
    assert!(page.pending_timers().is_empty());
    Ok(())
}

#[test]
fn timer_controls_report_and_cancel_pending_work() -> Result<()> {
    let mut page = landing_page()?;
    let autoplay = page
        .pending_timers()
        .into_iter()
        .find(|t| t.kind == "carousel-autoplay")
        .ok_or_else(|| Error::Timer("autoplay not scheduled".into()))?;
    assert_eq!(autoplay.interval_ms, Some(5_000));
    assert_eq!(autoplay.due_at, 5_000);

    assert!(page.clear_timer(autoplay.id));
    assert!(!page.clear_timer(autoplay.id));
    page.advance_time(6_000)?;
    assert_eq!(page.testimonial_index(), 0);
    assert_eq!(page.now_ms(), 6_000);

    page.show_notification("pending", ToastKind::Info)?;
    assert_eq!(page.clear_all_timers(), 1);
    assert!(matches!(page.advance_time(-1), Err(Error::Timer(_))));
    assert!(matches!(page.advance_time_to(10), Err(Error::Timer(_))));
    page.advance_time_to(7_000)?;
    assert_eq!(page.now_ms(), 7_000);
    Ok(())
}

#[test]
fn run_next_and_run_due_timers_step_the_queue() -> Result<()> {
    let mut page = Page::from_html("<p>quiet</p>")?;
    page.show_notification("step", ToastKind::Info)?;
    assert_eq!(page.run_due_timers()?, 0);

    assert!(page.run_next_timer()?);
    assert_eq!(page.now_ms(), 3_000);
    page.assert_style(".notification", "animation", "slideInRight 0.3s ease reverse")?;
    assert!(page.run_next_timer()?);
    page.assert_count(".notification", 0)?;
    assert!(!page.run_next_timer()?);
    Ok(())
}

#[test]
fn user_actions_validate_their_targets() -> Result<()> {
    let mut page = landing_page()?;

    assert!(matches!(
        page.click("#doesNotExist"),
        Err(Error::SelectorNotFound(sel)) if sel == "#doesNotExist"
    ));
    assert!(matches!(
        page.type_text("#navMenu", "x"),
        Err(Error::TypeMismatch { expected, .. }) if expected == "input or textarea"
    ));
    assert!(matches!(
        page.set_select_value("#from", "x"),
        Err(Error::TypeMismatch { .. })
    ));
    assert!(matches!(page.set_select_value("#cabin", "first"), Err(Error::Dom(_))));
    assert!(matches!(page.scroll_to(f64::NAN), Err(Error::Dom(_))));
    assert!(matches!(page.resize(-1.0, 10.0), Err(Error::Dom(_))));
    assert!(matches!(page.count("a + b"), Err(Error::UnsupportedSelector(_))));
    Ok(())
}

#[test]
fn failed_assertion_carries_a_dom_snippet() -> Result<()> {
    let page = landing_page()?;
    match page.assert_text("#tabFlights", "Trains") {
        Err(Error::AssertionFailed {
            expected,
            actual,
            dom_snippet,
            ..
        }) => {
            assert_eq!(expected, "Trains");
            assert_eq!(actual, "Flights");
            assert!(dom_snippet.contains("tabFlights"), "{dom_snippet}");
        }
        other => panic!("unexpected result: {other:?}"),
    }
    Ok(())
}

#[test]
fn scroll_is_clamped_and_only_fires_on_change() -> Result<()> {
    let mut page = landing_page()?;
    page.enable_trace(true);
    page.scroll_to(-40.0)?;
    assert_eq!(page.scroll_y(), 0.0);
    assert!(page.take_trace_logs().iter().all(|line| !line.contains("scroll")));

    page.scroll_to(250.0)?;
    page.scroll_to(250.0)?;
    let scrolls = page
        .take_trace_logs()
        .into_iter()
        .filter(|line| line.starts_with("[event] done scroll"))
        .count();
    assert_eq!(scrolls, 1);
    Ok(())
}

#[test]
fn set_layout_reevaluates_observers() -> Result<()> {
    let mut page = landing_page()?;
    page.set_layout("#statTravelers", LayoutBox::new(100.0, 0.0, 120.0, 40.0))?;
    page.assert_class("#statTravelers", "animated", true)?;
    page.assert_class("#statBroken", "animated", false)?;
    assert!(matches!(
        page.set_layout("#nothing", LayoutBox::default()),
        Err(Error::SelectorNotFound(_))
    ));
    Ok(())
}

#[test]
fn site_config_overrides_behavior_constants() -> Result<()> {
    init_tracing();
    let config = SiteConfig::from_toml(
        r#"
        [carousel]
        autoplay_ms = 1000

        [navigation]
        anchor_offset = 0

        [notifications]
        visible_ms = 500
        "#,
    )?;
    let mut page = Page::from_html_with_options(
        LANDING_HTML,
        landing_options().with_config(config),
    )?;
    assert_eq!(page.config().carousel.autoplay_ms, 1_000);
    assert_eq!(page.config().loader.hide_ms, 1_500);

    page.advance_time(1_000)?;
    assert_eq!(page.testimonial_index(), 1);

    page.click("#heroCta")?;
    assert_eq!(page.scroll_y(), 700.0);

    page.show_notification("quick", ToastKind::Info)?;
    page.advance_time(800)?;
    page.assert_count(".notification", 0)?;
    Ok(())
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let mut config = SiteConfig::default();
    config.animation.frame_interval_ms = 0;
    let result = Page::from_html_with_options(LANDING_HTML, landing_options().with_config(config));
    assert!(matches!(result, Err(Error::Config(msg)) if msg.contains("frame_interval_ms")));
}

#[test]
fn site_config_loads_from_a_file() -> Result<()> {
    let dir = tempfile::tempdir().map_err(|err| Error::Config(err.to_string()))?;
    let path = dir.path().join("site.toml");
    std::fs::write(&path, "[effects]\nripple_ms = 900\n")
        .map_err(|err| Error::Config(err.to_string()))?;

    let config = SiteConfig::from_file(&path)?;
    assert_eq!(config.effects.ripple_ms, 900);
    assert_eq!(config.loader.hide_ms, 1500);

    let missing = SiteConfig::from_file(dir.path().join("absent.toml"));
    assert!(matches!(missing, Err(Error::Config(msg)) if msg.contains("cannot read")));
    Ok(())
}

#[test]
fn submit_buttons_submit_their_form_but_plain_buttons_do_not() -> Result<()> {
    let html = r#"
        <form id="contactForm">
          <input id="name" required>
          <button id="plain" type="button">Preview</button>
          <button id="send">Send</button>
        </form>
    "#;
    let mut page = Page::from_html(html)?;

    page.click("#plain")?;
    page.assert_count(".notification", 0)?;

    page.click("#send")?;
    page.assert_text(".notification span", "Please fill all required fields")?;
    Ok(())
}

#[test]
fn document_is_normalized_and_entities_decoded() -> Result<()> {
    let page = landing_page()?;
    page.assert_exists("html > head > title")?;
    page.assert_text(".hero-description", "Flights, hotels & tours")?;
    page.assert_text("title", "Horizon Travel")?;
    assert!(page.dump_dom("#tabFlights")?.contains("data-tab=\"flights\""));
    Ok(())
}

#[test]
fn timer_trace_can_be_muted_separately() -> Result<()> {
    let mut page = landing_page()?;
    page.enable_trace(true);
    page.set_trace_timers(false);

    page.click("#themeToggle")?;
    page.advance_time(10)?;
    let logs = page.take_trace_logs();
    assert!(logs.iter().any(|line| line.starts_with("[event]")), "{logs:?}");
    assert!(logs.iter().all(|line| !line.starts_with("[timer]")), "{logs:?}");
    Ok(())
}

#[test]
fn seeded_storage_is_visible_to_behaviors() -> Result<()> {
    let page = Page::from_html_with_local_storage(
        r#"<button id="themeToggle"><i class="fas fa-moon"></i></button>"#,
        &[("theme", "dark"), ("visits", "3")],
    )?;
    assert_eq!(page.theme(), Theme::Dark);
    assert_eq!(page.local_storage().get("visits"), Some("3"));
    page.assert_attr("#themeToggle i", "class", Some("fas fa-sun"))?;
    Ok(())
}
