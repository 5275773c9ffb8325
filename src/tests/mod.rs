use super::*;
use chrono::NaiveDate;

mod animations;
mod enhancements;
mod notifications;
mod runtime;

pub(super) const LANDING_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Horizon Travel</title>
</head>
<body>
  <div id="loader" class="loader"><div class="spinner"></div></div>

  <nav id="navbar" class="navbar">
    <a href="#home" class="logo">Horizon</a>
    <button id="themeToggle" class="theme-toggle" type="button"><i class="fas fa-moon"></i></button>
    <button id="navToggle" class="nav-toggle" type="button"><span></span></button>
    <ul id="navMenu" class="nav-menu">
      <li><a href="#home" class="nav-link active">Home</a></li>
      <li><a href="#booking" class="nav-link">Book</a></li>
      <li><a href="#packages" class="nav-link">Packages</a></li>
      <li><a href="#contact" class="nav-link">Contact</a></li>
    </ul>
  </nav>

  <section id="home" class="hero">
    <span class="hero-badge">New season</span>
    <h1 class="hero-title">Explore the world</h1>
    <p class="hero-description">Flights, hotels &amp; tours</p>
    <div class="hero-buttons"><a href="#booking" id="heroCta" class="btn btn-primary">Book now</a></div>
    <div class="stats">
      <span class="stat-number" id="statTravelers" data-target="250">0</span>
      <span class="stat-number" id="statBroken" data-target="n/a">0</span>
    </div>
  </section>

  <section id="booking">
    <div class="booking-tabs">
      <button class="tab-btn active" id="tabFlights" data-tab="flights" type="button">Flights</button>
      <button class="tab-btn" id="tabHotels" data-tab="hotels" type="button">Hotels</button>
    </div>
    <form id="flightsForm" class="booking-form active">
      <input id="from" type="text" required>
      <input id="to" type="text" required>
      <input id="departure" type="date">
      <select id="cabin" required>
        <option value="">Cabin</option>
        <option value="economy">Economy</option>
        <option value="business">Business</option>
      </select>
      <button id="searchFlights" class="btn" type="submit">Search</button>
    </form>
    <form id="hotelsForm" class="booking-form">
      <input id="city" type="text" required>
      <input id="checkin" type="date">
      <button id="searchHotels" class="btn" type="submit">Search</button>
    </form>
  </section>

  <section id="packages">
    <div class="package-card" id="pkgBali">
      <div class="package-location"><i class="fas fa-map-marker-alt"></i><span>Bali, Indonesia</span></div>
      <button class="btn btn-outline" id="viewBali" type="button">View details</button>
    </div>
    <div class="package-card" id="pkgMystery">
      <button class="btn btn-outline" id="viewMystery" type="button">View details</button>
    </div>
    <div class="service-card" id="serviceVisa"><a class="service-link" id="visaLink">Visa help</a></div>
  </section>

  <section id="testimonials">
    <div class="testimonials-slider">
      <div id="testimonialsTrack" class="testimonials-track">
        <div class="testimonial-card">Loved it</div>
        <div class="testimonial-card">Seamless</div>
        <div class="testimonial-card">Would book again</div>
      </div>
    </div>
    <button id="testimonialPrev" type="button">Prev</button>
    <button id="testimonialNext" type="button">Next</button>
    <div id="testimonialsDots"></div>
  </section>

  <section id="faq">
    <div class="faq-item" id="faqVisa"><div class="faq-question" id="qVisa">Do I need a visa?</div><div class="faq-answer">Depends.</div></div>
    <div class="faq-item" id="faqRefund"><div class="faq-question" id="qRefund">Can I get a refund?</div><div class="faq-answer">Yes.</div></div>
    <div class="faq-item" id="faqPets"><div class="faq-question" id="qPets">Are pets allowed?</div><div class="faq-answer">Some.</div></div>
  </section>

  <section id="contact">
    <form id="contactForm">
      <div class="form-group" id="nameGroup"><input id="contactName" type="text" required></div>
      <div class="form-group" id="messageGroup"><textarea id="message" maxlength="100" required></textarea></div>
      <button id="sendMessage" class="btn" type="submit">Send</button>
    </form>
  </section>

  <footer>
    <form id="newsletterForm">
      <input id="newsletterEmail" type="email" placeholder="you@example.com">
      <button id="subscribe" type="submit">Subscribe</button>
    </form>
    <a class="social-link" id="socialInstagram" href="https://instagram.com/horizon"><i class="fab fa-instagram"></i></a>
    <img id="lazyBeach" data-src="images/beach.jpg" alt="Beach">
  </footer>

  <button id="backToTop" class="back-to-top" type="button">Top</button>
</body>
</html>
"##;

pub(super) fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
}

/// Options that lay the landing page out on a 1280x800 viewport.
pub(super) fn landing_options() -> PageOptions {
    PageOptions::new()
        .with_today(fixed_today())
        .with_layout("#home", LayoutBox::block(0.0, 700.0))
        .with_layout("#booking", LayoutBox::block(700.0, 600.0))
        .with_layout("#packages", LayoutBox::block(1300.0, 800.0))
        .with_layout("#testimonials", LayoutBox::block(2100.0, 500.0))
        .with_layout("#faq", LayoutBox::block(2600.0, 400.0))
        .with_layout("#contact", LayoutBox::block(3000.0, 600.0))
        .with_layout(".stat-number", LayoutBox::new(900.0, 0.0, 120.0, 40.0))
        .with_layout("#pkgBali", LayoutBox::new(1400.0, 0.0, 360.0, 420.0))
        .with_layout("#pkgMystery", LayoutBox::new(1400.0, 400.0, 360.0, 420.0))
        .with_layout("#serviceVisa", LayoutBox::new(2000.0, 0.0, 300.0, 200.0))
        .with_layout(".testimonials-slider", LayoutBox::new(2150.0, 100.0, 800.0, 300.0))
        .with_layout("#lazyBeach", LayoutBox::new(3800.0, 0.0, 400.0, 300.0))
        .with_layout("#themeToggle", LayoutBox::new(10.0, 1100.0, 40.0, 40.0))
        .with_layout("#backToTop", LayoutBox::new(750.0, 1200.0, 50.0, 50.0))
        .with_layout(".btn", LayoutBox::new(300.0, 100.0, 120.0, 48.0))
}

pub(super) fn landing_page() -> Result<Page> {
    init_tracing();
    Page::from_html_with_options(LANDING_HTML, landing_options())
}

pub(super) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
