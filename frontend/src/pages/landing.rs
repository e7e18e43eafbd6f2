use std::rc::Rc;

use chrono::Datelike;
use log::{debug, info, warn};
use yew::prelude::*;
use yew_hooks::prelude::use_effect_once;

use crate::config::LandingConfig;
use crate::dom::BrowserDom;
use crate::effects::Effects;
use crate::i18n::{bridge, LanguagePrefs, Localizer, SelectorMap, TranslationOutcome, Translations};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub config: Rc<LandingConfig>,
}

/// Translates the rendered page into the browser's language and exposes the
/// namespace for later switches.
fn localize(config: &LandingConfig) {
    let dom = match BrowserDom::new() {
        Ok(dom) => dom,
        Err(e) => {
            warn!("Localization disabled: {}", e);
            return;
        }
    };
    let translations = Translations::builtin();
    for tag in translations.tags() {
        let missing = translations.missing_keys(tag);
        if !missing.is_empty() {
            debug!("'{}' lacks {:?} from '{}'", tag, missing, translations.reference());
        }
    }
    let localizer = Rc::new(Localizer::new(translations, SelectorMap::landing(), config.i18n.clone()));
    let prefs = LanguagePrefs::from_window();
    let locale = match localizer.translate_detected(&dom, &prefs) {
        TranslationOutcome::Applied { locale, .. } => locale,
        TranslationOutcome::Untranslated { .. } => config.i18n.default_locale,
    };
    if let Err(e) = bridge::install(localizer, dom, locale) {
        warn!("Could not install window.{}: {}", config.i18n.namespace, e);
    }
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let year = chrono::Local::now().year();

    {
        let config = props.config.clone();
        use_effect_once(move || {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            let effects = match Effects::install(&config.effects) {
                Ok(effects) => Some(effects),
                Err(e) => {
                    warn!("Effects disabled: {}", e);
                    None
                }
            };
            localize(&config);
            info!("Landing page ready");
            move || drop(effects)
        });
    }

    html! {
        <div class="landing-page">
            <header class="site-header">
                <div class="header-content">
                    <a class="logo" href="#home">{"SnapBoost ⚡"}</a>
                    <nav class="nav-links">
                        <a href="#home" data-i18n="nav.home">{"Home"}</a>
                        <a href="#services" data-i18n="nav.services">{"Services"}</a>
                        <a href="#achievements" data-i18n="nav.achievements">{"Results"}</a>
                        <a href="#features" data-i18n="nav.features">{"Why us"}</a>
                        <a href="#contact" data-i18n="nav.contact">{"Contact"}</a>
                    </nav>
                </div>
            </header>

            <section class="hero" id="home">
                <div class="particles"></div>
                <div class="hero-content reveal">
                    <span class="hero-badge" data-i18n="hero.badge">{"#1 Snapchat growth service 🔥"}</span>
                    <h1 data-i18n="hero.title">{"Boost your SnapScore and followers now"}</h1>
                    <p class="hero-subtitle" data-i18n="hero.subtitle">
                        {"Real growth for your Snapchat profile, delivered in minutes without ever asking for your password."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#services" class="btn btn-primary" data-i18n="hero.cta_primary">{"Get started 🚀"}</a>
                        <a href="#features" class="btn btn-secondary" data-i18n="hero.cta_secondary">{"See our services"}</a>
                    </div>
                </div>
            </section>

            <section id="services">
                <h2 class="section-title reveal" data-i18n="services.title">{"Our services"}</h2>
                <p class="section-subtitle reveal" data-i18n="services.subtitle">{"Pick the boost that fits your goals."}</p>
                <div class="services-grid">
                    <div class="service-card reveal">
                        <div class="service-icon">{"⭐"}</div>
                        <h3 class="service-title">{"SnapScore boost"}</h3>
                        <p class="service-description">
                            {"Raise your score with safe, gradual activity that looks completely natural."}
                        </p>
                        <div class="service-features">
                            <span class="feature-tag">{"Gradual delivery"}</span>
                            <span class="feature-tag">{"Natural activity"}</span>
                            <span class="feature-tag">{"From 10K points"}</span>
                        </div>
                    </div>
                    <div class="service-card reveal">
                        <div class="service-icon">{"👥"}</div>
                        <h3 class="service-title">{"Followers"}</h3>
                        <p class="service-description">
                            {"Grow your audience with active followers who actually watch your stories."}
                        </p>
                        <div class="service-features">
                            <span class="feature-tag">{"Active accounts"}</span>
                            <span class="feature-tag">{"No drops"}</span>
                            <span class="feature-tag">{"Refill guarantee"}</span>
                        </div>
                    </div>
                    <div class="service-card reveal">
                        <div class="service-icon">{"👀"}</div>
                        <h3 class="service-title">{"Story views"}</h3>
                        <p class="service-description">
                            {"Get more eyes on every story and reach more people with each post."}
                        </p>
                        <div class="service-features">
                            <span class="feature-tag">{"Instant start"}</span>
                            <span class="feature-tag">{"Worldwide views"}</span>
                            <span class="feature-tag">{"Any story"}</span>
                        </div>
                    </div>
                </div>
            </section>

            <section id="achievements">
                <h2 class="section-title reveal" data-i18n="achievements.title">{"Numbers that speak for themselves 🏆"}</h2>
                <div class="stats-grid">
                    <div class="stat-item reveal">
                        <span class="stat-number" data-target="12000" data-suffix="+">{"0"}</span>
                        <span class="stat-label">{"Happy clients"}</span>
                    </div>
                    <div class="stat-item reveal">
                        <span class="stat-number" data-target="50" data-suffix="M+">{"0"}</span>
                        <span class="stat-label">{"Points delivered"}</span>
                    </div>
                    <div class="stat-item reveal">
                        <span class="stat-number" data-target="49" data-suffix="/50">{"0"}</span>
                        <span class="stat-label">{"Average rating"}</span>
                    </div>
                    <div class="stat-item reveal">
                        <span class="stat-number" data-target="24" data-suffix="/7">{"0"}</span>
                        <span class="stat-label">{"Hours of support"}</span>
                    </div>
                </div>
            </section>

            <section id="features">
                <h2 class="section-title reveal" data-i18n="features.title">{"Why choose SnapBoost"}</h2>
                <div class="features-grid">
                    <div class="feature-panel reveal">
                        <h3 class="feature-title">{"Lightning fast ⚡"}</h3>
                        <p class="feature-description">{"Orders start within minutes of payment."}</p>
                        <ul class="feature-list">
                            <li>{"Automatic processing"}</li>
                            <li>{"Live order tracking"}</li>
                            <li>{"Delivery in under 24 hours"}</li>
                        </ul>
                    </div>
                    <div class="feature-panel reveal">
                        <h3 class="feature-title">{"Safe and private 🔒"}</h3>
                        <p class="feature-description">{"We never ask for your password or personal data."}</p>
                        <ul class="feature-list">
                            <li>{"Username only"}</li>
                            <li>{"Encrypted payments"}</li>
                            <li>{"Discreet billing"}</li>
                        </ul>
                    </div>
                    <div class="feature-panel reveal">
                        <h3 class="feature-title">{"Always here for you 💬"}</h3>
                        <p class="feature-description">{"A real team answers your questions around the clock."}</p>
                        <ul class="feature-list">
                            <li>{"24/7 live chat"}</li>
                            <li>{"Replies in minutes"}</li>
                            <li>{"Money-back guarantee"}</li>
                        </ul>
                    </div>
                </div>
            </section>

            <section class="extras" id="contact">
                <h4 class="extras-title" data-i18n="extras.title">{"More"}</h4>
                <div class="extras-links">
                    <a href="/faq" data-i18n="extras.faq">{"FAQ"}</a>
                    <a href="/privacy" data-i18n="extras.privacy">{"Privacy policy"}</a>
                    <a href="/terms" data-i18n="extras.terms">{"Terms of service"}</a>
                    <a href="mailto:support@snapboost.app" data-i18n="extras.contact">{"Contact us ✉️"}</a>
                </div>
            </section>

            <footer>
                <p class="footer-tagline" data-i18n="footer.tagline">{"Grow faster on Snapchat."}</p>
                <p class="footer-copy" data-i18n="footer.copyright">
                    {format!("© {} SnapBoost. All rights reserved.", year)}
                </p>
            </footer>

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #0d0d12;
                    color: #ffffff;
                    overflow-x: hidden;
                    font-family: system-ui, sans-serif;
                }

                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 100;
                    transition: transform 0.3s ease, background 0.3s ease;
                }

                .site-header.scrolled {
                    background: rgba(13, 13, 18, 0.92);
                    backdrop-filter: blur(8px);
                }

                .site-header.header-hidden {
                    transform: translateY(-100%);
                }

                .header-content {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                }

                .logo {
                    font-weight: 800;
                    font-size: 1.4rem;
                    color: #fffc00;
                    text-decoration: none;
                }

                .nav-links a {
                    color: #ffffff;
                    margin-left: 1.5rem;
                    text-decoration: none;
                }

                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 6rem 2rem;
                    overflow: hidden;
                }

                .hero h1 {
                    font-size: 3.5rem;
                    margin: 1rem 0;
                }

                .hero-badge {
                    display: inline-block;
                    padding: 0.4rem 1rem;
                    border-radius: 999px;
                    background: rgba(255, 252, 0, 0.12);
                    color: #fffc00;
                }

                .particles {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                }

                .particle {
                    position: absolute;
                    border-radius: 50%;
                    background: rgba(255, 252, 0, 0.5);
                    animation-name: float;
                    animation-iteration-count: infinite;
                    animation-timing-function: linear;
                }

                @keyframes float {
                    0% { transform: translateY(0); opacity: 0; }
                    10% { opacity: 1; }
                    100% { transform: translateY(-100vh); opacity: 0; }
                }

                .btn {
                    position: relative;
                    overflow: hidden;
                    display: inline-block;
                    padding: 0.9rem 2rem;
                    margin: 0.5rem;
                    border-radius: 999px;
                    text-decoration: none;
                    font-weight: 600;
                }

                .btn-primary {
                    background: #fffc00;
                    color: #0d0d12;
                }

                .btn-secondary {
                    border: 1px solid rgba(255, 255, 255, 0.4);
                    color: #ffffff;
                }

                .ripple {
                    position: absolute;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.5);
                    transform: scale(0);
                    animation: ripple 0.6s linear;
                    pointer-events: none;
                }

                @keyframes ripple {
                    to { transform: scale(4); opacity: 0; }
                }

                section {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 5rem 2rem;
                }

                .section-title {
                    text-align: center;
                    font-size: 2.4rem;
                }

                .section-subtitle {
                    text-align: center;
                    color: #a0a0b0;
                }

                .services-grid, .features-grid, .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 2rem;
                    margin-top: 3rem;
                }

                .service-card, .feature-panel {
                    background: #17171f;
                    border-radius: 20px;
                    padding: 2rem;
                    transition: transform 0.15s ease-out;
                    transform-style: preserve-3d;
                }

                .service-icon {
                    font-size: 2.5rem;
                }

                .feature-tag {
                    display: inline-block;
                    margin: 0.25rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    background: rgba(255, 252, 0, 0.1);
                    font-size: 0.85rem;
                }

                .feature-list li::before {
                    content: "✓ ";
                    color: #fffc00;
                }

                .stat-item {
                    text-align: center;
                }

                .stat-number {
                    display: block;
                    font-size: 3rem;
                    font-weight: 800;
                    color: #fffc00;
                }

                .extras-links a {
                    color: #a0a0b0;
                    margin-right: 1.5rem;
                }

                footer {
                    text-align: center;
                    padding: 3rem 2rem;
                    color: #6c6c7a;
                }

                .reveal {
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }

                .reveal.visible {
                    opacity: 1;
                    transform: none;
                }

                .emoji {
                    font-style: normal;
                }

                [dir="rtl"] .nav-links a {
                    margin-left: 0;
                    margin-right: 1.5rem;
                }

                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.2rem;
                    }

                    .nav-links {
                        display: none;
                    }
                }
                "#}
            </style>
        </div>
    }
}
