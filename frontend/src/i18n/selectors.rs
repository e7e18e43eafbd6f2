//! Where each translation key lands on the page.
//!
//! Elements are found by `data-i18n="<key>"` first. The locator is the
//! fallback for markup without the attribute; repeated cards and panels are
//! addressed by position inside their section.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Locator {
    Css(&'static str),
    /// `part` inside the `index`-th (zero-based) `item` under `container`.
    Nth {
        container: &'static str,
        item: &'static str,
        index: usize,
        part: &'static str,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Text,
    /// Each list entry replaces the text of the matching positional `item`.
    TagList { item: &'static str },
    /// The element's content is rebuilt as one `<li>` per entry.
    BulletList,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    pub key: &'static str,
    pub locator: Locator,
    pub shape: Shape,
    pub required: bool,
}

const fn text(key: &'static str, selector: &'static str) -> Slot {
    Slot {
        key,
        locator: Locator::Css(selector),
        shape: Shape::Text,
        required: true,
    }
}

const fn optional(slot: Slot) -> Slot {
    Slot { required: false, ..slot }
}

const fn card(key: &'static str, index: usize, part: &'static str, shape: Shape) -> Slot {
    Slot {
        key,
        locator: Locator::Nth {
            container: "#services .services-grid",
            item: ".service-card",
            index,
            part,
        },
        shape,
        required: true,
    }
}

const fn panel(key: &'static str, index: usize, part: &'static str, shape: Shape) -> Slot {
    Slot {
        key,
        locator: Locator::Nth {
            container: "#features .features-grid",
            item: ".feature-panel",
            index,
            part,
        },
        shape,
        required: true,
    }
}

const fn stat(key: &'static str, index: usize) -> Slot {
    Slot {
        key,
        locator: Locator::Nth {
            container: "#achievements .stats-grid",
            item: ".stat-item",
            index,
            part: ".stat-label",
        },
        shape: Shape::Text,
        required: true,
    }
}

const TAGS: Shape = Shape::TagList { item: ".feature-tag" };

#[derive(Clone, Debug, PartialEq)]
pub struct SelectorMap {
    slots: Vec<Slot>,
}

impl SelectorMap {
    pub fn new(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    /// The landing page layout.
    pub fn landing() -> Self {
        Self::new(LANDING.to_vec())
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }
}

const LANDING: &[Slot] = &[
    text("nav.home", r##".nav-links a[href="#home"]"##),
    text("nav.services", r##".nav-links a[href="#services"]"##),
    text("nav.achievements", r##".nav-links a[href="#achievements"]"##),
    text("nav.features", r##".nav-links a[href="#features"]"##),
    text("nav.contact", r##".nav-links a[href="#contact"]"##),
    optional(text("hero.badge", ".hero .hero-badge")),
    text("hero.title", ".hero h1"),
    text("hero.subtitle", ".hero .hero-subtitle"),
    text("hero.cta_primary", ".hero .btn-primary"),
    optional(text("hero.cta_secondary", ".hero .btn-secondary")),
    text("services.title", "#services .section-title"),
    optional(text("services.subtitle", "#services .section-subtitle")),
    card("services.score.title", 0, ".service-title", Shape::Text),
    card("services.score.description", 0, ".service-description", Shape::Text),
    card("services.score.features", 0, ".service-features", TAGS),
    card("services.followers.title", 1, ".service-title", Shape::Text),
    card("services.followers.description", 1, ".service-description", Shape::Text),
    card("services.followers.features", 1, ".service-features", TAGS),
    card("services.views.title", 2, ".service-title", Shape::Text),
    card("services.views.description", 2, ".service-description", Shape::Text),
    card("services.views.features", 2, ".service-features", TAGS),
    text("achievements.title", "#achievements .section-title"),
    stat("achievements.clients", 0),
    stat("achievements.points", 1),
    stat("achievements.rating", 2),
    stat("achievements.support", 3),
    text("features.title", "#features .section-title"),
    panel("features.fast.title", 0, ".feature-title", Shape::Text),
    panel("features.fast.description", 0, ".feature-description", Shape::Text),
    panel("features.fast.items", 0, ".feature-list", Shape::BulletList),
    panel("features.safe.title", 1, ".feature-title", Shape::Text),
    panel("features.safe.description", 1, ".feature-description", Shape::Text),
    panel("features.safe.items", 1, ".feature-list", Shape::BulletList),
    panel("features.support.title", 2, ".feature-title", Shape::Text),
    panel("features.support.description", 2, ".feature-description", Shape::Text),
    panel("features.support.items", 2, ".feature-list", Shape::BulletList),
    optional(text("extras.title", ".extras .extras-title")),
    optional(text("extras.faq", r#".extras a[href="/faq"]"#)),
    optional(text("extras.privacy", r#".extras a[href="/privacy"]"#)),
    optional(text("extras.terms", r#".extras a[href="/terms"]"#)),
    optional(text("extras.contact", r#".extras a[href="mailto:support@snapboost.app"]"#)),
    optional(text("footer.tagline", "footer .footer-tagline")),
    text("footer.copyright", "footer .footer-copy"),
];
