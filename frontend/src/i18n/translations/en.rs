use crate::i18n::dictionary::{Entries, TextValue::{Many, One}};

pub const ENTRIES: Entries = &[
    ("nav.home", One("Home")),
    ("nav.services", One("Services")),
    ("nav.achievements", One("Results")),
    ("nav.features", One("Why us")),
    ("nav.contact", One("Contact")),
    ("hero.badge", One("#1 Snapchat growth service")),
    ("hero.title", One("Boost your SnapScore and followers now")),
    ("hero.subtitle", One("Real growth for your Snapchat profile, delivered in minutes without ever asking for your password.")),
    ("hero.cta_primary", One("Get started")),
    ("hero.cta_secondary", One("See our services")),
    ("services.title", One("Our services")),
    ("services.subtitle", One("Pick the boost that fits your goals.")),
    ("services.score.title", One("SnapScore boost")),
    ("services.score.description", One("Raise your score with safe, gradual activity that looks completely natural.")),
    ("services.score.features", Many(&["Gradual delivery", "Natural activity", "From 10K points"])),
    ("services.followers.title", One("Followers")),
    ("services.followers.description", One("Grow your audience with active followers who actually watch your stories.")),
    ("services.followers.features", Many(&["Active accounts", "No drops", "Refill guarantee"])),
    ("services.views.title", One("Story views")),
    ("services.views.description", One("Get more eyes on every story and reach more people with each post.")),
    ("services.views.features", Many(&["Instant start", "Worldwide views", "Any story"])),
    ("achievements.title", One("Numbers that speak for themselves")),
    ("achievements.clients", One("Happy clients")),
    ("achievements.points", One("Points delivered")),
    ("achievements.rating", One("Average rating")),
    ("achievements.support", One("Hours of support")),
    ("features.title", One("Why choose SnapBoost")),
    ("features.fast.title", One("Lightning fast")),
    ("features.fast.description", One("Orders start within minutes of payment.")),
    ("features.fast.items", Many(&["Automatic processing", "Live order tracking", "Delivery in under 24 hours"])),
    ("features.safe.title", One("Safe and private")),
    ("features.safe.description", One("We never ask for your password or personal data.")),
    ("features.safe.items", Many(&["Username only", "Encrypted payments", "Discreet billing"])),
    ("features.support.title", One("Always here for you")),
    ("features.support.description", One("A real team answers your questions around the clock.")),
    ("features.support.items", Many(&["24/7 live chat", "Replies in minutes", "Money-back guarantee"])),
    ("extras.title", One("More")),
    ("extras.faq", One("FAQ")),
    ("extras.privacy", One("Privacy policy")),
    ("extras.terms", One("Terms of service")),
    ("extras.contact", One("Contact us")),
    ("footer.tagline", One("Grow faster on Snapchat.")),
    ("footer.copyright", One("© {year} SnapBoost. All rights reserved.")),
];
