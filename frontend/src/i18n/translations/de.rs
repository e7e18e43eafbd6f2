use crate::i18n::dictionary::{Entries, TextValue::{Many, One}};

pub const ENTRIES: Entries = &[
    ("nav.home", One("Start")),
    ("nav.services", One("Leistungen")),
    ("nav.achievements", One("Ergebnisse")),
    ("nav.features", One("Warum wir")),
    ("nav.contact", One("Kontakt")),
    ("hero.badge", One("Der Nr. 1 Wachstumsservice für Snapchat")),
    ("hero.title", One("Steigere jetzt deinen SnapScore und deine Follower")),
    ("hero.subtitle", One("Echtes Wachstum für dein Snapchat-Profil, in Minuten geliefert und ohne jemals nach deinem Passwort zu fragen.")),
    ("hero.cta_primary", One("Jetzt starten")),
    ("hero.cta_secondary", One("Unsere Leistungen ansehen")),
    ("services.title", One("Unsere Leistungen")),
    ("services.subtitle", One("Wähle den Boost, der zu deinen Zielen passt.")),
    ("services.score.title", One("SnapScore-Boost")),
    ("services.score.description", One("Erhöhe deinen Score mit sicherer, schrittweiser Aktivität, die völlig natürlich wirkt.")),
    ("services.score.features", Many(&["Schrittweise Lieferung", "Natürliche Aktivität", "Ab 10K Punkten"])),
    ("services.followers.title", One("Follower")),
    ("services.followers.description", One("Vergrößere dein Publikum mit aktiven Followern, die deine Storys wirklich ansehen.")),
    ("services.followers.features", Many(&["Aktive Konten", "Kein Rückgang", "Nachfüllgarantie"])),
    ("services.views.title", One("Story-Aufrufe")),
    ("services.views.description", One("Mehr Blicke auf jede Story und mehr Reichweite mit jedem Beitrag.")),
    ("services.views.features", Many(&["Sofortiger Start", "Aufrufe weltweit", "Jede Story"])),
    ("achievements.title", One("Zahlen, die für sich sprechen")),
    ("achievements.clients", One("Zufriedene Kunden")),
    ("achievements.points", One("Gelieferte Punkte")),
    ("achievements.rating", One("Durchschnittliche Bewertung")),
    ("achievements.support", One("Stunden Support")),
    ("features.title", One("Warum SnapBoost")),
    ("features.fast.title", One("Blitzschnell")),
    ("features.fast.description", One("Bestellungen starten wenige Minuten nach der Zahlung.")),
    ("features.fast.items", Many(&["Automatische Abwicklung", "Live-Bestellverfolgung", "Lieferung in unter 24 Stunden"])),
    ("features.safe.title", One("Sicher und privat")),
    ("features.safe.description", One("Wir fragen nie nach deinem Passwort oder persönlichen Daten.")),
    ("features.safe.items", Many(&["Nur der Benutzername", "Verschlüsselte Zahlungen", "Diskrete Abrechnung"])),
    ("features.support.title", One("Immer für dich da")),
    ("features.support.description", One("Ein echtes Team beantwortet deine Fragen rund um die Uhr.")),
    ("features.support.items", Many(&["24/7 Live-Chat", "Antworten in Minuten", "Geld-zurück-Garantie"])),
    ("extras.title", One("Mehr")),
    ("extras.faq", One("Häufige Fragen")),
    ("extras.privacy", One("Datenschutz")),
    ("extras.terms", One("Nutzungsbedingungen")),
    ("extras.contact", One("Kontaktiere uns")),
    ("footer.tagline", One("Wachse schneller auf Snapchat.")),
    ("footer.copyright", One("© {year} SnapBoost. Alle Rechte vorbehalten.")),
];
