use crate::i18n::dictionary::{Entries, TextValue::{Many, One}};

pub const ENTRIES: Entries = &[
    ("nav.home", One("Home")),
    ("nav.services", One("Servizi")),
    ("nav.achievements", One("Risultati")),
    ("nav.features", One("Perché noi")),
    ("nav.contact", One("Contatti")),
    ("hero.badge", One("Il servizio di crescita n. 1 per Snapchat")),
    ("hero.title", One("Aumenta ora il tuo SnapScore e i tuoi follower")),
    ("hero.subtitle", One("Crescita reale per il tuo profilo Snapchat, consegnata in pochi minuti senza mai chiederti la password.")),
    ("hero.cta_primary", One("Inizia ora")),
    ("hero.cta_secondary", One("Scopri i nostri servizi")),
    ("services.title", One("I nostri servizi")),
    ("services.subtitle", One("Scegli la spinta adatta ai tuoi obiettivi.")),
    ("services.score.title", One("Boost SnapScore")),
    ("services.score.description", One("Alza il tuo punteggio con un’attività sicura e graduale che sembra del tutto naturale.")),
    ("services.score.features", Many(&["Consegna graduale", "Attività naturale", "Da 10K punti"])),
    ("services.followers.title", One("Follower")),
    ("services.followers.description", One("Fai crescere il tuo pubblico con follower attivi che guardano davvero le tue storie.")),
    ("services.followers.features", Many(&["Account attivi", "Nessun calo", "Garanzia di ricarica"])),
    ("services.views.title", One("Visualizzazioni storie")),
    ("services.views.description", One("Più sguardi su ogni storia e più persone raggiunte con ogni post.")),
    ("services.views.features", Many(&["Avvio immediato", "Visualizzazioni da tutto il mondo", "Qualsiasi storia"])),
    ("achievements.title", One("Numeri che parlano da soli")),
    ("achievements.clients", One("Clienti soddisfatti")),
    ("achievements.points", One("Punti consegnati")),
    ("achievements.rating", One("Valutazione media")),
    ("achievements.support", One("Ore di assistenza")),
    ("features.title", One("Perché scegliere SnapBoost")),
    ("features.fast.title", One("Velocissimo")),
    ("features.fast.description", One("Gli ordini partono pochi minuti dopo il pagamento.")),
    ("features.fast.items", Many(&["Elaborazione automatica", "Tracciamento dell’ordine in tempo reale", "Consegna in meno di 24 ore"])),
    ("features.safe.title", One("Sicuro e riservato")),
    ("features.safe.description", One("Non chiediamo mai la tua password né i tuoi dati personali.")),
    ("features.safe.items", Many(&["Solo il nome utente", "Pagamenti crittografati", "Fatturazione discreta"])),
    ("features.support.title", One("Sempre al tuo fianco")),
    ("features.support.description", One("Un vero team risponde alle tue domande a qualsiasi ora.")),
    ("features.support.items", Many(&["Chat dal vivo 24/7", "Risposte in pochi minuti", "Soddisfatti o rimborsati"])),
    ("extras.title", One("Altro")),
    ("extras.faq", One("Domande frequenti")),
    ("extras.privacy", One("Informativa sulla privacy")),
    ("extras.terms", One("Termini di servizio")),
    ("extras.contact", One("Contattaci")),
    ("footer.tagline", One("Cresci più in fretta su Snapchat.")),
    ("footer.copyright", One("© {year} SnapBoost. Tutti i diritti riservati.")),
];
