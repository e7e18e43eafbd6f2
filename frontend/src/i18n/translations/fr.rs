use crate::i18n::dictionary::{Entries, TextValue::{Many, One}};

pub const ENTRIES: Entries = &[
    ("nav.home", One("Accueil")),
    ("nav.services", One("Services")),
    ("nav.achievements", One("Résultats")),
    ("nav.features", One("Pourquoi nous")),
    ("nav.contact", One("Contact")),
    ("hero.badge", One("Le service de croissance n° 1 pour Snapchat")),
    ("hero.title", One("Augmentez votre SnapScore et vos abonnés dès maintenant")),
    ("hero.subtitle", One("Une vraie croissance pour votre profil Snapchat, livrée en quelques minutes sans jamais demander votre mot de passe.")),
    ("hero.cta_primary", One("Commencer")),
    ("hero.cta_secondary", One("Voir nos services")),
    ("services.title", One("Nos services")),
    ("services.subtitle", One("Choisissez le boost adapté à vos objectifs.")),
    ("services.score.title", One("Boost de SnapScore")),
    ("services.score.description", One("Faites grimper votre score grâce à une activité sûre et progressive, parfaitement naturelle.")),
    ("services.score.features", Many(&["Livraison progressive", "Activité naturelle", "À partir de 10K points"])),
    ("services.followers.title", One("Abonnés")),
    ("services.followers.description", One("Développez votre audience avec des abonnés actifs qui regardent vraiment vos stories.")),
    ("services.followers.features", Many(&["Comptes actifs", "Aucune baisse", "Garantie de recharge"])),
    ("services.views.title", One("Vues de stories")),
    ("services.views.description", One("Attirez plus de regards sur chaque story et touchez plus de monde à chaque publication.")),
    ("services.views.features", Many(&["Démarrage immédiat", "Vues du monde entier", "N’importe quelle story"])),
    ("achievements.title", One("Des chiffres qui parlent d’eux-mêmes")),
    ("achievements.clients", One("Clients satisfaits")),
    ("achievements.points", One("Points livrés")),
    ("achievements.rating", One("Note moyenne")),
    ("achievements.support", One("Heures d’assistance")),
    ("features.title", One("Pourquoi choisir SnapBoost")),
    ("features.fast.title", One("Ultra rapide")),
    ("features.fast.description", One("Les commandes démarrent quelques minutes après le paiement.")),
    ("features.fast.items", Many(&["Traitement automatique", "Suivi de commande en direct", "Livraison en moins de 24 heures"])),
    ("features.safe.title", One("Sûr et confidentiel")),
    ("features.safe.description", One("Nous ne demandons jamais votre mot de passe ni vos données personnelles.")),
    ("features.safe.items", Many(&["Nom d’utilisateur uniquement", "Paiements chiffrés", "Facturation discrète"])),
    ("features.support.title", One("Toujours là pour vous")),
    ("features.support.description", One("Une vraie équipe répond à vos questions jour et nuit.")),
    ("features.support.items", Many(&["Chat en direct 24h/24 et 7j/7", "Réponses en quelques minutes", "Satisfait ou remboursé"])),
    ("extras.title", One("Plus")),
    ("extras.faq", One("FAQ")),
    ("extras.privacy", One("Politique de confidentialité")),
    ("extras.terms", One("Conditions d’utilisation")),
    ("extras.contact", One("Nous contacter")),
    ("footer.tagline", One("Grandissez plus vite sur Snapchat.")),
    ("footer.copyright", One("© {year} SnapBoost. Tous droits réservés.")),
];
