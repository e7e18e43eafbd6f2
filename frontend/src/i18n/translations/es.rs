use crate::i18n::dictionary::{Entries, TextValue::{Many, One}};

pub const ENTRIES: Entries = &[
    ("nav.home", One("Inicio")),
    ("nav.services", One("Servicios")),
    ("nav.achievements", One("Resultados")),
    ("nav.features", One("Por qué nosotros")),
    ("nav.contact", One("Contacto")),
    ("hero.badge", One("El servicio de crecimiento n.º 1 para Snapchat")),
    ("hero.title", One("Aumenta tu SnapScore y tus seguidores ahora")),
    ("hero.subtitle", One("Crecimiento real para tu perfil de Snapchat, entregado en minutos y sin pedirte nunca la contraseña.")),
    ("hero.cta_primary", One("Empezar")),
    ("hero.cta_secondary", One("Ver nuestros servicios")),
    ("services.title", One("Nuestros servicios")),
    ("services.subtitle", One("Elige el impulso que se ajusta a tus objetivos.")),
    ("services.score.title", One("Impulso de SnapScore")),
    ("services.score.description", One("Sube tu puntuación con actividad segura y gradual que parece totalmente natural.")),
    ("services.score.features", Many(&["Entrega gradual", "Actividad natural", "Desde 10K puntos"])),
    ("services.followers.title", One("Seguidores")),
    ("services.followers.description", One("Haz crecer tu audiencia con seguidores activos que de verdad ven tus historias.")),
    ("services.followers.features", Many(&["Cuentas activas", "Sin bajadas", "Garantía de reposición"])),
    ("services.views.title", One("Vistas de historias")),
    ("services.views.description", One("Consigue más miradas en cada historia y llega a más gente con cada publicación.")),
    ("services.views.features", Many(&["Inicio inmediato", "Vistas de todo el mundo", "Cualquier historia"])),
    ("achievements.title", One("Cifras que hablan por sí solas")),
    ("achievements.clients", One("Clientes satisfechos")),
    ("achievements.points", One("Puntos entregados")),
    ("achievements.rating", One("Valoración media")),
    ("achievements.support", One("Horas de soporte")),
    ("features.title", One("Por qué elegir SnapBoost")),
    ("features.fast.title", One("Rapidísimo")),
    ("features.fast.description", One("Los pedidos empiezan a los pocos minutos del pago.")),
    ("features.fast.items", Many(&["Procesamiento automático", "Seguimiento del pedido en directo", "Entrega en menos de 24 horas"])),
    ("features.safe.title", One("Seguro y privado")),
    ("features.safe.description", One("Nunca te pedimos la contraseña ni datos personales.")),
    ("features.safe.items", Many(&["Solo tu nombre de usuario", "Pagos cifrados", "Facturación discreta"])),
    ("features.support.title", One("Siempre a tu lado")),
    ("features.support.description", One("Un equipo real responde tus preguntas a cualquier hora.")),
    ("features.support.items", Many(&["Chat en vivo 24/7", "Respuestas en minutos", "Garantía de devolución"])),
    ("extras.title", One("Más")),
    ("extras.faq", One("Preguntas frecuentes")),
    ("extras.privacy", One("Política de privacidad")),
    ("extras.terms", One("Términos del servicio")),
    ("extras.contact", One("Contáctanos")),
    ("footer.tagline", One("Crece más rápido en Snapchat.")),
    ("footer.copyright", One("© {year} SnapBoost. Todos los derechos reservados.")),
];
