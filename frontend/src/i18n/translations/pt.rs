use crate::i18n::dictionary::{Entries, TextValue::{Many, One}};

pub const ENTRIES: Entries = &[
    ("nav.home", One("Início")),
    ("nav.services", One("Serviços")),
    ("nav.achievements", One("Resultados")),
    ("nav.features", One("Por que nós")),
    ("nav.contact", One("Contato")),
    ("hero.badge", One("O serviço de crescimento nº 1 para Snapchat")),
    ("hero.title", One("Aumente seu SnapScore e seus seguidores agora")),
    ("hero.subtitle", One("Crescimento real para o seu perfil do Snapchat, entregue em minutos e sem nunca pedir a sua senha.")),
    ("hero.cta_primary", One("Começar")),
    ("hero.cta_secondary", One("Ver nossos serviços")),
    ("services.title", One("Nossos serviços")),
    ("services.subtitle", One("Escolha o impulso que combina com seus objetivos.")),
    ("services.score.title", One("Impulso de SnapScore")),
    ("services.score.description", One("Aumente sua pontuação com atividade segura e gradual que parece totalmente natural.")),
    ("services.score.features", Many(&["Entrega gradual", "Atividade natural", "A partir de 10K pontos"])),
    ("services.followers.title", One("Seguidores")),
    ("services.followers.description", One("Aumente seu público com seguidores ativos que realmente assistem aos seus stories.")),
    ("services.followers.features", Many(&["Contas ativas", "Sem quedas", "Garantia de reposição"])),
    ("services.views.title", One("Visualizações de stories")),
    ("services.views.description", One("Tenha mais olhares em cada story e alcance mais pessoas a cada postagem.")),
    ("services.views.features", Many(&["Início imediato", "Visualizações do mundo todo", "Qualquer story"])),
    ("achievements.title", One("Números que falam por si")),
    ("achievements.clients", One("Clientes satisfeitos")),
    ("achievements.points", One("Pontos entregues")),
    ("achievements.rating", One("Avaliação média")),
    ("achievements.support", One("Horas de suporte")),
    ("features.title", One("Por que escolher a SnapBoost")),
    ("features.fast.title", One("Super rápido")),
    ("features.fast.description", One("Os pedidos começam poucos minutos após o pagamento.")),
    ("features.fast.items", Many(&["Processamento automático", "Acompanhamento do pedido ao vivo", "Entrega em menos de 24 horas"])),
    ("features.safe.title", One("Seguro e privado")),
    ("features.safe.description", One("Nunca pedimos sua senha nem dados pessoais.")),
    ("features.safe.items", Many(&["Apenas o nome de usuário", "Pagamentos criptografados", "Cobrança discreta"])),
    ("features.support.title", One("Sempre aqui por você")),
    ("features.support.description", One("Uma equipe de verdade responde suas dúvidas a qualquer hora.")),
    ("features.support.items", Many(&["Chat ao vivo 24/7", "Respostas em minutos", "Garantia de reembolso"])),
    ("extras.title", One("Mais")),
    ("extras.faq", One("Perguntas frequentes")),
    ("extras.privacy", One("Política de privacidade")),
    ("extras.terms", One("Termos de serviço")),
    ("extras.contact", One("Fale conosco")),
    ("footer.tagline", One("Cresça mais rápido no Snapchat.")),
    ("footer.copyright", One("© {year} SnapBoost. Todos os direitos reservados.")),
];
