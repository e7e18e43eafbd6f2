use crate::i18n::dictionary::{Entries, TextValue::{Many, One}};

pub const ENTRIES: Entries = &[
    ("nav.home", One("الرئيسية")),
    ("nav.services", One("خدماتنا")),
    ("nav.achievements", One("النتائج")),
    ("nav.features", One("لماذا نحن")),
    ("nav.contact", One("تواصل معنا")),
    ("hero.badge", One("خدمة النمو رقم 1 على سناب شات")),
    ("hero.title", One("ارفع SnapScore الخاص بك وعدد متابعيك الآن")),
    ("hero.subtitle", One("نمو حقيقي لحسابك على سناب شات، يصلك خلال دقائق دون أن نطلب كلمة المرور أبدًا.")),
    ("hero.cta_primary", One("ابدأ الآن")),
    ("hero.cta_secondary", One("اطلع على خدماتنا")),
    ("services.title", One("خدماتنا")),
    ("services.subtitle", One("اختر الدفعة التي تناسب أهدافك.")),
    ("services.score.title", One("رفع SnapScore")),
    ("services.score.description", One("ارفع نقاطك بنشاط آمن وتدريجي يبدو طبيعيًا تمامًا.")),
    ("services.score.features", Many(&["تسليم تدريجي", "نشاط طبيعي", "ابتداءً من 10 آلاف نقطة"])),
    ("services.followers.title", One("المتابعون")),
    ("services.followers.description", One("وسّع جمهورك بمتابعين نشطين يشاهدون قصصك فعلًا.")),
    ("services.followers.features", Many(&["حسابات نشطة", "بدون نقص", "ضمان التعويض"])),
    ("services.views.title", One("مشاهدات القصص")),
    ("services.views.description", One("احصل على مزيد من المشاهدات لكل قصة ووصول أوسع مع كل منشور.")),
    ("services.views.features", Many(&["بدء فوري", "مشاهدات من حول العالم", "أي قصة"])),
    ("achievements.title", One("أرقام تتحدث عن نفسها")),
    ("achievements.clients", One("عملاء سعداء")),
    ("achievements.points", One("نقاط تم تسليمها")),
    ("achievements.rating", One("متوسط التقييم")),
    ("achievements.support", One("ساعات الدعم")),
    ("features.title", One("لماذا تختار SnapBoost")),
    ("features.fast.title", One("سريع كالبرق")),
    ("features.fast.description", One("تبدأ الطلبات خلال دقائق من الدفع.")),
    ("features.fast.items", Many(&["معالجة تلقائية", "تتبع مباشر للطلب", "تسليم في أقل من 24 ساعة"])),
    ("features.safe.title", One("آمن وخاص")),
    ("features.safe.description", One("لا نطلب أبدًا كلمة المرور أو بياناتك الشخصية.")),
    ("features.safe.items", Many(&["اسم المستخدم فقط", "مدفوعات مشفرة", "فواتير سرية"])),
    ("features.support.title", One("دائمًا بجانبك")),
    ("features.support.description", One("فريق حقيقي يجيب عن أسئلتك على مدار الساعة.")),
    ("features.support.items", Many(&["دردشة مباشرة 24/7", "ردود خلال دقائق", "ضمان استرداد الأموال"])),
    ("extras.title", One("المزيد")),
    ("extras.faq", One("الأسئلة الشائعة")),
    ("extras.privacy", One("سياسة الخصوصية")),
    ("extras.terms", One("شروط الخدمة")),
    ("extras.contact", One("اتصل بنا")),
    ("footer.tagline", One("انمُ أسرع على سناب شات.")),
    ("footer.copyright", One("© {year} SnapBoost. جميع الحقوق محفوظة.")),
];
