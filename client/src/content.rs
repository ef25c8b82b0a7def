//! Static page copy (Turkish, single locale).

pub const OWNER_NAME: &str = "Ahmet Yılmaz";
pub const PAGE_TITLE: &str = "Ahmet Yılmaz | Profesyonel Web Geliştirici";

pub const HERO_TITLE: &str = "Profesyonel Web Geliştirici";
pub const HERO_SUBTITLE: &str = "Modern web çözümleri ile işletmenizi bir sonraki seviyeye taşıyorum";
pub const HERO_CTA: &str = "Hemen İletişime Geçin";

pub const ABOUT_HEADING: &str = "Ben Kimim?";
pub const ABOUT_BODY: &str = "5 yılı aşkın süredir web geliştirme alanında profesyonel olarak çalışıyorum. \
Modern teknolojiler ve en iyi uygulamaları kullanarak müşterilerime en kaliteli çözümleri sunuyorum.";
pub const SKILLS: [&str; 5] = ["React", "TypeScript", "Tailwind CSS", "Node.js", "MongoDB"];
pub const PORTRAIT_PROMPT: &str = "Professional web developer portrait with modern office background";
pub const PORTRAIT_SIZE: u32 = 400;

pub const PRODUCTS_HEADING: &str = "Hizmetlerim";
pub const PRODUCT_IMAGE_WIDTH: u32 = 300;
pub const PRODUCT_IMAGE_HEIGHT: u32 = 200;
pub const BUY_LABEL: &str = "Satın Al";

pub const CONTACT_HEADING: &str = "İletişim";
pub const CONTACT_CARD_TITLE: &str = "Bana Ulaşın";
pub const CONTACT_CARD_SUBTITLE: &str = "Projeleriniz hakkında konuşalım";
pub const MESSAGE_ROWS: &str = "5";
pub const SUBMIT_LABEL: &str = "Gönder";

pub const DIRECT_CONTACT_HEADING: &str = "Doğrudan İletişim";
pub const DIRECT_CONTACT_LINES: [&str; 3] = ["📧 info@ahmetyilmaz.com", "📞 +90 555 123 45 67", "📍 İstanbul, Türkiye"];

pub const SOCIAL_LINKS: [&str; 4] = ["Twitter", "LinkedIn", "GitHub", "Instagram"];
pub const COPYRIGHT: &str = "© 2024 Ahmet Yılmaz. Tüm hakları saklıdır.";
