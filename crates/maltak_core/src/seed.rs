//! Built-in dataset loaded at startup.
//!
//! Seeding goes through the ordinary `create_*` operations in a fixed
//! order (categories, the admin user, articles, tools, news), so the
//! identities it produces are the same on every run.

use crate::entity::{Category, EntityId, NewArticle, NewCategory, NewNews, NewTool, NewUser};
use crate::store::ContentStore;
use chrono::Utc;

/// Slug of the first seeded article.
pub const FIRST_ARTICLE_SLUG: &str = "how-to-start-investing-in-arab-stock-markets";

fn categories() -> Vec<NewCategory> {
    [
        ("الاستثمار", "investing", "نصائح وإرشادات للاستثمار في مختلف المجالات", "chart-line"),
        ("التوفير", "savings", "استراتيجيات للتوفير وإدارة المصاريف", "piggy-bank"),
        ("التكنولوجيا المالية", "fintech", "أحدث التطورات في مجال التكنولوجيا المالية", "mobile-alt"),
        ("العملات الرقمية", "crypto", "كل ما يتعلق بالعملات الرقمية والبلوكتشين", "coins"),
        ("العقارات", "realestate", "الاستثمار العقاري والتمويل العقاري", "home"),
        ("التخطيط المالي", "planning", "التخطيط المالي للمستقبل والتقاعد", "map"),
    ]
    .into_iter()
    .map(|(name, slug, description, icon)| NewCategory {
        name: name.into(),
        slug: slug.into(),
        description: Some(description.into()),
        icon: Some(icon.into()),
    })
    .collect()
}

fn admin() -> NewUser {
    NewUser {
        username: "admin".into(),
        password: "adminpassword".into(),
        email: "admin@maltak.com".into(),
        full_name: "أحمد الشريف".into(),
        avatar: Some("https://randomuser.me/api/portraits/men/1.jpg".into()),
        role: Some("admin".into()),
    }
}

/// One seeded article, referencing its category by position in
/// [`categories`].
struct ArticleSeed {
    title: &'static str,
    slug: &'static str,
    excerpt: &'static str,
    content: &'static str,
    image: &'static str,
    category_index: usize,
    reading_time: u32,
    views: u64,
    featured: bool,
}

const ARTICLES: [ArticleSeed; 6] = [
    ArticleSeed {
        title: "كيف تبدأ رحلة الاستثمار الخاصة بك في سوق الأسهم العربية",
        slug: FIRST_ARTICLE_SLUG,
        excerpt: "دليل شامل للمبتدئين لفهم أساسيات التداول، واختيار المنصات المناسبة، وبناء محفظة استثمارية متوازنة تناسب أهدافك المالية.",
        content: "## مقدمة في الاستثمار\n\nيعتبر الاستثمار في الأسهم من أكثر الطرق فعالية لتنمية الثروة على المدى الطويل. ولكن قبل أن تبدأ، يجب أن تفهم الأساسيات...",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=500&q=80",
        category_index: 0,
        reading_time: 12,
        views: 1500,
        featured: true,
    },
    ArticleSeed {
        title: "أفضل 5 تطبيقات للميزانية والادخار في 2023",
        slug: "best-5-budgeting-apps-2023",
        excerpt: "اكتشف أحدث التطبيقات التي تساعدك على تتبع مصاريفك وتحقيق أهدافك المالية بسهولة من هاتفك.",
        content: "## أهمية إدارة الميزانية الشخصية\n\nتعتبر إدارة الميزانية الشخصية الخطوة الأولى نحو الاستقرار المالي...",
        image: "https://images.unsplash.com/photo-1591696205602-2f950c417cb9?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&h=300&q=80",
        category_index: 2,
        reading_time: 5,
        views: 800,
        featured: false,
    },
    ArticleSeed {
        title: "دليل الصناديق الاستثمارية: كيف تختار الصندوق المناسب؟",
        slug: "investment-funds-guide",
        excerpt: "شرح مفصل لأنواع الصناديق الاستثمارية المتاحة في المنطقة العربية وكيفية اختيار ما يناسب أهدافك المالية.",
        content: "## أنواع الصناديق الاستثمارية\n\nتتنوع الصناديق الاستثمارية لتشمل صناديق الأسهم، وصناديق السندات، والصناديق المختلطة...",
        image: "https://images.unsplash.com/photo-1565514020179-026b92b2ed86?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&h=300&q=80",
        category_index: 0,
        reading_time: 8,
        views: 650,
        featured: false,
    },
    ArticleSeed {
        title: "مستقبل العملات الرقمية في العالم العربي",
        slug: "future-of-cryptocurrencies-in-arab-world",
        excerpt: "نظرة على تطور البلوكتشين والعملات الرقمية في الدول العربية والفرص المتاحة للمستثمرين.",
        content: "## تطور العملات الرقمية\n\nشهدت السنوات الأخيرة تطوراً ملحوظاً في تقنية البلوكتشين والعملات الرقمية في المنطقة العربية...",
        image: "https://images.unsplash.com/photo-1544377193-33dcf4d68fb5?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&h=300&q=80",
        category_index: 3,
        reading_time: 10,
        views: 1200,
        featured: false,
    },
    ArticleSeed {
        title: "خطة مالية لتحقيق الاستقلال المالي قبل سن الأربعين",
        slug: "financial-plan-for-independence-before-40",
        excerpt: "استراتيجيات عملية للاستثمار والادخار تمكنك من تحقيق الحرية المالية مبكراً.",
        content: "## ما هو الاستقلال المالي؟\n\nالاستقلال المالي هو الوصول إلى مرحلة لا تحتاج فيها إلى العمل للحصول على المال...",
        image: "https://images.unsplash.com/photo-1579532537598-459ecdaf39cc?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&h=300&q=80",
        category_index: 5,
        reading_time: 12,
        views: 15200,
        featured: false,
    },
    ArticleSeed {
        title: "دليل المبتدئين الشامل للاستثمار في العملات الرقمية",
        slug: "complete-beginners-guide-to-cryptocurrency-investment",
        excerpt: "كل ما تحتاج معرفته لبدء الاستثمار في البيتكوين والعملات الرقمية الأخرى بأمان.",
        content: "## مقدمة إلى العملات الرقمية\n\nالعملات الرقمية هي أصول رقمية مصممة للعمل كوسيلة للتبادل باستخدام التشفير...",
        image: "https://images.unsplash.com/photo-1607270788732-55d57ac2f424?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&h=300&q=80",
        category_index: 3,
        reading_time: 18,
        views: 12750,
        featured: false,
    },
];

fn tools() -> Vec<NewTool> {
    [
        (
            "حاسبة القروض",
            "loan-calculator",
            "حساب الأقساط الشهرية وإجمالي الفوائد على القروض الشخصية والعقارية.",
            "calculator",
            "calculator",
        ),
        (
            "حاسبة التوفير",
            "savings-calculator",
            "تخطيط أهداف التوفير وحساب المبلغ المطلوب توفيره شهرياً لتحقيق هدفك.",
            "piggy-bank",
            "calculator",
        ),
        (
            "مخطط الميزانية",
            "budget-planner",
            "إنشاء ميزانية شهرية متوازنة تساعدك على تنظيم مصاريفك وتحقيق أهدافك المالية.",
            "chart-pie",
            "planner",
        ),
    ]
    .into_iter()
    .map(|(name, slug, description, icon, kind)| NewTool {
        name: name.into(),
        slug: slug.into(),
        description: description.into(),
        icon: icon.into(),
        kind: kind.into(),
    })
    .collect()
}

fn news() -> Vec<NewNews> {
    [
        (
            "البنك المركزي يخفض أسعار الفائدة بنسبة 0.25%",
            "وكالة الأنباء الاقتصادية",
            "أعلن البنك المركزي اليوم عن خفض سعر الفائدة الرئيسي بنسبة 0.25% في خطوة تهدف إلى تحفيز النمو الاقتصادي.",
        ),
        (
            "ارتفاع مؤشر سوق الأسهم بنسبة 1.2% في ختام التعاملات",
            "بورصة الأوراق المالية",
            "ارتفع المؤشر العام للسوق بنسبة 1.2% في ختام جلسة اليوم، مدفوعاً بأداء قوي لقطاعي البنوك والاتصالات.",
        ),
        (
            "إطلاق صندوق استثماري جديد بقيمة 500 مليون ريال",
            "شركة الاستثمارات المالية",
            "أعلنت شركة الاستثمارات المالية عن إطلاق صندوق استثماري جديد يستهدف قطاع التكنولوجيا برأس مال قدره 500 مليون ريال.",
        ),
    ]
    .into_iter()
    .map(|(title, source, content)| NewNews {
        title: title.into(),
        source: source.into(),
        content: content.into(),
    })
    .collect()
}

/// Loads the built-in dataset into `store`.
///
/// Meant for a freshly created store; `ContentStore::open` calls it once
/// when `seed_on_open` is set. All seeded articles share one publication
/// instant.
pub fn seed(store: &ContentStore) {
    let categories: Vec<Category> = categories()
        .into_iter()
        .map(|c| store.create_category(c))
        .collect();

    let author = store.create_user(admin());

    let published_at = Utc::now();
    for entry in &ARTICLES {
        let category_id = categories
            .get(entry.category_index)
            .map_or(EntityId::default(), |c| c.id);
        store.create_article(
            NewArticle::new(
                entry.title,
                entry.slug,
                entry.excerpt,
                entry.content,
                author.id,
                category_id,
            )
            .featured_image(entry.image)
            .reading_time(entry.reading_time)
            .views(entry.views)
            .featured(entry.featured)
            .published_at(published_at),
        );
    }

    for tool in tools() {
        store.create_tool(tool);
    }
    for item in news() {
        store.create_news(item);
    }

    store.log_seeded();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, TableCounts};

    fn seeded() -> ContentStore {
        let store = ContentStore::new(Config::default().seed_on_open(false));
        seed(&store);
        store
    }

    #[test]
    fn seed_counts() {
        assert_eq!(
            seeded().counts(),
            TableCounts {
                users: 1,
                categories: 6,
                articles: 6,
                comments: 0,
                tools: 3,
                subscriptions: 0,
                news: 3,
            }
        );
    }

    #[test]
    fn seed_identities_follow_order() {
        let store = seeded();
        let investing = store.get_category_by_slug("investing").unwrap();
        let planning = store.get_category_by_slug("planning").unwrap();
        assert_eq!(investing.id, EntityId::new(1));
        assert_eq!(planning.id, EntityId::new(6));

        let first = store.get_article_by_slug(FIRST_ARTICLE_SLUG).unwrap();
        assert_eq!(first.id, EntityId::new(1));
        assert_eq!(first.author_id, EntityId::new(1));
        assert_eq!(first.category_id, investing.id);
        assert!(first.is_featured);
    }

    #[test]
    fn seeded_articles_share_publication_time() {
        let store = seeded();
        let articles = store.list_articles(crate::Page::limit(10));
        assert!(articles
            .windows(2)
            .all(|w| w[0].published_at == w[1].published_at));
    }

    #[test]
    fn every_seeded_article_joins() {
        let store = seeded();
        assert_eq!(
            store
                .list_articles_with_relations(crate::Page::limit(10))
                .unwrap()
                .len(),
            6
        );
    }
}
