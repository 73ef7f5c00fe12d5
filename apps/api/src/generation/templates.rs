//! Pre-authored text pools for the strategy composer.
//!
//! Templates use `{placeholder}` slots filled by [`fill`]. Every pool is an
//! exhaustive `match` over a closed vocabulary. The one exception is
//! [`tailored_pillar_ideas`], an optional override table whose catch-all arm
//! means "use the generic pool".

use crate::profile::vocabulary::{GoalId, IndustryKind, Pillar, Tone};

/// Substitutes `{key}` slots in a template in one left-to-right pass.
/// Inserted values are copied verbatim and never scanned for slots, so
/// braces in user text survive. Unknown slots are left as written.
pub fn fill(template: &str, slots: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let key = &after[..close];
        match slots.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[open..open + close + 2]),
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Positioning
// ────────────────────────────────────────────────────────────────────────────

pub const STRENGTH_FALLBACK: &str = "تجربه\u{200c}ای متمایز و قابل اعتماد";

pub fn positioning_template(tone: Tone) -> &'static str {
    match tone {
        Tone::Professional => {
            "{brand} برای {audience} در حوزه {industry} انتخابی مطمئن و تخصصی است؛ با تکیه بر {strength}."
        }
        Tone::Friendly => {
            "{brand} همراه صمیمی {audience} در دنیای {industry} است؛ جایی که {strength} حس می\u{200c}شود."
        }
        Tone::Formal => {
            "{brand} با اتکا به {strength}، راهکاری معتبر و استاندارد در صنعت {industry} برای {audience} ارائه می\u{200c}کند."
        }
        Tone::Inspirational => {
            "{brand} به {audience} نشان می\u{200c}دهد در {industry} چه چیزی ممکن است؛ با {strength} به عنوان نقطه شروع."
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Audience insights
// ────────────────────────────────────────────────────────────────────────────

pub const AUDIENCE_INSIGHTS: [&str; 2] = [
    "{audience} پیش از تصمیم در {industry} به دنبال شواهد ملموس و تجربه واقعی دیگران هستند.",
    "محتوای کوتاه و کاربردی که یک مسئله مشخص {audience} را حل کند، بیشترین ذخیره و اشتراک\u{200c}گذاری را می\u{200c}گیرد.",
];

pub const AUDIENCE_VALUES_INSIGHT: &str =
    "{audience} با برندی در {industry} ارتباط می\u{200c}گیرند که ارزش\u{200c}ها و داستان پشت محصول را شفاف نشان دهد.";

pub const AUDIENCE_WEAKNESS_INSIGHT: &str =
    "برای خنثی کردن «{weakness}»، به طور منظم پاسخی شفاف و مستند به همین نگرانی را در محتوای مخصوص {audience} قرار دهید.";

// ────────────────────────────────────────────────────────────────────────────
// Tone guidelines
// ────────────────────────────────────────────────────────────────────────────

pub fn tone_guidelines(tone: Tone) -> &'static str {
    match tone {
        Tone::Professional => {
            "جملات کوتاه و دقیق، داده\u{200c}محور و بدون اغراق بنویسید؛ از اصطلاحات تخصصی فقط همراه با توضیح ساده استفاده کنید."
        }
        Tone::Friendly => {
            "مثل یک دوست آگاه صحبت کنید؛ مخاطب را با «تو» یا «شما»ی گرم خطاب کنید، از ایموجی کنترل\u{200c}شده و پرسش\u{200c}های باز بهره ببرید."
        }
        Tone::Formal => {
            "ساختار رسمی، واژگان استاندارد و ارجاع به منابع معتبر را حفظ کنید؛ از شوخی، محاوره و ایموجی پرهیز شود."
        }
        Tone::Inspirational => {
            "با داستان تحول و تصویرسازی از آینده شروع کنید؛ فعل\u{200c}های پرانرژی و جمع\u{200c}بندی انگیزشی در پایان هر پست بیاورید."
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pillar ideas
// ────────────────────────────────────────────────────────────────────────────

/// Generic ideas per pillar, parameterized with `{industry}` and `{audience}`.
pub fn generic_pillar_ideas(pillar: Pillar) -> [&'static str; 3] {
    match pillar {
        Pillar::Educational => [
            "راهنمای گام\u{200c}به\u{200c}گام حل رایج\u{200c}ترین مشکل {audience} در {industry}",
            "۵ اشتباه پرتکرار در {industry} و راه جلوگیری از آن\u{200c}ها",
            "اسطوره\u{200c}شکنی: باورهای غلط درباره {industry} در قالب کاروسل",
        ],
        Pillar::Inspirational => [
            "داستان تحول یک مشتری واقعی از شروع تا نتیجه در {industry}",
            "نقل\u{200c}قول هفتگی همراه با روایت کوتاه از مسیر برند",
            "چالش ۳۰ روزه برای {audience} با پیگیری پیشرفت در استوری",
        ],
        Pillar::BehindTheScenes => [
            "یک روز کاری تیم از صبح تا شب در قالب ریلز سریع",
            "فرایند ساخت یا آماده\u{200c}سازی محصول در {industry} بدون سانسور",
            "معرفی اعضای تیم و دلیل علاقه\u{200c}شان به {industry}",
        ],
        Pillar::SocialProof => [
            "بازنشر نظر و ویدیوی مشتریان با برچسب رضایت",
            "مطالعه موردی: عدد قبل و بعد از همکاری با برند",
            "ویترین پیام\u{200c}ها و دایرکت\u{200c}های مثبت {audience} (با اجازه)",
        ],
        Pillar::Strategic => [
            "تحلیل روندهای فصل جاری {industry} و موضع برند نسبت به آن\u{200c}ها",
            "مقایسه شفاف رویکرد برند با گزینه\u{200c}های رایج بازار",
            "نقشه راه و برنامه\u{200c}های آینده برند برای {audience}",
        ],
    }
}

/// Tailored ideas for pillar/industry combinations that have them.
pub fn tailored_pillar_ideas(pillar: Pillar, industry: IndustryKind) -> Option<[&'static str; 3]> {
    let ideas = match (pillar, industry) {
        (Pillar::Educational, IndustryKind::Fitness) => [
            "فرم صحیح ۳ حرکت پایه با اشتباهات رایج برای {audience}",
            "برنامه تمرین ۲۰ دقیقه\u{200c}ای خانگی قابل ذخیره",
            "تغذیه قبل و بعد از تمرین به زبان ساده",
        ],
        (Pillar::SocialProof, IndustryKind::Fitness) => [
            "عکس و روایت قبل/بعد اعضا با ذکر مدت زمان تمرین",
            "ویدیوی کوتاه از رکورد شکنی یکی از اعضا",
            "نظرسنجی رضایت ماهانه و انتشار نتایج",
        ],
        (Pillar::Educational, IndustryKind::Food) => [
            "دستور تهیه سریع یک آیتم پرفروش منو",
            "راهنمای انتخاب مواد اولیه تازه برای {audience}",
            "ترکیب\u{200c}های پیشنهادی غذا و نوشیدنی",
        ],
        (Pillar::BehindTheScenes, IndustryKind::Food) => [
            "آماده\u{200c}سازی آشپزخانه پیش از باز شدن در",
            "مسیر تامین مواد اولیه از تامین\u{200c}کننده تا بشقاب",
            "لحظات شلوغ سرویس از نگاه سرآشپز",
        ],
        (Pillar::Inspirational, IndustryKind::Fashion) => [
            "استایل\u{200c}سازی یک آیتم در ۳ موقعیت مختلف",
            "داستان الهام طراحی کالکشن جدید",
            "استایل واقعی مشتریان با محصولات برند",
        ],
        (Pillar::Educational, IndustryKind::Beauty) => [
            "روتین مراقبتی صبح و شب برای انواع پوست",
            "ترکیبات فعال محصولات به زبان ساده",
            "اشتباهات رایج {audience} در استفاده از محصولات زیبایی",
        ],
        (Pillar::Educational, IndustryKind::Technology) => [
            "آموزش ویژگی کلیدی محصول در ۶۰ ثانیه",
            "مقایسه گردش کار دستی و خودکار با عدد و زمان",
            "پاسخ به پرتکرارترین سوال فنی {audience}",
        ],
        (Pillar::SocialProof, IndustryKind::Technology) => [
            "مطالعه موردی مشتری با شاخص\u{200c}های قبل و بعد",
            "ویدیوی کوتاه از تجربه استفاده یک کاربر واقعی",
            "نمایش لوگو و نظر مشتریان سازمانی",
        ],
        (Pillar::Strategic, IndustryKind::Education) => [
            "مسیر یادگیری پیشنهادی برای {audience} از مبتدی تا حرفه\u{200c}ای",
            "تحلیل مهارت\u{200c}های پرتقاضای بازار کار امسال",
            "مقایسه روش\u{200c}های یادگیری حضوری و آنلاین",
        ],
        _ => return None,
    };
    Some(ideas)
}

// ────────────────────────────────────────────────────────────────────────────
// Campaigns
// ────────────────────────────────────────────────────────────────────────────

/// The campaign a selected goal unlocks.
pub fn goal_campaign(goal: GoalId) -> &'static str {
    match goal {
        GoalId::BrandAwareness => {
            "چالش ۷ روزه «{brand} در {industry}» با همکاری ۳ اینفلوئنسر خرد برای دیده شدن میان {audience}"
        }
        GoalId::LeadGeneration => {
            "وبینار رایگان یا چک\u{200c}لیست دانلودی برای {audience} در ازای ثبت ایمیل یا شماره تماس"
        }
        GoalId::Sales => {
            "کمپین تخفیف محدود ۷۲ ساعته با شمارش معکوس در استوری و پیشنهاد ویژه اولین خرید"
        }
        GoalId::Community => {
            "کمپین محتوای کاربرساز (UGC) با هشتگ اختصاصی و بازنشر بهترین تجربه\u{200c}های مشتریان"
        }
    }
}

/// Goal-independent campaigns, in the order they pad the list. The first one
/// is the awareness floor that every plan can fall back on.
pub const GENERIC_CAMPAIGNS: [&str; 3] = [
    "کمپین آگاهی «داستان {brand}» با سری ریلز معرفی تیم، ارزش\u{200c}ها و تفاوت\u{200c}ها",
    "لایو پرسش و پاسخ ماهانه با یک متخصص {industry} برای پاسخ به سوالات پرتکرار",
    "همکاری متقابل (co-marketing) با یک برند مکمل در {industry}",
];

// ────────────────────────────────────────────────────────────────────────────
// Goal action steps
// ────────────────────────────────────────────────────────────────────────────

/// Action steps per goal, parameterized with `{industry}`, `{audience}` and
/// `{pillar}` (the profile's first pillar).
pub fn goal_steps(goal: GoalId) -> &'static [&'static str] {
    match goal {
        GoalId::BrandAwareness => &[
            "هفته\u{200c}ای ۳ ریلز با هوک ۳ ثانیه\u{200c}ای درباره {industry} منتشر کنید.",
            "با ۲ صفحه هم\u{200c}مخاطب برای پست یا لایو مشترک هماهنگ کنید.",
            "نرخ دسترسی و ذخیره را هفتگی پایش کرده و پست\u{200c}های برتر ستون «{pillar}» را تبلیغ کنید.",
        ],
        GoalId::LeadGeneration => &[
            "یک لید مگنت (چک\u{200c}لیست، کتابچه یا مشاوره رایگان) متناسب با نیاز {audience} بسازید.",
            "لینک ثبت\u{200c}نام را در بیو و استوری\u{200c}های هایلایت قرار دهید.",
            "برای هر لید ظرف ۲۴ ساعت پیام پیگیری شخصی ارسال کنید.",
            "نرخ تبدیل بازدید به ثبت\u{200c}نام را هر دو هفته بررسی کنید.",
        ],
        GoalId::Sales => &[
            "صفحه محصول پرفروش را با نظرات مشتریان و پاسخ به اعتراضات رایج تکمیل کنید.",
            "هر هفته یک پیشنهاد زمان\u{200c}دار با CTA مستقیم خرید منتشر کنید.",
            "سبدهای رهاشده و دایرکت\u{200c}های بی\u{200c}پاسخ را روزانه پیگیری کنید.",
        ],
        GoalId::Community => &[
            "هر هفته یک پرسش باز یا نظرسنجی برای {audience} منتشر کنید.",
            "ماهانه از فعال\u{200c}ترین اعضا با معرفی در استوری قدردانی کنید.",
            "یک گروه یا کانال اختصاصی برای مشتریان وفادار راه\u{200c}اندازی کنید.",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_replaces_every_occurrence() {
        let out = fill("{a} و {a} با {b}", &[("a", "x"), ("b", "y")]);
        assert_eq!(out, "x و x با y");
    }

    #[test]
    fn test_fill_leaves_unknown_slots() {
        assert_eq!(fill("{missing}", &[("a", "x")]), "{missing}");
        assert_eq!(fill("open { only", &[("a", "x")]), "open { only");
    }

    #[test]
    fn test_fill_does_not_rescan_inserted_values() {
        let out = fill(
            "{brand} برای {audience}",
            &[("brand", "Acme {audience}"), ("audience", "Women 25-34")],
        );
        assert_eq!(out, "Acme {audience} برای Women 25-34");
    }

    #[test]
    fn test_fill_later_slot_text_in_earlier_value() {
        let out = fill("{a}|{b}", &[("a", "{b}{a}"), ("b", "y")]);
        assert_eq!(out, "{b}{a}|y");
    }

    #[test]
    fn test_every_goal_has_two_to_four_steps() {
        for goal in GoalId::ALL {
            let steps = goal_steps(goal);
            assert!(
                (2..=4).contains(&steps.len()),
                "{goal:?} has {} steps",
                steps.len()
            );
        }
    }

    #[test]
    fn test_every_tone_has_positioning_with_all_slots() {
        for tone in Tone::ALL {
            let template = positioning_template(tone);
            for slot in ["{brand}", "{audience}", "{industry}", "{strength}"] {
                assert!(template.contains(slot), "{tone:?} lacks {slot}");
            }
        }
    }

    #[test]
    fn test_general_industry_has_no_tailored_pool() {
        for pillar in Pillar::ALL {
            assert!(tailored_pillar_ideas(pillar, IndustryKind::General).is_none());
        }
    }
}
