//! Insight Generator — recurring growth actions for the team.
//!
//! Order is fixed: operating cadence first, then pillar mix, voice, goal
//! focus and weakness monitoring when they apply, reporting last.

use crate::generation::templates::fill;
use crate::profile::models::BrandProfile;
use crate::profile::vocabulary::Tone;

const CADENCE_INSIGHTS: [&str; 2] = [
    "هر شنبه تقویم محتوای هفته را مرور کنید و دو پست پشتیبان آماده نگه دارید.",
    "روزانه ۳۰ دقیقه در ساعات اوج تعامل به پاسخ کامنت\u{200c}ها و دایرکت\u{200c}ها اختصاص دهید.",
];

const TWO_PILLAR_INSIGHT: &str =
    "با دو ستون فعال، هر هفته یک قالب تازه را در یکی از ستون\u{200c}ها آزمایش کنید تا تکرار حس نشود.";

const MULTI_PILLAR_INSIGHT: &str =
    "سهم هر ستون محتوایی را ماهانه بازبینی کنید و ستونی که کمترین تعامل را دارد کوچک\u{200c}تر کنید.";

const PRIORITIZATION_INSIGHT: &str =
    "با چند هدف همزمان، هر ماه یک هدف اصلی تعیین کنید و ۶۰٪ محتوا را حول آن بچینید.";

const WEAKNESS_MONITORING_INSIGHT: &str =
    "کامنت\u{200c}ها و پیام\u{200c}های مرتبط با «{weakness}» را هفتگی دسته\u{200c}بندی کنید و روند آن را پایش کنید.";

const REPORTING_INSIGHT: &str =
    "در پایان هر ماه نرخ تعامل، رشد دنبال\u{200c}کننده و تبدیل را گزارش کنید و محتوای کم\u{200c}بازده را کنار بگذارید.";

fn voice_insight(tone: Tone) -> &'static str {
    match tone {
        Tone::Professional => {
            "پیش از انتشار، هر کپشن را با چک\u{200c}لیست لحن حرفه\u{200c}ای (دقت، داده، اختصار) بازبینی کنید."
        }
        Tone::Friendly => {
            "یک واژه\u{200c}نامه صمیمی برند (خطاب، ایموجی\u{200c}ها، تکیه\u{200c}کلام\u{200c}ها) بسازید تا همه اعضای تیم یک\u{200c}صدا بنویسند."
        }
        Tone::Formal => {
            "راهنمای نگارش رسمی برند را به\u{200c}روز نگه دارید و پاسخ\u{200c}های عمومی را پیش از انتشار تایید کنید."
        }
        Tone::Inspirational => {
            "بانک داستان\u{200c}های الهام\u{200c}بخش مشتریان را هر هفته با دست\u{200c}کم یک روایت تازه تکمیل کنید."
        }
    }
}

pub fn insights(profile: &BrandProfile) -> Vec<String> {
    let mut out: Vec<String> = CADENCE_INSIGHTS.iter().map(|s| s.to_string()).collect();

    out.push(
        match profile.content_pillars().len() {
            2 => TWO_PILLAR_INSIGHT,
            _ => MULTI_PILLAR_INSIGHT,
        }
        .to_string(),
    );
    out.push(voice_insight(profile.tone()).to_string());

    if profile.selected_goals().len() > 1 {
        out.push(PRIORITIZATION_INSIGHT.to_string());
    }
    if let Some(weakness) = profile.weaknesses() {
        out.push(fill(WEAKNESS_MONITORING_INSIGHT, &[("weakness", weakness)]));
    }

    out.push(REPORTING_INSIGHT.to_string());
    out
}
