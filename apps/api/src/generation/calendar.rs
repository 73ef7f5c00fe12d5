//! Calendar Scheduler — a 14-day publishing plan.
//!
//! Pillars cycle in input order, formats follow an independent rotation, and
//! theme/hook/CTA are picked by how many times the day's pillar has already
//! appeared, so a pillar only repeats text after exhausting its pool.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::generation::models::CalendarEntry;
use crate::generation::templates::fill;
use crate::profile::models::BrandProfile;
use crate::profile::validation::{FieldError, ValidationErrorKind};
use crate::profile::vocabulary::{ContentFormat, Pillar, ZWNJ};

pub const CALENDAR_DAYS: usize = 14;

/// Used when nothing hashtag-safe is left of the industry text.
const FALLBACK_INDUSTRY_TAG: &str = "#کسب_و_کار";

/// Format rotation. No two neighbours are equal, including the wrap from the
/// last slot back to the first.
const FORMAT_ROTATION: [ContentFormat; 7] = [
    ContentFormat::Reel,
    ContentFormat::Carousel,
    ContentFormat::Story,
    ContentFormat::EducationalPost,
    ContentFormat::Live,
    ContentFormat::Carousel,
    ContentFormat::Story,
];

struct PillarPool {
    themes: &'static [&'static str],
    hooks: &'static [&'static str],
    ctas: &'static [&'static str],
    hashtags: [&'static str; 3],
}

fn pillar_pool(pillar: Pillar) -> PillarPool {
    match pillar {
        Pillar::Educational => PillarPool {
            themes: &[
                "درس {n}: یک مفهوم پایه {industry} به زبان ساده",
                "درس {n}: اشتباه رایج در {industry} و راه درست",
                "درس {n}: چک\u{200c}لیست عملی {industry}",
                "درس {n}: پاسخ به پرتکرارترین سوال درباره {industry}",
            ],
            hooks: &[
                "۹۰٪ افراد این نکته را درباره {industry} نمی\u{200c}دانند...",
                "اگر فقط یک چیز درباره {industry} یاد بگیری، همین است.",
                "قبل از اینکه دوباره این اشتباه را تکرار کنی، این را ببین.",
            ],
            ctas: &[
                "این پست را ذخیره کن تا بعدا فراموش نشود.",
                "سوالت را در کامنت بنویس تا در پست بعدی جواب بدهیم.",
                "برای دوستی که لازمش دارد بفرست.",
            ],
            hashtags: ["#آموزش", "#نکته_کاربردی", "#یادگیری"],
        },
        Pillar::Inspirational => PillarPool {
            themes: &[
                "روایت {n}: داستان تحول یک مشتری در {industry}",
                "روایت {n}: چرا این برند را شروع کردیم",
                "روایت {n}: چالش کوچک امروز برای یک قدم بزرگ",
                "روایت {n}: آینده\u{200c}ای که در {industry} می\u{200c}سازیم",
            ],
            hooks: &[
                "یک سال پیش هیچ\u{200c}کس باور نمی\u{200c}کرد...",
                "این داستان را تا آخر ببین.",
                "همه چیز با یک تصمیم ساده شروع شد.",
            ],
            ctas: &[
                "داستان خودت را در کامنت با ما به اشتراک بگذار.",
                "اگر الهام گرفتی، برای یک نفر بفرستش.",
                "به چالش امروز بپیوند و ما را تگ کن.",
            ],
            hashtags: ["#انگیزه", "#الهام", "#داستان_موفقیت"],
        },
        Pillar::BehindTheScenes => PillarPool {
            themes: &[
                "پشت پرده {n}: یک روز از کار تیم",
                "پشت پرده {n}: فرایند ساخت در {industry}",
                "پشت پرده {n}: آدم\u{200c}هایی که برند را می\u{200c}سازند",
                "پشت پرده {n}: اشتباهی که از آن درس گرفتیم",
            ],
            hooks: &[
                "تا حالا این بخش را به کسی نشان نداده بودیم.",
                "فکر می\u{200c}کنی پشت هر سفارش چه اتفاقی می\u{200c}افتد؟",
                "۶۰ ثانیه از یک روز واقعی ما.",
            ],
            ctas: &[
                "دوست داری کدام بخش را بیشتر ببینی؟ بنویس.",
                "برای دیدن قسمت بعد، پیج را دنبال کن.",
                "سوالی از تیم داری؟ در استوری بپرس.",
            ],
            hashtags: ["#پشت_صحنه", "#تیم_ما", "#روزمرگی_کاری"],
        },
        Pillar::SocialProof => PillarPool {
            themes: &[
                "تجربه {n}: نظر یک مشتری واقعی",
                "تجربه {n}: نتیجه قبل و بعد در {industry}",
                "تجربه {n}: عددهایی که به آن\u{200c}ها افتخار می\u{200c}کنیم",
                "تجربه {n}: پیام\u{200c}هایی که ما را دلگرم کرد",
            ],
            hooks: &[
                "این پیام دیروز به دستمان رسید...",
                "نتیجه را خودتان قضاوت کنید.",
                "چرا بیش از نیمی از مشتریان دوباره برمی\u{200c}گردند؟",
            ],
            ctas: &[
                "تو هم تجربه\u{200c}ات را با هشتگ برند منتشر کن.",
                "برای شروع، لینک بیو را ببین.",
                "اگر سوالی قبل از خرید داری، دایرکت بده.",
            ],
            hashtags: ["#رضایت_مشتری", "#تجربه_واقعی", "#نتیجه"],
        },
        Pillar::Strategic => PillarPool {
            themes: &[
                "نگاه {n}: روند مهم این فصل در {industry}",
                "نگاه {n}: مقایسه رویکردها در {industry}",
                "نگاه {n}: نقشه راه برند",
                "نگاه {n}: درس\u{200c}های بازار برای تصمیم بهتر",
            ],
            hooks: &[
                "{industry} در حال تغییر است؛ آماده\u{200c}ای؟",
                "سه روندی که امسال بازی را عوض می\u{200c}کنند.",
                "بیشتر رقبا این را نادیده می\u{200c}گیرند.",
            ],
            ctas: &[
                "نظرت درباره این روند چیست؟ در کامنت بنویس.",
                "برای تحلیل\u{200c}های بعدی پیج را دنبال کن.",
                "این پست را برای تیمت بفرست.",
            ],
            hashtags: ["#استراتژی", "#روند_بازار", "#تحلیل"],
        },
    }
}

/// Rejects anchors whose 14-day window runs past the last representable date.
pub fn check_anchor(anchor: NaiveDate) -> Result<NaiveDate, FieldError> {
    match anchor.checked_add_days(Days::new(CALENDAR_DAYS as u64 - 1)) {
        Some(_) => Ok(anchor),
        None => Err(FieldError {
            field: "anchorDate",
            kind: ValidationErrorKind::AnchorOutOfRange,
            message: format!("تاریخ شروع {anchor} برای یک تقویم {CALENDAR_DAYS} روزه خارج از بازه است"),
        }),
    }
}

/// Builds the 14-day plan starting at `anchor`. The anchor must have passed
/// [`check_anchor`].
pub fn schedule(profile: &BrandProfile, anchor: NaiveDate) -> Vec<CalendarEntry> {
    let pillars = profile.content_pillars();
    let industry = profile.industry();
    let industry_tag = industry_hashtag(industry);

    anchor
        .iter_days()
        .take(CALENDAR_DAYS)
        .enumerate()
        .map(|(day_index, date)| {
            let pillar = pillars[day_index % pillars.len()];
            let occurrence = day_index / pillars.len();
            let pool = pillar_pool(pillar);
            let ordinal = (occurrence + 1).to_string();
            let slots = [("industry", industry), ("n", ordinal.as_str())];

            CalendarEntry {
                date,
                day_index,
                weekday: weekday_label(date.weekday()),
                pillar,
                theme: fill(pick(pool.themes, occurrence), &slots),
                hook: fill(pick(pool.hooks, occurrence), &slots),
                cta: fill(pick(pool.ctas, occurrence), &slots),
                hashtags: std::iter::once(industry_tag.clone())
                    .chain(pool.hashtags.iter().map(|tag| tag.to_string()))
                    .collect(),
                format: FORMAT_ROTATION[day_index % FORMAT_ROTATION.len()],
            }
        })
        .collect()
}

fn pick(pool: &'static [&'static str], occurrence: usize) -> &'static str {
    pool[occurrence % pool.len()]
}

/// `#` + the industry's words joined by underscores. Only letters, digits,
/// `_` and ZWNJ survive; punctuation-only words are dropped.
fn industry_hashtag(industry: &str) -> String {
    let words: Vec<String> = industry
        .split_whitespace()
        .map(|w| {
            w.chars()
                .filter(|c| c.is_alphanumeric() || *c == '_' || *c == ZWNJ)
                .collect::<String>()
        })
        .filter(|w| !w.is_empty())
        .collect();
    if words.is_empty() {
        return FALLBACK_INDUSTRY_TAG.to_string();
    }
    format!("#{}", words.join("_"))
}

fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sat => "شنبه",
        Weekday::Sun => "یکشنبه",
        Weekday::Mon => "دوشنبه",
        Weekday::Tue => "سه\u{200c}شنبه",
        Weekday::Wed => "چهارشنبه",
        Weekday::Thu => "پنجشنبه",
        Weekday::Fri => "جمعه",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::models::BrandProfileInput;
    use crate::profile::validation::validate_profile;

    fn profile_with_pillars(pillars: &[Pillar]) -> BrandProfile {
        let input = BrandProfileInput {
            brand_name: "Acme".to_string(),
            industry: "Fitness".to_string(),
            audience: "Women 25-34".to_string(),
            content_pillars: pillars.iter().map(|p| p.label().to_string()).collect(),
            ..BrandProfileInput::form_defaults()
        };
        validate_profile(&input).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_fourteen_consecutive_days() {
        let profile = profile_with_pillars(&[Pillar::Educational, Pillar::Inspirational]);
        let anchor = date(2024, 3, 10);
        let calendar = schedule(&profile, anchor);
        assert_eq!(calendar.len(), CALENDAR_DAYS);
        assert_eq!(calendar[0].date, anchor);
        for pair in calendar.windows(2) {
            assert_eq!(pair[1].date, pair[0].date.succ_opt().unwrap());
            assert_eq!(pair[1].day_index, pair[0].day_index + 1);
        }
    }

    #[test]
    fn test_two_pillars_alternate_seven_each() {
        let profile = profile_with_pillars(&[Pillar::Educational, Pillar::Inspirational]);
        let calendar = schedule(&profile, date(2024, 3, 10));
        for entry in &calendar {
            let expected = if entry.day_index % 2 == 0 {
                Pillar::Educational
            } else {
                Pillar::Inspirational
            };
            assert_eq!(entry.pillar, expected);
        }
        let educational = calendar
            .iter()
            .filter(|e| e.pillar == Pillar::Educational)
            .count();
        assert_eq!(educational, 7);
    }

    #[test]
    fn test_adding_third_pillar_keeps_first_two_days() {
        let anchor = date(2024, 3, 10);
        let two = schedule(
            &profile_with_pillars(&[Pillar::Educational, Pillar::Inspirational]),
            anchor,
        );
        let three = schedule(
            &profile_with_pillars(&[
                Pillar::Educational,
                Pillar::Inspirational,
                Pillar::SocialProof,
            ]),
            anchor,
        );
        assert_eq!(two[0], three[0]);
        assert_eq!(two[1].pillar, three[1].pillar);
        assert_eq!(three[2].pillar, Pillar::SocialProof);
        assert_eq!(three[3].pillar, Pillar::Educational);
        assert_ne!(two[2].pillar, three[2].pillar);
    }

    #[test]
    fn test_all_pillars_drawn_from_profile() {
        let pillars = [Pillar::Strategic, Pillar::BehindTheScenes, Pillar::SocialProof];
        let calendar = schedule(&profile_with_pillars(&pillars), date(2024, 1, 1));
        assert!(calendar.iter().all(|e| pillars.contains(&e.pillar)));
    }

    #[test]
    fn test_consecutive_formats_differ() {
        let calendar = schedule(
            &profile_with_pillars(&[Pillar::Educational, Pillar::Strategic]),
            date(2024, 1, 1),
        );
        for pair in calendar.windows(2) {
            assert_ne!(pair[0].format, pair[1].format, "day {}", pair[1].day_index);
        }
    }

    #[test]
    fn test_rotation_wraps_without_repeat() {
        let first = FORMAT_ROTATION[0];
        let last = FORMAT_ROTATION[FORMAT_ROTATION.len() - 1];
        assert_ne!(first, last);
    }

    #[test]
    fn test_month_boundary_rollover() {
        let calendar = schedule(
            &profile_with_pillars(&[Pillar::Educational, Pillar::Inspirational]),
            date(2024, 1, 25),
        );
        assert_eq!(calendar[6].date, date(2024, 1, 31));
        assert_eq!(calendar[7].date, date(2024, 2, 1));
        assert_eq!(calendar[13].date, date(2024, 2, 7));
    }

    #[test]
    fn test_leap_day_and_year_boundary() {
        let profile = profile_with_pillars(&[Pillar::Educational, Pillar::Inspirational]);
        let leap = schedule(&profile, date(2024, 2, 28));
        assert_eq!(leap[1].date, date(2024, 2, 29));
        assert_eq!(leap[2].date, date(2024, 3, 1));

        let new_year = schedule(&profile, date(2023, 12, 30));
        assert_eq!(new_year[2].date, date(2024, 1, 1));
    }

    #[test]
    fn test_hashtags_fixed_length_and_stable() {
        let profile = profile_with_pillars(&[Pillar::Educational, Pillar::Inspirational]);
        let calendar = schedule(&profile, date(2024, 5, 1));
        assert!(calendar.iter().all(|e| e.hashtags.len() == 4));
        assert_eq!(calendar[0].hashtags, calendar[2].hashtags);
        assert_eq!(calendar[0].hashtags[0], "#Fitness");
    }

    #[test]
    fn test_industry_hashtag_joins_words() {
        assert_eq!(industry_hashtag("پوشاک  ورزشی"), "#پوشاک_ورزشی");
        assert_eq!(industry_hashtag("#coffee shop"), "#coffee_shop");
        assert_eq!(industry_hashtag("فست\u{200c}فود"), "#فست\u{200c}فود");
    }

    #[test]
    fn test_industry_hashtag_drops_punctuation() {
        assert_eq!(industry_hashtag("Food & Beverage"), "#Food_Beverage");
        assert_eq!(industry_hashtag("e-commerce!"), "#ecommerce");
        assert_eq!(industry_hashtag("#"), FALLBACK_INDUSTRY_TAG);
        assert_eq!(industry_hashtag("& / -"), FALLBACK_INDUSTRY_TAG);
    }

    #[test]
    fn test_check_anchor_accepts_last_full_window() {
        let last = NaiveDate::MAX - Days::new(CALENDAR_DAYS as u64 - 1);
        assert_eq!(check_anchor(last), Ok(last));
        let calendar = schedule(
            &profile_with_pillars(&[Pillar::Educational, Pillar::Inspirational]),
            last,
        );
        assert_eq!(calendar.len(), CALENDAR_DAYS);
        assert_eq!(calendar[CALENDAR_DAYS - 1].date, NaiveDate::MAX);
    }

    #[test]
    fn test_check_anchor_rejects_truncated_window() {
        for anchor in [NaiveDate::MAX, NaiveDate::MAX - Days::new(5)] {
            let err = check_anchor(anchor).unwrap_err();
            assert_eq!(err.field, "anchorDate");
            assert_eq!(err.kind, ValidationErrorKind::AnchorOutOfRange);
        }
    }

    #[test]
    fn test_themes_do_not_repeat_within_window() {
        let calendar = schedule(
            &profile_with_pillars(&[Pillar::Educational, Pillar::Inspirational]),
            date(2024, 5, 1),
        );
        let mut themes: Vec<_> = calendar.iter().map(|e| e.theme.as_str()).collect();
        themes.sort_unstable();
        themes.dedup();
        assert_eq!(themes.len(), CALENDAR_DAYS);
    }

    #[test]
    fn test_weekday_labels() {
        // 2024-03-16 was a Saturday.
        let calendar = schedule(
            &profile_with_pillars(&[Pillar::Educational, Pillar::Inspirational]),
            date(2024, 3, 16),
        );
        assert_eq!(calendar[0].weekday, "شنبه");
        assert_eq!(calendar[6].weekday, "جمعه");
    }

    #[test]
    fn test_schedule_is_deterministic() {
        let profile = profile_with_pillars(&[Pillar::Educational, Pillar::SocialProof]);
        let anchor = date(2024, 8, 20);
        assert_eq!(schedule(&profile, anchor), schedule(&profile, anchor));
    }
}
