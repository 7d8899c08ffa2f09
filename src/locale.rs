//! Wording rules for relative-time phrases.
//!
//! A [`Locale`] is passed explicitly to every formatting call rather than
//! held in process-wide state, so two callers with different languages never
//! observe each other's configuration.

/// The active locale's unit names, plural forms, direction templates and
/// "today" label.
///
/// Plural forms are `%d` templates, direction forms are `%s` templates,
/// mirroring how relative-time locale packs conventionally express them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// Label for a zero-day distance. Overridable per locale; applied up
    /// front when the locale is constructed, not at formatting time.
    pub today: &'static str,
    day_one: &'static str,
    day_other: &'static str,
    month_one: &'static str,
    month_other: &'static str,
    year_one: &'static str,
    year_other: &'static str,
    past: &'static str,
    future: &'static str,
}

impl Locale {
    /// Default English wording.
    pub const fn english() -> Self {
        Self {
            today: "today",
            day_one: "a day",
            day_other: "%d days",
            month_one: "a month",
            month_other: "%d months",
            year_one: "a year",
            year_other: "%d years",
            past: "%s ago",
            future: "in %s",
        }
    }

    /// Simplified Chinese, with the "today" label overridden to 今天.
    pub const fn chinese_simplified() -> Self {
        Self {
            today: "今天",
            day_one: "1 天",
            day_other: "%d 天",
            month_one: "1 个月",
            month_other: "%d 个月",
            year_one: "1 年",
            year_other: "%d 年",
            past: "%s前",
            future: "%s内",
        }
    }

    /// Traditional Chinese (zh-TW / zh-HK wording). No "today" override.
    pub const fn chinese_traditional() -> Self {
        Self {
            today: "today",
            day_one: "1 天",
            day_other: "%d 天",
            month_one: "1 個月",
            month_other: "%d 個月",
            year_one: "1 年",
            year_other: "%d 年",
            past: "%s前",
            future: "%s後",
        }
    }

    /// Japanese. No "today" override.
    pub const fn japanese() -> Self {
        Self {
            today: "today",
            day_one: "1日",
            day_other: "%d日",
            month_one: "1ヶ月",
            month_other: "%dヶ月",
            year_one: "1年",
            year_other: "%d年",
            past: "%s前",
            future: "%s後",
        }
    }

    /// Resolves a language tag from the host configuration, case-insensitive,
    /// falling back to English for anything unrecognized.
    pub fn for_tag(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "zh" | "zh-cn" => Self::chinese_simplified(),
            "zh-tw" | "zh-hk" => Self::chinese_traditional(),
            "ja" => Self::japanese(),
            _ => Self::english(),
        }
    }

    pub(crate) fn days(&self, count: u64) -> String {
        Self::unit(self.day_one, self.day_other, count)
    }

    pub(crate) fn months(&self, count: u64) -> String {
        Self::unit(self.month_one, self.month_other, count)
    }

    pub(crate) fn years(&self, count: u64) -> String {
        Self::unit(self.year_one, self.year_other, count)
    }

    pub(crate) fn ago(&self, span: &str) -> String {
        self.past.replace("%s", span)
    }

    pub(crate) fn within(&self, span: &str) -> String {
        self.future.replace("%s", span)
    }

    fn unit(one: &str, other: &str, count: u64) -> String {
        if count == 1 {
            one.to_owned()
        } else {
            other.replace("%d", &count.to_string())
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_units() {
        let locale = Locale::english();
        assert_eq!(locale.days(1), "a day");
        assert_eq!(locale.days(2), "2 days");
        assert_eq!(locale.months(1), "a month");
        assert_eq!(locale.months(11), "11 months");
        assert_eq!(locale.years(1), "a year");
        assert_eq!(locale.years(12), "12 years");
    }

    #[test]
    fn test_english_direction() {
        let locale = Locale::english();
        assert_eq!(locale.ago("2 days"), "2 days ago");
        assert_eq!(locale.within("a day"), "in a day");
    }

    #[test]
    fn test_chinese_simplified_today_override() {
        assert_eq!(Locale::chinese_simplified().today, "今天");
        // The override is only applied where the source locale carries one
        assert_eq!(Locale::chinese_traditional().today, "today");
        assert_eq!(Locale::japanese().today, "today");
    }

    #[test]
    fn test_chinese_phrases() {
        let locale = Locale::chinese_simplified();
        assert_eq!(locale.ago(&locale.days(3)), "3 天前");
        assert_eq!(locale.within(&locale.months(1)), "1 个月内");
    }

    #[test]
    fn test_japanese_phrases() {
        let locale = Locale::japanese();
        assert_eq!(locale.ago(&locale.years(2)), "2年前");
        assert_eq!(locale.within(&locale.days(1)), "1日後");
    }

    #[test]
    fn test_for_tag() {
        assert_eq!(Locale::for_tag("zh-CN"), Locale::chinese_simplified());
        assert_eq!(Locale::for_tag("zh"), Locale::chinese_simplified());
        assert_eq!(Locale::for_tag("zh-TW"), Locale::chinese_traditional());
        assert_eq!(Locale::for_tag("ja"), Locale::japanese());
        assert_eq!(Locale::for_tag("en"), Locale::english());
        assert_eq!(Locale::for_tag("fr-FR"), Locale::english());
        assert_eq!(Locale::for_tag(""), Locale::english());
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Locale::default(), Locale::english());
    }
}
