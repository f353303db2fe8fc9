use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub date: NaiveDate,
    pub excerpt: String,
}

const MONTHS_GENITIVE: [&str; 12] = [
    "января", "февраля", "марта", "апреля", "мая", "июня",
    "июля", "августа", "сентября", "октября", "ноября", "декабря",
];

impl BlogPost {
    /// Дата в виде "15 декабря 2024"
    pub fn date_label(&self) -> String {
        format_ru_date(self.date)
    }
}

pub fn format_ru_date(date: NaiveDate) -> String {
    let month = MONTHS_GENITIVE[date.month0() as usize];
    format!("{} {} {}", date.day(), month, date.year())
}

/// Статические записи блога, новые сверху
pub fn posts() -> Vec<BlogPost> {
    [
        (
            (2024, 12, 15),
            "Как выбрать LED освещение для дома",
            "Подробное руководство по выбору светодиодного освещения для жилых помещений.",
        ),
        (
            (2024, 12, 10),
            "Преимущества LED технологий",
            "Почему LED освещение экономичнее и экологичнее традиционных ламп.",
        ),
        (
            (2024, 12, 5),
            "RGB подсветка: тренды 2024",
            "Как использовать RGB освещение в современном интерьере.",
        ),
    ]
    .into_iter()
    .filter_map(|((y, m, d), title, excerpt)| {
        NaiveDate::from_ymd_opt(y, m, d).map(|date| BlogPost {
            title: title.to_string(),
            date,
            excerpt: excerpt.to_string(),
        })
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ru_date() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 15).unwrap();
        assert_eq!(format_ru_date(date), "15 декабря 2024");
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(format_ru_date(date), "1 марта 2025");
    }

    #[test]
    fn test_posts_newest_first() {
        let posts = posts();
        assert_eq!(posts.len(), 3);
        assert!(posts.windows(2).all(|w| w[0].date > w[1].date));
        assert_eq!(posts[2].date_label(), "5 декабря 2024");
    }
}
