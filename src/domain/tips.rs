//! Daily health tips.

use chrono::{Datelike, NaiveDate};

pub const TIPS: [&str; 7] = [
    "Stay Hydrated: Drink at least 8 glasses of water daily. Proper hydration improves digestion, skin health, and energy levels.",
    "Regular Exercise: 30 minutes of moderate exercise daily can reduce the risk of chronic diseases by 40%.",
    "Balanced Diet: Include all food groups: proteins, carbs, healthy fats, vitamins, and minerals in every meal.",
    "Sleep Well: Aim for 7-9 hours of quality sleep each night for optimal physical and mental recovery.",
    "Stress Management: Practice mindfulness or meditation for 10 minutes daily to reduce stress levels.",
    "Move Regularly: Take short breaks to walk or stretch every hour if you have a sedentary job.",
    "Eat Vegetables: Include at least 5 servings of vegetables in your daily diet for essential nutrients.",
];

/// Tip for a given day. Stable for the whole day, rotates daily.
pub fn tip_for(date: NaiveDate) -> &'static str {
    TIPS[date.ordinal0() as usize % TIPS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tip_rotates_daily() {
        let jan1 = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let jan2 = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        let jan8 = NaiveDate::from_ymd_opt(2026, 1, 8).unwrap();
        assert_eq!(tip_for(jan1), TIPS[0]);
        assert_eq!(tip_for(jan2), TIPS[1]);
        assert_eq!(tip_for(jan8), TIPS[0]);
    }
}
