use contracts::menu::TabId;

#[derive(Debug, Clone, Copy)]
pub struct Dish {
    pub name: &'static str,
    pub description: &'static str,
    pub price_cents: u32,
}

const fn dish(name: &'static str, description: &'static str, price_cents: u32) -> Dish {
    Dish {
        name,
        description,
        price_cents,
    }
}

const BREAKFAST: &[Dish] = &[
    dish("Greek Yogurt & Honey", "Strained yogurt, thyme honey, walnuts", 650),
    dish("Strapatsada", "Scrambled eggs with tomato and feta", 850),
    dish("Bougatsa", "Semolina custard in crisp filo, cinnamon", 590),
];

const LUNCH: &[Dish] = &[
    dish("Horiatiki", "Tomato, cucumber, onion, olives, feta", 1050),
    dish("Gyros Pita", "Pork gyros, tzatziki, tomato, fries", 1190),
    dish("Spanakopita", "Spinach and feta pie", 990),
];

const DINNER: &[Dish] = &[
    dish("Lamb Kleftiko", "Slow-roasted lamb shoulder, lemon potatoes", 2450),
    dish("Grilled Octopus", "Fava purée, capers, red onion", 2190),
    dish("Sea Bream", "Whole fish, ladolemono, horta", 2350),
];

const GREEK: &[Dish] = &[
    dish("Moussaka", "Aubergine, spiced beef, béchamel", 1790),
    dish("Pastitsio", "Baked pasta, beef ragù, béchamel", 1690),
    dish("Gemista", "Tomatoes and peppers stuffed with herbed rice", 1450),
];

const DRINKS: &[Dish] = &[
    dish("Ouzo", "Served with ice and water", 550),
    dish("Assyrtiko", "Glass, Santorini white", 790),
    dish("Freddo Espresso", "Double espresso shaken over ice", 390),
];

pub fn dishes(tab: TabId) -> &'static [Dish] {
    match tab {
        TabId::Breakfast => BREAKFAST,
        TabId::Lunch => LUNCH,
        TabId::Dinner => DINNER,
        TabId::Greek => GREEK,
        TabId::Drinks => DRINKS,
    }
}

/// Formats a price as `€12.50`.
pub fn format_price(cents: u32) -> String {
    format!("€{}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1050), "€10.50");
        assert_eq!(format_price(390), "€3.90");
        assert_eq!(format_price(5), "€0.05");
    }

    #[test]
    fn test_every_tab_has_dishes() {
        for tab in TabId::ALL {
            assert!(!dishes(tab).is_empty());
        }
    }
}
