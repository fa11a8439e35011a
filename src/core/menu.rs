use serde::{Deserialize, Serialize};

/// Menu sections. `MainCourse` items drive the queue priority rule:
/// orders carrying one are pushed back behind quick orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuCategory {
    Appetizers,
    MainCourse,
    Drinks,
    Desserts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub category: MenuCategory,
    pub description: String,
    /// Price in rupiah.
    pub price: u32,
    /// Relative preparation effort: 1 fast, 2 medium, 3 slow.
    pub prep_time: u32,
}

impl MenuItem {
    fn new(
        id: u32,
        name: &str,
        category: MenuCategory,
        description: &str,
        price: u32,
        prep_time: u32,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            category,
            description: description.to_string(),
            price,
            prep_time,
        }
    }
}

/// The static restaurant menu.
pub fn menu_data() -> Vec<MenuItem> {
    use MenuCategory::*;
    vec![
        MenuItem::new(
            1,
            "Spring Rolls",
            Appetizers,
            "Crispy vegetable spring rolls with sweet chili sauce",
            35_000,
            2,
        ),
        MenuItem::new(
            2,
            "Chicken Wings",
            Appetizers,
            "Spicy buffalo wings with ranch dressing",
            45_000,
            2,
        ),
        MenuItem::new(
            3,
            "Garlic Bread",
            Appetizers,
            "Toasted bread with garlic butter and herbs",
            25_000,
            2,
        ),
        MenuItem::new(
            4,
            "Nasi Goreng Special",
            MainCourse,
            "Indonesian fried rice with chicken, egg, and vegetables",
            55_000,
            3,
        ),
        MenuItem::new(
            5,
            "Beef Rendang",
            MainCourse,
            "Slow-cooked beef in rich coconut curry",
            75_000,
            3,
        ),
        MenuItem::new(
            6,
            "Grilled Salmon",
            MainCourse,
            "Fresh salmon fillet with lemon butter sauce",
            85_000,
            3,
        ),
        MenuItem::new(
            7,
            "Chicken Teriyaki",
            MainCourse,
            "Grilled chicken with teriyaki glaze and steamed rice",
            65_000,
            3,
        ),
        MenuItem::new(
            8,
            "Spaghetti Carbonara",
            MainCourse,
            "Creamy pasta with bacon and parmesan cheese",
            60_000,
            3,
        ),
        MenuItem::new(
            9,
            "Fresh Orange Juice",
            Drinks,
            "Freshly squeezed orange juice",
            20_000,
            1,
        ),
        MenuItem::new(10, "Iced Coffee", Drinks, "Cold brew coffee with ice", 25_000, 1),
        MenuItem::new(
            11,
            "Mango Smoothie",
            Drinks,
            "Blended mango with yogurt and honey",
            30_000,
            1,
        ),
        MenuItem::new(12, "Mineral Water", Drinks, "Refreshing mineral water", 10_000, 1),
        MenuItem::new(
            13,
            "Chocolate Lava Cake",
            Desserts,
            "Warm chocolate cake with molten center",
            40_000,
            2,
        ),
        MenuItem::new(
            14,
            "Ice Cream Sundae",
            Desserts,
            "Vanilla ice cream with chocolate sauce and nuts",
            35_000,
            2,
        ),
        MenuItem::new(
            15,
            "Fruit Salad",
            Desserts,
            "Fresh seasonal fruits with honey dressing",
            30_000,
            1,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_ids_are_unique_and_sequential() {
        let menu = menu_data();
        assert_eq!(menu.len(), 15);
        for (index, item) in menu.iter().enumerate() {
            assert_eq!(item.id, index as u32 + 1);
        }
    }

    #[test]
    fn test_menu_has_five_main_courses() {
        let mains = menu_data()
            .into_iter()
            .filter(|m| m.category == MenuCategory::MainCourse)
            .count();
        assert_eq!(mains, 5);
    }
}
