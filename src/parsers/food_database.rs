// ABOUTME: Static reference table of foods the local meal parser recognizes
// ABOUTME: Per-100 g macros and serving weights, ordered most-specific key first, plus lookup helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Reference food table.
//!
//! Order matters: the local parser claims text spans in table order, so a
//! multi-word key ("dal fry", "peanut butter") must come before any key that
//! is a substring of it ("dal", "butter").

use logbook_core::models::FoodReference;

/// Every reference food, most specific key first
pub static REFERENCE_FOODS: &[FoodReference] = &[
    // Multi-word keys
    FoodReference::new("peanut butter", "Peanut butter", 32.0, "tbsp")
        .per_100g(588.0, 25.0, 20.0, 50.0),
    FoodReference::new("palak paneer", "Palak paneer", 200.0, "bowl")
        .per_100g(155.0, 10.0, 8.0, 10.0),
    FoodReference::new("aloo paratha", "Aloo paratha", 120.0, "piece")
        .per_100g(296.0, 7.1, 43.9, 10.4),
    FoodReference::new("dal fry", "Dal fry", 200.0, "bowl").per_100g(130.0, 7.0, 18.0, 3.5),
    FoodReference::new("brown rice", "Brown rice (cooked)", 150.0, "cup")
        .per_100g(112.0, 2.6, 23.5, 0.9),
    FoodReference::new("egg white", "Egg white", 33.0, "piece").per_100g(52.0, 11.0, 0.7, 0.2),
    FoodReference::new("olive oil", "Olive oil", 14.0, "tbsp").per_100g(884.0, 0.0, 0.0, 100.0),
    // Breads
    FoodReference::new("roti", "Roti", 30.0, "piece").per_100g(297.0, 9.9, 60.8, 3.7),
    FoodReference::new("chapati", "Chapati", 30.0, "piece").per_100g(297.0, 9.9, 60.8, 3.7),
    FoodReference::new("paratha", "Paratha", 60.0, "piece").per_100g(326.0, 8.3, 52.8, 9.8),
    FoodReference::new("bread", "Bread", 30.0, "slice").per_100g(265.0, 9.0, 49.0, 3.2),
    // Rice, lentils, legumes
    FoodReference::new("rice", "Rice (cooked)", 150.0, "cup").per_100g(130.0, 2.7, 28.0, 0.3),
    FoodReference::new("dal", "Dal", 150.0, "bowl").per_100g(116.0, 9.0, 20.0, 0.4),
    FoodReference::new("rajma", "Rajma", 150.0, "bowl").per_100g(337.0, 22.0, 61.0, 1.4),
    FoodReference::new("chole", "Chole", 150.0, "bowl").per_100g(164.0, 8.9, 27.0, 2.6),
    // South Indian and breakfast
    FoodReference::new("idli", "Idli", 50.0, "piece").per_100g(39.0, 2.0, 7.9, 0.2),
    FoodReference::new("dosa", "Dosa", 100.0, "piece").per_100g(168.0, 3.7, 25.0, 5.9),
    FoodReference::new("sambar", "Sambar", 200.0, "bowl").per_100g(44.0, 2.5, 7.0, 1.2),
    FoodReference::new("poha", "Poha", 150.0, "plate").per_100g(110.0, 2.4, 23.0, 0.9),
    FoodReference::new("upma", "Upma", 200.0, "plate").per_100g(135.0, 3.0, 22.0, 4.0),
    FoodReference::new("oats", "Oats", 80.0, "bowl").per_100g(389.0, 17.0, 66.0, 7.0),
    // Protein
    FoodReference::new("paneer", "Paneer", 100.0, "100g").per_100g(265.0, 18.0, 3.4, 20.0),
    FoodReference::new("chicken", "Chicken", 150.0, "piece").per_100g(165.0, 31.0, 0.0, 3.6),
    FoodReference::new("tuna", "Tuna", 100.0, "100g").per_100g(109.0, 25.0, 0.0, 1.0),
    FoodReference::new("fish", "Fish", 150.0, "piece").per_100g(97.0, 16.0, 0.0, 3.4),
    FoodReference::new("egg", "Egg", 50.0, "piece").per_100g(155.0, 13.0, 1.1, 11.0),
    FoodReference::new("whey", "Whey protein", 30.0, "scoop").per_100g(400.0, 80.0, 7.0, 5.0),
    // Dairy
    FoodReference::new("milk", "Milk", 240.0, "glass").per_100g(42.0, 3.4, 5.0, 1.0),
    FoodReference::new("curd", "Curd", 200.0, "bowl").per_100g(98.0, 11.0, 3.4, 4.3),
    FoodReference::new("dahi", "Dahi", 200.0, "bowl").per_100g(98.0, 11.0, 3.4, 4.3),
    FoodReference::new("ghee", "Ghee", 10.0, "tsp").per_100g(900.0, 0.3, 0.0, 99.5),
    // Vegetables and fruit
    FoodReference::new("palak", "Palak (spinach)", 100.0, "100g").per_100g(23.0, 2.9, 3.6, 0.4),
    FoodReference::new("banana", "Banana", 118.0, "piece").per_100g(89.0, 1.1, 23.0, 0.3),
    FoodReference::new("apple", "Apple", 182.0, "piece").per_100g(52.0, 0.3, 14.0, 0.2),
    FoodReference::new("mango", "Mango", 200.0, "piece").per_100g(60.0, 0.8, 15.0, 0.4),
    FoodReference::new("guava", "Guava", 100.0, "piece").per_100g(68.0, 2.6, 14.0, 1.0),
    // Nuts
    FoodReference::new("almonds", "Almonds", 28.0, "handful").per_100g(579.0, 21.0, 22.0, 50.0),
    FoodReference::new("walnuts", "Walnuts", 28.0, "handful").per_100g(654.0, 15.0, 14.0, 65.0),
];

/// Look up a reference food by its exact key (case-insensitive)
#[must_use]
pub fn food_by_key(key: &str) -> Option<&'static FoodReference> {
    let key = key.trim().to_lowercase();
    REFERENCE_FOODS.iter().find(|food| food.key == key)
}

/// Search reference foods whose key or display name contains `query`
///
/// An empty query lists the first `limit` foods in table order.
#[must_use]
pub fn search_foods(query: &str, limit: usize) -> Vec<&'static FoodReference> {
    let query = query.trim().to_lowercase();
    REFERENCE_FOODS
        .iter()
        .filter(|food| {
            query.is_empty()
                || food.key.contains(&query)
                || food.name.to_lowercase().contains(&query)
        })
        .take(limit)
        .collect()
}
