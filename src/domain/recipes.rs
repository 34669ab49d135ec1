//! Built-in recipe table.

use super::entities::Recipe;

pub fn default_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new("Sopa de Tomate", "Sopa de Tomate", 180.0, 55.0)
            .ingredient("Tomate", 10)
            .ingredient("Urtiga", 5)
            .ingredient("Tronco de Pinho", 2),
        Recipe::new("Ensopado de Legumes", "Ensopado de Legumes", 140.0, 42.0)
            .ingredient("Batata", 4)
            .ingredient("Cenoura", 3)
            .ingredient("Cebola", 2)
            .ingredient("Tronco de Pinho", 1),
        Recipe::new("Pão", "Pão", 35.0, 12.0)
            .ingredient("Trigo", 3)
            .ingredient("Tronco de Pinho", 1),
        Recipe::new("Peixe Cozido", "Peixe Cozido", 22.0, 8.4)
            .ingredient("Peixe Cru", 1)
            .ingredient("Tronco de Pinho", 1),
        Recipe::new("Tábua de Pinho", "Tábua de Pinho", 15.0, 25.2)
            .ingredient("Tronco de Pinho", 2),
        Recipe::new("Poção de Urtiga", "Poção de Urtiga", 60.0, 30.0)
            .ingredient("Urtiga", 6)
            .ingredient("Tronco de Carvalho", 1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_recipes_are_valid() {
        for recipe in default_recipes() {
            assert!(recipe.validate().is_ok(), "{} failed validation", recipe.name);
            assert!(!recipe.ingredients.is_empty());
        }
    }
}
