use super::types::{GenerationRequest, Recipe};
use super::RecipeGenerator;
use crate::error::GenerateError;
use async_trait::async_trait;

/// Canned generator used for the mock mode and for the fallback degraded
/// mode. Never touches the network.
pub struct CannedGenerator {
    name: &'static str,
    recipe: Recipe,
}

impl CannedGenerator {
    /// Fixed recipe returned when mock mode is selected or forced.
    pub fn mock() -> Self {
        Self {
            name: "mock",
            recipe: pasta_recipe("Creamy Vegetable Pasta"),
        }
    }

    /// Fixed recipe returned when no usable provider is configured. The
    /// title distinguishes "no AI available" from an actual failure.
    pub fn fallback() -> Self {
        Self {
            name: "fallback",
            recipe: pasta_recipe("Fallback Recipe (API Not Configured)"),
        }
    }
}

#[async_trait]
impl RecipeGenerator for CannedGenerator {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn generate(&self, _request: &GenerationRequest) -> Result<Recipe, GenerateError> {
        Ok(self.recipe.clone())
    }
}

fn pasta_recipe(title: &str) -> Recipe {
    Recipe {
        title: title.to_string(),
        ingredients: [
            "8 oz pasta",
            "1 tbsp olive oil",
            "2 cloves garlic, minced",
            "1 onion, diced",
            "1 bell pepper, sliced",
            "1 cup heavy cream",
            "1/4 cup grated Parmesan cheese",
            "Salt and pepper to taste",
            "Fresh basil for garnish",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        instructions: [
            "Bring a large pot of salted water to a boil. Add pasta and cook according to package instructions until al dente.",
            "While pasta is cooking, heat olive oil in a large skillet over medium heat.",
            "Add garlic and onion, sauté until fragrant and translucent, about 3 minutes.",
            "Add bell pepper and cook for another 2-3 minutes until slightly softened.",
            "Pour in the heavy cream and bring to a gentle simmer. Cook for 3-4 minutes until slightly thickened.",
            "Stir in the Parmesan cheese until melted and smooth.",
            "Drain pasta and add it to the sauce, tossing to coat evenly.",
            "Season with salt and pepper to taste.",
            "Serve hot, garnished with fresh basil leaves.",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        cooking_time: Some("25 minutes".to_string()),
        servings: Some(4),
        cuisine: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::types::ANY_MEAL_TYPE;

    #[tokio::test]
    async fn test_canned_generators_return_distinct_titles() {
        let request = GenerationRequest {
            ingredients: "pasta".to_string(),
            dietary_preferences: None,
            meal_type: ANY_MEAL_TYPE.to_string(),
        };

        let mock = CannedGenerator::mock().generate(&request).await.unwrap();
        let fallback = CannedGenerator::fallback().generate(&request).await.unwrap();
        assert_eq!(mock.title, "Creamy Vegetable Pasta");
        assert_eq!(fallback.title, "Fallback Recipe (API Not Configured)");
        assert_eq!(mock.ingredients, fallback.ingredients);
    }
}
