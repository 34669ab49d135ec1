use std::collections::HashMap;

/// Display names used in the recipe table mapped to the names the market
/// API reports.
const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("Tomate", "Tomato"),
    ("Urtiga", "Nettle"),
    ("Tronco de Pinho", "Pine log"),
    ("Tronco de Carvalho", "Oak log"),
    ("Batata", "Potato"),
    ("Cenoura", "Carrot"),
    ("Trigo", "Wheat"),
    ("Cebola", "Onion"),
    ("Peixe Cru", "Raw piranha"),
    ("Peixe Cozido", "Cooked piranha"),
    ("Sopa de Tomate", "Tomato soup"),
    ("Ensopado de Legumes", "Vegetable stew"),
    ("Pão", "Bread"),
    ("Tábua de Pinho", "Pine plank"),
    ("Poção de Urtiga", "Nettle potion"),
];

/// Translates display names into API names.
///
/// Matching is case-insensitive; names without an alias pass through
/// unchanged.
#[derive(Clone, Debug)]
pub struct NameResolver {
    aliases: HashMap<String, String>,
}

impl Default for NameResolver {
    fn default() -> Self {
        Self::new(DEFAULT_ALIASES.iter().copied())
    }
}

impl NameResolver {
    pub fn new<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let aliases = pairs
            .into_iter()
            .map(|(display, api)| (display.trim().to_lowercase(), api.to_string()))
            .collect();
        Self { aliases }
    }

    /// No aliases at all; every name passes through.
    pub fn identity() -> Self {
        Self {
            aliases: HashMap::new(),
        }
    }

    pub fn resolve<'a>(&'a self, display: &'a str) -> &'a str {
        self.aliases
            .get(&display.trim().to_lowercase())
            .map(String::as_str)
            .unwrap_or(display)
    }
}
