//! Crafting rule engine: recipe catalog, validation, and inventory mutation.
//!
//! The catalog is compiled in and registered once at construction; recipes
//! never change afterwards. Absent lookups are `None` and a failed craft is
//! a normal `false` outcome; there is no error control flow in here.

use std::collections::HashMap;

/// Recipe category shown in the crafting UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipeCategory {
    Tools,
    Weapons,
    Armor,
    Food,
    Blocks,
}

/// One (item, amount) pair, consumed as an ingredient or produced as output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub item: &'static str,
    pub amount: u32,
}

impl Ingredient {
    const fn new(item: &'static str, amount: u32) -> Self {
        Self { item, amount }
    }
}

/// Skill gate on a recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillRequirement {
    pub skill: &'static str,
    pub min_level: u32,
}

/// A crafting rule: consume the ingredients, produce the output.
/// Immutable after registration.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: &'static str,
    pub name: &'static str,
    pub category: RecipeCategory,
    pub ingredients: Vec<Ingredient>,
    pub output: Ingredient,
    /// Seconds the craft takes (consumed by the UI/progress collaborator).
    pub craft_time: f32,
    pub skill: Option<SkillRequirement>,
}

/// Item counts owned by a player or other entity. Counts are never negative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: HashMap<String, u32>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count of an item; absent items count as zero.
    pub fn count(&self, item: &str) -> u32 {
        self.items.get(item).copied().unwrap_or(0)
    }

    /// Add items, creating the entry if absent.
    pub fn add(&mut self, item: &str, amount: u32) {
        *self.items.entry(item.to_owned()).or_insert(0) += amount;
    }

    /// Remove up to `amount` items. Returns true if the full amount was
    /// available and removed; on false the inventory is untouched.
    pub fn remove(&mut self, item: &str, amount: u32) -> bool {
        match self.items.get_mut(item) {
            Some(count) if *count >= amount => {
                *count -= amount;
                true
            }
            _ => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.values().all(|&c| c == 0)
    }

    /// Iterate over (item, count) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

/// Holds the recipe catalog and executes inventory transformations.
pub struct CraftingEngine {
    /// Registration order (category listings must preserve it).
    recipes: Vec<Recipe>,
    /// Recipe id → index into `recipes`.
    index: HashMap<&'static str, usize>,
}

impl Default for CraftingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CraftingEngine {
    /// Build the engine with the fixed recipe catalog.
    pub fn new() -> Self {
        let recipes = recipe_catalog();
        debug_assert!(recipes
            .iter()
            .all(|r| r.output.amount > 0 && r.ingredients.iter().all(|i| i.amount > 0)));

        let index = recipes
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id, i))
            .collect();

        Self { recipes, index }
    }

    /// Look up a recipe by id.
    pub fn get_recipe(&self, id: &str) -> Option<&Recipe> {
        self.index.get(id).map(|&i| &self.recipes[i])
    }

    /// All recipes, in registration order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Recipes of one category, in registration order.
    pub fn recipes_by_category(&self, category: RecipeCategory) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|r| r.category == category)
            .collect()
    }

    /// True iff the inventory covers every ingredient. Pure; no mutation.
    pub fn can_craft(&self, recipe: &Recipe, inventory: &Inventory) -> bool {
        recipe
            .ingredients
            .iter()
            .all(|ing| inventory.count(ing.item) >= ing.amount)
    }

    /// Execute a craft. Returns false (inventory untouched) when the
    /// precondition fails; otherwise consumes every ingredient, adds the
    /// output, and returns true. Not reentrant per inventory.
    pub fn craft(&self, recipe: &Recipe, inventory: &mut Inventory) -> bool {
        if !self.can_craft(recipe, inventory) {
            return false;
        }

        for ing in &recipe.ingredients {
            // Cannot fail: can_craft checked availability above.
            inventory.remove(ing.item, ing.amount);
        }
        inventory.add(recipe.output.item, recipe.output.amount);

        true
    }
}

/// The fixed compiled-in catalog: 16 recipes spanning all five categories.
fn recipe_catalog() -> Vec<Recipe> {
    vec![
        // ── Tools ───────────────────────────────────────────────────────
        Recipe {
            id: "wooden_pick",
            name: "Wooden Pickaxe",
            category: RecipeCategory::Tools,
            ingredients: vec![
                Ingredient::new("wood", 15),
                Ingredient::new("stone", 5),
                Ingredient::new("rope", 2),
            ],
            output: Ingredient::new("wooden_pickaxe", 1),
            craft_time: 10.0,
            skill: Some(SkillRequirement { skill: "crafting", min_level: 1 }),
        },
        Recipe {
            id: "stone_pick",
            name: "Stone Pickaxe",
            category: RecipeCategory::Tools,
            ingredients: vec![
                Ingredient::new("stone", 20),
                Ingredient::new("wood", 10),
                Ingredient::new("rope", 3),
            ],
            output: Ingredient::new("stone_pickaxe", 1),
            craft_time: 15.0,
            skill: Some(SkillRequirement { skill: "crafting", min_level: 2 }),
        },
        Recipe {
            id: "workbench",
            name: "Workbench",
            category: RecipeCategory::Blocks,
            ingredients: vec![
                Ingredient::new("wood", 30),
                Ingredient::new("nail", 20),
                Ingredient::new("scrap_iron", 10),
            ],
            output: Ingredient::new("workbench", 1),
            craft_time: 20.0,
            skill: None,
        },
        // ── Weapons ─────────────────────────────────────────────────────
        Recipe {
            id: "wooden_club",
            name: "Wooden Club",
            category: RecipeCategory::Weapons,
            ingredients: vec![Ingredient::new("wood", 10), Ingredient::new("rope", 2)],
            output: Ingredient::new("wooden_club", 1),
            craft_time: 5.0,
            skill: None,
        },
        Recipe {
            id: "hunting_rifle",
            name: "Hunting Rifle",
            category: RecipeCategory::Weapons,
            ingredients: vec![
                Ingredient::new("scrap_iron", 50),
                Ingredient::new("wood", 20),
                Ingredient::new("gunpowder", 15),
            ],
            output: Ingredient::new("hunting_rifle", 1),
            craft_time: 30.0,
            skill: Some(SkillRequirement { skill: "weapon_smithing", min_level: 3 }),
        },
        Recipe {
            id: "machete",
            name: "Machete",
            category: RecipeCategory::Weapons,
            ingredients: vec![Ingredient::new("scrap_iron", 30), Ingredient::new("wood", 5)],
            output: Ingredient::new("machete", 1),
            craft_time: 15.0,
            skill: Some(SkillRequirement { skill: "weapon_smithing", min_level: 2 }),
        },
        // ── Armor ───────────────────────────────────────────────────────
        Recipe {
            id: "leather_armor",
            name: "Leather Armor",
            category: RecipeCategory::Armor,
            ingredients: vec![
                Ingredient::new("leather", 30),
                Ingredient::new("rope", 10),
                Ingredient::new("nail", 20),
            ],
            output: Ingredient::new("leather_armor", 1),
            craft_time: 20.0,
            skill: Some(SkillRequirement { skill: "armor_smithing", min_level: 1 }),
        },
        Recipe {
            id: "steel_armor",
            name: "Steel Armor",
            category: RecipeCategory::Armor,
            ingredients: vec![
                Ingredient::new("scrap_iron", 80),
                Ingredient::new("leather", 20),
                Ingredient::new("nail", 40),
            ],
            output: Ingredient::new("steel_armor", 1),
            craft_time: 40.0,
            skill: Some(SkillRequirement { skill: "armor_smithing", min_level: 3 }),
        },
        // ── Medical (catalogued under food) ─────────────────────────────
        Recipe {
            id: "bandage",
            name: "Bandage",
            category: RecipeCategory::Food,
            ingredients: vec![
                Ingredient::new("cloth", 3),
                Ingredient::new("plant_fiber", 2),
            ],
            output: Ingredient::new("bandage", 1),
            craft_time: 3.0,
            skill: None,
        },
        Recipe {
            id: "antibiotics",
            name: "Antibiotics",
            category: RecipeCategory::Food,
            ingredients: vec![
                Ingredient::new("medicinal_herb", 5),
                Ingredient::new("charcoal", 2),
                Ingredient::new("glass", 1),
            ],
            output: Ingredient::new("antibiotics", 1),
            craft_time: 15.0,
            skill: Some(SkillRequirement { skill: "medicine", min_level: 2 }),
        },
        // ── Food ────────────────────────────────────────────────────────
        Recipe {
            id: "cooked_meat",
            name: "Cooked Meat",
            category: RecipeCategory::Food,
            ingredients: vec![Ingredient::new("raw_meat", 1)],
            output: Ingredient::new("cooked_meat", 1),
            craft_time: 5.0,
            skill: None,
        },
        Recipe {
            id: "bread",
            name: "Bread",
            category: RecipeCategory::Food,
            ingredients: vec![
                Ingredient::new("flour", 3),
                Ingredient::new("salt", 1),
                Ingredient::new("water", 2),
            ],
            output: Ingredient::new("bread", 3),
            craft_time: 10.0,
            skill: None,
        },
        // ── Blocks ──────────────────────────────────────────────────────
        Recipe {
            id: "wooden_block",
            name: "Wooden Block",
            category: RecipeCategory::Blocks,
            ingredients: vec![Ingredient::new("wood", 5), Ingredient::new("nail", 5)],
            output: Ingredient::new("wooden_block", 1),
            craft_time: 2.0,
            skill: None,
        },
        Recipe {
            id: "concrete_block",
            name: "Concrete Block",
            category: RecipeCategory::Blocks,
            ingredients: vec![
                Ingredient::new("cement", 5),
                Ingredient::new("gravel", 10),
                Ingredient::new("water", 2),
            ],
            output: Ingredient::new("concrete_block", 1),
            craft_time: 5.0,
            skill: Some(SkillRequirement { skill: "construction", min_level: 1 }),
        },
        Recipe {
            id: "steel_block",
            name: "Steel Block",
            category: RecipeCategory::Blocks,
            ingredients: vec![
                Ingredient::new("scrap_iron", 15),
                Ingredient::new("coal", 5),
            ],
            output: Ingredient::new("steel_block", 1),
            craft_time: 8.0,
            skill: Some(SkillRequirement { skill: "construction", min_level: 2 }),
        },
        // ── Ammunition ──────────────────────────────────────────────────
        Recipe {
            id: "rifle_ammo",
            name: "Rifle Ammo",
            category: RecipeCategory::Weapons,
            ingredients: vec![
                Ingredient::new("bullet_casing", 1),
                Ingredient::new("gunpowder", 3),
                Ingredient::new("lead", 1),
            ],
            output: Ingredient::new("rifle_ammo", 20),
            craft_time: 5.0,
            skill: Some(SkillRequirement { skill: "ammunition_smithing", min_level: 1 }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inv(items: &[(&str, u32)]) -> Inventory {
        let mut inventory = Inventory::new();
        for &(item, count) in items {
            inventory.add(item, count);
        }
        inventory
    }

    #[test]
    fn catalog_spans_all_categories_with_valid_amounts() {
        let engine = CraftingEngine::new();
        assert!(engine.recipes().len() >= 15);
        for category in [
            RecipeCategory::Tools,
            RecipeCategory::Weapons,
            RecipeCategory::Armor,
            RecipeCategory::Food,
            RecipeCategory::Blocks,
        ] {
            assert!(
                !engine.recipes_by_category(category).is_empty(),
                "no recipes for {:?}",
                category
            );
        }
        for recipe in engine.recipes() {
            assert!(recipe.output.amount > 0);
            assert!(recipe.ingredients.iter().all(|i| i.amount > 0));
        }
    }

    #[test]
    fn get_recipe_absent_is_none() {
        let engine = CraftingEngine::new();
        assert!(engine.get_recipe("wooden_pick").is_some());
        assert!(engine.get_recipe("plasma_rifle").is_none());
    }

    #[test]
    fn category_listing_preserves_registration_order() {
        let engine = CraftingEngine::new();
        let weapons = engine.recipes_by_category(RecipeCategory::Weapons);
        let ids: Vec<_> = weapons.iter().map(|r| r.id).collect();
        assert_eq!(ids, ["wooden_club", "hunting_rifle", "machete", "rifle_ammo"]);
    }

    #[test]
    fn can_craft_requires_every_ingredient() {
        let engine = CraftingEngine::new();
        let recipe = engine.get_recipe("wooden_club").unwrap();
        assert!(engine.can_craft(recipe, &inv(&[("wood", 10), ("rope", 2)])));
        assert!(!engine.can_craft(recipe, &inv(&[("wood", 10), ("rope", 1)])));
        assert!(!engine.can_craft(recipe, &inv(&[("wood", 9), ("rope", 2)])));
    }

    /// The worked example: exact ingredients in, exact counts out.
    #[test]
    fn craft_wooden_pick_consumes_and_produces() {
        let engine = CraftingEngine::new();
        let recipe = engine.get_recipe("wooden_pick").unwrap();
        let mut inventory = inv(&[("wood", 15), ("stone", 5), ("rope", 2)]);

        assert!(engine.craft(recipe, &mut inventory));
        assert_eq!(inventory.count("wood"), 0);
        assert_eq!(inventory.count("stone"), 0);
        assert_eq!(inventory.count("rope"), 0);
        assert_eq!(inventory.count("wooden_pickaxe"), 1);
    }

    #[test]
    fn failed_craft_leaves_inventory_untouched() {
        let engine = CraftingEngine::new();
        let recipe = engine.get_recipe("wooden_pick").unwrap();
        let mut inventory = inv(&[("wood", 14), ("stone", 5), ("rope", 2)]);
        let before = inventory.clone();

        assert!(!engine.craft(recipe, &mut inventory));
        assert_eq!(inventory, before);
    }

    #[test]
    fn craft_accumulates_existing_output() {
        let engine = CraftingEngine::new();
        let recipe = engine.get_recipe("rifle_ammo").unwrap();
        let mut inventory = inv(&[
            ("bullet_casing", 2),
            ("gunpowder", 6),
            ("lead", 2),
            ("rifle_ammo", 7),
        ]);

        assert!(engine.craft(recipe, &mut inventory));
        assert_eq!(inventory.count("rifle_ammo"), 27);
        assert!(engine.craft(recipe, &mut inventory));
        assert_eq!(inventory.count("rifle_ammo"), 47);
        assert_eq!(inventory.count("bullet_casing"), 0);
    }

    #[test]
    fn inventory_remove_is_all_or_nothing() {
        let mut inventory = inv(&[("wood", 3)]);
        assert!(!inventory.remove("wood", 5));
        assert_eq!(inventory.count("wood"), 3);
        assert!(inventory.remove("wood", 3));
        assert_eq!(inventory.count("wood"), 0);
        assert!(inventory.is_empty());
    }
}
