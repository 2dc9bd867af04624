// ABOUTME: Integration tests for recipe catalog loading and validation
// ABOUTME: Checks the bundled catalog contents and rejection of malformed catalog files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::HashSet;
use std::fs;

use little_chef::catalog;
use little_chef::errors::ErrorCode;
use little_chef::models::{Category, RecipeCatalog, SlotKey};
use serde_json::json;
use tempfile::TempDir;

fn minimal_catalog() -> serde_json::Value {
    json!({
        "categories": {
            "breakfast": [{"name": "小米粥", "ingredients": ["小米"]}],
            "lunch_meat": [{"name": "虾仁炒蛋", "ingredients": ["虾仁", "鸡蛋"]}],
            "lunch_veg": [{"name": "炒青菜", "ingredients": ["青菜"]}],
            "soup": [{"name": "紫菜汤", "ingredients": ["紫菜"]}]
        },
        "fruit": ["苹果"]
    })
}

// ============================================================================
// Built-in catalog
// ============================================================================

#[test]
fn test_builtin_catalog_pool_sizes() {
    let catalog = common::builtin_catalog();
    let sizes: Vec<(Category, usize)> = Category::ALL
        .into_iter()
        .map(|c| (c, catalog.pool(c).len()))
        .collect();

    assert_eq!(
        sizes,
        vec![
            (Category::Breakfast, 20),
            (Category::LunchMeat, 20),
            (Category::LunchVeg, 15),
            (Category::Soup, 20),
            (Category::DinnerMeat, 15),
            (Category::DinnerVeg, 10),
        ]
    );
    assert_eq!(catalog.recipe_count(), 100);
    assert_eq!(catalog.fruit().len(), 20);
    assert_eq!(catalog.pantry_groups().len(), 3);
}

#[test]
fn test_builtin_catalog_is_shared() {
    let a = catalog::builtin().unwrap();
    let b = catalog::builtin().unwrap();
    assert!(std::sync::Arc::ptr_eq(&a, &b));
}

#[test]
fn test_builtin_dishes_have_ingredients() {
    let catalog = common::builtin_catalog();
    for category in Category::ALL {
        for recipe in catalog.pool(category) {
            assert!(!recipe.ingredients.is_empty(), "{} has no ingredients", recipe.name);
            assert!(!recipe.steps.is_empty(), "{} has no steps", recipe.name);
        }
    }
}

#[test]
fn test_builtin_find_by_name() {
    let catalog = common::builtin_catalog();
    let recipe = catalog.find("🍅 番茄土豆炖牛腩").unwrap();
    assert_eq!(recipe.ingredients, vec!["牛肉", "土豆", "西红柿"]);
    assert!(catalog.find("不存在的菜").is_none());
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_optional_dinner_pools_fall_back_to_lunch() {
    let catalog = RecipeCatalog::from_json(&minimal_catalog().to_string()).unwrap();
    assert!(catalog.pool(Category::DinnerMeat).is_empty());
    assert_eq!(catalog.pool_for(SlotKey::DinnerMeat)[0].name, "虾仁炒蛋");
    assert_eq!(catalog.pool_for(SlotKey::DinnerVeg)[0].name, "炒青菜");
    assert_eq!(catalog.pool_for(SlotKey::DinnerSoup)[0].name, "紫菜汤");
}

#[test]
fn test_unknown_category_is_rejected() {
    let mut raw = minimal_catalog();
    raw["categories"]["dessert"] = json!([{"name": "布丁", "ingredients": ["牛奶"]}]);

    let err = RecipeCatalog::from_json(&raw.to_string()).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("dessert"));
}

#[test]
fn test_missing_required_category_is_rejected() {
    let mut raw = minimal_catalog();
    raw["categories"].as_object_mut().unwrap().remove("soup");

    let err = RecipeCatalog::from_json(&raw.to_string()).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
    assert!(err.message.contains("soup"));
}

#[test]
fn test_duplicate_dish_name_is_rejected() {
    let mut raw = minimal_catalog();
    raw["categories"]["breakfast"] = json!([
        {"name": "小米粥", "ingredients": ["小米"]},
        {"name": "小米粥", "ingredients": ["小米", "南瓜"]}
    ]);

    let err = RecipeCatalog::from_json(&raw.to_string()).unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
}

#[test]
fn test_malformed_json_is_serialization_error() {
    let err = RecipeCatalog::from_json("{\"categories\": []").unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

// ============================================================================
// Catalog files
// ============================================================================

#[test]
fn test_from_file_loads_custom_catalog() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recipes.json");
    fs::write(&path, minimal_catalog().to_string()).unwrap();

    let catalog = catalog::from_file(&path).unwrap();
    let names: HashSet<&str> = Category::ALL
        .into_iter()
        .flat_map(|c| catalog.pool(c))
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names.len(), 4);
    assert_eq!(catalog.fruit(), ["苹果".to_owned()]);
}

#[test]
fn test_from_file_missing_is_storage_error() {
    let dir = TempDir::new().unwrap();
    let err = catalog::from_file(&dir.path().join("absent.json")).unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
}
