//! Content domain: unit tests for RON parsing and the registry.

use super::data::{AttackDef, DataFile, ItemDef};
use super::loader::ron_options;
use super::registry::ContentRegistry;
use crate::combat::DamageType;

#[test]
fn parses_attack_definitions_with_implicit_some() {
    let source = r#"
        (
            schema_version: 1,
            items: [
                (
                    id: "attack_slash",
                    name: "Slash",
                    damage: 10,
                    damage_type: Physical,
                    window: (enable_time: 0.2, disable_time: 0.5),
                ),
                (
                    id: "attack_bite",
                    name: "Bite",
                    damage: 6,
                    damage_type: Poison,
                    window: None,
                ),
            ],
        )
    "#;

    let data: DataFile<AttackDef> = ron_options().from_str(source).unwrap();
    assert_eq!(data.schema_version, 1);
    assert_eq!(data.items.len(), 2);

    let window = data.items[0].window.unwrap();
    assert_eq!(window.enable_time, 0.2);
    assert_eq!(window.disable_time, 0.5);
    assert_eq!(data.items[0].damage_type, DamageType::Physical);

    assert!(data.items[1].window.is_none());
    assert_eq!(data.items[1].damage_type, DamageType::Poison);
}

#[test]
fn parses_item_definitions() {
    let source = r#"
        (
            schema_version: 1,
            items: [
                (id: "item_flame_sword", name: "Flame Sword", slot: "main_hand", damage_type: Fire),
                (id: "item_buckler", name: "Buckler", slot: "off_hand", damage_type: None),
            ],
        )
    "#;

    let data: DataFile<ItemDef> = ron_options().from_str(source).unwrap();
    assert_eq!(data.items.len(), 2);
    assert_eq!(data.items[0].damage_type, Some(DamageType::Fire));
    assert!(data.items[1].damage_type.is_none());
}

#[test]
fn registry_summary_reports_counts() {
    let mut registry = ContentRegistry::default();
    registry.items.insert(
        "item_flame_sword".to_string(),
        ItemDef {
            id: "item_flame_sword".to_string(),
            name: "Flame Sword".to_string(),
            slot: "main_hand".to_string(),
            damage_type: Some(DamageType::Fire),
        },
    );
    registry.attacks.insert(
        "attack_slash".to_string(),
        AttackDef {
            id: "attack_slash".to_string(),
            name: "Slash".to_string(),
            damage: 10,
            damage_type: DamageType::Physical,
            window: None,
        },
    );

    assert_eq!(registry.total_count(), 2);
    let summary = registry.summary();
    assert!(summary.contains("Items: 1"));
    assert!(summary.contains("Attacks: 1"));
}
