use bevy::prelude::*;

use super::components::Inventory;

const SLOT_SIZE: f32 = 64.0;
const SELECTED_COLOR: Color = Color::srgb(0.5, 0.5, 0.5);

/// 槽位底框，子实体是图标
#[derive(Component, Debug, Clone, Copy)]
pub struct InventorySlotFrame {
    pub index: usize,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct InventorySlotIcon {
    pub index: usize,
}

#[derive(Component)]
pub struct SelectedItemLabel;

/// 屏幕底部的物品栏
pub fn spawn_inventory_hud(mut commands: Commands, inventory: Res<Inventory>) {
    commands
        .spawn((
            Name::new("InventoryHud"),
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(16.0),
                width: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                row_gap: Val::Px(6.0),
                ..default()
            },
        ))
        .with_children(|hud| {
            hud.spawn((SelectedItemLabel, Text::new(""), TextFont::from_font_size(20.0)));
            hud.spawn(Node {
                column_gap: Val::Px(8.0),
                ..default()
            })
            .with_children(|bar| {
                for index in 0..inventory.slot_count() {
                    bar.spawn((
                        InventorySlotFrame { index },
                        Node {
                            width: Val::Px(SLOT_SIZE),
                            height: Val::Px(SLOT_SIZE),
                            padding: UiRect::all(Val::Px(6.0)),
                            ..default()
                        },
                        BackgroundColor(Color::WHITE),
                    ))
                    .with_children(|frame| {
                        frame.spawn((
                            InventorySlotIcon { index },
                            ImageNode::default(),
                            Node {
                                width: Val::Percent(100.0),
                                height: Val::Percent(100.0),
                                ..default()
                            },
                            Visibility::Hidden,
                        ));
                    });
                }
            });
        });
}

/// 背包每次变化后同帧刷新：图标、选中高亮、名字标签
pub fn refresh_inventory_ui(
    inventory: Res<Inventory>,
    mut icons: Query<(&InventorySlotIcon, &mut ImageNode, &mut Visibility, Option<&ChildOf>)>,
    mut frames: Query<&mut BackgroundColor, With<InventorySlotFrame>>,
    mut labels: Query<&mut Text, With<SelectedItemLabel>>,
) {
    for (slot, mut image, mut visibility, parent) in &mut icons {
        match inventory.items().get(slot.index) {
            Some(item) => {
                image.image = item.icon.clone();
                *visibility = Visibility::Inherited;
            }
            None => {
                image.image = Handle::default();
                *visibility = Visibility::Hidden;
            }
        }

        let frame = parent.and_then(|p| frames.get_mut(p.parent()).ok());
        match frame {
            Some(mut color) => {
                color.0 = if slot.index == inventory.selected_slot() {
                    SELECTED_COLOR
                } else {
                    Color::WHITE
                };
            }
            None => warn!("Slot {} has no frame", slot.index),
        }
    }

    match labels.single_mut() {
        Ok(mut text) => text.0 = inventory.selected_item_name().to_string(),
        Err(_) => warn!("Selected item label is missing from the HUD"),
    }
}
