use super::{components::*, events::*};
use crate::core::events::LogEvent;
use crate::data::{GameData, schema::ItemCatalog};
use bevy::prelude::*;

/// 处理"give"：按静态表条目生成背包物品
pub fn give_item(
    mut ev_give: EventReader<GiveItemEvent>,
    mut inventory: ResMut<Inventory>,
    mut log: EventWriter<LogEvent>,
    data: Res<GameData>,
    catalogs: Res<Assets<ItemCatalog>>,
    asset_server: Res<AssetServer>,
) {
    for ev in ev_give.read() {
        let Some(entry) = data.item(&catalogs, &ev.id) else {
            warn!("不存在物品 ID {}", ev.id);
            continue;
        };

        let item = InventoryItem {
            icon: asset_server.load(entry.icon.clone()),
            drop_prefab: entry.drop_prefab(),
            name: entry.name.clone(),
        };
        if inventory.add(item) {
            log.write(LogEvent(format!("获得 {}", entry.name)));
        } else {
            log.write(LogEvent(format!("背包已满，无法获得 {}", entry.name)));
        }
    }
}

pub fn select_slot(
    mut ev_select: EventReader<SelectSlotEvent>,
    mut inventory: ResMut<Inventory>,
) {
    for SelectSlotEvent(slot) in ev_select.read() {
        if !inventory.select(*slot) {
            warn!("槽位 {} 超出范围", slot + 1);
        }
    }
}

pub fn remove_item(
    mut ev_remove: EventReader<RemoveItemEvent>,
    mut inventory: ResMut<Inventory>,
    mut log: EventWriter<LogEvent>,
) {
    for ev in ev_remove.read() {
        match inventory.remove(ev.index) {
            Some(item) => log.write(LogEvent(format!("消耗了 {}", item.name))),
            None => log.write(LogEvent("该背包格为空".to_string())),
        };
    }
}

/// 打印背包内容
pub fn print_inventory(
    mut ev_list: EventReader<ListInventoryEvent>,
    inventory: Res<Inventory>,
    mut log: EventWriter<LogEvent>,
) {
    if ev_list.is_empty() {
        return;
    }
    ev_list.clear();

    for slot in 0..inventory.slot_count() {
        let marker = if slot == inventory.selected_slot() { '>' } else { ' ' };
        let line = match inventory.items().get(slot) {
            Some(item) => format!(
                "{marker}[{}] {} (prefab={})",
                slot + 1,
                item.name,
                item.drop_prefab.as_deref().unwrap_or("-")
            ),
            None => format!("{marker}[{}] (empty)", slot + 1),
        };
        log.write(LogEvent(line));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    fn app_with_items(names: &[&str]) -> App {
        let mut app = App::new();
        let mut inventory = Inventory::new(3);
        for name in names {
            inventory.add(InventoryItem {
                name: name.to_string(),
                drop_prefab: Some(name.to_lowercase()),
                ..default()
            });
        }
        app.insert_resource(inventory)
            .add_event::<SelectSlotEvent>()
            .add_event::<RemoveItemEvent>()
            .add_event::<LogEvent>()
            .add_systems(Update, (select_slot, remove_item));
        app
    }

    #[test]
    fn slot_events_update_selection() {
        let mut app = app_with_items(&["Blue Mask"]);
        app.world_mut().resource_mut::<Inventory>().select(2);

        app.world_mut()
            .run_system_once(|mut w: EventWriter<SelectSlotEvent>| {
                w.write(SelectSlotEvent(0));
                w.write(SelectSlotEvent(7));
            })
            .unwrap();
        app.update();
        assert_eq!(app.world().resource::<Inventory>().selected_slot(), 0);
    }

    #[test]
    fn remove_event_consumes_item() {
        let mut app = app_with_items(&["Apple", "Blue Mask"]);

        app.world_mut()
            .run_system_once(|mut w: EventWriter<RemoveItemEvent>| {
                w.write(RemoveItemEvent { index: 0 });
            })
            .unwrap();
        app.update();

        let inventory = app.world().resource::<Inventory>();
        assert_eq!(inventory.items().len(), 1);
        assert_eq!(inventory.selected_item_name(), "Blue Mask");
    }
}
