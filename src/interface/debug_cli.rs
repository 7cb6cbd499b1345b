//! 文字 CLI：读取 stdin → 解析命令 → 执行并打印

use bevy::app::AppExit;
use bevy::prelude::*;
use once_cell::sync::Lazy;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::core::{events::LogEvent, states::AppState};
use crate::data::{GameData, schema::ItemCatalog};
use crate::door::events::ListDoorsEvent;
use crate::inventory::{components::Inventory, events::*};

static CLI_BUFFER: Lazy<Arc<Mutex<VecDeque<String>>>> =
    Lazy::new(|| Arc::new(Mutex::new(VecDeque::new())));

/// 插件入口
pub struct DebugCliPlugin;
impl Plugin for DebugCliPlugin {
    fn build(&self, app: &mut App) {
        {
            let buffer = CLI_BUFFER.clone();
            std::thread::spawn(move || {
                use std::io::{self, BufRead};
                let stdin = io::stdin();
                for line in stdin.lock().lines().map_while(Result::ok) {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    match buffer.lock() {
                        Ok(mut buf) => buf.push_back(line.to_string()),
                        Err(_) => break,
                    }
                }
            });
        }
        app
            // 事件：原始输入行
            .add_event::<CliLine>()
            // 每帧从 buffer 取出所有命令行写入事件
            .add_systems(Update, read_stdin)
            // 仅在 InGame 处理命令
            .add_systems(
                Update,
                execute_cli_commands
                    .after(read_stdin)
                    .run_if(in_state(AppState::InGame)),
            );
    }
}

/* ---------------------------- 事件与枚举 ---------------------------- */

/// 终端敲的一整行
#[derive(Event)]
struct CliLine(String);

/// 我们支持的命令
#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Status,
    Exit,
    Items(Option<String>), // None=全部；Some(token)=按 id/uuid/name 查询
    Give { id: String },
    Inventory,
    Select(usize),         // 从 1 开始，与数字键一致
    Drop,
    Remove(usize),
    Doors,
    Invalid(String),
    Unsupported(String),
}

/* ---------------------------- 读取 stdin ---------------------------- */

fn read_stdin(mut writer: EventWriter<CliLine>) {
    let Ok(mut buffer) = CLI_BUFFER.lock() else {
        return;
    };
    while let Some(line) = buffer.pop_front() {
        writer.write(CliLine(line));
    }
}

/* ---------------------------- 命令执行 ---------------------------- */

#[allow(clippy::too_many_arguments)]
fn execute_cli_commands(
    mut line_reader: EventReader<CliLine>,
    mut app_exit: EventWriter<AppExit>,
    mut log: EventWriter<LogEvent>,
    state: Res<State<AppState>>,
    data: Res<GameData>,
    catalogs: Res<Assets<ItemCatalog>>,
    inventory: Res<Inventory>,
    mut ev_give: EventWriter<GiveItemEvent>,
    mut ev_list: EventWriter<ListInventoryEvent>,
    mut ev_select: EventWriter<SelectSlotEvent>,
    mut ev_drop: EventWriter<DropSelectedEvent>,
    mut ev_remove: EventWriter<RemoveItemEvent>,
    mut ev_doors: EventWriter<ListDoorsEvent>,
) {
    for CliLine(input) in line_reader.read() {
        match parse_command(input) {
            Command::Help => {
                log.write(LogEvent(
                    "命令列表:
  help                   查看帮助
  status                 查看当前状态
  exit / quit            退出程序
  items                  列出所有物品
  items <token>          用 id / uuid / 名称 查询单个物品
  give <id>              把物品放进背包
  inventory              查看物品栏
  select <slot>          选中槽位（从 1 开始）
  drop                   丢出选中物品
  remove <slot>          消耗槽位里的物品
  doors                  查看所有门
  ".into()));
            }

            Command::Status => {
                let cnt = data.catalog(&catalogs).map_or(0, |c| c.items.len());
                log.write(LogEvent(format!(
                    "State: {:?}, Items Loaded: {}, Inventory: {}/{}, Selected: {} {:?}",
                    state.get(),
                    cnt,
                    inventory.items().len(),
                    inventory.slot_count(),
                    inventory.selected_slot() + 1,
                    inventory.selected_item_name(),
                )));
            }

            Command::Exit => {
                log.write(LogEvent("Bye~".into()));
                app_exit.write(AppExit::Success);
            }

            Command::Items(token) => {
                let Some(catalog) = data.catalog(&catalogs) else {
                    continue;
                };
                match token {
                    None => {
                        // 全部列出
                        for entry in &catalog.items {
                            let uuid = uuid_from_id(&entry.id);
                            log.write(LogEvent(format!(
                                "{} | {} | {}",
                                uuid, entry.id, entry.name
                            )));
                        }
                    }
                    Some(t) => {
                        // 按三种字段匹配
                        let t_low = t.to_lowercase();
                        if let Some(e) = catalog.items.iter().find(|e| {
                            e.id.eq_ignore_ascii_case(&t_low)
                                || e.name.eq_ignore_ascii_case(&t_low)
                                || uuid_from_id(&e.id).to_string() == t_low
                        }) {
                            let uuid = uuid_from_id(&e.id);
                            log.write(LogEvent(format!(
                                "==================================================
UUID  : {uuid}
ID    : {}
Name  : {}
Icon  : {}
Shape : {:?}
Drop  : {}
==================================================",
                                e.id,
                                e.name,
                                e.icon,
                                e.shape,
                                if e.droppable { "yes" } else { "no" }
                            )));
                        } else {
                            log.write(LogEvent("未找到匹配物品".into()));
                        }
                    }
                }
            }

            Command::Give { id } => {
                ev_give.write(GiveItemEvent { id });
            }

            Command::Inventory => {
                ev_list.write(ListInventoryEvent);
            }

            Command::Select(slot) => {
                ev_select.write(SelectSlotEvent(slot - 1));
            }

            Command::Drop => {
                ev_drop.write(DropSelectedEvent);
            }

            Command::Remove(slot) => {
                ev_remove.write(RemoveItemEvent { index: slot - 1 });
            }

            Command::Doors => {
                ev_doors.write(ListDoorsEvent);
            }

            Command::Invalid(usage) => {
                log.write(LogEvent(format!("用法: {usage}")));
            }

            Command::Unsupported(cmd) => {
                log.write(LogEvent(format!("不支持的命令: {cmd}")));
            }
        }
    }
}

/* ---------------------------- 工具函数 ---------------------------- */

fn parse_command(input: &str) -> Command {
    let mut parts = input.split_whitespace();
    let cmd = parts.next().unwrap_or("").to_lowercase();
    // 槽位从 1 开始
    let slot = |arg: Option<&str>| arg.and_then(|s| s.parse::<usize>().ok()).filter(|n| *n > 0);

    match cmd.as_str() {
        "help" | "h" | "?" => Command::Help,
        "status" | "s" => Command::Status,
        "exit" | "quit" | "q" => Command::Exit,
        "items" | "item" | "i" => {
            let token = parts.next().map(|s| s.to_string());
            Command::Items(token)
        }
        "give" => match parts.next() {
            Some(id) => Command::Give { id: id.to_string() },
            None => Command::Invalid("give <id>".into()),
        },
        "inventory" | "inv" => Command::Inventory,
        "select" | "sel" => match slot(parts.next()) {
            Some(n) => Command::Select(n),
            None => Command::Invalid("select <slot>".into()),
        },
        "drop" => Command::Drop,
        "remove" | "use" => match slot(parts.next()) {
            Some(n) => Command::Remove(n),
            None => Command::Invalid("remove <slot>".into()),
        },
        "doors" => Command::Doors,
        other => Command::Unsupported(other.into()),
    }
}

fn uuid_from_id(id: &str) -> Uuid {
    // 用固定 namespace + id 字节生成版本 5 UUID，保证可重复得到同一值
    Uuid::new_v5(&Uuid::NAMESPACE_OID, id.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_and_aliases() {
        assert_eq!(parse_command("HELP"), Command::Help);
        assert_eq!(parse_command("q"), Command::Exit);
        assert_eq!(parse_command("items"), Command::Items(None));
        assert_eq!(parse_command("i blue_mask"), Command::Items(Some("blue_mask".into())));
        assert_eq!(parse_command("give apple"), Command::Give { id: "apple".into() });
        assert_eq!(parse_command("sel 2"), Command::Select(2));
        assert_eq!(parse_command("use 1"), Command::Remove(1));
        assert_eq!(parse_command("drop"), Command::Drop);
        assert_eq!(parse_command("doors"), Command::Doors);
        assert_eq!(parse_command("dance"), Command::Unsupported("dance".into()));
    }

    #[test]
    fn rejects_missing_or_zero_arguments() {
        assert_eq!(parse_command("give"), Command::Invalid("give <id>".into()));
        assert_eq!(parse_command("select 0"), Command::Invalid("select <slot>".into()));
        assert_eq!(parse_command("remove x"), Command::Invalid("remove <slot>".into()));
    }

    #[test]
    fn uuid_is_stable_per_id() {
        assert_eq!(uuid_from_id("blue_mask"), uuid_from_id("blue_mask"));
        assert_ne!(uuid_from_id("blue_mask"), uuid_from_id("red_mask"));
    }
}
