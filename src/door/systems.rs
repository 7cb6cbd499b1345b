use super::{components::*, events::*};
use crate::core::events::LogEvent;
use bevy::prelude::*;

pub fn open_doors(
    mut ev_open: EventReader<OpenDoorEvent>,
    mut doors: Query<(&mut Door, Option<&Name>)>,
    mut log: EventWriter<LogEvent>,
) {
    for ev in ev_open.read() {
        let Ok((mut door, name)) = doors.get_mut(ev.door) else {
            continue;
        };
        if door.open() {
            let name = name.map_or("<unnamed>", |n| n.as_str());
            info!("Opening door: {name}");
            log.write(LogEvent(format!("Opening door: {name}")));
        }
    }
}

pub fn animate_doors(time: Res<Time>, mut doors: Query<(&mut Door, &mut Transform)>) {
    let dt = time.delta_secs();
    for (mut door, mut transform) in &mut doors {
        if let Some(position) = door.advance(transform.translation, dt) {
            transform.translation = position;
        }
    }
}

pub fn list_doors(
    mut ev_list: EventReader<ListDoorsEvent>,
    doors: Query<(&Door, Option<&Name>)>,
    mut log: EventWriter<LogEvent>,
) {
    if ev_list.is_empty() {
        return;
    }
    ev_list.clear();

    for (door, name) in &doors {
        let state = match door.state {
            DoorState::Closed => "closed".to_string(),
            DoorState::Opening { moved } => format!("opening {moved:.1}/{}", door.move_distance),
            DoorState::Open => "open".to_string(),
        };
        log.write(LogEvent(format!(
            "{} | mask: {:?} | {}",
            name.map_or("<unnamed>", |n| n.as_str()),
            door.required_mask,
            state
        )));
    }
}
