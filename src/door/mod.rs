pub mod components;
pub mod events;
mod systems;

use bevy::prelude::*;
use crate::core::states::AppState;
use events::*;
use systems::*;

pub struct DoorPlugin;
impl Plugin for DoorPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<OpenDoorEvent>()
            .add_event::<ListDoorsEvent>()
            .add_systems(
                Update,
                (open_doors, animate_doors, list_doors)
                    .chain()
                    .run_if(in_state(AppState::InGame)),
            );
    }
}
