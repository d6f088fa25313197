use std::sync::Arc;

use potato_blocker_util::math::position::BlockPos;

use super::{Cancellable, Event};
use crate::plugin::api::player::Player;

/// A player used an item on a block.
pub struct PlayerInteractBlockEvent {
    /// The interacting player.
    pub player: Arc<dyn Player>,

    /// Type name of the item in hand, e.g. `minecraft:bone_meal`.
    pub item: String,

    /// Position of the targeted block.
    pub block_pos: BlockPos,

    /// Type name of the targeted block, when the host resolved it already.
    pub block: Option<String>,

    cancelled: bool,
}

impl PlayerInteractBlockEvent {
    #[must_use]
    pub fn new(
        player: Arc<dyn Player>,
        item: impl Into<String>,
        block_pos: BlockPos,
        block: Option<String>,
    ) -> Self {
        Self {
            player,
            item: item.into(),
            block_pos,
            block,
            cancelled: false,
        }
    }
}

impl Event for PlayerInteractBlockEvent {
    fn get_name_static() -> &'static str {
        "PlayerInteractBlockEvent"
    }

    fn get_name(&self) -> &'static str {
        Self::get_name_static()
    }
}

impl Cancellable for PlayerInteractBlockEvent {
    fn cancelled(&self) -> bool {
        self.cancelled
    }

    fn set_cancelled(&mut self, cancelled: bool) {
        self.cancelled = cancelled;
    }
}
