mod common;

use std::sync::Arc;
use std::sync::atomic::Ordering;

use common::{MockPlayer, MockWorld, bone_meal_on};
use potato_blocker::blocker::InteractBlockHandler;
use potato_blocker::lang::MessageStore;
use potato_blocker::plugin::api::events::player_interact_block::PlayerInteractBlockEvent;
use potato_blocker::plugin::api::{Cancellable, EventHandler};
use potato_blocker::stats::BlockedCounter;
use potato_blocker_util::Language;
use potato_blocker_util::math::position::BlockPos;

const POS: BlockPos = BlockPos::new(10, 64, -5);

fn handler() -> (InteractBlockHandler, Arc<MessageStore>, Arc<BlockedCounter>) {
    let messages = Arc::new(MessageStore::new());
    let blocked = Arc::new(BlockedCounter::new());
    (
        InteractBlockHandler::new(messages.clone(), blocked.clone()),
        messages,
        blocked,
    )
}

#[tokio::test]
async fn bone_meal_on_potatoes_is_cancelled() {
    let (handler, _, blocked) = handler();
    let player = MockPlayer::new("Steve", Arc::new(MockWorld::default()));
    let mut event = bone_meal_on(player.clone(), POS, Some("minecraft:potatoes"));

    handler.handle_blocking(&mut event).await;

    assert!(event.cancelled());
    assert_eq!(blocked.get(), 1);
    assert_eq!(
        player.received(),
        ["§c骨粉不能用于土豆作物！", "§e你仍然可以在其他作物上使用骨粉。"]
    );
}

#[tokio::test]
async fn messages_follow_the_selected_language() {
    let (handler, messages, _) = handler();
    messages.set_language(Language::English);
    let player = MockPlayer::new("Alex", Arc::new(MockWorld::default()));
    let mut event = bone_meal_on(player.clone(), POS, Some("minecraft:potatoes"));

    handler.handle_blocking(&mut event).await;

    assert_eq!(
        player.received(),
        [
            "§cBone meal cannot be used on potato crops!",
            "§eYou can still use bone meal on other crops."
        ]
    );
}

#[tokio::test]
async fn other_items_are_ignored() {
    let (handler, _, blocked) = handler();
    let world = MockWorld::with_block(POS, "minecraft:potatoes");
    let player = MockPlayer::new("Steve", world.clone());

    for item in ["minecraft:wheat_seeds", "minecraft:BONE_MEAL", "bone_meal", ""] {
        let mut event = PlayerInteractBlockEvent::new(player.clone(), item, POS, None);
        handler.handle_blocking(&mut event).await;
        assert!(!event.cancelled(), "{item}");
    }

    assert_eq!(blocked.get(), 0);
    assert!(player.received().is_empty());
    assert_eq!(world.lookups.load(Ordering::Relaxed), 0);
}

#[tokio::test]
async fn other_crops_are_allowed() {
    let (handler, _, blocked) = handler();
    let player = MockPlayer::new("Steve", Arc::new(MockWorld::default()));

    for block in ["minecraft:carrots", "minecraft:wheat", "minecraft:potato"] {
        let mut event = bone_meal_on(player.clone(), POS, Some(block));
        handler.handle_blocking(&mut event).await;
        assert!(!event.cancelled(), "{block}");
    }

    assert_eq!(blocked.get(), 0);
    assert!(player.received().is_empty());
}

#[tokio::test]
async fn block_is_read_from_world_when_event_has_none() {
    let (handler, _, blocked) = handler();
    let world = MockWorld::with_block(POS, "minecraft:potatoes");
    let player = MockPlayer::new("Steve", world.clone());
    let mut event = bone_meal_on(player, POS, None);

    handler.handle_blocking(&mut event).await;

    assert!(event.cancelled());
    assert_eq!(blocked.get(), 1);
    assert_eq!(world.lookups.load(Ordering::Relaxed), 1);
}

#[tokio::test]
async fn world_lookup_failure_leaves_event_alone() {
    let (handler, _, blocked) = handler();
    let world = Arc::new(MockWorld::default());
    let player = MockPlayer::new("Steve", world.clone());
    let mut event = bone_meal_on(player.clone(), POS, None);

    handler.handle_blocking(&mut event).await;

    assert!(!event.cancelled());
    assert_eq!(blocked.get(), 0);
    assert!(player.received().is_empty());
    assert_eq!(world.lookups.load(Ordering::Relaxed), 1);
}

#[tokio::test]
async fn undeliverable_messages_still_block() {
    let (handler, _, blocked) = handler();
    let player = MockPlayer::new("Steve", Arc::new(MockWorld::default()));
    player.failing_sends.store(u64::MAX, Ordering::Relaxed);
    let mut event = bone_meal_on(player.clone(), POS, Some("minecraft:potatoes"));

    handler.handle_blocking(&mut event).await;

    assert!(event.cancelled());
    assert_eq!(blocked.get(), 1);
    assert!(player.received().is_empty());
}

#[tokio::test]
async fn info_message_sent_after_blocked_message_fails() {
    let (handler, messages, blocked) = handler();
    messages.set_language(Language::English);
    let player = MockPlayer::new("Steve", Arc::new(MockWorld::default()));
    player.failing_sends.store(1, Ordering::Relaxed);
    let mut event = bone_meal_on(player.clone(), POS, Some("minecraft:potatoes"));

    handler.handle_blocking(&mut event).await;

    assert!(event.cancelled());
    assert_eq!(blocked.get(), 1);
    assert_eq!(player.received(), [messages.info_message()]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_interactions_are_all_counted() {
    const ATTEMPTS: u64 = 200;

    let (handler, _, blocked) = handler();
    let handler = Arc::new(handler);
    let world = Arc::new(MockWorld::default());

    let tasks: Vec<_> = (0..ATTEMPTS)
        .map(|i| {
            let handler = handler.clone();
            let player = MockPlayer::new(&format!("player{i}"), world.clone());
            tokio::spawn(async move {
                let mut event = bone_meal_on(player, POS, Some("minecraft:potatoes"));
                handler.handle_blocking(&mut event).await;
                event.cancelled()
            })
        })
        .collect();

    for task in tasks {
        assert!(task.await.unwrap());
    }
    assert_eq!(blocked.get(), ATTEMPTS);
}
