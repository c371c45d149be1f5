mod model;
mod ready;
mod voice;

pub use model::{LastCachedStates, Process};

use twilight_gateway::{Event, ShardId};

use crate::core::model::OwnedBotState;

pub async fn process(
    bot: OwnedBotState,
    event: Event,
    states: LastCachedStates,
    shard_id: ShardId,
) {
    match event {
        Event::Ready(ref e) => bot.as_ready_context(e, shard_id).process().await,
        Event::VoiceStateUpdate(e) => {
            bot.into_voice_state_update_context(e, states)
                .process()
                .await;
        }
        _ => {}
    }
}
