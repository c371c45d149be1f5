use twilight_model::gateway::payload::incoming::VoiceStateUpdate;

use super::{LastCachedStates, Process, model::after_snapshot};
use crate::{
    component::auto_mute,
    core::model::{BotState, BotStateAware, BotStateRef, OwnedBotState},
};

pub(super) struct Context {
    inner: Box<VoiceStateUpdate>,
    bot: OwnedBotState,
    states: LastCachedStates,
}

impl BotState {
    pub(super) const fn into_voice_state_update_context(
        self: OwnedBotState,
        inner: Box<VoiceStateUpdate>,
        states: LastCachedStates,
    ) -> Context {
        Context {
            inner,
            bot: self,
            states,
        }
    }
}

impl BotStateAware for Context {
    fn bot(&self) -> BotStateRef<'_> {
        &self.bot
    }
}

impl Process for Context {
    async fn process(self) {
        let bot = self.bot();
        let before = self.states.before_snapshot();
        let after = after_snapshot(&self.inner);
        let _ = auto_mute::handle_voice_state_update(bot.policy(), bot, before, after).await;
    }
}
