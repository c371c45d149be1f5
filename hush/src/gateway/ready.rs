use hush_ext::pretty::PrettyJoiner;
use twilight_gateway::ShardId;
use twilight_model::gateway::payload::incoming::Ready;

use super::model::Process;
use crate::core::{
    konst::text::NO_EXEMPT_ROLES,
    model::{BotState, BotStateAware, BotStateRef, UserTagAware},
};

pub(super) struct Context<'a> {
    inner: &'a Ready,
    shard_id: ShardId,
    bot: BotStateRef<'a>,
}

impl BotState {
    pub(super) const fn as_ready_context<'a>(
        &'a self,
        inner: &'a Ready,
        shard_id: ShardId,
    ) -> Context<'a> {
        Context {
            inner,
            shard_id,
            bot: self,
        }
    }
}

impl BotStateAware for Context<'_> {
    fn bot(&self) -> BotStateRef<'_> {
        self.bot
    }
}

impl Process for Context<'_> {
    async fn process(self) {
        if !self.bot().info().announce() {
            tracing::debug!(
                shard = ?self.shard_id,
                "identified again as {}",
                self.inner.user.tag()
            );
            return;
        }

        let policy = self.bot().policy();

        tracing::info!(shard = ?self.shard_id, "logged in as {}", self.inner.user.tag());
        tracing::info!("target voice channel: {}", policy.target_channel_id());
        tracing::info!("auto-unmute on leave: {}", policy.auto_unmute());
        tracing::info!(
            "exempt roles: {}",
            policy.exempt_role_ids().pretty_join_or(NO_EXEMPT_ROLES)
        );
    }
}
