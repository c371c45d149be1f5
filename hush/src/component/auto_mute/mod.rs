mod policy;

pub use policy::{Action, Policy, Snapshot, Subject, can_mute};

use std::future::Future;

use twilight_http::request::AuditLogReason;
use twilight_model::{
    guild::Permissions,
    id::{
        Id,
        marker::{GuildMarker, UserMarker},
    },
};

use crate::core::model::{BotState, CacheAware, HttpAware};

/// Everything the handler needs from the platform.
pub trait Moderate {
    type Error: std::error::Error;

    /// The bot's guild-wide permissions, or `None` if they cannot be determined.
    fn bot_permissions(&self, guild_id: Id<GuildMarker>) -> Option<Permissions>;

    fn set_server_mute(
        &self,
        guild_id: Id<GuildMarker>,
        user_id: Id<UserMarker>,
        mute: bool,
        reason: &str,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

impl Moderate for BotState {
    type Error = twilight_http::Error;

    fn bot_permissions(&self, guild_id: Id<GuildMarker>) -> Option<Permissions> {
        self.cache()
            .permissions()
            .root(self.user_id(), guild_id)
            .inspect_err(|source| {
                tracing::debug!(?source, %guild_id, "bot permissions are not computable yet");
            })
            .ok()
    }

    async fn set_server_mute(
        &self,
        guild_id: Id<GuildMarker>,
        user_id: Id<UserMarker>,
        mute: bool,
        reason: &str,
    ) -> Result<(), Self::Error> {
        self.http()
            .update_guild_member(guild_id, user_id)
            .mute(mute)
            .reason(reason)
            .await?;
        Ok(())
    }
}

/// What a single voice state update resulted in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The member did not change channels.
    Unchanged,
    /// Neither snapshot carried a member or a guild.
    Unresolved,
    Exempt,
    /// The bot is not known to hold `MUTE_MEMBERS`.
    Forbidden,
    /// No qualifying transition, or the mute flag is already as wanted.
    Ignored,
    Applied(Action),
    Failed(Action),
}

/// Mutes members arriving in the target channel and, if enabled, unmutes
/// members leaving it.
///
/// Never fails: request errors are logged and reported as [`Outcome::Failed`].
/// At most one mute request is issued per call.
#[tracing::instrument(skip_all, name = "auto_mute")]
pub async fn handle_voice_state_update(
    policy: &Policy,
    moderator: &impl Moderate,
    before: Snapshot,
    after: Snapshot,
) -> Outcome {
    if before.channel_id == after.channel_id {
        return Outcome::Unchanged;
    }

    let Some(member) = after.member.as_ref().or(before.member.as_ref()) else {
        return Outcome::Unresolved;
    };
    if policy.is_exempt(member) {
        return Outcome::Exempt;
    }
    let Some(guild_id) = after.guild_id.or(before.guild_id) else {
        return Outcome::Unresolved;
    };

    if !moderator.bot_permissions(guild_id).is_some_and(can_mute) {
        tracing::warn!(%guild_id, "bot lacks the `Mute Members` permission in this guild");
        return Outcome::Forbidden;
    }

    let Some(action) = policy
        .transition(before.channel_id, after.channel_id)
        .and_then(|transition| policy.action(transition, after.server_muted))
    else {
        return Outcome::Ignored;
    };

    let user_id = member.user_id();
    match moderator
        .set_server_mute(guild_id, user_id, action.mute(), action.reason())
        .await
    {
        Ok(()) => {
            tracing::info!("{} {} ({})", action.past_tense(), member.tag(), action.cause());
            Outcome::Applied(action)
        }
        Err(error) => {
            tracing::error!(
                %error,
                %guild_id,
                %user_id,
                "failed to {} {}",
                action.verb(),
                member.tag()
            );
            Outcome::Failed(action)
        }
    }
}
