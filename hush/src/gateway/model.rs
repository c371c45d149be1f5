use twilight_cache_inmemory::{InMemoryCache, model::CachedVoiceState};
use twilight_gateway::Event;
use twilight_model::voice::VoiceState;

use crate::component::auto_mute::{Snapshot, Subject};

pub trait Process {
    async fn process(self);
}

/// Cache entries as they were before an event was applied to the cache.
#[derive(Debug, Default)]
pub struct LastCachedStates {
    pub voice_state: Option<CachedVoiceState>,
    pub member: Option<Subject>,
}

impl LastCachedStates {
    pub fn new(cache: &InMemoryCache, event: &Event) -> Self {
        let Event::VoiceStateUpdate(event) = event else {
            return Self::default();
        };
        let Some(guild_id) = event.guild_id else {
            return Self::default();
        };

        let voice_state = cache
            .voice_state(event.user_id, guild_id)
            .as_deref()
            .cloned();
        let member = cache.member(guild_id, event.user_id).and_then(|member| {
            let user = cache.user(event.user_id)?;
            Some(Subject::new(&user, member.roles()))
        });

        Self {
            voice_state,
            member,
        }
    }

    /// The member's voice location as cached before the update.
    pub fn before_snapshot(&self) -> Snapshot {
        let voice_state = self.voice_state.as_ref();
        Snapshot {
            guild_id: voice_state.map(CachedVoiceState::guild_id),
            channel_id: voice_state.map(CachedVoiceState::channel_id),
            server_muted: voice_state.is_some_and(CachedVoiceState::mute),
            member: self.member.clone(),
        }
    }
}

/// The member's voice location as reported by the update itself.
pub fn after_snapshot(state: &VoiceState) -> Snapshot {
    Snapshot {
        guild_id: state.guild_id,
        channel_id: state.channel_id,
        server_muted: state.mute,
        member: state
            .member
            .as_ref()
            .map(|member| Subject::new(&member.user, &member.roles)),
    }
}
