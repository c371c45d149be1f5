use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use twilight_cache_inmemory::{InMemoryCache, ResourceType};
use twilight_http::Client;
use twilight_model::{
    id::{Id, marker::UserMarker},
    user::{CurrentUser, User},
};

use crate::component::auto_mute::Policy;

pub type BotStateRef<'a> = &'a BotState;
pub type OwnedBotState = Arc<BotState>;

pub trait UserTagAware {
    fn username(&self) -> &str;
    fn discriminator(&self) -> u16;

    /// `name#0001` for legacy accounts, the bare username otherwise.
    fn tag(&self) -> String {
        match self.discriminator() {
            0 => self.username().to_owned(),
            d => format!("{}#{d:04}", self.username()),
        }
    }
}

impl UserTagAware for User {
    fn username(&self) -> &str {
        &self.name
    }

    fn discriminator(&self) -> u16 {
        self.discriminator
    }
}

impl UserTagAware for CurrentUser {
    fn username(&self) -> &str {
        &self.name
    }

    fn discriminator(&self) -> u16 {
        self.discriminator
    }
}

pub trait BotStateAware {
    fn bot(&self) -> BotStateRef<'_>;
}

pub trait CacheAware {
    fn cache(&self) -> &InMemoryCache;
}

pub trait HttpAware {
    fn http(&self) -> &Client;
}

pub struct BotInfo {
    announced: AtomicBool,
}

impl BotInfo {
    const fn new() -> Self {
        Self {
            announced: AtomicBool::new(false),
        }
    }

    /// Returns `true` only for the first caller.
    pub fn announce(&self) -> bool {
        !self.announced.swap(true, Ordering::Relaxed)
    }
}

pub struct BotState {
    cache: InMemoryCache,
    http: Client,
    user_id: Id<UserMarker>,
    policy: Policy,
    info: BotInfo,
}

impl BotState {
    pub fn new(http: Client, user_id: Id<UserMarker>, policy: Policy) -> Self {
        Self {
            cache: Self::build_cache(),
            http,
            user_id,
            policy,
            info: BotInfo::new(),
        }
    }

    /// Voice states and members for the before snapshot, guild and roles for
    /// permission calculation.
    pub fn build_cache() -> InMemoryCache {
        InMemoryCache::builder()
            .resource_types(
                ResourceType::GUILD
                    | ResourceType::ROLE
                    | ResourceType::MEMBER
                    | ResourceType::USER
                    | ResourceType::VOICE_STATE,
            )
            .build()
    }

    pub const fn info(&self) -> &BotInfo {
        &self.info
    }

    pub const fn user_id(&self) -> Id<UserMarker> {
        self.user_id
    }

    pub const fn policy(&self) -> &Policy {
        &self.policy
    }
}

impl CacheAware for BotState {
    fn cache(&self) -> &InMemoryCache {
        &self.cache
    }
}

impl HttpAware for BotState {
    fn http(&self) -> &Client {
        &self.http
    }
}
