use std::num::NonZeroU64;

use hush_ext::{flag::parse_flag, list::split_list};
use twilight_model::id::Id;

use crate::{component::auto_mute::Policy, core::konst::env, error::config::ConfigError};

/// Process-wide settings, read once at startup.
pub struct Config {
    token: Box<str>,
    policy: Policy,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let token = require(&lookup, env::TOKEN)?;
        let target_channel_id = parse_id(
            env::TARGET_VOICE_CHANNEL_ID,
            &require(&lookup, env::TARGET_VOICE_CHANNEL_ID)?,
        )?;
        let auto_unmute = parse_flag(lookup(env::AUTO_UNMUTE_ON_LEAVE).as_deref(), true);
        let exempt_role_ids = lookup(env::EXEMPT_ROLE_IDS)
            .as_deref()
            .map(split_list)
            .into_iter()
            .flatten()
            .map(|id| parse_id(env::EXEMPT_ROLE_IDS, id))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            token: token.into(),
            policy: Policy::new(target_channel_id, auto_unmute, exempt_role_ids),
        })
    }

    pub fn into_parts(self) -> (Box<str>, Policy) {
        (self.token, self.policy)
    }
}

fn require(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, ConfigError> {
    lookup(name)
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::Missing(name))
}

fn parse_id<T>(name: &'static str, value: &str) -> Result<Id<T>, ConfigError> {
    value
        .trim()
        .parse::<NonZeroU64>()
        .map(Id::from)
        .map_err(|source| ConfigError::InvalidId {
            name,
            value: value.into(),
            source,
        })
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use rstest::rstest;
    use twilight_model::id::Id;

    use super::Config;
    use crate::error::config::ConfigError;

    fn lookup<const N: usize>(
        vars: [(&'static str, &'static str); N],
    ) -> impl Fn(&str) -> Option<String> {
        let vars = HashMap::from(vars);
        move |key: &str| vars.get(key).map(|&v| v.to_owned())
    }

    const REQUIRED: [(&str, &str); 2] = [
        ("DISCORD_TOKEN", "token"),
        ("TARGET_VOICE_CHANNEL_ID", "1234567890"),
    ];

    #[test]
    fn defaults() {
        let (token, policy) = Config::from_lookup(lookup(REQUIRED))
            .expect("config is complete")
            .into_parts();

        assert_eq!(&*token, "token");
        assert_eq!(policy.target_channel_id(), Id::new(1_234_567_890));
        assert!(policy.auto_unmute());
        assert!(policy.exempt_role_ids().is_empty());
    }

    #[test]
    fn optional_settings() {
        let [token, target] = REQUIRED;
        let (_, policy) = Config::from_lookup(lookup([
            token,
            target,
            ("AUTO_UNMUTE_ON_LEAVE", "False"),
            ("EXEMPT_ROLE_IDS", " 11, 22 ,,33"),
        ]))
        .expect("config is complete")
        .into_parts();

        assert!(!policy.auto_unmute());
        assert_eq!(
            policy.exempt_role_ids(),
            [Id::new(11), Id::new(22), Id::new(33)]
        );
    }

    #[rstest]
    #[case(&[("TARGET_VOICE_CHANNEL_ID", "1")], "DISCORD_TOKEN")]
    #[case(&[("DISCORD_TOKEN", "  "), ("TARGET_VOICE_CHANNEL_ID", "1")], "DISCORD_TOKEN")]
    #[case(&[("DISCORD_TOKEN", "token")], "TARGET_VOICE_CHANNEL_ID")]
    #[case(
        &[("DISCORD_TOKEN", "token"), ("TARGET_VOICE_CHANNEL_ID", "")],
        "TARGET_VOICE_CHANNEL_ID"
    )]
    fn missing(#[case] vars: &[(&'static str, &'static str)], #[case] expected: &str) {
        let vars = vars.iter().copied().collect::<HashMap<_, _>>();
        let result = Config::from_lookup(|key| vars.get(key).map(|&v| v.to_owned()));

        assert!(matches!(result, Err(ConfigError::Missing(name)) if name == expected));
    }

    #[rstest]
    #[case("TARGET_VOICE_CHANNEL_ID", "general")]
    #[case("TARGET_VOICE_CHANNEL_ID", "0")]
    #[case("EXEMPT_ROLE_IDS", "11,moderators")]
    fn invalid(#[case] key: &'static str, #[case] value: &'static str) {
        let mut vars = HashMap::from(REQUIRED);
        vars.insert(key, value);
        let result = Config::from_lookup(|k| vars.get(k).map(|&v| v.to_owned()));

        assert!(matches!(result, Err(ConfigError::InvalidId { name, .. }) if name == key));
    }
}
