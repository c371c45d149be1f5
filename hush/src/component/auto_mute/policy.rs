use twilight_model::{
    guild::Permissions,
    id::{
        Id,
        marker::{ChannelMarker, GuildMarker, RoleMarker, UserMarker},
    },
    user::User,
};

use crate::core::{konst::audit_reason, model::UserTagAware};

/// The parts of a guild member the policy looks at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subject {
    user_id: Id<UserMarker>,
    tag: Box<str>,
    bot: bool,
    roles: Box<[Id<RoleMarker>]>,
}

impl Subject {
    pub fn new(user: &User, roles: &[Id<RoleMarker>]) -> Self {
        Self::from_parts(user.id, user.tag(), user.bot, roles)
    }

    pub fn from_parts(
        user_id: Id<UserMarker>,
        tag: impl Into<Box<str>>,
        bot: bool,
        roles: &[Id<RoleMarker>],
    ) -> Self {
        Self {
            user_id,
            tag: tag.into(),
            bot,
            roles: roles.into(),
        }
    }

    pub const fn user_id(&self) -> Id<UserMarker> {
        self.user_id
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

/// A member's voice location at one instant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub guild_id: Option<Id<GuildMarker>>,
    pub channel_id: Option<Id<ChannelMarker>>,
    pub server_muted: bool,
    pub member: Option<Subject>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    JoinedTarget,
    LeftTarget,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Mute,
    Unmute,
}

impl Action {
    /// The server-mute flag this action requests.
    pub const fn mute(self) -> bool {
        matches!(self, Self::Mute)
    }

    pub const fn reason(self) -> &'static str {
        match self {
            Self::Mute => audit_reason::MUTE,
            Self::Unmute => audit_reason::UNMUTE,
        }
    }

    pub const fn verb(self) -> &'static str {
        match self {
            Self::Mute => "mute",
            Self::Unmute => "unmute",
        }
    }

    pub const fn past_tense(self) -> &'static str {
        match self {
            Self::Mute => "muted",
            Self::Unmute => "unmuted",
        }
    }

    pub const fn cause(self) -> &'static str {
        match self {
            Self::Mute => "joined target channel",
            Self::Unmute => "left target channel",
        }
    }
}

pub struct Policy {
    target_channel_id: Id<ChannelMarker>,
    auto_unmute: bool,
    exempt_role_ids: Box<[Id<RoleMarker>]>,
}

impl Policy {
    pub fn new(
        target_channel_id: Id<ChannelMarker>,
        auto_unmute: bool,
        exempt_role_ids: Vec<Id<RoleMarker>>,
    ) -> Self {
        Self {
            target_channel_id,
            auto_unmute,
            exempt_role_ids: exempt_role_ids.into_boxed_slice(),
        }
    }

    pub const fn target_channel_id(&self) -> Id<ChannelMarker> {
        self.target_channel_id
    }

    pub const fn auto_unmute(&self) -> bool {
        self.auto_unmute
    }

    pub fn exempt_role_ids(&self) -> &[Id<RoleMarker>] {
        &self.exempt_role_ids
    }

    /// Bots and holders of any exempt role are never acted upon.
    pub fn is_exempt(&self, member: &Subject) -> bool {
        member.bot
            || member
                .roles
                .iter()
                .any(|role| self.exempt_role_ids.contains(role))
    }

    pub fn transition(
        &self,
        before: Option<Id<ChannelMarker>>,
        after: Option<Id<ChannelMarker>>,
    ) -> Option<Transition> {
        let target = Some(self.target_channel_id);
        if after == target {
            Some(Transition::JoinedTarget)
        } else if before == target {
            Some(Transition::LeftTarget)
        } else {
            None
        }
    }

    /// Picks the request to issue given the member's current server-mute flag.
    pub fn action(&self, transition: Transition, server_muted: bool) -> Option<Action> {
        match transition {
            Transition::JoinedTarget => (!server_muted).then_some(Action::Mute),
            Transition::LeftTarget if self.auto_unmute => server_muted.then_some(Action::Unmute),
            Transition::LeftTarget => None,
        }
    }
}

pub const fn can_mute(permissions: Permissions) -> bool {
    permissions.contains(Permissions::MUTE_MEMBERS)
}

#[cfg(test)]
mod test {
    use rstest::rstest;
    use twilight_model::{
        guild::Permissions,
        id::{
            Id,
            marker::{ChannelMarker, RoleMarker},
        },
    };

    use super::{Action, Policy, Subject, Transition, can_mute};

    const TARGET: Id<ChannelMarker> = Id::new(10);
    const OTHER: Id<ChannelMarker> = Id::new(20);
    const STAFF: Id<RoleMarker> = Id::new(5);
    const REGULAR: Id<RoleMarker> = Id::new(6);

    fn policy(auto_unmute: bool) -> Policy {
        Policy::new(TARGET, auto_unmute, vec![STAFF])
    }

    #[rstest]
    #[case(None, Some(TARGET), Some(Transition::JoinedTarget))]
    #[case(Some(OTHER), Some(TARGET), Some(Transition::JoinedTarget))]
    #[case(Some(TARGET), None, Some(Transition::LeftTarget))]
    #[case(Some(TARGET), Some(OTHER), Some(Transition::LeftTarget))]
    #[case(None, Some(OTHER), None)]
    #[case(Some(OTHER), None, None)]
    #[case(Some(OTHER), Some(Id::new(30)), None)]
    fn transition(
        #[case] before: Option<Id<ChannelMarker>>,
        #[case] after: Option<Id<ChannelMarker>>,
        #[case] expected: Option<Transition>,
    ) {
        assert_eq!(policy(true).transition(before, after), expected);
    }

    #[rstest]
    #[case(Transition::JoinedTarget, false, true, Some(Action::Mute))]
    #[case(Transition::JoinedTarget, true, true, None)]
    #[case(Transition::JoinedTarget, false, false, Some(Action::Mute))]
    #[case(Transition::LeftTarget, true, true, Some(Action::Unmute))]
    #[case(Transition::LeftTarget, false, true, None)]
    #[case(Transition::LeftTarget, true, false, None)]
    #[case(Transition::LeftTarget, false, false, None)]
    fn action(
        #[case] transition: Transition,
        #[case] server_muted: bool,
        #[case] auto_unmute: bool,
        #[case] expected: Option<Action>,
    ) {
        assert_eq!(policy(auto_unmute).action(transition, server_muted), expected);
    }

    #[rstest]
    #[case(false, &[], false)]
    #[case(false, &[REGULAR], false)]
    #[case(true, &[], true)]
    #[case(false, &[STAFF], true)]
    #[case(false, &[REGULAR, STAFF], true)]
    fn exempt(#[case] bot: bool, #[case] roles: &[Id<RoleMarker>], #[case] expected: bool) {
        let member = Subject::from_parts(Id::new(100), "someone", bot, roles);
        assert_eq!(policy(true).is_exempt(&member), expected);
    }

    #[test]
    fn no_exempt_roles_only_exempts_bots() {
        let policy = Policy::new(TARGET, true, Vec::new());
        let member = Subject::from_parts(Id::new(100), "someone", false, &[STAFF]);
        assert!(!policy.is_exempt(&member));
    }

    #[rstest]
    #[case(Permissions::MUTE_MEMBERS, true)]
    #[case(Permissions::MUTE_MEMBERS | Permissions::MOVE_MEMBERS, true)]
    #[case(Permissions::MOVE_MEMBERS | Permissions::DEAFEN_MEMBERS, false)]
    #[case(Permissions::empty(), false)]
    fn mute_capability(#[case] permissions: Permissions, #[case] expected: bool) {
        assert_eq!(can_mute(permissions), expected);
    }

    #[test]
    fn actions_carry_audit_reasons() {
        assert!(Action::Mute.mute());
        assert!(!Action::Unmute.mute());
        assert_eq!(
            Action::Mute.reason(),
            "Auto-mute: joined target voice channel"
        );
        assert_eq!(
            Action::Unmute.reason(),
            "Auto-unmute: left target voice channel"
        );
    }
}
