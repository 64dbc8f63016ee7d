//! Message exchange patterns and their transport bindings.

use super::ParseEnumError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Message Exchange Pattern of a PMode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mep {
    /// A single user message, optionally answered by a signal.
    OneWay,
    /// A request user message answered by a response user message.
    TwoWay,
}

impl Mep {
    /// Returns the `ebMS` URI of the pattern.
    #[must_use]
    pub const fn uri(self) -> &'static str {
        match self {
            Self::OneWay => "http://docs.oasis-open.org/ebxml-msg/ebms/v3.0/ns/core/200704/oneWay",
            Self::TwoWay => "http://docs.oasis-open.org/ebxml-msg/ebms/v3.0/ns/core/200704/twoWay",
        }
    }

    /// Returns the short display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneWay => "one-way",
            Self::TwoWay => "two-way",
        }
    }

    /// Returns `true` for [`Mep::TwoWay`].
    #[must_use]
    pub const fn is_two_way(self) -> bool {
        matches!(self, Self::TwoWay)
    }
}

impl TryFrom<&str> for Mep {
    type Error = ParseEnumError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        [Self::OneWay, Self::TwoWay]
            .into_iter()
            .find(|mep| mep.uri() == trimmed || mep.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseEnumError::new("MEP", value))
    }
}

impl fmt::Display for Mep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transport interaction style used to realise a [`Mep`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MepBinding {
    /// One-way, sender pushes.
    Push,
    /// One-way, receiver pulls.
    Pull,
    /// Two-way over a single synchronous connection.
    Sync,
    /// Two-way, both legs pushed.
    PushPush,
    /// Two-way, request pushed and response pulled.
    PushPull,
    /// Two-way, request pulled and response pushed.
    PullPush,
}

impl MepBinding {
    /// All known bindings in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Push,
        Self::Pull,
        Self::Sync,
        Self::PushPush,
        Self::PushPull,
        Self::PullPush,
    ];

    /// Returns the `ebMS` URI of the binding.
    #[must_use]
    pub const fn uri(self) -> &'static str {
        match self {
            Self::Push => "http://docs.oasis-open.org/ebxml-msg/ebms/v3.0/ns/core/200704/push",
            Self::Pull => "http://docs.oasis-open.org/ebxml-msg/ebms/v3.0/ns/core/200704/pull",
            Self::Sync => "http://docs.oasis-open.org/ebxml-msg/ebms/v3.0/ns/core/200704/sync",
            Self::PushPush => {
                "http://docs.oasis-open.org/ebxml-msg/ebms/v3.0/ns/core/200704/push-and-push"
            }
            Self::PushPull => {
                "http://docs.oasis-open.org/ebxml-msg/ebms/v3.0/ns/core/200704/push-and-pull"
            }
            Self::PullPush => {
                "http://docs.oasis-open.org/ebxml-msg/ebms/v3.0/ns/core/200704/pull-and-push"
            }
        }
    }

    /// Returns the short display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::Pull => "pull",
            Self::Sync => "sync",
            Self::PushPush => "push-push",
            Self::PushPull => "push-pull",
            Self::PullPush => "pull-push",
        }
    }

    /// Returns `true` when the binding realises a two-way exchange.
    #[must_use]
    pub const fn is_two_way(self) -> bool {
        !matches!(self, Self::Push | Self::Pull)
    }

    /// Returns `true` when any leg of the binding is pulled.
    #[must_use]
    pub const fn involves_pull(self) -> bool {
        matches!(self, Self::Pull | Self::PushPull | Self::PullPush)
    }
}

impl TryFrom<&str> for MepBinding {
    type Error = ParseEnumError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|binding| {
                binding.uri() == trimmed || binding.as_str().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| ParseEnumError::new("MEP binding", value))
    }
}

impl fmt::Display for MepBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
