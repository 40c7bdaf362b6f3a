use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("account `{query}` is not found")]
    AccountNotFound { query: String },

    #[error(
        "expected tank values are not available, load them with `wn8 update-expected` or pass \
         `--expected-values` explicitly"
    )]
    DataUnavailable,

    /// The expected sum is zero while the account has a non-zero total for the same component.
    /// Happens when every battle was played on vehicles missing from the expected values.
    #[error("expected {component} is zero, the account has no battles on rated vehicles")]
    DivisionDegenerate { component: Component },

    #[error("the session has failed earlier: {reason}")]
    SessionFailed { reason: String },

    #[error(transparent)]
    DataSource(#[from] anyhow::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Damage,
    Frags,
    Spot,
    Def,
    Win,
}

impl std::fmt::Display for Component {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(match self {
            Self::Damage => "damage",
            Self::Frags => "frags",
            Self::Spot => "spot",
            Self::Def => "defence",
            Self::Win => "win rate",
        })
    }
}
