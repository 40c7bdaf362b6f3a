use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, ValueEnum, Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Realm {
    #[default]
    #[serde(rename = "eu")]
    #[value(name = "eu")]
    Europe,

    #[serde(rename = "na")]
    #[value(name = "na")]
    NorthAmerica,

    #[serde(rename = "asia")]
    #[value(name = "asia")]
    Asia,
}

impl Realm {
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Europe => "https://api.worldoftanks.eu",
            Self::NorthAmerica => "https://api.worldoftanks.com",
            Self::Asia => "https://api.worldoftanks.asia",
        }
    }
}
