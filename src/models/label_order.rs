use {
    clap::ValueEnum,
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

/// Order of the date labels along the chart's x axis.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    ValueEnum,
    Default,
)]
pub enum LabelOrder {
    /// Dates in the order they first appear in the file.
    #[strum(to_string = "File Order")]
    #[default]
    FirstSeen,

    /// Calendar order; identical dates written differently ("1/05/24" vs "01/05/24") stay separate bars.
    #[strum(to_string = "Chronological")]
    Chronological,
}
