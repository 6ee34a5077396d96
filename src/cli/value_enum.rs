use clap::ValueEnum;
use loc_stats_domain::IgnoreMatching;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliIgnoreMatching {
    /// Prune any directory whose relative path contains an ignored name
    #[default]
    Substring,
    /// Prune only directories whose path segments match an ignored name
    Segment,
}

impl From<CliIgnoreMatching> for IgnoreMatching {
    fn from(value: CliIgnoreMatching) -> Self {
        match value {
            CliIgnoreMatching::Substring => IgnoreMatching::Substring,
            CliIgnoreMatching::Segment => IgnoreMatching::Segment,
        }
    }
}
