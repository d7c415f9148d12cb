use crate::config::CliConfig;
use circlayout::io::ext_repr::ExtArrangement;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LayoutOutput {
    #[serde(flatten)]
    pub arrangement: ExtArrangement,
    pub config: CliConfig,
}
