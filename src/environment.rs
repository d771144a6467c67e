use std::path::PathBuf;

pub const DEFAULT_PARTITION: &str = "aws";
pub const DEFAULT_ENDPOINT_NAME: &str = "battery-consistency-bias-alarm-prediction-endpoint";
pub const DEFAULT_LIFECYCLE_SCRIPT_PATH: &str = "sagemaker/on_create.sh";

const CN_VISUALIZATION_IMAGE: &str = "arn:aws-cn:ecr:cn-northwest-1:753680513547:repository/battery-consistency-bias-alarm-prediction-visualization";
const DEFAULT_VISUALIZATION_IMAGE: &str = "arn:aws:ecr:us-west-2:366590864501:repository/battery-consistency-bias-alarm-prediction-visualization";

/// Target environment the graph is built for. Physical resource names are
/// templated from region and account; the partition selects between the two
/// pre-built visualization image references.
#[derive(Clone, Debug)]
pub struct Environment {
    pub account: String,
    pub region: String,
    pub partition: String,
}

impl Environment {
    pub fn new(account: &str, region: &str, partition: &str) -> Self {
        Self {
            account: account.to_owned(),
            region: region.to_owned(),
            partition: partition.to_owned(),
        }
    }

    /// The visualization image is the one partition-conditional reference in
    /// the graph. Every partition other than `aws-cn` resolves to the
    /// default image; there is deliberately no third case.
    pub fn visualization_image(&self) -> &'static str {
        match self.partition.as_str() {
            "aws-cn" => CN_VISUALIZATION_IMAGE,
            _ => DEFAULT_VISUALIZATION_IMAGE,
        }
    }
}

/// Apply-time parameters. The endpoint name is the single externally
/// supplied configuration value; the lifecycle script path is fixed but kept
/// overridable for tests.
#[derive(Clone, Debug)]
pub struct StackParams {
    pub endpoint_name: String,
    pub lifecycle_script_path: PathBuf,
}

impl Default for StackParams {
    fn default() -> Self {
        Self {
            endpoint_name: DEFAULT_ENDPOINT_NAME.to_owned(),
            lifecycle_script_path: PathBuf::from(DEFAULT_LIFECYCLE_SCRIPT_PATH),
        }
    }
}
