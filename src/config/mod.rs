mod report_config;

pub use report_config::{load_config, ConnectivityConfig, ReportConfig, SpeechConfig};
