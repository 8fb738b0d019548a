use crate::settings::Settings;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub settings: Settings,
}

impl CliFlags {
    /// True when the run stops before generating anything.
    pub fn is_info_only(&self) -> bool {
        self.help || self.version
    }
}
