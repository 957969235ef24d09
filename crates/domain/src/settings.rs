#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub default_age: u32,
    pub default_frequency: u32,
    /// Students older than this get the elderly template and low impact cardio.
    pub elderly_age: u32,
    /// Makes generation reproducible.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_age: 30,
            default_frequency: 3,
            elderly_age: 60,
            seed: None,
        }
    }
}
