use serde::{Deserialize, Serialize};

/// Frame height reported to the host when nothing else is configured.
pub const DEFAULT_FRAME_HEIGHT: u32 = 40;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Pixel height the host should allocate for the widget's frame.
    pub frame_height: u32,
}

impl WidgetConfig {
    pub const fn new(frame_height: u32) -> Self {
        Self { frame_height }
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_height_matches_tile_frame() {
        assert_eq!(WidgetConfig::default().frame_height, 40);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: WidgetConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, WidgetConfig::default());

        let config: WidgetConfig = serde_json::from_str(r#"{"frame_height": 64}"#).unwrap();
        assert_eq!(config, WidgetConfig::new(64));
    }
}
