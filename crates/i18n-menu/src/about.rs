//! Static content of the about panel.

/// Product name shown in titles and the about panel.
pub const PRODUCT_NAME: &str = "i18n Editor";

/// What the about panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutInfo {
    pub product: String,
    pub version: String,
    pub copyright: String,
    pub license: String,
}

impl Default for AboutInfo {
    fn default() -> Self {
        Self {
            product: PRODUCT_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            copyright: "(c) Copyright 2015 The i18n Editor authors".to_string(),
            license: "MIT Licensed".to_string(),
        }
    }
}

impl AboutInfo {
    /// Window or dialog title.
    pub fn title(&self) -> String {
        format!("About {}", self.product)
    }

    /// Panel text, top to bottom.
    pub fn lines(&self) -> Vec<String> {
        vec![
            self.product.clone(),
            format!("v{}", self.version),
            self.copyright.clone(),
            self.license.clone(),
        ]
    }
}
