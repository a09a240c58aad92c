//! Config serialization to TOML
//!
//! Single source of truth for the config file format. The template carries
//! commented-out alternatives so users can discover options without docs.

use super::Config;

impl Config {
    /// Serialize to the config file format
    pub fn to_toml(&self) -> String {
        let mut out = String::new();

        out.push_str("# folio configuration\n");
        out.push_str("# Precedence: environment variables > this file > defaults\n\n");

        out.push_str(&format!("theme = \"{}\"\n", self.theme));
        out.push_str("# Available: \"dark\", \"light\", \"dracula\", \"nord\"\n\n");

        match &self.content_file {
            Some(path) => out.push_str(&format!("content_file = \"{}\"\n", path.display())),
            None => out.push_str("# content_file = \"~/portfolio.toml\"\n"),
        }
        out.push_str("# Portfolio content file; run `folio content --init` to scaffold one.\n\n");

        out.push_str(&format!("fade_threshold = {}\n", self.fade_threshold));
        out.push_str("# Fraction of a section that must be on screen before it fades in (0.0-1.0)\n\n");

        out.push_str("[logging]\n");
        out.push_str(&format!("level = \"{}\"\n", self.logging.level));
        out.push_str(&format!("file_enabled = {}\n", self.logging.file_enabled));
        out.push_str(&format!(
            "file_dir = \"{}\"\n",
            self.logging.file_dir.display()
        ));
        out.push_str(&format!(
            "file_rotation = \"{}\"\n",
            self.logging.file_rotation.as_str()
        ));
        out.push_str("# Rotation: \"hourly\", \"daily\", \"never\"\n");
        out.push_str(&format!(
            "file_prefix = \"{}\"\n",
            self.logging.file_prefix
        ));

        out
    }
}
