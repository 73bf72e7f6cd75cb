// Copyright 2025 the Infoviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page-level editorial configuration.

use infoviz_charts::{ChartKind, VisualizationSpec};

/// Everything the page composition needs besides the visualization parameters themselves.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct EditorialConfig {
    /// Headline of the infographic. Also names exported files.
    pub(crate) title: String,
    /// Heading above the isotype grid.
    pub(crate) grid_title: String,
    /// Visualization parameters.
    pub(crate) visualization: VisualizationSpec,
}

impl Default for EditorialConfig {
    fn default() -> Self {
        Self {
            title: "The Urban Energy Deficit".to_string(),
            grid_title: "Quantitative Saturation".to_string(),
            visualization: VisualizationSpec::default(),
        }
    }
}

impl EditorialConfig {
    /// Returns the file stem exports of this page use.
    pub(crate) fn export_file_stem(&self) -> String {
        export_file_stem(&self.title)
    }

    /// Returns the heading shown above a visualization of `kind`.
    pub(crate) fn section_title(&self, kind: ChartKind) -> String {
        match kind {
            ChartKind::Isotype => self.grid_title.clone(),
            other => other.name().to_uppercase(),
        }
    }
}

/// `EDITORIAL_` followed by the title with whitespace runs collapsed to `_`, upper-cased.
pub(crate) fn export_file_stem(title: &str) -> String {
    let mut stem = String::from("EDITORIAL_");
    let mut in_space = false;
    for c in title.chars() {
        if c.is_whitespace() {
            if !in_space {
                stem.push('_');
            }
            in_space = true;
        } else {
            stem.extend(c.to_uppercase());
            in_space = false;
        }
    }
    stem
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_title_names_the_export() {
        let config = EditorialConfig::default();
        assert_eq!(config.export_file_stem(), "EDITORIAL_THE_URBAN_ENERGY_DEFICIT");
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(export_file_stem("  a \t b\n"), "EDITORIAL__A_B_");
        assert_eq!(export_file_stem(""), "EDITORIAL_");
    }

    #[test]
    fn isotype_sections_use_the_grid_title() {
        let config = EditorialConfig::default();
        assert_eq!(config.section_title(ChartKind::Isotype), "Quantitative Saturation");
        assert_eq!(config.section_title(ChartKind::Pie), "PIE");
    }
}
