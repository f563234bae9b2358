//! Declarative grid configuration.
//!
//! A `GridConfig` is plain data (JSON via serde) that builds a [`Grid`]. All
//! fields default, so a config file only needs the keys it changes:
//!
//! ```json
//! { "axis": "horizontal", "columns": 3, "auto_size": true, "horizontal_spacing": 8 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::ConfigError;
use crate::layout::{Axis, Grid};
use crate::primitives::EdgeInsets;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub axis: Axis,
    pub columns: usize,
    pub rows: usize,
    pub auto_size: bool,
    pub min_row_height: f32,
    pub max_row_height: f32,
    pub fixed_row_height: f32,
    pub min_column_width: f32,
    pub max_column_width: f32,
    pub fixed_column_width: f32,
    pub horizontal_spacing: f32,
    pub vertical_spacing: f32,
    pub edge_insets: EdgeInsets,
    pub debug: bool,
}

impl GridConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    fn dimensions(&self) -> [(&'static str, f32); 12] {
        [
            ("min_row_height", self.min_row_height),
            ("max_row_height", self.max_row_height),
            ("fixed_row_height", self.fixed_row_height),
            ("min_column_width", self.min_column_width),
            ("max_column_width", self.max_column_width),
            ("fixed_column_width", self.fixed_column_width),
            ("horizontal_spacing", self.horizontal_spacing),
            ("vertical_spacing", self.vertical_spacing),
            ("edge_insets.top", self.edge_insets.top),
            ("edge_insets.left", self.edge_insets.left),
            ("edge_insets.bottom", self.edge_insets.bottom),
            ("edge_insets.right", self.edge_insets.right),
        ]
    }

    /// Reject negative or non-finite dimensions, and auto-size with nothing
    /// to derive the other count from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in self.dimensions() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDimension { field, value });
            }
        }

        if self.auto_size {
            match self.axis {
                Axis::Horizontal if self.columns == 0 && self.max_column_width == 0.0 => {
                    return Err(ConfigError::AutoSizeWithoutCount {
                        axis: self.axis,
                        needs: "columns or max_column_width",
                    });
                }
                Axis::Vertical if self.rows == 0 => {
                    return Err(ConfigError::AutoSizeWithoutCount {
                        axis: self.axis,
                        needs: "rows",
                    });
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Validate, then build an empty grid with this configuration.
    pub fn build<E: Element>(&self) -> Result<Grid<E>, ConfigError> {
        self.validate()?;
        tracing::debug!("building {:?} grid {}x{}", self.axis, self.rows, self.columns);

        Ok(Grid::build(self.axis, |grid| {
            grid.set_debug(self.debug);
            grid.set_auto_size(self.auto_size);
            grid.set_min_row_height(self.min_row_height);
            grid.set_max_row_height(self.max_row_height);
            grid.set_fixed_row_height(self.fixed_row_height);
            grid.set_min_column_width(self.min_column_width);
            grid.set_max_column_width(self.max_column_width);
            grid.set_fixed_column_width(self.fixed_column_width);
            grid.set_horizontal_spacing(self.horizontal_spacing);
            grid.set_vertical_spacing(self.vertical_spacing);
            grid.set_edge_insets(self.edge_insets);
            grid.set_rows(self.rows);
            grid.set_columns(self.columns);
        }))
    }
}
