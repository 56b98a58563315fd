use tf_core::analytics::Heatmap;

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HeatmapCell {
    pub date: NaiveDate,
    pub value: usize,
    /// value / max, 0 when nothing was completed in the window
    pub intensity: f64,
}

#[derive(Debug, Serialize)]
pub struct HeatmapDto {
    pub days: Vec<HeatmapCell>,
    pub max: usize,
}

impl From<Heatmap> for HeatmapDto {
    fn from(h: Heatmap) -> Self {
        Self {
            days: h
                .days
                .iter()
                .map(|d| HeatmapCell {
                    date: d.date,
                    value: d.value,
                    intensity: h.intensity(d.value),
                })
                .collect(),
            max: h.max,
        }
    }
}
