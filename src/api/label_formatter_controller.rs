use crate::error::ChartResult;

use super::validation::validate_label_format_config;
use super::{BeaconEngine, LabelFormatConfig, LabelFormatterFn};

impl BeaconEngine {
    /// Replaces the built-in label formatter. The current target is relabeled
    /// in place without a transition.
    pub fn set_label_formatter(&mut self, formatter: LabelFormatterFn) {
        self.label_formatter = Some(formatter);
        self.relabel_target();
    }

    pub fn clear_label_formatter(&mut self) {
        self.label_formatter = None;
        self.relabel_target();
    }

    #[must_use]
    pub fn has_label_formatter(&self) -> bool {
        self.label_formatter.is_some()
    }

    /// Updates only the label format, relabeling the current target in place.
    pub fn set_label_format(&mut self, label_format: LabelFormatConfig) -> ChartResult<()> {
        validate_label_format_config(&label_format)?;
        self.config.label_format = label_format;
        self.relabel_target();
        Ok(())
    }

    pub(super) fn relabel_target(&mut self) {
        let Some(index) = self.target.as_ref().map(|target| target.index) else {
            return;
        };
        let value = self
            .beacon_series()
            .and_then(|series| series.value_at(index));
        let label = self.format_label(index, value);
        if let Some(target) = self.target.as_mut() {
            target.label = label;
        }
        self.publish(None);
    }
}
