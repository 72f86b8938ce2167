//! Alert classification for texture shifts.

use serde::{Deserialize, Serialize};

use zoneintel_core::zone::SpectrumTexture;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Medium,
    High,
}

/// Outcome of a shift-alert check. Warnings are data for the caller,
/// never exceptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftAlert {
    pub alert: bool,
    pub severity: Option<AlertSeverity>,
}

/// Classify a shift between two spectrum textures.
///
/// Adjacent-step shifts never alert. A direct jump between the spectrum's
/// two extremes (Silence↔Chaos) is always high severity; any other
/// multi-step jump is medium.
pub fn should_alert_shift(from: SpectrumTexture, to: SpectrumTexture) -> ShiftAlert {
    let distance = from.distance(to);
    let extremes = distance == 3;

    if extremes {
        ShiftAlert {
            alert: true,
            severity: Some(AlertSeverity::High),
        }
    } else if distance == 2 {
        ShiftAlert {
            alert: true,
            severity: Some(AlertSeverity::Medium),
        }
    } else {
        ShiftAlert {
            alert: false,
            severity: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extreme_jump_is_high_severity() {
        let alert = should_alert_shift(SpectrumTexture::Silence, SpectrumTexture::Chaos);
        assert!(alert.alert);
        assert_eq!(alert.severity, Some(AlertSeverity::High));

        let reverse = should_alert_shift(SpectrumTexture::Chaos, SpectrumTexture::Silence);
        assert_eq!(reverse.severity, Some(AlertSeverity::High));
    }

    #[test]
    fn adjacent_step_never_alerts() {
        let alert = should_alert_shift(SpectrumTexture::Analog, SpectrumTexture::Neon);
        assert!(!alert.alert);
        assert_eq!(alert.severity, None);
    }

    #[test]
    fn no_shift_never_alerts() {
        let alert = should_alert_shift(SpectrumTexture::Neon, SpectrumTexture::Neon);
        assert!(!alert.alert);
    }

    #[test]
    fn two_step_jump_is_medium() {
        let alert = should_alert_shift(SpectrumTexture::Silence, SpectrumTexture::Neon);
        assert!(alert.alert);
        assert_eq!(alert.severity, Some(AlertSeverity::Medium));
    }
}
