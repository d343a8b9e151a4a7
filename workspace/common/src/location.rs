use thiserror::Error;

/// A single geolocation fix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    pub lat: f64,
    pub lng: f64,
}

/// Options passed to `getCurrentPosition`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationRequestOptions {
    pub high_accuracy: bool,
    pub timeout_ms: u32,
    pub maximum_age_ms: u32,
}

impl Default for LocationRequestOptions {
    /// Fresh, precise fix or nothing within ten seconds.
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout_ms: 10_000,
            maximum_age_ms: 0,
        }
    }
}

/// Why a location could not be obtained.
///
/// Every platform failure shows the same message to the user; the variant is
/// kept for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("Unable to retrieve your location. Please enable location access.")]
    PermissionDenied,
    #[error("Unable to retrieve your location. Please enable location access.")]
    PositionUnavailable,
    #[error("Unable to retrieve your location. Please enable location access.")]
    Timeout,
    #[error("Unable to retrieve your location. Please enable location access.")]
    Platform(String),
    #[error("Geolocation is not supported by your browser.")]
    Unsupported,
}

impl LocationError {
    /// Maps a `GeolocationPositionError.code`.
    pub fn from_code(code: u16, message: String) -> Self {
        match code {
            1 => Self::PermissionDenied,
            2 => Self::PositionUnavailable,
            3 => Self::Timeout,
            _ => Self::Platform(message),
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            Self::PermissionDenied => "permission denied",
            Self::PositionUnavailable => "position unavailable",
            Self::Timeout => "timeout",
            Self::Platform(message) => message,
            Self::Unsupported => "unsupported",
        }
    }
}

/// Lifecycle of the one-shot location request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LocationPhase {
    #[default]
    Idle,
    Prompted,
    Resolved(GeoPosition),
    Denied(LocationError),
    Unsupported,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LocationEvent {
    /// The start-up delay fired; `supported` tells whether the browser exposes geolocation.
    DelayElapsed { supported: bool },
    Fixed(GeoPosition),
    Failed(LocationError),
}

impl LocationPhase {
    /// Applies `event`. Pairs that make no sense for the current phase are ignored.
    pub fn apply(&self, event: LocationEvent) -> Self {
        match (self, event) {
            (Self::Idle, LocationEvent::DelayElapsed { supported: true }) => Self::Prompted,
            (Self::Idle, LocationEvent::DelayElapsed { supported: false }) => Self::Unsupported,
            (Self::Prompted, LocationEvent::Fixed(position)) => Self::Resolved(position),
            (Self::Prompted, LocationEvent::Failed(error)) => Self::Denied(error),
            (phase, event) => {
                tracing::debug!("Ignoring location event {:?} in phase {:?}", event, phase);
                phase.clone()
            }
        }
    }

    pub fn show_prompt(&self) -> bool {
        matches!(self, Self::Prompted)
    }

    pub fn position(&self) -> Option<GeoPosition> {
        match self {
            Self::Resolved(position) => Some(*position),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::Denied(error) => Some(error.to_string()),
            Self::Unsupported => Some(LocationError::Unsupported.to_string()),
            _ => None,
        }
    }
}

pub fn format_coordinates(position: GeoPosition) -> String {
    format!("{:.4}, {:.4}", position.lat, position.lng)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BERLIN: GeoPosition = GeoPosition {
        lat: 52.520008,
        lng: 13.404954,
    };

    #[test]
    fn test_default_request_options() {
        let options = LocationRequestOptions::default();
        assert!(options.high_accuracy);
        assert_eq!(options.timeout_ms, 10_000);
        assert_eq!(options.maximum_age_ms, 0);
    }

    #[test]
    fn test_supported_path_resolves() {
        let phase = LocationPhase::Idle.apply(LocationEvent::DelayElapsed { supported: true });
        assert!(phase.show_prompt());
        assert_eq!(phase.error_message(), None);

        let phase = phase.apply(LocationEvent::Fixed(BERLIN));
        assert!(!phase.show_prompt());
        assert_eq!(phase.position(), Some(BERLIN));
        assert_eq!(phase.error_message(), None);
    }

    #[test]
    fn test_denial_clears_prompt() {
        let phase = LocationPhase::Prompted.apply(LocationEvent::Failed(LocationError::PermissionDenied));

        assert!(!phase.show_prompt());
        assert_eq!(
            phase.error_message().as_deref(),
            Some("Unable to retrieve your location. Please enable location access.")
        );
        assert_eq!(phase.position(), None);
    }

    #[test]
    fn test_unsupported_never_prompts() {
        let phase = LocationPhase::Idle.apply(LocationEvent::DelayElapsed { supported: false });

        assert_eq!(phase, LocationPhase::Unsupported);
        assert!(!phase.show_prompt());
        assert_eq!(
            phase.error_message().as_deref(),
            Some("Geolocation is not supported by your browser.")
        );
    }

    #[test]
    fn test_out_of_order_events_are_ignored() {
        assert_eq!(LocationPhase::Idle.apply(LocationEvent::Fixed(BERLIN)), LocationPhase::Idle);

        let resolved = LocationPhase::Resolved(BERLIN);
        assert_eq!(
            resolved.apply(LocationEvent::Failed(LocationError::Timeout)),
            resolved
        );
        assert_eq!(
            LocationPhase::Unsupported.apply(LocationEvent::DelayElapsed { supported: true }),
            LocationPhase::Unsupported
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(LocationError::from_code(1, String::new()), LocationError::PermissionDenied);
        assert_eq!(LocationError::from_code(2, String::new()), LocationError::PositionUnavailable);
        assert_eq!(LocationError::from_code(3, String::new()), LocationError::Timeout);
        assert_eq!(
            LocationError::from_code(9, "boom".into()),
            LocationError::Platform("boom".into())
        );
        assert_eq!(LocationError::Timeout.kind(), "timeout");
    }

    #[test]
    fn test_format_coordinates_four_decimals() {
        assert_eq!(format_coordinates(BERLIN), "52.5200, 13.4050");
        assert_eq!(
            format_coordinates(GeoPosition { lat: -33.8688, lng: 151.2093 }),
            "-33.8688, 151.2093"
        );
    }
}
