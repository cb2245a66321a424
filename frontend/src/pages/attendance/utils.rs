use crate::{api::ClockSession, utils::time::format_timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockAction {
    In,
    Out,
}

impl ClockAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::In => "Absen Masuk",
            Self::Out => "Absen Keluar",
        }
    }

    /// Shown when the server answers 2xx without a `message` field.
    pub fn success_fallback(self) -> &'static str {
        match self {
            Self::In => "Berhasil Absen Masuk",
            Self::Out => "Berhasil Absen Keluar",
        }
    }

    /// Shown when the failure carries no structured error text.
    pub fn failure_fallback(self) -> &'static str {
        match self {
            Self::In => "Gagal melakukan absen masuk",
            Self::Out => "Gagal melakukan absen keluar",
        }
    }
}

/// Capture-panel request lifecycle. A new dispatch overwrites whatever
/// terminal state the previous request left behind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaptureStatus {
    #[default]
    Idle,
    Pending(ClockAction),
    Success,
    Error,
}

impl CaptureStatus {
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Pending(_))
    }
}

/// What the status card shows. Built from a clock-in response and then
/// merged, never rebuilt, by clock-out: the lateness flag is decided at
/// clock-in and a clock-out response must not override it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionDisplay {
    pub employee_id: String,
    pub name: Option<String>,
    pub department: Option<String>,
    pub clock_in: Option<String>,
    pub clock_out: Option<String>,
    pub is_late: Option<bool>,
    pub attendance_id: Option<i64>,
}

impl SessionDisplay {
    pub fn from_clock_in(session: &ClockSession) -> Self {
        Self {
            employee_id: session.employee_id.clone(),
            name: session.name.clone(),
            department: session.department.clone(),
            clock_in: session.clock_in.as_ref().map(format_timestamp),
            clock_out: None,
            is_late: session.is_late,
            attendance_id: session.attendance_id,
        }
    }

    pub fn merged_clock_out(&self, session: &ClockSession) -> Self {
        Self {
            employee_id: session.employee_id.clone(),
            name: session.name.clone().or_else(|| self.name.clone()),
            department: session
                .department
                .clone()
                .or_else(|| self.department.clone()),
            clock_in: session
                .clock_in
                .as_ref()
                .map(format_timestamp)
                .or_else(|| self.clock_in.clone()),
            clock_out: session.clock_out.as_ref().map(format_timestamp),
            is_late: self.is_late,
            attendance_id: session.attendance_id.or(self.attendance_id),
        }
    }

    /// Lateness badge; only meaningful once a clock-in time is known.
    pub fn lateness_label(&self) -> Option<&'static str> {
        match (self.clock_in.as_deref(), self.is_late) {
            (None, _) => None,
            (Some(_), Some(true)) => Some("🔴 Terlambat"),
            (Some(_), _) => Some("🟢 Ontime"),
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::fixtures;

    #[test]
    fn clock_in_populates_display_with_formatted_time() {
        let session = fixtures::clock_in_session("E1", true);
        let display = SessionDisplay::from_clock_in(&session);
        assert_eq!(display.employee_id, "E1");
        assert_eq!(display.clock_in.as_deref(), Some("01/01/2024 09:15:00"));
        assert!(display.clock_out.is_none());
        assert_eq!(display.lateness_label(), Some("🔴 Terlambat"));
    }

    #[test]
    fn clock_out_merge_preserves_the_clock_in_lateness_flag() {
        let display = SessionDisplay::from_clock_in(&fixtures::clock_in_session("E1", true));

        let mut out_session = fixtures::clock_in_session("E1", true);
        out_session.clock_out = Some(fixtures::timestamp("2024-01-01T17:45:00Z"));
        // A clock-out response reporting a different flag must not win.
        out_session.is_late = Some(false);

        let merged = display.merged_clock_out(&out_session);
        assert_eq!(merged.is_late, Some(true));
        assert_eq!(merged.clock_out.as_deref(), Some("01/01/2024 17:45:00"));
        assert_eq!(merged.lateness_label(), Some("🔴 Terlambat"));
    }

    #[test]
    fn clock_out_merge_keeps_prior_fields_when_response_omits_them() {
        let display = SessionDisplay::from_clock_in(&fixtures::clock_in_session("E1", false));

        let mut out_session = fixtures::clock_in_session("E1", false);
        out_session.clock_out = Some(fixtures::timestamp("2024-01-01T17:45:00Z"));
        out_session.name = None;
        out_session.department = None;
        out_session.clock_in = None;

        let merged = display.merged_clock_out(&out_session);
        assert_eq!(merged.name.as_deref(), Some("Budi Santoso"));
        assert_eq!(merged.department.as_deref(), Some("Engineering"));
        assert_eq!(merged.clock_in.as_deref(), Some("01/01/2024 09:15:00"));
    }

    #[test]
    fn lateness_label_needs_a_clock_in() {
        let display = SessionDisplay {
            is_late: Some(true),
            ..Default::default()
        };
        assert_eq!(display.lateness_label(), None);

        let ontime = SessionDisplay {
            clock_in: Some("01/01/2024 08:00:00".into()),
            is_late: None,
            ..Default::default()
        };
        assert_eq!(ontime.lateness_label(), Some("🟢 Ontime"));
    }

    #[test]
    fn capture_status_pending_carries_the_action() {
        assert!(CaptureStatus::Pending(ClockAction::In).is_pending());
        assert!(!CaptureStatus::Idle.is_pending());
        assert!(!CaptureStatus::Success.is_pending());
        assert_eq!(CaptureStatus::default(), CaptureStatus::Idle);
    }

    #[test]
    fn action_fallback_messages_match_direction() {
        assert_eq!(ClockAction::In.success_fallback(), "Berhasil Absen Masuk");
        assert_eq!(ClockAction::Out.success_fallback(), "Berhasil Absen Keluar");
        assert_eq!(ClockAction::In.label(), "Absen Masuk");
    }
}
