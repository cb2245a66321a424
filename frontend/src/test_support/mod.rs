#[cfg(not(target_arch = "wasm32"))]
pub mod ssr;

pub mod fixtures {
    use chrono::{DateTime, Utc};

    use crate::api::{AttendanceRecord, ClockSession, Department, Employee};

    pub fn timestamp(raw: &str) -> DateTime<Utc> {
        raw.parse().expect("fixture timestamp")
    }

    pub fn engineering() -> Department {
        Department {
            id: 1,
            department_name: "Engineering".into(),
            max_clock_in_time: "09:00".into(),
            max_clock_out_time: "18:00".into(),
        }
    }

    pub fn employee(id: i64, employee_id: &str, name: &str) -> Employee {
        Employee {
            id,
            employee_id: employee_id.into(),
            department_id: 1,
            name: name.into(),
            address: "Jl. Merdeka 1".into(),
        }
    }

    pub fn record(id: i64, employee_id: &str, clock_out: Option<&str>) -> AttendanceRecord {
        AttendanceRecord {
            id,
            employee_id: employee_id.into(),
            clock_in: Some(timestamp("2024-01-01T08:45:00Z")),
            clock_out: clock_out.map(timestamp),
            name: Some("Budi Santoso".into()),
            department: Some("Engineering".into()),
        }
    }

    pub fn clock_in_session(employee_id: &str, is_late: bool) -> ClockSession {
        ClockSession {
            employee_id: employee_id.into(),
            attendance_id: Some(10),
            clock_in: Some(timestamp("2024-01-01T09:15:00Z")),
            clock_out: None,
            name: Some("Budi Santoso".into()),
            department: Some("Engineering".into()),
            is_late: Some(is_late),
        }
    }
}
