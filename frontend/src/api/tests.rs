#![cfg(not(coverage))]

use super::*;
use chrono::NaiveDate;
use httpmock::prelude::*;
use serde_json::json;

fn employee_json(id: i64, employee_id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "employee_id": employee_id,
        "department_id": 1,
        "name": "Budi Santoso",
        "address": "Jl. Merdeka 1"
    })
}

fn department_json(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "department_name": name,
        "max_clock_in_time": "09:00",
        "max_clock_out_time": "18:00"
    })
}

fn record_json(id: i64, employee_id: &str, clock_out: Option<&str>) -> serde_json::Value {
    json!({
        "id": id,
        "employee_id": employee_id,
        "clock_in": "2024-01-01T08:45:00Z",
        "clock_out": clock_out,
        "name": "Budi Santoso",
        "department": "Engineering"
    })
}

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.base_url())
}

#[tokio::test]
async fn employee_endpoints_round_trip() {
    let server = MockServer::start_async().await;

    server.mock(|when, then| {
        when.method(GET).path("/employees");
        then.status(200)
            .json_body(json!({ "data": [employee_json(1, "E1"), employee_json(2, "E2")] }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/employees");
        then.status(201).json_body(json!({ "data": employee_json(3, "E3") }));
    });
    server.mock(|when, then| {
        when.method(PUT).path("/employees/3");
        then.status(200).json_body(json!({ "data": employee_json(3, "E3-baru") }));
    });
    let delete_mock = server.mock(|when, then| {
        when.method(DELETE).path("/employees/3");
        then.status(200);
    });

    let client = api_client(&server);

    let employees = client.list_employees().await.unwrap();
    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0].employee_id, "E1");

    let payload = EmployeeRequest {
        employee_id: "E3".into(),
        department_id: 1,
        name: "Budi Santoso".into(),
        address: "Jl. Merdeka 1".into(),
    };
    let created = client.create_employee(&payload).await.unwrap();
    assert_eq!(created.id, 3);

    let updated = client.update_employee(3, &payload).await.unwrap();
    assert_eq!(updated.employee_id, "E3-baru");

    client.delete_employee(3).await.unwrap();
    delete_mock.assert();
}

#[tokio::test]
async fn create_employee_surfaces_server_error() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/employees");
        then.status(400)
            .json_body(json!({ "error": "employee_id sudah terdaftar" }));
    });

    let client = api_client(&server);
    let err = client
        .create_employee(&EmployeeRequest {
            employee_id: "E1".into(),
            department_id: 1,
            name: "Budi".into(),
            address: "Jl. Merdeka 1".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.error, "employee_id sudah terdaftar");
}

#[tokio::test]
async fn department_endpoints_round_trip() {
    let server = MockServer::start_async().await;

    server.mock(|when, then| {
        when.method(GET).path("/departments");
        then.status(200)
            .json_body(json!({ "data": [department_json(1, "Engineering")] }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/departments");
        then.status(201).json_body(json!({ "data": department_json(2, "Finance") }));
    });
    server.mock(|when, then| {
        when.method(PUT).path("/departments/2");
        then.status(200).json_body(json!({ "data": department_json(2, "Keuangan") }));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/departments/2");
        then.status(200);
    });

    let client = api_client(&server);

    let departments = client.list_departments().await.unwrap();
    assert_eq!(departments.len(), 1);
    assert_eq!(departments[0].max_clock_in_time, "09:00");

    let payload = DepartmentRequest {
        department_name: "Finance".into(),
        max_clock_in_time: "08:30".into(),
        max_clock_out_time: "17:30".into(),
    };
    let created = client.create_department(&payload).await.unwrap();
    assert_eq!(created.id, 2);

    let updated = client.update_department(2, &payload).await.unwrap();
    assert_eq!(updated.department_name, "Keuangan");

    client.delete_department(2).await.unwrap();
}

#[tokio::test]
async fn delete_department_reports_referencing_employees() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(DELETE).path("/departments/1");
        then.status(409)
            .json_body(json!({ "error": "Department masih memiliki karyawan terdaftar" }));
    });

    let client = api_client(&server);
    let err = client.delete_department(1).await.unwrap_err();
    assert_eq!(err.error, "Department masih memiliki karyawan terdaftar");
}

#[tokio::test]
async fn clock_in_decodes_legacy_field_names() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/attendance/clock-in");
        then.status(200).json_body(json!({
            "message": "Berhasil Absen Masuk",
            "data": {
                "employee_id": "E1",
                "clock_in": "2024-01-01T09:15:00Z",
                "employee_name": "Budi Santoso",
                "department": "Engineering",
                "isLate": true,
                "attendance_id": 10
            }
        }));
    });

    let client = api_client(&server);
    let response = client
        .clock_in(&ClockRequest {
            employee_id: "E1".into(),
        })
        .await
        .unwrap();
    assert_eq!(response.message.as_deref(), Some("Berhasil Absen Masuk"));
    assert_eq!(response.data.name.as_deref(), Some("Budi Santoso"));
    assert_eq!(response.data.is_late, Some(true));
    assert!(response.data.clock_in.is_some());
    assert!(response.data.clock_out.is_none());
}

#[tokio::test]
async fn clock_out_uses_put_and_decodes_canonical_fields() {
    let server = MockServer::start_async().await;
    let clock_out_mock = server.mock(|when, then| {
        when.method(PUT).path("/attendance/clock-out");
        then.status(200).json_body(json!({
            "message": "Berhasil Absen Keluar",
            "data": {
                "employee_id": "E1",
                "clock_in": "2024-01-01T09:15:00Z",
                "clock_out": "2024-01-01T17:45:00Z",
                "name": "Budi Santoso",
                "department": "Engineering",
                "is_late": false,
                "attendance_id": 10
            }
        }));
    });

    let client = api_client(&server);
    let response = client
        .clock_out(&ClockRequest {
            employee_id: "E1".into(),
        })
        .await
        .unwrap();
    assert!(response.data.clock_out.is_some());
    assert_eq!(response.data.is_late, Some(false));
    clock_out_mock.assert();
}

#[tokio::test]
async fn clock_out_without_clock_in_passes_server_message() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(PUT).path("/attendance/clock-out");
        then.status(400)
            .json_body(json!({ "error": "Belum melakukan absen masuk hari ini" }));
    });

    let client = api_client(&server);
    let err = client
        .clock_out(&ClockRequest {
            employee_id: "E1".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.error, "Belum melakukan absen masuk hari ini");
}

#[tokio::test]
async fn attendance_logs_sends_filters_and_unwraps_nested_envelope() {
    let server = MockServer::start_async().await;
    let filtered = server.mock(|when, then| {
        when.method(GET)
            .path("/attendance/logs")
            .query_param("date", "2024-01-01")
            .query_param("department", "1");
        then.status(200).json_body(json!({
            "data": { "data": [record_json(1, "E1", Some("2024-01-01T17:45:00Z")), record_json(2, "E2", None)] }
        }));
    });

    let client = api_client(&server);
    let records = client
        .attendance_logs(NaiveDate::from_ymd_opt(2024, 1, 1), Some(1))
        .await
        .unwrap();
    assert_eq!(records.len(), 2);
    assert!(records[0].clock_out.is_some());
    assert!(records[1].clock_out.is_none());
    filtered.assert();
}

#[tokio::test]
async fn attendance_logs_omits_absent_filters() {
    let server = MockServer::start_async().await;
    let unfiltered = server.mock(|when, then| {
        when.method(GET)
            .path("/attendance/logs")
            .matches(|req| req.query_params.as_ref().map(|q| q.is_empty()).unwrap_or(true));
        then.status(200).json_body(json!({ "data": { "data": [] } }));
    });

    let client = api_client(&server);
    let records = client.attendance_logs(None, None).await.unwrap();
    assert!(records.is_empty());
    unfiltered.assert();
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_status_message() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/employees");
        then.status(500).body("internal failure");
    });

    let client = api_client(&server);
    let err = client.list_employees().await.unwrap_err();
    assert_eq!(err.code, "SERVER_ERROR");
    assert!(err.error.contains("500"));
}
