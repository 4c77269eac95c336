use chrono::{Duration, NaiveDate, Utc};
use std::fs::File;
use tempfile::TempDir;

use vpn_traffic::capture::catalog::list_captures;
use vpn_traffic::capture::resolver::{resolve_status, ReportListing};
use vpn_traffic::models::capture::CaptureStatus;
use vpn_traffic::traffic::service::TrafficService;
use vpn_traffic::utils::error::AppError;

fn touch(dir: &TempDir, name: &str) {
    File::create(dir.path().join(name)).unwrap();
}

#[test]
fn test_shared_directory_end_to_end() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "traffic_2024-01-01_00-00-00_(tag)_(5.0_input)_(2.0_output).csv");
    touch(&dir, "traffic_2024-01-01_08-00-00_(tag)_(3.0_input)_(1.0_output).csv");
    touch(&dir, "wg0_2024-01-01(10_minutes).pcap");
    touch(&dir, "wg0_2024-01-01(10_minutes)_flows.csv");
    touch(&dir, "wg0_2024-01-02(10_minutes).pcap");

    let service = TrafficService::new(dir.path());
    assert!(matches!(service.last_days(1), Err(AppError::NotInitialized)));
    service.rebuild().unwrap();

    let last = service.last_days(1).unwrap();
    assert_eq!(last.len(), 1);
    assert_eq!(last[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_eq!(last[0].total_input, 8.0);
    assert_eq!(last[0].total_output, 3.0);
    assert_eq!(last[0].capture_count, 2);

    let captures = list_captures(dir.path(), Utc::now() + Duration::hours(1)).unwrap();
    assert_eq!(captures.len(), 2);
    let status_of = |name: &str| captures.iter().find(|c| c.name == name).unwrap().status;
    assert_eq!(status_of("wg0_2024-01-01(10_minutes).pcap"), CaptureStatus::Completed);
    assert_eq!(status_of("wg0_2024-01-02(10_minutes).pcap"), CaptureStatus::Failed);
}

#[test]
fn test_single_listing_resolves_many_captures() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "a(1_minutes)_out.csv");
    touch(&dir, "notes.txt");

    let listing = ReportListing::scan(dir.path()).unwrap();
    assert_eq!(listing.len(), 1);

    let t = Utc::now();
    let later = t + Duration::minutes(10);
    assert_eq!(resolve_status("a(1_minutes).pcap", t, &listing, later), CaptureStatus::Completed);
    assert_eq!(resolve_status("b(1_minutes).pcap", t, &listing, later), CaptureStatus::Failed);
    assert_eq!(resolve_status("c.pcap", t, &listing, later), CaptureStatus::Pending);
}
