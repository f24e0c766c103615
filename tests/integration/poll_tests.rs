//! Integration tests for polling a controller
//!
//! These tests use wiremock to stand in for the controller's webserver.

use rain3_telemetry::device::{DeviceModel, ProviderState};
use rain3_telemetry::metrics::{ExtraAttributes, MetricState, MetricValue};
use rain3_telemetry::{
    read_metrics, Endpoint, FetchFailure, HttpFetcher, MetricReading, Provider, TelemetryError,
};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const IDENTITY: &str = include_str!("../fixtures/identity.html");
const STATE: &str = include_str!("../fixtures/state.html");
const DOWNLOAD: &str = include_str!("../fixtures/download.html");
const SETUP: &str = include_str!("../fixtures/setup.html");
const INSTALLATION: &str = include_str!("../fixtures/installation.html");
const SETTINGS: &str = include_str!("../fixtures/settings.html");
const ERRORS: &str = include_str!("../fixtures/errors.html");

fn fixture(endpoint: Endpoint) -> &'static str {
    match endpoint {
        Endpoint::Identity => IDENTITY,
        Endpoint::State => STATE,
        Endpoint::Download => DOWNLOAD,
        Endpoint::Setup => SETUP,
        Endpoint::Installation => INSTALLATION,
        Endpoint::Settings => SETTINGS,
        Endpoint::Errors => ERRORS,
    }
}

async fn mount_page(mock_server: &MockServer, endpoint: Endpoint, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/{}", endpoint.path())))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

/// Mounts the fixture for every page except those listed in `skip`
async fn mount_pages_except(mock_server: &MockServer, skip: &[Endpoint]) {
    for endpoint in Endpoint::ALL {
        if skip.contains(&endpoint) {
            continue;
        }
        mount_page(
            mock_server,
            endpoint,
            ResponseTemplate::new(200).set_body_string(fixture(endpoint)),
        )
        .await;
    }
}

fn provider_for(mock_server: &MockServer) -> Provider<HttpFetcher> {
    let uri = mock_server.uri();
    let fetcher = HttpFetcher::new(&uri, Duration::from_secs(1), "test-agent").unwrap();
    Provider::new(fetcher, &uri, DeviceModel::Rain3, 0)
}

#[tokio::test]
async fn test_initialize_with_all_pages() {
    let mock_server = MockServer::start().await;
    mount_pages_except(&mock_server, &[]).await;

    let mut provider = provider_for(&mock_server);
    let snapshot = provider.initialize().await.unwrap();

    assert_eq!(provider.state(), ProviderState::Ready);
    assert!(!snapshot.is_degraded());

    let identity = provider.identity().unwrap();
    assert_eq!(identity.unique_id, "rain3");
    assert_eq!(identity.manufacturer, "Wilo");
    assert_eq!(identity.model, "Rain3");
    assert_eq!(identity.serial_number, "2134567890");
    assert_eq!(identity.software_version, "V1.08");
    assert_eq!(identity.equipment_number.as_deref(), Some("2549472"));
    assert!(identity.name.starts_with("Wilo Rain3 (127.0.0.1:"));
    assert!(identity.configuration_url.starts_with("http://127.0.0.1:"));
}

#[tokio::test]
async fn test_poll_parses_every_page() {
    let mock_server = MockServer::start().await;
    mount_pages_except(&mock_server, &[]).await;

    let mut provider = provider_for(&mock_server);
    provider.initialize().await.unwrap();
    let snapshot = provider.poll().await.unwrap();

    // state
    assert_eq!(snapshot.is_pump_running(), Ok(true));
    assert_eq!(snapshot.pump_pressure(), Ok(3.2));
    assert_eq!(snapshot.cistern_level(), Ok(152.0));
    assert_eq!(snapshot.valve_position().as_deref(), Ok("rain_water"));
    assert_eq!(snapshot.calc_protection_timer(), Ok(149));
    assert_eq!(snapshot.flushing_timer(), Ok(12));
    assert_eq!(snapshot.pump_switches_this_hour(), 3);
    assert_eq!(snapshot.is_switch_on_pressure_reached(), Ok(true));
    assert_eq!(snapshot.is_switch_off_pressure_reached(), Ok(false));
    assert_eq!(snapshot.main_pump_current_runtime(), Some(150));
    assert_eq!(snapshot.main_pump_stop_in(), None);

    // download
    assert_eq!(snapshot.connected_wifi_ssid().as_deref(), Ok("HomeNet"));
    assert_eq!(snapshot.connected_wifi_ip().as_deref(), Ok("192.168.178.40"));

    // setup
    assert_eq!(snapshot.system_total_runtime(), Ok(2_883));
    assert_eq!(snapshot.main_pump_total_runtime(), Ok(4_570));
    assert_eq!(snapshot.cistern_pump_total_runtime(), Ok(45));
    assert_eq!(snapshot.main_pump_switches_counter(), Ok(1_532));
    assert_eq!(snapshot.dry_running_tap_water_alarm_count(), Ok(2));
    assert_eq!(snapshot.dry_running_rain_water_alarm_count(), Ok(0));
    assert!(!snapshot.record(Endpoint::Setup).contains_key("Last occurrence"));

    // installation
    assert_eq!(snapshot.main_pump_type().as_deref(), Ok("mc 304 em"));
    assert_eq!(snapshot.cistern_sensor_range(), Ok(5.0));
    assert_eq!(snapshot.pump_kick_duration(), Ok(10));
    assert_eq!(snapshot.over_flow_threshold(), Ok(180));
    assert_eq!(snapshot.max_pump_cycles_per_hour(), Ok(20));

    // settings
    assert_eq!(snapshot.switch_on_pressure(), Ok(2.5));
    assert_eq!(snapshot.main_pump_stop_delay(), Ok(15));
    assert_eq!(snapshot.pressure_delta_for_tap_water(), Ok(0.3));
    assert_eq!(snapshot.is_drive_on(), Ok(true));
    assert_eq!(snapshot.cistern_pump_mode().as_deref(), Ok("auto"));

    // errors
    assert_eq!(snapshot.is_alarm_active(), Ok(true));
    assert_eq!(snapshot.active_alarm().as_deref(), Ok("E3 Dry running TWM"));
    let history = snapshot.alarm_history().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].error, "E5 Max. runtime pump");
    assert_eq!(history[1].timestamp, "01.04.2024 08:15");
}

#[tokio::test]
async fn test_poll_requests_every_page_once() {
    let mock_server = MockServer::start().await;

    for endpoint in Endpoint::ALL {
        Mock::given(method("GET"))
            .and(path(format!("/{}", endpoint.path())))
            .respond_with(ResponseTemplate::new(200).set_body_string(fixture(endpoint)))
            .expect(2)
            .mount(&mock_server)
            .await;
    }

    let mut provider = provider_for(&mock_server);
    provider.initialize().await.unwrap();
    provider.poll().await.unwrap();

    // Expectations are verified when the mock server is dropped
}

#[tokio::test]
async fn test_slow_page_degrades_only_its_record() {
    let mock_server = MockServer::start().await;
    mount_pages_except(&mock_server, &[Endpoint::Settings]).await;
    mount_page(
        &mock_server,
        Endpoint::Settings,
        ResponseTemplate::new(200)
            .set_body_string(SETTINGS)
            .set_delay(Duration::from_secs(3)),
    )
    .await;

    let mut provider = provider_for(&mock_server);
    let snapshot = provider.initialize().await.unwrap();

    assert_eq!(provider.state(), ProviderState::Degraded);
    assert!(snapshot.is_degraded());
    assert!(matches!(
        snapshot.failures().get(&Endpoint::Settings),
        Some(FetchFailure::Timeout { .. })
    ));
    assert!(snapshot.record(Endpoint::Settings).is_empty());

    let reachable: Vec<Endpoint> = Endpoint::ALL
        .into_iter()
        .filter(|&endpoint| endpoint != Endpoint::Settings)
        .collect();
    assert_eq!(reachable.len(), 6);
    for endpoint in reachable {
        assert!(
            !snapshot.record(endpoint).is_empty(),
            "{} should be parsed",
            endpoint
        );
        assert!(!snapshot.failures().contains_key(&endpoint));
    }
    assert_eq!(snapshot.failures().len(), 1);
    assert_eq!(snapshot.serial_number().as_deref(), Ok("2134567890"));
    assert_eq!(snapshot.connected_wifi_ssid().as_deref(), Ok("HomeNet"));
    assert_eq!(snapshot.is_alarm_active(), Ok(true));
    assert_eq!(snapshot.alarm_data().history.len(), 2);
    assert_eq!(snapshot.pump_pressure(), Ok(3.2));
    assert!(snapshot.switch_on_pressure().is_err());
}

#[tokio::test]
async fn test_error_status_is_a_fetch_failure() {
    let mock_server = MockServer::start().await;
    mount_pages_except(&mock_server, &[Endpoint::Download]).await;
    mount_page(&mock_server, Endpoint::Download, ResponseTemplate::new(500)).await;

    let mut provider = provider_for(&mock_server);
    let snapshot = provider.initialize().await.unwrap();

    assert_eq!(
        snapshot.failures().get(&Endpoint::Download),
        Some(&FetchFailure::Status(500))
    );
    assert_eq!(snapshot.failures().len(), 1);
    assert!(snapshot.connected_wifi_ssid().is_err());
}

#[tokio::test]
async fn test_missing_page_reports_not_found() {
    let mock_server = MockServer::start().await;
    mount_pages_except(&mock_server, &[Endpoint::Errors]).await;

    let mut provider = provider_for(&mock_server);
    let snapshot = provider.initialize().await.unwrap();

    assert_eq!(
        snapshot.failures().get(&Endpoint::Errors),
        Some(&FetchFailure::Status(404))
    );
    assert!(snapshot.is_alarm_active().is_err());
    assert!(snapshot.alarm_data().history.is_empty());
}

#[tokio::test]
async fn test_unreachable_identity_fails_setup() {
    let mock_server = MockServer::start().await;
    mount_pages_except(&mock_server, &[Endpoint::Identity]).await;
    mount_page(&mock_server, Endpoint::Identity, ResponseTemplate::new(503)).await;

    let mut provider = provider_for(&mock_server);
    let result = provider.initialize().await;

    assert!(matches!(
        result,
        Err(TelemetryError::Setup {
            endpoint: Endpoint::Identity,
            ..
        })
    ));
    assert_eq!(provider.state(), ProviderState::Uninitialized);
    assert!(provider.identity().is_none());
}

#[tokio::test]
async fn test_identity_without_serial_fails_setup() {
    let mock_server = MockServer::start().await;
    mount_pages_except(&mock_server, &[Endpoint::Identity]).await;
    mount_page(
        &mock_server,
        Endpoint::Identity,
        ResponseTemplate::new(200).set_body_string("<span>SW Version:</span><b>V1.08</b>"),
    )
    .await;

    let mut provider = provider_for(&mock_server);
    let result = provider.initialize().await;

    assert!(matches!(
        result,
        Err(TelemetryError::MissingIdentity {
            field: "Serial number",
        })
    ));
}

#[tokio::test]
async fn test_poll_before_initialize() {
    let mock_server = MockServer::start().await;
    mount_pages_except(&mock_server, &[]).await;

    let mut provider = provider_for(&mock_server);
    assert!(matches!(
        provider.poll().await,
        Err(TelemetryError::NotInitialized)
    ));
}

#[tokio::test]
async fn test_recovery_after_degraded_poll() {
    let mock_server = MockServer::start().await;
    mount_pages_except(&mock_server, &[Endpoint::State]).await;
    Mock::given(method("GET"))
        .and(path("/state"))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    mount_page(
        &mock_server,
        Endpoint::State,
        ResponseTemplate::new(200).set_body_string(STATE),
    )
    .await;

    let mut provider = provider_for(&mock_server);
    provider.initialize().await.unwrap();
    assert_eq!(provider.state(), ProviderState::Degraded);

    let snapshot = provider.poll().await.unwrap();
    assert_eq!(provider.state(), ProviderState::Ready);
    assert_eq!(snapshot.is_pump_running(), Ok(true));
}

fn find_reading<'a>(readings: &'a [MetricReading], id: &str) -> &'a MetricReading {
    readings
        .iter()
        .find(|reading| reading.metric_id == id)
        .unwrap_or_else(|| panic!("missing reading {}", id))
}

#[tokio::test]
async fn test_metrics_from_live_poll() {
    let mock_server = MockServer::start().await;
    mount_pages_except(&mock_server, &[]).await;

    let mut provider = provider_for(&mock_server);
    let snapshot = provider.initialize().await.unwrap();
    let unique_id = provider.identity().unwrap().unique_id.clone();
    let readings = read_metrics(provider.model().catalog(), &snapshot, &unique_id);

    let reading = |id: &str| find_reading(&readings, id).clone();

    assert_eq!(reading("pressure").unique_id, "rain3_pressure");
    assert_eq!(
        reading("pressure").state,
        MetricState::Value(MetricValue::Float(3.2))
    );
    assert_eq!(
        reading("state").state,
        MetricState::Value(MetricValue::Bool(true))
    );
    assert_eq!(
        reading("valve_position").state,
        MetricState::Value(MetricValue::Text("rain_water".to_string()))
    );
    assert_eq!(
        reading("running_duration").state,
        MetricState::Value(MetricValue::Float(2.5))
    );
    assert_eq!(reading("mp_stop_in").state, MetricState::Unknown);

    let alarm = reading("alarm_active");
    assert_eq!(alarm.state, MetricState::Value(MetricValue::Bool(true)));
    match &alarm.extra {
        Some(ExtraAttributes::Alarm(data)) => {
            assert_eq!(data.current.as_deref(), Some("E3 Dry running TWM"));
            assert_eq!(data.history.len(), 2);
        }
        other => panic!("unexpected extra attributes: {:?}", other),
    }

    assert!(readings
        .iter()
        .all(|reading| !matches!(reading.state, MetricState::Unavailable(_))));
}
