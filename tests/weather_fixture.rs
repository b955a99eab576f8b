use std::fs;

use chrono::{DateTime, TimeZone, Utc};
use skyview::export::snapshot::{DashboardSnapshot, write_json};
use skyview::orbits::{OrbitSystem, SceneFrame};
use skyview::weather::hourly::local_now;
use skyview::weather::{
    AirQuality, AqiBand, CurrentConditions, DailyInsights, Forecast, Location, MapMarker,
    PressureTrend, UvBand, VisibilityStatus, WeatherCode, WeatherWidget, WeeklyView,
    current_hour_index, day_card, hourly_strip, weekly_summary,
};

fn forecast() -> Forecast {
    serde_json::from_str(include_str!("fixtures/mumbai_forecast.json")).expect("forecast fixture")
}

fn air_quality() -> AirQuality {
    serde_json::from_str(include_str!("fixtures/mumbai_air_quality.json")).expect("aqi fixture")
}

fn location() -> Location {
    let geocoding: serde_json::Value =
        serde_json::from_str(include_str!("fixtures/mumbai_geocoding.json")).expect("geo fixture");
    serde_json::from_value(geocoding["results"][0].clone()).expect("location")
}

/// 10:15 in Mumbai.
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 4, 45, 0).unwrap()
}

#[test]
fn fixture_parses_with_local_offset() {
    let forecast = forecast();
    assert_eq!(forecast.utc_offset_seconds, 19_800);
    assert_eq!(forecast.timezone.as_deref(), Some("Asia/Kolkata"));
    let hourly = forecast.hourly.as_ref().unwrap();
    assert_eq!(hourly.time.len(), 48);
    assert_eq!(
        current_hour_index(&hourly.time, local_now(now(), forecast.utc_offset_seconds)),
        10
    );
}

#[test]
fn current_conditions_and_hourly_strip() {
    let forecast = forecast();
    let current = CurrentConditions::new(&location(), &forecast, now()).unwrap();
    assert_eq!(current.place, "Mumbai, India");
    assert_eq!(current.condition(), "Partly Cloudy");
    assert_eq!(current.humidity_text(), "70%");

    let hourly = forecast.hourly.as_ref().unwrap();
    let cards = hourly_strip(hourly, 10, 24);
    assert_eq!(cards.len(), 24);
    assert_eq!(cards[0].label, "10 AM");
    assert_eq!(cards[0].temperature, Some(29.5));
    assert_eq!(cards[2].code, Some(WeatherCode::RainSlight));
    assert_eq!(cards[2].icon(), "🌧️");

    // Near the end of the series the strip is simply shorter.
    assert_eq!(hourly_strip(hourly, 40, 24).len(), 8);
}

#[test]
fn weekly_summary_from_fixture() {
    let days = weekly_summary(&forecast(), 7).unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(days[0].day, "Wed");
    assert_eq!(days[0].humidity_avg, Some(70));
    assert_eq!(days[1].humidity_avg, Some(60));
    assert_eq!(days[1].humidity_samples, 24);

    let temp = day_card(&days[1], WeeklyView::Temp);
    assert_eq!(temp.value, "32.4°");
    assert_eq!(temp.sub, "--°");
    assert_eq!(day_card(&days[0], WeeklyView::Humidity).value, "70%");
}

#[test]
fn daily_insights_from_fixture() {
    let insights = DailyInsights::new(&forecast(), &air_quality(), now()).unwrap();

    let aqi = insights.aqi.unwrap();
    assert_eq!(aqi.value, 90.0);
    assert_eq!(aqi.band, AqiBand::Moderate);
    assert!((aqi.percent - 30.0).abs() < 1e-9);

    let uv = insights.uv.unwrap();
    assert_eq!(uv.band, UvBand::High);

    let pressure = insights.pressure.unwrap();
    assert_eq!(pressure.hpa, 1013.0);
    assert_eq!(pressure.trend, PressureTrend::Steady);

    let visibility = insights.visibility.unwrap();
    assert_eq!(visibility.km, 24.1);
    assert_eq!(visibility.status, VisibilityStatus::Excellent);

    assert_eq!(insights.sunrise, "6:09 AM");
    assert_eq!(insights.sunset, "6:59 PM");
    assert_eq!(insights.feels_like, Some(35.0));
    assert_eq!(insights.actual, Some(31.4));
}

#[test]
fn first_hour_without_aqi_leaves_gauge_empty() {
    // 18:30 UTC on 30 April is local midnight, where the AQI series is null.
    let midnight = Utc.with_ymd_and_hms(2024, 4, 30, 18, 30, 0).unwrap();
    let insights = DailyInsights::new(&forecast(), &air_quality(), midnight).unwrap();
    assert!(insights.aqi.is_none());
    assert!(insights.uv.is_some());
}

#[test]
fn widget_and_marker_from_fixture() {
    let forecast = forecast();
    let current = forecast.current_weather.as_ref().unwrap();
    let location = location();
    assert_eq!(
        WeatherWidget::new(&location, current).render().unwrap(),
        r#"WIDGET_WEATHER:{"city":"Mumbai","temp":31.4,"wind":14.2,"code":2,"unit":"°C"}"#
    );
    let marker = MapMarker::new(&location, current.temperature, 12);
    assert_eq!(marker.popup, "<b>Mumbai</b><br>Temp: 31.4°C");
}

#[test]
fn snapshot_json_contains_every_widget() {
    let forecast = forecast();
    let location = location();
    let current = CurrentConditions::new(&location, &forecast, now()).unwrap();
    let marker = MapMarker::new(&location, current.temperature, 12);
    let hourly = hourly_strip(forecast.hourly.as_ref().unwrap(), 10, 3);
    let weekly = weekly_summary(&forecast, 7).unwrap();
    let insights = DailyInsights::new(&forecast, &air_quality(), now()).unwrap();
    let orbit = SceneFrame::at(now(), &OrbitSystem::default());

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("snapshots/mumbai.json");
    write_json(
        &path,
        &DashboardSnapshot {
            generated_at: "2024-05-01T04:45:00Z",
            location: &location,
            current: &current,
            marker: &marker,
            hourly: &hourly,
            weekly: Some(&weekly),
            insights: Some(&insights),
            orbit: &orbit,
        },
    )
    .unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(value["location"]["name"], "Mumbai");
    assert_eq!(value["current"]["code"], 2);
    assert_eq!(value["hourly"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["weekly"][1]["temp_min"], serde_json::Value::Null);
    assert_eq!(value["insights"]["aqi"]["band"], "Moderate");
    assert!(value["orbit"]["angles"]["moon"].is_f64());
}
