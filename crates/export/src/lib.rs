//! Export helpers for CSV tables and JSON snapshots.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod hourly {
    use std::io::Write;

    use serde::Serialize;
    use skyview_weather::HourlyCard;

    #[derive(Serialize)]
    struct Row<'a> {
        time: &'a str,
        label: &'a str,
        temperature_c: Option<f64>,
        code: Option<u16>,
        condition: &'static str,
        icon: &'static str,
    }

    /// Write the hourly strip as CSV with a header row.
    pub fn write_csv<W: Write>(writer: W, cards: &[HourlyCard]) -> csv::Result<()> {
        let mut out = csv::Writer::from_writer(writer);
        for card in cards {
            out.serialize(Row {
                time: &card.time,
                label: &card.label,
                temperature_c: card.temperature,
                code: card.code.map(|c| c.code()),
                condition: card.code.map(|c| c.description()).unwrap_or("Unknown"),
                icon: card.icon(),
            })?;
        }
        out.flush()?;
        Ok(())
    }
}

pub mod weekly {
    use std::io::Write;

    use serde::Serialize;
    use skyview_weather::DailySummary;

    #[derive(Serialize)]
    struct Row<'a> {
        date: &'a str,
        day: &'a str,
        temp_max_c: Option<f64>,
        temp_min_c: Option<f64>,
        wind_max_kmh: Option<f64>,
        humidity_avg_pct: Option<u8>,
        humidity_samples: usize,
        code: Option<u16>,
        condition: &'static str,
    }

    /// Write the weekly summary as CSV with a header row.
    pub fn write_csv<W: Write>(writer: W, days: &[DailySummary]) -> csv::Result<()> {
        let mut out = csv::Writer::from_writer(writer);
        for day in days {
            out.serialize(Row {
                date: &day.date,
                day: &day.day,
                temp_max_c: day.temp_max,
                temp_min_c: day.temp_min,
                wind_max_kmh: day.wind_max,
                humidity_avg_pct: day.humidity_avg,
                humidity_samples: day.humidity_samples,
                code: day.code.map(|c| c.code()),
                condition: day.code.map(|c| c.description()).unwrap_or("Unknown"),
            })?;
        }
        out.flush()?;
        Ok(())
    }
}

pub mod orbit {
    use std::f64::consts::TAU;
    use std::io::Write;

    use serde::Serialize;
    use skyview_orbits::{EllipseParams, OrbitSystem, orbit_path};

    /// One sampled point of an orbit outline.
    #[derive(Debug, Clone, Serialize)]
    pub struct Sample {
        pub body: &'static str,
        pub index: usize,
        pub angle_rad: f64,
        pub x: f64,
        pub z: f64,
    }

    fn samples_for(body: &'static str, params: &EllipseParams, segments: usize) -> Vec<Sample> {
        let segments = segments.max(1);
        orbit_path(params, segments)
            .into_iter()
            .enumerate()
            .map(|(index, p)| Sample {
                body,
                index,
                angle_rad: index as f64 / segments as f64 * TAU,
                x: p.x,
                z: p.z,
            })
            .collect()
    }

    /// Earth outline (heliocentric) followed by Moon outline (geocentric).
    pub fn samples(system: &OrbitSystem, earth_segments: usize, moon_segments: usize) -> Vec<Sample> {
        let mut all = samples_for("earth", &system.earth, earth_segments);
        all.extend(samples_for("moon", &system.moon, moon_segments));
        all
    }

    pub fn write_csv<W: Write>(writer: W, samples: &[Sample]) -> csv::Result<()> {
        let mut out = csv::Writer::from_writer(writer);
        for sample in samples {
            out.serialize(sample)?;
        }
        out.flush()?;
        Ok(())
    }
}

pub mod snapshot {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use skyview_orbits::SceneFrame;
    use skyview_weather::{
        CurrentConditions, DailyInsights, DailySummary, HourlyCard, Location, MapMarker,
    };

    /// Everything shown on the dashboard at one moment.
    #[derive(Debug, Serialize)]
    pub struct DashboardSnapshot<'a> {
        pub generated_at: &'a str,
        pub location: &'a Location,
        pub current: &'a CurrentConditions,
        pub marker: &'a MapMarker,
        pub hourly: &'a [HourlyCard],
        pub weekly: Option<&'a [DailySummary]>,
        pub insights: Option<&'a DailyInsights>,
        pub orbit: &'a SceneFrame,
    }

    /// Write the snapshot as pretty-printed JSON, creating parent directories.
    pub fn write_json(path: &Path, snapshot: &DashboardSnapshot<'_>) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut writer = BufWriter::new(File::create(path)?);
        to_writer_pretty(&mut writer, snapshot)?;
        writer.flush()
    }
}
