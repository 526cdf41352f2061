//! Station temperature report.
//!
//! Reads the station names (`stationname`), the minimum (`tn`) and maximum (`tx`) temperatures
//! and the observation `time`, and prints one line per station with the mean of minimum and
//! maximum followed by the observation time in UTC and in a local time zone:
//!
//! ```text
//!  1:   6.3°C  De Bilt
//!  2:   NaN°C  Eelde
//! Tijd (UTC)  : Sat Jun  1 00:00:00 2024
//! Tijd (local): Sat Jun  1 02:00:00 2024
//! ```
use std::fmt::Display;
use std::io;

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use itertools::izip;

use crate::catalog::Catalog;
use crate::container::Container;
use crate::error::{Error, Result};
use crate::project::ArrayPayload;

/// Readings at or below this are missing.
pub const VALIDITY_FLOOR: f64 = -300.0;

/// `asctime(3)` layout.
pub const TIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub station_name: String,
    pub tmin: f64,
    pub tmax: f64,
    /// NaN unless both readings are valid.
    pub average: f64,
}

#[must_use]
pub fn average(tmin: f64, tmax: f64) -> f64 {
    if tmin > VALIDITY_FLOOR && tmax > VALIDITY_FLOOR {
        (tmin + tmax) / 2.
    } else {
        f64::NAN
    }
}

/// Start of the `time` axis: 1950-01-01T00:00:00Z.
#[must_use]
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1950, 1, 1, 0, 0, 0)
        .single()
        .expect("1950-01-01T00:00:00Z is a valid date")
}

/// Seconds since [`epoch`] as a UTC timestamp. Fractional seconds are truncated.
pub fn timestamp(seconds: f64) -> Result<DateTime<Utc>> {
    let invalid = || {
        Error::metadata(
            "converting `time`",
            format!("{seconds} s since 1950-01-01 is not a representable time"),
        )
    };

    if !seconds.is_finite() {
        return Err(invalid());
    }

    let delta = TimeDelta::try_seconds(seconds.trunc() as i64).ok_or_else(invalid)?;
    epoch().checked_add_signed(delta).ok_or_else(invalid)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub rows: Vec<ReportRow>,
    pub time: DateTime<Utc>,
}

impl Report {
    /// Write the report, rendering the second timestamp line in `local`.
    pub fn write<W, Tz>(&self, mut w: W, local: &Tz) -> io::Result<()>
    where
        W: io::Write,
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        for (i, r) in self.rows.iter().enumerate() {
            writeln!(w, "{:2}:  {:4.1}°C  {}", i + 1, r.average, r.station_name)?;
        }

        writeln!(w, "Tijd (UTC)  : {}", self.time.format(TIME_FORMAT))?;
        writeln!(
            w,
            "Tijd (local): {}",
            self.time.with_timezone(local).format(TIME_FORMAT)
        )?;

        Ok(())
    }

    pub fn to_string<Tz>(&self, local: &Tz) -> io::Result<String>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let mut buf = Vec::new();
        self.write(&mut buf, local)?;
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

fn station_names<C: Container>(catalog: &Catalog<C>) -> Result<Vec<String>> {
    let var = catalog.find_variable("stationname")?;

    match catalog.read_array(&var)? {
        ArrayPayload::Strings(names) => Ok(names),
        _ => Err(Error::Shape {
            variable: var.name.clone(),
            element_type: var.element_type.clone(),
            rank: var.rank(),
        }),
    }
}

/// One value per station: the whole variable for rank 1, the first step along the second
/// dimension for rank 2.
fn series<C: Container>(catalog: &Catalog<C>, name: &str, stations: usize) -> Result<Vec<f64>> {
    let var = catalog.find_variable(name)?;

    let shape_error = || Error::Shape {
        variable: var.name.clone(),
        element_type: var.element_type.clone(),
        rank: var.rank(),
    };

    let found = catalog
        .dimensions_of(&var)
        .first()
        .map(|d| d.len)
        .ok_or_else(shape_error)?;

    if found != stations {
        return Err(Error::Consistency {
            variable: var.name.clone(),
            expected: stations,
            found,
        });
    }

    match catalog.read_array(&var)? {
        ArrayPayload::Vector(v) => Ok(v.to_vec()),
        ArrayPayload::Grid(g) if g.ncols() > 0 => Ok(g.column(0).to_vec()),
        ArrayPayload::Grid(_) => Err(Error::metadata(
            format!("reading `{name}`"),
            "no steps along the second dimension",
        )),
        ArrayPayload::Strings(_) => Err(shape_error()),
    }
}

fn first_time<C: Container>(catalog: &Catalog<C>) -> Result<f64> {
    let var = catalog.find_variable("time")?;

    let first = match catalog.read_array(&var)? {
        ArrayPayload::Vector(v) => v.get(0).copied(),
        ArrayPayload::Grid(g) => g.get((0, 0)).copied(),
        ArrayPayload::Strings(_) => {
            return Err(Error::Shape {
                variable: var.name.clone(),
                element_type: var.element_type.clone(),
                rank: var.rank(),
            })
        }
    };

    first.ok_or_else(|| Error::metadata("reading `time`", "variable holds no time steps"))
}

/// Gather the report. Nothing is written until every variable has been read.
pub fn read<C: Container>(catalog: &Catalog<C>) -> Result<Report> {
    let names = station_names(catalog)?;
    let tmin = series(catalog, "tn", names.len())?;
    let tmax = series(catalog, "tx", names.len())?;

    debug!("{} stations", names.len());

    let rows = izip!(names, tmin, tmax)
        .map(|(station_name, tmin, tmax)| ReportRow {
            station_name,
            tmin,
            tmax,
            average: average(tmin, tmax),
        })
        .collect();

    let time = timestamp(first_time(catalog)?)?;

    Ok(Report { rows, time })
}
