//! Loading curve profiles from disk and observing build advisories.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use control_curves::{curves, ControlCurve, CurveBuilder, CurveProfile};
use tempfile::NamedTempFile;

/// Collects formatted log output for assertions.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, logs.contents())
}

#[test]
fn test_profile_file_round_trip() -> anyhow::Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(
        file,
        r#"
[curves.drive]
kind = "power"
power = 3

[curves.strafe]
kind = "linear"
dead_zone = 0.1
minimum_power = 0.2
power_multiplier = 0.8
"#
    )?;
    file.flush()?;

    let profile = CurveProfile::load(file.path())?;
    let built = profile.build()?;

    let drive = &built["drive"];
    assert!((drive.get(0.3) - 0.027).abs() < 0.0001);
    assert!((drive.get(0.8) - 0.512).abs() < 0.0001);
    assert!((drive.get(-0.5) + 0.125).abs() < 0.0001);

    let strafe = &built["strafe"];
    assert_eq!(strafe.get(0.05), 0.0);
    assert_eq!(strafe.get(1.0), 0.8);
    assert!((strafe.get(0.88) - 0.72).abs() < 0.0001);

    Ok(())
}

#[test]
fn test_even_power_is_logged_not_fatal() -> anyhow::Result<()> {
    let (built, logs) = with_captured_logs(|| curves::power(2).build());

    let curve = built?;
    assert_eq!(curve.power(), 2);
    assert!(logs.contains("WARN"), "missing warning in: {logs}");
    assert!(logs.contains("even power 2"), "missing warning in: {logs}");

    Ok(())
}

#[test]
fn test_odd_power_is_not_logged_as_warning() -> anyhow::Result<()> {
    let (built, logs) = with_captured_logs(|| curves::power(3).build());

    built?;
    assert!(!logs.contains("WARN"), "unexpected warning in: {logs}");

    Ok(())
}

#[test]
fn test_even_power_in_profile_is_logged_on_build() -> anyhow::Result<()> {
    let profile = CurveProfile::from_toml_str("[curves.lift]\nkind = \"power\"\npower = 4\n")?;
    let (built, logs) = with_captured_logs(|| profile.build());

    assert!(built?.contains_key("lift"));
    assert!(logs.contains("even power 4"), "missing warning in: {logs}");

    Ok(())
}
