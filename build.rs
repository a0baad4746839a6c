use chrono::{DateTime, Timelike, Utc};

fn main() {
    // Reproducible builds pin the stamp through SOURCE_DATE_EPOCH
    let built_at = std::env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|epoch| epoch.parse::<i64>().ok())
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .unwrap_or_else(Utc::now);

    println!("cargo:rustc-env=BUILD_TIMESTAMP={}", build_stamp(&built_at));
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Format as `YYYYMMDD.HHMM`, rounded down to the hour so that
/// incremental rebuilds don't churn the version string.
fn build_stamp(dt: &DateTime<Utc>) -> String {
    let rounded = dt
        .with_minute(0)
        .and_then(|d| d.with_second(0))
        .and_then(|d| d.with_nanosecond(0))
        .unwrap_or(*dt);

    rounded.format("%Y%m%d.%H%M").to_string()
}
