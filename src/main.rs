use libretto::{Config, Date, Grade, Record, Transcript};
use tracing::{info, warn};
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, util::SubscriberInitExt};

/// The exams loaded into the demonstration transcript. Two of them are refused on purpose.
const SAMPLE: &[(&str, u32, &str)] = &[
    ("Analisi I", 29, "2019-02-15"),
    ("Fisica I", 23, "2019-02-28"),
    ("Informatica", 25, "2019-07-04"),
    ("Geometria", 18, "2019-07-19"),
    ("Chimica", 25, "2019-09-10"),
    ("Analisi II", 24, "2020-01-30"),
    ("Fisica II", 20, "2020-06-25"),
    ("Basi di dati", 30, "2021-01-22"),
    ("Informatica", 25, "2019-07-04"),
    ("Chimica", 28, "2020-02-11"),
];

/// Read the verbosity from `RUST_LOG`, which must name a plain level such as `debug`.
///
/// Returns the unusable value next to the `info` fallback so it can be reported once logging is up.
fn log_level(value: Option<&str>) -> (LevelFilter, Option<&str>) {
    match value.map(|raw| (raw, raw.trim().parse::<LevelFilter>())) {
        None => (LevelFilter::INFO, None),
        Some((_, Ok(level))) => (level, None),
        Some((raw, Err(_))) => (LevelFilter::INFO, Some(raw)),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let (level, ignored) = log_level(rust_log.as_deref());
    tracing_subscriber::registry()
        .with(fmt::layer().without_time().with_target(false))
        .with(level)
        .init();
    if let Some(value) = ignored {
        warn!(value, %level, "RUST_LOG is not a plain level, using the default");
    }

    let config = Config::from_env()?;
    info!(?config, "configuration loaded");

    let mut transcript = Transcript::new();
    for &(course, grade, date) in SAMPLE {
        let record = Record::new(course, Grade::new(grade), Some(Date::try_from(date)?));
        if let Err(reason) = transcript.try_insert(record) {
            warn!(course, grade, %reason, "sample exam skipped");
        }
    }
    println!("Transcript:\n{}", transcript);

    let repeated = Record::new("Analisi I", Grade::new(29), None);
    let regraded = Record::new("Analisi I", Grade::new(30), None);
    println!(
        "'{}' is a duplicate: {}, '{}' is a conflict: {}\n",
        repeated,
        transcript.is_duplicate(&repeated),
        regraded,
        transcript.is_conflict(&regraded)
    );

    match transcript.find_by_course("Geometria") {
        Some(entry) => println!("Found: {}\n", entry),
        None => println!("Geometria was not passed yet\n"),
    }

    println!("Exams graded 25:\n{}", transcript.filter_by_grade(Grade::new(25)));
    let extracted = transcript.extract_by_grade(Grade::new(25));
    info!(records = extracted.len(), "extracted exams graded 25");

    let boosted = transcript.boost_grades_with(&config.boost);
    println!(
        "Improved transcript:\n{}\n",
        serde_json::to_string_pretty(&boosted)?
    );

    transcript.sort(config.sort);
    println!("Sorted by {}:\n{}", config.sort, transcript);

    let removed = transcript.prune_below(config.prune_threshold);
    info!(removed, threshold = %config.prune_threshold, "pruned low grades");
    println!(
        "Grades of at least {}:\n{}",
        config.prune_threshold, transcript
    );

    Ok(())
}
