//! Ingestion adapters.
//!
//! An adapter turns one external event (a finished upload batch, a hung-up
//! call) into an [`IngestBatch`]: fully formed recordings plus the
//! confidence gained. Sessions only ever see batches, so where durations
//! come from can change without touching the state machine.

use chrono::NaiveDateTime;
use parley_types::{CallResult, ClipDuration, FileMeta, Recording, RecordingKind};
use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::debug;

/// Normalised output of one ingestion event.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestBatch {
    pub recordings: Vec<Recording>,
    /// Applied once for the whole batch.
    pub confidence_delta: u8,
}

/// Session facts an adapter may need when building recordings.
#[derive(Debug, Clone, Copy)]
pub struct IngestContext {
    /// Recordings already in the session.
    pub existing_count: usize,
    /// Local time the event completed.
    pub now: NaiveDateTime,
}

/// Converts an external event into recordings.
pub trait IngestionAdapter {
    type Input;

    fn normalize(&mut self, input: Self::Input, ctx: &IngestContext) -> IngestBatch;
}

/// Supplies durations for uploaded files whose audio is never analysed.
pub trait DurationSource {
    fn next_duration(&mut self) -> ClipDuration;
}

/// Placeholder analysis: a uniform whole 1-2 minutes plus 0-59 seconds.
#[derive(Debug)]
pub struct RandomDurations<R = ThreadRng> {
    rng: R,
}

impl RandomDurations<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomDurations<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomDurations<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DurationSource for RandomDurations<R> {
    fn next_duration(&mut self) -> ClipDuration {
        let minutes: u32 = self.rng.gen_range(1..=2);
        let seconds: u32 = self.rng.gen_range(0..60);
        ClipDuration::from_total_seconds(minutes * 60 + seconds)
    }
}

/// Replays a fixed list of durations in order, cycling when exhausted.
///
/// An empty script yields `0:00`.
#[derive(Debug, Clone)]
pub struct ScriptedDurations {
    script: Vec<ClipDuration>,
    next: usize,
}

impl ScriptedDurations {
    pub fn new(script: impl IntoIterator<Item = ClipDuration>) -> Self {
        Self {
            script: script.into_iter().collect(),
            next: 0,
        }
    }
}

impl DurationSource for ScriptedDurations {
    fn next_duration(&mut self) -> ClipDuration {
        if self.script.is_empty() {
            return ClipDuration::from_total_seconds(0);
        }
        let duration = self.script[self.next % self.script.len()];
        self.next += 1;
        duration
    }
}

/// Turns a batch of picked files into `call` recordings.
#[derive(Debug)]
pub struct UploadAdapter<D> {
    durations: D,
    title_prefix: String,
    confidence_delta: u8,
}

impl<D: DurationSource> UploadAdapter<D> {
    pub fn new(durations: D, title_prefix: impl Into<String>, confidence_delta: u8) -> Self {
        Self {
            durations,
            title_prefix: title_prefix.into(),
            confidence_delta,
        }
    }
}

impl<D: DurationSource> IngestionAdapter for UploadAdapter<D> {
    type Input = Vec<FileMeta>;

    fn normalize(&mut self, files: Vec<FileMeta>, ctx: &IngestContext) -> IngestBatch {
        let recordings = files
            .iter()
            .enumerate()
            .map(|(index, file)| {
                let duration = self.durations.next_duration();
                debug!(file = %file.name, %duration, "normalised uploaded file");
                Recording::new(
                    format!("{} {}", self.title_prefix, ctx.existing_count + index + 1),
                    ctx.now,
                    duration,
                    RecordingKind::Call,
                )
            })
            .collect();

        IngestBatch {
            recordings,
            confidence_delta: self.confidence_delta,
        }
    }
}

/// Turns a finished role-play call into one `roleplay` recording.
#[derive(Debug, Clone)]
pub struct CallAdapter {
    confidence_delta: u8,
}

impl CallAdapter {
    pub fn new(confidence_delta: u8) -> Self {
        Self { confidence_delta }
    }

    /// Builds the recording for one call, stamped with the call's own
    /// timestamp.
    pub fn to_recording(&self, call: CallResult) -> Recording {
        debug!(title = %call.title, duration = %call.duration, "normalised finished call");
        Recording::new(
            call.title,
            call.timestamp,
            call.duration,
            RecordingKind::Roleplay,
        )
    }
}

impl IngestionAdapter for CallAdapter {
    type Input = CallResult;

    fn normalize(&mut self, call: CallResult, _ctx: &IngestContext) -> IngestBatch {
        IngestBatch {
            recordings: vec![self.to_recording(call)],
            confidence_delta: self.confidence_delta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ctx(existing_count: usize) -> IngestContext {
        IngestContext {
            existing_count,
            now: NaiveDate::from_ymd_opt(2026, 10, 17)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
        }
    }

    fn d(s: &str) -> ClipDuration {
        s.parse().unwrap()
    }

    #[test]
    fn random_durations_stay_in_range() {
        let mut source = RandomDurations::with_rng(StdRng::seed_from_u64(7));
        for _ in 0..500 {
            let duration = source.next_duration();
            assert!((1..=2).contains(&duration.minutes()), "{duration}");
            assert!(duration.seconds() <= 59);
        }
    }

    #[test]
    fn scripted_durations_cycle() {
        let mut source = ScriptedDurations::new([d("1:30"), d("2:00")]);
        assert_eq!(source.next_duration(), d("1:30"));
        assert_eq!(source.next_duration(), d("2:00"));
        assert_eq!(source.next_duration(), d("1:30"));

        let mut empty = ScriptedDurations::new(Vec::new());
        assert_eq!(empty.next_duration(), d("0:00"));
    }

    #[test]
    fn upload_numbers_titles_after_existing_recordings() {
        let mut adapter = UploadAdapter::new(
            ScriptedDurations::new([d("1:30"), d("2:00"), d("1:45")]),
            "Загруженная запись",
            10,
        );
        let files = vec![
            FileMeta::new("a.wav"),
            FileMeta::new("b.wav"),
            FileMeta::new("c.wav"),
        ];
        let batch = adapter.normalize(files, &ctx(2));

        assert_eq!(batch.confidence_delta, 10);
        let titles: Vec<&str> = batch.recordings.iter().map(|r| r.title()).collect();
        assert_eq!(
            titles,
            vec![
                "Загруженная запись 3",
                "Загруженная запись 4",
                "Загруженная запись 5"
            ]
        );
        assert!(batch
            .recordings
            .iter()
            .all(|r| r.kind() == RecordingKind::Call));
        assert_eq!(batch.recordings[2].duration(), d("1:45"));
        assert_eq!(batch.recordings[0].time_label(), "09:30");
    }

    #[test]
    fn empty_upload_yields_no_recordings() {
        let mut adapter = UploadAdapter::new(ScriptedDurations::new([d("1:00")]), "x", 10);
        assert!(adapter.normalize(Vec::new(), &ctx(0)).recordings.is_empty());
    }

    #[test]
    fn call_keeps_measured_duration_and_timestamp() {
        let ended = NaiveDate::from_ymd_opt(2026, 3, 8)
            .unwrap()
            .and_hms_opt(18, 45, 0)
            .unwrap();
        let mut adapter = CallAdapter::new(15);
        let batch = adapter.normalize(
            CallResult {
                duration: d("5:00"),
                title: "Ролевой звонок".to_string(),
                timestamp: ended,
            },
            &ctx(4),
        );

        assert_eq!(batch.confidence_delta, 15);
        assert_eq!(batch.recordings.len(), 1);
        let r = &batch.recordings[0];
        assert_eq!(r.title(), "Ролевой звонок");
        assert_eq!(r.duration(), d("5:00"));
        assert_eq!(r.kind(), RecordingKind::Roleplay);
        assert_eq!(r.time_label(), "18:45");
    }
}
