//! Recording adapter for the `SecondarySource` port.

use chrono::NaiveDate;

use super::{record_result, SharedRecorder};
use crate::ports::{SecondarySource, SourceFuture};
use crate::readings::LiturgicalInfo;

/// Records orthocal interactions while delegating to an inner implementation.
pub struct RecordingOrthocalSource {
    inner: Box<dyn SecondarySource>,
    recorder: SharedRecorder,
}

impl RecordingOrthocalSource {
    /// Creates a new recording source wrapping the given implementation.
    pub fn new(inner: Box<dyn SecondarySource>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

impl SecondarySource for RecordingOrthocalSource {
    fn liturgical_info(&self, date: NaiveDate) -> SourceFuture<'_, LiturgicalInfo> {
        Box::pin(async move {
            let result = self.inner.liturgical_info(date).await;
            record_result(&self.recorder, "orthocal", "liturgical_info", &date, &result);
            result
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::Cassette;
    use crate::cassette::recorder::CassetteRecorder;
    use crate::ports::SourceError;
    use crate::readings::LiturgicalTitle;
    use std::sync::{Arc, Mutex};

    struct FixedSource(Option<LiturgicalInfo>);

    impl SecondarySource for FixedSource {
        fn liturgical_info(&self, _date: NaiveDate) -> SourceFuture<'_, LiturgicalInfo> {
            let result = self.0.clone().ok_or_else(|| SourceError::Replayed("offline".into()));
            Box::pin(async move { result })
        }
    }

    #[tokio::test]
    async fn records_ok_and_err_results() {
        let dir = std::env::temp_dir().join("lectionary_rec_orthocal_test");
        let path = dir.join("orthocal.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "test")));
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

        {
            let info = LiturgicalInfo {
                titles: vec![LiturgicalTitle("Thursday of the 30th week after Pentecost".into())],
                descriptions: vec![],
            };
            let ok = RecordingOrthocalSource::new(
                Box::new(FixedSource(Some(info))),
                Arc::clone(&recorder),
            );
            assert!(ok.liturgical_info(date).await.is_ok());

            let err =
                RecordingOrthocalSource::new(Box::new(FixedSource(None)), Arc::clone(&recorder));
            assert!(err.liturgical_info(date).await.is_err());
        }

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let cassette = Cassette::load(&path).unwrap();
        assert_eq!(cassette.interactions.len(), 2);
        assert_eq!(cassette.interactions[0].input, serde_json::json!("2026-01-01"));
        assert_eq!(
            cassette.interactions[0].output["Ok"]["titles"][0],
            serde_json::json!("Thursday of the 30th week after Pentecost")
        );
        assert_eq!(cassette.interactions[1].output, serde_json::json!({"Err": "offline"}));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
