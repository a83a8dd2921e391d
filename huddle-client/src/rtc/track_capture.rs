use std::sync::Arc;
use tokio::sync::mpsc;
use webrtc::api::media_engine::MIME_TYPE_OPUS;
use webrtc::media::Sample;
use webrtc::rtp_transceiver::rtp_codec::RTCRtpCodecCapability;
use webrtc::track::track_local::TrackLocal;
use webrtc::track::track_local::track_local_static_sample::TrackLocalStaticSample;

/// Captured local audio: an opus track fed from an external sample source.
///
/// Device IO lives outside the crate; any capture pipeline can push encoded
/// samples into the channel handed to [`WebRtcStack::with_source`]. Without a
/// source the track stays silent, which still produces a valid offer.
///
/// [`WebRtcStack::with_source`]: crate::rtc::WebRtcStack::with_source
pub struct TrackCapture {
    track: Arc<TrackLocalStaticSample>,
}

impl TrackCapture {
    pub fn new(source: Option<mpsc::Receiver<Sample>>) -> Self {
        let track = Arc::new(TrackLocalStaticSample::new(
            RTCRtpCodecCapability {
                mime_type: MIME_TYPE_OPUS.to_owned(),
                ..Default::default()
            },
            "audio".to_owned(),
            "huddle-mic".to_owned(),
        ));

        if let Some(mut source) = source {
            let writer = track.clone();
            tokio::spawn(async move {
                while let Some(sample) = source.recv().await {
                    if writer.write_sample(&sample).await.is_err() {
                        break;
                    }
                }
            });
        }

        Self { track }
    }

    pub fn into_track(self) -> Arc<dyn TrackLocal + Send + Sync> {
        self.track
    }
}
