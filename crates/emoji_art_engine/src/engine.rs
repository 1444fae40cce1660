use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use art_logging::{art_debug, art_error, art_info, art_trace};
use url::Url;

use crate::decode::{decode_image, DecodedImage};
use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::{EngineEvent, FailureKind};

enum EngineCommand {
    FetchBackground { url: Url },
}

/// Runs background fetches on a worker thread and hands completions back to
/// whoever owns the handle. In-flight fetches are never cancelled.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> io::Result<Self> {
        Self::with_fetcher(Arc::new(ReqwestFetcher::new(settings)))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("emoji-art-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let fetcher = fetcher.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(fetcher.as_ref(), command, event_tx).await;
                    });
                }
                art_debug!("Engine command channel closed");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    /// Queues a fetch. Returns `false` when the worker is gone and the request
    /// was dropped; no completion will follow in that case.
    pub fn fetch_background(&self, url: Url) -> bool {
        art_trace!("Queueing background fetch {}", url);
        match self.cmd_tx.send(EngineCommand::FetchBackground { url }) {
            Ok(()) => true,
            Err(mpsc::SendError(EngineCommand::FetchBackground { url })) => {
                art_error!("Engine worker is gone, dropping fetch for {}", url);
                false
            }
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchBackground { url } => {
            let result = fetch_and_decode(fetcher, &url).await;
            match &result {
                Ok(image) => art_info!(
                    "Fetched background {} ({}x{})",
                    url,
                    image.width,
                    image.height
                ),
                Err(kind) => art_info!("Background fetch for {} failed: {}", url, kind),
            }
            let _ = event_tx.send(EngineEvent::BackgroundFetched { url, result });
        }
    }
}

async fn fetch_and_decode(fetcher: &dyn Fetcher, url: &Url) -> Result<DecodedImage, FailureKind> {
    let output = fetcher.fetch(url).await.map_err(|err| err.kind)?;
    tokio::task::spawn_blocking(move || decode_image(&output.bytes))
        .await
        .map_err(|_| FailureKind::Decode)?
        .map_err(|_| FailureKind::Decode)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::time::Duration;

    use bytes::Bytes;
    use url::Url;

    use super::EngineHandle;
    use crate::decode::tests::png_bytes;
    use crate::{EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput, Fetcher};

    struct MapFetcher {
        bodies: HashMap<String, Vec<u8>>,
    }

    #[async_trait::async_trait]
    impl Fetcher for MapFetcher {
        async fn fetch(&self, url: &Url) -> Result<FetchOutput, FetchError> {
            let body = self
                .bodies
                .get(url.as_str())
                .cloned()
                .ok_or_else(|| FetchError::new(FailureKind::HttpStatus(404), "missing"))?;
            Ok(FetchOutput {
                metadata: FetchMetadata {
                    original_url: url.to_string(),
                    final_url: url.to_string(),
                    content_type: None,
                    byte_len: body.len() as u64,
                },
                bytes: Bytes::from(body),
            })
        }
    }

    fn engine() -> EngineHandle {
        let mut bodies = HashMap::new();
        bodies.insert("https://img.example/ok.png".to_string(), png_bytes(4, 3));
        bodies.insert("https://img.example/junk".to_string(), b"junk".to_vec());
        EngineHandle::with_fetcher(Arc::new(MapFetcher { bodies })).unwrap()
    }

    fn next(engine: &EngineHandle) -> EngineEvent {
        engine.recv_timeout(Duration::from_secs(5)).expect("engine event")
    }

    #[test]
    fn fetch_is_decoded_on_the_worker() {
        let engine = engine();
        let url = Url::parse("https://img.example/ok.png").unwrap();
        engine.fetch_background(url.clone());

        let EngineEvent::BackgroundFetched { url: done, result } = next(&engine);
        assert_eq!(done, url);
        let image = result.unwrap();
        assert_eq!((image.width, image.height), (4, 3));
    }

    #[test]
    fn transport_and_decode_failures_are_reported() {
        let engine = engine();
        engine.fetch_background(Url::parse("https://img.example/missing").unwrap());
        let EngineEvent::BackgroundFetched { result, .. } = next(&engine);
        assert_eq!(result, Err(FailureKind::HttpStatus(404)));

        engine.fetch_background(Url::parse("https://img.example/junk").unwrap());
        let EngineEvent::BackgroundFetched { result, .. } = next(&engine);
        assert_eq!(result, Err(FailureKind::Decode));
    }

    #[test]
    fn fetch_is_refused_once_the_worker_is_gone() {
        let (cmd_tx, cmd_rx) = std::sync::mpsc::channel();
        let (_event_tx, event_rx) = std::sync::mpsc::channel();
        drop(cmd_rx);
        let engine = EngineHandle { cmd_tx, event_rx };

        assert!(!engine.fetch_background(Url::parse("https://img.example/ok.png").unwrap()));
        assert!(engine.try_recv().is_none());
    }

    #[test]
    fn fetch_is_accepted_by_a_live_worker() {
        assert!(engine().fetch_background(Url::parse("https://img.example/ok.png").unwrap()));
    }

    #[test]
    fn try_recv_is_empty_without_work() {
        assert!(engine().try_recv().is_none());
    }
}
