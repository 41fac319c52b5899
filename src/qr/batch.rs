//! Per-environment QR batches.
//!
//! A batch carries the environment index it was rendered for. The image map is
//! only ever replaced whole, and only by a batch whose tag still matches the
//! selected environment.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use poll_promise::Promise;

use crate::qr::{QrEncoder, QrImage, QrOptions};
use crate::utils::app_time::now;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Resolved URL -> rendered code. Absent while pending or after a failure.
pub type QrImageMap = HashMap<String, Arc<QrImage>>;

/// Encoders handed to a background thread.
pub type SharedEncoder = Arc<dyn QrEncoder + Send + Sync>;

/// Encodes every URL independently. Failures are logged and left out.
pub fn generate_all<E>(urls: &[String], encoder: &E, options: &QrOptions) -> QrImageMap
where
    E: QrEncoder + Sync + ?Sized,
{
    let encode_one = |url: &String| match encoder.encode(url, options) {
        Ok(image) => Some((url.clone(), Arc::new(image))),
        Err(e) => {
            log::error!("Error generating QR code for {}: {}", url, e);
            None
        }
    };

    #[cfg(not(target_arch = "wasm32"))]
    {
        use rayon::prelude::*;
        urls.par_iter().filter_map(encode_one).collect()
    }

    #[cfg(target_arch = "wasm32")]
    {
        urls.iter().filter_map(encode_one).collect()
    }
}

pub struct QrBatch {
    pub environment_index: usize,
    pub images: QrImageMap,
    pub elapsed: Duration,
}

/// Renders one batch synchronously.
pub fn render_batch<E>(
    environment_index: usize,
    urls: &[String],
    encoder: &E,
    options: &QrOptions,
) -> QrBatch
where
    E: QrEncoder + Sync + ?Sized,
{
    let start = now();
    let images = generate_all(urls, encoder, options);
    QrBatch {
        environment_index,
        images,
        elapsed: start.elapsed(),
    }
}

/// A batch in flight.
pub struct PendingQrBatch {
    pub environment_index: usize,
    promise: Promise<QrBatch>,
}

impl PendingQrBatch {
    pub fn spawn(
        environment_index: usize,
        urls: Vec<String>,
        encoder: SharedEncoder,
        options: QrOptions,
    ) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let promise = Promise::spawn_thread("qr_batch", move || {
            render_batch(environment_index, &urls, encoder.as_ref(), &options)
        });

        #[cfg(target_arch = "wasm32")]
        let promise = Promise::from_ready(render_batch(
            environment_index,
            &urls,
            encoder.as_ref(),
            &options,
        ));

        Self {
            environment_index,
            promise,
        }
    }

    /// Finished batch, or the still-pending handle.
    pub fn try_take(self) -> Result<QrBatch, Self> {
        let environment_index = self.environment_index;
        self.promise.try_take().map_err(|promise| Self {
            environment_index,
            promise,
        })
    }
}

/// The committed image map and the environment it belongs to.
#[derive(Default)]
pub struct QrState {
    images: QrImageMap,
    environment_index: Option<usize>,
}

impl QrState {
    pub fn get(&self, url: &str) -> Option<&Arc<QrImage>> {
        self.images.get(url)
    }

    /// Environment the current images were rendered for.
    pub fn environment_index(&self) -> Option<usize> {
        self.environment_index
    }

    /// Swaps in `batch` when it matches `selected`. Returns whether it was kept.
    pub fn commit(&mut self, batch: QrBatch, selected: usize) -> bool {
        if batch.environment_index != selected {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_qr_batches {
                log::info!(
                    "[qr] discarding stale batch for environment {} (selected {})",
                    batch.environment_index,
                    selected
                );
            }
            return false;
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_qr_batches {
            log::info!(
                "[qr] committed {} codes for environment {} in {:.1}ms",
                batch.images.len(),
                batch.environment_index,
                batch.elapsed.as_secs_f64() * 1000.0
            );
        }

        self.images = batch.images;
        self.environment_index = Some(batch.environment_index);
        true
    }

    /// Drops every image. Used when the selection changes.
    pub fn clear(&mut self) {
        self.images.clear();
        self.environment_index = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{catalog, environments, resolve_all};
    use crate::qr::{PngQrEncoder, QrError};

    /// Fails for one specific URL, succeeds with a tiny image for the rest.
    struct FlakyEncoder {
        poison: String,
    }

    impl QrEncoder for FlakyEncoder {
        fn encode(&self, data: &str, _options: &QrOptions) -> Result<QrImage, QrError> {
            if data == self.poison {
                return Err(QrError::Encode("boom".to_string()));
            }
            Ok(QrImage {
                size: 1,
                rgb: vec![0, 0, 0],
            })
        }
    }

    fn urls_for(environment_index: usize) -> Vec<String> {
        resolve_all(catalog(), &environments()[environment_index])
            .into_iter()
            .map(|r| r.url)
            .collect()
    }

    #[test]
    fn one_failure_keeps_the_rest() {
        let urls = urls_for(0);
        let encoder = FlakyEncoder {
            poison: urls[3].clone(),
        };
        let images = generate_all(&urls, &encoder, &QrOptions::default());

        assert_eq!(images.len(), urls.len() - 1);
        assert!(!images.contains_key(&urls[3]));
        for url in urls.iter().filter(|u| **u != urls[3]) {
            assert!(images.contains_key(url), "{url}");
        }
    }

    #[test]
    fn real_encoder_renders_whole_catalog() {
        let urls = urls_for(1);
        let images = generate_all(&urls, &PngQrEncoder, &QrOptions::default());
        assert_eq!(images.len(), urls.len());
    }

    #[test]
    fn stale_batch_is_discarded() {
        let encoder = FlakyEncoder {
            poison: String::new(),
        };
        let mut state = QrState::default();

        let prod = render_batch(0, &urls_for(0), &encoder, &QrOptions::default());
        assert!(state.commit(prod, 0));
        assert_eq!(state.environment_index(), Some(0));

        // A development batch finishing after the user flipped back to production
        let dev = render_batch(1, &urls_for(1), &encoder, &QrOptions::default());
        assert!(!state.commit(dev, 0));
        assert_eq!(state.environment_index(), Some(0));
        assert!(state.get(&urls_for(1)[0]).is_none());
        assert!(state.get(&urls_for(0)[0]).is_some());
    }

    #[test]
    fn commit_replaces_rather_than_merges() {
        let encoder = FlakyEncoder {
            poison: String::new(),
        };
        let mut state = QrState::default();

        assert!(state.commit(render_batch(0, &urls_for(0), &encoder, &QrOptions::default()), 0));
        assert!(state.commit(render_batch(1, &urls_for(1), &encoder, &QrOptions::default()), 1));

        assert!(urls_for(1).iter().all(|u| state.get(u).is_some()));
        assert!(urls_for(0).iter().all(|u| state.get(u).is_none()));
    }

    #[test]
    fn spawned_batch_resolves_with_its_tag() {
        let encoder: SharedEncoder = Arc::new(FlakyEncoder {
            poison: String::new(),
        });
        let mut pending = PendingQrBatch::spawn(1, urls_for(1), encoder, QrOptions::default());
        let batch = loop {
            match pending.try_take() {
                Ok(batch) => break batch,
                Err(still_pending) => {
                    pending = still_pending;
                    std::thread::sleep(Duration::from_millis(5));
                }
            }
        };
        assert_eq!(batch.environment_index, 1);
        assert_eq!(batch.images.len(), catalog().len());
    }
}
