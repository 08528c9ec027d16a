//! Background frame decoding.
//!
//! Decoding a few hundred PNGs takes long enough to stall a render thread,
//! so the loader runs on its own thread and delivers results over a
//! channel. The owner drains deliveries between ticks with
//! [`poll`](FrameLoader::poll); [`stop`](FrameLoader::stop) (or dropping
//! the loader) cancels decoding and guarantees nothing further lands in a
//! store.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::JoinHandle;

use super::sequence::{FrameImage, FrameSlot, FrameSource, FrameStore};
use crate::error::CremaError;

/// One delivery from the decode thread.
struct Delivery {
    index: usize,
    slot: FrameSlot,
}

/// Decodes a frame sequence on a background thread.
pub struct FrameLoader {
    rx: Receiver<Delivery>,
    cancel: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
    stopped: bool,
}

impl FrameLoader {
    /// Spawn a decode thread for every frame in `source`.
    ///
    /// Frames are decoded in index order, first frame first, so the
    /// player's first-frame gate opens as early as possible. A frame that
    /// fails to decode is delivered as [`FrameSlot::Failed`] and skipped
    /// at draw time; it is not retried.
    pub fn spawn(source: FrameSource) -> Result<Self, CremaError> {
        let (tx, rx) = mpsc::channel();
        let cancel = Arc::new(AtomicBool::new(false));
        let cancel_flag = Arc::clone(&cancel);
        let handle = std::thread::Builder::new()
            .name(String::from("crema-frame-loader"))
            .spawn(move || {
                for index in 0..source.count() {
                    if cancel_flag.load(Ordering::Relaxed) {
                        return;
                    }
                    let slot = match decode_frame(&source, index) {
                        Ok(image) => FrameSlot::Ready(image),
                        Err(e) => {
                            log::debug!("frame {index} skipped: {e}");
                            FrameSlot::Failed
                        }
                    };
                    if tx.send(Delivery { index, slot }).is_err() {
                        // Receiver gone; nothing left to deliver to.
                        return;
                    }
                }
            })
            .map_err(CremaError::ThreadSpawn)?;
        Ok(Self {
            rx,
            cancel,
            handle: Some(handle),
            stopped: false,
        })
    }

    /// Drain pending deliveries into `store`. Returns how many landed.
    ///
    /// After [`stop`](Self::stop) this never touches the store again.
    pub fn poll(&mut self, store: &mut FrameStore) -> usize {
        if self.stopped {
            return 0;
        }
        let mut applied = 0;
        while let Ok(delivery) = self.rx.try_recv() {
            store.set(delivery.index, delivery.slot);
            applied += 1;
        }
        applied
    }

    /// Cancel decoding and join the worker thread.
    ///
    /// Undelivered results are discarded, so no store mutation can be
    /// observed after this returns. Idempotent.
    pub fn stop(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;
        self.cancel.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("frame loader thread panicked during shutdown");
            }
        }
        while self.rx.try_recv().is_ok() {}
    }
}

impl Drop for FrameLoader {
    fn drop(&mut self) {
        self.stop();
    }
}

fn decode_frame(
    source: &FrameSource,
    index: usize,
) -> Result<FrameImage, CremaError> {
    let path = source.path(index);
    let decoded = image::open(&path).map_err(|e| {
        CremaError::FrameDecode(format!("{}: {e}", path.display()))
    })?;
    let rgba = decoded.into_rgba8();
    let (width, height) = rgba.dimensions();
    FrameImage::new(width, height, rgba.into_raw())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::Duration;

    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("crema-loader-{tag}-{}", std::process::id()));
        let _ = std::fs::create_dir_all(&dir);
        dir
    }

    fn drain_until(
        loader: &mut FrameLoader,
        store: &mut FrameStore,
        expected: usize,
    ) {
        // Worker threads are fast but not instant; bounded wait.
        let mut applied = 0;
        for _ in 0..200 {
            applied += loader.poll(store);
            if applied >= expected {
                return;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(applied >= expected, "loader delivered {applied}/{expected}");
    }

    #[test]
    fn missing_files_settle_as_failed() {
        let source =
            FrameSource::new("/nonexistent/crema-frames", "png", 3, 3);
        let mut store = FrameStore::new(3);
        let Ok(mut loader) = FrameLoader::spawn(source) else {
            unreachable!("loader thread must spawn");
        };
        drain_until(&mut loader, &mut store, 3);

        assert!(store.first_settled());
        assert_eq!(store.ready_count(), 0);
        assert_eq!(store.slot(2), Some(&FrameSlot::Failed));
    }

    #[test]
    fn decodes_real_frames_in_order() {
        let dir = scratch_dir("decode");
        let img = image::RgbaImage::from_pixel(
            4,
            2,
            image::Rgba([10, 20, 30, 255]),
        );
        for name in ["001.png", "002.png"] {
            let Ok(()) = img.save(dir.join(name)) else {
                unreachable!("fixture frame must encode");
            };
        }

        let source = FrameSource::new(&dir, "png", 3, 2);
        let mut store = FrameStore::new(2);
        let Ok(mut loader) = FrameLoader::spawn(source) else {
            unreachable!("loader thread must spawn");
        };
        drain_until(&mut loader, &mut store, 2);

        assert_eq!(store.ready_count(), 2);
        let Some(frame) = store.image(0) else {
            unreachable!("first frame must be ready");
        };
        assert_eq!(frame.size(), (4, 2));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn stop_prevents_any_further_delivery() {
        let source =
            FrameSource::new("/nonexistent/crema-frames", "png", 3, 50);
        let mut store = FrameStore::new(50);
        let Ok(mut loader) = FrameLoader::spawn(source) else {
            unreachable!("loader thread must spawn");
        };
        loader.stop();

        // Whatever the worker managed to send before cancellation was
        // discarded; the store must stay untouched forever after.
        assert_eq!(loader.poll(&mut store), 0);
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(loader.poll(&mut store), 0);
        assert!(!store.first_settled());
        assert_eq!(store.ready_count(), 0);
    }
}
