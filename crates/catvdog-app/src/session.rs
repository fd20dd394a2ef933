//! Session controller.
//!
//! Owns the screen state, reads the selected image and hands the upload to
//! a background task. Each task delivers exactly one [`Delivery`] back over
//! a channel; deliveries whose ticket no longer matches the screen are
//! dropped.

use std::path::PathBuf;
use std::sync::Arc;

use catvdog_client::{acquire_image, PredictionClient};
use catvdog_models::{PredictionResult, Screen, ScreenState, Ticket};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::error::AppResult;

/// Result of one submission, tagged with the ticket it was issued under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub ticket: Ticket,
    pub result: PredictionResult,
}

pub struct Session {
    client: Arc<PredictionClient>,
    screen: Screen,
    deliveries_tx: mpsc::UnboundedSender<Delivery>,
    deliveries_rx: mpsc::UnboundedReceiver<Delivery>,
}

impl Session {
    pub fn new(client: Arc<PredictionClient>) -> Self {
        let (deliveries_tx, deliveries_rx) = mpsc::unbounded_channel();
        Self {
            client,
            screen: Screen::new(),
            deliveries_tx,
            deliveries_rx,
        }
    }

    pub fn state(&self) -> &ScreenState {
        self.screen.state()
    }

    /// Pick an image. Any outstanding result is discarded.
    pub fn select_image(&mut self, image: impl Into<PathBuf>) {
        let image = image.into();
        if let ScreenState::Submitting { ticket, .. } = self.screen.state() {
            debug!("Discarding outstanding request {}", ticket);
        }
        info!("Selected image {}", image.display());
        self.screen.select_image(image);
    }

    /// Read the selected image and start classifying it.
    ///
    /// If the image can't be read the screen is left as it was and nothing
    /// is sent.
    pub async fn send(&mut self) -> AppResult<Ticket> {
        let image = self.screen.ready_to_submit()?.to_path_buf();
        let blob = acquire_image(&image).await?;
        let ticket = self.screen.begin_submit()?;

        info!("Submitting {} as {}", image.display(), ticket);

        let client = Arc::clone(&self.client);
        let tx = self.deliveries_tx.clone();
        tokio::spawn(async move {
            let result = client.predict(blob).await;
            if tx.send(Delivery { ticket, result }).is_err() {
                debug!("Session closed before {} resolved", ticket);
            }
        });

        Ok(ticket)
    }

    /// Wait for the next delivery from any submission.
    pub async fn next_delivery(&mut self) -> Option<Delivery> {
        self.deliveries_rx.recv().await
    }

    /// Apply a delivery to the screen. Returns false if it was stale.
    pub fn apply(&mut self, delivery: Delivery) -> bool {
        let Delivery { ticket, result } = delivery;
        let applied = self.screen.resolve(ticket, result);
        if !applied {
            warn!("Ignoring stale result for {}", ticket);
        }
        applied
    }

    /// Wait until the current submission resolves, skipping stale results,
    /// and return whatever result is on screen.
    pub async fn wait_for_result(&mut self) -> Option<&PredictionResult> {
        while self.screen.state().is_loading() {
            let delivery = self.next_delivery().await?;
            self.apply(delivery);
        }
        self.screen.state().result()
    }
}
