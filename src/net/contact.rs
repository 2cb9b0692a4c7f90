//! Placeholder contact transport.
//!
//! Waits for the configured delay and reports success. Swapping in a real
//! endpoint means another `ContactSubmitter` impl; the form model does not
//! change.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use pagecore::contact::{ContactMessage, ContactSubmitter};
use pagecore::error::SubmitError;

#[derive(Clone, Copy, Debug)]
pub struct SimulatedSubmitter {
    pub delay_ms: u32,
}

impl SimulatedSubmitter {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

impl ContactSubmitter for SimulatedSubmitter {
    async fn submit(&self, message: &ContactMessage) -> Result<(), SubmitError> {
        log::debug!("sending contact message from {} ({} chars)", message.email, message.message.len());
        #[cfg(feature = "csr")]
        {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(self.delay_ms))).await;
        }
        Ok(())
    }
}
