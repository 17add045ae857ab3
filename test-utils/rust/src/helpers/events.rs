//! Anchor events recovered from `Program data:` log lines

use anchor_lang::{AnchorDeserialize, Discriminator};
use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};

use crate::core::vm::Vm;

const PROGRAM_DATA: &str = "Program data: ";

/// Every `T` event found in `logs`, in emission order
pub fn decode_events<T: Discriminator + AnchorDeserialize>(logs: &[String]) -> Vec<T> {
    logs.iter()
        .filter_map(|log| log.strip_prefix(PROGRAM_DATA))
        .filter_map(|encoded| BASE64_STANDARD.decode(encoded.trim()).ok())
        .filter_map(|bytes| {
            let payload = bytes.strip_prefix(T::DISCRIMINATOR)?;
            T::try_from_slice(payload).ok()
        })
        .collect()
}

impl Vm {
    /// Events of type `T` emitted by the last successful transaction
    pub fn emitted_events<T: Discriminator + AnchorDeserialize>(&self) -> Vec<T> {
        self.last_tx_logs()
            .map(|logs| decode_events(logs))
            .unwrap_or_default()
    }
}
