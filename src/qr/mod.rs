// QR code rendering and per-environment batching
pub mod batch;
pub mod encoder;

pub use batch::{
    PendingQrBatch, QrBatch, QrImageMap, QrState, SharedEncoder, generate_all, render_batch,
};
pub use encoder::{PngQrEncoder, QrEncoder, QrError, QrImage, QrOptions};
