// Pixel-level building blocks shared by the two QR generator binaries.
// Everything is synchronous and stateless: functions take image buffers
// in, mutate or return buffers, and the binaries wire them together in
// one straight line ending at a PNG on disk.

pub mod compose;
pub mod error;
pub mod gradient;
pub mod mask;
pub mod qr;

/// Gradient endpoint color, plain RGB bytes.
pub type Rgb = [u8; 3];
