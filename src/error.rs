// A tiny error type so we don't rely on anyhow/thiserror.
// Every variant states *which stage* of the pipeline went wrong.
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    QrEncode(String),    // Building the QR matrix failed
    LogoMissing(String), // The logo path does not exist on disk
    ImageRead(String),   // Decoding an input image failed
    ImageWrite(String),  // Writing the output PNG failed
}

impl Display for Error {
    // This decides how the error is printed to your console.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::QrEncode(s) => write!(f, "QR encode error: {s}"),
            Error::LogoMissing(p) => write!(f, "Logo not found: {p}"),
            Error::ImageRead(s) => write!(f, "Image read error: {s}"),
            Error::ImageWrite(s) => write!(f, "Image write error: {s}"),
        }
    }
}

// We don't implement std::error::Error for now to keep things minimal.
// It's easy to add later if these routines grow into a library proper.
