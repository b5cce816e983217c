pub(crate) mod decode;
pub(crate) mod kind;
#[cfg(feature = "media-ffmpeg")]
pub(crate) mod scratch;
pub(crate) mod transcode;
