use std::io;

/// Errors returned by [`Root`](crate::root::Root).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Bootstrap could not find the requested mount target. There is no recovery from this.
    #[error("mount target `{0}` does not exist in the document")]
    MountTargetNotFound(String),
    /// The root has nothing mounted: `render` was never called or `unmount` already ran.
    #[error("root is not mounted")]
    NotMounted,
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
