//! Data shared by every frame kind: the opaque channel handle a frame was
//! seen on (or is destined for) and the memo used when deep-copying frames.
//!
//! The channel is owned by the caller. This crate only compares it and
//! renders it as text.
use alloc::{borrow::Cow, collections::BTreeMap, string::String, sync::Arc, vec::Vec};

//==================================================================================CHANNEL
#[derive(Debug, Clone, PartialEq, Eq)]
/// Opaque identifier of the bus interface associated with a frame.
pub enum Channel {
    /// Numeric interface index (e.g. `0` for the first adapter port).
    Index(i64),
    /// Interface name (e.g. `"can0"`, `"vcan1"`).
    Name(String),
    /// Raw handle bytes handed over by a device driver.
    Device(Vec<u8>),
    /// Caller token shared between many frames. `Clone` aliases it.
    Shared(Arc<Channel>),
}

impl Channel {
    /// Wrap a channel so that every frame cloned from this one aliases it.
    pub fn shared(inner: Channel) -> Self {
        Channel::Shared(Arc::new(inner))
    }

    /// Text used by the frame summary line, `None` when the channel has no
    /// printable form (driver bytes that are not UTF-8).
    pub fn label(&self) -> Option<Cow<'_, str>> {
        match self {
            Channel::Index(index) => Some(Cow::Owned(alloc::format!("{index}"))),
            Channel::Name(name) => Some(Cow::Borrowed(name.as_str())),
            Channel::Device(bytes) => core::str::from_utf8(bytes).ok().map(Cow::Borrowed),
            Channel::Shared(inner) => inner.label(),
        }
    }

    /// Duplicate this channel. Shared tokens already duplicated through `memo`
    /// are reused, so copies keep the sharing structure of the originals.
    pub fn deep_copy(&self, memo: &mut CopyMemo) -> Channel {
        match self {
            Channel::Shared(token) => {
                let key = Arc::as_ptr(token) as usize;
                if let Some((_, copied)) = memo.channels.get(&key) {
                    return Channel::Shared(Arc::clone(copied));
                }
                let copied = Arc::new(token.deep_copy(memo));
                memo.channels
                    .insert(key, (Arc::clone(token), Arc::clone(&copied)));
                Channel::Shared(copied)
            }
            other => other.clone(),
        }
    }
}

impl From<i64> for Channel {
    fn from(index: i64) -> Self {
        Channel::Index(index)
    }
}

impl From<i32> for Channel {
    fn from(index: i32) -> Self {
        Channel::Index(index.into())
    }
}

impl From<u32> for Channel {
    fn from(index: u32) -> Self {
        Channel::Index(index.into())
    }
}

impl From<&str> for Channel {
    fn from(name: &str) -> Self {
        Channel::Name(name.into())
    }
}

impl From<String> for Channel {
    fn from(name: String) -> Self {
        Channel::Name(name)
    }
}

//==================================================================================COPY_MEMO
#[derive(Debug, Default)]
/// Visited set for one deep-copy pass.
///
/// Maps the address of each shared token met so far to its copy. The
/// original is kept alive alongside so its address cannot be reused by a
/// new allocation while the memo exists.
pub struct CopyMemo {
    channels: BTreeMap<usize, (Arc<Channel>, Arc<Channel>)>,
}

impl CopyMemo {
    /// Start an empty copy pass.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct shared tokens duplicated so far.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// True when no shared token has been duplicated yet.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
