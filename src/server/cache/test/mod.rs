use std::{
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use crate::server::{
    cache::{CacheAside, CacheStore, MemoryCache, LIST_TTL},
    error::AppError,
};
