use std::sync::OnceLock;
use std::time::Instant;

static INSTANCE: OnceLock<Singleton> = OnceLock::new();

/// A value of which exactly one instance exists for the life of the process.
#[derive(Debug)]
pub struct Singleton {
    created_at: Instant,
}

impl Singleton {
    /// Returns the process-wide instance, creating it on the first call.
    pub fn get_instance() -> &'static Singleton {
        INSTANCE.get_or_init(|| {
            tracing::debug!("creating singleton instance");
            Singleton {
                created_at: Instant::now(),
            }
        })
    }

    pub fn created_at(&self) -> Instant {
        self.created_at
    }
}
